//! Host context handed to plugins
//!
//! Bundles the server handle and the framework registries. Cloning is
//! cheap; every clone shares the same registries.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use insanekick_engine::EngineHandle;

use crate::clock::Clock;
use crate::commands::CommandManager;
use crate::events::EventManager;
use crate::permissions::PermissionRegistry;
use crate::timers::Timers;


/// Everything a plugin may call into
#[derive(Clone)]
pub struct Host {
    engine: EngineHandle,
    clock: Arc<dyn Clock>,
    timers: Arc<Timers>,
    events: Arc<EventManager>,
    commands: Arc<CommandManager>,
    permissions: Arc<PermissionRegistry>,
    config_dir: PathBuf,
}

impl Host {
    /// Create a host around a server, a clock and a config root
    pub fn new(engine: EngineHandle, clock: Arc<dyn Clock>, config_dir: impl Into<PathBuf>) -> Self {
        let permissions = Arc::new(PermissionRegistry::new());
        let commands = Arc::new(CommandManager::new(engine.clone(), Arc::clone(&permissions)));

        Self {
            timers: Arc::new(Timers::new(Arc::clone(&clock))),
            events: Arc::new(EventManager::new()),
            commands,
            permissions,
            engine,
            clock,
            config_dir: config_dir.into(),
        }
    }

    /// Run one iteration of the frame loop
    ///
    /// Processes due timers and returns how many callbacks fired.
    pub fn run_frame(&self) -> usize {
        let start = Instant::now();

        let fired = self.timers.process();

        // Log slow frames (> 1ms)
        let elapsed = start.elapsed();
        if elapsed.as_micros() > 1_000 {
            tracing::warn!("Slow frame: {}μs ({} timers fired)", elapsed.as_micros(), fired);
        }

        fired
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn timers(&self) -> &Arc<Timers> {
        &self.timers
    }

    pub fn events(&self) -> &Arc<EventManager> {
        &self.events
    }

    pub fn commands(&self) -> &Arc<CommandManager> {
        &self.commands
    }

    pub fn permissions(&self) -> &Arc<PermissionRegistry> {
        &self.permissions
    }

    /// Root directory for plugin config files
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("engine", &self.engine)
            .field("config_dir", &self.config_dir)
            .field("timers", &self.timers.len())
            .finish()
    }
}
