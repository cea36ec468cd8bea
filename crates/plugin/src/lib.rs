//! InsaneKick
//!
//! Kicks players from the server when they die. Deaths are counted per
//! player; after `kick-delay` seconds of on-screen countdown the player is
//! disconnected with the configured message, and holders of
//! `@insanekick/notify` are told about it.
//!
//! # Usage
//!
//! ```ignore
//! use insanekick::InsaneKick;
//! use insanekick_core::{Host, Plugin};
//!
//! let host = Host::new(engine, Arc::new(SystemClock), "config");
//! let mut plugin = InsaneKick::new();
//! plugin.load(&host)?;
//!
//! loop {
//!     // host fires events and dispatches commands, then:
//!     host.run_frame();
//! }
//! ```

pub mod commands;
pub mod config;
pub mod kick;
pub mod listener;
pub mod logging;
pub mod messages;
pub mod state;

use std::sync::Arc;
use std::time::Instant;

use insanekick_core::{CommandKey, ConfigError, Host, Plugin, PluginConfig, PluginError};

pub use commands::{AdminCommand, ADMIN_PERMISSION};
pub use config::KickConfig;
pub use kick::{KickCountdown, KickPhase, KickStep, NOTIFY_PERMISSION};
pub use listener::DeathListener;
pub use logging::LogHandle;
pub use state::{DeathRecord, PluginState, SharedState};

struct Loaded {
    state: SharedState,
    listener: DeathListener,
    command: Option<CommandKey>,
}

/// The plugin
#[derive(Default)]
pub struct InsaneKick {
    loaded: Option<Loaded>,
}

impl InsaneKick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Shared state while loaded
    pub fn state(&self) -> Option<&SharedState> {
        self.loaded.as_ref().map(|l| &l.state)
    }

    /// Death listener while loaded
    pub fn listener(&self) -> Option<&DeathListener> {
        self.loaded.as_ref().map(|l| &l.listener)
    }

    /// Read the config, falling back to defaults when the file doesn't parse
    fn load_config(host: &Host) -> Result<KickConfig, PluginError> {
        match KickConfig::load(host.config_dir()) {
            Ok(config) => Ok(config),
            Err(ConfigError::ParseError(e)) => {
                tracing::error!(
                    "Invalid config at {:?}, using defaults: {}",
                    KickConfig::path(host.config_dir()),
                    e
                );
                Ok(KickConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Plugin for InsaneKick {
    fn name(&self) -> &str {
        "InsaneKick"
    }

    fn load(&mut self, host: &Host) -> Result<(), PluginError> {
        if self.loaded.is_some() {
            return Err(PluginError::AlreadyLoaded(self.name().to_string()));
        }

        let start = Instant::now();

        let config = Self::load_config(host)?;
        let debug_mode = config.debug_mode;
        let log = logging::init(debug_mode);
        tracing::info!("Configuration loaded");

        let state = PluginState::new(config, Arc::clone(host.clock())).shared();

        let listener = DeathListener::new(host.clone(), Arc::clone(&state));
        listener.register();
        tracing::info!("Death listener registered");

        let command = AdminCommand::new(host.clone(), Arc::clone(&state), listener.clone(), log).register();
        if command.is_none() {
            tracing::warn!("Command '{}' is already taken", commands::COMMAND_NAME);
        }

        tracing::info!("================================");
        tracing::info!("InsaneKick v{}", commands::VERSION);
        tracing::info!("Authors: {}", commands::authors());
        tracing::info!("Status: ACTIVE");
        tracing::info!("Loaded in {}ms", start.elapsed().as_millis());
        tracing::info!("================================");
        if debug_mode {
            tracing::warn!("Debug mode is ENABLED!");
        }

        self.loaded = Some(Loaded {
            state,
            listener,
            command,
        });
        Ok(())
    }

    fn unload(&mut self, host: &Host) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };

        tracing::info!("================================");
        tracing::info!("InsaneKick shutting down...");

        loaded.listener.unregister();
        if let Some(key) = loaded.command {
            host.commands().unregister(key);
        }
        loaded.state.write().clear_deaths();
        tracing::info!("Data cleared");

        tracing::info!("Plugin disabled successfully!");
        tracing::info!("================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insanekick_core::events::EventPlayerDeath;
    use insanekick_core::{CommandResult, ManualClock};
    use insanekick_engine::testing::FakeServer;
    use insanekick_engine::EngineHandle;
    use insanekick_sdk::{Location, PlayerId, PlayerInfo};
    use std::path::Path;
    use std::time::Duration;

    const STEVE: PlayerId = PlayerId(1);
    const ADMIN: PlayerId = PlayerId(2);

    struct Fixture {
        _dir: tempfile::TempDir,
        host: Host,
        clock: ManualClock,
        server: Arc<FakeServer>,
        plugin: InsaneKick,
    }

    impl Fixture {
        fn config_dir(&self) -> &Path {
            self.host.config_dir()
        }

        fn saved_config(&self) -> KickConfig {
            KickConfig::load(self.config_dir()).unwrap()
        }

        fn state(&self) -> &SharedState {
            self.plugin.state().unwrap()
        }

        fn admin_replies(&self) -> Vec<String> {
            self.server.messages_for(ADMIN)
        }
    }

    fn fixture_with(config: Option<&str>) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = config {
            let path = KickConfig::path(dir.path());
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }

        let clock = ManualClock::new();
        let server = Arc::new(FakeServer::new());
        server.add_player(PlayerInfo::new(STEVE, "Steve", Location::new("world", 10.2, 64.0, -3.7)));
        server.add_player(PlayerInfo::new(ADMIN, "Admin", Location::default()));

        let host = Host::new(EngineHandle::new(server.clone()), Arc::new(clock.clone()), dir.path());
        host.permissions().add_permissions(ADMIN, &[ADMIN_PERMISSION]);

        let mut plugin = InsaneKick::new();
        plugin.load(&host).unwrap();

        Fixture {
            _dir: dir,
            host,
            clock,
            server,
            plugin,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(None)
    }

    fn die(f: &Fixture) {
        f.host.events().fire_typed(&EventPlayerDeath {
            userid: STEVE,
            message: None,
        });
    }

    #[test]
    fn test_load_creates_default_config() {
        let f = fixture();
        assert!(KickConfig::path(f.config_dir()).exists());
        assert_eq!(f.saved_config(), KickConfig::default());
        assert!(f.host.commands().find_by_name("insanekick").is_some());
    }

    #[test]
    fn test_load_twice_fails() {
        let mut f = fixture();
        let host = f.host.clone();
        assert!(matches!(f.plugin.load(&host), Err(PluginError::AlreadyLoaded(_))));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let f = fixture_with(Some("kick-delay = \"soon\""));
        assert_eq!(f.state().read().kick_delay(), 0);
    }

    #[test]
    fn test_death_to_kick_end_to_end() {
        let f = fixture_with(Some("kick-delay = 2\nkick-message = \"Bye!\"\n"));
        die(&f);

        f.host.run_frame();
        f.clock.advance(Duration::from_secs(1));
        f.host.run_frame();
        assert!(f.server.kicks().is_empty());
        f.clock.advance(Duration::from_secs(1));
        f.host.run_frame();

        assert_eq!(f.server.titles_for(STEVE).len(), 2);
        assert_eq!(f.server.kicks(), vec![(STEVE, "Bye!".to_string())]);
        assert_eq!(f.plugin.listener().unwrap().death_count(STEVE), 1);
    }

    #[test]
    fn test_command_denied_without_permission() {
        let f = fixture();
        let result = f.host.commands().dispatch_client(STEVE, "insanekick toggle");

        assert_eq!(result, CommandResult::Handled);
        assert!(f.state().read().is_enabled());
        let replies = f.server.messages_for(STEVE);
        assert_eq!(replies.len(), 1);
        assert!(replies[0].contains(ADMIN_PERMISSION));
    }

    #[test]
    fn test_toggle_persists() {
        let f = fixture();
        f.host.commands().dispatch_client(ADMIN, "insanekick toggle");
        assert!(!f.state().read().is_enabled());
        assert!(!f.saved_config().enabled);
        assert!(f.admin_replies()[0].contains("DISABLED"));

        // Disabled: deaths are ignored
        die(&f);
        f.host.run_frame();
        assert!(f.server.kicks().is_empty());
        assert_eq!(f.state().read().death_count(STEVE), 0);

        f.host.commands().dispatch_console("insanekick toggle");
        assert!(f.saved_config().enabled);
    }

    #[test]
    fn test_debug_persists() {
        let f = fixture();
        f.host.commands().dispatch_chat(ADMIN, "/insanekick debug");
        assert!(f.state().read().is_debug());
        assert!(f.saved_config().debug_mode);
    }

    #[test]
    fn test_reload_picks_up_edits() {
        let f = fixture();
        std::fs::write(KickConfig::path(f.config_dir()), "kick-delay = 7\n").unwrap();

        f.host.commands().dispatch_console("insanekick reload");
        assert_eq!(f.state().read().kick_delay(), 7);
    }

    #[test]
    fn test_reload_keeps_config_on_error() {
        let f = fixture_with(Some("kick-delay = 4\n"));
        std::fs::write(KickConfig::path(f.config_dir()), "kick-delay = [").unwrap();

        f.host.commands().dispatch_client(ADMIN, "insanekick reload");
        assert_eq!(f.state().read().kick_delay(), 4);
        assert!(f.admin_replies()[0].contains("Failed to reload"));
    }

    #[test]
    fn test_stats_and_info() {
        let f = fixture();
        die(&f);
        f.clock.advance(Duration::from_secs(3_600 + 120));

        f.host.commands().dispatch_client(ADMIN, "insanekick stats");
        let replies = f.admin_replies();
        assert!(replies.contains(&"&7Players online: &f2/20".to_string()));
        assert!(replies.contains(&"&7Recorded deaths: &f1".to_string()));
        assert!(replies.contains(&"&7Uptime: &f0d 1h 2m".to_string()));

        f.server.clear_actions();
        f.host.commands().dispatch_client(ADMIN, "insanekick info");
        let replies = f.admin_replies();
        assert!(replies.contains(&"&7Server: &fFakeServer 1.0-test".to_string()));
        assert!(replies.contains(&"&7Kick delay: &f0s".to_string()));
        assert!(replies.contains(&format!("&7Version: &f{}", commands::VERSION)));
    }

    #[test]
    fn test_reset_one_or_all() {
        let f = fixture_with(Some("kick-delay = 30\n"));
        die(&f);
        f.host.events().fire_typed(&EventPlayerDeath {
            userid: ADMIN,
            message: None,
        });

        f.host.commands().dispatch_console("insanekick reset steve");
        assert_eq!(f.state().read().death_count(STEVE), 0);
        assert_eq!(f.state().read().death_count(ADMIN), 1);

        f.host.commands().dispatch_client(ADMIN, "insanekick reset Nobody");
        assert!(f.admin_replies()[0].contains("Nobody"));

        f.host.commands().dispatch_console("insanekick reset");
        assert_eq!(f.state().read().recorded_deaths(), 0);
    }

    #[test]
    fn test_help_and_unknown_subcommand() {
        let f = fixture();
        f.host.commands().dispatch_client(ADMIN, "insanekick");
        let help = f.admin_replies();
        assert!(help.iter().any(|l| l.contains("/insanekick reload")));

        f.server.clear_actions();
        f.host.commands().dispatch_client(ADMIN, "insanekick frobnicate");
        assert_eq!(f.admin_replies(), vec![messages::prefixed("&cUnknown command! Use: &f/insanekick help")]);
    }

    #[test]
    fn test_unload_cleans_up() {
        let mut f = fixture_with(Some("kick-delay = 5\n"));
        die(&f);
        let state = Arc::clone(f.state());
        let host = f.host.clone();

        f.plugin.unload(&host);
        assert!(!f.plugin.is_loaded());
        assert!(host.timers().is_empty());
        assert!(host.commands().find_by_name("insanekick").is_none());
        assert_eq!(host.events().handler_count("player_death"), 0);
        assert_eq!(state.read().recorded_deaths(), 0);

        // Loading again works after unload
        f.plugin.load(&host).unwrap();
        assert!(f.plugin.is_loaded());
    }
}
