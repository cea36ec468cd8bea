//! `insanekick` admin command
//!
//! ```text
//! insanekick [reload|info|toggle|debug|stats|reset [player]|help]
//! ```
//!
//! Reachable from the server console, a client console, `!insanekick`
//! and `/insanekick`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use insanekick_core::{CommandInfo, CommandKey, CommandResult, Host, PluginConfig};
use insanekick_sdk::PlayerId;

use crate::listener::DeathListener;
use crate::logging::LogHandle;
use crate::messages::{self, InfoSummary};
use crate::state::SharedState;

pub const COMMAND_NAME: &str = "insanekick";

/// Permission required to run the command (console always passes)
pub const ADMIN_PERMISSION: &str = "@insanekick/admin";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cargo joins multiple authors with ':'
pub fn authors() -> String {
    env!("CARGO_PKG_AUTHORS").replace(':', ", ")
}

/// Everything the admin command touches
pub struct AdminCommand {
    host: Host,
    state: SharedState,
    listener: DeathListener,
    log: LogHandle,
    config_dir: PathBuf,
}

impl AdminCommand {
    pub fn new(host: Host, state: SharedState, listener: DeathListener, log: LogHandle) -> Self {
        let config_dir = host.config_dir().to_path_buf();
        Self {
            host,
            state,
            listener,
            log,
            config_dir,
        }
    }

    /// Register with the host's command manager
    pub fn register(self) -> Option<CommandKey> {
        let command = Arc::new(self);
        let commands = Arc::clone(command.host.commands());
        commands.register(COMMAND_NAME, Some(ADMIN_PERMISSION), move |sender, info| {
            command.execute(sender, info)
        })
    }

    pub fn execute(&self, sender: Option<PlayerId>, info: &CommandInfo) -> CommandResult {
        match info.arg(1).to_lowercase().as_str() {
            "" | "help" => self.help(info),
            "reload" => self.reload(sender, info),
            "info" => self.info(info),
            "toggle" => self.toggle(sender, info),
            "debug" => self.debug(sender, info),
            "stats" => self.stats(info),
            "reset" => self.reset(sender, info),
            _ => info.reply(&messages::unknown_subcommand()),
        }
        CommandResult::Handled
    }

    fn sender_name(&self, sender: Option<PlayerId>) -> String {
        match sender {
            Some(id) => self.host.engine().player_name(id),
            None => "Console".to_string(),
        }
    }

    fn reply_lines(info: &CommandInfo, lines: Vec<String>) {
        for line in lines {
            info.reply(&line);
        }
    }

    fn help(&self, info: &CommandInfo) {
        Self::reply_lines(info, messages::help(VERSION, &authors()));
    }

    fn reload(&self, sender: Option<PlayerId>, info: &CommandInfo) {
        let start = Instant::now();

        let mut config = self.state.read().config().clone();
        if let Err(e) = config.reload(&self.config_dir) {
            tracing::error!("Failed to reload config: {}", e);
            info.reply(&messages::prefixed(&format!("&cFailed to reload configuration: &f{}", e)));
            return;
        }

        let debug_mode = config.debug_mode;
        self.state.write().replace_config(config);
        self.log.set_debug(debug_mode);

        let elapsed = start.elapsed().as_millis();
        info.reply(&messages::prefixed("&aConfiguration reloaded successfully!"));
        info.reply(&messages::prefixed(&format!("&7Reload time: &f{}ms", elapsed)));
        tracing::info!("{} reloaded the configuration", self.sender_name(sender));
    }

    fn info(&self, info: &CommandInfo) {
        let (enabled, debug, kick_delay) = {
            let state = self.state.read();
            (state.is_enabled(), state.is_debug(), state.kick_delay())
        };
        let server = self.host.engine().server();
        let (server_name, server_version) = (server.name(), server.version());
        let authors = authors();

        Self::reply_lines(
            info,
            messages::info(&InfoSummary {
                version: VERSION,
                authors: &authors,
                enabled,
                debug,
                kick_delay,
                server_name: &server_name,
                server_version: &server_version,
            }),
        );
    }

    /// Write the current config back to disk, reporting failures to the invoker
    fn persist(&self, info: &CommandInfo) {
        let config = self.state.read().config().clone();
        if let Err(e) = config.save(&self.config_dir) {
            tracing::error!("Failed to save config: {}", e);
            info.reply(&messages::prefixed(&format!("&cFailed to save configuration: &f{}", e)));
        }
    }

    fn toggle(&self, sender: Option<PlayerId>, info: &CommandInfo) {
        let enabled = {
            let mut state = self.state.write();
            let enabled = !state.is_enabled();
            state.set_enabled(enabled);
            enabled
        };
        self.persist(info);

        let status = if enabled { "&aENABLED" } else { "&cDISABLED" };
        info.reply(&messages::prefixed(&format!("&7Plugin has been {}&7!", status)));
        tracing::info!("{} set plugin enabled to {}", self.sender_name(sender), enabled);
    }

    fn debug(&self, sender: Option<PlayerId>, info: &CommandInfo) {
        let debug_mode = {
            let mut state = self.state.write();
            let debug_mode = !state.is_debug();
            state.set_debug(debug_mode);
            debug_mode
        };
        self.persist(info);
        self.log.set_debug(debug_mode);

        let status = if debug_mode { "&eENABLED" } else { "&cDISABLED" };
        info.reply(&messages::prefixed(&format!("&7Debug mode has been {}&7!", status)));
        tracing::info!("{} set debug mode to {}", self.sender_name(sender), debug_mode);
    }

    fn stats(&self, info: &CommandInfo) {
        let server = self.host.engine().server();
        let (recorded, uptime) = {
            let state = self.state.read();
            (state.recorded_deaths(), state.uptime())
        };

        Self::reply_lines(
            info,
            messages::stats(server.online_players().len(), server.max_players(), recorded, uptime),
        );
    }

    fn reset(&self, sender: Option<PlayerId>, info: &CommandInfo) {
        let target = info.arg(2);

        if target.is_empty() {
            self.listener.clear_all();
            info.reply(&messages::prefixed("&aAll death statistics have been cleared!"));
            tracing::info!("{} cleared all death statistics", self.sender_name(sender));
            return;
        }

        let Some(player) = self.host.engine().find_player_by_name(target) else {
            info.reply(&messages::prefixed(&format!("&cPlayer &f{} &cis not online!", target)));
            return;
        };

        self.listener.reset(player.id);
        info.reply(&messages::prefixed(&format!(
            "&aDeath statistics for &f{} &ahave been cleared!",
            player.name
        )));
        tracing::info!("{} reset death statistics for {}", self.sender_name(sender), player.name);
    }
}
