//! Command invocation types

use insanekick_engine::EngineHandle;
use insanekick_sdk::PlayerId;

/// Where a command line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandContext {
    ServerConsole,
    ClientConsole,
    /// `!name` in chat
    ChatPublic,
    /// `/name` in chat
    ChatSilent,
}

/// Result of command execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a known command, let the host handle the input
    #[default]
    Continue,
    /// Command was handled, stop processing
    Handled,
}

/// One command invocation as seen by its callback
pub struct CommandInfo {
    /// Whitespace-split line; index 0 is the command name as typed
    args: Vec<String>,
    sender: Option<PlayerId>,
    context: CommandContext,
    engine: EngineHandle,
}

impl CommandInfo {
    pub fn new(args: Vec<String>, sender: Option<PlayerId>, context: CommandContext, engine: EngineHandle) -> Self {
        Self {
            args,
            sender,
            context,
            engine,
        }
    }

    /// Argument by index, or `""` past the end
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn command_name(&self) -> &str {
        self.arg(0)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// `None` for the server console
    pub fn sender(&self) -> Option<PlayerId> {
        self.sender
    }

    pub fn context(&self) -> CommandContext {
        self.context
    }

    /// Answer the invoker
    ///
    /// Players get a chat message, the server console gets a log line.
    pub fn reply(&self, message: &str) {
        match self.sender {
            Some(player) => self.engine.server().send_message(player, message),
            None => tracing::info!("[Server] {}", message),
        }
    }
}

pub type CommandCallback = Box<dyn Fn(Option<PlayerId>, &CommandInfo) -> CommandResult + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use insanekick_engine::testing::FakeServer;
    use insanekick_sdk::{Location, PlayerInfo};
    use std::sync::Arc;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_args_past_the_end_are_empty() {
        let engine = EngineHandle::new(Arc::new(FakeServer::new()));
        let info = CommandInfo::new(args("insanekick reset Steve"), None, CommandContext::ServerConsole, engine);

        assert_eq!(info.command_name(), "insanekick");
        assert_eq!(info.arg(1), "reset");
        assert_eq!(info.arg(2), "Steve");
        assert_eq!(info.arg(3), "");
        assert!(info.sender().is_none());
    }

    #[test]
    fn test_reply_goes_to_player_chat() {
        let server = Arc::new(FakeServer::new());
        let id = PlayerId(7);
        server.add_player(PlayerInfo::new(id, "Alex", Location::default()));

        let info = CommandInfo::new(
            args("insanekick"),
            Some(id),
            CommandContext::ChatSilent,
            EngineHandle::new(server.clone()),
        );
        info.reply("hello");

        assert_eq!(server.messages_for(id), vec!["hello".to_string()]);
    }
}
