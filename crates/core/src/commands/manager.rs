//! Command manager - registration and dispatch

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use insanekick_engine::EngineHandle;
use insanekick_sdk::PlayerId;

use super::chat::{parse_command_line, split_trigger};
use super::info::{CommandCallback, CommandContext, CommandInfo, CommandResult};
use crate::permissions::PermissionRegistry;

new_key_type! {
    /// Handle for a registered command
    pub struct CommandKey;
}

struct CommandEntry {
    /// Name as registered
    name: String,
    callback: Arc<CommandCallback>,
    /// Checked for players only
    required_permission: Option<String>,
}

#[derive(Default)]
struct Registry {
    commands: SlotMap<CommandKey, CommandEntry>,
    /// Lowercase name -> key
    by_name: HashMap<String, CommandKey>,
}

/// Outcome of feeding a chat line through the command system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatDispatch {
    /// No trigger, or the trigger named no registered command
    NotACommand,
    /// A command ran
    Executed { silent: bool, result: CommandResult },
}

impl ChatDispatch {
    /// Whether the host should still show the original chat line
    pub fn should_broadcast(&self) -> bool {
        match self {
            Self::NotACommand => true,
            Self::Executed { silent, .. } => !silent,
        }
    }
}

/// Command manager
pub struct CommandManager {
    registry: RwLock<Registry>,
    permissions: Arc<PermissionRegistry>,
    engine: EngineHandle,
}

impl CommandManager {
    pub fn new(engine: EngineHandle, permissions: Arc<PermissionRegistry>) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            permissions,
            engine,
        }
    }

    /// Register a command
    ///
    /// `name` is case-insensitive. Players need `permission` when one is
    /// given; the server console always passes. Returns `None` if the name
    /// is taken.
    pub fn register<F>(&self, name: &str, permission: Option<&str>, callback: F) -> Option<CommandKey>
    where
        F: Fn(Option<PlayerId>, &CommandInfo) -> CommandResult + Send + Sync + 'static,
    {
        let name_lower = name.to_lowercase();
        let mut registry = self.registry.write();

        if registry.by_name.contains_key(&name_lower) {
            tracing::warn!("Command '{}' already registered", name);
            return None;
        }

        let callback: CommandCallback = Box::new(callback);
        let key = registry.commands.insert(CommandEntry {
            name: name.to_string(),
            callback: Arc::new(callback),
            required_permission: permission.map(str::to_string),
        });
        registry.by_name.insert(name_lower, key);

        tracing::debug!("Registered command: {}", name);
        Some(key)
    }

    /// Unregister a command by key
    pub fn unregister(&self, key: CommandKey) -> bool {
        let mut registry = self.registry.write();
        let Some(entry) = registry.commands.remove(key) else {
            return false;
        };
        registry.by_name.remove(&entry.name.to_lowercase());
        tracing::debug!("Unregistered command: {}", entry.name);
        true
    }

    pub fn find_by_name(&self, name: &str) -> Option<CommandKey> {
        self.registry.read().by_name.get(&name.to_lowercase()).copied()
    }

    /// Execute a command by key
    ///
    /// The callback runs without the registry lock held.
    fn execute(&self, key: CommandKey, info: &CommandInfo) -> CommandResult {
        let (callback, permission) = {
            let registry = self.registry.read();
            let Some(entry) = registry.commands.get(key) else {
                return CommandResult::Continue;
            };
            (Arc::clone(&entry.callback), entry.required_permission.clone())
        };

        let sender = info.sender();

        // Server console always has permission
        if let (Some(permission), Some(player)) = (permission, sender) {
            if !self.permissions.has_permission(player, &permission) {
                tracing::debug!(
                    "Denied '{}' to {}: missing {}",
                    info.command_name(),
                    player,
                    permission
                );
                info.reply(&format!(
                    "You don't have permission to use this command. Required: {}",
                    permission
                ));
                return CommandResult::Handled;
            }
        }

        callback(sender, info)
    }

    fn dispatch(&self, sender: Option<PlayerId>, context: CommandContext, line: &str) -> CommandResult {
        let (name, args) = parse_command_line(line);
        if name.is_empty() {
            return CommandResult::Continue;
        }

        let Some(key) = self.find_by_name(&name) else {
            return CommandResult::Continue;
        };

        let info = CommandInfo::new(args, sender, context, self.engine.clone());
        let result = self.execute(key, &info);
        tracing::trace!("Command '{}' result: {:?}", name, result);
        result
    }

    /// Dispatch a line typed into the server console
    pub fn dispatch_console(&self, line: &str) -> CommandResult {
        self.dispatch(None, CommandContext::ServerConsole, line)
    }

    /// Dispatch a line typed into a player's console
    pub fn dispatch_client(&self, player: PlayerId, line: &str) -> CommandResult {
        self.dispatch(Some(player), CommandContext::ClientConsole, line)
    }

    /// Dispatch a chat message
    ///
    /// Messages starting with the public trigger (`!`) run the command and
    /// stay visible; the silent trigger (`/`) hides them. Anything that
    /// doesn't name a registered command is left alone.
    pub fn dispatch_chat(&self, player: PlayerId, message: &str) -> ChatDispatch {
        let Some((silent, command_text)) = split_trigger(message) else {
            return ChatDispatch::NotACommand;
        };

        let (name, _) = parse_command_line(command_text);
        if name.is_empty() || self.find_by_name(&name).is_none() {
            return ChatDispatch::NotACommand;
        }

        let context = if silent {
            CommandContext::ChatSilent
        } else {
            CommandContext::ChatPublic
        };

        ChatDispatch::Executed {
            silent,
            result: self.dispatch(Some(player), context, command_text),
        }
    }
}
