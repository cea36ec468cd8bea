//! Event manager - registration and dispatch

use std::collections::HashMap;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use super::raw::RawEvent;
use super::typed::GameEvent;
use super::types::{EventCallback, EventInfo, HookResult};

new_key_type! {
    /// Handle for a registered event handler
    pub struct EventKey;
}

/// Storage for an event hook
#[derive(Default)]
struct EventHook {
    pre_hooks: Vec<(EventKey, EventCallback)>,
    post_hooks: Vec<(EventKey, EventCallback)>,
}

#[derive(Default)]
struct Registry {
    /// Map of event name to hook data
    hooks: HashMap<String, EventHook>,

    /// Which event each key belongs to, for removal
    keys: SlotMap<EventKey, String>,
}

/// Event manager for registering and dispatching event handlers
#[derive(Default)]
pub struct EventManager {
    registry: RwLock<Registry>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler
    ///
    /// # Arguments
    /// * `name` - Event name (e.g., "player_death")
    /// * `post` - If true, handler runs after the host handles the event; otherwise before
    /// * `callback` - Function to call when event fires
    pub fn register_event<F>(&self, name: &str, post: bool, callback: F) -> EventKey
    where
        F: Fn(&RawEvent, &mut EventInfo) -> HookResult + Send + Sync + 'static,
    {
        let mut registry = self.registry.write();
        let key = registry.keys.insert(name.to_string());

        let hook = registry.hooks.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!("Registering new event hook: {}", name);
            EventHook::default()
        });

        if post {
            hook.post_hooks.push((key, Box::new(callback)));
        } else {
            hook.pre_hooks.push((key, Box::new(callback)));
        }

        tracing::trace!(
            "Added {} handler for event '{}' (total: {} pre, {} post)",
            if post { "post" } else { "pre" },
            name,
            hook.pre_hooks.len(),
            hook.post_hooks.len()
        );

        key
    }

    /// Register a typed event handler
    pub fn register_typed<E, F>(&self, post: bool, callback: F) -> EventKey
    where
        E: GameEvent,
        F: Fn(E, &mut EventInfo) -> HookResult + Send + Sync + 'static,
    {
        self.register_event(E::NAME, post, move |event, info| {
            let typed = E::from_raw(event);
            callback(typed, info)
        })
    }

    /// Unregister a single handler
    ///
    /// # Returns
    /// true if the handler was found and removed
    pub fn unregister(&self, key: EventKey) -> bool {
        let mut registry = self.registry.write();
        let Some(name) = registry.keys.remove(key) else {
            return false;
        };

        if let Some(hook) = registry.hooks.get_mut(&name) {
            hook.pre_hooks.retain(|(k, _)| *k != key);
            hook.post_hooks.retain(|(k, _)| *k != key);
            if hook.pre_hooks.is_empty() && hook.post_hooks.is_empty() {
                registry.hooks.remove(&name);
            }
        }
        true
    }

    /// Number of handlers registered for an event
    pub fn handler_count(&self, name: &str) -> usize {
        self.registry
            .read()
            .hooks
            .get(name)
            .map(|h| h.pre_hooks.len() + h.post_hooks.len())
            .unwrap_or(0)
    }

    /// Run pre-hooks for an event
    ///
    /// `Handled` blocks the event but keeps calling the remaining pre-hooks;
    /// `Stop` blocks it and skips them.
    ///
    /// Returns (should_continue, modified_dont_broadcast)
    pub fn fire_pre(&self, event: &RawEvent, dont_broadcast: bool) -> (bool, bool) {
        let registry = self.registry.read();
        let Some(hook) = registry.hooks.get(event.get_name()) else {
            return (true, dont_broadcast);
        };

        let mut info = EventInfo::new(dont_broadcast);
        let mut blocked = false;

        for (_, callback) in &hook.pre_hooks {
            match callback(event, &mut info) {
                HookResult::Stop => return (false, info.dont_broadcast),
                HookResult::Handled => blocked = true,
                HookResult::Continue => {}
            }
        }

        (!blocked, info.dont_broadcast)
    }

    /// Run post-hooks for an event the host went on to handle
    pub fn fire_post(&self, event: &RawEvent, dont_broadcast: bool) {
        let registry = self.registry.read();
        if let Some(hook) = registry.hooks.get(event.get_name()) {
            let mut info = EventInfo::new(dont_broadcast);
            for (_, callback) in &hook.post_hooks {
                callback(event, &mut info);
            }
        }
    }

    /// Fire an event through pre- and post-hooks
    ///
    /// Post-hooks only run if no pre-hook blocked the event.
    ///
    /// # Returns
    /// true if the event was not blocked
    pub fn fire(&self, event: &RawEvent) -> bool {
        let (should_continue, dont_broadcast) = self.fire_pre(event, false);
        if should_continue {
            self.fire_post(event, dont_broadcast);
        }
        should_continue
    }

    /// Fire a typed event
    pub fn fire_typed<E: GameEvent>(&self, event: &E) -> bool {
        self.fire(&event.to_raw())
    }
}
