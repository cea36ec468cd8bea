//! Player permission storage

use std::collections::HashSet;

use dashmap::DashMap;

use insanekick_sdk::PlayerId;

/// Flags granted per player, e.g. `@insanekick/admin`
#[derive(Debug, Default)]
pub struct PermissionRegistry {
    players: DashMap<PlayerId, HashSet<String>>,
}

/// `@domain` part of `@domain/flag`
fn domain(permission: &str) -> Option<&str> {
    permission
        .strip_prefix('@')
        .and_then(|rest| rest.split_once('/'))
        .map(|(domain, _)| domain)
        .filter(|domain| !domain.is_empty())
}

fn grants(held: &HashSet<String>, permission: &str) -> bool {
    if held.contains(permission) {
        return true;
    }

    domain(permission).is_some_and(|domain| {
        held.contains(&format!("@{}/root", domain)) || held.contains(&format!("@{}/*", domain))
    })
}

impl PermissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant flags to a player, keeping the ones already held
    pub fn add_permissions(&self, player: PlayerId, permissions: &[&str]) {
        let mut held = self.players.entry(player).or_default();
        held.extend(permissions.iter().map(|p| (*p).to_string()));
    }

    /// Whether the player holds `permission`, directly or through
    /// `@domain/root` or `@domain/*`
    pub fn has_permission(&self, player: PlayerId, permission: &str) -> bool {
        self.players
            .get(&player)
            .is_some_and(|held| grants(&held, permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "@insanekick/admin";
    const NOTIFY: &str = "@insanekick/notify";

    #[test]
    fn test_domain() {
        assert_eq!(domain(ADMIN), Some("insanekick"));
        assert_eq!(domain("@/flag"), None);
        assert_eq!(domain("@insanekick"), None);
        assert_eq!(domain("insanekick/admin"), None);
    }

    #[test]
    fn test_grant_accumulates() {
        let registry = PermissionRegistry::new();
        let player = PlayerId(1);

        registry.add_permissions(player, &[ADMIN]);
        registry.add_permissions(player, &[NOTIFY]);

        assert!(registry.has_permission(player, ADMIN));
        assert!(registry.has_permission(player, NOTIFY));
        assert!(!registry.has_permission(player, "@other/perm"));
        assert!(!registry.has_permission(PlayerId(99), ADMIN));
    }

    #[test]
    fn test_root_and_wildcard_flags() {
        let registry = PermissionRegistry::new();
        registry.add_permissions(PlayerId(1), &["@insanekick/root"]);
        registry.add_permissions(PlayerId(2), &["@insanekick/*"]);

        for player in [PlayerId(1), PlayerId(2)] {
            assert!(registry.has_permission(player, ADMIN));
            assert!(registry.has_permission(player, NOTIFY));
            assert!(!registry.has_permission(player, "@other/perm"));
        }
    }
}
