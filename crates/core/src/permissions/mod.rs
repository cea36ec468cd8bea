//! Permission system
//!
//! A registry where the host (or an admin plugin) records player
//! permissions and where plugins and the command system query them. The
//! framework doesn't manage permission lifecycle: whoever grants a
//! permission is responsible for revoking it.
//!
//! # Permission Format
//!
//! Permissions use the format `@domain/flag`:
//! - `@insanekick/admin` - Use the plugin's admin command
//! - `@insanekick/notify` - Receive kick notifications
//! - `@insanekick/root` or `@insanekick/*` - Grants every `@insanekick/...` flag
//!
//! # Usage
//!
//! ```ignore
//! let permissions = host.permissions();
//! permissions.add_permissions(player_id, &["@insanekick/admin"]);
//!
//! if permissions.has_permission(player_id, "@insanekick/admin") {
//!     // Perform admin action
//! }
//! ```

mod registry;

pub use registry::PermissionRegistry;
