//! Debug toggle keeps controlling the log level across unload and load.
//!
//! Lives in its own test binary so it owns the global subscriber.

use std::sync::Arc;

use insanekick::{InsaneKick, KickConfig};
use insanekick_core::{Host, ManualClock, Plugin, PluginConfig};
use insanekick_engine::testing::FakeServer;
use insanekick_engine::EngineHandle;

fn debug_enabled() -> bool {
    tracing::enabled!(tracing::Level::DEBUG)
}

#[test]
fn test_debug_toggle_survives_reload_of_plugin() {
    let dir = tempfile::tempdir().unwrap();
    let server = Arc::new(FakeServer::new());
    let host = Host::new(EngineHandle::new(server), Arc::new(ManualClock::new()), dir.path());

    let mut plugin = InsaneKick::new();
    plugin.load(&host).unwrap();
    assert!(!debug_enabled());

    host.commands().dispatch_console("insanekick debug");
    assert!(debug_enabled());
    host.commands().dispatch_console("insanekick debug");
    assert!(!debug_enabled());

    plugin.unload(&host);
    plugin.load(&host).unwrap();
    host.commands().dispatch_console("insanekick debug");
    assert!(KickConfig::load(dir.path()).unwrap().debug_mode);
    assert!(debug_enabled());

    host.commands().dispatch_console("insanekick debug");
    assert!(!debug_enabled());

    // debug-mode = true in the file applies on the next load
    plugin.unload(&host);
    std::fs::write(KickConfig::path(dir.path()), "debug-mode = true\n").unwrap();
    plugin.load(&host).unwrap();
    assert!(debug_enabled());
}
