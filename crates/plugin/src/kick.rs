//! Kick countdown
//!
//! After a death the listener schedules one repeating timer per player. The
//! timer drives a [`KickPhase`] once per second: a title and sound for every
//! second of `kick-delay`, then the kick itself.

use std::sync::Arc;

use insanekick_core::{PermissionRegistry, TimerAction};
use insanekick_engine::{EngineHandle, HostError};
use insanekick_sdk::{PlayerId, PlayerInfo};

use crate::messages;
use crate::state::SharedState;

/// Permission that receives kick notifications
pub const NOTIFY_PERMISSION: &str = "@insanekick/notify";

/// Where a countdown stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickPhase {
    /// Seconds of countdown still to show
    Counting { remaining: u32 },
    /// Countdown shown, kick due on the next step
    Expired,
    /// Kick attempted
    Terminal,
    /// Player left first
    Cancelled,
}

/// What a step asks the caller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickStep {
    /// Show the countdown for this many seconds
    Countdown(u32),
    Kick,
    /// Player is gone, drop the countdown
    Cancel,
    /// Already finished
    Idle,
}

impl KickPhase {
    /// Initial phase for a delay in seconds; 0 skips straight to the kick
    pub fn new(kick_delay: u32) -> Self {
        if kick_delay == 0 {
            Self::Expired
        } else {
            Self::Counting {
                remaining: kick_delay,
            }
        }
    }

    /// Advance one second
    pub fn step(&mut self, online: bool) -> KickStep {
        match *self {
            Self::Counting { .. } | Self::Expired if !online => {
                *self = Self::Cancelled;
                KickStep::Cancel
            }
            Self::Counting { remaining } if remaining > 0 => {
                *self = match remaining - 1 {
                    0 => Self::Expired,
                    left => Self::Counting { remaining: left },
                };
                KickStep::Countdown(remaining)
            }
            Self::Counting { .. } | Self::Expired => {
                *self = Self::Terminal;
                KickStep::Kick
            }
            Self::Terminal | Self::Cancelled => KickStep::Idle,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Terminal | Self::Cancelled)
    }
}

/// One scheduled kick, owned by its timer callback
pub struct KickCountdown {
    player: PlayerId,
    /// Name at death time, for logs after the player is gone
    name: String,
    /// Kick message captured when the countdown was scheduled
    message: String,
    phase: KickPhase,
    engine: EngineHandle,
    state: SharedState,
    permissions: Arc<PermissionRegistry>,
}

impl KickCountdown {
    pub fn new(
        player: &PlayerInfo,
        kick_delay: u32,
        message: String,
        engine: EngineHandle,
        state: SharedState,
        permissions: Arc<PermissionRegistry>,
    ) -> Self {
        Self {
            player: player.id,
            name: player.name.clone(),
            message,
            phase: KickPhase::new(kick_delay),
            engine,
            state,
            permissions,
        }
    }

    pub fn phase(&self) -> KickPhase {
        self.phase
    }

    /// Timer callback body
    pub fn tick(&mut self) -> TimerAction {
        let online = self.engine.online_player(self.player);

        match self.phase.step(online.is_some()) {
            KickStep::Countdown(seconds) => {
                if let Some(info) = &online {
                    self.show_countdown(info, seconds);
                }
            }
            KickStep::Kick => {
                if let Err(e) = self.execute_kick() {
                    if self.state.read().is_debug() {
                        tracing::error!("Failed to kick {}: {:?}", self.name, e);
                    } else {
                        tracing::error!("Failed to kick {}: {}", self.name, e);
                    }
                }
            }
            KickStep::Cancel => {
                tracing::debug!("{} is no longer online, cancelling kick", self.name);
            }
            KickStep::Idle => {}
        }

        if self.phase.is_finished() {
            TimerAction::Stop
        } else {
            TimerAction::Continue
        }
    }

    fn show_countdown(&self, info: &PlayerInfo, seconds: u32) {
        let server = self.engine.server();
        server.send_title(self.player, &messages::countdown_title(seconds));
        server.play_sound(self.player, &messages::countdown_sound(), &info.location);
        tracing::debug!("Countdown for {}: {}s", self.name, seconds);
    }

    fn execute_kick(&self) -> Result<(), HostError> {
        self.engine.server().kick(self.player, &self.message)?;

        let deaths = self.state.read().death_count(self.player);
        tracing::info!("{} was kicked after dying (total deaths: {})", self.name, deaths);

        self.notify_kick();
        Ok(())
    }

    fn notify_kick(&self) {
        let server = self.engine.server();
        let notification = messages::kick_notification(&self.name);
        for id in server.online_players() {
            if self.permissions.has_permission(id, NOTIFY_PERMISSION) {
                server.send_message(id, &notification);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KickConfig;
    use crate::state::PluginState;
    use insanekick_core::ManualClock;
    use insanekick_engine::testing::{FakeServer, ServerAction};
    use insanekick_sdk::Location;

    #[test]
    fn test_zero_delay_kicks_first() {
        let mut phase = KickPhase::new(0);
        assert_eq!(phase, KickPhase::Expired);
        assert_eq!(phase.step(true), KickStep::Kick);
        assert!(phase.is_finished());
        assert_eq!(phase.step(true), KickStep::Idle);
    }

    #[test]
    fn test_counts_down_then_kicks() {
        let mut phase = KickPhase::new(3);
        let steps: Vec<KickStep> = (0..5).map(|_| phase.step(true)).collect();
        assert_eq!(
            steps,
            vec![
                KickStep::Countdown(3),
                KickStep::Countdown(2),
                KickStep::Countdown(1),
                KickStep::Kick,
                KickStep::Idle,
            ]
        );
        assert_eq!(phase, KickPhase::Terminal);
    }

    #[test]
    fn test_exhausted_count_kicks() {
        let mut phase = KickPhase::Counting { remaining: 0 };
        assert_eq!(phase.step(true), KickStep::Kick);
        assert_eq!(phase, KickPhase::Terminal);
    }

    #[test]
    fn test_offline_cancels() {
        let mut phase = KickPhase::new(2);
        assert_eq!(phase.step(true), KickStep::Countdown(2));
        assert_eq!(phase.step(false), KickStep::Cancel);
        assert_eq!(phase, KickPhase::Cancelled);
        assert_eq!(phase.step(true), KickStep::Idle);

        let mut phase = KickPhase::new(0);
        assert_eq!(phase.step(false), KickStep::Cancel);
    }

    struct Fixture {
        server: Arc<FakeServer>,
        permissions: Arc<PermissionRegistry>,
        state: SharedState,
        info: PlayerInfo,
    }

    fn fixture() -> Fixture {
        let server = Arc::new(FakeServer::new());
        let info = PlayerInfo::new(PlayerId(1), "Steve", Location::new("world", 1.5, 64.0, -2.5));
        server.add_player(info.clone());
        Fixture {
            server,
            permissions: Arc::new(PermissionRegistry::new()),
            state: PluginState::new(KickConfig::default(), Arc::new(ManualClock::new())).shared(),
            info,
        }
    }

    fn countdown(f: &Fixture, delay: u32) -> KickCountdown {
        KickCountdown::new(
            &f.info,
            delay,
            "bye".to_string(),
            EngineHandle::new(f.server.clone()),
            Arc::clone(&f.state),
            Arc::clone(&f.permissions),
        )
    }

    #[test]
    fn test_countdown_shows_title_and_sound_at_player() {
        let f = fixture();
        let mut countdown = countdown(&f, 1);

        assert_eq!(countdown.tick(), TimerAction::Continue);
        let actions = f.server.actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(&actions[0], ServerAction::Title { title, .. } if title.subtitle.contains("&e1&7")));
        assert!(matches!(&actions[1], ServerAction::Sound { at, .. } if *at == f.info.location));

        assert_eq!(countdown.tick(), TimerAction::Stop);
        assert_eq!(f.server.kicks(), vec![(PlayerId(1), "bye".to_string())]);
    }

    #[test]
    fn test_failed_kick_still_stops() {
        let f = fixture();
        f.server.fail_kicks(true);
        let mut countdown = countdown(&f, 0);

        assert_eq!(countdown.tick(), TimerAction::Stop);
        assert_eq!(countdown.phase(), KickPhase::Terminal);
        assert!(f.server.kicks().is_empty());
    }

    #[test]
    fn test_notification_only_reaches_holders() {
        let f = fixture();
        let admin = PlayerId(2);
        let regular = PlayerId(3);
        f.server.add_player(PlayerInfo::new(admin, "Admin", Location::default()));
        f.server.add_player(PlayerInfo::new(regular, "Alex", Location::default()));
        f.permissions.add_permissions(admin, &[NOTIFY_PERMISSION]);

        countdown(&f, 0).tick();

        assert_eq!(f.server.messages_for(admin), vec![messages::kick_notification("Steve")]);
        assert!(f.server.messages_for(regular).is_empty());
        assert!(f.server.messages_for(PlayerId(1)).is_empty());
    }
}
