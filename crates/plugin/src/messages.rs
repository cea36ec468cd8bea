//! Player-facing message templates
//!
//! Templates keep the `&` colour codes; the host renders them.

use std::time::Duration;

use insanekick_sdk::{Sound, Title};

/// Prefix for chat replies and notifications
pub const PREFIX: &str = "&c&lInsaneKick &8| ";

const RULE: &str = "&6&m                                    ";

pub const COUNTDOWN_TITLE: &str = "&c&lYOU DIED!";

/// Countdown title for `seconds` left, shown 10/40/10 ticks
pub fn countdown_title(seconds: u32) -> Title {
    Title::new(
        COUNTDOWN_TITLE,
        format!("&7Kicking you in &e{}&7 seconds...", seconds),
    )
    .with_timings(10, 40, 10)
}

/// Sound played with every countdown title
pub fn countdown_sound() -> Sound {
    Sound::new(Sound::NOTE_BLOCK_PLING, 1.0, 0.5)
}

/// Sent to `@insanekick/notify` holders after a kick
pub fn kick_notification(player_name: &str) -> String {
    format!("{}&7Player &f{} &7was kicked after dying", PREFIX, player_name)
}

pub fn prefixed(message: &str) -> String {
    format!("{}{}", PREFIX, message)
}

pub fn unknown_subcommand() -> String {
    prefixed("&cUnknown command! Use: &f/insanekick help")
}

pub fn help(version: &str, authors: &str) -> Vec<String> {
    vec![
        RULE.to_string(),
        format!("&c&lInsaneKick &7v{}", version),
        format!("&7Author: &f{}", authors),
        String::new(),
        "&e/insanekick reload &7- Reload the configuration".to_string(),
        "&e/insanekick info &7- Show plugin information".to_string(),
        "&e/insanekick toggle &7- Enable/disable the plugin".to_string(),
        "&e/insanekick debug &7- Enable/disable debug mode".to_string(),
        "&e/insanekick stats &7- Show statistics".to_string(),
        "&e/insanekick reset [player] &7- Clear death statistics".to_string(),
        RULE.to_string(),
    ]
}

/// Facts shown by the `info` subcommand
pub struct InfoSummary<'a> {
    pub version: &'a str,
    pub authors: &'a str,
    pub enabled: bool,
    pub debug: bool,
    pub kick_delay: u32,
    pub server_name: &'a str,
    pub server_version: &'a str,
}

pub fn info(summary: &InfoSummary<'_>) -> Vec<String> {
    vec![
        RULE.to_string(),
        "&c&lInsaneKick &7Information".to_string(),
        String::new(),
        format!("&7Version: &f{}", summary.version),
        format!("&7Author: &f{}", summary.authors),
        format!("&7Status: {}", if summary.enabled { "&aACTIVE" } else { "&cINACTIVE" }),
        format!("&7Debug: {}", if summary.debug { "&eON" } else { "&cOFF" }),
        format!("&7Kick delay: &f{}s", summary.kick_delay),
        format!("&7Server: &f{} {}", summary.server_name, summary.server_version),
        RULE.to_string(),
    ]
}

pub fn stats(online: usize, max: usize, recorded_deaths: usize, uptime: Duration) -> Vec<String> {
    vec![
        RULE.to_string(),
        "&c&lInsaneKick &7Statistics".to_string(),
        String::new(),
        format!("&7Players online: &f{}/{}", online, max),
        format!("&7Recorded deaths: &f{}", recorded_deaths),
        format!("&7Uptime: &f{}", format_uptime(uptime)),
        RULE.to_string(),
    ]
}

/// `Xd Yh Zm`, seconds truncated
pub fn format_uptime(uptime: Duration) -> String {
    let minutes = uptime.as_secs() / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    format!("{}d {}h {}m", days, hours % 24, minutes % 60)
}
