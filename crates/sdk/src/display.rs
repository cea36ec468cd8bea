//! Titles and sounds the host can present to a player

/// Large on-screen title with an optional subtitle
///
/// Fade timings are expressed in host ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub title: String,
    pub subtitle: String,
    pub fade_in: u32,
    pub stay: u32,
    pub fade_out: u32,
}

impl Title {
    /// Create a title with the default 10/70/20 tick timings
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            fade_in: 10,
            stay: 70,
            fade_out: 20,
        }
    }

    /// Override the fade timings
    pub fn with_timings(mut self, fade_in: u32, stay: u32, fade_out: u32) -> Self {
        self.fade_in = fade_in;
        self.stay = stay;
        self.fade_out = fade_out;
        self
    }
}

/// A sound effect played at a location
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    /// Namespaced sound key (e.g., "block.note_block.pling")
    pub key: String,
    pub volume: f32,
    pub pitch: f32,
}

impl Sound {
    /// Note block "pling"
    pub const NOTE_BLOCK_PLING: &'static str = "block.note_block.pling";

    pub fn new(key: impl Into<String>, volume: f32, pitch: f32) -> Self {
        Self {
            key: key.into(),
            volume,
            pitch,
        }
    }
}
