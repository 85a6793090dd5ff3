//! Platform abstraction layer
//!
//! The session drives overlays, audio and fullscreen through `Platform`:
//! - `web`: the browser page (wasm32 only)
//! - `headless`: in-memory recorder for the native binary and tests

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessPlatform;

use thiserror::Error;

use crate::audio::{AudioCommand, Track};

/// Screen overlays with independent visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Start,
    Pause,
    GameOver,
}

impl Overlay {
    pub const ALL: [Overlay; 3] = [Overlay::Start, Overlay::Pause, Overlay::GameOver];

    /// Id of the overlay's DOM element
    pub fn element_id(self) -> &'static str {
        match self {
            Overlay::Start => "startScreen",
            Overlay::Pause => "pauseScreen",
            Overlay::GameOver => "gameOverScreen",
        }
    }
}

/// Clickable page controls, each wired to one session action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Restart,
    PlayAgain,
    Fullscreen,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Start,
        Control::Restart,
        Control::PlayAgain,
        Control::Fullscreen,
    ];

    /// Ids of the buttons bound to this control. Overlays sit above the page,
    /// so actions reachable from an overlay get a button inside it.
    pub fn element_ids(self) -> &'static [&'static str] {
        match self {
            Control::Start => &["startButton"],
            Control::Restart => &["restartButton", "pauseRestartButton"],
            Control::PlayAgain => &["playAgainButton", "gameOverPlayAgainButton"],
            Control::Fullscreen => &["fullscreenButton"],
        }
    }
}

/// Fullscreen request failure. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    #[error("Error attempting to enable full-screen mode: {0}")]
    Rejected(String),
    #[error("Error attempting to enable full-screen mode: fullscreen is not available")]
    Unavailable,
}

/// Host services the session needs
pub trait Platform {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool);
    /// Toggle the canvas drop-in transition
    fn set_drop_animation(&mut self, active: bool);
    fn audio(&mut self, track: Track, command: AudioCommand);
    fn is_fullscreen(&self) -> bool;
    /// Ask for fullscreen on the canvas. Hosts that settle asynchronously
    /// report later rejections themselves.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn exit_fullscreen(&mut self);
    /// Show a message to the user
    fn alert(&mut self, message: &str);
}
