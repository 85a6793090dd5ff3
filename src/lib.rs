//! Duel Shooter - A two-player canvas arcade shooter
//!
//! Core modules:
//! - `sim`: Entity model and the per-tick bullet update
//! - `input`: Key press to game action mapping
//! - `game_loop`: Frame timing and pause gating
//! - `session`: Start/pause/restart lifecycle over a `Platform`
//! - `renderer`: Canvas 2D drawing through the `Surface` trait
//! - `platform`: Browser and headless platform adapters
//! - `audio`: Music and sound effect channels
//! - `settings`: Key bindings and volumes

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameLoop, FrameStep, LoopTicket};
pub use session::{Session, SessionPhase};
pub use settings::{KeyBindings, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Canvas size used when the host does not provide one
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Player box size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Player 1 sits this far from the left edge
    pub const PLAYER_ONE_X: f32 = 100.0;
    /// Player 2 sits this far from the right edge (measured to its left side)
    pub const PLAYER_TWO_RIGHT_OFFSET: f32 = 140.0;
    /// Both players sit this far above the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Pixels per tick
    pub const BULLET_SPEED: f32 = 5.0;
}
