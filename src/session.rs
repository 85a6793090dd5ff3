//! Session controller
//!
//! Owns the game state, the session phase and the frame loop, and drives the
//! host through `Platform`. Event adapters call these methods; nothing here
//! knows how events are delivered.

use glam::Vec2;

use crate::audio::{AudioCommand, Track};
use crate::game_loop::{FrameLoop, LoopTicket};
use crate::input::{InputAction, actions_for_key};
use crate::platform::{FullscreenError, Overlay, Platform};
use crate::renderer::{Palette, Surface, draw};
use crate::settings::Settings;
use crate::sim::{GameState, PlayerId, tick};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Start overlay showing, input ignored
    NotStarted,
    /// Active gameplay
    Running,
    /// Active but frozen
    Paused,
}

impl SessionPhase {
    /// Started and not yet restarted
    pub fn is_active(self) -> bool {
        !matches!(self, SessionPhase::NotStarted)
    }
}

pub struct Session<P: Platform> {
    state: GameState,
    phase: SessionPhase,
    frame_loop: FrameLoop,
    pause_key: String,
    palette: Palette,
    platform: P,
}

impl<P: Platform> Session<P> {
    pub fn new(canvas: Vec2, settings: &Settings, platform: P) -> Self {
        Self {
            state: GameState::new(canvas, &settings.keys),
            phase: SessionPhase::NotStarted,
            frame_loop: FrameLoop::new(),
            pause_key: settings.keys.pause.clone(),
            palette: Palette::default(),
            platform,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn fps(&self) -> u32 {
        self.frame_loop.fps()
    }

    /// Start a session. Returns the ticket for the first animation frame, or
    /// `None` if a session is already active.
    pub fn start(&mut self) -> Option<LoopTicket> {
        if self.phase.is_active() {
            log::debug!("start ignored: already {:?}", self.phase);
            return None;
        }
        self.platform.set_overlay(Overlay::Start, false);
        self.platform.set_drop_animation(true);
        self.phase = SessionPhase::Running;
        self.platform.audio(Track::Music, AudioCommand::Restart);

        let ticket = self.frame_loop.begin();
        log::info!("Session started (loop epoch {})", ticket.epoch());
        Some(ticket)
    }

    /// Flip between Running and Paused. No-op before start.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            SessionPhase::NotStarted => {
                log::debug!("pause ignored: not started");
            }
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                self.platform.set_overlay(Overlay::Pause, true);
                self.platform.audio(Track::Music, AudioCommand::Pause);
                log::info!("Paused");
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                self.platform.set_overlay(Overlay::Pause, false);
                self.platform.audio(Track::Music, AudioCommand::Resume);
                log::info!("Resumed");
            }
        }
    }

    /// Back to the start screen with a fresh board
    pub fn restart(&mut self) {
        self.phase = SessionPhase::NotStarted;
        self.state.clear_bullets();
        self.platform.set_overlay(Overlay::Pause, false);
        self.platform.set_overlay(Overlay::GameOver, false);
        self.platform.set_overlay(Overlay::Start, true);
        self.platform.set_drop_animation(false);
        self.state.reset_players();
        self.platform.audio(Track::Music, AudioCommand::Stop);
        log::info!("Session restarted");
    }

    /// Restart and immediately start again
    pub fn play_again(&mut self) -> Option<LoopTicket> {
        self.restart();
        self.start()
    }

    /// Enter fullscreen, or leave it if already there
    pub fn toggle_fullscreen(&mut self) {
        if self.platform.is_fullscreen() {
            self.platform.exit_fullscreen();
            return;
        }
        if let Err(e) = self.platform.request_fullscreen() {
            self.report_fullscreen_error(&e);
        }
    }

    /// Surface a fullscreen failure to the user
    pub fn report_fullscreen_error(&mut self, err: &FullscreenError) {
        log::warn!("{}", err);
        self.platform.alert(&err.to_string());
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: &str) {
        if !self.phase.is_active() {
            return;
        }
        for action in actions_for_key(key, &self.pause_key, &self.state.players) {
            match action {
                InputAction::TogglePause => self.toggle_pause(),
                InputAction::Shoot(id) => self.shoot(id),
            }
        }
    }

    fn shoot(&mut self, id: PlayerId) {
        let bullet = self.state.player_mut(id).shoot();
        log::trace!("player {} fired at {:?}", id.number(), bullet.pos);
        self.platform.audio(Track::Shoot, AudioCommand::Restart);
    }

    /// Run one animation frame. Returns whether another frame is needed.
    pub fn on_animation_frame(
        &mut self,
        ticket: LoopTicket,
        timestamp: f64,
        surface: &mut impl Surface,
    ) -> bool {
        let Some(step) = self.frame_loop.frame(ticket, self.phase, timestamp) else {
            log::trace!("dropping frame from retired loop epoch {}", ticket.epoch());
            return false;
        };
        if step.update {
            tick(&mut self.state);
        }
        if step.render {
            draw(&self.state, surface, &self.palette);
        }
        log::trace!(
            "frame dt={:.1}ms phase={:?} bullets={}",
            step.delta_ms,
            self.phase,
            self.state.bullet_count()
        );
        step.reschedule
    }
}
