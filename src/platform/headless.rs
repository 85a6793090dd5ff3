//! Headless platform
//!
//! Keeps overlay, audio and fullscreen state in memory and logs every change.

use std::collections::HashMap;

use super::{FullscreenError, Overlay, Platform};
use crate::audio::{AudioCommand, Track};

/// Playback state of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelState {
    pub playing: bool,
    /// Rewound to time zero
    pub at_start: bool,
    /// Times the channel was rewound and played
    pub restarts: u32,
}

/// In-memory platform
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    overlays: HashMap<Overlay, bool>,
    pub drop_animation: bool,
    channels: HashMap<Track, ChannelState>,
    pub fullscreen: bool,
    /// When set, fullscreen requests fail with this error
    pub deny_fullscreen: Option<FullscreenError>,
    pub alerts: Vec<String>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPlatform {
    /// Page as first loaded: only the start overlay is showing
    pub fn new() -> Self {
        let overlays = Overlay::ALL
            .into_iter()
            .map(|o| (o, o == Overlay::Start))
            .collect();
        let idle = ChannelState {
            playing: false,
            at_start: true,
            restarts: 0,
        };
        Self {
            overlays,
            drop_animation: false,
            channels: [(Track::Music, idle), (Track::Shoot, idle)].into(),
            fullscreen: false,
            deny_fullscreen: None,
            alerts: Vec::new(),
        }
    }

    pub fn overlay_visible(&self, overlay: Overlay) -> bool {
        self.overlays.get(&overlay).copied().unwrap_or(false)
    }

    pub fn channel(&self, track: Track) -> ChannelState {
        self.channels.get(&track).copied().unwrap_or_default()
    }
}

impl Platform for HeadlessPlatform {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        log::debug!("overlay {:?} visible={}", overlay, visible);
        self.overlays.insert(overlay, visible);
    }

    fn set_drop_animation(&mut self, active: bool) {
        self.drop_animation = active;
    }

    fn audio(&mut self, track: Track, command: AudioCommand) {
        let ch = self.channels.entry(track).or_default();
        match command {
            AudioCommand::Restart => {
                ch.playing = true;
                ch.at_start = false;
                ch.restarts += 1;
            }
            AudioCommand::Resume => {
                ch.playing = true;
                ch.at_start = false;
            }
            AudioCommand::Pause => ch.playing = false,
            AudioCommand::Stop => {
                ch.playing = false;
                ch.at_start = true;
            }
        }
        log::debug!("audio {:?} {:?} -> {:?}", track, command, ch);
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if let Some(err) = &self.deny_fullscreen {
            return Err(err.clone());
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn alert(&mut self, message: &str) {
        log::info!("alert: {}", message);
        self.alerts.push(message.to_string());
    }
}
