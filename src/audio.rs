//! Audio channels
//!
//! Two independent channels: looping background music and the shot effect.
//! Playback is fire-and-forget; restarting a channel rewinds the one shared
//! element instead of layering a new voice.

/// Playable audio channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Background music
    Music,
    /// Shot sound effect
    Shoot,
}

impl Track {
    /// Id of the `<audio>` element backing this track
    pub fn element_id(self) -> &'static str {
        match self {
            Track::Music => "bgMusic",
            Track::Shoot => "shootSound",
        }
    }
}

/// Transport command for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Rewind to zero and play
    Restart,
    /// Pause at the current position
    Pause,
    /// Play from the current position
    Resume,
    /// Pause and rewind to zero
    Stop,
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlAudioElement;

    use super::{AudioCommand, Track};
    use crate::settings::Settings;

    /// Audio manager over the page's `<audio>` elements
    pub struct AudioManager {
        music: Option<HtmlAudioElement>,
        shoot: Option<HtmlAudioElement>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let manager = Self {
                music: Self::find(Track::Music),
                shoot: Self::find(Track::Shoot),
            };
            if let Some(music) = &manager.music {
                music.set_volume(settings.music_level() as f64);
            }
            if let Some(shoot) = &manager.shoot {
                shoot.set_volume(settings.sfx_level() as f64);
            }
            manager
        }

        fn find(track: Track) -> Option<HtmlAudioElement> {
            let el = web_sys::window()?
                .document()?
                .get_element_by_id(track.element_id());
            match el.and_then(|e| e.dyn_into::<HtmlAudioElement>().ok()) {
                Some(audio) => Some(audio),
                None => {
                    log::warn!("No <audio id=\"{}\"> - track disabled", track.element_id());
                    None
                }
            }
        }

        /// Apply a transport command to a track
        pub fn apply(&self, track: Track, command: AudioCommand) {
            let el = match track {
                Track::Music => &self.music,
                Track::Shoot => &self.shoot,
            };
            let Some(el) = el else { return };

            match command {
                AudioCommand::Restart => {
                    el.set_current_time(0.0);
                    Self::play(el);
                }
                AudioCommand::Resume => Self::play(el),
                AudioCommand::Pause => {
                    let _ = el.pause();
                }
                AudioCommand::Stop => {
                    let _ = el.pause();
                    el.set_current_time(0.0);
                }
            }
        }

        fn play(el: &HtmlAudioElement) {
            // Autoplay policy may reject the promise; nothing to do about it
            if let Err(e) = el.play() {
                log::debug!("play() threw: {:?}", e);
            }
        }
    }
}
