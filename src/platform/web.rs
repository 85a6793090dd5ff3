//! Browser platform
//!
//! Overlays are toggled through the `hidden` class, audio goes through the
//! page's `<audio>` elements, and fullscreen uses the canvas element.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlCanvasElement};

use super::{FullscreenError, Overlay, Platform};
use crate::audio::{AudioCommand, AudioManager, Track};
use crate::settings::Settings;

const HIDDEN_CLASS: &str = "hidden";
const DROP_ANIMATION_CLASS: &str = "drop-animation";

// web-sys exposes requestFullscreen without its promise, so go through JS to
// observe rejection
#[wasm_bindgen(inline_js = "
    export function request_fullscreen(el) {
        return el.requestFullscreen();
    }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn request_fullscreen(el: &HtmlCanvasElement) -> Result<js_sys::Promise, JsValue>;
}

/// Reason text of a rejected promise
fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub struct WebPlatform {
    document: Document,
    canvas: HtmlCanvasElement,
    audio: AudioManager,
}

impl WebPlatform {
    pub fn new(document: Document, canvas: HtmlCanvasElement, settings: &Settings) -> Self {
        Self {
            document,
            canvas,
            audio: AudioManager::new(settings),
        }
    }

    fn alert_window(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

impl Platform for WebPlatform {
    fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        let Some(el) = self.document.get_element_by_id(overlay.element_id()) else {
            log::warn!("Missing overlay #{}", overlay.element_id());
            return;
        };
        let classes = el.class_list();
        let result = if visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle #{}: {:?}", overlay.element_id(), e);
        }
    }

    fn set_drop_animation(&mut self, active: bool) {
        let classes = self.canvas.class_list();
        let result = if active {
            classes.add_1(DROP_ANIMATION_CLASS)
        } else {
            classes.remove_1(DROP_ANIMATION_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle .{} on canvas: {:?}", DROP_ANIMATION_CLASS, e);
        }
    }

    fn audio(&mut self, track: Track, command: AudioCommand) {
        self.audio.apply(track, command);
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if !self.document.fullscreen_enabled() {
            return Err(FullscreenError::Unavailable);
        }
        let promise = request_fullscreen(&self.canvas)
            .map_err(|e| FullscreenError::Rejected(js_error_message(&e)))?;

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let err = FullscreenError::Rejected(js_error_message(&e));
                log::warn!("{}", err);
                Self::alert_window(&err.to_string());
            }
        });
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.document.exit_fullscreen();
    }

    fn alert(&mut self, message: &str) {
        Self::alert_window(message);
    }
}
