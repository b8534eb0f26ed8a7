//! HTML `<audio>` backend for the music player
//!
//! Each loaded track gets its own detached `HtmlAudioElement`. Dropping the
//! handle pauses the element and clears its source so the browser can free
//! the media resource.

use dioxus::prelude::*;
use roster_core::{MusicPlayer, SessionId};

pub type Player = MusicPlayer<WebAudioBackend>;

#[cfg(target_arch = "wasm32")]
pub use browser::{WebAudioBackend, WebAudioHandle};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{NoAudio as WebAudioHandle, WebAudioBackend};

#[cfg(target_arch = "wasm32")]
mod browser {
    use roster_core::{AudioBackend, AudioHandle, PlayerError, Track};
    use std::cell::RefCell;
    use tracing::debug;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlAudioElement;

    // MediaError.code values
    const MEDIA_ERR_ABORTED: u16 = 1;
    const MEDIA_ERR_NETWORK: u16 = 2;
    const MEDIA_ERR_DECODE: u16 = 3;
    const MEDIA_ERR_SRC_NOT_SUPPORTED: u16 = 4;

    fn describe(value: JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }

    fn media_error_message(code: u16) -> String {
        match code {
            MEDIA_ERR_ABORTED => "playback aborted".to_string(),
            MEDIA_ERR_NETWORK => "network error while fetching audio".to_string(),
            MEDIA_ERR_DECODE => "audio could not be decoded".to_string(),
            MEDIA_ERR_SRC_NOT_SUPPORTED => "audio source not supported".to_string(),
            other => format!("unknown media error ({other})"),
        }
    }

    #[derive(Default)]
    pub struct WebAudioBackend;

    impl AudioBackend for WebAudioBackend {
        type Handle = WebAudioHandle;

        fn load(&mut self, track: &Track) -> Result<WebAudioHandle, PlayerError> {
            let audio =
                HtmlAudioElement::new_with_src(&track.src).map_err(|e| PlayerError::Load {
                    src: track.src.clone(),
                    reason: describe(e),
                })?;
            audio.set_preload("auto");
            debug!("Created audio element for {}", track.src);
            Ok(WebAudioHandle {
                audio,
                error_listener: RefCell::new(None),
            })
        }
    }

    pub struct WebAudioHandle {
        audio: HtmlAudioElement,
        error_listener: RefCell<Option<Closure<dyn FnMut()>>>,
    }

    impl WebAudioHandle {
        /// Route the element's `error` event to `listener`, replacing any
        /// previous listener.
        pub fn on_error(&self, listener: impl Fn(PlayerError) + 'static) {
            let audio = self.audio.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                let message = audio
                    .error()
                    .map(|e| media_error_message(e.code()))
                    .unwrap_or_else(|| "audio failed to load".to_string());
                listener(PlayerError::Media(message));
            });
            self.audio
                .set_onerror(Some(callback.as_ref().unchecked_ref()));
            self.error_listener.replace(Some(callback));
        }
    }

    impl AudioHandle for WebAudioHandle {
        fn play(&mut self) -> Result<(), PlayerError> {
            // Autoplay rejections arrive later through the element's error state
            self.audio
                .play()
                .map(|_| ())
                .map_err(|e| PlayerError::Start(describe(e)))
        }

        fn pause(&mut self) {
            let _ = self.audio.pause();
        }

        fn stop(&mut self) {
            let _ = self.audio.pause();
            self.audio.set_current_time(0.0);
        }

        fn seek(&mut self, seconds: f64) {
            self.audio.set_current_time(seconds.max(0.0));
        }

        fn set_volume(&mut self, volume: f32) {
            // The element throws outside 0..=1
            self.audio.set_volume(f64::from(volume.clamp(0.0, 1.0)));
        }

        fn position(&self) -> f64 {
            self.audio.current_time()
        }

        fn duration(&self) -> Option<f64> {
            let duration = self.audio.duration();
            duration.is_finite().then_some(duration)
        }

        fn is_playing(&self) -> bool {
            !self.audio.paused() && !self.audio.ended()
        }

        fn error(&self) -> Option<PlayerError> {
            self.audio
                .error()
                .map(|e| PlayerError::Media(media_error_message(e.code())))
        }
    }

    impl Drop for WebAudioHandle {
        fn drop(&mut self) {
            // Clearing src raises an error event of its own
            self.audio.set_onerror(None);
            let _ = self.audio.pause();
            self.audio.set_src("");
        }
    }
}

/// Native builds have no audio device; loads fail and the player shows the
/// error like any other load failure.
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use roster_core::{AudioBackend, AudioHandle, PlayerError, Track};

    #[derive(Default)]
    pub struct WebAudioBackend;

    impl AudioBackend for WebAudioBackend {
        type Handle = NoAudio;

        fn load(&mut self, track: &Track) -> Result<NoAudio, PlayerError> {
            Err(PlayerError::Load {
                src: track.src.clone(),
                reason: "audio playback is only available in the browser".to_string(),
            })
        }
    }

    /// Never constructed
    pub enum NoAudio {}

    impl AudioHandle for NoAudio {
        fn play(&mut self) -> Result<(), PlayerError> {
            match *self {}
        }

        fn pause(&mut self) {
            match *self {}
        }

        fn stop(&mut self) {
            match *self {}
        }

        fn seek(&mut self, _seconds: f64) {
            match *self {}
        }

        fn set_volume(&mut self, _volume: f32) {
            match *self {}
        }

        fn position(&self) -> f64 {
            match *self {}
        }

        fn duration(&self) -> Option<f64> {
            match *self {}
        }

        fn is_playing(&self) -> bool {
            match *self {}
        }
    }
}

/// Deliver the live handle's load errors for `session` to the player.
#[cfg(target_arch = "wasm32")]
pub fn watch_errors(player: Signal<Player>, session: SessionId) {
    let current = player.peek();
    let Some(handle) = current.handle() else {
        return;
    };
    handle.on_error(move |error| {
        let mut player = player;
        // Deferred: handling the error drops the handle that owns this listener
        gloo_timers::callback::Timeout::new(0, move || {
            player.write().on_handle_error(session, error);
        })
        .forget();
    });
}

/// Native handles never exist, so there is nothing to watch.
#[cfg(not(target_arch = "wasm32"))]
pub fn watch_errors(_player: Signal<Player>, _session: SessionId) {}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
