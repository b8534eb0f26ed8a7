//! Music player state container
//!
//! [`MusicPlayer`] owns at most one live audio handle. The audio itself comes
//! from an [`AudioBackend`] (an HTML `<audio>` element in the browser, a
//! recording fake in tests). Releasing a handle is dropping it.
//!
//! Each acquired handle opens a new playback session. Progress polling is
//! bound to a session: once the handle is replaced or released,
//! [`MusicPlayer::poll`] reports [`PollOutcome::Stopped`] for the old session
//! and the polling task ends.

use crate::display_types::Track;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("Failed to load {src}: {reason}")]
    Load { src: String, reason: String },
    #[error("Playback was rejected: {0}")]
    Start(String),
    #[error("Media error: {0}")]
    Media(String),
}

/// A live, loaded audio resource
pub trait AudioHandle {
    /// Start or resume playback
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self);
    /// Halt and rewind to the start
    fn stop(&mut self);
    fn seek(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f32);
    /// Current position in seconds
    fn position(&self) -> f64;
    /// Duration in seconds, if known yet
    fn duration(&self) -> Option<f64>;
    fn is_playing(&self) -> bool;
    /// Asynchronous load or decode failure reported by the resource
    fn error(&self) -> Option<PlayerError> {
        None
    }
}

/// Creates audio handles for tracks
pub trait AudioBackend {
    type Handle: AudioHandle;

    fn load(&mut self, track: &Track) -> Result<Self::Handle, PlayerError>;
}

/// Identifies the handle a polling task was started for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Result of one progress poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Still playing, poll again next frame
    Continue,
    /// Session ended, paused, replaced or failed
    Stopped,
}

pub struct MusicPlayer<B: AudioBackend> {
    backend: B,
    handle: Option<B::Handle>,
    session: SessionId,
    current_track: Option<Track>,
    is_playing: bool,
    volume: f32,
    progress: f64,
    duration: f64,
    last_error: Option<String>,
}

impl<B: AudioBackend> MusicPlayer<B> {
    pub fn new(backend: B, volume: f32) -> Self {
        Self {
            backend,
            handle: None,
            session: SessionId::default(),
            current_track: None,
            is_playing: false,
            volume,
            progress: 0.0,
            duration: 0.0,
            last_error: None,
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Elapsed seconds
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Track length in seconds, 0 when unknown
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Session of the live handle, if any
    pub fn session(&self) -> Option<SessionId> {
        self.handle.as_ref().map(|_| self.session)
    }

    /// The live handle, for backends that attach listeners to it
    pub fn handle(&self) -> Option<&B::Handle> {
        self.handle.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Play `track`, or resume the loaded track when `None`.
    ///
    /// Failures are logged and reflected in state, never returned.
    pub fn play(&mut self, track: Option<Track>) {
        match track {
            None => self.resume(),
            Some(track)
                if self.handle.is_some()
                    && self
                        .current_track
                        .as_ref()
                        .is_some_and(|current| current.is_same(&track)) =>
            {
                self.resume()
            }
            Some(track) => self.load_and_play(track),
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
            self.is_playing = false;
        }
    }

    /// Halt and rewind. The loaded track stays loaded.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.stop();
            self.is_playing = false;
            self.progress = 0.0;
        }
    }

    /// Stored as given; applied to the live handle if there is one.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(handle) = self.handle.as_mut() {
            handle.set_volume(volume);
        }
    }

    pub fn seek(&mut self, seconds: f64) {
        if let Some(handle) = self.handle.as_mut() {
            handle.seek(seconds);
            self.progress = seconds;
        }
    }

    pub fn update_progress(&mut self, seconds: f64) {
        self.progress = seconds;
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds;
    }

    /// Pull position and duration from the handle for `session`.
    pub fn poll(&mut self, session: SessionId) -> PollOutcome {
        if session != self.session {
            return PollOutcome::Stopped;
        }
        let Some(handle) = self.handle.as_ref() else {
            return PollOutcome::Stopped;
        };

        if let Some(error) = handle.error() {
            self.fail(error);
            self.release();
            return PollOutcome::Stopped;
        }

        let position = handle.position();
        let duration = handle.duration();
        let still_playing = handle.is_playing();

        self.update_progress(position);
        if let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) {
            self.set_duration(duration);
        }

        if still_playing {
            PollOutcome::Continue
        } else {
            self.is_playing = false;
            PollOutcome::Stopped
        }
    }

    /// Load-error callback from the backend for `session`.
    pub fn on_handle_error(&mut self, session: SessionId, error: PlayerError) {
        if session != self.session || self.handle.is_none() {
            debug!("Ignoring error from stale session: {error}");
            return;
        }
        self.fail(error);
        self.release();
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Release the handle and forget the loaded track.
    pub fn reset(&mut self) {
        self.release();
        self.current_track = None;
        self.is_playing = false;
        self.progress = 0.0;
        self.duration = 0.0;
        self.last_error = None;
    }

    fn resume(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        match handle.play() {
            Ok(()) => self.is_playing = true,
            Err(e) => self.fail(e),
        }
    }

    fn load_and_play(&mut self, track: Track) {
        // The previous handle must be gone before the next one exists
        self.release();

        self.current_track = Some(track.clone());
        self.progress = 0.0;
        self.duration = track.duration_secs.unwrap_or(0.0);
        self.last_error = None;

        let mut handle = match self.backend.load(&track) {
            Ok(handle) => handle,
            Err(e) => {
                self.fail(e);
                return;
            }
        };
        handle.set_volume(self.volume);
        self.session = SessionId(self.session.0 + 1);

        match handle.play() {
            Ok(()) => {
                self.is_playing = true;
                self.progress = 0.0;
                info!("Playing track: {} ({})", track.title, track.id);
            }
            Err(e) => self.fail(e),
        }
        self.handle = Some(handle);
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            self.is_playing = false;
            debug!("Released audio handle");
        }
    }

    fn fail(&mut self, error: PlayerError) {
        warn!("Playback failed: {error}");
        self.is_playing = false;
        self.last_error = Some(error.to_string());
    }
}
