//! Music player behavior against a recording fake backend

use roster_core::{AudioBackend, AudioHandle, MusicPlayer, PlayerError, PollOutcome, Track};
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Acquire(String),
    Release(String),
    Play(String),
    Pause(String),
    Stop(String),
    Seek(String, f64),
    Volume(String, f32),
}

/// Shared knobs and log for the fake audio
#[derive(Default)]
struct Shared {
    events: Vec<Event>,
    fail_load: bool,
    fail_start: bool,
    position: f64,
    duration: Option<f64>,
    ended: bool,
    media_error: Option<PlayerError>,
}

#[derive(Clone, Default)]
struct FakeBackend {
    shared: Rc<RefCell<Shared>>,
}

impl FakeBackend {
    fn events(&self) -> Vec<Event> {
        self.shared.borrow().events.clone()
    }

    fn live_handles(&self) -> i64 {
        self.events().iter().fold(0, |n, e| match e {
            Event::Acquire(_) => n + 1,
            Event::Release(_) => n - 1,
            _ => n,
        })
    }
}

struct FakeHandle {
    id: String,
    playing: bool,
    shared: Rc<RefCell<Shared>>,
}

impl FakeHandle {
    fn log(&self, event: Event) {
        self.shared.borrow_mut().events.push(event);
    }
}

impl AudioHandle for FakeHandle {
    fn play(&mut self) -> Result<(), PlayerError> {
        if self.shared.borrow().fail_start {
            return Err(PlayerError::Start("autoplay blocked".to_string()));
        }
        self.playing = true;
        self.log(Event::Play(self.id.clone()));
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        self.log(Event::Pause(self.id.clone()));
    }

    fn stop(&mut self) {
        self.playing = false;
        self.log(Event::Stop(self.id.clone()));
    }

    fn seek(&mut self, seconds: f64) {
        self.log(Event::Seek(self.id.clone(), seconds));
    }

    fn set_volume(&mut self, volume: f32) {
        self.log(Event::Volume(self.id.clone(), volume));
    }

    fn position(&self) -> f64 {
        self.shared.borrow().position
    }

    fn duration(&self) -> Option<f64> {
        self.shared.borrow().duration
    }

    fn is_playing(&self) -> bool {
        self.playing && !self.shared.borrow().ended
    }

    fn error(&self) -> Option<PlayerError> {
        self.shared.borrow().media_error.clone()
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.log(Event::Release(self.id.clone()));
    }
}

impl AudioBackend for FakeBackend {
    type Handle = FakeHandle;

    fn load(&mut self, track: &Track) -> Result<FakeHandle, PlayerError> {
        if self.shared.borrow().fail_load {
            return Err(PlayerError::Load {
                src: track.src.clone(),
                reason: "404".to_string(),
            });
        }
        self.shared
            .borrow_mut()
            .events
            .push(Event::Acquire(track.id.clone()));
        Ok(FakeHandle {
            id: track.id.clone(),
            playing: false,
            shared: self.shared.clone(),
        })
    }
}

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Track {id}"),
        artist_name: "Nova Static".to_string(),
        src: format!("/audio/{id}.mp3"),
        duration_secs: Some(200.0),
        cover_url: None,
    }
}

fn player() -> (MusicPlayer<FakeBackend>, FakeBackend) {
    init_tracing();
    let backend = FakeBackend::default();
    (MusicPlayer::new(backend.clone(), 0.8), backend)
}

#[test]
fn test_play_starts_and_applies_volume() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));

    assert!(player.is_playing());
    assert_eq!(player.progress(), 0.0);
    assert_eq!(player.duration(), 200.0);
    assert_eq!(player.current_track(), Some(&track("a")));
    assert_eq!(
        backend.events(),
        vec![
            Event::Acquire("a".into()),
            Event::Volume("a".into(), 0.8),
            Event::Play("a".into()),
        ]
    );
}

#[test]
fn test_switching_tracks_releases_previous_first() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    player.play(Some(track("b")));

    let events = backend.events();
    let releases_of_a = events
        .iter()
        .filter(|e| **e == Event::Release("a".into()))
        .count();
    assert_eq!(releases_of_a, 1);

    let release_a = events
        .iter()
        .position(|e| *e == Event::Release("a".into()))
        .unwrap();
    let acquire_b = events
        .iter()
        .position(|e| *e == Event::Acquire("b".into()))
        .unwrap();
    assert!(release_a < acquire_b);

    assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("b"));
    assert_eq!(backend.live_handles(), 1);
}

#[test]
fn test_same_track_only_resumes() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    player.pause();
    player.play(Some(track("a")));

    assert!(player.is_playing());
    let acquires = backend
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Acquire(_)))
        .count();
    assert_eq!(acquires, 1);
}

#[test]
fn test_play_without_track_resumes_or_does_nothing() {
    let (mut player, backend) = player();
    player.play(None);
    assert!(!player.is_playing());
    assert!(backend.events().is_empty());

    player.play(Some(track("a")));
    player.pause();
    assert!(!player.is_playing());
    player.play(None);
    assert!(player.is_playing());
}

#[test]
fn test_stop_rewinds_but_keeps_track() {
    let (mut player, _backend) = player();
    player.play(Some(track("a")));
    player.update_progress(30.0);
    player.stop();

    assert_eq!(player.progress(), 0.0);
    assert!(!player.is_playing());
    assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("a"));
    assert!(player.has_handle());
}

#[test]
fn test_controls_without_handle_are_noops() {
    let (mut player, backend) = player();
    player.update_progress(12.0);
    player.pause();
    player.stop();
    player.seek(40.0);

    assert_eq!(player.progress(), 12.0);
    assert!(backend.events().is_empty());
}

#[test]
fn test_volume_is_stored_verbatim_and_applied_live() {
    let (mut player, backend) = player();
    player.set_volume(1.5);
    assert_eq!(player.volume(), 1.5);

    player.play(Some(track("a")));
    player.set_volume(0.25);
    assert_eq!(player.volume(), 0.25);
    assert_eq!(backend.events().last(), Some(&Event::Volume("a".into(), 0.25)));
}

#[test]
fn test_seek_moves_progress() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    player.seek(42.0);
    assert_eq!(player.progress(), 42.0);
    assert_eq!(backend.events().last(), Some(&Event::Seek("a".into(), 42.0)));
}

#[test]
fn test_load_failure_is_swallowed() {
    let (mut player, backend) = player();
    backend.shared.borrow_mut().fail_load = true;
    player.play(Some(track("a")));

    assert!(!player.is_playing());
    assert!(!player.has_handle());
    assert!(player.last_error().is_some());
}

#[test]
fn test_start_failure_keeps_handle_paused() {
    let (mut player, backend) = player();
    backend.shared.borrow_mut().fail_start = true;
    player.play(Some(track("a")));

    assert!(!player.is_playing());
    assert!(player.has_handle());

    backend.shared.borrow_mut().fail_start = false;
    player.play(None);
    assert!(player.is_playing());
}

#[test]
fn test_poll_tracks_position_until_end() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    let session = player.session().unwrap();

    {
        let mut shared = backend.shared.borrow_mut();
        shared.position = 12.5;
        shared.duration = Some(213.0);
    }
    assert_eq!(player.poll(session), PollOutcome::Continue);
    assert_eq!(player.progress(), 12.5);
    assert_eq!(player.duration(), 213.0);

    backend.shared.borrow_mut().ended = true;
    assert_eq!(player.poll(session), PollOutcome::Stopped);
    assert!(!player.is_playing());
}

#[test]
fn test_poll_stops_for_replaced_session() {
    let (mut player, _backend) = player();
    player.play(Some(track("a")));
    let first = player.session().unwrap();
    player.play(Some(track("b")));
    let second = player.session().unwrap();

    assert_ne!(first, second);
    assert_eq!(player.poll(first), PollOutcome::Stopped);
    assert_eq!(player.poll(second), PollOutcome::Continue);
}

#[test]
fn test_media_error_during_poll_releases_handle() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    let session = player.session().unwrap();

    backend.shared.borrow_mut().media_error =
        Some(PlayerError::Media("decode failed".to_string()));
    assert_eq!(player.poll(session), PollOutcome::Stopped);
    assert!(!player.is_playing());
    assert!(!player.has_handle());
    assert_eq!(backend.live_handles(), 0);
}

#[test]
fn test_stale_error_callback_is_ignored() {
    let (mut player, _backend) = player();
    player.play(Some(track("a")));
    let stale = player.session().unwrap();
    player.play(Some(track("b")));

    player.on_handle_error(stale, PlayerError::Media("late".to_string()));
    assert!(player.is_playing());
    assert!(player.last_error().is_none());
}

#[test]
fn test_error_callback_while_paused_releases_handle() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    player.pause();
    let session = player.session().unwrap();
    assert!(player.handle().is_some());

    // No polling runs while paused; the element's error event is the only signal
    player.on_handle_error(session, PlayerError::Media("network error".to_string()));
    assert!(player.handle().is_none());
    assert!(!player.is_playing());
    assert_eq!(player.last_error(), Some("Media error: network error"));
    assert_eq!(backend.live_handles(), 0);
    assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("a"));

    // A second event for the released session changes nothing
    player.dismiss_error();
    player.on_handle_error(session, PlayerError::Media("again".to_string()));
    assert!(player.last_error().is_none());
}

#[test]
fn test_reset_releases_everything() {
    let (mut player, backend) = player();
    player.play(Some(track("a")));
    player.reset();

    assert!(player.current_track().is_none());
    assert!(!player.has_handle());
    assert_eq!(backend.live_handles(), 0);
}
