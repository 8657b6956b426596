//! Audio collaborator
//!
//! The game runs the same with or without sound. A missing device is an
//! absent sink; a failing call is logged and dropped.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Looping engine drone while accelerating
    EngineLoop,
    /// One-shot crash on collision
    Crash,
}

/// A playback backend
pub trait AudioSink {
    /// Start a looping effect (restarts it if already playing)
    fn play_loop(&mut self, effect: SoundEffect) -> anyhow::Result<()>;
    /// Stop an effect if it is playing
    fn stop(&mut self, effect: SoundEffect) -> anyhow::Result<()>;
    /// Fire a one-shot effect
    fn play_once(&mut self, effect: SoundEffect) -> anyhow::Result<()>;
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("Audio initialization failed - game will run without sound");
        }
        Self { sink, muted: false }
    }

    /// No sink at all
    pub fn disabled() -> Self {
        Self {
            sink: None,
            muted: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.sink.is_some() && !self.muted
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn play_loop(&mut self, effect: SoundEffect) {
        self.with_sink(effect, |sink| sink.play_loop(effect));
    }

    pub fn stop(&mut self, effect: SoundEffect) {
        // Stopping is allowed while muted so nothing keeps looping
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.stop(effect) {
                log::debug!("Ignoring audio failure stopping {:?}: {:#}", effect, err);
            }
        }
    }

    pub fn play_once(&mut self, effect: SoundEffect) {
        self.with_sink(effect, |sink| sink.play_once(effect));
    }

    /// Translate a simulation event into sound
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EngineStarted => self.play_loop(SoundEffect::EngineLoop),
            GameEvent::EngineStopped => self.stop(SoundEffect::EngineLoop),
            GameEvent::Crashed => self.play_once(SoundEffect::Crash),
            GameEvent::EnemySpawned { .. } | GameEvent::EnemyPassed { .. } => {}
        }
    }

    fn with_sink(
        &mut self,
        effect: SoundEffect,
        call: impl FnOnce(&mut dyn AudioSink) -> anyhow::Result<()>,
    ) {
        if self.muted {
            return;
        }
        let Some(sink) = self.sink.as_mut() else { return };
        if let Err(err) = call(sink.as_mut()) {
            log::debug!("Ignoring audio failure for {:?}: {:#}", effect, err);
        }
    }
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    looping: Vec<SoundEffect>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_looping(&self, effect: SoundEffect) -> bool {
        self.looping.contains(&effect)
    }
}

impl AudioSink for LogAudio {
    fn play_loop(&mut self, effect: SoundEffect) -> anyhow::Result<()> {
        if !self.looping.contains(&effect) {
            self.looping.push(effect);
        }
        log::debug!("audio: loop {:?}", effect);
        Ok(())
    }

    fn stop(&mut self, effect: SoundEffect) -> anyhow::Result<()> {
        if self.looping.contains(&effect) {
            self.looping.retain(|e| *e != effect);
            log::debug!("audio: stop {:?}", effect);
        }
        Ok(())
    }

    fn play_once(&mut self, effect: SoundEffect) -> anyhow::Result<()> {
        log::debug!("audio: play {:?}", effect);
        Ok(())
    }
}
