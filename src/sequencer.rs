//! Timed auto-advance through a fixed scene list.
//!
//! Each scene activation arms two timers on the host scheduler: a repeating
//! sampler that publishes progress for display, and a one-shot deadline that
//! advances to the next scene or ends playback. Both live inside an
//! [`Activation`]; replacing or clearing it cancels them.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::scene::{Scene, SceneList};
use crate::state::{Phase, PlaybackState};
use crate::timer::{Fired, Scheduler, TimerHandle};

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Sample,
    Deadline,
}

struct Activation {
    started_at: Duration,
    // Held only so dropping the activation cancels the timers.
    _sampler: TimerHandle<Tick>,
    _deadline: TimerHandle<Tick>,
}

/// What the presentation layer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View<'a> {
    pub scene: &'a Scene,
    pub show_intro: bool,
    pub show_end: bool,
    pub progress: f32,
    pub is_playing: bool,
}

impl<'a> View<'a> {
    pub fn project(scenes: &'a SceneList, state: &PlaybackState) -> Self {
        Self {
            scene: &scenes[state.current_index],
            show_intro: !state.is_playing && state.current_index == 0,
            show_end: !state.is_playing && state.current_index == scenes.last_index(),
            progress: state.progress,
            is_playing: state.is_playing,
        }
    }
}

pub struct Sequencer<C: Clock> {
    scenes: SceneList,
    clock: C,
    timers: Scheduler<Tick>,
    sample_interval: Duration,
    state: PlaybackState,
    activation: Option<Activation>,
}

impl<C: Clock> Sequencer<C> {
    pub fn new(scenes: SceneList, clock: C) -> Self {
        Self {
            scenes,
            clock,
            timers: Scheduler::new(),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            state: PlaybackState::IDLE,
            activation: None,
        }
    }

    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Begin playback from the first scene, abandoning any scene in flight.
    pub fn start(&mut self) {
        info!("starting playback ({} scenes)", self.scenes.len());
        self.reset();
    }

    /// Same effect as [`Sequencer::start`], triggered from the end screen.
    pub fn restart(&mut self) {
        match self.phase() {
            Phase::Playing(index) => info!("restarting playback from scene {}", index + 1),
            phase => info!("restarting playback from {:?}", phase),
        }
        self.reset();
    }

    /// Fire every timer due at the clock's current time. Called once per
    /// host loop iteration; returns how many timers fired.
    pub fn pump(&mut self) -> usize {
        let mut fired = 0;
        while let Some(Fired { at, event }) = self.timers.pop_due(self.clock.now()) {
            fired += 1;
            match event {
                Tick::Sample => self.on_sample(),
                Tick::Deadline => self.on_deadline(at),
            }
        }
        fired
    }

    pub fn view(&self) -> View<'_> {
        View::project(&self.scenes, &self.state)
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.scenes.last_index())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn reset(&mut self) {
        self.activation = None;
        self.state = PlaybackState { current_index: 0, is_playing: true, progress: 0.0 };
        self.arm(self.clock.now());
    }

    fn arm(&mut self, started_at: Duration) {
        // Old timers must be gone before new ones exist.
        self.activation = None;

        let scene = &self.scenes[self.state.current_index];
        debug!(
            "scene {} ({}/{}) for {}ms",
            scene.id,
            self.state.current_index + 1,
            self.scenes.len(),
            scene.duration_ms
        );

        // The sampler is armed first so a sample sharing the deadline's
        // instant fires before the deadline.
        let sampler = self.timers.every(started_at + self.sample_interval, self.sample_interval, Tick::Sample);
        let deadline = self.timers.once(started_at + scene.duration(), Tick::Deadline);

        self.activation = Some(Activation { started_at, _sampler: sampler, _deadline: deadline });
    }

    fn on_sample(&mut self) {
        let Some(activation) = &self.activation else {
            return;
        };
        let scene = &self.scenes[self.state.current_index];
        let elapsed = self.clock.now().saturating_sub(activation.started_at);
        let percent = elapsed.as_secs_f64() * 1000.0 / f64::from(scene.duration_ms) * 100.0;
        self.state.progress = percent.min(100.0) as f32;
    }

    fn on_deadline(&mut self, at: Duration) {
        self.activation = None;

        if self.state.current_index < self.scenes.last_index() {
            self.state.current_index += 1;
            self.state.progress = 0.0;
            self.arm(at);
        } else {
            self.state.is_playing = false;
            self.state.progress = 100.0;
            info!("playback finished");
        }
    }
}
