use super::{NamedColor, Palette, PlaybackTimer};
use crate::ColorRole;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Discrete inputs coming from whatever widgets drive playback.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    SetGeneration(u64),
    SetSpeed(f64),
    SetColor(ColorRole, NamedColor),
    StartPlayback,
    StopPlayback,
}

/// Selected generation, speed and colors, plus the Idle/Playing state machine.
#[derive(Debug)]
pub struct PlaybackController {
    current: u64,
    last: u64,
    speed: f64,
    palette: Palette,
    state: PlaybackState,
    timer: PlaybackTimer,
    touched: bool,
}

impl PlaybackController {
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 10.;
    pub const DEFAULT_SPEED: f64 = 1.;

    pub fn new(last_generation: u64) -> Self {
        Self {
            current: 0,
            last: last_generation,
            speed: Self::DEFAULT_SPEED,
            palette: Palette::default(),
            state: PlaybackState::Idle,
            timer: PlaybackTimer::new(Self::interval_for(Self::DEFAULT_SPEED)),
            touched: false,
        }
    }

    /// Delay between generations: half a second at speed 1.
    pub fn interval_for(speed: f64) -> Duration {
        Duration::from_secs_f64(1. / (2. * speed))
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        debug!(?command, state = ?self.state, "applying playback command");
        match command {
            Command::SetGeneration(generation) => {
                self.touched = true;
                self.current = generation.min(self.last);
                if self.state == PlaybackState::Playing {
                    if self.current == self.last {
                        self.stop();
                    } else {
                        self.timer.start(now);
                    }
                }
            }
            Command::SetSpeed(speed) => {
                if !speed.is_finite() {
                    warn!(speed, "ignoring non-finite playback speed");
                    return;
                }
                self.speed = speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED);
                self.timer.set_interval(Self::interval_for(self.speed));
            }
            Command::SetColor(role, color) => self.palette.set(role, color),
            Command::StartPlayback => {
                self.touched = true;
                if self.state == PlaybackState::Playing || self.current >= self.last {
                    return;
                }
                info!(from = self.current, to = self.last, speed = self.speed, "playback started");
                self.state = PlaybackState::Playing;
                self.timer.start(now);
            }
            Command::StopPlayback => {
                if self.state == PlaybackState::Playing {
                    self.stop();
                }
            }
        }
    }

    /// Advances to the next generation when its tick is due.
    ///
    /// Returns whether the current generation changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing || !self.timer.poll(now) {
            return false;
        }
        self.current += 1;
        if self.current >= self.last {
            self.stop();
        }
        true
    }

    fn stop(&mut self) {
        self.timer.cancel();
        self.state = PlaybackState::Idle;
        info!(generation = self.current, "playback stopped");
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn last_generation(&self) -> u64 {
        self.last
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// How long a UI may wait before the next tick is due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    pub fn title(&self) -> String {
        if self.touched {
            format!("Generation {}", self.current)
        } else {
            "Press START to begin".to_string()
        }
    }
}
