use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::follower::positive;
use crate::error::ConfigurationError;

pub const DEFAULT_FRAME_RATE: f32 = 0.2;

/// Looping sprite-frame cycler.
///
/// `frame_rate` is the number of seconds each frame stays on screen. An empty
/// `frames` list makes the animation inert: it never advances and never
/// touches the sprite.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct FrameAnimation {
    pub frames: Vec<String>,
    pub frame_rate: f32,
    pub current_frame: usize,
    pub timer: f32,
}

impl FrameAnimation {
    pub fn new(frames: Vec<String>, frame_rate: f32) -> Self {
        Self {
            frames,
            frame_rate,
            current_frame: 0,
            timer: 0.0,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("frame_rate", self.frame_rate)
    }

    pub fn current(&self) -> Option<&str> {
        self.frames.get(self.current_frame).map(String::as_str)
    }

    /// Accumulate `delta` seconds and return the frame to display.
    ///
    /// Once the timer reaches `frame_rate` it restarts from zero and the
    /// animation moves exactly one frame forward, even if `delta` spans
    /// several frame intervals.
    pub fn advance(&mut self, delta: f32) -> Option<&str> {
        if self.is_inert() {
            return None;
        }
        if delta.is_finite() && delta > 0.0 {
            self.timer += delta;
            if self.timer >= self.frame_rate {
                self.timer = 0.0;
                self.current_frame = (self.current_frame + 1) % self.frames.len();
            }
        }
        self.current()
    }
}
