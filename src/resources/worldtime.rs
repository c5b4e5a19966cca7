//! Simulation clock resource.
//!
//! Written once per tick by [`update_world_time`](crate::systems::time::update_world_time)
//! and read by the follower and animation systems.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the simulation started.
    pub elapsed: f32,
    /// Scaled seconds covered by the current tick. Never negative.
    pub delta: f32,
    pub time_scale: f32,
    /// Number of ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Start a new tick of `dt` unscaled seconds.
    ///
    /// A host clock that reports a negative or non-finite delta produces an
    /// empty tick, which every system treats as a no-op.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.delta = if scaled.is_finite() && scaled > 0.0 {
            scaled
        } else {
            0.0
        };
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
