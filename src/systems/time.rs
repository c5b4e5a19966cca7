//! Time update system.
//!
//! Called by the host once per tick, before the schedule runs, so every
//! system of that tick sees the same delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Feed the host's unscaled frame delta into [`WorldTime`].
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
