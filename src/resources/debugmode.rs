//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the closed path of every
//! follower should be collected for the host's debug overlay. Remove it to
//! stop producing debug geometry.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, [`crate::systems::debugpath::debug_path_system`] fills [`DebugLines`](super::debuglines::DebugLines).
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
