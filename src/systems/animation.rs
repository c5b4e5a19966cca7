//! Animation system.
//!
//! [`animation_system`] advances every [`FrameAnimation`] by the current
//! [`WorldTime`] delta and writes the visible frame into the entity's
//! [`Sprite`]. The animation of a follower that failed initialization is
//! frozen along with its movement.

use bevy_ecs::prelude::*;

use crate::components::animation::FrameAnimation;
use crate::components::follower::{FollowerStatus, WaypointFollower};
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance frame timers and update sprite frame keys.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`FrameAnimation`] timer/frame state.
/// - Writes [`Sprite::frame_key`] only when the frame actually changes.
pub fn animation_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut FrameAnimation, &mut Sprite, Option<&WaypointFollower>)>,
) {
    for (mut anim, mut sprite, follower) in query.iter_mut() {
        if follower.is_some_and(|f| f.status() == FollowerStatus::Inactive) {
            continue;
        }
        let before = anim.current_frame;
        if anim.advance(time.delta).is_none() || anim.current_frame == before {
            continue;
        }
        if let Some(frame) = anim.current() {
            sprite.frame_key = frame.to_string();
        }
    }
}
