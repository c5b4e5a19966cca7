//! Waypoint follower systems.
//!
//! - [`follower_init_system`] brings newly spawned followers online, or
//!   switches them off for good when their configuration is unusable.
//! - [`follower_movement_system`] advances every active follower by the
//!   current [`WorldTime`] delta.
//!
//! # Related
//!
//! - [`crate::components::follower::WaypointFollower`] – per-entity path state
//! - [`crate::events::follower`] – events triggered by these systems

use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::components::animation::FrameAnimation;
use crate::components::follower::{FollowerStatus, WaypointFollower};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::error::ConfigurationError;
use crate::events::follower::{FollowerDisabledEvent, WaypointReachedEvent};
use crate::resources::worldtime::WorldTime;

/// Initialize every follower still in [`FollowerStatus::Uninitialized`].
///
/// An entity that animates also needs a [`Sprite`] to show its frames and a
/// usable frame rate. Failures are logged once, reported through
/// [`FollowerDisabledEvent`] and leave the follower inactive.
pub fn follower_init_system(
    mut query: Query<(
        Entity,
        &mut WaypointFollower,
        Option<&mut MapPosition>,
        Option<&FrameAnimation>,
        Has<Sprite>,
    )>,
    mut commands: Commands,
) {
    for (entity, mut follower, mut position, animation, has_sprite) in query.iter_mut() {
        if follower.status() != FollowerStatus::Uninitialized {
            continue;
        }

        let result = match check_animation(animation, has_sprite) {
            Ok(()) => follower.initialize(position.as_deref_mut()),
            Err(e) => {
                follower.deactivate(e.clone());
                Err(e)
            }
        };

        match result {
            Ok(()) => debug!(
                "Follower {:?} started with {} waypoints",
                entity,
                follower.waypoints().len()
            ),
            Err(error) => {
                error!("Follower {:?} disabled: {}", entity, error);
                commands.trigger(FollowerDisabledEvent { entity, error });
            }
        }
    }
}

fn check_animation(
    animation: Option<&FrameAnimation>,
    has_sprite: bool,
) -> Result<(), ConfigurationError> {
    let Some(animation) = animation else {
        return Ok(());
    };
    if !has_sprite {
        return Err(ConfigurationError::MissingSprite);
    }
    if animation.is_inert() {
        return Ok(());
    }
    animation.validate()
}

/// Move and turn every active follower toward its current waypoint.
pub fn follower_movement_system(
    time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &mut WaypointFollower,
        &mut MapPosition,
        &mut Rotation,
    )>,
    mut commands: Commands,
) {
    for (entity, mut follower, mut position, mut rotation) in query.iter_mut() {
        if !follower.is_active() {
            continue;
        }
        if let Some(index) = follower.advance(&mut position, &mut rotation, time.delta) {
            let next_index = follower.current_index();
            debug!(
                "Follower {:?} reached waypoint {} -> {}",
                entity, index, next_index
            );
            commands.trigger(WaypointReachedEvent {
                entity,
                index,
                next_index,
            });
        }
    }
}
