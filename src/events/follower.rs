//! Follower notifications.
//!
//! Triggered by the follower systems so game logic can react to progress
//! around the loop or to a follower that refused to start.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<WaypointReachedEvent>| {
//!     log::info!("{:?} reached waypoint {}", trigger.entity, trigger.index);
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::error::ConfigurationError;

/// Emitted when a follower gets within threshold of its current waypoint.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WaypointReachedEvent {
    /// The follower entity.
    pub entity: Entity,
    /// Index of the waypoint just reached.
    pub index: usize,
    /// Index of the waypoint now being targeted.
    pub next_index: usize,
}

/// Emitted once when a follower fails initialization and goes inactive.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FollowerDisabledEvent {
    pub entity: Entity,
    pub error: ConfigurationError,
}
