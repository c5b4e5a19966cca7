//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – looping sprite-frame cycler
//! - [`follower`] – closed-loop waypoint following state and movement settings
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rotation`] – orientation as a quaternion about the Z axis
//! - [`sprite`] – key of the sprite frame currently shown

pub mod animation;
pub mod follower;
pub mod mapposition;
pub mod rotation;
pub mod sprite;
