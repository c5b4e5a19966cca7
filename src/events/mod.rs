//! Event types and observers.
//!
//! Submodules:
//! - [`follower`] – waypoint progress and follower shutdown notifications
//! - [`switchdebug`] – toggle debug path collection on/off
pub mod follower;
pub mod switchdebug;
