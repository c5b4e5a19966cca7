//! Simulation systems.
//!
//! Submodules overview
//! - [`animation`] – advance frame animations and update sprite frame keys
//! - [`debugpath`] – build closed path segments for the debug overlay
//! - [`follower`] – start followers and move them along their loops
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod debugpath;
pub mod follower;
pub mod time;
