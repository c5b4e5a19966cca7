//! Snailpath library.
//!
//! Headless waypoint following and sprite-frame cycling on top of `bevy_ecs`.
//! A host spawns entities, calls [`simulation::Simulation::tick`] once per
//! frame, and renders from the components the systems write.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod simulation;
pub mod systems;
