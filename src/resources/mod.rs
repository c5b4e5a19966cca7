//! ECS resources made available to systems.
//!
//! Overview
//! - `debuglines` – debug path geometry for the host overlay
//! - `debugmode` – presence toggles debug path collection
//! - `followerconfig` – INI-backed defaults for followers and the runner
//! - `scene` – JSON scene description of paths and followers
//! - `worldtime` – simulation time and delta
pub mod debuglines;
pub mod debugmode;
pub mod followerconfig;
pub mod scene;
pub mod worldtime;
