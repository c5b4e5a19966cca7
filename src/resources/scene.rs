//! Scene description loaded from JSON.
//!
//! A scene names a set of closed paths and lists the followers that walk
//! them. Paths take either `[x, y]` or `[x, y, z]` points, already in loop
//! order.
//!
//! ```json
//! {
//!   "paths": {
//!     "garden": [[0, 0], [4, 0], [4, 3], [0, 3]]
//!   },
//!   "followers": [
//!     {
//!       "name": "snail",
//!       "path": "garden",
//!       "frames": ["snail_0", "snail_1", "snail_2"],
//!       "move_speed": 1.5
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted movement and animation fields fall back to
//! [`FollowerConfig`](super::followerconfig::FollowerConfig).

use std::path::Path;

use glam::Vec3;
use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::follower::MovementSettings;
use crate::resources::followerconfig::FollowerConfig;

/// Parsed scene file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneData {
    #[serde(default)]
    pub paths: FxHashMap<String, Vec<PathPoint>>,
    #[serde(default)]
    pub followers: Vec<FollowerData>,
}

/// A waypoint written as a 2D or 3D array.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum PathPoint {
    Xyz([f32; 3]),
    Xy([f32; 2]),
}

impl PathPoint {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            PathPoint::Xyz([x, y, z]) => Vec3::new(x, y, z),
            PathPoint::Xy([x, y]) => Vec3::new(x, y, 0.0),
        }
    }
}

/// One follower entry of a scene.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FollowerData {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub frames: Vec<String>,
    pub move_speed: Option<f32>,
    pub rotation_speed: Option<f32>,
    pub waypoint_threshold: Option<f32>,
    pub frame_rate: Option<f32>,
}

impl FollowerData {
    pub fn movement_settings(&self, config: &FollowerConfig) -> MovementSettings {
        MovementSettings {
            move_speed: self.move_speed.unwrap_or(config.move_speed),
            rotation_speed: self.rotation_speed.unwrap_or(config.rotation_speed),
            waypoint_threshold: self
                .waypoint_threshold
                .unwrap_or(config.waypoint_threshold),
        }
    }

    pub fn frame_rate(&self, config: &FollowerConfig) -> f32 {
        self.frame_rate.unwrap_or(config.frame_rate)
    }
}

impl SceneData {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene file {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse scene: {}", e))
    }

    /// Waypoints of the named path. Unknown names yield an empty list, which
    /// the follower reports as a configuration error on its first tick.
    pub fn waypoints(&self, name: &str) -> Vec<Vec3> {
        match self.paths.get(name) {
            Some(points) => points.iter().map(|p| p.to_vec3()).collect(),
            None => {
                warn!("Scene has no path named '{}'", name);
                Vec::new()
            }
        }
    }

    /// A single snail crawling around a rectangle, used when no scene file is given.
    pub fn demo() -> Self {
        let mut paths = FxHashMap::default();
        paths.insert(
            "garden".to_string(),
            vec![
                PathPoint::Xy([0.0, 0.0]),
                PathPoint::Xy([6.0, 0.0]),
                PathPoint::Xy([6.0, 4.0]),
                PathPoint::Xy([0.0, 4.0]),
            ],
        );
        Self {
            paths,
            followers: vec![FollowerData {
                name: "snail".to_string(),
                path: "garden".to_string(),
                frames: (0..4).map(|i| format!("snail_{}", i)).collect(),
                move_speed: None,
                rotation_speed: None,
                waypoint_threshold: None,
                frame_rate: None,
            }],
        }
    }
}
