//! World-space position of an entity.
//!
//! [`MapPosition`] is the pivot the follower systems move and the host reads
//! back for rendering. It is stored as a [`Vec3`] so 2D hosts can leave `z`
//! at zero while 3D hosts keep their depth.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, 0.0),
        }
    }

    pub fn from_vec3(pos: Vec3) -> Self {
        Self { pos }
    }
}
