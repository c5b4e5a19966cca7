//! Orientation of an entity.
//!
//! Stored as a quaternion so the follower can blend it with `slerp`. Sprites
//! only ever turn about the Z axis, so [`Rotation::degrees`] is what a 2D
//! renderer usually wants.

use bevy_ecs::prelude::Component;
use glam::{EulerRot, Quat};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub quat: Quat,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            quat: Quat::IDENTITY,
        }
    }
}

impl Rotation {
    /// Rotation of `degrees` about the Z axis.
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            quat: Quat::from_rotation_z(degrees.to_radians()),
        }
    }

    /// Angle about the Z axis in degrees, in `(-180, 180]`.
    pub fn degrees(&self) -> f32 {
        let (_, _, z) = self.quat.to_euler(EulerRot::XYZ);
        z.to_degrees()
    }
}
