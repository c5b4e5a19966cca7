//! Debug geometry handed to the host.
//!
//! Rebuilt every tick while [`DebugMode`](super::debugmode::DebugMode) is
//! present and emptied when it is not. Hosts draw each segment as a line in
//! whatever overlay they have.

use bevy_ecs::prelude::*;
use glam::Vec3;

/// A straight line between two points of a follower's loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl PathSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// Closed path polylines keyed by the follower entity that owns them.
#[derive(Resource, Clone, Debug, Default)]
pub struct DebugLines {
    pub paths: Vec<(Entity, Vec<PathSegment>)>,
}

impl DebugLines {
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn segments_for(&self, entity: Entity) -> Option<&[PathSegment]> {
        self.paths
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, segments)| segments.as_slice())
    }

    pub fn segment_count(&self) -> usize {
        self.paths.iter().map(|(_, s)| s.len()).sum()
    }
}
