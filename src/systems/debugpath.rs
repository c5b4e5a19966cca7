//! Debug path geometry.
//!
//! [`closed_path_segments`] turns a waypoint loop into line segments and
//! [`debug_path_system`] collects them for every follower into
//! [`DebugLines`] while [`DebugMode`] is present. Nothing here touches the
//! simulation state.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::follower::WaypointFollower;
use crate::resources::debuglines::{DebugLines, PathSegment};
use crate::resources::debugmode::DebugMode;

/// Segments joining consecutive waypoints, closed back to the first point.
///
/// Any loop of two or more waypoints gets the closing segment, so a
/// two-point loop is drawn out and back.
pub fn closed_path_segments(waypoints: &[Vec3]) -> Vec<PathSegment> {
    let mut segments: Vec<PathSegment> = waypoints
        .windows(2)
        .map(|pair| PathSegment::new(pair[0], pair[1]))
        .collect();
    if let [first, .., last] = waypoints {
        segments.push(PathSegment::new(*last, *first));
    }
    segments
}

pub fn debug_path_system(
    debug_mode: Option<Res<DebugMode>>,
    query: Query<(Entity, &WaypointFollower)>,
    mut lines: ResMut<DebugLines>,
) {
    lines.clear();
    if debug_mode.is_none() {
        return;
    }
    for (entity, follower) in query.iter() {
        let segments = closed_path_segments(follower.waypoints());
        if !segments.is_empty() {
            lines.paths.push((entity, segments));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<Vec3> {
        (0..n).map(|i| Vec3::new(i as f32, (i * i) as f32, 0.0)).collect()
    }

    #[test]
    fn test_empty_and_single_have_no_segments() {
        assert!(closed_path_segments(&[]).is_empty());
        assert!(closed_path_segments(&points(1)).is_empty());
    }

    #[test]
    fn test_two_points_close_back_to_start() {
        let p = points(2);
        assert_eq!(
            closed_path_segments(&p),
            vec![PathSegment::new(p[0], p[1]), PathSegment::new(p[1], p[0])]
        );
    }

    #[test]
    fn test_loop_closes_to_first_point() {
        let p = points(4);
        let segments = closed_path_segments(&p);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], PathSegment::new(p[0], p[1]));
        assert_eq!(segments[2], PathSegment::new(p[2], p[3]));
        assert_eq!(segments[3], PathSegment::new(p[3], p[0]));
    }
}
