//! Waypoint follower component.
//!
//! A [`WaypointFollower`] moves its entity around a closed loop of points.
//! Each tick it turns the entity's [`Rotation`] toward the current target,
//! steps the [`MapPosition`] toward it without overshooting, and moves on to
//! the next waypoint once the target is within `waypoint_threshold`.
//!
//! # Lifecycle
//!
//! 1. Spawned as [`FollowerStatus::Uninitialized`].
//! 2. [`follower_init_system`](crate::systems::follower::follower_init_system)
//!    calls [`WaypointFollower::initialize`] once. Success snaps the entity to
//!    the first waypoint; any [`ConfigurationError`] leaves it
//!    [`FollowerStatus::Inactive`] for good.
//! 3. [`follower_movement_system`](crate::systems::follower::follower_movement_system)
//!    calls [`WaypointFollower::advance`] every tick.
//!
//! # Example
//! ```ignore
//! let mut follower = WaypointFollower::new(
//!     vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
//!     MovementSettings::default(),
//! );
//! let mut pos = MapPosition::default();
//! let mut rot = Rotation::default();
//! follower.initialize(Some(&mut pos))?;
//! follower.advance(&mut pos, &mut rot, 1.0 / 60.0);
//! ```

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::error::ConfigurationError;

pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;
pub const DEFAULT_WAYPOINT_THRESHOLD: f32 = 0.1;

/// Speeds and tolerances driving a follower. All values must be > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementSettings {
    /// Distance travelled per second.
    pub move_speed: f32,
    /// Fraction of the remaining turn applied per second, clamped to one per tick.
    pub rotation_speed: f32,
    /// Distance below which the current waypoint counts as reached.
    pub waypoint_threshold: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            waypoint_threshold: DEFAULT_WAYPOINT_THRESHOLD,
        }
    }
}

impl MovementSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("move_speed", self.move_speed)?;
        positive("rotation_speed", self.rotation_speed)?;
        positive("waypoint_threshold", self.waypoint_threshold)?;
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidSetting { name, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowerStatus {
    #[default]
    Uninitialized,
    Active,
    /// Initialization failed. The follower never moves again.
    Inactive,
}

/// Internal lifecycle. A failed follower keeps the error that stopped it.
#[derive(Debug, Clone, PartialEq)]
enum State {
    Uninitialized,
    Active,
    Inactive(ConfigurationError),
}

/// Moves an entity around a closed loop of waypoints.
#[derive(Component, Debug, Clone)]
#[require(Rotation)]
pub struct WaypointFollower {
    waypoints: Vec<Vec3>,
    current_index: usize,
    settings: MovementSettings,
    state: State,
}

impl WaypointFollower {
    pub fn new(waypoints: Vec<Vec3>, settings: MovementSettings) -> Self {
        Self {
            waypoints,
            current_index: 0,
            settings,
            state: State::Uninitialized,
        }
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_target(&self) -> Option<Vec3> {
        self.waypoints.get(self.current_index).copied()
    }

    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    pub fn status(&self) -> FollowerStatus {
        match self.state {
            State::Uninitialized => FollowerStatus::Uninitialized,
            State::Active => FollowerStatus::Active,
            State::Inactive(_) => FollowerStatus::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    /// Error that switched this follower off, if any.
    pub fn error(&self) -> Option<&ConfigurationError> {
        match &self.state {
            State::Inactive(error) => Some(error),
            _ => None,
        }
    }

    /// Switch the follower off for the rest of its life.
    pub fn deactivate(&mut self, error: ConfigurationError) {
        self.state = State::Inactive(error);
    }

    /// Validate the follower and place the entity on the first waypoint.
    ///
    /// `position` is `None` when the entity has nothing to move. Any error
    /// leaves the follower [`FollowerStatus::Inactive`]. Calling this on a
    /// follower that already went through initialization changes nothing and
    /// reports the first outcome.
    pub fn initialize(
        &mut self,
        position: Option<&mut MapPosition>,
    ) -> Result<(), ConfigurationError> {
        match &self.state {
            State::Active => return Ok(()),
            State::Inactive(error) => return Err(error.clone()),
            State::Uninitialized => {}
        }

        match self.try_initialize(position) {
            Ok(()) => {
                self.state = State::Active;
                Ok(())
            }
            Err(e) => {
                self.deactivate(e.clone());
                Err(e)
            }
        }
    }

    fn try_initialize(
        &mut self,
        position: Option<&mut MapPosition>,
    ) -> Result<(), ConfigurationError> {
        self.revalidate()?;
        let position = position.ok_or(ConfigurationError::MissingPosition)?;
        position.pos = self.waypoints[0];
        self.current_index = 0;
        Ok(())
    }

    /// Errors that make this follower unusable, independent of its entity.
    fn revalidate(&self) -> Result<(), ConfigurationError> {
        if self.waypoints.is_empty() {
            return Err(ConfigurationError::EmptyPath);
        }
        self.settings.validate()
    }

    /// Advance one tick of `delta` seconds.
    ///
    /// Returns the index of the waypoint reached this tick, if any. At most
    /// one waypoint is consumed per call no matter how large `delta` is.
    pub fn advance(
        &mut self,
        position: &mut MapPosition,
        rotation: &mut Rotation,
        delta: f32,
    ) -> Option<usize> {
        if !self.is_active() || !(delta > 0.0 && delta.is_finite()) {
            return None;
        }
        let target = self.current_target()?;

        let direction = (target - position.pos).normalize_or_zero();
        if direction != Vec3::ZERO {
            let angle = direction.y.atan2(direction.x);
            let target_rotation = Quat::from_rotation_z(angle);
            let t = (self.settings.rotation_speed * delta).clamp(0.0, 1.0);
            rotation.quat = rotation.quat.slerp(target_rotation, t).normalize();
        }

        position.pos = move_towards(position.pos, target, self.settings.move_speed * delta);

        if position.pos.distance(target) < self.settings.waypoint_threshold {
            let reached = self.current_index;
            self.current_index = (self.current_index + 1) % self.waypoints.len();
            Some(reached)
        } else {
            None
        }
    }
}

/// Step from `current` toward `target` by at most `max_distance`, landing
/// exactly on `target` when it is closer than that.
pub fn move_towards(current: Vec3, target: Vec3, max_distance: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_distance || distance == 0.0 {
        target
    } else {
        current + to_target / distance * max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn settings(move_speed: f32) -> MovementSettings {
        MovementSettings {
            move_speed,
            ..MovementSettings::default()
        }
    }

    fn ready(waypoints: Vec<Vec3>, s: MovementSettings) -> (WaypointFollower, MapPosition, Rotation) {
        let mut follower = WaypointFollower::new(waypoints, s);
        let mut pos = MapPosition::default();
        follower.initialize(Some(&mut pos)).unwrap();
        (follower, pos, Rotation::default())
    }

    #[test]
    fn test_move_towards_clamps_to_target() {
        let p = move_towards(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), 10.0);
        assert_eq!(p, Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_move_towards_partial_step() {
        let p = move_towards(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), 2.5);
        assert!(approx_eq(p.x, 1.5));
        assert!(approx_eq(p.y, 2.0));
    }

    #[test]
    fn test_move_towards_zero_distance() {
        let p = move_towards(Vec3::ONE, Vec3::ONE, 0.0);
        assert_eq!(p, Vec3::ONE);
    }

    #[test]
    fn test_initialize_snaps_to_first_waypoint() {
        let mut follower = WaypointFollower::new(
            vec![Vec3::new(5.0, -2.0, 0.0), Vec3::ZERO],
            MovementSettings::default(),
        );
        let mut pos = MapPosition::new(100.0, 100.0);
        assert!(follower.initialize(Some(&mut pos)).is_ok());
        assert_eq!(pos.pos, Vec3::new(5.0, -2.0, 0.0));
        assert_eq!(follower.current_index(), 0);
        assert_eq!(follower.status(), FollowerStatus::Active);
    }

    #[test]
    fn test_initialize_empty_path_is_inactive() {
        let mut follower = WaypointFollower::new(Vec::new(), MovementSettings::default());
        let mut pos = MapPosition::new(1.0, 2.0);
        assert_eq!(
            follower.initialize(Some(&mut pos)),
            Err(ConfigurationError::EmptyPath)
        );
        assert_eq!(follower.status(), FollowerStatus::Inactive);
        assert_eq!(pos.pos, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_initialize_missing_position() {
        let mut follower = WaypointFollower::new(vec![Vec3::ZERO], MovementSettings::default());
        assert_eq!(
            follower.initialize(None),
            Err(ConfigurationError::MissingPosition)
        );
        assert!(!follower.is_active());
    }

    #[test]
    fn test_initialize_rejects_non_positive_settings() {
        let mut follower = WaypointFollower::new(vec![Vec3::ZERO], settings(0.0));
        let mut pos = MapPosition::default();
        assert_eq!(
            follower.initialize(Some(&mut pos)),
            Err(ConfigurationError::InvalidSetting {
                name: "move_speed",
                value: 0.0
            })
        );
        assert_eq!(follower.status(), FollowerStatus::Inactive);
    }

    #[test]
    fn test_initialize_twice_keeps_progress() {
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)], settings(1.0));
        follower.advance(&mut pos, &mut rot, 0.1);
        assert_eq!(follower.current_index(), 1);
        assert!(follower.initialize(Some(&mut pos)).is_ok());
        assert_eq!(follower.current_index(), 1);
    }

    #[test]
    fn test_inactive_stays_inactive() {
        let mut follower = WaypointFollower::new(Vec::new(), MovementSettings::default());
        let _ = follower.initialize(None);
        let mut pos = MapPosition::default();
        assert_eq!(
            follower.initialize(Some(&mut pos)),
            Err(ConfigurationError::EmptyPath)
        );
        assert_eq!(follower.status(), FollowerStatus::Inactive);
        assert_eq!(follower.error(), Some(&ConfigurationError::EmptyPath));
    }

    #[test]
    fn test_deactivated_follower_reports_its_own_error() {
        let mut follower = WaypointFollower::new(vec![Vec3::ZERO], MovementSettings::default());
        follower.deactivate(ConfigurationError::MissingSprite);
        let mut pos = MapPosition::new(4.0, 4.0);
        assert_eq!(
            follower.initialize(Some(&mut pos)),
            Err(ConfigurationError::MissingSprite)
        );
        assert_eq!(follower.error(), Some(&ConfigurationError::MissingSprite));
        assert_eq!(pos.pos, Vec3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn test_advance_before_initialize_is_noop() {
        let mut follower =
            WaypointFollower::new(vec![Vec3::new(10.0, 0.0, 0.0)], MovementSettings::default());
        let mut pos = MapPosition::default();
        let mut rot = Rotation::default();
        assert_eq!(follower.advance(&mut pos, &mut rot, 1.0), None);
        assert_eq!(pos.pos, Vec3::ZERO);
        assert_eq!(rot, Rotation::default());
    }

    #[test]
    fn test_advance_step_is_bounded_by_speed() {
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)], settings(4.0));
        // Consume waypoint 0, which the entity already sits on.
        follower.advance(&mut pos, &mut rot, 0.5);
        for _ in 0..10 {
            let before = pos.pos;
            follower.advance(&mut pos, &mut rot, 0.5);
            assert!(before.distance(pos.pos) <= 4.0 * 0.5 + EPSILON);
        }
        assert!(approx_eq(pos.pos.x, 20.0));
    }

    #[test]
    fn test_advance_never_overshoots() {
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)], settings(50.0));
        follower.advance(&mut pos, &mut rot, 1.0);
        follower.advance(&mut pos, &mut rot, 1.0);
        assert_eq!(pos.pos, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_advance_consumes_one_waypoint_per_tick() {
        let waypoints = vec![
            Vec3::ZERO,
            Vec3::new(0.01, 0.0, 0.0),
            Vec3::new(0.02, 0.0, 0.0),
        ];
        let (mut follower, mut pos, mut rot) = ready(waypoints, settings(100.0));
        assert_eq!(follower.advance(&mut pos, &mut rot, 1.0), Some(0));
        assert_eq!(follower.current_index(), 1);
        assert_eq!(follower.advance(&mut pos, &mut rot, 1.0), Some(1));
        assert_eq!(follower.current_index(), 2);
        assert_eq!(follower.advance(&mut pos, &mut rot, 1.0), Some(2));
        assert_eq!(follower.current_index(), 0);
    }

    #[test]
    fn test_advance_zero_and_negative_delta_are_noops() {
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(5.0, 5.0, 0.0)], settings(1.0));
        follower.advance(&mut pos, &mut rot, 0.1);
        let snapshot = (pos, rot, follower.current_index());
        assert_eq!(follower.advance(&mut pos, &mut rot, 0.0), None);
        assert_eq!(follower.advance(&mut pos, &mut rot, -1.0), None);
        assert_eq!(follower.advance(&mut pos, &mut rot, f32::NAN), None);
        assert_eq!((pos, rot, follower.current_index()), snapshot);
    }

    #[test]
    fn test_single_waypoint_stays_put() {
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::new(2.0, 3.0, 0.0)], MovementSettings::default());
        for _ in 0..20 {
            follower.advance(&mut pos, &mut rot, 0.25);
            assert_eq!(pos.pos, Vec3::new(2.0, 3.0, 0.0));
            assert_eq!(follower.current_index(), 0);
        }
        assert_eq!(rot, Rotation::default());
    }

    #[test]
    fn test_rotation_blends_toward_heading() {
        let s = MovementSettings {
            move_speed: 0.5,
            rotation_speed: 1.0,
            waypoint_threshold: 0.1,
        };
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)], s);
        follower.advance(&mut pos, &mut rot, 0.1);
        // Heading is +Y (90 degrees); a tenth of the turn is applied.
        follower.advance(&mut pos, &mut rot, 0.1);
        assert!(approx_eq(rot.degrees(), 9.0));
        assert!(rot.degrees() < 90.0);
    }

    #[test]
    fn test_rotation_snaps_when_factor_saturates() {
        let s = MovementSettings {
            move_speed: 0.5,
            rotation_speed: 20.0,
            waypoint_threshold: 0.1,
        };
        let (mut follower, mut pos, mut rot) =
            ready(vec![Vec3::ZERO, Vec3::new(-10.0, 0.0, 0.0)], s);
        follower.advance(&mut pos, &mut rot, 0.1);
        follower.advance(&mut pos, &mut rot, 0.1);
        let facing_back = Quat::from_rotation_z(std::f32::consts::PI);
        assert!(rot.quat.dot(facing_back).abs() > 1.0 - EPSILON);
    }
}
