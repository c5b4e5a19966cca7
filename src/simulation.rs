//! Headless simulation host.
//!
//! [`Simulation`] owns the ECS [`World`] and the per-tick [`Schedule`]. A
//! rendering host drives it by calling [`Simulation::tick`] with its frame
//! delta and then reading back [`MapPosition`], [`Rotation`], [`Sprite`] and
//! [`DebugLines`].
//!
//! # Tick order
//!
//! 1. [`update_world_time`] applies `time_scale` and stores the delta
//! 2. [`follower_init_system`] starts newly spawned followers
//! 3. [`follower_movement_system`] moves and turns active followers
//! 4. [`animation_system`] cycles sprite frames
//! 5. [`debug_path_system`] rebuilds debug geometry when [`DebugMode`] is on

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::animation::FrameAnimation;
use crate::components::follower::{MovementSettings, WaypointFollower};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use crate::resources::debuglines::DebugLines;
use crate::resources::debugmode::DebugMode;
use crate::resources::followerconfig::FollowerConfig;
use crate::resources::scene::SceneData;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::debugpath::debug_path_system;
use crate::systems::follower::{follower_init_system, follower_movement_system};
use crate::systems::time::update_world_time;

/// Schedule running every per-tick system in order.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            follower_init_system,
            follower_movement_system,
            animation_system,
            debug_path_system,
        )
            .chain(),
    );
    schedule
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
}

impl Simulation {
    pub fn new(config: FollowerConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(DebugLines::default());
        if config.debug_path {
            world.insert_resource(DebugMode {});
        }
        world.insert_resource(config);
        world.add_observer(switch_debug_observer);

        Self {
            world,
            schedule: build_schedule(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &FollowerConfig {
        self.world.resource::<FollowerConfig>()
    }

    /// Spawn a follower that animates through `frames`.
    ///
    /// The sprite starts on the first frame. Validation happens on the next
    /// [`tick`](Self::tick), not here.
    pub fn spawn_follower(
        &mut self,
        waypoints: Vec<Vec3>,
        settings: MovementSettings,
        frames: Vec<String>,
        frame_rate: f32,
    ) -> Entity {
        let sprite = Sprite::new(frames.first().cloned().unwrap_or_default());
        self.world
            .spawn((
                MapPosition::default(),
                Rotation::default(),
                sprite,
                WaypointFollower::new(waypoints, settings),
                FrameAnimation::new(frames, frame_rate),
            ))
            .id()
    }

    /// Spawn every follower listed in `scene`, in order.
    pub fn spawn_scene(&mut self, scene: &SceneData) -> Vec<(String, Entity)> {
        let config = self.config().clone();
        scene
            .followers
            .iter()
            .map(|data| {
                let entity = self.spawn_follower(
                    scene.waypoints(&data.path),
                    data.movement_settings(&config),
                    data.frames.clone(),
                    data.frame_rate(&config),
                );
                info!(
                    "Spawned follower '{}' on path '{}' as {:?}",
                    data.name, data.path, entity
                );
                (data.name.clone(), entity)
            })
            .collect()
    }

    /// Run one simulation tick covering `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    /// Flip [`DebugMode`] on or off. Takes effect on the next tick.
    pub fn toggle_debug(&mut self) {
        self.world.trigger(SwitchDebugEvent {});
        self.world.flush();
    }

    pub fn debug_enabled(&self) -> bool {
        self.world.contains_resource::<DebugMode>()
    }

    pub fn debug_lines(&self) -> &DebugLines {
        self.world.resource::<DebugLines>()
    }
}
