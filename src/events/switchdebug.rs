//! Event and observer to toggle debug path collection.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource, which gates [`debug_path_system`](crate::systems::debugpath::debug_path_system).
use crate::resources::debuglines::DebugLines;
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
///
/// Turning debug off also drops the geometry collected so far, so the host
/// stops drawing the overlay right away instead of on the next tick.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
    lines: Option<ResMut<DebugLines>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        if let Some(mut lines) = lines {
            lines.clear();
        }
        info!("Debug path overlay disabled");
    } else {
        commands.insert_resource(DebugMode {});
        info!("Debug path overlay enabled");
    }
}
