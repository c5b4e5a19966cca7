use bevy_ecs::prelude::Component;

/// Sprite shown for an entity, identified by the key of its current frame.
///
/// The host resolves `frame_key` to whatever texture or atlas region it
/// renders. [`FrameAnimation`](super::animation::FrameAnimation) rewrites the
/// key as frames advance.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    pub frame_key: String,
}

impl Sprite {
    pub fn new(frame_key: impl Into<String>) -> Self {
        Self {
            frame_key: frame_key.into(),
        }
    }
}
