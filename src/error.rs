//! Configuration errors raised while bringing a follower online.
//!
//! None of these are fatal to the host. The entity that produced one is
//! switched to [`FollowerStatus::Inactive`](crate::components::follower::FollowerStatus)
//! and stays that way for its lifetime.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The waypoint list is empty.
    EmptyPath,
    /// The entity has no [`MapPosition`](crate::components::mapposition::MapPosition) to drive.
    MissingPosition,
    /// The entity animates but has no [`Sprite`](crate::components::sprite::Sprite) to show frames on.
    MissingSprite,
    /// A speed, threshold or frame rate that must be a positive finite number.
    InvalidSetting { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyPath => write!(f, "no waypoints found in path"),
            ConfigurationError::MissingPosition => {
                write!(f, "entity has no MapPosition to move")
            }
            ConfigurationError::MissingSprite => {
                write!(f, "entity animates but has no Sprite component")
            }
            ConfigurationError::InvalidSetting { name, value } => {
                write!(f, "{} must be a positive number, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_setting() {
        let err = ConfigurationError::InvalidSetting {
            name: "move_speed",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "move_speed must be a positive number, got -1");
    }
}
