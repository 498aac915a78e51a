//! Host configuration
//!
//! The window and projection are fixed; `HostConfig::default()` is the one
//! place those values live. Library callers building their own `HostConfig`
//! get it checked by [`HostConfig::validate`] before anything is acquired.

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Perspective parameters that cannot produce a projection
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    /// Window parameters GLFW would reject
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}

/// Top-level host configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostConfig {
    /// Window creation parameters
    pub window: WindowConfig,
    /// Perspective parameters applied on every resize
    pub projection: ProjectionConfig,
}

impl HostConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.projection.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in screen coordinates
    pub width: u32,
    /// Initial height in screen coordinates
    pub height: u32,
    /// Whether the user may resize the window. Forced resizes are handled
    /// either way.
    pub resizable: bool,
}

impl WindowConfig {
    /// Both dimensions must be non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidWindow(format!(
                "size {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glfw tutorial 03".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

/// Perspective projection configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
}

impl ProjectionConfig {
    /// Requires `0 < fov < 180` and `0 < near < far`
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Comparisons are written so that NaN fails them.
        let fov_in_range = self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0;
        let near_positive = self.near > 0.0;
        let far_beyond_near = self.far > self.near;

        if !fov_in_range {
            return Err(ConfigError::InvalidProjection(format!(
                "field of view {} is outside (0, 180)",
                self.fov_y_degrees
            )));
        }
        if !near_positive {
            return Err(ConfigError::InvalidProjection(format!(
                "near plane {} must be positive",
                self.near
            )));
        }
        if !far_beyond_near {
            return Err(ConfigError::InvalidProjection(format!(
                "far plane {} must lie beyond near plane {}",
                self.far, self.near
            )));
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            // Tutorial value, kept as is.
            near: 0.000_01,
            far: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_window() {
        let config = HostConfig::default();

        assert_eq!(config.window.title, "glfw tutorial 03");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!(!config.window.resizable);
        assert_eq!(config.projection.fov_y_degrees, 45.0);
        assert_eq!(config.projection.near, 0.00001);
        assert_eq!(config.projection.far, 10.0);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(HostConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_coincident_planes_rejected() {
        let projection = ProjectionConfig {
            near: 1.0,
            far: 1.0,
            ..ProjectionConfig::default()
        };

        assert!(matches!(
            projection.validate(),
            Err(ConfigError::InvalidProjection(_))
        ));
    }

    #[test]
    fn test_bad_planes_and_fov_rejected() {
        let cases = [
            (45.0, 0.0, 10.0),
            (45.0, -1.0, 10.0),
            (45.0, 5.0, 1.0),
            (0.0, 0.1, 10.0),
            (180.0, 0.1, 10.0),
            (f64::NAN, 0.1, 10.0),
            (45.0, f64::NAN, 10.0),
        ];

        for (fov_y_degrees, near, far) in cases {
            let projection = ProjectionConfig {
                fov_y_degrees,
                near,
                far,
            };
            assert!(projection.validate().is_err(), "{projection:?} accepted");
        }
    }

    #[test]
    fn test_zero_window_dimension_rejected() {
        let mut config = HostConfig::default();
        config.window.height = 0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindow(_))
        ));
    }
}
