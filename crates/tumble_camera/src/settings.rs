use serde::{Deserialize, Serialize};
use tumble_math::*;

use crate::{Error, Result};

/// Initial placement of a camera, typically read from the `[camera]` section of a config file
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings<T: Real> {
    /// Eye position
    pub position        : Vec3<T>,
    /// Distance between the eye and the point it looks at
    pub target_distance : T,
}

impl<T: Real> CameraSettings<T> {
    /// Check that the settings describe a usable camera
    pub fn validate(&self) -> Result<()> {
        let Vec3 { x, y, z } = self.position;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(Error::InvalidPosition([x.to_f64(), y.to_f64(), z.to_f64()]));
        }

        let distance = self.target_distance;
        if !distance.is_finite() || distance <= T::zero() {
            return Err(Error::InvalidTargetDistance(distance.to_f64()));
        }
        Ok(())
    }
}

impl<T: Real> Default for CameraSettings<T> {
    fn default() -> Self {
        Self {
            position: Vec3::new(T::zero(), T::from_i32(5), T::from_i32(50)),
            target_distance: T::from_i32(50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(CameraSettings::<f32>::default().validate(), Ok(()));

        let settings = CameraSettings { position: Vec3::new(1.0f64, 2.0, 3.0), target_distance: 0.0 };
        assert_eq!(settings.validate(), Err(Error::InvalidTargetDistance(0.0)));

        let settings = CameraSettings { position: Vec3::new(1.0f64, 2.0, 3.0), target_distance: -4.0 };
        assert_eq!(settings.validate(), Err(Error::InvalidTargetDistance(-4.0)));

        let settings = CameraSettings { position: Vec3::new(1.0f32, f32::INFINITY, 3.0), target_distance: 10.0 };
        assert_eq!(settings.validate(), Err(Error::InvalidPosition([1.0, f64::INFINITY, 3.0])));

        let settings = CameraSettings { position: Vec3::zero(), target_distance: f32::NAN };
        assert!(matches!(settings.validate(), Err(Error::InvalidTargetDistance(_))));
    }

    #[test]
    fn test_deserialize() {
        let settings: CameraSettings<f32> = toml::from_str("position = [1.0, 2.0, 3.0]\ntarget_distance = 20.0").unwrap();
        assert_eq!(settings.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(settings.target_distance, 20.0);

        let settings: CameraSettings<f64> = toml::from_str("target_distance = 8.0").unwrap();
        assert_eq!(settings.position, Vec3::new(0.0, 5.0, 50.0));
        assert_eq!(settings.target_distance, 8.0);

        assert!(toml::from_str::<CameraSettings<f32>>("position = [1.0, 2.0]").is_err());
    }
}
