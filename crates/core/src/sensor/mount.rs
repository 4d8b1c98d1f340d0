//! Physical mount correction
//!
//! The sensor board sits tilted on the hat. Two fixed rotations bring its
//! frame back to the wearer's frame: first the (x, z) pair by `tilt_xz`
//! (pitch of the hat brim), then the (y, z) pair by `tilt_yz` (roll of the
//! board on the band).

use nalgebra::Vector3;

use crate::math::rotate_axis;

/// Two sequential axis-pair rotations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountCorrection {
    /// Rotation of the (x, z) pair in radians
    pub tilt_xz: f32,
    /// Rotation of the (y, z) pair in radians, applied second
    pub tilt_yz: f32,
}

impl MountCorrection {
    /// Create a mount correction from two angles in radians
    pub const fn new(tilt_xz: f32, tilt_yz: f32) -> Self {
        Self { tilt_xz, tilt_yz }
    }

    /// No rotation
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Rotate `v` into the wearer frame
    pub fn apply(&self, v: Vector3<f32>) -> Vector3<f32> {
        let (x, z) = rotate_axis(v.x, v.z, self.tilt_xz);
        let (y, z) = rotate_axis(v.y, z, self.tilt_yz);
        Vector3::new(x, y, z)
    }

    /// Both angles finite
    pub fn is_valid(&self) -> bool {
        self.tilt_xz.is_finite() && self.tilt_yz.is_finite()
    }
}
