//! Vector math helpers
//!
//! Small pure functions shared by the sensor adapter and the similarity
//! mapper. Vectors are `nalgebra::Vector3<f32>` throughout.

mod vector;

pub use vector::{cross, dot_xy, normalize, rotate_axis, MathError};
