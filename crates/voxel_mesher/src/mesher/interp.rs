//! Isosurface edge interpolation.

use glam::Vec3A;

use crate::constants::{ISO_LEVEL, MIN_SAMPLE_DELTA};
use crate::error::MeshError;

/// Locate the surface crossing on the edge from `p1` to `p2`.
///
/// Exactly one endpoint sitting on the isolevel places the vertex at that
/// endpoint; two zero samples place it at the midpoint. Two samples on the
/// same strict side of the isolevel mean the caller fed an edge with no
/// crossing, which is fatal.
pub fn interpolate(p1: Vec3A, p2: Vec3A, v1: f32, v2: f32) -> Result<Vec3A, MeshError> {
  if v1 == ISO_LEVEL && v2 == ISO_LEVEL {
    return Ok((p1 + p2) * 0.5);
  }
  if v1 == ISO_LEVEL {
    return Ok(p1);
  }
  if v2 == ISO_LEVEL {
    return Ok(p2);
  }
  if (v1 > ISO_LEVEL) == (v2 > ISO_LEVEL) {
    return Err(MeshError::InterpolationOutsideSurface {
      p1: p1.into(),
      p2: p2.into(),
      v1,
      v2,
    });
  }
  if (v1 - v2).abs() < MIN_SAMPLE_DELTA {
    return Ok((p1 + p2) * 0.5);
  }
  let t = (ISO_LEVEL - v1) / (v2 - v1);
  Ok(p1 + (p2 - p1) * t)
}

#[cfg(test)]
#[path = "interp_test.rs"]
mod interp_test;
