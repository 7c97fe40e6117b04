use glam::Vec3A;

use super::*;

const A: Vec3A = Vec3A::ZERO;
const B: Vec3A = Vec3A::new(1.0, 0.0, 0.0);

#[test]
fn test_straddling_samples_interpolate_linearly() {
  let v = interpolate(A, B, -1.0, 1.0).unwrap();
  assert!((v - Vec3A::new(0.5, 0.0, 0.0)).length() < 1e-6);

  let v = interpolate(A, B, -1.0, 3.0).unwrap();
  assert!((v - Vec3A::new(0.25, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_zero_sample_pins_vertex_to_that_endpoint() {
  let v = interpolate(A, B, 0.0, 1.0).unwrap();
  assert_eq!(v, A);

  let v = interpolate(A, B, 1.0, 0.0).unwrap();
  assert_eq!(v, B);

  // A zero against a negative sample also sits on the zero endpoint.
  let v = interpolate(A, B, 0.0, -1.0).unwrap();
  assert_eq!(v, A);
}

#[test]
fn test_two_zero_samples_use_midpoint() {
  let v = interpolate(A, B, 0.0, 0.0).unwrap();
  assert_eq!(v, Vec3A::new(0.5, 0.0, 0.0));
}

#[test]
fn test_near_equal_samples_use_midpoint() {
  let v = interpolate(A, B, -1e-7, 1e-7).unwrap();
  assert_eq!(v, Vec3A::new(0.5, 0.0, 0.0));
}

#[test]
fn test_same_side_samples_are_fatal() {
  assert!(matches!(
    interpolate(A, B, -0.1, -0.1),
    Err(MeshError::InterpolationOutsideSurface { .. })
  ));
  assert!(matches!(
    interpolate(A, B, 0.5, 2.0),
    Err(MeshError::InterpolationOutsideSurface { .. })
  ));
}
