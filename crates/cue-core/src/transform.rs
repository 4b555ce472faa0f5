//! Device-to-scene coordinate conversion.
//!
//! The scene's screen transform can change between pointer events (resize,
//! zoom, CSS transforms), so the caller passes whatever the host reports at
//! call time and nothing is cached here.

use crate::error::TransformError;
use crate::shot::{DevicePoint, ScenePoint};

/// 2-D affine matrix in SVG/DOM layout.
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for ScreenMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScreenMatrix {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Uniform scale followed by a translation.
    pub fn scale_translate(scale: f64, tx: f64, ty: f64) -> Self {
        Self::new(scale, 0.0, 0.0, scale, tx, ty)
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(TransformError::Singular);
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        let e = -(a * self.e + c * self.f);
        let f = -(b * self.e + d * self.f);
        Ok(Self { a, b, c, d, e, f })
    }
}

/// Map a device point into scene-local coordinates through the inverse of
/// the scene's current screen transform.
///
/// `ctm` is `None` when the scene element is not attached or not rendered.
pub fn to_scene_local(
    device: DevicePoint,
    ctm: Option<ScreenMatrix>,
) -> Result<ScenePoint, TransformError> {
    let ctm = ctm.ok_or(TransformError::Detached)?;
    let (x, y) = ctm.inverse()?.apply(device.x, device.y);
    Ok(ScenePoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: ScenePoint, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-9, "y: {} != {}", actual.y, y);
    }

    #[test]
    fn test_identity_passes_through() {
        let p = to_scene_local(DevicePoint::new(12.5, -4.0), Some(ScreenMatrix::IDENTITY)).unwrap();
        assert_close(p, 12.5, -4.0);
    }

    #[test]
    fn test_inverse_of_pan_and_zoom() {
        // Scene drawn at 0.25x, offset by (8, 40) on screen.
        let ctm = ScreenMatrix::scale_translate(0.25, 8.0, 40.0);
        let p = to_scene_local(DevicePoint::new(33.0, 65.0), Some(ctm)).unwrap();
        assert_close(p, 100.0, 100.0);
    }

    #[test]
    fn test_inverse_of_rotation() {
        // 90 degree rotation: (x, y) -> (-y, x)
        let ctm = ScreenMatrix::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
        let p = to_scene_local(DevicePoint::new(-3.0, 2.0), Some(ctm)).unwrap();
        assert_close(p, 2.0, 3.0);
    }

    #[test]
    fn test_round_trip_through_matrix() {
        let ctm = ScreenMatrix::new(1.5, 0.2, -0.3, 0.8, 14.0, -7.0);
        let (sx, sy) = ctm.apply(21.0, 34.0);
        let p = to_scene_local(DevicePoint::new(sx, sy), Some(ctm)).unwrap();
        assert_close(p, 21.0, 34.0);
    }

    #[test]
    fn test_detached_scene_is_an_error() {
        let err = to_scene_local(DevicePoint::new(1.0, 1.0), None).unwrap_err();
        assert_eq!(err, TransformError::Detached);
    }

    #[test]
    fn test_singular_matrix_is_an_error() {
        let collapsed = ScreenMatrix::new(0.0, 0.0, 0.0, 0.0, 10.0, 10.0);
        let err = to_scene_local(DevicePoint::new(1.0, 1.0), Some(collapsed)).unwrap_err();
        assert_eq!(err, TransformError::Singular);
    }
}
