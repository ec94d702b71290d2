use glam::{Mat4, Vec3};

/// Fixed-eye perspective camera.
///
/// Defaults match the samples: 45° vertical field of view, near 0.1, far 10,
/// eye at (3, 3, 3) looking at the origin with +Y up.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,

    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 0.785,
            z_near: 0.1,
            z_far: 10.0,
            eye: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Right-handed perspective projection for wgpu's [0, 1] clip depth.
    ///
    /// Degenerate aspect ratios (zero-height window mid-resize) fall back to
    /// square so the matrix stays finite.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh(self.fov_y, aspect, self.z_near, self.z_far)
    }

    /// Right-handed look-at view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn projection_matches_closed_form() {
        // For a right-handed, zero-to-one depth perspective matrix:
        //   m00 = 1 / (tan(fov/2) * aspect)
        //   m11 = 1 / tan(fov/2)
        //   m22 = far / (near - far)
        //   m32 = near * far / (near - far)
        //   m23 = -1
        let cam = Camera::default();
        let aspect = 16.0 / 9.0;
        let m = cam.projection(aspect);

        let f = 1.0 / (cam.fov_y / 2.0).tan();
        let (near, far) = (cam.z_near, cam.z_far);

        assert!(approx(m.col(0).x, f / aspect));
        assert!(approx(m.col(1).y, f));
        assert!(approx(m.col(2).z, far / (near - far)));
        assert!(approx(m.col(3).z, near * far / (near - far)));
        assert!(approx(m.col(2).w, -1.0));
    }

    #[test]
    fn projection_survives_degenerate_aspect() {
        let cam = Camera::default();
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let m = cam.projection(bad);
            assert!(m.is_finite(), "aspect {bad} produced a non-finite matrix");
        }
    }

    #[test]
    fn view_moves_the_eye_to_the_origin() {
        let cam = Camera::default();
        let at_eye = cam.view().transform_point3(cam.eye);
        assert!(at_eye.length() < 1e-4);
    }

    #[test]
    fn view_looks_down_negative_z() {
        // The target must land on the -Z axis, at eye-target distance.
        let cam = Camera::default();
        let at_target = cam.view().transform_point3(cam.target);
        let dist = (cam.eye - cam.target).length();

        assert!(approx(at_target.x, 0.0));
        assert!(approx(at_target.y, 0.0));
        assert!(approx(at_target.z, -dist));
    }
}
