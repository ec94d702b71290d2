use std::f32::consts::TAU;

use glam::Mat4;

/// Time-driven rotation about the Y axis.
///
/// `advance` integrates `speed * dt`; the static sample variants use
/// [`Spin::still`] (speed 0) and a paused spin holds its current angle.
#[derive(Debug, Copy, Clone)]
pub struct Spin {
    /// Radians per second.
    pub speed: f32,
    pub paused: bool,
    angle: f32,
}

impl Spin {
    pub fn new(speed: f32) -> Self {
        Self { speed, paused: false, angle: 0.0 }
    }

    /// A spin that never moves.
    pub fn still() -> Self {
        Self::new(0.0)
    }

    /// Advances the angle by `speed * dt` seconds, wrapping at a full turn.
    pub fn advance(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.angle = (self.angle + self.speed * dt).rem_euclid(TAU);
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Model matrix for the current angle.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle)
    }

    /// Model matrix with an extra pointer-driven tilt folded in.
    ///
    /// `yaw` is added to the spin angle; `pitch` rotates about X afterwards,
    /// so the cube leans toward the pointer without skewing the spin axis.
    pub fn model_with_tilt(&self, yaw: f32, pitch: f32) -> Mat4 {
        Mat4::from_rotation_x(pitch) * Mat4::from_rotation_y(self.angle + yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_integrates_speed() {
        let mut spin = Spin::new(2.0);
        spin.advance(0.5);
        assert!((spin.angle() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps_at_tau() {
        let mut spin = Spin::new(1.0);
        spin.advance(TAU + 0.25);
        assert!((spin.angle() - 0.25).abs() < 1e-4);
        assert!(spin.angle() < TAU);
    }

    #[test]
    fn paused_spin_holds_its_angle() {
        let mut spin = Spin::new(1.0);
        spin.advance(1.0);
        let before = spin.angle();

        spin.toggle_paused();
        spin.advance(5.0);
        assert_eq!(spin.angle(), before);

        spin.toggle_paused();
        spin.advance(0.5);
        assert!(spin.angle() > before);
    }

    #[test]
    fn still_spin_is_the_identity() {
        let mut spin = Spin::still();
        spin.advance(10.0);
        assert_eq!(spin.angle(), 0.0);
        assert_eq!(spin.model(), Mat4::IDENTITY);
    }

    #[test]
    fn zero_tilt_matches_plain_model() {
        let mut spin = Spin::new(1.0);
        spin.advance(0.7);
        assert!(spin.model_with_tilt(0.0, 0.0).abs_diff_eq(spin.model(), 1e-6));
    }
}
