//! Orbit controls: pointer input mapped to orbit, dolly and pan around a target.
//!
//! Input accumulates into pending deltas; [`OrbitControls::update`] applies them
//! to a camera once per frame. With damping enabled only a fraction of each
//! delta is applied per update and the rest decays, which gives the camera
//! inertia after the pointer is released.

use crate::camera::PerspectiveCamera;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-6;

/// Closest the camera may get to the orbit target. Below this the view
/// direction is no longer well defined.
pub const MIN_CAMERA_DISTANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around +Y, measured from +Z.
    theta: f32,
}

impl Spherical {
    /// `None` when `v` is too short to carry a direction.
    fn from_offset(v: Vec3) -> Option<Self> {
        let radius = v.length();
        if radius < EPS {
            return None;
        }
        Some(Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        })
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    delta: Spherical,
    scale: f32,
    pan_offset: Vec3,
    last_position: Option<Vec3>,
    last_spherical: Option<Spherical>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            delta: Spherical::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            last_position: None,
            last_spherical: None,
        }
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor;
        self
    }

    /// Queue an orbit from a pointer drag of `delta` pixels on a viewport
    /// `viewport_height` pixels tall. A full-height drag is one full turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta.theta -= TAU * delta.x / h * self.rotate_speed;
        self.delta.phi -= TAU * delta.y / h * self.rotate_speed;
    }

    /// Queue a dolly. Positive steps move toward the target.
    pub fn dolly(&mut self, steps: f32) {
        self.scale *= 0.95_f32.powf(self.zoom_speed * steps);
    }

    /// Queue a pan in the camera plane. Drag distance is converted to world
    /// units at the target's depth so the target tracks the pointer.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, camera: &PerspectiveCamera) {
        let h = viewport_height.max(1.0);
        let distance = (camera.position - self.target).length();
        let half_fov = (camera.fov.to_radians() * 0.5).tan();
        let world_per_pixel = 2.0 * distance * half_fov / h * self.pan_speed;
        self.pan_offset += camera.right() * (-delta.x * world_per_pixel);
        self.pan_offset += camera.camera_up() * (delta.y * world_per_pixel);
    }

    /// True while queued motion has not fully decayed.
    pub fn is_moving(&self) -> bool {
        self.delta.theta.abs() > EPS
            || self.delta.phi.abs() > EPS
            || self.pan_offset.length_squared() > EPS
            || (self.scale - 1.0).abs() > EPS
    }

    /// Apply all queued motion at once, ignoring damping. Used when no frame
    /// loop is running to decay it.
    pub fn settle(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let damping = std::mem::replace(&mut self.enable_damping, false);
        let moved = self.update(camera);
        self.enable_damping = damping;
        moved
    }

    /// Apply queued motion to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        // A camera sitting on the target keeps the last good orientation, or
        // looks down -Z if there never was one.
        let mut spherical = Spherical::from_offset(camera.position - self.target)
            .or(self.last_spherical)
            .unwrap_or(Spherical {
                radius: MIN_CAMERA_DISTANCE,
                phi: PI / 2.0,
                theta: 0.0,
            });
        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.delta.theta * step;
        spherical.phi += self.delta.phi * step;

        let min_phi = self.min_polar_angle.max(EPS);
        let max_phi = self.max_polar_angle.min(PI - EPS);
        spherical.phi = spherical.phi.clamp(min_phi, max_phi);

        let min_radius = self.min_distance.max(MIN_CAMERA_DISTANCE);
        spherical.radius =
            (spherical.radius * self.scale).clamp(min_radius, self.max_distance.max(min_radius));
        self.last_spherical = Some(spherical);

        self.target += self.pan_offset * step;

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.delta.theta *= decay;
            self.delta.phi *= decay;
            self.pan_offset *= decay;
        } else {
            self.delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let moved = self
            .last_position
            .is_none_or(|last| last.distance_squared(camera.position) > EPS);
        self.last_position = Some(camera.position);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at_z2() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 0.0, 2.0);
        cam.look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn idle_update_keeps_position() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO).with_damping(0.05);
        controls.update(&mut cam);
        assert!((cam.position - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        // a quarter of the viewport height is a quarter turn
        controls.rotate(Vec2::new(-100.0, 0.0), 400.0);
        controls.update(&mut cam);
        assert!((cam.position - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
        assert!(!controls.is_moving());
    }

    #[test]
    fn damped_rotation_keeps_gliding() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO).with_damping(0.1);
        controls.rotate(Vec2::new(-50.0, 0.0), 400.0);

        assert!(controls.update(&mut cam));
        let first = cam.position;
        assert!(controls.is_moving());
        assert!(controls.update(&mut cam));
        assert_ne!(cam.position, first);
        // radius is preserved by orbiting
        assert!((cam.position.length() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn damping_converges() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO).with_damping(0.05);
        controls.rotate(Vec2::new(30.0, 10.0), 600.0);
        for _ in 0..2000 {
            controls.update(&mut cam);
        }
        assert!(!controls.is_moving());
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.rotate(Vec2::new(0.0, 10_000.0), 100.0);
        controls.update(&mut cam);
        assert!(cam.position.is_finite());
        assert!(cam.position.y <= 2.0);
        assert!(cam.position.y > 1.99);
    }

    #[test]
    fn dolly_in_moves_closer_and_respects_min_distance() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.dolly(1.0);
        controls.update(&mut cam);
        assert!((cam.position.length() - 1.9).abs() < 1e-4);

        controls.min_distance = 1.5;
        controls.dolly(100.0);
        controls.update(&mut cam);
        assert!((cam.position.length() - 1.5).abs() < 1e-4);
    }

    #[test]
    fn deep_dolly_in_does_not_trap_camera_on_target() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.dolly(300.0);
        controls.update(&mut cam);
        controls.update(&mut cam);
        assert!(cam.position.length() >= MIN_CAMERA_DISTANCE * 0.99);
        assert!(cam.view_projection().is_finite());

        controls.dolly(-300.0);
        controls.update(&mut cam);
        assert!(cam.view_projection().is_finite());
        assert!(cam.position.length() > 1.0);
        // direction survives the round trip
        assert!(cam.position.normalize().z > 0.999);
    }

    #[test]
    fn camera_placed_on_target_gets_pushed_off() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::ZERO;
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.update(&mut cam);
        assert!(cam.position.length() >= MIN_CAMERA_DISTANCE * 0.99);
        assert!(cam.view_projection().is_finite());
    }

    #[test]
    fn settle_applies_full_delta_and_keeps_damping() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO).with_damping(0.05);
        controls.rotate(Vec2::new(-100.0, 0.0), 400.0);
        assert!(controls.settle(&mut cam));
        assert!((cam.position - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
        assert!(!controls.is_moving());
        assert!(controls.enable_damping);
    }

    #[test]
    fn pan_moves_target_with_camera() {
        let mut cam = camera_at_z2();
        let mut controls = OrbitControls::new(Vec3::ZERO);
        controls.pan(Vec2::new(-100.0, 0.0), 400.0, &cam);
        controls.update(&mut cam);
        assert!(controls.target.x > 0.0);
        assert!((cam.position.x - controls.target.x).abs() < 1e-5);
        assert_eq!(cam.target, controls.target);
    }
}
