use cgmath::*;

use super::perspective_camera::PerspectiveCamera;

/// Limits applied to the orbit after every update.
#[derive(Debug, Clone, Copy)]
pub struct OrbitBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitBounds {
    fn default() -> Self {
        Self {
            min_distance: Some(1.0),
            max_distance: None,
            min_pitch: -std::f32::consts::PI / 2.0 + 0.001,
            max_pitch: std::f32::consts::PI / 2.0 - 0.001,
        }
    }
}

/// Orbits a [`PerspectiveCamera`] around a target point.
///
/// Input calls (`rotate`, `zoom`) only queue motion; [`update`](Self::update)
/// applies it once per frame. With damping enabled each update applies
/// `damping_factor` of the queued motion and keeps the rest for the next
/// frames, so the camera eases to a stop.
#[derive(Debug, Clone, Copy)]
pub struct OrbitControls {
    pub target: Point3<f32>,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Radians of yaw per pixel of horizontal drag
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub bounds: OrbitBounds,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

impl OrbitControls {
    pub fn new(target: Point3<f32>) -> Self {
        Self {
            target,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            bounds: OrbitBounds::default(),
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Queues a drag of `dx`/`dy` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= dx * self.rotate_speed;
        self.pending_pitch += dy * self.rotate_speed;
    }

    /// Queues a zoom step; positive values move away from the target.
    pub fn zoom(&mut self, amount: f32) {
        self.pending_zoom += amount * self.zoom_speed;
    }

    /// Whether queued motion is still being applied.
    pub fn is_moving(&self) -> bool {
        const EPSILON: f32 = 1e-6;
        self.pending_yaw.abs() > EPSILON
            || self.pending_pitch.abs() > EPSILON
            || self.pending_zoom.abs() > EPSILON
    }

    /// Applies queued motion to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.is_moving() {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            self.pending_zoom = 0.0;
            return false;
        }

        let step = if self.enable_damping {
            self.damping_factor.clamp(0.0, 1.0)
        } else {
            1.0
        };

        let offset = camera.eye - self.target;
        let distance = offset.magnitude().max(f32::EPSILON);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        let yaw = yaw + self.pending_yaw * step;
        let pitch = (pitch + self.pending_pitch * step)
            .clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        let distance = (distance + f32::log10(distance.max(1.0) + 1.0) * self.pending_zoom * step)
            .clamp(
                self.bounds.min_distance.unwrap_or(f32::EPSILON),
                self.bounds.max_distance.unwrap_or(f32::MAX),
            );

        camera.eye = self.target + calculate_cartesian_eye_offset(pitch, yaw, distance);
        camera.look_at(self.target);

        let keep = 1.0 - step;
        self.pending_yaw *= keep;
        self.pending_pitch *= keep;
        self.pending_zoom *= keep;
        true
    }
}

fn calculate_cartesian_eye_offset(pitch: f32, yaw: f32, distance: f32) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    )
}
