use super::camera_utils::{Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Y-up perspective camera looking from `eye` towards `target`.
///
/// The projection matrix is cached: after changing `fovy`, `aspect`, `znear`
/// or `zfar`, call [`update_projection_matrix`](Self::update_projection_matrix).
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub fovy: Deg<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    projection: Matrix4<f32>,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.projection * self.view_matrix()
    }
}

impl PerspectiveCamera {
    pub fn new(fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            fovy,
            aspect,
            znear,
            zfar,
            eye: Point3::new(0.0, 0.0, 0.0),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::unit_y(),
            projection: Matrix4::identity(),
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn set_position(&mut self, eye: Point3<f32>) {
        self.eye = eye;
    }

    pub fn look_at(&mut self, target: Point3<f32>) {
        self.target = target;
    }

    /// Recomputes the cached projection from the current frustum parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection = perspective(self.fovy, self.aspect, self.znear, self.zfar);
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// GPU representation of the current view and projection.
    pub fn uniform_data(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.eye.x, self.eye.y, self.eye.z, 1.0],
            view_proj: self.build_view_projection_matrix().into(),
            view: self.view_matrix().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(aspect: f32) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(Deg(60.0), aspect, 0.1, 10000.0);
        camera.set_position(Point3::new(0.0, 0.0, 10.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));
        camera
    }

    #[test]
    fn projection_is_cached_until_updated() {
        let mut camera = camera(800.0 / 600.0);
        let before = camera.projection_matrix();

        camera.aspect = 1600.0 / 900.0;
        assert_eq!(camera.projection_matrix(), before);

        camera.update_projection_matrix();
        assert_ne!(camera.projection_matrix(), before);
    }

    #[test]
    fn projection_scales_x_by_inverse_aspect() {
        let camera = camera(2.0);
        let projection = camera.projection_matrix();
        // x scale = y scale / aspect
        assert!((projection.x.x - projection.y.y / 2.0).abs() < 1e-5);
        let focal = 1.0 / (30.0f32.to_radians()).tan();
        assert!((projection.y.y - focal).abs() < 1e-5);
    }

    #[test]
    fn origin_projects_to_the_center_of_clip_space() {
        let camera = camera(1.5);
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));
        assert_eq!(camera.uniform_data().view_position, [0.0, 0.0, 10.0, 1.0]);
    }
}
