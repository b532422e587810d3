//! Animated shapes
//!
//! A [`Shape`] is one mesh node under the scene container. Its height is a
//! pure function of the frame time, its spin counts frames, and it grows in
//! once through an intro [`Tween`].

use std::f64::consts::TAU;

use cgmath::Vector3;

use crate::{
    animation::Tween,
    config::IntroConfig,
    error::{Result, SceneError},
    gfx::scene::{MaterialId, MeshId, NodeId, Renderable, SceneGraph, Transform},
};

/// Oscillation speed used when a shape does not set one, radians per ms.
pub const DEFAULT_SPEED: f64 = 0.001;
/// Y rotation added per rendered frame, in radians.
pub const DEFAULT_SPIN: f64 = 0.01;

/// Construction parameters of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub name: String,
    pub mesh: MeshId,
    pub material: MaterialId,
    pub position: Vector3<f32>,
    pub speed: Option<f64>,
    pub offset: Option<f64>,
    /// Creation order, staggers the intro
    pub index: usize,
    pub spin: f64,
}

impl ShapeDescriptor {
    pub fn new(mesh: MeshId, material: MaterialId, position: Vector3<f32>, index: usize) -> Self {
        Self {
            name: format!("shape-{index}"),
            mesh,
            material,
            position,
            speed: None,
            offset: None,
            index,
            spin: DEFAULT_SPIN,
        }
    }

    pub fn with_speed(mut self, speed: Option<f64>) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_offset(mut self, offset: Option<f64>) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Shape {
    node: NodeId,
    reference: Vector3<f32>,
    speed: f64,
    offset: f64,
    index: usize,
    spin: f64,
    frames: u64,
    intro: Tween,
}

impl Shape {
    /// Adds the shape's node under `container` at zero scale and schedules its
    /// intro to start at `now` seconds.
    pub fn new(
        graph: &mut SceneGraph,
        container: NodeId,
        descriptor: ShapeDescriptor,
        intro: &IntroConfig,
        now: f32,
    ) -> Result<Self> {
        let position = descriptor.position;
        if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
            return Err(SceneError::InvalidShape(format!(
                "`{}` has a non-finite position {:?}",
                descriptor.name, position
            )));
        }

        let speed = descriptor.speed.unwrap_or(DEFAULT_SPEED);
        if !speed.is_finite() || speed < 0.0 {
            return Err(SceneError::InvalidShape(format!(
                "`{}` has speed {speed}, expected a finite value >= 0",
                descriptor.name
            )));
        }

        let offset = descriptor.offset.unwrap_or(0.0);
        if !offset.is_finite() {
            return Err(SceneError::InvalidShape(format!(
                "`{}` has a non-finite offset",
                descriptor.name
            )));
        }

        let zero = Vector3::new(0.0, 0.0, 0.0);
        let node = graph.add_node(
            Some(container),
            descriptor.name,
            Transform {
                position,
                scale: zero,
                ..Default::default()
            },
            Some(Renderable {
                mesh: descriptor.mesh,
                material: descriptor.material,
            }),
        );

        let intro = Tween::new(zero, Vector3::new(1.0, 1.0, 1.0), intro.duration)
            .starting_at(now)
            .with_delay(intro.delay_for(descriptor.index))
            .with_easing(intro.easing);

        Ok(Self {
            node,
            reference: position,
            speed,
            offset,
            index: descriptor.index,
            spin: descriptor.spin,
            frames: 0,
            intro,
        })
    }

    /// Height of the shape at frame time `t` (milliseconds).
    pub fn height_at(&self, t: f64) -> f32 {
        ((t * self.speed + self.offset).sin() + self.reference.y as f64) as f32
    }

    /// Per-frame pose update for frame time `t` in milliseconds.
    pub fn render(&mut self, graph: &mut SceneGraph, t: f64) {
        self.frames += 1;
        let y = self.height_at(t);
        let spin = (self.frames as f64 * self.spin).rem_euclid(TAU) as f32;

        if let Some(transform) = graph.transform_mut(self.node) {
            transform.position.y = y;
            transform.rotation.y = spin;
        }
    }

    /// Applies the intro scale at `now` seconds until the tween completes.
    pub fn animate_intro(&mut self, graph: &mut SceneGraph, now: f32) {
        if self.intro.is_done() {
            return;
        }
        let scale = self.intro.sample(now);
        if let Some(transform) = graph.transform_mut(self.node) {
            transform.scale = scale;
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn reference_position(&self) -> Vector3<f32> {
        self.reference
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn intro(&self) -> &Tween {
        &self.intro
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TweenState;
    use crate::gfx::{geometry::generate_cube, scene::{Color, Material, Scene}};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn scene() -> (Scene, NodeId, MeshId, MaterialId) {
        let mut scene = Scene::new(Color::WHITE);
        let mesh = scene.add_mesh(generate_cube());
        let material = scene.add_material(Material::Basic { color: Color::WHITE });
        let container = scene.graph.add_group(None, "container");
        (scene, container, mesh, material)
    }

    fn shape(scene: &mut Scene, container: NodeId, descriptor: ShapeDescriptor) -> Shape {
        Shape::new(&mut scene.graph, container, descriptor, &IntroConfig::default(), 0.0).unwrap()
    }

    #[test]
    fn height_follows_the_oscillation_formula() {
        let (mut scene, container, mesh, material) = scene();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for index in 0..32 {
            let position = Vector3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );
            let speed = rng.random_range(0.0..0.01);
            let offset = rng.random_range(-20.0..20.0);
            let descriptor = ShapeDescriptor::new(mesh, material, position, index)
                .with_speed(Some(speed))
                .with_offset(Some(offset));
            let mut shape = shape(&mut scene, container, descriptor);

            let t: f64 = rng.random_range(0.0..1.0e6);
            shape.render(&mut scene.graph, t);

            let transform = scene.graph.transform(shape.node()).unwrap();
            let expected = (t * speed + offset).sin() + position.y as f64;
            assert!((transform.position.y as f64 - expected).abs() < 1e-5);
            assert_eq!(transform.position.x, position.x);
            assert_eq!(transform.position.z, position.z);
        }
    }

    #[test]
    fn defaults_apply_when_speed_and_offset_are_omitted() {
        let (mut scene, container, mesh, material) = scene();
        let shape = shape(
            &mut scene,
            container,
            ShapeDescriptor::new(mesh, material, Vector3::new(6.0, 2.0, -2.0), 0),
        );

        assert_eq!(shape.speed(), DEFAULT_SPEED);
        assert_eq!(shape.offset(), 0.0);
        assert!((shape.height_at(0.0) - 2.0).abs() < 1e-6);
        assert_eq!(scene.graph.get(shape.node()).unwrap().parent(), Some(container));
    }

    #[test]
    fn spin_counts_frames_not_time() {
        let (mut scene, container, mesh, material) = scene();
        let mut shape = shape(
            &mut scene,
            container,
            ShapeDescriptor::new(mesh, material, Vector3::new(0.0, 0.0, 0.0), 0),
        );

        let mut rng = StdRng::seed_from_u64(11);
        let mut t = 0.0;
        for _ in 0..250 {
            t += rng.random_range(0.0..100.0);
            shape.render(&mut scene.graph, t);
        }

        let rotation = scene.graph.transform(shape.node()).unwrap().rotation.y;
        let expected = (250.0 * DEFAULT_SPIN).rem_euclid(TAU) as f32;
        assert!((rotation - expected).abs() < 1e-5);
        assert_eq!(shape.frames(), 250);
    }

    #[test]
    fn spin_stays_bounded_over_long_sessions() {
        let (mut scene, container, mesh, material) = scene();
        let mut shape = shape(
            &mut scene,
            container,
            ShapeDescriptor::new(mesh, material, Vector3::new(0.0, 0.0, 0.0), 0),
        );
        shape.frames = 10_000_000_000;
        shape.render(&mut scene.graph, 0.0);

        let rotation = scene.graph.transform(shape.node()).unwrap().rotation.y;
        assert!((0.0..std::f32::consts::TAU + 1e-3).contains(&rotation));
    }

    #[test]
    fn zero_speed_freezes_height_but_keeps_spinning() {
        let (mut scene, container, mesh, material) = scene();
        let mut shape = shape(
            &mut scene,
            container,
            ShapeDescriptor::new(mesh, material, Vector3::new(1.0, 3.0, 0.0), 0)
                .with_speed(Some(0.0))
                .with_offset(Some(1.0)),
        );

        shape.render(&mut scene.graph, 0.0);
        let first = *scene.graph.transform(shape.node()).unwrap();
        shape.render(&mut scene.graph, 50_000.0);
        let second = *scene.graph.transform(shape.node()).unwrap();

        assert_eq!(first.position.y, second.position.y);
        assert!(second.rotation.y > first.rotation.y);
    }

    #[test]
    fn intro_scales_from_zero_to_one_once() {
        let (mut scene, container, mesh, material) = scene();
        let mut shape = shape(
            &mut scene,
            container,
            ShapeDescriptor::new(mesh, material, Vector3::new(0.0, 0.0, 0.0), 2),
        );

        let scale = |scene: &Scene, shape: &Shape| scene.graph.transform(shape.node()).unwrap().scale;
        assert_eq!(scale(&scene, &shape), Vector3::new(0.0, 0.0, 0.0));

        // index 2 waits 0.4 s
        shape.animate_intro(&mut scene.graph, 0.3);
        assert_eq!(scale(&scene, &shape), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(shape.intro().state(), TweenState::Pending);

        shape.animate_intro(&mut scene.graph, 1.0);
        let mid = scale(&scene, &shape);
        assert!(mid.x > 0.0 && mid.x < 1.0);

        shape.animate_intro(&mut scene.graph, 2.5);
        assert_eq!(scale(&scene, &shape), Vector3::new(1.0, 1.0, 1.0));
        assert!(shape.intro().is_done());

        for now in [3.0, 0.5, 100.0] {
            shape.animate_intro(&mut scene.graph, now);
            assert_eq!(scale(&scene, &shape), Vector3::new(1.0, 1.0, 1.0));
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let (mut scene, container, mesh, material) = scene();
        let intro = IntroConfig::default();
        let origin = Vector3::new(0.0, 0.0, 0.0);

        let bad = [
            ShapeDescriptor::new(mesh, material, Vector3::new(f32::NAN, 0.0, 0.0), 0),
            ShapeDescriptor::new(mesh, material, Vector3::new(0.0, f32::INFINITY, 0.0), 0),
            ShapeDescriptor::new(mesh, material, origin, 0).with_speed(Some(-0.001)),
            ShapeDescriptor::new(mesh, material, origin, 0).with_speed(Some(f64::NAN)),
            ShapeDescriptor::new(mesh, material, origin, 0).with_offset(Some(f64::INFINITY)),
        ];
        let nodes_before = scene.graph.len();
        for descriptor in bad {
            assert!(matches!(
                Shape::new(&mut scene.graph, container, descriptor, &intro, 0.0),
                Err(SceneError::InvalidShape(_))
            ));
        }
        assert_eq!(scene.graph.len(), nodes_before);
    }
}
