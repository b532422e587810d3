//! # Primitive Shape Generation
//!
//! This module contains functions to generate common 3D primitive shapes.
//! All shapes are generated Y-up with outward normals and texture coordinates.

use super::GeometryData;
use cgmath::{InnerSpace, Vector3};
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
pub fn generate_cube() -> GeometryData {
    generate_box(
        Vector3::new(-0.5, -0.5, -0.5),
        Vector3::new(0.5, 0.5, 0.5),
    )
}

/// Generate an axis-aligned box spanning `min` to `max`
///
/// Each face gets its own four vertices so normals stay flat.
pub fn generate_box(min: Vector3<f32>, max: Vector3<f32>) -> GeometryData {
    let mut data = GeometryData::new();

    #[rustfmt::skip]
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front (+Z)
        ([0.0, 0.0, 1.0], [[min.x, min.y, max.z], [max.x, min.y, max.z], [max.x, max.y, max.z], [min.x, max.y, max.z]]),
        // Back (-Z)
        ([0.0, 0.0, -1.0], [[max.x, min.y, min.z], [min.x, min.y, min.z], [min.x, max.y, min.z], [max.x, max.y, min.z]]),
        // Left (-X)
        ([-1.0, 0.0, 0.0], [[min.x, min.y, min.z], [min.x, min.y, max.z], [min.x, max.y, max.z], [min.x, max.y, min.z]]),
        // Right (+X)
        ([1.0, 0.0, 0.0], [[max.x, min.y, max.z], [max.x, min.y, min.z], [max.x, max.y, min.z], [max.x, max.y, max.z]]),
        // Top (+Y)
        ([0.0, 1.0, 0.0], [[min.x, max.y, max.z], [max.x, max.y, max.z], [max.x, max.y, min.z], [min.x, max.y, min.z]]),
        // Bottom (-Y)
        ([0.0, -1.0, 0.0], [[min.x, min.y, min.z], [max.x, min.y, min.z], [max.x, min.y, max.z], [min.x, min.y, max.z]]),
    ];

    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        data.vertices.extend_from_slice(&corners);
        data.normals.extend_from_slice(&[normal; 4]);
        data.tex_coords
            .extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(radius: f32, longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            let x = sin_theta * cos_phi;
            let y = cos_theta;
            let z = sin_theta * sin_phi;

            data.vertices.push([x * radius, y * radius, z * radius]);
            data.normals.push([x, y, z]);

            let u = long as f32 / long_segs as f32;
            let v = lat as f32 / lat_segs as f32;
            data.tex_coords.push([u, v]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.push(first);
            data.indices.push(second);
            data.indices.push(first + 1);

            data.indices.push(second);
            data.indices.push(second + 1);
            data.indices.push(first + 1);
        }
    }

    data
}

/// Generate a torus lying in the XY plane
///
/// # Arguments
/// * `radius` - Distance from the torus center to the tube center
/// * `tube` - Tube radius
/// * `radial_segments` - Segments around the tube cross-section
/// * `tubular_segments` - Segments around the ring
pub fn generate_torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * 2.0 * PI;

        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * 2.0 * PI;

            let position = Vector3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vector3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize();

            data.vertices.push(position.into());
            data.normals.push(normal.into());
            data.tex_coords
                .push([i as f32 / tubular as f32, j as f32 / radial as f32]);
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;

            data.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    data
}

/// Generate a flat-shaded icosahedron
///
/// `detail` subdivides every face into `(detail + 1)^2` triangles whose
/// vertices are pushed back onto the sphere, so higher details approach a
/// sphere while keeping faceted normals.
pub fn generate_icosahedron(radius: f32, detail: u32) -> GeometryData {
    let t = (1.0 + 5f32.sqrt()) / 2.0;

    #[rustfmt::skip]
    let corners: [[f32; 3]; 12] = [
        [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
        [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
        [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
    ];

    #[rustfmt::skip]
    let faces: [[usize; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    let mut data = GeometryData::new();
    let steps = detail + 1;

    for face in faces {
        let [a, b, c] = face.map(|i| Vector3::from(corners[i]));

        // Grid point (i, j) on the face: a + (b - a) * i/steps + (c - a) * j/steps
        let point = |i: u32, j: u32| -> Vector3<f32> {
            let p = a + (b - a) * (i as f32 / steps as f32) + (c - a) * (j as f32 / steps as f32);
            p.normalize() * radius
        };

        for i in 0..steps {
            for j in 0..(steps - i) {
                push_flat_triangle(&mut data, point(i, j), point(i + 1, j), point(i, j + 1));

                if i + j + 1 < steps {
                    push_flat_triangle(
                        &mut data,
                        point(i + 1, j),
                        point(i + 1, j + 1),
                        point(i, j + 1),
                    );
                }
            }
        }
    }

    data
}

fn push_flat_triangle(data: &mut GeometryData, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) {
    let normal = (b - a).cross(c - a).normalize();
    let base = data.vertices.len() as u32;

    for (vertex, uv) in [(a, [0.0, 0.0]), (b, [1.0, 0.0]), (c, [0.0, 1.0])] {
        data.vertices.push(vertex.into());
        data.normals.push(normal.into());
        data.tex_coords.push(uv);
    }
    data.indices.extend_from_slice(&[base, base + 1, base + 2]);
}

/// Generate the three bars of an axes helper, ordered X, Y, Z
///
/// Each bar runs from the origin to `size` along its axis and is `size / 100`
/// thick, so it reads as a line at any zoom.
pub fn generate_axis_bars(size: f32) -> [GeometryData; 3] {
    let half = (size / 100.0).max(f32::EPSILON) / 2.0;
    [
        generate_box(Vector3::new(0.0, -half, -half), Vector3::new(size, half, half)),
        generate_box(Vector3::new(-half, 0.0, -half), Vector3::new(half, size, half)),
        generate_box(Vector3::new(-half, -half, 0.0), Vector3::new(half, half, size)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_box_bounds_match_corners() {
        let data = generate_box(Vector3::new(0.0, -1.0, 2.0), Vector3::new(3.0, 1.0, 2.5));
        let aabb = data.bounding_box().unwrap();
        assert_eq!(aabb.min, Vector3::new(0.0, -1.0, 2.0));
        assert_eq!(aabb.max, Vector3::new(3.0, 1.0, 2.5));
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(2.0, 8, 6);
        assert_eq!(sphere.vertices.len(), 9 * 7);
        assert_eq!(sphere.indices.len(), 8 * 6 * 6);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());
        for vertex in &sphere.vertices {
            assert!((length(*vertex) - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_torus_generation() {
        let torus = generate_torus(2.0, 0.5, 16, 100);
        assert_eq!(torus.vertex_count(), 17 * 101);
        assert_eq!(torus.triangle_count(), 16 * 100 * 2);

        let aabb = torus.bounding_box().unwrap();
        assert!((aabb.max.x - 2.5).abs() < 1e-4);
        assert!((aabb.max.z - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_icosahedron_generation() {
        let gem = generate_icosahedron(0.8, 0);
        assert_eq!(gem.triangle_count(), 20);
        assert_eq!(gem.vertex_count(), 60);
        for vertex in &gem.vertices {
            assert!((length(*vertex) - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn test_icosahedron_detail_subdivides_faces() {
        let gem = generate_icosahedron(1.0, 2);
        assert_eq!(gem.triangle_count(), 20 * 9);
        for normal in &gem.normals {
            assert!((length(*normal) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn axis_bars_extend_along_their_axis() {
        let [x, y, z] = generate_axis_bars(3.0);
        let (x, y, z) = (
            x.bounding_box().unwrap(),
            y.bounding_box().unwrap(),
            z.bounding_box().unwrap(),
        );
        assert!((x.width() - 3.0).abs() < 1e-5);
        assert!((y.height() - 3.0).abs() < 1e-5);
        assert!((z.depth() - 3.0).abs() < 1e-5);
        assert!(x.height() < 0.1 && y.width() < 0.1 && z.width() < 0.1);
    }
}
