//! Scene model for the holographic globe
//!
//! The scene is the ownership root for everything drawn: the globe
//! wireframe, its glow shell, the overlay grid and the orbiting data points.
//! Built once at startup and mutated only by the animator.

use glam::Vec3;
use rand::Rng;
use tracing::{debug, trace};

use super::geometry::{icosphere_wireframe, uv_sphere_wireframe};

pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SUBDIVISIONS: u32 = 3;
pub const GLOBE_BASE_OPACITY: f32 = 0.3;

pub const GLOW_RADIUS: f32 = 1.1;
pub const GLOW_OPACITY: f32 = 0.1;

pub const GRID_RADIUS: f32 = 1.05;
pub const GRID_SEGMENTS: u32 = 16;
pub const GRID_OPACITY: f32 = 0.2;

pub const POINT_WORLD_RADIUS: f32 = 0.02;
pub const POINT_BASE_OPACITY: f32 = 0.8;
pub const POINT_RADIUS_MIN: f32 = 1.2;
pub const POINT_RADIUS_SPREAD: f32 = 0.3;
pub const PULSE_SPEED_MIN: f32 = 0.02;
pub const PULSE_SPEED_SPREAD: f32 = 0.03;

/// Hologram palette, shared with the painter layer.
pub const GLOBE_COLOR: [u8; 3] = [0, 255, 255];
pub const GRID_COLOR: [u8; 3] = [138, 43, 226];
pub const POINT_COLOR: [u8; 3] = [0, 191, 255];

/// A wireframe mesh: unit-radius segments scaled and spun at projection time.
pub struct WireMesh {
    pub segments: Vec<[Vec3; 2]>,
    pub radius: f32,
    pub rotation_y: f32,
    pub opacity: f32,
    pub color: [u8; 3],
}

/// Translucent shell behind the globe. Never mutated after creation.
pub struct GlowShell {
    pub radius: f32,
    pub opacity: f32,
    pub color: [u8; 3],
}

/// A small marker orbiting the globe surface.
pub struct DataPoint {
    pub position: Vec3,
    pub base_radius: f32,
    pub pulse_speed: f32,
    pub opacity: f32,
}

pub struct Scene {
    pub globe: WireMesh,
    pub glow: GlowShell,
    pub grid: WireMesh,
    pub points: Vec<DataPoint>,
}

impl Scene {
    /// Build the full scene with `point_count` data points sampled from `rng`.
    pub fn build<R: Rng>(point_count: usize, rng: &mut R) -> Self {
        use std::f32::consts::PI;

        let globe = WireMesh {
            segments: icosphere_wireframe(GLOBE_SUBDIVISIONS),
            radius: GLOBE_RADIUS,
            rotation_y: 0.0,
            opacity: GLOBE_BASE_OPACITY,
            color: GLOBE_COLOR,
        };
        let grid = WireMesh {
            segments: uv_sphere_wireframe(GRID_SEGMENTS, GRID_SEGMENTS),
            radius: GRID_RADIUS,
            rotation_y: 0.0,
            opacity: GRID_OPACITY,
            color: GRID_COLOR,
        };
        let glow = GlowShell {
            radius: GLOW_RADIUS,
            opacity: GLOW_OPACITY,
            color: GLOBE_COLOR,
        };

        let mut points = Vec::with_capacity(point_count);
        for i in 0..point_count {
            let phi = rng.gen::<f32>() * PI * 2.0;
            let theta = rng.gen::<f32>() * PI;
            let radius = POINT_RADIUS_MIN + rng.gen::<f32>() * POINT_RADIUS_SPREAD;

            let position = Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            );

            let pulse_speed = PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPREAD;
            trace!(i, radius, pulse_speed, "Data point placed");

            points.push(DataPoint {
                position,
                base_radius: radius,
                pulse_speed,
                opacity: POINT_BASE_OPACITY,
            });
        }

        debug!(
            globe_segments = globe.segments.len(),
            grid_segments = grid.segments.len(),
            points = points.len(),
            "Scene built"
        );

        Scene {
            globe,
            glow,
            grid,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_scene(points: usize) -> Scene {
        let mut rng = StdRng::seed_from_u64(7);
        Scene::build(points, &mut rng)
    }

    #[test]
    fn point_parameters_in_range() {
        let scene = seeded_scene(50);
        assert_eq!(scene.points.len(), 50);
        for p in &scene.points {
            assert!((POINT_RADIUS_MIN..POINT_RADIUS_MIN + POINT_RADIUS_SPREAD)
                .contains(&p.base_radius));
            assert!((PULSE_SPEED_MIN..PULSE_SPEED_MIN + PULSE_SPEED_SPREAD)
                .contains(&p.pulse_speed));
        }
    }

    #[test]
    fn points_start_on_their_shell() {
        let scene = seeded_scene(50);
        for p in &scene.points {
            assert!(
                (p.position.length() - p.base_radius).abs() < 1e-5,
                "point off its shell: |{}| vs {}",
                p.position.length(),
                p.base_radius
            );
        }
    }

    #[test]
    fn initial_opacities() {
        let scene = seeded_scene(10);
        assert_eq!(scene.globe.opacity, GLOBE_BASE_OPACITY);
        assert_eq!(scene.grid.opacity, GRID_OPACITY);
        assert_eq!(scene.glow.opacity, GLOW_OPACITY);
        for p in &scene.points {
            assert_eq!(p.opacity, POINT_BASE_OPACITY);
        }
    }

    #[test]
    fn zero_points_is_valid() {
        let scene = seeded_scene(0);
        assert!(scene.points.is_empty());
        assert!(!scene.globe.segments.is_empty());
    }

    #[test]
    fn meshes_start_unrotated() {
        let scene = seeded_scene(1);
        assert_eq!(scene.globe.rotation_y, 0.0);
        assert_eq!(scene.grid.rotation_y, 0.0);
    }
}
