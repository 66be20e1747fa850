//! Frame building and render sinks
//!
//! One tick projects the scene into a flat list of 2D primitives and hands
//! it to whatever [`RenderSink`] was injected: the egui painter in the
//! widget, a counting sink in the CLI, [`NullSink`] in tests.

use glam::{Mat4, Vec2, Vec3};

use super::camera::{project, Camera};
use crate::scene::data::{Scene, WireMesh, POINT_COLOR, POINT_WORLD_RADIUS};

/// A projected drawing command, in viewport pixels.
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    Line {
        a: Vec2,
        b: Vec2,
        color: [u8; 3],
        opacity: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: [u8; 3],
        opacity: f32,
    },
}

pub struct RenderFrame {
    pub viewport: Vec2,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count()
    }

    pub fn disc_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Disc { .. }))
            .count()
    }
}

/// Consumer of a projected frame.
pub trait RenderSink {
    fn submit(&mut self, frame: &RenderFrame);
}

/// Sink that discards every frame.
pub struct NullSink;

impl RenderSink for NullSink {
    fn submit(&mut self, _frame: &RenderFrame) {}
}

/// Project the scene through the camera into draw order: glow shell, grid,
/// globe, data points.
pub fn build_frame(scene: &Scene, camera: &Camera, viewport: Vec2) -> RenderFrame {
    let vp = camera.view_proj();
    let mut primitives = Vec::new();

    // Glow shell: the silhouette disc of the back shell.
    if let Some(center) = project(&vp, Vec3::ZERO, viewport) {
        if let Some(rim) = project(&vp, Vec3::X * scene.glow.radius, viewport) {
            primitives.push(Primitive::Disc {
                center,
                radius: (rim - center).length(),
                color: scene.glow.color,
                opacity: scene.glow.opacity,
            });
        }
    }

    push_wireframe(&mut primitives, &scene.grid, &vp, viewport);
    push_wireframe(&mut primitives, &scene.globe, &vp, viewport);

    for point in &scene.points {
        let Some(center) = project(&vp, point.position, viewport) else {
            continue;
        };
        let radius = project(&vp, point.position + Vec3::X * POINT_WORLD_RADIUS, viewport)
            .map(|rim| (rim - center).length())
            .unwrap_or(1.0);
        primitives.push(Primitive::Disc {
            center,
            radius,
            color: POINT_COLOR,
            opacity: point.opacity,
        });
    }

    RenderFrame {
        viewport,
        primitives,
    }
}

fn push_wireframe(primitives: &mut Vec<Primitive>, mesh: &WireMesh, vp: &Mat4, viewport: Vec2) {
    let model = Mat4::from_rotation_y(mesh.rotation_y) * Mat4::from_scale(Vec3::splat(mesh.radius));
    let mvp = *vp * model;
    for seg in &mesh.segments {
        if let (Some(a), Some(b)) = (project(&mvp, seg[0], viewport), project(&mvp, seg[1], viewport))
        {
            primitives.push(Primitive::Line {
                a,
                b,
                color: mesh.color,
                opacity: mesh.opacity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Vec2 = Vec2::new(300.0, 300.0);

    fn seeded_scene(points: usize) -> Scene {
        let mut rng = StdRng::seed_from_u64(3);
        Scene::build(points, &mut rng)
    }

    struct CountingSink {
        frames: usize,
        last_primitives: usize,
    }

    impl RenderSink for CountingSink {
        fn submit(&mut self, frame: &RenderFrame) {
            self.frames += 1;
            self.last_primitives = frame.primitives.len();
        }
    }

    #[test]
    fn full_scene_projects_every_object() {
        let scene = seeded_scene(50);
        let camera = Camera::new(1.0);
        let frame = build_frame(&scene, &camera, VIEWPORT);

        // Everything is well inside the frustum: one glow disc, every
        // wireframe segment, one disc per point.
        assert_eq!(
            frame.line_count(),
            scene.globe.segments.len() + scene.grid.segments.len()
        );
        assert_eq!(frame.disc_count(), 1 + scene.points.len());
    }

    #[test]
    fn empty_scene_renders_zero_points() {
        let scene = seeded_scene(0);
        let camera = Camera::new(1.0);
        let frame = build_frame(&scene, &camera, VIEWPORT);
        // Only the glow disc remains among discs.
        assert_eq!(frame.disc_count(), 1);
    }

    #[test]
    fn point_discs_carry_point_opacity() {
        let mut scene = seeded_scene(3);
        for p in &mut scene.points {
            p.opacity = 0.5;
        }
        let camera = Camera::new(1.0);
        let frame = build_frame(&scene, &camera, VIEWPORT);
        let point_discs: Vec<_> = frame
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Disc { opacity, .. } if *opacity == 0.5))
            .collect();
        assert_eq!(point_discs.len(), 3);
    }

    #[test]
    fn glow_disc_is_centered() {
        let scene = seeded_scene(0);
        let camera = Camera::new(1.0);
        let frame = build_frame(&scene, &camera, VIEWPORT);
        let Some(Primitive::Disc { center, radius, .. }) = frame.primitives.first() else {
            panic!("glow disc missing");
        };
        assert!((center.x - 150.0).abs() < 1e-3);
        assert!((center.y - 150.0).abs() < 1e-3);
        assert!(*radius > 0.0);
    }

    #[test]
    fn sinks_receive_frames() {
        let scene = seeded_scene(5);
        let camera = Camera::new(1.0);
        let frame = build_frame(&scene, &camera, VIEWPORT);

        let mut counting = CountingSink {
            frames: 0,
            last_primitives: 0,
        };
        counting.submit(&frame);
        counting.submit(&frame);
        assert_eq!(counting.frames, 2);
        assert_eq!(counting.last_primitives, frame.primitives.len());

        NullSink.submit(&frame);
    }
}
