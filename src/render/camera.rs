//! Perspective camera
//!
//! Field of view, clip planes and position are fixed at creation; only the
//! aspect ratio changes, and only from the resize adapter.

use glam::{Mat4, Vec2, Vec3, Vec4};

pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

pub struct Camera {
    aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self { aspect }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Combined view-projection matrix, recomputed on demand.
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(CAMERA_POSITION, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_Y_DEG.to_radians(),
            self.aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        proj * view
    }

    /// Project a world-space point into viewport pixels.
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        project(&self.view_proj(), world, viewport)
    }
}

/// Project through a precomputed (model-)view-projection matrix.
/// Returns `None` for points at or behind the camera plane.
pub fn project(mvp: &Mat4, point: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip: Vec4 = *mvp * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(300.0, 300.0);

    #[test]
    fn origin_projects_to_center() {
        let camera = Camera::new(1.0);
        let center = camera.project(Vec3::ZERO, VIEWPORT).unwrap();
        assert!((center.x - 150.0).abs() < 1e-3);
        assert!((center.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn x_axis_projects_right_of_center() {
        let camera = Camera::new(1.0);
        let p = camera.project(Vec3::new(1.0, 0.0, 0.0), VIEWPORT).unwrap();
        assert!(p.x > 150.0);
        assert!((p.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn y_axis_projects_above_center() {
        // Screen y grows downward.
        let camera = Camera::new(1.0);
        let p = camera.project(Vec3::new(0.0, 1.0, 0.0), VIEWPORT).unwrap();
        assert!(p.y < 150.0);
    }

    #[test]
    fn point_behind_camera_is_culled() {
        let camera = Camera::new(1.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0), VIEWPORT).is_none());
    }

    #[test]
    fn aspect_rescales_x_only() {
        let narrow = Camera::new(1.0);
        let wide = Camera::new(2.0);
        let world = Vec3::new(1.0, 1.0, 0.0);
        let a = narrow.project(world, VIEWPORT).unwrap();
        let b = wide.project(world, VIEWPORT).unwrap();
        assert!((a.y - b.y).abs() < 1e-3);
        // Wider frustum squeezes x toward the center.
        assert!((b.x - 150.0).abs() < (a.x - 150.0).abs());
    }

    #[test]
    fn aspect_is_mutable() {
        let mut camera = Camera::new(1.6);
        assert_eq!(camera.aspect(), 1.6);
        camera.set_aspect(1.0);
        assert_eq!(camera.aspect(), 1.0);
    }
}
