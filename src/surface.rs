//! Render surface sizing and shared viewport state
//!
//! The surface is a square patch in the hero section: 300px on desktop
//! viewports, 200px below the mobile breakpoint. Resize events only write
//! scalars here; the animation loop reads them on its next tick.

/// Viewport width below which the surface drops to its small size.
pub const SURFACE_BREAKPOINT_PX: f32 = 768.0;
/// Surface side length at or above the breakpoint.
pub const SURFACE_SIDE_PX: f32 = 300.0;
/// Surface side length below the breakpoint.
pub const SURFACE_SIDE_SMALL_PX: f32 = 200.0;

/// Side length of the square render surface for a given viewport width.
pub fn side_for_viewport(viewport_width: f32) -> f32 {
    if viewport_width < SURFACE_BREAKPOINT_PX {
        SURFACE_SIDE_SMALL_PX
    } else {
        SURFACE_SIDE_PX
    }
}

/// Window dimensions as last reported by the host, plus a generation counter
/// bumped on every resize event so the app can detect changes without
/// comparing floats.
#[derive(Clone, Copy, Debug)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub generation: u32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            generation: 0,
        }
    }

    /// Record a resize event.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Current side length for the render surface.
    pub fn surface_side(&self) -> f32 {
        side_for_viewport(self.width)
    }

    /// Aspect ratio of the full window (used for the camera at creation).
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
