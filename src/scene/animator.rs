//! Per-frame scene animation
//!
//! [`advance`] is the whole update step: rotation, orbital drift, pulse
//! opacity and the scan-line sweep. It is pure with respect to its explicit
//! inputs (scene state, regime context, `now` in milliseconds) so tests run
//! it against simulated clocks without any rendering backend.
//!
//! The step is deliberately NOT idempotent: rotation and the orbital angle
//! advance relative to current state, not `now`, so two calls with the same
//! timestamp move the scene twice.

use tracing::trace;

use super::data::{Scene, POINT_BASE_OPACITY};

/// Rotation advance per tick while the surface is not hovered.
pub const IDLE_ROTATION_SPEED: f32 = 0.001;
/// Rotation advance per tick while the pointer is over the surface.
pub const HOVER_ROTATION_SPEED: f32 = 0.003;

/// The grid spins at half the globe rate.
const GRID_ROTATION_FACTOR: f32 = 0.5;
/// Forward azimuth increment per tick; the sole driver of orbital revolution.
const ORBIT_STEP: f32 = 0.001;
/// Rate of the slow radial oscillation, per millisecond.
const DRIFT_RATE: f64 = 0.0001;
/// Radial oscillation amplitude around each point's base radius.
const DRIFT_AMPLITUDE: f32 = 0.1;
/// Scan-line sweep rate, per millisecond.
const SCAN_RATE: f64 = 0.002;

/// Idle/hovered regime shared between the interaction adapter (writer) and
/// the animator (reader).
pub struct AnimationContext {
    hovered: bool,
    rotation_speed: f32,
}

impl AnimationContext {
    pub fn new() -> Self {
        Self {
            hovered: false,
            rotation_speed: IDLE_ROTATION_SPEED,
        }
    }

    /// Enter or leave the hovered regime. Entry count does not matter.
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered != self.hovered {
            trace!(hovered, "Rotation regime changed");
        }
        self.hovered = hovered;
        self.rotation_speed = if hovered {
            HOVER_ROTATION_SPEED
        } else {
            IDLE_ROTATION_SPEED
        };
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance the scene by one tick.
pub fn advance(scene: &mut Scene, ctx: &AnimationContext, now_ms: f64) {
    let speed = ctx.rotation_speed();
    scene.globe.rotation_y += speed;
    scene.grid.rotation_y += speed * GRID_ROTATION_FACTOR;

    for (i, point) in scene.points.iter_mut().enumerate() {
        // Pulse: phase-offset sinusoid against the fixed base opacity.
        let pulse = (now_ms * point.pulse_speed as f64 + i as f64).sin() * 0.3 + 0.7;
        point.opacity = (POINT_BASE_OPACITY as f64 * pulse) as f32;

        // Orbital drift: radius breathes around the base radius, the azimuth
        // steps forward from the current x/z, the polar angle is rebuilt from
        // the frozen y against the new radius. The clamp pins a point whose y
        // momentarily exceeds the radius to the pole instead of letting acos
        // go NaN.
        let radius =
            point.base_radius + ((now_ms * DRIFT_RATE + i as f64).sin() as f32) * DRIFT_AMPLITUDE;

        let phi = point.position.z.atan2(point.position.x) + ORBIT_STEP;
        let theta = (point.position.y / radius).clamp(-1.0, 1.0).acos();

        point.position.x = radius * theta.sin() * phi.cos();
        point.position.z = radius * theta.sin() * phi.sin();
    }

    // Scan-line sweep over the globe wireframe opacity.
    let scan = (now_ms * SCAN_RATE).sin() * 0.5 + 0.5;
    scene.globe.opacity = (0.2 + scan * 0.2) as f32;
}
