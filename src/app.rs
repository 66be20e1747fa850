//! Globe widget app
//!
//! The egui layer around the scene core. Each `update` call is one host
//! refresh: poll the one-shot timeline, apply any pending resize, sense
//! hover, advance the animation and paint the projected frame.

use eframe::egui;
use tracing::debug;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::config::GlobeConfig;
use crate::render::{build_frame, Camera, Primitive, RenderFrame, RenderSink};
use crate::scene::{advance, AnimationContext, Scene};
use crate::sched::Timeline;
use crate::surface::ViewportState;
use crate::theme::{hologram_visuals, rgba};
use crate::time::{now_millis, FpsCounter};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use crate::dom::LoadingOverlay;

/// Deferred UI actions driven by the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiTask {
    DismissLoading,
}

pub struct GlobeApp {
    scene: Scene,
    anim: AnimationContext,
    camera: Camera,
    timeline: Timeline<UiTask>,

    /// Window state written by the resize listener (shared on wasm).
    #[cfg(target_arch = "wasm32")]
    viewport: Rc<RefCell<ViewportState>>,
    #[cfg(not(target_arch = "wasm32"))]
    viewport: ViewportState,

    /// Last resize generation the app has applied.
    seen_generation: u32,
    surface_side: f32,

    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
    overlay: Option<LoadingOverlay>,

    fps: FpsCounter,
    last_stats_ms: f64,
    last_primitives: usize,
}

impl GlobeApp {
    /// Create the widget for the WASM platform.
    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: GlobeConfig,
        viewport: Rc<RefCell<ViewportState>>,
        overlay: LoadingOverlay,
    ) -> Self {
        cc.egui_ctx.set_visuals(hologram_visuals());

        let mut rng = rand::thread_rng();
        let scene = Scene::build(config.point_count, &mut rng);

        let snapshot = *viewport.borrow();
        let mut timeline = Timeline::new();
        timeline.schedule(now_millis() + config.loading_delay_ms, UiTask::DismissLoading);

        Self {
            scene,
            anim: AnimationContext::new(),
            camera: Camera::new(snapshot.aspect()),
            timeline,
            viewport,
            seen_generation: snapshot.generation,
            surface_side: snapshot.surface_side(),
            overlay: Some(overlay),
            fps: FpsCounter::new(),
            last_stats_ms: 0.0,
            last_primitives: 0,
        }
    }

    /// Create the widget for the native platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(cc: &eframe::CreationContext<'_>, config: GlobeConfig) -> Self {
        cc.egui_ctx.set_visuals(hologram_visuals());

        let mut rng = rand::thread_rng();
        let scene = Scene::build(config.point_count, &mut rng);

        let viewport = ViewportState::new(1280.0, 800.0);
        let mut timeline = Timeline::new();
        timeline.schedule(now_millis() + config.loading_delay_ms, UiTask::DismissLoading);

        Self {
            scene,
            anim: AnimationContext::new(),
            camera: Camera::new(viewport.aspect()),
            timeline,
            seen_generation: viewport.generation,
            surface_side: viewport.surface_side(),
            viewport,
            fps: FpsCounter::new(),
            last_stats_ms: 0.0,
            last_primitives: 0,
        }
    }

    fn viewport_snapshot(&self) -> ViewportState {
        #[cfg(target_arch = "wasm32")]
        {
            *self.viewport.borrow()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.viewport
        }
    }

    fn run_due_tasks(&mut self, now: f64) {
        for task in self.timeline.poll(now) {
            match task {
                UiTask::DismissLoading => {
                    debug!("Loading placeholder dismissed");
                    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
                    if let Some(overlay) = self.overlay.take() {
                        overlay.dismiss();
                    }
                }
            }
        }
    }

    /// Apply a pending resize: new surface side, square camera aspect.
    fn apply_resize(&mut self) {
        let vp = self.viewport_snapshot();
        if vp.generation != self.seen_generation {
            self.seen_generation = vp.generation;
            self.surface_side = vp.surface_side();
            self.camera.set_aspect(1.0);
            debug!(side = self.surface_side, "Render surface resized");
        }
    }
}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Request continuous repaint: the tick loop runs for the page's lifetime.
        ctx.request_repaint();

        let now = now_millis();
        self.run_due_tasks(now);
        self.apply_resize();

        let side = self.surface_side;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());

                // Interaction adapter: the regime flag is the only thing the
                // hover state touches.
                self.anim.set_hovered(response.hovered());

                advance(&mut self.scene, &self.anim, now);

                let frame = build_frame(&self.scene, &self.camera, glam::Vec2::splat(side));
                let mut sink = PainterSink {
                    painter: &painter,
                    origin: response.rect.min,
                };
                sink.submit(&frame);
                self.last_primitives = frame.primitives.len();
            });

        self.fps.tick(now);
        if now - self.last_stats_ms >= 1000.0 {
            debug!(
                fps = self.fps.fps(),
                primitives = self.last_primitives,
                hovered = self.anim.hovered(),
                "frame stats"
            );
            self.last_stats_ms = now;
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The surface floats over the page; the backend must not paint under it.
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Render sink that draws primitives with the egui painter.
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterSink<'_> {
    fn at(&self, p: glam::Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl RenderSink for PainterSink<'_> {
    fn submit(&mut self, frame: &RenderFrame) {
        for prim in &frame.primitives {
            match *prim {
                Primitive::Line { a, b, color, opacity } => {
                    self.painter.line_segment(
                        [self.at(a), self.at(b)],
                        egui::Stroke::new(1.0, rgba(color, opacity)),
                    );
                }
                Primitive::Disc {
                    center,
                    radius,
                    color,
                    opacity,
                } => {
                    self.painter
                        .circle_filled(self.at(center), radius, rgba(color, opacity));
                }
            }
        }
    }
}
