//! Headless soak harness for the globe animation
//!
//! Run with: cargo run --features cli --bin globe-cli

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use holo_globe::config::GlobeConfig;
    use holo_globe::render::{build_frame, Camera, RenderFrame, RenderSink};
    use holo_globe::scene::{advance, AnimationContext, Scene};
    use holo_globe::surface::SURFACE_SIDE_PX;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    /// Counts what each frame would draw.
    #[derive(Default)]
    struct StatsSink {
        frames: u64,
        lines: usize,
        discs: usize,
    }

    impl RenderSink for StatsSink {
        fn submit(&mut self, frame: &RenderFrame) {
            self.frames += 1;
            self.lines = frame.line_count();
            self.discs = frame.disc_count();
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,holo_globe=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = GlobeConfig::from_env();
    let ticks: u64 = std::env::var("GLOBE_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(600);
    let seed: Option<u64> = std::env::var("GLOBE_SEED")
        .ok()
        .and_then(|v| v.parse().ok());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(ticks, points = config.point_count, ?seed, "Starting globe soak");

    let mut scene = Scene::build(config.point_count, &mut rng);
    let ctx = AnimationContext::new();
    let camera = Camera::new(1.0);
    let viewport = glam::Vec2::splat(SURFACE_SIDE_PX);
    let mut sink = StatsSink::default();

    for tick in 0..ticks {
        let now = tick as f64 * 16.0;
        advance(&mut scene, &ctx, now);
        let frame = build_frame(&scene, &camera, viewport);
        sink.submit(&frame);

        if tick % 60 == 0 {
            let (mut min, mut max) = (f32::MAX, f32::MIN);
            for p in &scene.points {
                min = min.min(p.opacity);
                max = max.max(p.opacity);
            }
            info!(
                tick,
                rotation = scene.globe.rotation_y,
                globe_opacity = scene.globe.opacity,
                lines = sink.lines,
                discs = sink.discs,
                point_opacity_min = min,
                point_opacity_max = max,
                "stats"
            );
        }
    }

    info!(
        frames = sink.frames,
        rotation = scene.globe.rotation_y,
        "Soak complete"
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
