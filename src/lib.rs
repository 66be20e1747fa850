//! Holographic globe widget
//!
//! A rotating wireframe globe for a portfolio page's hero section: icosphere
//! wireframe with a scan-line opacity sweep, a slower-spinning lat/lon grid,
//! a glow shell, and 50 pulsing data points drifting around the surface.
//! Hovering speeds the rotation up; the surface shrinks below the mobile
//! breakpoint.
//!
//! On wasm32 the widget mounts itself into the host page and runs inside an
//! `eframe::WebRunner`. The scene core is platform-agnostic; `globe-cli`
//! (feature `cli`) drives it headless for soak runs.

pub mod config;
pub mod render;
pub mod scene;
pub mod sched;
pub mod surface;
pub mod time;

#[cfg(feature = "egui")]
pub mod app;
#[cfg(feature = "egui")]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod dom;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Route tracing to the browser console.
    tracing_wasm::set_as_global_default();

    let config = config::GlobeConfig::from_page();

    let mounted = match dom::mount(&config) {
        Ok(Some(mounted)) => mounted,
        Ok(None) => return, // no hero container on this page
        Err(e) => {
            tracing::error!(?e, "Failed to mount globe surface");
            return;
        }
    };

    let web_options = eframe::WebOptions::default();

    // The rendering backend loads asynchronously; initialization is deferred
    // until the runner resolves. A bootstrap failure here has no recovery.
    wasm_bindgen_futures::spawn_local(async move {
        let dom::MountedSurface {
            canvas,
            overlay,
            viewport,
        } = mounted;

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::GlobeApp::new(cc, config, viewport, overlay)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
