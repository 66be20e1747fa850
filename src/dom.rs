//! DOM mount for the render surface (WASM only)
//!
//! Creates the globe container inside the page's hero section: glow styling,
//! "Loading..." placeholder, the canvas eframe renders into, and the window
//! resize listener that feeds the shared viewport state.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::config::GlobeConfig;
use crate::surface::ViewportState;

pub struct MountedSurface {
    pub canvas: HtmlCanvasElement,
    pub overlay: LoadingOverlay,
    pub viewport: Rc<RefCell<ViewportState>>,
}

/// The transient loading placeholder plus the container glow behind it.
pub struct LoadingOverlay {
    container: HtmlElement,
    loading: HtmlElement,
}

impl LoadingOverlay {
    /// Remove the placeholder and fade the container glow out.
    pub fn dismiss(self) {
        self.loading.remove();
        let _ = self
            .container
            .style()
            .set_property("background", "transparent");
    }
}

/// Mount the render surface into the hero container.
///
/// Returns `Ok(None)` when the hero container is absent from the page: the
/// widget silently degrades to "no visible globe".
pub fn mount(config: &GlobeConfig) -> Result<Option<MountedSurface>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let hero = match document.query_selector(&config.hero_selector)? {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => {
            warn!(
                selector = %config.hero_selector,
                "Hero container not found, globe disabled"
            );
            return Ok(None);
        }
    };
    hero.style().set_property("position", "relative")?;

    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    let viewport = Rc::new(RefCell::new(ViewportState::new(width, height)));
    let side = viewport.borrow().surface_side();

    let container = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    container.set_id("globe-container");
    container.style().set_css_text(&container_css(side));

    let loading = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    loading.set_text_content(Some("Loading..."));
    loading.style().set_css_text(LOADING_CSS);
    container.append_child(&loading)?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id("globe-canvas");
    canvas.style().set_css_text("width: 100%; height: 100%;");
    container.append_child(&canvas)?;

    hero.append_child(&container)?;

    // Window resize: write the shared scalars, resize the container box.
    // The app picks the generation change up on its next tick.
    {
        let viewport = viewport.clone();
        let container = container.clone();
        let window_handle = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let w = window_handle
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            let h = window_handle
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;

            let mut vp = viewport.borrow_mut();
            vp.resize(w, h);
            let side = vp.surface_side();
            let _ = container.style().set_property("width", &format!("{side}px"));
            let _ = container
                .style()
                .set_property("height", &format!("{side}px"));
        }) as Box<dyn Fn()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    info!(side, "Globe surface mounted");

    Ok(Some(MountedSurface {
        canvas,
        overlay: LoadingOverlay { container, loading },
        viewport,
    }))
}

fn container_css(side: f32) -> String {
    format!(
        "position: absolute; \
         top: 50%; \
         right: 10%; \
         transform: translateY(-50%); \
         width: {side}px; \
         height: {side}px; \
         z-index: 1; \
         pointer-events: auto; \
         transition: all 0.3s ease; \
         background: radial-gradient(circle, rgba(0,255,255,0.1) 0%, transparent 70%); \
         border-radius: 50%; \
         display: flex; \
         align-items: center; \
         justify-content: center;"
    )
}

const LOADING_CSS: &str = "color: #00ffff; \
     font-size: 0.8rem; \
     text-shadow: 0 0 5px rgba(0,255,255,0.6);";
