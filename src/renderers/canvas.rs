//! Canvas-backed text measurement
//!
//! Measures text with an offscreen `<canvas>` 2D context, the same engine the
//! page uses to draw the lyric card. The context is created once per thread and
//! reused for the lifetime of the module; if it cannot be created (no DOM, or
//! 2D context unsupported) that outcome is cached too and callers get `None`.

use once_cell::unsync::OnceCell;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::layout::{FontDescriptor, TextMeasurer};

/// Text measurer backed by a `CanvasRenderingContext2d`
pub struct CanvasMeasurer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasMeasurer {
    /// Create an offscreen canvas and grab its 2D context
    pub fn create() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .ok()?
            .dyn_into()
            .ok()?;
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
        Some(Self { ctx })
    }
}

impl TextMeasurer for CanvasMeasurer {
    fn measure_text(&self, text: &str, font: &FontDescriptor) -> Option<f64> {
        self.ctx.set_font(&font.css());
        self.ctx.measure_text(text).ok().map(|metrics| metrics.width())
    }
}

thread_local! {
    static CANVAS: OnceCell<Option<CanvasMeasurer>> = OnceCell::new();
}

/// Run `f` with the shared canvas measurer (or `None` if unavailable)
pub fn with_canvas_measurer<R>(f: impl FnOnce(Option<&dyn TextMeasurer>) -> R) -> R {
    CANVAS.with(|cell| {
        let measurer = cell.get_or_init(|| {
            let measurer = CanvasMeasurer::create();
            if measurer.is_none() {
                log::warn!("Canvas 2D context unavailable; card width will use the fallback");
            }
            measurer
        });
        f(measurer.as_ref().map(|m| m as &dyn TextMeasurer))
    })
}
