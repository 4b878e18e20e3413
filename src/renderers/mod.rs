//! Renderers module for the lyric sync engine
//!
//! Browser-side capabilities the pure core receives by injection.

pub mod canvas;

pub use canvas::{with_canvas_measurer, CanvasMeasurer};
