//! Canvas 2D rendering

mod canvas;

pub use canvas::CanvasRenderer;
