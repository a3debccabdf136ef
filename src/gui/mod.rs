//! GUI module - native chart windows

mod viewer;

pub use viewer::WindowSink;
