//! Geometry primitives shared by the widget core and the Dioxus component
//!
//! Each primitive:
//! - is a plain `Copy` value with no browser dependency
//! - `to_css()` → inline style fragment

#[macro_use]
pub mod bounded;
pub mod footprint;
pub mod position;

pub use footprint::{Breakpoint, Footprint};
pub use position::{Position, Viewport, viewport_size};
