//! Core logic for the dots visual toy. This crate doesn't know about SDL or any other windowing
//! library. It handles slider interaction, signal generation, mapping signals to pixels, and
//! stepping the frame loop against the capability traits in `surface`. The `dots_app` crate
//! provides an implementation of those traits backed by an SDL2 window.

pub mod config;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod signal;
pub mod slider;
pub mod surface;

#[cfg(test)]
mod test_util;

pub use config::{Config, Palette};
pub use frame_loop::{FrameLoop, LoopState};
pub use geometry::Bounds;
pub use input::{ButtonState, InputState, PointerState};
pub use line_2d::Coord;
pub use rgb_int::Rgb24;
pub use scene::{Params, Scene};
pub use signal::{fill_sine, fill_tangent, sine_signal, tangent_signal};
pub use slider::Slider;
pub use surface::{Platform, Surface};
