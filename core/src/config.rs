use crate::geometry::Bounds;
use rgb_int::Rgb24;

/// The frequency wraps back to 0 once it exceeds this value.
pub const FREQ_WRAP: f32 = 10000.0;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgb24,
    pub track: Rgb24,
    pub handle: Rgb24,
    pub handle_dragging: Rgb24,
    pub text: Rgb24,
    /// Colour of points at even indices
    pub even_point: Rgb24,
    /// Colour of points at odd indices
    pub odd_point: Rgb24,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb24::new(0, 0, 0),
            track: Rgb24::new(130, 130, 130),
            handle: Rgb24::new(200, 200, 200),
            handle_dragging: Rgb24::new(230, 41, 55),
            text: Rgb24::new(255, 255, 255),
            even_point: Rgb24::new(255, 109, 194),
            odd_point: Rgb24::new(0, 121, 241),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SliderConfig {
    pub bounds: Bounds,
    pub min_value: f32,
    pub max_value: f32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub target_fps: u32,
    pub initial_freq: f32,
    pub initial_sample_rate: u32,
    pub freq_increment_slider: SliderConfig,
    pub sample_rate_slider: SliderConfig,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Dots".to_string(),
            width_px: 1920,
            height_px: 1080,
            target_fps: 60,
            initial_freq: 0.01,
            initial_sample_rate: 10000,
            freq_increment_slider: SliderConfig {
                bounds: Bounds::new(100., 50., 300., 20.),
                min_value: 0.001,
                max_value: 1.0,
            },
            sample_rate_slider: SliderConfig {
                bounds: Bounds::new(100., 100., 300., 20.),
                min_value: 0.01,
                max_value: 10000.0,
            },
            palette: Palette::default(),
        }
    }
}
