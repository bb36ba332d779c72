use crate::{
    config::{Config, FREQ_WRAP, Palette},
    input::PointerState,
    signal,
    slider::Slider,
    surface::Surface,
};
use anyhow::bail;
use line_2d::Coord;

const READOUT_X_PX: i32 = 410;
const READOUT_SIZE_PX: u32 = 20;
const FREQ_READOUT_Y_PX: i32 = 50;
const FREQ_INCREMENT_READOUT_Y_PX: i32 = 70;
const SAMPLE_RATE_READOUT_Y_PX: i32 = 100;

/// Vertical pixels per unit of signal value.
const Y_SCALE: f32 = 100.0;

/// The scalar parameters carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub freq: f32,
    pub freq_increment: f32,
    pub sample_rate: u32,
    pub sample_duration: f32,
}

impl Params {
    pub fn new(freq: f32, sample_rate: u32) -> Self {
        Self {
            freq,
            freq_increment: 0.0,
            sample_rate,
            sample_duration: 1.0 / sample_rate as f32,
        }
    }

    /// A zero sample rate makes the sample duration infinite.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
        self.sample_duration = 1.0 / sample_rate as f32;
    }

    /// Accumulates the increment into the frequency, wrapping to 0 past `FREQ_WRAP`.
    pub fn advance(&mut self, freq_increment: f32) {
        self.freq_increment = freq_increment;
        self.freq += freq_increment;
        if self.freq > FREQ_WRAP {
            self.freq = 0.0;
        }
    }
}

/// Screen position of the sample at index `i`. The horizontal position is `i · tan(i)` which
/// scatters points far outside the visible area; the surface is expected to clip them.
pub fn plot_coord(i: usize, value: f32, height_px: u32) -> Coord {
    let i = i as f32;
    Coord {
        x: (i * i.tan()) as i32,
        y: (height_px as i32 / 2).saturating_add((value * Y_SCALE) as i32),
    }
}

/// Everything the frame loop updates and draws: both sliders, both signal buffers and the
/// scalar parameters.
pub struct Scene {
    freq_increment_slider: Slider,
    sample_rate_slider: Slider,
    signal_sin: Vec<f32>,
    signal_tan: Vec<f32>,
    params: Params,
    height_px: u32,
    palette: Palette,
}

impl Scene {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        if config.width_px == 0 {
            bail!("window width must be positive");
        }
        let width = config.width_px as usize;
        let freq_increment_slider = Slider::new(
            config.freq_increment_slider.bounds,
            config.freq_increment_slider.min_value,
            config.freq_increment_slider.max_value,
            config.initial_freq,
        )?;
        let sample_rate_slider = Slider::new(
            config.sample_rate_slider.bounds,
            config.sample_rate_slider.min_value,
            config.sample_rate_slider.max_value,
            config.initial_sample_rate as f32,
        )?;
        // the slider clamps the initial rate into its range
        let params = Params::new(
            config.initial_freq,
            sample_rate_slider.value() as u32,
        );
        Ok(Self {
            freq_increment_slider,
            sample_rate_slider,
            signal_sin: vec![0.0; width],
            signal_tan: vec![0.0; width],
            params,
            height_px: config.height_px,
            palette: config.palette,
        })
    }

    /// Applies one frame's input and recomputes the signals.
    pub fn step(&mut self, pointer: &PointerState) {
        let freq_increment = self.freq_increment_slider.update(pointer);
        let prev_sample_rate = self.params.sample_rate;
        self.params
            .set_sample_rate(self.sample_rate_slider.update(pointer) as u32);
        if self.params.sample_rate == 0 && prev_sample_rate != 0 {
            log::warn!("sample rate is 0, sample duration is infinite");
        }
        self.params.advance(freq_increment);
        signal::fill_sine(
            &mut self.signal_sin,
            self.params.freq,
            self.params.sample_duration,
        );
        signal::fill_tangent(
            &mut self.signal_tan,
            self.params.freq,
            self.params.sample_duration,
        );
        // Keep the slider in sync with the truncated sample rate.
        self.sample_rate_slider
            .set_value(self.params.sample_rate as f32);
        log::trace!("{:?}", self.params);
    }

    fn render_readouts(
        &self,
        surface: &mut impl Surface,
    ) -> anyhow::Result<()> {
        let readouts = [
            (
                format!("Freq: {:.2}", self.params.freq),
                FREQ_READOUT_Y_PX,
            ),
            (
                format!("Freq Increment: {:.2}", self.params.freq_increment),
                FREQ_INCREMENT_READOUT_Y_PX,
            ),
            (
                format!("Sample Rate: {}", self.params.sample_rate),
                SAMPLE_RATE_READOUT_Y_PX,
            ),
        ];
        for (text, y) in readouts {
            surface.draw_text(
                text.as_str(),
                Coord::new(READOUT_X_PX, y),
                READOUT_SIZE_PX,
                self.palette.text,
            )?;
        }
        Ok(())
    }

    fn render_signals(
        &self,
        surface: &mut impl Surface,
    ) -> anyhow::Result<()> {
        for (i, (&sin, &tan)) in
            self.signal_sin.iter().zip(self.signal_tan.iter()).enumerate()
        {
            let colour = if i % 2 == 0 {
                self.palette.even_point
            } else {
                self.palette.odd_point
            };
            surface.draw_pixel(plot_coord(i, sin, self.height_px), colour)?;
            surface.draw_pixel(plot_coord(i, tan, self.height_px), colour)?;
        }
        Ok(())
    }

    pub fn render(&self, surface: &mut impl Surface) -> anyhow::Result<()> {
        surface.clear(self.palette.background)?;
        self.freq_increment_slider.render(surface, &self.palette)?;
        self.sample_rate_slider.render(surface, &self.palette)?;
        self.render_readouts(surface)?;
        self.render_signals(surface)?;
        Ok(())
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn signal_sin(&self) -> &[f32] {
        &self.signal_sin
    }

    pub fn signal_tan(&self) -> &[f32] {
        &self.signal_tan
    }

    pub fn freq_increment_slider(&self) -> &Slider {
        &self.freq_increment_slider
    }

    pub fn sample_rate_slider(&self) -> &Slider {
        &self.sample_rate_slider
    }
}
