use crate::{
    config::Palette, geometry::Bounds, input::PointerState, surface::Surface,
};
use anyhow::bail;

const HANDLE_WIDTH_PX: f32 = 10.0;
const HANDLE_OVERHANG_PX: f32 = 5.0;

/// A horizontal drag slider mapping a pixel range onto a numeric range.
#[derive(Debug, Clone)]
pub struct Slider {
    bounds: Bounds,
    min_value: f32,
    max_value: f32,
    value: f32,
    is_dragging: bool,
}

impl Slider {
    pub fn new(
        bounds: Bounds,
        min_value: f32,
        max_value: f32,
        initial_value: f32,
    ) -> anyhow::Result<Self> {
        if !bounds.is_finite() || bounds.width <= 0.0 {
            bail!(
                "slider bounds must be finite with positive width: {bounds:?}"
            );
        }
        if !(min_value < max_value) {
            bail!(
                "slider min value ({min_value}) must be less than max value \
                ({max_value})"
            );
        }
        if !initial_value.is_finite() {
            bail!("slider initial value must be finite: {initial_value}");
        }
        Ok(Self {
            bounds,
            min_value,
            max_value,
            value: initial_value.clamp(min_value, max_value),
            is_dragging: false,
        })
    }

    fn value_at(&self, x: f32) -> f32 {
        let ratio = ((x - self.bounds.x) / self.bounds.width).clamp(0.0, 1.0);
        // clamp again as rounding can leave `min + (max - min)` a hair above `max`
        (self.min_value + (self.max_value - self.min_value) * ratio)
            .clamp(self.min_value, self.max_value)
    }

    /// Applies this frame's pointer state and returns the resulting value. A drag starts when
    /// the button is pressed inside the track, and follows the pointer horizontally (even
    /// outside the track) until the button is released anywhere.
    pub fn update(&mut self, pointer: &PointerState) -> f32 {
        if pointer.button.just_pressed
            && self.bounds.contains(pointer.x, pointer.y)
        {
            if !self.is_dragging {
                log::debug!("slider drag started at {:?}", self.bounds);
            }
            self.is_dragging = true;
            self.value = self.value_at(pointer.x);
        }
        if self.is_dragging && pointer.button.held {
            self.value = self.value_at(pointer.x);
        }
        if pointer.button.just_released {
            if self.is_dragging {
                log::debug!("slider drag ended with value {}", self.value);
            }
            self.is_dragging = false;
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrite the value, e.g. to keep the slider in sync with a quantity derived from it.
    /// The value is clamped into the slider's range.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min_value, self.max_value);
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Position of the value within the range, from 0 at the left to 1 at the right.
    pub fn ratio(&self) -> f32 {
        (self.value - self.min_value) / (self.max_value - self.min_value)
    }

    pub fn handle_bounds(&self) -> Bounds {
        Bounds {
            x: self.bounds.x + (self.bounds.width * self.ratio())
                - (HANDLE_WIDTH_PX / 2.0),
            y: self.bounds.y - HANDLE_OVERHANG_PX,
            width: HANDLE_WIDTH_PX,
            height: self.bounds.height + (2.0 * HANDLE_OVERHANG_PX),
        }
    }

    pub fn render(
        &self,
        surface: &mut impl Surface,
        palette: &Palette,
    ) -> anyhow::Result<()> {
        surface.fill_rect(self.bounds, palette.track)?;
        let handle_colour = if self.is_dragging {
            palette.handle_dragging
        } else {
            palette.handle
        };
        surface.fill_rect(self.handle_bounds(), handle_colour)?;
        Ok(())
    }
}
