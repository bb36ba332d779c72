use crate::{geometry::Bounds, input::PointerState};
use line_2d::Coord;
use rgb_int::Rgb24;

/// Drawing primitives supplied by the windowing collaborator. Anything drawn outside the visible
/// area is expected to be clipped silently.
pub trait Surface {
    fn clear(&mut self, colour: Rgb24) -> anyhow::Result<()>;

    fn fill_rect(&mut self, bounds: Bounds, colour: Rgb24)
    -> anyhow::Result<()>;

    fn draw_pixel(&mut self, coord: Coord, colour: Rgb24)
    -> anyhow::Result<()>;

    fn draw_text(
        &mut self,
        text: &str,
        coord: Coord,
        size_px: u32,
        colour: Rgb24,
    ) -> anyhow::Result<()>;
}

/// A window that can be drawn to and polled for input.
pub trait Platform: Surface {
    /// Drains pending window events, updating the pointer and the close request.
    fn handle_events(&mut self);

    fn should_close(&self) -> bool;

    /// The pointer as of the most recent `handle_events`.
    fn pointer(&self) -> PointerState;

    /// Blocks until it's time to draw the next frame.
    fn begin_frame(&mut self);

    /// Presents everything drawn since `begin_frame`.
    fn end_frame(&mut self) -> anyhow::Result<()>;
}
