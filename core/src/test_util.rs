use crate::{
    geometry::Bounds,
    input::PointerState,
    surface::{Platform, Surface},
};
use line_2d::Coord;
use rgb_int::Rgb24;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb24),
    FillRect(Bounds, Rgb24),
    Pixel(Coord, Rgb24),
    Text(String, Coord, u32, Rgb24),
    BeginFrame,
    EndFrame,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, colour: Rgb24) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Clear(colour));
        Ok(())
    }

    fn fill_rect(
        &mut self,
        bounds: Bounds,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.calls.push(DrawCall::FillRect(bounds, colour));
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        coord: Coord,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Pixel(coord, colour));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        coord: Coord,
        size_px: u32,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.calls
            .push(DrawCall::Text(text.to_string(), coord, size_px, colour));
        Ok(())
    }
}

/// Replays one scripted event per frame. `None` requests that the window close.
#[derive(Default)]
pub struct ScriptedPlatform {
    pub script: VecDeque<Option<PointerState>>,
    pub surface: RecordingSurface,
    pointer: PointerState,
    close_requested: bool,
    pub events_handled: usize,
}

impl ScriptedPlatform {
    pub fn new(script: impl IntoIterator<Item = Option<PointerState>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn frames_presented(&self) -> usize {
        self.surface
            .calls
            .iter()
            .filter(|call| **call == DrawCall::EndFrame)
            .count()
    }
}

impl Surface for ScriptedPlatform {
    fn clear(&mut self, colour: Rgb24) -> anyhow::Result<()> {
        self.surface.clear(colour)
    }

    fn fill_rect(
        &mut self,
        bounds: Bounds,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.surface.fill_rect(bounds, colour)
    }

    fn draw_pixel(
        &mut self,
        coord: Coord,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.surface.draw_pixel(coord, colour)
    }

    fn draw_text(
        &mut self,
        text: &str,
        coord: Coord,
        size_px: u32,
        colour: Rgb24,
    ) -> anyhow::Result<()> {
        self.surface.draw_text(text, coord, size_px, colour)
    }
}

impl Platform for ScriptedPlatform {
    fn handle_events(&mut self) {
        self.events_handled += 1;
        match self.script.pop_front() {
            Some(Some(pointer)) => self.pointer = pointer,
            // running off the end of the script closes the window
            Some(None) | None => self.close_requested = true,
        }
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn pointer(&self) -> PointerState {
        self.pointer
    }

    fn begin_frame(&mut self) {
        self.surface.calls.push(DrawCall::BeginFrame);
    }

    fn end_frame(&mut self) -> anyhow::Result<()> {
        self.surface.calls.push(DrawCall::EndFrame);
        Ok(())
    }
}
