use anyhow::anyhow;
use dots_core::{
    Bounds, Config, Coord, InputState, Platform, PointerState, Rgb24, Surface,
};
use sdl2::{
    EventPump,
    event::Event,
    gfx::primitives::DrawRenderer,
    keyboard::Scancode,
    mouse::MouseButton,
    pixels::Color,
    rect::{Point, Rect},
    render::Canvas,
    video::Window as SdlWindow,
};
use std::{
    thread,
    time::{Duration, Instant},
};

// Glyphs in the SDL2_gfx built-in font are 8x8 pixels.
const GFX_FONT_SIZE_PX: u32 = 8;

fn colour(rgb24: Rgb24) -> Color {
    Color::RGB(rgb24.r, rgb24.g, rgb24.b)
}

/// An SDL2 window. Closing the window (or pressing escape) requests that the frame loop stop.
/// The window itself is closed when this is dropped.
pub struct Window {
    canvas: Canvas<SdlWindow>,
    event_pump: EventPump,
    input_state: InputState,
    close_requested: bool,
    frame_duration: Duration,
    prev_frame_complete: Instant,
}

impl Window {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(config.title.as_str(), config.width_px, config.height_px)
            .position_centered()
            .build()?;
        let canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let frame_duration = Duration::from_micros(
            1_000_000 / config.target_fps.max(1) as u64,
        );
        Ok(Self {
            canvas,
            event_pump,
            input_state: InputState::new(),
            close_requested: false,
            frame_duration,
            prev_frame_complete: Instant::now(),
        })
    }

    fn wait_until_next_frame(&self) {
        if let Some(period_to_sleep) = (self.prev_frame_complete
            + self.frame_duration)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }
}

impl Surface for Window {
    fn clear(&mut self, rgb24: Rgb24) -> anyhow::Result<()> {
        self.canvas.set_draw_color(colour(rgb24));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(
        &mut self,
        bounds: Bounds,
        rgb24: Rgb24,
    ) -> anyhow::Result<()> {
        let rect = Rect::new(
            bounds.x as i32,
            bounds.y as i32,
            bounds.width as u32,
            bounds.height as u32,
        );
        self.canvas.set_draw_color(colour(rgb24));
        self.canvas.fill_rect(rect).map_err(|e| anyhow!("{e}"))
    }

    fn draw_pixel(&mut self, coord: Coord, rgb24: Rgb24) -> anyhow::Result<()> {
        self.canvas.set_draw_color(colour(rgb24));
        self.canvas
            .draw_point(Point::new(coord.x, coord.y))
            .map_err(|e| anyhow!("{e}"))
    }

    fn draw_text(
        &mut self,
        text: &str,
        coord: Coord,
        size_px: u32,
        rgb24: Rgb24,
    ) -> anyhow::Result<()> {
        // The gfx font has a fixed size so scale the renderer to reach the requested size. Text
        // coordinates are in scaled space.
        let scale = size_px as f32 / GFX_FONT_SIZE_PX as f32;
        self.canvas
            .set_scale(scale, scale)
            .map_err(|e| anyhow!("{e}"))?;
        let result = self.canvas.string(
            (coord.x as f32 / scale) as i16,
            (coord.y as f32 / scale) as i16,
            text,
            colour(rgb24),
        );
        self.canvas.set_scale(1.0, 1.0).map_err(|e| anyhow!("{e}"))?;
        result.map_err(|e| anyhow!("{e}"))
    }
}

impl Platform for Window {
    fn handle_events(&mut self) {
        self.input_state.start_frame();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.close_requested = true,
                Event::MouseMotion { x, y, .. } => {
                    self.input_state.set_position(x as f32, y as f32)
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.input_state.set_position(x as f32, y as f32);
                    self.input_state.set_button(true);
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.input_state.set_position(x as f32, y as f32);
                    self.input_state.set_button(false);
                }
                _ => (),
            }
        }
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn pointer(&self) -> PointerState {
        self.input_state.pointer()
    }

    fn begin_frame(&mut self) {
        self.wait_until_next_frame();
    }

    fn end_frame(&mut self) -> anyhow::Result<()> {
        self.canvas.present();
        self.prev_frame_complete = Instant::now();
        Ok(())
    }
}
