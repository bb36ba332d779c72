use crate::{scene::Scene, surface::Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Drives a `Scene` on a `Platform` one frame at a time until the platform requests to close.
pub struct FrameLoop<P: Platform> {
    platform: P,
    scene: Scene,
    state: LoopState,
    frame_count: u64,
}

impl<P: Platform> FrameLoop<P> {
    pub fn new(platform: P, scene: Scene) -> Self {
        Self {
            platform,
            scene,
            state: LoopState::Running,
            frame_count: 0,
        }
    }

    /// Handles input, updates the scene and draws it. Once the platform requests to close the
    /// loop terminates, and subsequent ticks do nothing.
    pub fn tick(&mut self) -> anyhow::Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }
        self.platform.handle_events();
        if self.platform.should_close() {
            log::info!("close requested after {} frames", self.frame_count);
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }
        let pointer = self.platform.pointer();
        self.scene.step(&pointer);
        self.platform.begin_frame();
        self.scene.render(&mut self.platform)?;
        self.platform.end_frame()?;
        self.frame_count += 1;
        Ok(self.state)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.tick()? == LoopState::Running {}
        Ok(())
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}
