//! Headless collaborators: no window, no GPU, scripted input

use std::collections::HashSet;

use glam::Vec2;

use super::{Button, Color, FrameClock, InputSource, RenderSink, Window};

/// A "window" that asks to close after a fixed number of frames
#[derive(Debug)]
pub struct HeadlessWindow {
    pub width: u32,
    pub height: u32,
    pub title: String,
    frames_left: u64,
    closed: bool,
}

impl HeadlessWindow {
    pub fn open(width: u32, height: u32, title: &str, frames: u64) -> Self {
        log::info!("Opened '{title}' {width}x{height} for {frames} frames");
        Self {
            width,
            height,
            title: title.to_string(),
            frames_left: frames,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Window for HeadlessWindow {
    fn should_close(&mut self) -> bool {
        if self.closed || self.frames_left == 0 {
            return true;
        }
        self.frames_left -= 1;
        false
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Constant frame duration
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn from_fps(fps: u32) -> Self {
        Self {
            dt: 1.0 / fps.max(1) as f32,
        }
    }
}

impl FrameClock for FixedClock {
    fn frame_duration(&mut self) -> f32 {
        self.dt
    }
}

/// Input state set directly by the caller
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: HashSet<Button>,
    pressed: HashSet<Button>,
    pointer: Vec2,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    /// Report `button` as pressed (and held) until `end_frame`
    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
        self.held.insert(button);
    }

    pub fn point_at(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Clear one-shot presses after the frame consumed them
    pub fn end_frame(&mut self) {
        for button in self.pressed.drain() {
            self.held.remove(&button);
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }
}

/// One recorded draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    /// Center, radius, color
    Circle(Vec2, f32, Color),
    /// Text, top-left corner, size, color
    Text(String, Vec2, f32, Color),
}

/// Keeps the draw calls of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
    pub frames: u64,
    in_frame: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center and radius of every circle drawn in `color`
    pub fn circles(&self, color: Color) -> Vec<(Vec2, f32)> {
        let mut found = Vec::new();
        for call in &self.calls {
            match call {
                DrawCall::Circle(at, radius, c) if *c == color => found.push((*at, *radius)),
                _ => {}
            }
        }
        found
    }

    /// Every string drawn, in draw order
    pub fn texts(&self) -> Vec<&str> {
        let mut found = Vec::new();
        for call in &self.calls {
            if let DrawCall::Text(text, ..) = call {
                found.push(text.as_str());
            }
        }
        found
    }
}

impl RenderSink for RecordingSink {
    fn begin_frame(&mut self) {
        self.calls.clear();
        self.in_frame = true;
    }

    fn end_frame(&mut self) {
        if self.in_frame {
            self.frames += 1;
        }
        self.in_frame = false;
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        let call = DrawCall::Text(text.to_string(), pos, size, color);
        self.calls.push(call);
    }

    /// Monospace approximation: each glyph is half as wide as it is tall
    fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * size * 0.5, size)
    }
}
