//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or GPU directly. A
//! frontend provides these collaborators:
//! - `Window`: lifecycle / close requests
//! - `FrameClock`: seconds since the previous frame
//! - `InputSource`: held/pressed buttons and the aim pointer
//! - `RenderSink`: circles and text
//!
//! `headless` implements all of them without any I/O, for tests and demo runs.

pub mod headless;

use glam::Vec2;

pub use headless::{DrawCall, FixedClock, HeadlessWindow, RecordingSink, ScriptedInput};

/// Logical inputs the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Fire,
    /// Start / restart
    Confirm,
}

/// Symbolic palette; frontends map these to real colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Background,
    Text,
    Player,
    Projectile,
    Enemy,
}

pub trait Window {
    /// True once the user asked to quit
    fn should_close(&mut self) -> bool;
    fn close(&mut self);
}

pub trait FrameClock {
    /// Seconds since the last frame (already capped by the frontend)
    fn frame_duration(&mut self) -> f32;
}

pub trait InputSource {
    /// Button currently held down
    fn is_down(&self, button: Button) -> bool;
    /// Button went down this frame
    fn is_pressed(&self, button: Button) -> bool;
    /// Pointer position in screen coordinates
    fn pointer(&self) -> Vec2;
}

pub trait RenderSink {
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `pos` is the top-left corner of the text
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    fn measure_text(&self, text: &str, size: f32) -> Vec2;
}
