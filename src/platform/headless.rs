//! Scripted collaborators for running the loop without a window
//!
//! Time only moves when asked to, events come from a per-frame script and
//! draw calls are recorded instead of rasterized.

use std::collections::VecDeque;

use super::input::{EventSource, InputEvent};
use super::time::Clock;
use crate::renderer::{Color, DrawCommand, Rect, RenderSurface};

/// A clock that only advances on `advance` or `delay`
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: u64,
    delays: Vec<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate work taking `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    /// Every delay requested so far
    pub fn delays(&self) -> &[u64] {
        &self.delays
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn delay(&mut self, ms: u64) {
        self.delays.push(ms);
        self.now_ms += ms;
    }
}

/// Replays one scripted poll result per call, then reports nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    script: VecDeque<Option<InputEvent>>,
    polls: usize,
}

impl ScriptedEvents {
    /// `frames[i]` is what the i-th poll returns
    pub fn new(frames: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: frames.into_iter().collect(),
            polls: 0,
        }
    }

    /// `idle` empty polls followed by `event`
    pub fn after(idle: usize, event: InputEvent) -> Self {
        Self::new(std::iter::repeat_n(None, idle).chain(std::iter::once(Some(event))))
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Scripted results not yet polled
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Option<InputEvent> {
        self.polls += 1;
        self.script.pop_front().flatten()
    }
}

/// Records every draw call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of presented frames
    pub fn presents(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }

    /// Commands of each presented frame, in order
    pub fn frames(&self) -> Vec<&[DrawCommand]> {
        self.commands
            .split_inclusive(|c| matches!(c, DrawCommand::Present))
            .filter(|frame| matches!(frame.last(), Some(DrawCommand::Present)))
            .collect()
    }

    /// Commands of the most recent presented frame
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames().pop()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}
