pub mod debug_overlay;
pub mod game_common;
pub mod game_scene;

use crate::core::game_loop::RenderSink;
use crate::core::types::Snapshot;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Draws snapshots into a ratatui terminal.
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    type Error = io::Error;

    fn present(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            game_scene::render_game(frame, area, snapshot);
        })?;
        Ok(())
    }
}
