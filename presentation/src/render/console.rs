//! Single-line terminal renderer

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use snake_application::ports::frame_sink::{Frame, FrameSink, SimulationSummary, StopReason};
use std::io::{Write, stdout};

/// Draws each frame as one status line, overwriting the previous one.
///
/// The line shows a horizontal track with the actor's column marked, the
/// tick number and the exact position.
pub struct ConsoleRenderer {
    columns: usize,
}

impl ConsoleRenderer {
    pub const DEFAULT_COLUMNS: usize = 40;

    pub fn new() -> Self {
        Self::with_columns(Self::DEFAULT_COLUMNS)
    }

    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// Track of `columns` cells with the cells under the actor's footprint
    /// marked. A footprint hanging over the right edge continues on the left.
    pub fn track(&self, frame: &Frame) -> String {
        let width = frame.bounds.width();
        let ratio = (frame.position.x / width).clamp(0.0, 1.0);
        let marker = ((ratio * (self.columns - 1) as f64).round() as usize).min(self.columns - 1);
        let span = ((frame.footprint.width() * self.columns as f64 / width).ceil() as usize)
            .clamp(1, self.columns);

        let cells: String = (0..self.columns)
            .map(|i| {
                if (i + self.columns - marker) % self.columns < span {
                    '@'
                } else {
                    '.'
                }
            })
            .collect();
        format!("|{cells}|")
    }

    /// Full status line for a frame.
    pub fn status_line(&self, frame: &Frame) -> String {
        format!(
            "{} tick {:>6}  x={:>8.1} y={:>8.1}  [{}x{}]",
            self.track(frame),
            frame.tick,
            frame.position.x,
            frame.position.y,
            frame.bounds.width(),
            frame.bounds.height()
        )
    }

    fn draw(&self, line: &str) {
        let mut out = stdout();
        // Rendering failures never stop the simulation
        let _ = queue!(
            out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        );
        let _ = out.flush();
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for ConsoleRenderer {
    fn on_start(&self, initial: &Frame) {
        self.draw(&self.status_line(initial));
    }

    fn on_frame(&self, frame: &Frame) {
        self.draw(&self.status_line(frame));
    }

    fn on_stop(&self, summary: &SimulationSummary) {
        let reason = match summary.stop_reason {
            StopReason::Cancelled => "quit",
            StopReason::TickLimit => "tick limit reached",
        };
        println!();
        println!(
            "Stopped after {} ticks ({}) at ({:.1}, {:.1})",
            summary.ticks, reason, summary.final_position.x, summary.final_position.y
        );
    }
}
