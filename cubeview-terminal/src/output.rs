//! Segment writers for the terminal and for machine consumers
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};

use crate::scene::{Frame, Segment};

/// How projected frames are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored, human readable listing
    #[default]
    Text,
    /// Pretty-printed JSON array of frames
    Json,
}

pub fn write_frames<W: Write>(writer: &mut W, frames: &[Frame], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, frames),
        OutputFormat::Json => write_json(writer, frames),
    }
}

fn write_text<W: Write>(writer: &mut W, frames: &[Frame]) -> io::Result<()> {
    for frame in frames {
        writer
            .queue(SetForegroundColor(Color::Yellow))?
            .queue(Print(format!(
                "frame {} | {}/{} segments drawable\n",
                frame.index,
                frame.drawable_count(),
                frame.segments.len()
            )))?;

        for segment in &frame.segments {
            let color = if segment.drawable() {
                Color::White
            } else {
                Color::DarkGrey
            };
            writer
                .queue(SetForegroundColor(color))?
                .queue(Print(format!("{}\n", describe(segment))))?;
        }
    }
    writer.queue(ResetColor)?;
    writer.flush()
}

fn describe(segment: &Segment) -> String {
    match (segment.start, segment.end) {
        (Some((x0, y0)), Some((x1, y1))) => {
            format!("  edge {:>2}: ({x0:.2}, {y0:.2}) -> ({x1:.2}, {y1:.2})", segment.edge)
        }
        _ => format!("  edge {:>2}: skipped", segment.edge),
    }
}

fn write_json<W: Write>(writer: &mut W, frames: &[Frame]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, frames)?;
    writeln!(writer)?;
    writer.flush()
}
