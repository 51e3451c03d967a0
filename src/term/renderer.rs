//! Flushes framebuffers to the terminal over crossterm.
//!
//! Raw mode, alternate screen, and optional mouse capture are all torn down
//! in `exit`, which every host exit path runs, including the error path.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use super::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    mouse_captured: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            mouse_captured: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.mouse_captured {
            self.set_mouse_capture(false)?;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// The shooter turns this on while mounted; everything else leaves the
    /// mouse alone.
    pub fn set_mouse_capture(&mut self, on: bool) -> Result<()> {
        if on == self.mouse_captured {
            return Ok(());
        }
        if on {
            self.stdout.queue(EnableMouseCapture)?;
        } else {
            self.stdout.queue(DisableMouseCapture)?;
        }
        self.stdout.flush()?;
        self.mouse_captured = on;
        Ok(())
    }

    /// Force a full redraw on the next frame, e.g. after a resize or a game
    /// switch.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb`, diffing against the previous frame where possible, then
    /// keep it as the new baseline.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.prev {
            Some(p) => (p.width(), p.height()) != (fb.width(), fb.height()),
            None => true,
        };
        if full {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            let mut cursor_at: Option<u16> = None;
            while x < fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                let changed = full
                    || self
                        .prev
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .map_or(true, |p| p != cell);
                if !changed {
                    x += 1;
                    cursor_at = None;
                    continue;
                }
                if cursor_at != Some(x) {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                }
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
                x += 1;
                cursor_at = Some(x);
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.prev = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
