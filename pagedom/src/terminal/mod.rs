//! Hosts a document on the real terminal.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::TextStyle;

/// Raw-mode, alternate-screen terminal with mouse capture.
///
/// Leaves the alternate screen and restores the cursor when dropped.
pub struct Terminal {
    stdout: io::Stdout,
    front: Buffer,
    back: Buffer,
    page_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            page_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// Wait for input. With no timeout this blocks for the first event; any
    /// events already queued behind it come back in the same batch.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(limit) => event::poll(limit)?,
            None => true,
        };
        if !ready {
            return Ok(Vec::new());
        }

        let mut batch = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            batch.push(event::read()?);
        }
        Ok(batch)
    }

    /// Lay out and draw `doc`, writing only the cells that changed.
    pub fn render(&mut self, doc: &Document) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.front = Buffer::new(width, height);
            self.back = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.back.clear();
        self.page_layout = layout(doc, Rect::from_size(width, height));
        render_to_buffer(doc, &self.page_layout, &mut self.back);

        self.flush()?;
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(&self.page_layout)
    }

    /// Layout of the last rendered frame.
    pub fn layout(&self) -> &LayoutResult {
        &self.page_layout
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut next: Option<(u16, u16)> = None;
        let mut style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.back.diff(&self.front) {
            // Drawn by the double-width glyph to its left.
            if cell.wide_continuation {
                continue;
            }

            if next != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if cell.style != style {
                queue_style(&mut self.stdout, cell)?;
                style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;
            next = Some((x.saturating_add(char_width(cell.char).max(1) as u16), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn queue_style(out: &mut io::Stdout, cell: &Cell) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if cell.style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if cell.style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if cell.style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
