//! TerminalRenderer: pushes framebuffers to the real terminal.
//!
//! Each frame is compared row by row with the one shown before it and only
//! the spans that differ are rewritten. A missing or differently sized
//! previous frame turns every row into one span after a screen clear.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand the previously shown buffer back through `fb`.
    ///
    /// The caller redraws into whatever comes back; no frame is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.buf)?;
        self.flush()?;

        match self.shown.as_mut() {
            Some(shown) => std::mem::swap(shown, fb),
            None => {
                let blank = FrameBuffer::new(fb.width(), fb.height());
                self.shown = Some(std::mem::replace(fb, blank));
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Escape sequences turning the `shown` screen into `next`.
fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        let spans = match shown {
            Some(s) => dirty_spans(s.row(y), row),
            None => vec![0..row.len()],
        };
        for span in spans {
            out.queue(cursor::MoveTo(span.start as u16, y))?;
            for cell in &row[span] {
                pen.paint(out, *cell)?;
            }
        }
    }

    if pen.style.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Maximal runs of columns whose cells differ.
fn dirty_spans(before: &[Cell], after: &[Cell]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;
    for (x, cell) in after.iter().enumerate() {
        let changed = before.get(x) != Some(cell);
        match (changed, open) {
            (true, None) => open = Some(x),
            (false, Some(start)) => {
                spans.push(start..x);
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        spans.push(start..after.len());
    }
    spans
}

/// Tracks the active SGR state so unchanged styles are not re-sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn paint(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        let want = cell.style;
        match self.style {
            Some(have) if have == want => {}
            Some(have) if have.bold == want.bold && have.dim == want.dim => {
                out.queue(SetColors(colors(want)))?;
            }
            // An attribute reset also drops colors, so colors follow it.
            _ => {
                out.queue(SetAttribute(Attribute::Reset))?;
                if want.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if want.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                out.queue(SetColors(colors(want)))?;
            }
        }
        self.style = Some(want);
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn colors(style: CellStyle) -> Colors {
    Colors::new(term_color(style.fg), term_color(style.bg))
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
