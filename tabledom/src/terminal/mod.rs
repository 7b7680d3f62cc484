//! Crossterm back end: owns the screen while alive and repaints only the
//! cells that changed since the previous frame.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

pub struct Terminal {
    stdout: io::Stdout,
    frame: Buffer,
    shown: Buffer,
}

impl Terminal {
    /// Enter raw mode and the alternate screen. Restored on drop.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] opened {}x{}", width, height);

        Ok(Self {
            stdout,
            frame: Buffer::new(width, height),
            shown: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    /// Wait for input. `None` blocks until one event arrives; otherwise
    /// everything pending within `timeout` is returned.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let Some(timeout) = timeout else {
            return Ok(vec![event::read()?]);
        };

        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Paint a frame with `paint` and write the changed cells.
    pub fn draw<T>(&mut self, paint: impl FnOnce(&mut Buffer) -> T) -> io::Result<T> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {}x{}", width, height);
            self.frame = Buffer::new(width, height);
            self.shown = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.frame.clear();
        let result = paint(&mut self.frame);
        self.flush()?;
        std::mem::swap(&mut self.frame, &mut self.shown);
        Ok(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut pen = Pen::default();
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.frame.diff(&self.shown) {
            if cell.wide_continuation {
                continue;
            }
            if pen.cursor != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            pen.switch_to(&mut self.stdout, cell)?;
            write!(self.stdout, "{}", cell.char)?;
            pen.cursor = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// What the terminal currently draws with, to skip redundant commands.
struct Pen {
    cursor: Option<(u16, u16)>,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
}

impl Default for Pen {
    fn default() -> Self {
        let blank = Cell::default();
        Self {
            cursor: None,
            fg: blank.fg,
            bg: blank.bg,
            style: TextStyle::new(),
        }
    }
}

impl Pen {
    fn switch_to(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(ct_color(cell.fg)))?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(ct_color(cell.bg)))?;
            self.bg = cell.bg;
        }

        let style = cell.style;
        if (style.bold, style.dim) != (self.style.bold, self.style.dim) {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
        }
        if style.underline != self.style.underline {
            let attr = if style.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            queue!(out, SetAttribute(attr))?;
        }
        self.style = style;
        Ok(())
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
