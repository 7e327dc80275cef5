//! TerminalDisplay: draws generations on a real terminal.
//!
//! Commands are queued into an in-memory buffer and written in one go on
//! [`DisplayDriver::flush`], so a frame appears at once instead of
//! line by line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::display::{terminal_size_for, DisplayDriver};

pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalDisplay<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to the alternate screen in raw mode with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal to the state it had before [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> DisplayDriver for TerminalDisplay<W> {
    fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let (width, height) = terminal_size_for(rows, cols);
        self.buf.queue(terminal::SetSize(width, height))?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        // Raw mode does not translate '\n', so return the carriage explicitly.
        self.buf.queue(Print(line))?;
        self.buf.queue(Print("\r\n"))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
    }
}
