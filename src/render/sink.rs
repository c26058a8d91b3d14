//! Output sinks for rendered listings
//!
//! The renderer never talks to the terminal directly. It writes through an
//! [`OutputSink`], which is either a [`TerminalSink`] (crossterm escape codes
//! over any `Write`) or a [`Recorder`] that captures fragments for tests.
//!
//! Colors are applied through [`ColorGuard`], which resets the foreground
//! color when it goes out of scope. Early returns via `?` therefore never
//! leave the terminal colored.

use std::ffi::OsStr;
use std::io::{self, BufWriter, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crossterm::queue;
use crossterm::style::{ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;
use serde::{Deserialize, Serialize};

use super::Color;

/// Destination for rendered text and color changes
pub trait OutputSink {
    /// Writes text without a line terminator
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Writes text followed by a newline
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_text(text)?;
        self.write_text("\n")
    }

    /// Switches the foreground color for subsequent text
    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    /// Restores the terminal's default foreground color
    fn reset_color(&mut self) -> io::Result<()>;

    /// Flushes any buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// When to emit color escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decides whether stdout should be colored
    pub fn enabled_for_stdout(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                auto_color(std::env::var_os("NO_COLOR").as_deref(), io::stdout().is_tty())
            }
        }
    }
}

/// `NO_COLOR` only counts when it is set to a non-empty value
fn auto_color(no_color: Option<&OsStr>, is_tty: bool) -> bool {
    let suppressed = no_color.is_some_and(|v| !v.is_empty());
    is_tty && !suppressed
}

/// Sink that writes to a terminal (or any writer) using crossterm commands
pub struct TerminalSink<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Consumes the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalSink<BufWriter<Stdout>> {
    /// Buffered stdout sink, colored according to `mode`
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(BufWriter::new(io::stdout()), mode.enabled_for_stdout())
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        if self.colored {
            queue!(self.out, SetForegroundColor(color.into()))?;
        }
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        if self.colored {
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// A single captured sink operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Color(Color),
    Reset,
}

/// Sink that records every operation, for tests
#[derive(Debug, Default)]
pub struct Recorder {
    fragments: Vec<Fragment>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations in order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The written text with colors stripped
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .filter_map(|f| match f {
                Fragment::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The written text split into lines
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// The color in effect after the last operation, if any
    pub fn active_color(&self) -> Option<Color> {
        self.fragments.iter().fold(None, |current, f| match f {
            Fragment::Color(c) => Some(*c),
            Fragment::Reset => None,
            Fragment::Text(_) => current,
        })
    }
}

impl OutputSink for Recorder {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.fragments.push(Fragment::Text(text.to_string()));
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.fragments.push(Fragment::Color(color));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.fragments.push(Fragment::Reset);
        Ok(())
    }
}

/// Scoped foreground color
///
/// Sets the color on creation and resets it on drop. Use [`ColorGuard::finish`]
/// on the happy path to surface a failing reset; the drop path ignores it.
pub struct ColorGuard<'a, S: OutputSink + ?Sized> {
    sink: &'a mut S,
    active: bool,
}

impl<'a, S: OutputSink + ?Sized> ColorGuard<'a, S> {
    /// Colors subsequent writes with `color`
    pub fn new(sink: &'a mut S, color: Color) -> io::Result<Self> {
        sink.set_foreground(color)?;
        Ok(Self { sink, active: true })
    }

    /// Colors subsequent writes with `color` if one is given, otherwise a no-op
    pub fn maybe(sink: &'a mut S, color: Option<Color>) -> io::Result<Self> {
        match color {
            Some(color) => Self::new(sink, color),
            None => Ok(Self {
                sink,
                active: false,
            }),
        }
    }

    /// Resets the color now
    pub fn finish(mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            self.sink.reset_color()?;
        }
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> Deref for ColorGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.sink
    }
}

impl<S: OutputSink + ?Sized> DerefMut for ColorGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.sink
    }
}

impl<S: OutputSink + ?Sized> Drop for ColorGuard<'_, S> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.sink.reset_color();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_captures_fragments() {
        let mut rec = Recorder::new();
        rec.set_foreground(Color::Red).unwrap();
        rec.write_text("[ ]").unwrap();
        rec.reset_color().unwrap();
        rec.write_line(" done").unwrap();

        assert_eq!(
            rec.fragments(),
            &[
                Fragment::Color(Color::Red),
                Fragment::Text("[ ]".to_string()),
                Fragment::Reset,
                Fragment::Text(" done".to_string()),
                Fragment::Text("\n".to_string()),
            ]
        );
        assert_eq!(rec.text(), "[ ] done\n");
        assert_eq!(rec.active_color(), None);
    }

    #[test]
    fn guard_resets_on_finish() {
        let mut rec = Recorder::new();
        {
            let mut guard = ColorGuard::new(&mut rec, Color::Blue).unwrap();
            guard.write_text("header").unwrap();
            guard.finish().unwrap();
        }

        assert_eq!(
            rec.fragments(),
            &[
                Fragment::Color(Color::Blue),
                Fragment::Text("header".to_string()),
                Fragment::Reset,
            ]
        );
    }

    #[test]
    fn guard_resets_on_early_return() {
        fn fails_midway(sink: &mut Recorder) -> io::Result<()> {
            let mut guard = ColorGuard::new(sink, Color::Green)?;
            guard.write_text("partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }

        let mut rec = Recorder::new();
        assert!(fails_midway(&mut rec).is_err());

        assert_eq!(rec.fragments().last(), Some(&Fragment::Reset));
        assert_eq!(rec.active_color(), None);
    }

    #[test]
    fn auto_color_ignores_empty_no_color() {
        assert!(auto_color(None, true));
        assert!(auto_color(Some(OsStr::new("")), true));
        assert!(!auto_color(Some(OsStr::new("1")), true));
        assert!(!auto_color(None, false));
    }

    #[test]
    fn uncolored_guard_emits_nothing_extra() {
        let mut rec = Recorder::new();
        let mut guard = ColorGuard::maybe(&mut rec, None).unwrap();
        guard.write_text("P0").unwrap();
        guard.finish().unwrap();

        assert_eq!(rec.fragments(), &[Fragment::Text("P0".to_string())]);
    }

    #[test]
    fn terminal_sink_without_color_writes_plain_text() {
        let mut sink = TerminalSink::new(Vec::new(), false);
        sink.set_foreground(Color::Red).unwrap();
        sink.write_line("plain").unwrap();
        sink.reset_color().unwrap();

        assert_eq!(sink.into_inner(), b"plain\n");
    }

    #[test]
    fn terminal_sink_with_color_emits_escape_codes() {
        let mut sink = TerminalSink::new(Vec::new(), true);
        sink.set_foreground(Color::Red).unwrap();
        sink.write_text("hot").unwrap();
        sink.reset_color().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("hot"));
        assert!(out.ends_with("\u{1b}[0m"));
    }
}
