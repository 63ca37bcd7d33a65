//! Applet controller.
//!
//! Every applet follows one state machine:
//!
//! ```text
//! Idle --(edit)--> Recompute --> Render --> Idle
//! ```
//!
//! An edit is validated in full before any state changes, so a rejected edit
//! leaves both the inputs and the last rendered output untouched. Recompute is
//! synchronous and total: the whole derived output set is replaced.

pub mod color;
pub mod kcl;
pub mod kvl;
pub mod products;
pub mod quantities;
pub mod signal;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{OhmlabError, Result};
use crate::ir::Command;
use crate::parser;
use crate::render::Figure;
use crate::stats::Stats;

pub use color::ColorApplet;
pub use kcl::KclApplet;
pub use kvl::KvlApplet;
pub use products::ProductsApplet;
pub use quantities::QuantitiesApplet;
pub use signal::SignalApplet;

/// One interactive demonstration: an input model, a solver and a renderer.
pub trait Applet {
    /// Everything the solver derives from the inputs.
    type Output;

    /// Name used on the command line and in logs.
    fn name(&self) -> &'static str;

    /// Validate and apply one `key = value` edit.
    fn apply(&mut self, key: &str, value: &str) -> Result<()>;

    /// Flip a visibility/mode switch.
    fn toggle(&mut self, what: &str) -> Result<()> {
        Err(OhmlabError::UnknownKey(what.to_string()))
    }

    /// Restore the default inputs.
    fn reset(&mut self);

    /// `(key, description)` for every editable input.
    fn keys(&self) -> Vec<(String, String)>;

    fn solve(&self) -> Self::Output;

    fn figure(&self, output: &Self::Output) -> Figure;

    fn report(&self, output: &Self::Output, writer: &mut dyn Write) -> Result<()>;
}

/// Where the controller is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recompute,
    Render,
}

/// What handling a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Inputs changed (or `show`): outputs were recomputed and re-rendered.
    Rendered,
    Saved(PathBuf),
    Help(String),
    Quit,
}

/// Controller state for one running applet.
pub struct Session<A: Applet> {
    applet: A,
    output: A::Output,
    figure: Figure,
    phase: Phase,
    output_dir: PathBuf,
}

impl<A: Applet> Session<A> {
    /// Start a session: solve and render the initial inputs.
    pub fn new(applet: A, output_dir: impl Into<PathBuf>) -> Self {
        let output = applet.solve();
        let figure = applet.figure(&output);
        Self {
            applet,
            output,
            figure,
            phase: Phase::Idle,
            output_dir: output_dir.into(),
        }
    }

    pub fn applet(&self) -> &A {
        &self.applet
    }

    pub fn output(&self) -> &A::Output {
        &self.output
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Handle one command. Errors leave the session unchanged.
    pub fn handle(&mut self, command: &Command, mut stats: Option<&mut Stats>) -> Result<Outcome> {
        let _span = tracing::debug_span!("handle", applet = self.applet.name()).entered();
        tracing::debug!(?command, edit = command.is_edit(), "command");

        let applied = match command {
            Command::Set { key, value } => self.applet.apply(key, value),
            Command::Toggle(what) => self.applet.toggle(what),
            Command::Reset => {
                self.applet.reset();
                Ok(())
            }
            Command::Show => {
                self.refresh(stats);
                return Ok(Outcome::Rendered);
            }
            Command::Save => {
                let path = self.save()?;
                if let Some(s) = stats {
                    s.saves += 1;
                }
                return Ok(Outcome::Saved(path));
            }
            Command::Help => return Ok(Outcome::Help(self.help())),
            Command::Quit => return Ok(Outcome::Quit),
        };

        match applied {
            Ok(()) => {
                if let Some(s) = stats.as_deref_mut() {
                    s.edits_applied += 1;
                }
                self.refresh(stats);
                Ok(Outcome::Rendered)
            }
            Err(e) => {
                tracing::warn!(applet = self.applet.name(), error = %e, "edit rejected");
                if let Some(s) = stats {
                    s.edits_rejected += 1;
                }
                Err(e)
            }
        }
    }

    /// Recompute → Render → Idle.
    fn refresh(&mut self, mut stats: Option<&mut Stats>) {
        self.phase = Phase::Recompute;
        let start = Instant::now();
        self.output = self.applet.solve();
        if let Some(s) = stats.as_deref_mut() {
            s.recomputes += 1;
            s.recompute_time += start.elapsed();
        }

        self.phase = Phase::Render;
        let start = Instant::now();
        self.figure = self.applet.figure(&self.output);
        if let Some(s) = stats {
            s.renders += 1;
            s.render_time += start.elapsed();
        }

        self.phase = Phase::Idle;
    }

    /// Write the current figure to the output directory.
    pub fn save(&self) -> Result<PathBuf> {
        self.figure.save(&self.output_dir)
    }

    pub fn write_report(&self, writer: &mut dyn Write) -> Result<()> {
        self.applet.report(&self.output, writer)
    }

    pub fn help(&self) -> String {
        let mut text = String::from("Editable inputs (key = value):\n");
        for (key, desc) in self.applet.keys() {
            text.push_str(&format!("  {:<22} {}\n", key, desc));
        }
        text.push_str("Commands: reset, toggle <what>, show, save, help, quit\n");
        text
    }
}

/// Drive a session from line input until `quit` or end of input.
///
/// Each accepted edit re-renders and writes the report to `out`; rejected
/// input is reported on `messages` and the session carries on.
pub fn run<A: Applet>(
    session: &mut Session<A>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    messages: &mut dyn Write,
    mut stats: Option<&mut Stats>,
) -> Result<()> {
    let _span = tracing::info_span!("session", applet = session.applet().name()).entered();
    session.write_report(out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}> ", session.applet().name())?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parser::parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(messages, "Input Error: {}", e)?;
                continue;
            }
        };

        match session.handle(&command, stats.as_deref_mut()) {
            Ok(Outcome::Rendered) => session.write_report(out)?,
            Ok(Outcome::Saved(path)) => writeln!(out, "Plot saved to: {}", path.display())?,
            Ok(Outcome::Help(text)) => write!(out, "{}", text)?,
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(messages, "Input Error: {}", e)?,
        }
    }
    Ok(())
}

/// `[min, max] unit` for help listings.
pub(crate) fn describe_range(unit: &str, min: f64, max: f64) -> String {
    format!("[{}, {}] {}", min, max, unit).trim_end().to_string()
}
