//! Simulation mode: a line-oriented stand-in for the menu bar.

use crate::command::{self, Command, Flow};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Start-up text shown before the prompt.
pub(crate) fn banner() -> String {
    "Cropper - Simple Image Editing Tools\n\
     ====================================\n\
     \n\
     Running without the graphical front end.\n\
     The desktop version provides:\n\
     \n\
     Menu Structure:\n\
     \x20 * File Menu: New, Open, Close, Save, Save As\n\
     \x20 * Edit Menu: Undo, Redo, Cut, Copy, Paste, Delete, Select All\n\
     \x20 * Window Menu: Minimize, Zoom\n\
     \x20 * Help Menu: Cropper Help\n\
     \n\
     Note: currently running in simulation mode.\n"
        .to_string()
}

pub(crate) struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            prompt: prompt.into(),
        }
    }

    /// Read commands until end of input or a quit command.
    pub(crate) fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\nAvailable Commands (simulated menu actions):")?;
        writeln!(
            self.output,
            "Type 'help' to see all available commands, or 'quit' to exit."
        )?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n{}", self.prompt)?;
            self.output.flush().context("failed to flush prompt")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                log::debug!("end of input");
                break;
            }
            if self.step(&line)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using Cropper!")?;
        Ok(())
    }

    /// Handle a single raw input line.
    pub(crate) fn step(&mut self, line: &str) -> Result<Flow> {
        let Some(cmd) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };
        log::debug!("dispatching {cmd:?}");

        match cmd {
            Command::Help => write!(self.output, "\n{}", command::help_text())?,
            Command::About => write!(self.output, "\n{}", command::about_text())?,
            Command::Unknown => writeln!(
                self.output,
                "Unknown command: '{}'. Type 'help' for available commands.",
                command::normalize(line)
            )?,
            Command::Quit => {}
            stub => {
                if let Some(msg) = stub.message() {
                    writeln!(self.output, "{msg}")?;
                }
            }
        }
        Ok(cmd.flow())
    }
}
