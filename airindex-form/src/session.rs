//! Line-oriented driver for the form
//!
//! Each round walks the three controls in screen order:
//!
//! ```text
//! Select the pollutant          -> list number or identifier, empty keeps
//! Enter the concentration ...   -> non-negative number, empty keeps
//! [Calculate AQI]               -> Enter runs the calculation, other text is ignored
//! ```
//!
//! Entering `q` at any prompt, or closing the input, ends the session.
//! Rejected field input is reported and asked for again; calculation errors
//! are rendered and the next round starts. Nothing here terminates the
//! process.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{
    config::FormConfig,
    form::{evaluate_named, CalculatorForm, FormOutcome, InputError},
    render,
};

/// Input that ends the session
pub const QUIT: &str = "q";

/// What a prompt produced
enum Reply {
    /// Trimmed line; empty means "keep current value"
    Line(String),
    /// `q` or end of input
    Quit,
}

/// Interactive session over any line source and sink
pub struct Session<R, W> {
    input: R,
    output: W,
    form: CalculatorForm,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with a fresh form
    pub fn new(input: R, output: W, config: FormConfig) -> Self {
        Self {
            input,
            output,
            form: CalculatorForm::new(config),
        }
    }

    /// Current form state
    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run rounds until the user quits; returns the number of calculations
    pub fn run(&mut self) -> io::Result<usize> {
        writeln!(self.output, "{}", render::TITLE)?;
        writeln!(self.output, "{}", render::DESCRIPTION)?;

        let mut calculations = 0;
        loop {
            writeln!(self.output)?;
            if !self.ask_pollutant()? || !self.ask_concentration()? {
                break;
            }

            if !self.ask_trigger()? {
                break;
            }
            let outcome = self.form.submit();
            let message = render::outcome_message(&outcome, self.form.config().decimals);
            writeln!(self.output, "{}", message)?;
            calculations += 1;
        }

        info!("Session ended after {} calculation(s)", calculations);
        Ok(calculations)
    }

    /// Returns `false` when the user quit
    fn ask_pollutant(&mut self) -> io::Result<bool> {
        let list = render::selection_list(self.form.options(), self.form.pollutant());
        write!(self.output, "{}", list)?;

        loop {
            let label = format!("Pollutant [{}]: ", self.form.pollutant());
            match self.prompt(&label)? {
                Reply::Quit => return Ok(false),
                Reply::Line(line) if line.is_empty() => return Ok(true),
                Reply::Line(line) => match self.form.select(&line) {
                    Ok(_) => return Ok(true),
                    Err(e) => self.reject(&e)?,
                },
            }
        }
    }

    /// Returns `false` when the user quit
    fn ask_concentration(&mut self) -> io::Result<bool> {
        loop {
            let label = format!(
                "{} [{:.*}] ",
                render::concentration_label(self.form.pollutant()),
                self.form.config().decimals,
                self.form.concentration()
            );
            match self.prompt(&label)? {
                Reply::Quit => return Ok(false),
                Reply::Line(line) if line.is_empty() => return Ok(true),
                Reply::Line(line) => match self.form.enter_concentration(&line) {
                    Ok(_) => return Ok(true),
                    Err(e) => self.reject(&e)?,
                },
            }
        }
    }

    /// Waits for an empty line; returns `false` when the user quit
    fn ask_trigger(&mut self) -> io::Result<bool> {
        loop {
            let label = format!("[{}] press Enter ({} to quit): ", render::TRIGGER_LABEL, QUIT);
            match self.prompt(&label)? {
                Reply::Quit => return Ok(false),
                Reply::Line(line) if line.is_empty() => return Ok(true),
                Reply::Line(line) => {
                    debug!("Ignored trigger input: {}", line);
                    writeln!(self.output, "  {}", render::ignored_trigger_input(&line))?;
                }
            }
        }
    }

    fn reject(&mut self, error: &InputError) -> io::Result<()> {
        debug!("Rejected input: {}", error);
        writeln!(self.output, "  {}", error)
    }

    fn prompt(&mut self, label: &str) -> io::Result<Reply> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Reply::Quit);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT) {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line.to_string()))
    }
}

/// How a one-shot calculation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotStatus {
    /// AQI printed
    Calculated,
    /// Core rejected the query
    Rejected,
    /// Concentration argument was not a number
    Usage,
}

impl OneShotStatus {
    /// Process exit code for the status
    pub fn exit_code(&self) -> u8 {
        match self {
            OneShotStatus::Calculated => 0,
            OneShotStatus::Rejected => 1,
            OneShotStatus::Usage => 2,
        }
    }
}

/// Calculate once from raw arguments and print the message
///
/// The pollutant identifier and the concentration go to the core unfiltered,
/// so unknown identifiers and negative values surface as calculation errors.
pub fn run_once<W: Write>(
    pollutant: &str,
    concentration: &str,
    config: &FormConfig,
    output: &mut W,
) -> io::Result<OneShotStatus> {
    let concentration = match concentration.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            writeln!(output, "Error: {}", InputError::NotANumber(concentration.to_string()))?;
            return Ok(OneShotStatus::Usage);
        }
    };

    let outcome = evaluate_named(pollutant, concentration);
    writeln!(output, "{}", render::outcome_message(&outcome, config.decimals))?;

    Ok(match outcome {
        FormOutcome::Success(_) => OneShotStatus::Calculated,
        FormOutcome::Failure(_) => OneShotStatus::Rejected,
    })
}
