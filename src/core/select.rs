use crate::error::{GanfetchError, Result};
use std::io::{self, BufRead, Write};

/// Picks one dataset out of the catalog listing.
pub trait Selector {
    fn select(&mut self, options: &[String]) -> Result<String>;
}

/// Prints a numbered menu and reads the chosen index from a line of input.
pub struct LineSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineSelector<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Selector for LineSelector<R, W> {
    fn select(&mut self, options: &[String]) -> Result<String> {
        writeln!(self.output, "Options:\n")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{i}: {option}")?;
        }
        write!(
            self.output,
            "\nPlease enter the number of the dataset above you wish to download: "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        pick(options, line.trim())
    }
}

fn pick(options: &[String], choice: &str) -> Result<String> {
    let index: usize = choice
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            GanfetchError::invalid_selection(choice, e.to_string())
        })?;

    options.get(index).cloned().ok_or_else(|| {
        GanfetchError::invalid_selection(
            choice,
            format!("index out of range, {} options available", options.len()),
        )
    })
}
