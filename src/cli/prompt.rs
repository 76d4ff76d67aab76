//! Interactive prompts over any reader and writer.
//!
//! Invalid answers are handled here by re-prompting. They never reach the
//! session. End of input is reported as `None` so callers can wind down.

use std::io::{self, BufRead, Write};

/// Re-prompt message for numbered menus.
pub const INVALID_CHOICE: &str = "Please choose one of the options above!";

/// Re-prompt message for yes/no questions.
pub const INVALID_CONFIRM: &str = "Please choose YES or NO (Y/N)!";

/// Line-based prompter.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for plain output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a title followed by a 1-indexed list.
    pub fn menu<I, S>(&mut self, title: &str, items: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        for (i, item) in items.into_iter().enumerate() {
            writeln!(self.output, "({}) {}", i + 1, item.as_ref())?;
        }
        Ok(())
    }

    /// Ask for a number between 1 and `count`, returning its 0-based index.
    pub fn choose_index(&mut self, question: &str, count: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "{}", INVALID_CHOICE)?,
            }
        }
    }

    /// Ask a yes/no question. Accepts `y` or `n` in any case.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => writeln!(self.output, "{}", INVALID_CONFIRM)?,
            }
        }
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
