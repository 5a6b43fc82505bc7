//! Line-oriented operator prompts for the selection menus

use std::io::{self, BufRead, Write};

use crate::config::workflow;

/// Menu prompts over an input reader and an output writer
///
/// The interactive binary wires this to stdin/stdout; tests feed a script.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

/// True for inputs that leave the current menu
pub fn is_quit(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    workflow::QUIT_WORDS.contains(&answer.as_str())
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for menu and report text
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompt and return the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line; `None` on end of input
    fn read_answer(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a numbered menu and read a choice
    ///
    /// Returns the 0-based index, or `None` when the operator quits.
    pub fn choose(&mut self, title: &str, items: &[String]) -> io::Result<Option<usize>> {
        if items.is_empty() {
            writeln!(self.output, "No items to choose from.")?;
            return Ok(None);
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, item)?;
        }
        writeln!(self.output, "  q. Quit")?;
        self.read_index(items.len())
    }

    /// Read a 1-based choice for an already printed list of `count` items
    pub fn read_index(&mut self, count: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.read_answer("Enter choice: ")? else {
                return Ok(None);
            };
            if is_quit(&answer) {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}, or 'q' to quit.",
                    count
                )?,
                Err(_) => writeln!(self.output, "Please enter a valid number or 'q' to quit.")?,
            }
        }
    }

    /// Ask for a raw site id; `None` when blank or a quit word
    pub fn ask_site_id(&mut self) -> io::Result<Option<String>> {
        let answer = self.read_answer("Enter site_id to query gateway stats (or 'q' to quit): ")?;
        Ok(answer.filter(|a| !a.is_empty() && !is_quit(a)))
    }

    /// Block until the operator presses Enter
    pub fn acknowledge(&mut self, message: &str) -> io::Result<()> {
        self.read_answer(message).map(|_| ())
    }
}
