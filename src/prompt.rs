// src/prompt.rs
use std::{
    io::{self, BufRead, BufReader, Stderr, Stdin, Write},
    sync::Mutex,
};

use readability_ports::UserInteraction;
use readability_shared_kernel::{PresentationError, Result};

pub const PATH_PROMPT: &str = "Enter a File Path: ";
pub const SCORE_PROMPT: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all): ";

/// Line-based prompting over any reader/writer pair.
///
/// The prompt goes to `output` (stderr for the CLI, keeping stdout for the
/// report) and the answer is the next non-blank input line, trimmed.
pub struct TerminalInteraction<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalInteraction<BufReader<Stdin>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R, W> TerminalInteraction<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input: Mutex::new(input), output: Mutex::new(output) }
    }

    /// Hand back the writer, e.g. to inspect what was prompted.
    pub fn into_output(self) -> W {
        self.output.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn show(&self, prompt: &str) -> io::Result<()> {
        let mut output = self.output.lock().map_err(|_| io::Error::other("prompt writer poisoned"))?;
        output.write_all(prompt.as_bytes())?;
        output.flush()
    }

    fn read_answer(&self) -> io::Result<Option<String>> {
        let mut input = self.input.lock().map_err(|_| io::Error::other("prompt reader poisoned"))?;
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
        }
    }
}

impl<R, W> UserInteraction for TerminalInteraction<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&self, prompt: &str) -> Result<String> {
        let failed = |reason: String| PresentationError::PromptFailed {
            prompt: prompt.trim_end().to_string(),
            reason,
        };

        self.show(prompt).map_err(|err| failed(err.to_string()))?;
        let answer = self
            .read_answer()
            .map_err(|err| failed(err.to_string()))?
            .ok_or_else(|| failed("end of input".to_string()))?;
        log::debug!("answer to {:?}: {answer:?}", prompt.trim_end());
        Ok(answer)
    }
}
