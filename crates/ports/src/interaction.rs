// crates/ports/src/interaction.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use readability_shared_kernel::{PresentationError, Result};

/// Trait for asking the user for input the command line did not provide.
///
/// The CLI answers from the terminal; tests and library callers can hand in
/// canned answers with [`Preset`].
pub trait UserInteraction: Send + Sync {
    /// Show `prompt` and return the user's answer.
    ///
    /// # Errors
    ///
    /// `PresentationError::PromptFailed` when no answer can be obtained.
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Answers prompts from a fixed queue, in order.
#[derive(Debug, Default)]
pub struct Preset {
    answers: Mutex<VecDeque<String>>,
}

impl Preset {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: Mutex::new(answers.into_iter().map(Into::into).collect()) }
    }
}

impl UserInteraction for Preset {
    fn ask(&self, prompt: &str) -> Result<String> {
        let next = self
            .answers
            .lock()
            .map_err(|_| PresentationError::PromptFailed {
                prompt: prompt.to_string(),
                reason: "answer queue poisoned".to_string(),
            })?
            .pop_front();
        next.ok_or_else(|| {
            PresentationError::PromptFailed {
                prompt: prompt.to_string(),
                reason: "no answer available".to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_answers_in_order() {
        let preset = Preset::new(["notes.txt", "all"]);
        assert_eq!(preset.ask("path?").unwrap(), "notes.txt");
        assert_eq!(preset.ask("score?").unwrap(), "all");
    }

    #[test]
    fn exhausted_preset_fails_with_prompt() {
        let preset = Preset::new(Vec::<String>::new());
        let err = preset.ask("Enter a File Path: ").unwrap_err();
        assert!(err.to_string().contains("Enter a File Path"));
    }
}
