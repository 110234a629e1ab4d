//! Interactive choice of the input file.

use anyhow::Result;
use console::style;
use dialoguer::Input;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File read when the user does not browse for one.
pub const DEFAULT_INPUT: &str = "lab_schedule.csv";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number, please enter a number")]
    NotANumber(String),
    #[error("{choice} is not in the list, pick 1-{count}")]
    OutOfRange { choice: usize, count: usize },
    #[error("'{0}' is not a CSV file, please select a CSV file")]
    NotCsv(String),
}

/// What the opening prompt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    Browse,
    Default,
}

impl SourceChoice {
    /// An empty answer browses the directory; anything else takes the default file.
    pub fn from_answer(answer: &str) -> Self {
        if answer.is_empty() {
            Self::Browse
        } else {
            Self::Default
        }
    }
}

/// Source of candidate files and of the user's answer.
pub trait FileSelector {
    fn list_candidates(&self) -> Result<Vec<String>>;

    /// Shows the candidates and returns the raw answer.
    fn confirm_choice(&mut self, candidates: &[String]) -> Result<String>;

    fn reject(&mut self, _error: &SelectionError) {}
}

pub fn validate_selection<'a>(answer: &str, candidates: &'a [String]) -> Result<&'a str, SelectionError> {
    let choice: usize = answer
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber(answer.to_string()))?;
    let name = choice
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .ok_or(SelectionError::OutOfRange {
            choice,
            count: candidates.len(),
        })?;
    if !name.to_lowercase().ends_with(".csv") {
        return Err(SelectionError::NotCsv(name.clone()));
    }
    Ok(name.as_str())
}

/// Asks until a listed CSV file is chosen. Only I/O or prompt failures end the loop.
pub fn pick_csv<S: FileSelector>(selector: &mut S) -> Result<PathBuf> {
    loop {
        let candidates = selector.list_candidates()?;
        let answer = selector.confirm_choice(&candidates)?;
        match validate_selection(&answer, &candidates) {
            Ok(name) => {
                log::info!("selected {name}");
                return Ok(PathBuf::from(name));
            }
            Err(e) => {
                log::debug!("rejected selection: {e}");
                selector.reject(&e);
            }
        }
    }
}

/// Lists a directory and reads the choice from the terminal.
pub struct ConsoleSelector {
    dir: PathBuf,
}

impl ConsoleSelector {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl FileSelector for ConsoleSelector {
    fn list_candidates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn confirm_choice(&mut self, candidates: &[String]) -> Result<String> {
        println!("\nAvailable files in {}:", self.dir.display());
        for (i, name) in candidates.iter().enumerate() {
            println!("{} : {}", style(i + 1).cyan(), name);
        }
        let answer: String = Input::new()
            .with_prompt("Please enter the corresponding number to your file")
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn reject(&mut self, error: &SelectionError) {
        println!("{}", style(error).red());
        println!("Press Ctrl + C to exit, or select another file.");
    }
}

/// Opening question: browse the directory or fall back to `DEFAULT_INPUT`.
pub fn prompt_source() -> Result<SourceChoice> {
    let answer: String = Input::new()
        .with_prompt(format!(
            "Choose a file (press enter to select from list) or use '{DEFAULT_INPUT}' (type anything then enter)"
        ))
        .allow_empty(true)
        .interact_text()?;
    Ok(SourceChoice::from_answer(&answer))
}
