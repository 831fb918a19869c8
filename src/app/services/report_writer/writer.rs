//! Report assembly and atomic file output

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::constants::QUESTION_COUNT;
use crate::{Error, Result};

/// Answers keyed by question number (1-based)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerReport {
    answers: BTreeMap<usize, String>,
}

impl AnswerReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from answers given in question order
    pub fn from_answers<I, T>(answers: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let mut report = Self::new();
        for (offset, answer) in answers.into_iter().enumerate() {
            report.add_answer(offset + 1, answer)?;
        }
        Ok(report)
    }

    /// Record the answer to one question, replacing any earlier answer
    ///
    /// Line breaks inside the answer are folded to spaces so that every
    /// answer occupies exactly one line of the report.
    pub fn add_answer(&mut self, index: usize, answer: impl Display) -> Result<()> {
        if !(1..=QUESTION_COUNT).contains(&index) {
            return Err(Error::invalid_question(index));
        }

        let text = answer.to_string().replace(['\r', '\n'], " ");
        if self.answers.insert(index, text).is_some() {
            debug!("Replaced answer to question {}", index);
        }
        Ok(())
    }

    /// Answer recorded for a question, if any
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Number of questions answered so far
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Question numbers still without an answer
    pub fn missing(&self) -> Vec<usize> {
        (1..=QUESTION_COUNT)
            .filter(|index| !self.answers.contains_key(index))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    /// Render the report text, one newline-terminated line per question
    pub fn render(&self) -> Result<String> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(Error::report_incomplete(missing));
        }

        let mut content = String::new();
        for answer in self.answers.values() {
            content.push_str(answer);
            content.push('\n');
        }
        Ok(content)
    }

    /// Write the report as `file_name` inside `dir`, replacing an existing file
    ///
    /// The directory is created when it does not exist yet. Returns the path
    /// of the written report.
    pub fn write_to_dir(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let content = self.render()?;
        let report_path = dir.join(file_name);
        let path_label = report_path.display().to_string();

        fs::create_dir_all(dir).map_err(|e| Error::report_writing(path_label.clone(), e))?;

        let mut temp_file =
            NamedTempFile::new_in(dir).map_err(|e| Error::report_writing(path_label.clone(), e))?;
        debug!("Staging report in {}", temp_file.path().display());

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| Error::report_writing(path_label.clone(), e))?;

        temp_file
            .persist(&report_path)
            .map_err(|e| Error::report_writing(path_label, e.error))?;

        info!("Wrote {} answers to {}", self.len(), report_path.display());
        Ok(report_path)
    }
}
