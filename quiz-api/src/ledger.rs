use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub task_id: String,
    pub category: String,
    pub given_answer: usize,
    pub correct_answer: usize,
}

impl AnswerRecord {
    pub fn is_correct(&self) -> bool {
        self.given_answer == self.correct_answer
    }
}

/// Recorded answers, mirrored to a JSON file on every mutation.
///
/// `given_answers` holds a key exactly when `records` holds an entry for that
/// task id. Both are only ever changed together.
#[derive(Debug)]
pub struct ResultLedger {
    path: PathBuf,
    records: Vec<AnswerRecord>,
    given_answers: HashMap<String, usize>,
}

impl ResultLedger {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            given_answers: HashMap::new(),
        }
    }

    /// Loads the ledger file if present. An unreadable or malformed file is
    /// logged and yields an empty ledger; the file itself is left alone until
    /// the next write.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let mut ledger = Self::empty(path);

        match read_records(&ledger.path).await {
            Ok(Some(records)) => {
                ledger.replace_records(records);
                info!(
                    path = %ledger.path.display(),
                    count = ledger.records.len(),
                    "Loaded previous results"
                );
            }
            Ok(None) => {}
            Err(e) => {
                error!(path = %ledger.path.display(), error = %e, "Error loading results");
            }
        }

        ledger
    }

    fn replace_records(&mut self, records: Vec<AnswerRecord>) {
        self.given_answers.clear();
        for record in &records {
            self.given_answers
                .entry(record.task_id.clone())
                .or_insert(record.given_answer);
        }
        self.records = records;
    }

    pub fn has_answered(&self, task_id: &str) -> bool {
        self.given_answers.contains_key(task_id)
    }

    pub fn given_answer(&self, task_id: &str) -> Option<usize> {
        self.given_answers.get(task_id).copied()
    }

    /// Appends a record unless the task was already answered, then rewrites
    /// the ledger file.
    ///
    /// Returns `Ok(false)` without touching memory or disk for a repeated
    /// task id. If the write fails the append is undone and the error is
    /// returned.
    pub async fn record_answer(
        &mut self,
        task_id: &str,
        category: &str,
        given_answer: usize,
        correct_answer: usize,
    ) -> AppResult<bool> {
        if self.has_answered(task_id) {
            return Ok(false);
        }

        self.records.push(AnswerRecord {
            task_id: task_id.to_string(),
            category: category.to_string(),
            given_answer,
            correct_answer,
        });
        self.given_answers.insert(task_id.to_string(), given_answer);

        if let Err(e) = self.save().await {
            self.records.pop();
            self.given_answers.remove(task_id);
            error!(
                path = %self.path.display(),
                task_id,
                error = %e,
                "Failed to save results"
            );
            return Err(e);
        }

        info!(task_id, given_answer, correct_answer, "Recorded answer");
        Ok(true)
    }

    /// Deletes the ledger file, then clears all records. A missing file is
    /// fine; any other delete failure leaves the ledger untouched.
    pub async fn reset(&mut self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to remove results");
                return Err(e.into());
            }
        }

        self.records.clear();
        self.given_answers.clear();

        info!(path = %self.path.display(), "Results reset");
        Ok(())
    }

    async fn save(&self) -> AppResult<()> {
        let content = serde_json::to_string_pretty(&self.records)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

async fn read_records(path: &Path) -> AppResult<Option<Vec<AnswerRecord>>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}
