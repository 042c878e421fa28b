use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub task_id: String,
    pub category: String,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn answer_text(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }
}

/// Read-only question set loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Builds a store, keeping the first question for each task id.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(questions.len());

        for question in questions {
            if seen.insert(question.task_id.clone()) {
                unique.push(question);
            } else {
                warn!(
                    task_id = %question.task_id,
                    "Dropping question with duplicate task id"
                );
            }
        }

        Self { questions: unique }
    }

    /// Loads the question set, degrading to an empty store on any failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(store) => {
                info!(
                    path = %path.display(),
                    count = store.len(),
                    "Loaded questions"
                );
                store
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error loading questions");
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let questions: Vec<Question> = serde_yaml::from_str(content)?;
        Ok(Self::new(questions))
    }

    pub fn find_by_task_id(&self, task_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.task_id == task_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS_YAML: &str = r#"
- taskId: q1
  category: Math
  question: "2+2?"
  answers: ["3", "4", "5"]
  correctAnswer: 1
- taskId: q2
  category: Geografie
  question: Hauptstadt von Frankreich?
  answers:
    - Berlin
    - Paris
  correctAnswer: 1
"#;

    #[test]
    fn test_parse_questions_in_order() {
        let store = QuestionStore::from_yaml_str(QUESTIONS_YAML).unwrap();
        assert_eq!(store.len(), 2);

        let ids: Vec<&str> = store.iter().map(|q| q.task_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);

        let q1 = store.find_by_task_id("q1").unwrap();
        assert_eq!(q1.category, "Math");
        assert_eq!(q1.answers, vec!["3", "4", "5"]);
        assert_eq!(q1.correct_answer, 1);
        assert_eq!(q1.answer_text(1), Some("4"));
        assert_eq!(q1.answer_text(3), None);
    }

    #[test]
    fn test_unknown_task_id() {
        let store = QuestionStore::from_yaml_str(QUESTIONS_YAML).unwrap();
        assert!(store.find_by_task_id("missing").is_none());
    }

    #[test]
    fn test_duplicate_task_ids_keep_first() {
        let yaml = r#"
- taskId: dup
  category: First
  question: Erste?
  answers: [a, b]
  correctAnswer: 0
- taskId: dup
  category: Second
  question: Zweite?
  answers: [c, d]
  correctAnswer: 1
"#;
        let store = QuestionStore::from_yaml_str(yaml).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_task_id("dup").unwrap().category, "First");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = QuestionStore::from_yaml_str("- taskId: [unterminated");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_degrades_to_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();

        let missing = QuestionStore::load(&temp_dir.path().join("questions.yaml"));
        assert!(missing.is_empty());

        let broken_path = temp_dir.path().join("broken.yaml");
        std::fs::write(&broken_path, "not: [a, list").unwrap();
        let broken = QuestionStore::load(&broken_path);
        assert!(broken.is_empty());
        assert!(broken.find_by_task_id("q1").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.yaml");
        std::fs::write(&path, QUESTIONS_YAML).unwrap();

        let store = QuestionStore::load(&path);
        assert_eq!(store.len(), 2);
        assert!(store.find_by_task_id("q2").is_some());
    }
}
