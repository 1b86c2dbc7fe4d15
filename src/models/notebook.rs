use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("invalid notebook payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("notebook has {questions} questions but {answers} answers")]
    QuestionAnswerMismatch { questions: usize, answers: usize },
}

/// Validated study-notebook record produced by the LLM collaborator.
///
/// `questions` and `answers` correspond pairwise, in order. All four
/// fields are required; a payload missing any of them is rejected at
/// the boundary, never repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub summary: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub highlights: Vec<String>,
}

impl Notebook {
    /// Validate a raw JSON payload against the notebook schema.
    pub fn from_json(payload: &str) -> Result<Self, NotebookError> {
        let notebook: Notebook = serde_json::from_str(payload)?;

        if notebook.questions.len() != notebook.answers.len() {
            return Err(NotebookError::QuestionAnswerMismatch {
                questions: notebook.questions.len(),
                answers: notebook.answers.len(),
            });
        }

        Ok(notebook)
    }
}
