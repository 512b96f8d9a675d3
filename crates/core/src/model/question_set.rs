use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question bank is empty")]
    Empty,

    #[error("question id {id} is used more than once")]
    DuplicateId { id: QuestionId },

    #[error("question {id} is invalid: {source}")]
    Question {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error("failed to decode question bank: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Ordered, non-empty, immutable list of questions a session runs over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` for an empty list and
    /// `QuestionSetError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !ids.insert(question.id()) {
                return Err(QuestionSetError::DuplicateId { id: question.id() });
            }
        }

        Ok(Self { questions })
    }

    /// Validate every draft, then build the set.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Question` naming the first invalid draft,
    /// or any error from [`QuestionSet::new`].
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionSetError> {
        let questions = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id;
                draft
                    .validate()
                    .map_err(|source| QuestionSetError::Question { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Decode a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Decode` for malformed JSON and the
    /// validation errors of [`QuestionSet::from_drafts`] otherwise.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionSetError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        Self::from_drafts(drafts)
    }

    /// Number of questions; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: an empty set cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    #[must_use]
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
