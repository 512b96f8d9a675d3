use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty band of a question.
///
/// Serialized in lowercase English; the short labels used by the bundled
/// question bank (`初级`, `中级`, `高级`) are accepted when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "初级")]
    Beginner,
    #[serde(alias = "中级")]
    Intermediate,
    #[serde(alias = "高级")]
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── EXPLANATION ───────────────────────────────────────────────────────────────
//

/// Explanation revealed once an answer has been submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// The grammar rule being tested.
    pub rule: String,
    /// A sentence that applies the rule.
    pub example: String,
    /// Why the distractors are wrong.
    pub analysis: String,
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question must offer at least one option")]
    EmptyOptions,

    #[error("options cannot be blank")]
    BlankOption,

    #[error("option {option:?} is listed more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    CorrectAnswerNotInOptions { answer: String },

    #[error("sentence cannot be empty on both sides of the blank")]
    EmptySentence,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question record, as it appears in a question bank.
///
/// Field names follow the camelCase layout of the bank files
/// (`sentenceParts`, `correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub sentence_parts: (String, String),
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub explanation: Explanation,
}

impl QuestionDraft {
    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the options are empty, blank or repeated,
    /// when the correct answer is not among the options, or when the sentence
    /// has no text on either side of the blank.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::EmptyOptions);
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if option.trim().is_empty() {
                return Err(QuestionError::BlankOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !seen.contains(self.correct_answer.as_str()) {
            return Err(QuestionError::CorrectAnswerNotInOptions {
                answer: self.correct_answer,
            });
        }

        let (before, after) = &self.sentence_parts;
        if before.trim().is_empty() && after.trim().is_empty() {
            return Err(QuestionError::EmptySentence);
        }

        Ok(Question {
            id: self.id,
            sentence_parts: self.sentence_parts,
            options: self.options,
            correct_answer: self.correct_answer,
            difficulty: self.difficulty,
            category: self.category,
            explanation: self.explanation,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated fill-in-the-blank question.
///
/// Guarantees a non-empty list of distinct options that contains the correct
/// answer. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft", into = "QuestionDraft")]
pub struct Question {
    id: QuestionId,
    sentence_parts: (String, String),
    options: Vec<String>,
    correct_answer: String,
    difficulty: Difficulty,
    category: String,
    explanation: Explanation,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Text shown before the blank.
    #[must_use]
    pub fn before_blank(&self) -> &str {
        &self.sentence_parts.0
    }

    /// Text shown after the blank.
    #[must_use]
    pub fn after_blank(&self) -> &str {
        &self.sentence_parts.1
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    /// Returns true if `option` is one of this question's options.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            sentence_parts: question.sentence_parts,
            options: question.options,
            correct_answer: question.correct_answer,
            difficulty: question.difficulty,
            category: question.category,
            explanation: question.explanation,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
