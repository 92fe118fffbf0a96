use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{EnrichmentMetadata, QuizRecord};

/// Outward-facing schemas use camelCase wire keys; the snake_case aliases
/// let callers that still send snake_case construct the same objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentVersionMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, alias = "media_type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl From<EnrichmentMetadata> for EnrichmentVersionMetadata {
    fn from(metadata: EnrichmentMetadata) -> Self {
        Self {
            title: metadata.title,
            description: metadata.description,
            topics: metadata.main_topics,
            discipline: metadata.discipline,
            media_type: metadata.media_type,
        }
    }
}

/// One answer option. `id` is the stable identity assigned by the caller;
/// it survives every transformation that touches the choice text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "option_text")]
    pub option_text: String,
    #[serde(alias = "correct_answer")]
    pub correct_answer: bool,
}

/// Timestamps locating the answer in the source media, `HH:MM:SS`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPointer {
    #[serde(default, alias = "start_answer_pointer", skip_serializing_if = "Option::is_none")]
    pub start_answer_pointer: Option<String>,
    #[serde(default, alias = "stop_answer_pointer", skip_serializing_if = "Option::is_none")]
    pub stop_answer_pointer: Option<String>,
}

/// A quiz question with a fixed four-slot choice layout: slot 0 holds the
/// correct answer, slots 1-3 the distractors. The slot order is positional
/// identity and must never be rearranged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub explanation: String,
    pub choices: Vec<Choice>,
    #[serde(default, alias = "answer_pointer", skip_serializing_if = "Option::is_none")]
    pub answer_pointer: Option<AnswerPointer>,
}

impl MultipleChoiceQuestion {
    /// Flattens the question into the positional-slot record shape consumed
    /// by the evaluator and translator. Choice ids and correctness flags are
    /// dropped here and reattached by the caller after the round trip.
    pub fn to_record(&self) -> AppResult<QuizRecord> {
        let [answer, fake_1, fake_2, fake_3] = match self.choices.as_slice() {
            [a, b, c, d] => [a, b, c, d],
            other => {
                return Err(AppError::ValidationError(format!(
                    "question must have exactly 4 choices, got {}",
                    other.len()
                )))
            }
        };

        let correct_count = self.choices.iter().filter(|c| c.correct_answer).count();
        if correct_count != 1 {
            return Err(AppError::ValidationError(format!(
                "question must have exactly one correct choice, got {correct_count}"
            )));
        }

        Ok(QuizRecord {
            id: self.id.clone(),
            question: self.question.clone(),
            explanation: self.explanation.clone(),
            answer: answer.option_text.clone(),
            fake_answer_1: fake_1.option_text.clone(),
            fake_answer_2: fake_2.option_text.clone(),
            fake_answer_3: fake_3.option_text.clone(),
        })
    }
}

/// Response envelope of `POST /generate-quizzes`. `taskId`, `failureCause`
/// and `status` exist for batch-style callers reporting partial pipeline
/// failure without an HTTP-level error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizzesWrapper {
    #[serde(alias = "enrichment_version_metadata")]
    pub enrichment_version_metadata: EnrichmentVersionMetadata,
    #[serde(alias = "multiple_choice_questions")]
    pub multiple_choice_questions: Vec<MultipleChoiceQuestion>,
    #[serde(default, alias = "task_id", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, alias = "failure_cause", skip_serializing_if = "Option::is_none")]
    pub failure_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
