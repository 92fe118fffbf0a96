use serde::{Deserialize, Serialize};

use crate::models::domain::EvaluatedQuiz;

/// Response envelope of `POST /evaluate-quizzes`: the evaluator's verdict
/// list, wrapped unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationsWrapper {
    pub evaluations: Vec<EvaluatedQuiz>,
    #[serde(default, alias = "task_id", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, alias = "failure_cause", skip_serializing_if = "Option::is_none")]
    pub failure_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
