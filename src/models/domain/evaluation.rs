use serde::{Deserialize, Serialize};

/// Per-quiz verdicts from the evaluator, one boolean per quality criterion.
/// Criteria the evaluator could not decide come back as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedQuiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "is_related")]
    pub is_related: Option<bool>,
    #[serde(default, alias = "is_self_contained")]
    pub is_self_contained: Option<bool>,
    #[serde(default, alias = "is_question")]
    pub is_question: Option<bool>,
    #[serde(default, alias = "language_is_clear")]
    pub language_is_clear: Option<bool>,
    #[serde(default, alias = "answers_are_all_different")]
    pub answers_are_all_different: Option<bool>,
    #[serde(default, alias = "fake_answers_are_not_obvious")]
    pub fake_answers_are_not_obvious: Option<bool>,
    #[serde(default, alias = "answers_are_related")]
    pub answers_are_related: Option<bool>,
    #[serde(default, alias = "quiz_about_concept")]
    pub quiz_about_concept: Option<bool>,
}
