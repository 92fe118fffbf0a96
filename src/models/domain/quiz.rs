use serde::{Deserialize, Serialize};

/// Raw quiz generator output: one correct answer, three distractors, and
/// second offsets into the source media locating the answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    pub question: String,
    pub explanation: String,
    pub answer: String,
    pub fake_answer_1: String,
    pub fake_answer_2: String,
    pub fake_answer_3: String,
    pub origin_start: i64,
    pub origin_end: i64,
}

/// Positional-slot quiz shape fed to the evaluator and translator: `answer`
/// is slot 0, `fake_answer_{1,2,3}` are slots 1-3. Choice ids and
/// correctness flags are not carried; the caller reattaches them after.
/// The translator echoes `id` back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub explanation: String,
    pub answer: String,
    pub fake_answer_1: String,
    pub fake_answer_2: String,
    pub fake_answer_3: String,
}
