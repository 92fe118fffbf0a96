pub mod evaluation;
pub mod metadata;
pub mod quiz;
pub mod transcript;
pub mod translation;

pub use evaluation::EvaluatedQuiz;
pub use metadata::{CourseMetadata, EnrichmentMetadata};
pub use quiz::{GeneratedQuiz, QuizRecord};
pub use transcript::TranscribedSentence;
pub use translation::TranslationBundle;
