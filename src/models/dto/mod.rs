pub mod evaluation;
pub mod quiz;
pub mod transcript;
pub mod translation;

pub use evaluation::EvaluationsWrapper;
pub use quiz::{
    AnswerPointer, Choice, EnrichmentVersionMetadata, MultipleChoiceQuestion, QuizzesWrapper,
};
pub use transcript::{Sentence, Transcript, TranscriptWrapper};
pub use translation::{TranslationInputWrapper, TranslationOutputWrapper};
