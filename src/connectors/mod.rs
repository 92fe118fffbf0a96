pub mod remote;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::domain::{
    CourseMetadata, EnrichmentMetadata, EvaluatedQuiz, GeneratedQuiz, QuizRecord,
    TranscribedSentence, TranslationBundle,
};
use crate::models::Language;
use crate::services::prompt_resolver::{
    EvaluationPromptsConfig, MetadataPromptsConfig, QuizPromptsConfig, TranslationPromptsConfig,
};

pub use remote::RemotePipeline;

/// Inputs to one metadata generation call. Model name and batch size are
/// pass-through parameters for the pipeline's context-length-aware batching.
#[derive(Clone, Debug)]
pub struct MetadataRequest {
    pub transcripts: Vec<TranscribedSentence>,
    pub disciplines: Vec<String>,
    pub media_types: Vec<String>,
    pub prompts: MetadataPromptsConfig,
    pub model_name: String,
    pub batch_size: usize,
}

#[derive(Clone, Debug)]
pub struct QuizGenerationRequest {
    pub transcripts: Vec<TranscribedSentence>,
    pub prompts: QuizPromptsConfig,
    pub model_name: String,
    pub batch_size: usize,
}

#[derive(Clone, Debug)]
pub struct EvaluationRequest {
    pub quizzes: Vec<QuizRecord>,
    pub course_metadata: CourseMetadata,
    pub language: Language,
    pub prompts: EvaluationPromptsConfig,
    pub model_name: String,
}

#[derive(Clone, Debug)]
pub struct TranslationRequest {
    pub metadata: EnrichmentMetadata,
    pub quizzes: Vec<QuizRecord>,
    pub transcripts: Vec<TranscribedSentence>,
    pub from_language: Language,
    pub to_language: Language,
    pub prompts: TranslationPromptsConfig,
    pub model_name: String,
    pub batch_size: usize,
}

/// Produces title/description/topics/discipline/media-type metadata for a
/// transcript. Prompt chains, chunking and caching are the implementation's
/// concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataGenerator: Send + Sync {
    async fn generate_metadata(&self, request: MetadataRequest) -> AppResult<EnrichmentMetadata>;
}

/// Produces multiple-choice quizzes from a transcript.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate_quizzes(
        &self,
        request: QuizGenerationRequest,
    ) -> AppResult<Vec<GeneratedQuiz>>;
}

/// Judges quiz quality against per-criterion prompts, one verdict set per
/// quiz.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizEvaluator: Send + Sync {
    async fn evaluate_quizzes(&self, request: EvaluationRequest)
        -> AppResult<Vec<EvaluatedQuiz>>;
}

/// Translates a full enrichment bundle in one atomic call. Partial
/// translation is not modeled: either the complete bundle comes back or the
/// call fails. Order preservation and id echoing are part of the contract
/// and are verified by the reconciliation step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationGenerator: Send + Sync {
    async fn translate(&self, request: TranslationRequest) -> AppResult<TranslationBundle>;
}
