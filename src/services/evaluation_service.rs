use std::sync::Arc;

use crate::config::Config;
use crate::connectors::{EvaluationRequest, QuizEvaluator};
use crate::errors::AppResult;
use crate::models::domain::CourseMetadata;
use crate::models::dto::{EvaluationsWrapper, QuizzesWrapper};
use crate::models::Language;
use crate::services::prompt_resolver::EvaluationPromptsConfig;

/// The wire carries no language for evaluation; the upstream platform only
/// evaluates French enrichments today.
const EVALUATION_LANGUAGE: Language = Language::French;

/// Adapter around the evaluator: flattens questions into the positional-slot
/// record shape and wraps the verdict list unchanged.
pub struct EvaluationService {
    evaluator: Arc<dyn QuizEvaluator>,
    config: Arc<Config>,
}

impl EvaluationService {
    pub fn new(evaluator: Arc<dyn QuizEvaluator>, config: Arc<Config>) -> Self {
        Self { evaluator, config }
    }

    pub async fn evaluate(&self, request: QuizzesWrapper) -> AppResult<EvaluationsWrapper> {
        let language = EVALUATION_LANGUAGE;

        let quizzes = request
            .multiple_choice_questions
            .iter()
            .map(|question| question.to_record())
            .collect::<AppResult<Vec<_>>>()?;

        log::info!(
            "Evaluating {} quizzes for '{}'",
            quizzes.len(),
            request.enrichment_version_metadata.title,
        );

        let evaluations = self
            .evaluator
            .evaluate_quizzes(EvaluationRequest {
                quizzes,
                course_metadata: CourseMetadata {
                    title: request.enrichment_version_metadata.title.clone(),
                    description: request.enrichment_version_metadata.description.clone(),
                },
                language,
                prompts: EvaluationPromptsConfig::resolve(&self.config, language),
                model_name: self.config.evaluation_model_name.clone(),
            })
            .await?;

        Ok(EvaluationsWrapper {
            evaluations,
            task_id: None,
            failure_cause: None,
            status: None,
        })
    }
}
