use std::sync::Arc;

use crate::config::Config;
use crate::connectors::{MetadataGenerator, MetadataRequest, QuizGenerationRequest, QuizGenerator};
use crate::errors::AppResult;
use crate::models::domain::{GeneratedQuiz, TranscribedSentence};
use crate::models::dto::{
    AnswerPointer, Choice, MultipleChoiceQuestion, QuizzesWrapper, TranscriptWrapper,
};
use crate::models::Language;
use crate::services::prompt_resolver::{MetadataPromptsConfig, QuizPromptsConfig};
use crate::services::timecode::format_time;

/// Adapter around the metadata and quiz generators: guards the language,
/// resolves prompt paths, and maps generator output into the wire schema.
pub struct GenerationService {
    metadata_generator: Arc<dyn MetadataGenerator>,
    quiz_generator: Arc<dyn QuizGenerator>,
    config: Arc<Config>,
}

impl GenerationService {
    pub fn new(
        metadata_generator: Arc<dyn MetadataGenerator>,
        quiz_generator: Arc<dyn QuizGenerator>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            metadata_generator,
            quiz_generator,
            config,
        }
    }

    pub async fn generate(&self, request: TranscriptWrapper) -> AppResult<QuizzesWrapper> {
        // Language guard runs before any generation work.
        let language = Language::from_code(&request.transcript.language)?;

        let transcripts: Vec<TranscribedSentence> = request
            .transcript
            .sentences
            .iter()
            .map(|sentence| sentence.to_domain())
            .collect();

        log::info!(
            "Generating quizzes for enrichment version {} ({} sentences, language {})",
            request.enrichment_version_id,
            transcripts.len(),
            language,
        );

        let metadata = self
            .metadata_generator
            .generate_metadata(MetadataRequest {
                transcripts: transcripts.clone(),
                disciplines: request.disciplines,
                media_types: request.media_types,
                prompts: MetadataPromptsConfig::resolve(&self.config, language),
                model_name: self.config.model_name.clone(),
                batch_size: self.config.batch_size,
            })
            .await?;

        let quizzes = self
            .quiz_generator
            .generate_quizzes(QuizGenerationRequest {
                transcripts,
                prompts: QuizPromptsConfig::resolve(&self.config, language),
                model_name: self.config.model_name.clone(),
                batch_size: self.config.batch_size,
            })
            .await?;

        let questions = quizzes.into_iter().map(format_question).collect();

        Ok(QuizzesWrapper {
            enrichment_version_metadata: metadata.into(),
            multiple_choice_questions: questions,
            task_id: None,
            failure_cause: None,
            status: None,
        })
    }
}

/// Maps one generated quiz into the four-slot wire shape: the correct answer
/// takes slot 0, distractors take slots 1-3.
fn format_question(quiz: GeneratedQuiz) -> MultipleChoiceQuestion {
    MultipleChoiceQuestion {
        id: None,
        question: quiz.question,
        explanation: quiz.explanation,
        choices: vec![
            Choice {
                id: None,
                option_text: quiz.answer,
                correct_answer: true,
            },
            Choice {
                id: None,
                option_text: quiz.fake_answer_1,
                correct_answer: false,
            },
            Choice {
                id: None,
                option_text: quiz.fake_answer_2,
                correct_answer: false,
            },
            Choice {
                id: None,
                option_text: quiz.fake_answer_3,
                correct_answer: false,
            },
        ],
        answer_pointer: Some(AnswerPointer {
            start_answer_pointer: Some(format_time(quiz.origin_start)),
            stop_answer_pointer: Some(format_time(quiz.origin_end)),
        }),
    }
}
