use std::sync::Arc;

use crate::config::Config;
use crate::connectors::{TranslationGenerator, TranslationRequest};
use crate::errors::{AppError, AppResult};
use crate::models::domain::{EnrichmentMetadata, QuizRecord, TranscribedSentence};
use crate::models::dto::{
    Choice, EnrichmentVersionMetadata, MultipleChoiceQuestion, Sentence, Transcript,
    TranslationInputWrapper, TranslationOutputWrapper,
};
use crate::models::Language;
use crate::services::prompt_resolver::TranslationPromptsConfig;

const SUCCESS_STATUS: &str = "OK";

/// Adapter around the translator. Translation changes text only, never
/// structure: the translated bundle is re-zipped against the original by
/// positional index, reattaching every id and correctness flag from the
/// source. Cardinality and echoed-id checks run before the re-zip so a
/// misbehaving translator fails loudly instead of producing a silently
/// misaligned quiz.
pub struct TranslationService {
    translator: Arc<dyn TranslationGenerator>,
    config: Arc<Config>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn TranslationGenerator>, config: Arc<Config>) -> Self {
        Self { translator, config }
    }

    pub async fn translate(
        &self,
        request: TranslationInputWrapper,
    ) -> AppResult<TranslationOutputWrapper> {
        let from_language = Language::from_code(&request.from_language)?;
        let to_language = Language::from_code(&request.to_language)?;

        let quizzes = request
            .multiple_choice_questions
            .iter()
            .map(|question| question.to_record())
            .collect::<AppResult<Vec<_>>>()?;

        let transcripts: Vec<TranscribedSentence> = request
            .transcript
            .sentences
            .iter()
            .map(|sentence| sentence.to_domain())
            .collect();

        log::info!(
            "Translating enrichment '{}' from {} to {} ({} quizzes, {} sentences)",
            request.enrichment_version_metadata.title,
            from_language,
            to_language,
            quizzes.len(),
            transcripts.len(),
        );

        let bundle = self
            .translator
            .translate(TranslationRequest {
                metadata: EnrichmentMetadata {
                    title: request.enrichment_version_metadata.title.clone(),
                    description: request.enrichment_version_metadata.description.clone(),
                    main_topics: request.enrichment_version_metadata.topics.clone(),
                    discipline: None,
                    media_type: None,
                },
                quizzes,
                transcripts,
                from_language,
                to_language,
                prompts: TranslationPromptsConfig::resolve(&self.config, to_language),
                model_name: self.config.model_name.clone(),
                batch_size: self.config.batch_size,
            })
            .await?;

        let multiple_choice_questions =
            reconcile_questions(&request.multiple_choice_questions, bundle.quizzes)?;
        let transcript = reconcile_transcript(&request.transcript, bundle.transcript, to_language)?;

        Ok(TranslationOutputWrapper {
            enrichment_version_metadata: EnrichmentVersionMetadata {
                title: bundle.metadata.title,
                description: bundle.metadata.description,
                topics: bundle.metadata.main_topics,
                // Not part of the translation contract.
                discipline: None,
                media_type: None,
            },
            multiple_choice_questions,
            transcript,
            task_id: None,
            failure_cause: None,
            status: Some(SUCCESS_STATUS.to_string()),
        })
    }
}

/// Re-zips translated quiz records against the original questions by index.
/// The output question keeps the original's id, answer pointer, choice ids
/// and correctness flags; only the text fields come from the translation.
fn reconcile_questions(
    originals: &[MultipleChoiceQuestion],
    translated: Vec<QuizRecord>,
) -> AppResult<Vec<MultipleChoiceQuestion>> {
    if translated.len() != originals.len() {
        return Err(AppError::StructuralMismatch(format!(
            "expected {} translated quizzes, got {}",
            originals.len(),
            translated.len()
        )));
    }

    originals
        .iter()
        .zip(translated)
        .map(|(original, record)| reconcile_question(original, record))
        .collect()
}

fn reconcile_question(
    original: &MultipleChoiceQuestion,
    record: QuizRecord,
) -> AppResult<MultipleChoiceQuestion> {
    if let (Some(original_id), Some(echoed_id)) = (original.id.as_deref(), record.id.as_deref()) {
        if original_id != echoed_id {
            return Err(AppError::StructuralMismatch(format!(
                "translated quiz id '{echoed_id}' does not match source id '{original_id}'"
            )));
        }
    }

    if original.choices.len() != 4 {
        return Err(AppError::StructuralMismatch(format!(
            "source question has {} choices, expected 4",
            original.choices.len()
        )));
    }

    let slot_texts = [
        record.answer,
        record.fake_answer_1,
        record.fake_answer_2,
        record.fake_answer_3,
    ];

    let choices = original
        .choices
        .iter()
        .zip(slot_texts)
        .map(|(choice, text)| Choice {
            id: choice.id.clone(),
            option_text: text,
            correct_answer: choice.correct_answer,
        })
        .collect();

    Ok(MultipleChoiceQuestion {
        id: original.id.clone(),
        question: record.question,
        explanation: record.explanation,
        choices,
        answer_pointer: original.answer_pointer.clone(),
    })
}

/// Rebuilds the transcript around the translated sentence texts. Timing and
/// auxiliary ASR fields come from the source sentence at the same index; the
/// denormalized full text is recomputed from the translated texts in order.
fn reconcile_transcript(
    original: &Transcript,
    translated: Vec<TranscribedSentence>,
    to_language: Language,
) -> AppResult<Transcript> {
    if translated.len() != original.sentences.len() {
        return Err(AppError::StructuralMismatch(format!(
            "expected {} translated sentences, got {}",
            original.sentences.len(),
            translated.len()
        )));
    }

    let sentences: Vec<Sentence> = original
        .sentences
        .iter()
        .zip(translated)
        .map(|(source, translated)| Sentence {
            id: source.id,
            is_transient: source.is_transient,
            no_speech_prob: source.no_speech_prob,
            no_caption_prob: source.no_caption_prob,
            start: source.start,
            end: source.end,
            text: translated.text,
        })
        .collect();

    Ok(Transcript {
        original_file_name: original.original_file_name.clone(),
        language: to_language.code().to_string(),
        text: Transcript::joined_text(&sentences),
        sentences,
    })
}
