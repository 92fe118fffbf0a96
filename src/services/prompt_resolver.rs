use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::Language;

const LANGUAGE_PLACEHOLDER: &str = "[language]";
const MODEL_FOLDER_PLACEHOLDER: &str = "[model_folder_name]";

/// Substitutes both placeholders in a prompt path template. Pure string
/// work; whether the resulting file exists is the generation pipeline's
/// problem, not resolved here.
pub fn resolve_prompt_path(template: &str, language: Language, model_folder: &str) -> String {
    template
        .replace(LANGUAGE_PLACEHOLDER, language.full_name())
        .replace(MODEL_FOLDER_PLACEHOLDER, model_folder)
}

/// Resolved prompt paths for the metadata generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetadataPromptsConfig {
    pub reformulation_prompt_path: String,
    pub summary_prompt_path: String,
    pub title_prompt_path: String,
    pub description_prompt_path: String,
    pub generate_topics_prompt_path: String,
    pub discipline_prompt_path: String,
    pub media_type_prompt_path: String,
    pub local_media_type_prompt_path: String,
}

impl MetadataPromptsConfig {
    pub fn resolve(config: &Config, language: Language) -> Self {
        let folder = &config.model_prompts_folder;
        let templates = &config.metadata_prompts;
        Self {
            reformulation_prompt_path: resolve_prompt_path(
                &templates.reformulation,
                language,
                folder,
            ),
            summary_prompt_path: resolve_prompt_path(&templates.summary, language, folder),
            title_prompt_path: resolve_prompt_path(&templates.title, language, folder),
            description_prompt_path: resolve_prompt_path(&templates.description, language, folder),
            generate_topics_prompt_path: resolve_prompt_path(
                &templates.generate_topics,
                language,
                folder,
            ),
            discipline_prompt_path: resolve_prompt_path(&templates.discipline, language, folder),
            media_type_prompt_path: resolve_prompt_path(&templates.media_type, language, folder),
            local_media_type_prompt_path: resolve_prompt_path(
                &templates.local_media_type,
                language,
                folder,
            ),
        }
    }
}

/// Resolved prompt paths for the quiz generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizPromptsConfig {
    pub quiz_generation_prompt_path: String,
    pub reformulation_prompt_path: String,
}

impl QuizPromptsConfig {
    pub fn resolve(config: &Config, language: Language) -> Self {
        let folder = &config.model_prompts_folder;
        Self {
            quiz_generation_prompt_path: resolve_prompt_path(
                &config.quiz_prompts.quiz_generation,
                language,
                folder,
            ),
            reformulation_prompt_path: resolve_prompt_path(
                &config.quiz_prompts.reformulation,
                language,
                folder,
            ),
        }
    }
}

/// Resolved prompt paths for the evaluator. Evaluation prompts live under
/// the evaluation model's folder, not the generation model's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPromptsConfig {
    pub is_related_prompt: String,
    pub is_self_contained_prompt: String,
    pub is_question_prompt: String,
    pub language_is_clear_prompt: String,
    pub answers_are_all_different_prompt: String,
    pub fake_answers_are_not_obvious_prompt: String,
    pub answers_are_related_prompt: String,
    pub quiz_about_concept_prompt: String,
}

impl EvaluationPromptsConfig {
    pub fn resolve(config: &Config, language: Language) -> Self {
        let folder = &config.evaluation_model_prompts_folder;
        let templates = &config.evaluation_prompts;
        Self {
            is_related_prompt: resolve_prompt_path(&templates.is_related, language, folder),
            is_self_contained_prompt: resolve_prompt_path(
                &templates.is_self_contained,
                language,
                folder,
            ),
            is_question_prompt: resolve_prompt_path(&templates.is_question, language, folder),
            language_is_clear_prompt: resolve_prompt_path(
                &templates.language_is_clear,
                language,
                folder,
            ),
            answers_are_all_different_prompt: resolve_prompt_path(
                &templates.answers_are_all_different,
                language,
                folder,
            ),
            fake_answers_are_not_obvious_prompt: resolve_prompt_path(
                &templates.fake_answers_are_not_obvious,
                language,
                folder,
            ),
            answers_are_related_prompt: resolve_prompt_path(
                &templates.answers_are_related,
                language,
                folder,
            ),
            quiz_about_concept_prompt: resolve_prompt_path(
                &templates.quiz_about_concept,
                language,
                folder,
            ),
        }
    }
}

/// Resolved prompt paths for the translator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationPromptsConfig {
    pub quiz_translation_prompt_path: String,
    pub title_translation_prompt_path: String,
    pub description_translation_prompt_path: String,
    pub topics_translation_prompt_path: String,
    pub transcript_translation_prompt_path: String,
}

impl TranslationPromptsConfig {
    pub fn resolve(config: &Config, language: Language) -> Self {
        let folder = &config.model_prompts_folder;
        let templates = &config.translation_prompts;
        Self {
            quiz_translation_prompt_path: resolve_prompt_path(&templates.quiz, language, folder),
            title_translation_prompt_path: resolve_prompt_path(&templates.title, language, folder),
            description_translation_prompt_path: resolve_prompt_path(
                &templates.description,
                language,
                folder,
            ),
            topics_translation_prompt_path: resolve_prompt_path(
                &templates.topics,
                language,
                folder,
            ),
            transcript_translation_prompt_path: resolve_prompt_path(
                &templates.transcript,
                language,
                folder,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_substitutes_both_placeholders() {
        let resolved = resolve_prompt_path(
            "prompts/[model_folder_name]/quiz_[language].txt",
            Language::French,
            "mistral-7b",
        );
        assert_eq!(resolved, "prompts/mistral-7b/quiz_french.txt");
    }

    #[test]
    fn resolved_paths_contain_no_placeholder_for_any_language() {
        let config = Config::test_config();

        for language in Language::all() {
            let metadata = MetadataPromptsConfig::resolve(&config, language);
            let quiz = QuizPromptsConfig::resolve(&config, language);
            let evaluation = EvaluationPromptsConfig::resolve(&config, language);
            let translation = TranslationPromptsConfig::resolve(&config, language);

            let all_paths = [
                metadata.reformulation_prompt_path,
                metadata.summary_prompt_path,
                metadata.title_prompt_path,
                metadata.description_prompt_path,
                metadata.generate_topics_prompt_path,
                metadata.discipline_prompt_path,
                metadata.media_type_prompt_path,
                metadata.local_media_type_prompt_path,
                quiz.quiz_generation_prompt_path,
                quiz.reformulation_prompt_path,
                evaluation.is_related_prompt,
                evaluation.is_self_contained_prompt,
                evaluation.is_question_prompt,
                evaluation.language_is_clear_prompt,
                evaluation.answers_are_all_different_prompt,
                evaluation.fake_answers_are_not_obvious_prompt,
                evaluation.answers_are_related_prompt,
                evaluation.quiz_about_concept_prompt,
                translation.quiz_translation_prompt_path,
                translation.title_translation_prompt_path,
                translation.description_translation_prompt_path,
                translation.topics_translation_prompt_path,
                translation.transcript_translation_prompt_path,
            ];

            for path in all_paths {
                assert!(!path.contains("[language]"), "unresolved: {path}");
                assert!(!path.contains("[model_folder_name]"), "unresolved: {path}");
                assert!(path.contains(language.full_name()));
            }
        }
    }

    #[test]
    fn evaluation_prompts_use_the_evaluation_model_folder() {
        let config = Config::test_config();
        let evaluation = EvaluationPromptsConfig::resolve(&config, Language::English);

        assert!(evaluation
            .is_related_prompt
            .contains(&config.evaluation_model_prompts_folder));
    }
}
