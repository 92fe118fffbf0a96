use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

/// Process-wide configuration, read once from the environment at startup and
/// shared read-only between requests.
#[derive(Clone, Debug)]
pub struct Config {
    pub model_name: String,
    pub model_prompts_folder: String,
    pub evaluation_model_name: String,
    pub evaluation_model_prompts_folder: String,
    pub pipeline_api_url: String,
    pub pipeline_api_token: SecretString,
    pub pipeline_cache_path: String,
    pub openai_api_key: Option<SecretString>,
    pub openai_org_id: Option<String>,
    pub openai_cache_path: Option<String>,
    pub batch_size: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub metadata_prompts: MetadataPromptTemplates,
    pub quiz_prompts: QuizPromptTemplates,
    pub evaluation_prompts: EvaluationPromptTemplates,
    pub translation_prompts: TranslationPromptTemplates,
}

/// Prompt path templates carry `[language]` and `[model_folder_name]`
/// placeholders, substituted per request by the prompt resolver.
#[derive(Clone, Debug)]
pub struct MetadataPromptTemplates {
    pub reformulation: String,
    pub summary: String,
    pub title: String,
    pub description: String,
    pub generate_topics: String,
    pub discipline: String,
    pub media_type: String,
    pub local_media_type: String,
}

#[derive(Clone, Debug)]
pub struct QuizPromptTemplates {
    pub quiz_generation: String,
    pub reformulation: String,
}

#[derive(Clone, Debug)]
pub struct EvaluationPromptTemplates {
    pub is_related: String,
    pub is_self_contained: String,
    pub is_question: String,
    pub language_is_clear: String,
    pub answers_are_all_different: String,
    pub fake_answers_are_not_obvious: String,
    pub answers_are_related: String,
    pub quiz_about_concept: String,
}

#[derive(Clone, Debug)]
pub struct TranslationPromptTemplates {
    pub quiz: String,
    pub title: String,
    pub description: String,
    pub topics: String,
    pub transcript: String,
}

fn required(name: &str) -> AppResult<String> {
    env::var(name)
        .map_err(|_| AppError::ConfigError(format!("missing required environment variable {name}")))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok()
}

impl Config {
    /// Reads the full configuration from the environment. Any missing
    /// required variable fails here, before the server starts listening.
    pub fn from_env() -> AppResult<Self> {
        let batch_size = required("BATCH_SIZE")?
            .parse::<usize>()
            .map_err(|e| AppError::ConfigError(format!("BATCH_SIZE is not an integer: {e}")))?;

        Ok(Self {
            model_name: required("MODEL_NAME")?,
            model_prompts_folder: required("MODEL_PROMPTS_FOLDER")?,
            evaluation_model_name: required("EVALUATION_MODEL_NAME")?,
            evaluation_model_prompts_folder: required("EVALUATION_MODEL_PROMPTS_FOLDER")?,
            pipeline_api_url: required("VLLM_API_URL")?,
            pipeline_api_token: SecretString::from(required("VLLM_TOKEN")?),
            pipeline_cache_path: required("VLLM_CACHE_PATH")?,
            openai_api_key: optional("OPENAI_API_KEY").map(SecretString::from),
            openai_org_id: optional("OPENAI_ORG_ID"),
            openai_cache_path: optional("OPEN_AI_CACHE_PATH"),
            batch_size,
            web_server_host: optional("WEB_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: optional("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            metadata_prompts: MetadataPromptTemplates {
                reformulation: required("REFORMULATION_PROMPT_PATH")?,
                summary: required("SUMMARY_PROMPT_PATH")?,
                title: required("TITLE_PROMPT_PATH")?,
                description: required("DESCRIPTION_PROMPT_PATH")?,
                generate_topics: required("GENERATE_TOPICS_PROMPT_PATH")?,
                discipline: required("DISCIPLINE_PROMPT_PATH")?,
                media_type: required("MEDIA_TYPE_PROMPT_PATH")?,
                local_media_type: required("LOCAL_MEDIA_TYPE_PROMPT_PATH")?,
            },
            quiz_prompts: QuizPromptTemplates {
                quiz_generation: required("QUIZ_GENERATION_PROMPT_PATH")?,
                reformulation: required("REFORMULATION_PROMPT_PATH")?,
            },
            evaluation_prompts: EvaluationPromptTemplates {
                is_related: required("IS_RELATED_PROMPT_PATH")?,
                is_self_contained: required("IS_SELF_CONTAINED_PROMPT_PATH")?,
                is_question: required("IS_QUESTION_PROMPT_PATH")?,
                language_is_clear: required("LANGUAGE_IS_CLEAR_PROMPT_PATH")?,
                answers_are_all_different: required("ANSWERS_ARE_ALL_DIFFERENT_PROMPT_PATH")?,
                fake_answers_are_not_obvious: required("FAKE_ANSWERS_ARE_NOT_OBVIOUS_PROMPT_PATH")?,
                answers_are_related: required("ANSWERS_ARE_RELATED_PROMPT_PATH")?,
                quiz_about_concept: required("QUIZ_ABOUT_CONCEPT_PROMPT_PATH")?,
            },
            translation_prompts: TranslationPromptTemplates {
                quiz: required("QUIZ_TRANSLATION_PROMPT_PATH")?,
                title: required("TITLE_TRANSLATION_PROMPT_PATH")?,
                description: required("DESCRIPTION_TRANSLATION_PROMPT_PATH")?,
                topics: required("TOPICS_TRANSLATION_PROMPT_PATH")?,
                transcript: required("TRANSCRIPT_TRANSLATION_PROMPT_PATH")?,
            },
        })
    }

    pub fn test_config() -> Self {
        Self {
            model_name: "test-model".to_string(),
            model_prompts_folder: "test-model-folder".to_string(),
            evaluation_model_name: "test-evaluation-model".to_string(),
            evaluation_model_prompts_folder: "test-evaluation-folder".to_string(),
            pipeline_api_url: "http://localhost:9000".to_string(),
            pipeline_api_token: SecretString::from("test-token".to_string()),
            pipeline_cache_path: "/tmp/pipeline-cache".to_string(),
            openai_api_key: None,
            openai_org_id: None,
            openai_cache_path: None,
            batch_size: 32,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            metadata_prompts: MetadataPromptTemplates {
                reformulation: "prompts/[model_folder_name]/reformulation_[language].txt"
                    .to_string(),
                summary: "prompts/[model_folder_name]/summary_[language].txt".to_string(),
                title: "prompts/[model_folder_name]/title_[language].txt".to_string(),
                description: "prompts/[model_folder_name]/description_[language].txt".to_string(),
                generate_topics: "prompts/[model_folder_name]/topics_[language].txt".to_string(),
                discipline: "prompts/[model_folder_name]/discipline_[language].txt".to_string(),
                media_type: "prompts/[model_folder_name]/media_type_[language].txt".to_string(),
                local_media_type: "prompts/[model_folder_name]/local_media_type_[language].txt"
                    .to_string(),
            },
            quiz_prompts: QuizPromptTemplates {
                quiz_generation: "prompts/[model_folder_name]/quiz_[language].txt".to_string(),
                reformulation: "prompts/[model_folder_name]/reformulation_[language].txt"
                    .to_string(),
            },
            evaluation_prompts: EvaluationPromptTemplates {
                is_related: "prompts/[model_folder_name]/is_related_[language].txt".to_string(),
                is_self_contained: "prompts/[model_folder_name]/is_self_contained_[language].txt"
                    .to_string(),
                is_question: "prompts/[model_folder_name]/is_question_[language].txt".to_string(),
                language_is_clear: "prompts/[model_folder_name]/language_is_clear_[language].txt"
                    .to_string(),
                answers_are_all_different:
                    "prompts/[model_folder_name]/answers_are_all_different_[language].txt"
                        .to_string(),
                fake_answers_are_not_obvious:
                    "prompts/[model_folder_name]/fake_answers_are_not_obvious_[language].txt"
                        .to_string(),
                answers_are_related:
                    "prompts/[model_folder_name]/answers_are_related_[language].txt".to_string(),
                quiz_about_concept: "prompts/[model_folder_name]/quiz_about_concept_[language].txt"
                    .to_string(),
            },
            translation_prompts: TranslationPromptTemplates {
                quiz: "prompts/[model_folder_name]/quiz_translation_[language].txt".to_string(),
                title: "prompts/[model_folder_name]/title_translation_[language].txt".to_string(),
                description: "prompts/[model_folder_name]/description_translation_[language].txt"
                    .to_string(),
                topics: "prompts/[model_folder_name]/topics_translation_[language].txt"
                    .to_string(),
                transcript: "prompts/[model_folder_name]/transcript_translation_[language].txt"
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_fails_on_missing_required_variable() {
        // MODEL_NAME is read first, so a clean environment trips it.
        env::remove_var("MODEL_NAME");

        let result = Config::from_env();
        match result {
            Err(AppError::ConfigError(message)) => {
                assert!(message.contains("MODEL_NAME"));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.model_name, "test-model");
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.web_server_port, 8080);
        assert!(config.openai_api_key.is_none());
        assert!(config
            .translation_prompts
            .transcript
            .contains("[model_folder_name]"));
    }
}
