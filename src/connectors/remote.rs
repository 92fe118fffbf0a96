use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    CourseMetadata, EnrichmentMetadata, EvaluatedQuiz, GeneratedQuiz, QuizRecord,
    TranscribedSentence, TranslationBundle,
};
use crate::services::prompt_resolver::{
    EvaluationPromptsConfig, MetadataPromptsConfig, QuizPromptsConfig, TranslationPromptsConfig,
};

use super::{
    EvaluationRequest, MetadataGenerator, MetadataRequest, QuizEvaluator, QuizGenerationRequest,
    QuizGenerator, TranslationGenerator, TranslationRequest,
};

/// HTTP client for the enrichment pipeline worker. Each collaborator call is
/// one JSON POST; batching, caching and retry live on the worker side, so a
/// failed call is surfaced as-is without retrying here.
pub struct RemotePipeline {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
    cache_path: String,
    openai_api_key: Option<SecretString>,
    openai_org_id: Option<String>,
    openai_cache_path: Option<String>,
}

impl RemotePipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.pipeline_api_url.trim_end_matches('/').to_string(),
            token: config.pipeline_api_token.clone(),
            cache_path: config.pipeline_cache_path.clone(),
            openai_api_key: config.openai_api_key.clone(),
            openai_org_id: config.openai_org_id.clone(),
            openai_cache_path: config.openai_cache_path.clone(),
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "pipeline worker returned {status} for {path}: {detail}"
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Serialize)]
struct MetadataGenerationPayload {
    transcripts: Vec<TranscribedSentence>,
    disciplines: Vec<String>,
    media_types: Vec<String>,
    prompts_config: MetadataPromptsConfig,
    model_name: String,
    batch_size: usize,
    cache_path: String,
}

#[derive(Serialize)]
struct QuizGenerationPayload {
    transcripts: Vec<TranscribedSentence>,
    prompts_config: QuizPromptsConfig,
    model_name: String,
    batch_size: usize,
    cache_path: String,
}

#[derive(Serialize)]
struct EvaluationPayload {
    quizzes: Vec<QuizRecord>,
    course_metadata: CourseMetadata,
    language: String,
    prompts_config: EvaluationPromptsConfig,
    model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_path: Option<String>,
}

#[derive(Serialize)]
struct TranslationPayload {
    meta_data: EnrichmentMetadata,
    quizzes: Vec<QuizRecord>,
    transcripts: Vec<TranscribedSentence>,
    from_language: String,
    to_language: String,
    prompts_config: TranslationPromptsConfig,
    model_name: String,
    batch_size: usize,
    cache_path: String,
}

#[async_trait]
impl MetadataGenerator for RemotePipeline {
    async fn generate_metadata(&self, request: MetadataRequest) -> AppResult<EnrichmentMetadata> {
        log::info!(
            "Requesting metadata generation for {} sentences",
            request.transcripts.len()
        );

        let payload = MetadataGenerationPayload {
            transcripts: request.transcripts,
            disciplines: request.disciplines,
            media_types: request.media_types,
            prompts_config: request.prompts,
            model_name: request.model_name,
            batch_size: request.batch_size,
            cache_path: self.cache_path.clone(),
        };

        self.post_json("metadata-generation", &payload).await
    }
}

#[async_trait]
impl QuizGenerator for RemotePipeline {
    async fn generate_quizzes(
        &self,
        request: QuizGenerationRequest,
    ) -> AppResult<Vec<GeneratedQuiz>> {
        log::info!(
            "Requesting quiz generation for {} sentences",
            request.transcripts.len()
        );

        let payload = QuizGenerationPayload {
            transcripts: request.transcripts,
            prompts_config: request.prompts,
            model_name: request.model_name,
            batch_size: request.batch_size,
            cache_path: self.cache_path.clone(),
        };

        self.post_json("quiz-generation", &payload).await
    }
}

#[async_trait]
impl QuizEvaluator for RemotePipeline {
    async fn evaluate_quizzes(
        &self,
        request: EvaluationRequest,
    ) -> AppResult<Vec<EvaluatedQuiz>> {
        log::info!("Requesting evaluation of {} quizzes", request.quizzes.len());

        let payload = EvaluationPayload {
            quizzes: request.quizzes,
            course_metadata: request.course_metadata,
            language: request.language.code().to_string(),
            prompts_config: request.prompts,
            model_name: request.model_name,
            api_key: self
                .openai_api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            organization: self.openai_org_id.clone(),
            cache_path: self.openai_cache_path.clone(),
        };

        self.post_json("quiz-evaluation", &payload).await
    }
}

#[async_trait]
impl TranslationGenerator for RemotePipeline {
    async fn translate(&self, request: TranslationRequest) -> AppResult<TranslationBundle> {
        log::info!(
            "Requesting translation of {} quizzes and {} sentences ({} -> {})",
            request.quizzes.len(),
            request.transcripts.len(),
            request.from_language,
            request.to_language,
        );

        let payload = TranslationPayload {
            meta_data: request.metadata,
            quizzes: request.quizzes,
            transcripts: request.transcripts,
            from_language: request.from_language.code().to_string(),
            to_language: request.to_language.code().to_string(),
            prompts_config: request.prompts,
            model_name: request.model_name,
            batch_size: request.batch_size,
            cache_path: self.cache_path.clone(),
        };

        self.post_json("translation-generation", &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let mut config = Config::test_config();
        config.pipeline_api_url = "http://worker:9000/".to_string();

        let pipeline = RemotePipeline::new(&config);
        assert_eq!(pipeline.base_url, "http://worker:9000");
    }

    #[test]
    fn evaluation_payload_omits_absent_credentials() {
        let payload = EvaluationPayload {
            quizzes: vec![],
            course_metadata: CourseMetadata {
                title: "T".to_string(),
                description: "D".to_string(),
            },
            language: "fr".to_string(),
            prompts_config: EvaluationPromptsConfig::resolve(
                &Config::test_config(),
                crate::models::Language::French,
            ),
            model_name: "gpt-4".to_string(),
            api_key: None,
            organization: None,
            cache_path: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("api_key").is_none());
        assert!(json.get("organization").is_none());
    }
}
