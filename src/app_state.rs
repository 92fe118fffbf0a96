use std::sync::Arc;

use crate::{
    config::Config,
    connectors::{
        MetadataGenerator, QuizEvaluator, QuizGenerator, RemotePipeline, TranslationGenerator,
    },
    services::{EvaluationService, GenerationService, TranslationService},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub translation_service: Arc<TranslationService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the services against the remote enrichment pipeline worker.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let pipeline = Arc::new(RemotePipeline::new(&config));

        Self::with_connectors(
            config,
            pipeline.clone(),
            pipeline.clone(),
            pipeline.clone(),
            pipeline,
        )
    }

    /// Wires the services against arbitrary collaborator implementations;
    /// tests use this to substitute stubs.
    pub fn with_connectors(
        config: Arc<Config>,
        metadata_generator: Arc<dyn MetadataGenerator>,
        quiz_generator: Arc<dyn QuizGenerator>,
        evaluator: Arc<dyn QuizEvaluator>,
        translator: Arc<dyn TranslationGenerator>,
    ) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new(
                metadata_generator,
                quiz_generator,
                config.clone(),
            )),
            evaluation_service: Arc::new(EvaluationService::new(evaluator, config.clone())),
            translation_service: Arc::new(TranslationService::new(translator, config.clone())),
            config,
        }
    }
}
