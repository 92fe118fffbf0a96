pub mod evaluation_service;
pub mod generation_service;
pub mod prompt_resolver;
pub mod timecode;
pub mod translation_service;

pub use evaluation_service::EvaluationService;
pub use generation_service::GenerationService;
pub use translation_service::TranslationService;
