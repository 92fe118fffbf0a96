pub mod enrichment_handler;

pub use enrichment_handler::{
    evaluate_quizzes, generate_quizzes, health, root, translate_enrichment,
};
