pub mod domain;
pub mod dto;
pub mod language;

pub use language::Language;
