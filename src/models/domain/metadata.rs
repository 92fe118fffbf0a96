use serde::{Deserialize, Serialize};

/// Descriptive metadata produced by the metadata generator for one
/// enrichment. Translation only carries title, description and topics;
/// discipline and media type stay `None` on that path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// Course-level context handed to the evaluator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseMetadata {
    pub title: String,
    pub description: String,
}
