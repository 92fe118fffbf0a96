use serde::{Deserialize, Serialize};

use super::{EnrichmentMetadata, QuizRecord, TranscribedSentence};

/// Complete output of one translation call. The translator contract is
/// atomic and order-preserving: quizzes and sentences come back in input
/// order with input cardinality, quiz ids echoed. The reconciliation step
/// verifies this instead of trusting it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationBundle {
    pub metadata: EnrichmentMetadata,
    pub quizzes: Vec<QuizRecord>,
    pub transcript: Vec<TranscribedSentence>,
}
