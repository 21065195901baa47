//! Frame extraction seam.

/// One intent label with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentScore {
    pub intent: String,
    pub score: f64,
}

/// Output of one extractor forward pass over one sentence encoding: the
/// winning intent, its confidence, and the full score distribution over the
/// extractor's intent vocabulary.
///
/// `distribution` is returned in intent-vocabulary insertion order; the
/// orchestrator applies the descending stable sort, so ties keep that
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub intent: String,
    pub score: f64,
    pub distribution: Vec<IntentScore>,
}

/// A frame/intent extractor for one domain. The domain name keys the
/// result section in the aggregated response.
pub trait FrameExtractor: Send + Sync {
    /// The domain this extractor was trained for.
    fn domain(&self) -> &str;

    /// Run the extractor forward over one sentence's token encodings.
    fn forward(&self, encodings: &[Vec<f32>]) -> FrameOutput;
}
