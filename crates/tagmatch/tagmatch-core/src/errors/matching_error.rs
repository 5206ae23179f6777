/// Matching-engine errors, contained to a single candidate.
#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("malformed candidate: {reason}")]
    MalformedCandidate { reason: String },

    #[error("candidate task failed: {reason}")]
    CandidateTaskFailed { reason: String },
}
