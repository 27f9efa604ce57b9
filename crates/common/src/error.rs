use thiserror::Error;

/// A payload value that is present but breaks its declared constraint.
///
/// This is different from an absent field: absence is tolerated everywhere,
/// while a violation means the service shipped data the display contract
/// cannot honor. Callers are expected to report it rather than guess at a
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("rating '{category}' has score {score}, expected 1-5")]
    RatingScoreOutOfRange { category: String, score: i64 },
}
