use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("node set is empty")]
    EmptyNodeSet,
    #[error("duplicate node label: {0}")]
    DuplicateLabel(String),
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("node {0} has zero weight")]
    ZeroWeight(String),
    #[error("node {0} weight exceeds {}", crate::MAX_WEIGHT)]
    WeightTooLarge(String),
}

pub type Result<T> = std::result::Result<T, Error>;
