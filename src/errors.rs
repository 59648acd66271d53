use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FcmError {
    #[error("Request has no target: provide a device token, a token list or a topic")]
    NoTarget,

    #[error("At least one topic must be provided")]
    NoTopicProvided,

    #[error("Invalid topic name: {0:?}")]
    InvalidTopicName(String),

    #[error("Topic expression must start with a topic, not an operator")]
    MisplacedOperator,

    #[error("Topics must be joined with an operator")]
    MissingOperator,

    #[error("Topic group must contain at least one topic")]
    EmptyTopicGroup,

    #[error("Topic condition references {0} topics (maximum 5)")]
    TooManyTopics(usize),

    #[error("Time to live must be between 0 and 2419200 seconds, got {0}")]
    InvalidTimeToLive(u64),
}
