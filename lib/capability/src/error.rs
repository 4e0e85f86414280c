use thiserror::Error;

/// An error raised when a capability expression cannot be parsed.
///
/// Each variant carries the offending input so callers can report it without
/// keeping their own copy around. Parse failures are always local and
/// recoverable, the parser never produces a partial [Capability](crate::Capability).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityParseError {
    /// The input is not wrapped in `capability(...)`.
    #[error("the expression {0:?} is not wrapped in capability(...)")]
    MissingWrapper(String),
    /// The input has no comma separating the topic from the action letters.
    #[error("the expression {0:?} has no action letter group")]
    MissingActions(String),
    /// The topic part of the expression is not `area` or `area(subject[,scope])`.
    #[error("the topic of {0:?} is malformed")]
    MalformedTopic(String),
}

/// An error raised when a letter outside the `CRUDV` alphabet is given for a
/// [CapabilityAction](crate::CapabilityAction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0:?} is not one of the letters C, R, U, D or V")]
pub struct CapabilityActionParseError(pub(crate) char);

/// An error raised when validating a capability that grants no actions.
///
/// An empty action set is a validation failure, not a parse failure: the
/// serialized form still renders, but callers must reject it before
/// submitting the capability to a role store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("a capability must grant at least one action")]
pub struct CapabilityValidationError;
