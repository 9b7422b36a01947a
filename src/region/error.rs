use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionErrorKind {
    InvalidRequest,
    InvariantViolation,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionError {
    pub kind: RegionErrorKind,
    pub message: String,
}

impl RegionError {
    pub fn new(kind: RegionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RegionError {}

pub fn invalid_request(message: impl Into<String>) -> RegionError {
    RegionError::new(RegionErrorKind::InvalidRequest, message)
}

pub fn invariant_violation(message: impl Into<String>) -> RegionError {
    RegionError::new(RegionErrorKind::InvariantViolation, message)
}

pub fn internal_error(message: impl Into<String>) -> RegionError {
    RegionError::new(RegionErrorKind::Internal, message)
}
