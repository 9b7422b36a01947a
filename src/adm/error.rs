use std::fmt;

use crate::region::RegionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmErrorKind {
    InvalidConfig,
    DomainExhausted,
    UtilityComputation,
    Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmError {
    pub kind: AdmErrorKind,
    pub message: String,
}

impl AdmError {
    pub fn new(kind: AdmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AdmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AdmError {}

impl From<RegionError> for AdmError {
    fn from(err: RegionError) -> Self {
        AdmError::new(AdmErrorKind::Region, err.message)
    }
}

pub fn invalid_config(message: impl Into<String>) -> AdmError {
    AdmError::new(AdmErrorKind::InvalidConfig, message)
}

pub fn domain_exhausted(message: impl Into<String>) -> AdmError {
    AdmError::new(AdmErrorKind::DomainExhausted, message)
}

pub fn utility_computation(message: impl Into<String>) -> AdmError {
    AdmError::new(AdmErrorKind::UtilityComputation, message)
}
