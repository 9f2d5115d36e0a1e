//! Error types for bracket generation

use std::fmt;

use thiserror::Error;

use crate::types::CompetitorId;

/// A single problem found while validating a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("at least {min} competitors are required, got {count}")]
    TooFewCompetitors { count: usize, min: usize },

    #[error("at most {max} competitors are allowed, got {count}")]
    TooManyCompetitors { count: usize, max: usize },

    #[error("competitor id {0} appears more than once")]
    DuplicateCompetitorId(CompetitorId),

    #[error("unknown seeding method {0:?} (expected \"sequential\" or \"random\")")]
    InvalidSeedingMethod(String),

    #[error("best-of {0} is not allowed")]
    InvalidBestOf(u32),
}

/// Every issue found in one request, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bracket request: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationIssue> for ValidationErrors {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

/// Top-level error for the bracket pipeline
#[derive(Debug, Error)]
pub enum BracketError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid generator config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<ValidationIssue> for BracketError {
    fn from(issue: ValidationIssue) -> Self {
        BracketError::Validation(issue.into())
    }
}

impl BracketError {
    /// Validation issues carried by this error, if any.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            BracketError::Validation(errors) => errors.issues(),
            _ => &[],
        }
    }
}
