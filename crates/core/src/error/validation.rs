use thiserror::Error;

/// Raised by endpoint methods before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{argument} is required")]
    ArgumentRequired { argument: &'static str },
}

impl ValidationError {
    pub fn argument_required(argument: &'static str) -> Self {
        Self::ArgumentRequired { argument }
    }
}
