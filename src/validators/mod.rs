pub mod name;

pub use name::{validate_details, validate_name};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    NameEmpty,
    NameTooLong,
    DetailsTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameEmpty => write!(f, "Missing name"),
            Self::NameTooLong => write!(f, "Name is too long (max 200 characters)"),
            Self::DetailsTooLong => write!(f, "Details are too long (max 2000 characters)"),
        }
    }
}

impl std::error::Error for ValidationError {}
