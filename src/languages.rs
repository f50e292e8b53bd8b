use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel origin meaning the service should infer the source language.
pub const AUTO_DETECT: &str = "Automatic Detection";

/// Languages offered as origins. The first entry is the auto-detection
/// sentinel; destinations are drawn from the rest.
pub const LANGUAGES: [&str; 12] = [
    AUTO_DETECT,
    "Italian",
    "English",
    "Spanish",
    "French",
    "German",
    "Chinese",
    "Japanese",
    "Dutch",
    "Russian",
    "Portuguese",
    "Swedish",
];

pub fn origin_catalog() -> &'static [&'static str] {
    &LANGUAGES
}

/// The destination list never contains the auto-detection sentinel, so a
/// destination is always a concrete language.
pub fn destination_catalog() -> &'static [&'static str] {
    &LANGUAGES[1..]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{AUTO_DETECT} is not a valid destination language")]
    SentinelDestination,

    /// Swapping an auto-detected origin is undefined: no concrete
    /// language is known to move into the destination slot.
    #[error("Cannot swap languages while the origin is {AUTO_DETECT}.")]
    SwapUndefined,
}

/// The session's language choices. Mutations go through the `with_*`
/// and `swapped` constructors, which return a new selection and leave
/// the current one untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSelection {
    pub origin: String,
    pub destination: String,
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self {
            origin: AUTO_DETECT.to_string(),
            destination: destination_catalog()[1].to_string(),
        }
    }
}

impl LanguageSelection {
    pub fn with_origin(&self, name: &str) -> Result<Self, SelectionError> {
        if !origin_catalog().contains(&name) {
            return Err(SelectionError::UnknownLanguage(name.to_string()));
        }
        Ok(Self {
            origin: name.to_string(),
            destination: self.destination.clone(),
        })
    }

    pub fn with_destination(&self, name: &str) -> Result<Self, SelectionError> {
        if name == AUTO_DETECT {
            return Err(SelectionError::SentinelDestination);
        }
        if !destination_catalog().contains(&name) {
            return Err(SelectionError::UnknownLanguage(name.to_string()));
        }
        Ok(Self {
            origin: self.origin.clone(),
            destination: name.to_string(),
        })
    }

    /// Exchanges origin and destination, both-or-neither. Rejected when
    /// the origin is the auto-detection sentinel.
    pub fn swapped(&self) -> Result<Self, SelectionError> {
        if self.origin == AUTO_DETECT {
            return Err(SelectionError::SwapUndefined);
        }
        Ok(Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        })
    }
}
