//! Item categories.

use crate::error::ValidationError;
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coarse classification of a lost or found item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Laptops, phones, chargers and the like.
    Electronics,
    /// Garments.
    Clothing,
    /// Books and notebooks.
    Books,
    /// Wallets, keys, bottles and other personal belongings.
    PersonalItems,
    /// Anything else.
    Other,
}

impl ItemCategory {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Clothing,
        Self::Books,
        Self::PersonalItems,
        Self::Other,
    ];

    /// Returns the canonical code, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::PersonalItems => "PersonalItems",
            Self::Other => "Other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalItems => "Personal Items",
            other => other.as_str(),
        }
    }
}

/// Error returned while parsing an item category.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item category: {0}")]
pub struct ParseCategoryError(pub String);

impl From<ParseCategoryError> for ValidationError {
    fn from(err: ParseCategoryError) -> Self {
        Self::unknown("category", err.0)
    }
}

impl TryFrom<&str> for ItemCategory {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        vocabulary::lookup(value, &Self::ALL, Self::as_str, Self::label)
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
