//! Closed category sets for each catalog.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Closed classification set shared by all items of one catalog.
///
/// Implementors are small `Copy` enums whose string ids are stable wire
/// values; `ALL` lists every variant in display order.
pub trait Category: Copy + Eq + Hash + Debug + 'static {
    /// Every variant in canonical display order.
    const ALL: &'static [Self];

    /// Stable string id used in data and filter inputs.
    fn as_str(self) -> &'static str;

    /// Parses one id; unknown values are rejected.
    fn parse(value: &str) -> Result<Self, CategoryParseError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(CategoryParseError::EmptyCategory);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| CategoryParseError::UnknownCategory(normalized.to_string()))
    }
}

/// Category parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    EmptyCategory,
    UnknownCategory(String),
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "category value must not be empty"),
            Self::UnknownCategory(value) => write!(f, "category is unknown: {value}"),
        }
    }
}

impl Error for CategoryParseError {}

/// Education entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationCategory {
    /// Academic degree.
    Degree,
    /// Exchange or residential program.
    Program,
    /// Short course or certification.
    Course,
}

impl Category for EducationCategory {
    const ALL: &'static [Self] = &[Self::Degree, Self::Program, Self::Course];

    fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Program => "program",
            Self::Course => "course",
        }
    }
}

/// Work experience kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceCategory {
    /// Project management office role.
    Pmo,
    Internship,
    /// Data and analytics role.
    Data,
}

impl Category for ExperienceCategory {
    const ALL: &'static [Self] = &[Self::Pmo, Self::Internship, Self::Data];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pmo => "pmo",
            Self::Internship => "internship",
            Self::Data => "data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryParseError, EducationCategory, ExperienceCategory};

    #[test]
    fn parses_every_declared_id() {
        for category in EducationCategory::ALL {
            assert_eq!(
                EducationCategory::parse(category.as_str()).expect("declared id parses"),
                *category
            );
        }
        for category in ExperienceCategory::ALL {
            assert_eq!(
                ExperienceCategory::parse(category.as_str()).expect("declared id parses"),
                *category
            );
        }
    }

    #[test]
    fn rejects_empty_and_unknown_ids() {
        assert_eq!(
            EducationCategory::parse("  ").unwrap_err(),
            CategoryParseError::EmptyCategory
        );
        assert_eq!(
            ExperienceCategory::parse("degree").unwrap_err(),
            CategoryParseError::UnknownCategory("degree".to_string())
        );
    }
}
