//! Skill and project records shown outside the filtered catalogs.

use serde::{Deserialize, Serialize};

/// Self-assessed proficiency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Entry,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Fill ratio of the proficiency bar.
    pub fn fraction(self) -> f32 {
        match self {
            Self::Entry => 1.0 / 3.0,
            Self::Intermediate => 2.0 / 3.0,
            Self::Advanced => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            icon: icon.into(),
        }
    }
}

/// Side project with a public link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Site-relative icon path.
    pub image: String,
    /// Free technology labels; used as tags by project filtering.
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Project {
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|candidate| candidate == technology)
    }
}

#[cfg(test)]
mod tests {
    use super::SkillLevel;

    #[test]
    fn fractions_grow_with_level() {
        assert!(SkillLevel::Entry.fraction() < SkillLevel::Intermediate.fraction());
        assert!(SkillLevel::Intermediate.fraction() < SkillLevel::Advanced.fraction());
        assert_eq!(SkillLevel::Advanced.fraction(), 1.0);
    }
}
