//! Policy - Dimensions, Levels and the Option Catalogue
//!
//! A policy package is one level for each of the three dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Intensity of a single policy dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyLevel {
    Weak,
    #[default]
    Moderate,
    Strong,
}

impl PolicyLevel {
    /// All levels, weakest first
    pub const ALL: [PolicyLevel; 3] = [PolicyLevel::Weak, PolicyLevel::Moderate, PolicyLevel::Strong];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyLevel::Weak => "weak",
            PolicyLevel::Moderate => "moderate",
            PolicyLevel::Strong => "strong",
        }
    }

    /// Translation key of the short level name
    pub fn label_key(&self) -> &'static str {
        match self {
            PolicyLevel::Weak => "level-weak",
            PolicyLevel::Moderate => "level-moderate",
            PolicyLevel::Strong => "level-strong",
        }
    }
}

impl fmt::Display for PolicyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the independently configurable policy axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyDimension {
    Education,
    Antitrust,
    Ethics,
}

impl PolicyDimension {
    /// Dimensions in display order
    pub const ALL: [PolicyDimension; 3] = [
        PolicyDimension::Education,
        PolicyDimension::Antitrust,
        PolicyDimension::Ethics,
    ];

    /// Radio group name
    pub fn name(&self) -> &'static str {
        match self {
            PolicyDimension::Education => "education",
            PolicyDimension::Antitrust => "antitrust",
            PolicyDimension::Ethics => "ethics",
        }
    }

    /// Icon shown in the section header
    pub fn icon_name(&self) -> &'static str {
        match self {
            PolicyDimension::Education => "BookOpen",
            PolicyDimension::Antitrust => "Scale",
            PolicyDimension::Ethics => "ShieldCheck",
        }
    }

    /// Translation key of the section title
    pub fn title_key(&self) -> &'static str {
        match self {
            PolicyDimension::Education => "dim-education",
            PolicyDimension::Antitrust => "dim-antitrust",
            PolicyDimension::Ethics => "dim-ethics",
        }
    }

    /// Translation key of the compact name used in the run history
    pub fn short_key(&self) -> &'static str {
        match self {
            PolicyDimension::Education => "dim-education-short",
            PolicyDimension::Antitrust => "dim-antitrust-short",
            PolicyDimension::Ethics => "dim-ethics-short",
        }
    }
}

impl fmt::Display for PolicyDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The user's current policy package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySelections {
    pub education: PolicyLevel,
    pub antitrust: PolicyLevel,
    pub ethics: PolicyLevel,
}

impl PolicySelections {
    pub fn get(&self, dimension: PolicyDimension) -> PolicyLevel {
        match dimension {
            PolicyDimension::Education => self.education,
            PolicyDimension::Antitrust => self.antitrust,
            PolicyDimension::Ethics => self.ethics,
        }
    }

    /// Set the level of one dimension, leaving the others untouched
    pub fn set(&mut self, dimension: PolicyDimension, level: PolicyLevel) {
        let slot = match dimension {
            PolicyDimension::Education => &mut self.education,
            PolicyDimension::Antitrust => &mut self.antitrust,
            PolicyDimension::Ethics => &mut self.ethics,
        };
        *slot = level;
    }

    /// Every possible policy package (3 x 3 x 3)
    #[cfg(test)]
    pub fn all_combinations() -> impl Iterator<Item = PolicySelections> {
        PolicyLevel::ALL.into_iter().flat_map(|education| {
            PolicyLevel::ALL.into_iter().flat_map(move |antitrust| {
                PolicyLevel::ALL.into_iter().map(move |ethics| PolicySelections {
                    education,
                    antitrust,
                    ethics,
                })
            })
        })
    }
}

impl fmt::Display for PolicySelections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "education={}, antitrust={}, ethics={}",
            self.education, self.antitrust, self.ethics
        )
    }
}

/// A selectable entry in a dimension's radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyOption {
    pub id: &'static str,
    pub dimension: PolicyDimension,
    pub level: PolicyLevel,
    pub label_key: &'static str,
    pub description_key: &'static str,
}

const fn option(
    id: &'static str,
    dimension: PolicyDimension,
    level: PolicyLevel,
    label_key: &'static str,
    description_key: &'static str,
) -> PolicyOption {
    PolicyOption {
        id,
        dimension,
        level,
        label_key,
        description_key,
    }
}

const CATALOGUE: [PolicyOption; 9] = [
    option("edu-weak", PolicyDimension::Education, PolicyLevel::Weak, "edu-weak-label", "edu-weak-desc"),
    option("edu-mod", PolicyDimension::Education, PolicyLevel::Moderate, "edu-mod-label", "edu-mod-desc"),
    option("edu-strong", PolicyDimension::Education, PolicyLevel::Strong, "edu-strong-label", "edu-strong-desc"),
    option("anti-weak", PolicyDimension::Antitrust, PolicyLevel::Weak, "anti-weak-label", "anti-weak-desc"),
    option("anti-mod", PolicyDimension::Antitrust, PolicyLevel::Moderate, "anti-mod-label", "anti-mod-desc"),
    option("anti-strong", PolicyDimension::Antitrust, PolicyLevel::Strong, "anti-strong-label", "anti-strong-desc"),
    option("eth-weak", PolicyDimension::Ethics, PolicyLevel::Weak, "eth-weak-label", "eth-weak-desc"),
    option("eth-mod", PolicyDimension::Ethics, PolicyLevel::Moderate, "eth-mod-label", "eth-mod-desc"),
    option("eth-strong", PolicyDimension::Ethics, PolicyLevel::Strong, "eth-strong-label", "eth-strong-desc"),
];

impl PolicyOption {
    /// The options of one dimension, weakest first
    pub fn for_dimension(dimension: PolicyDimension) -> impl Iterator<Item = &'static PolicyOption> {
        CATALOGUE.iter().filter(move |opt| opt.dimension == dimension)
    }
}
