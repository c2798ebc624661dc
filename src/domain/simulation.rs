//! Simulation - Policy Package to Outcome Mapping
//!
//! An additive effect model over the three policy dimensions. Effects are kept
//! in integer tenths so every outcome is an exact, reproducible decimal.

use serde::{Deserialize, Serialize};

use crate::domain::policy::{PolicyDimension, PolicyLevel, PolicySelections};

/// Outcome metrics of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// GDP growth, percent per year
    pub gdp: f64,
    /// Inequality index, 0-10 scale
    pub inequality: f64,
    /// Greenhouse-gas emission growth, percent per year
    pub energy: f64,
}

/// Reference outcome every run is compared against
pub const BASELINE: SimulationResults = SimulationResults {
    gdp: 2.5,
    inequality: 4.0,
    energy: 1.8,
};

/// Effect of a single choice, in tenths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Delta {
    gdp: i32,
    inequality: i32,
    energy: i32,
}

impl Delta {
    const ZERO: Delta = Delta::new(0, 0, 0);

    const fn new(gdp: i32, inequality: i32, energy: i32) -> Self {
        Self {
            gdp,
            inequality,
            energy,
        }
    }

    fn add(self, other: Delta) -> Self {
        Self {
            gdp: self.gdp + other.gdp,
            inequality: self.inequality + other.inequality,
            energy: self.energy + other.energy,
        }
    }
}

/// Pairing strong reskilling with green mandates moves workers into clean industry
const GREEN_SKILLS_DIVIDEND: Delta = Delta::new(2, 0, -3);

fn effect(dimension: PolicyDimension, level: PolicyLevel) -> Delta {
    use PolicyDimension::*;
    use PolicyLevel::*;

    match (dimension, level) {
        (_, Moderate) => Delta::ZERO,
        (Education, Weak) => Delta::new(-3, 6, 0),
        (Education, Strong) => Delta::new(6, -8, 1),
        (Antitrust, Weak) => Delta::new(2, 9, 2),
        (Antitrust, Strong) => Delta::new(-2, -7, -1),
        (Ethics, Weak) => Delta::new(3, 2, 9),
        (Ethics, Strong) => Delta::new(-4, -3, -16),
    }
}

fn to_tenths(value: f64) -> i32 {
    (value * 10.0).round() as i32
}

fn from_tenths(tenths: i32) -> f64 {
    f64::from(tenths) / 10.0
}

/// Run the policy model for a package of selections
pub fn run_simulation(selections: &PolicySelections) -> SimulationResults {
    let mut total = PolicyDimension::ALL
        .into_iter()
        .map(|dim| effect(dim, selections.get(dim)))
        .fold(Delta::ZERO, Delta::add);

    if selections.education == PolicyLevel::Strong && selections.ethics == PolicyLevel::Strong {
        total = total.add(GREEN_SKILLS_DIVIDEND);
    }

    let inequality = (to_tenths(BASELINE.inequality) + total.inequality).max(0);

    SimulationResults {
        gdp: from_tenths(to_tenths(BASELINE.gdp) + total.gdp),
        inequality: from_tenths(inequality),
        energy: from_tenths(to_tenths(BASELINE.energy) + total.energy),
    }
}

/// One of the three outcome metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Gdp,
    Inequality,
    Energy,
}

impl Metric {
    /// Metrics in chart order
    pub const ALL: [Metric; 3] = [Metric::Gdp, Metric::Inequality, Metric::Energy];

    pub fn value(&self, results: &SimulationResults) -> f64 {
        match self {
            Metric::Gdp => results.gdp,
            Metric::Inequality => results.inequality,
            Metric::Energy => results.energy,
        }
    }

    /// Short label used on the chart axis
    pub fn label_key(&self) -> &'static str {
        match self {
            Metric::Gdp => "metric-gdp",
            Metric::Inequality => "metric-inequality",
            Metric::Energy => "metric-energy",
        }
    }

    /// Longer label used on the metric cards
    pub fn card_label_key(&self) -> &'static str {
        match self {
            Metric::Gdp => "metric-gdp",
            Metric::Inequality => "metric-inequality-index",
            Metric::Energy => "metric-energy",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Gdp | Metric::Energy => "%",
            Metric::Inequality => "",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Metric::Gdp => "TrendingUp",
            Metric::Inequality => "Users",
            Metric::Energy => "Zap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenths(value: f64) -> f64 {
        (value * 10.0).round()
    }

    #[test]
    fn moderate_package_matches_baseline() {
        assert_eq!(run_simulation(&PolicySelections::default()), BASELINE);
    }

    #[test]
    fn every_combination_is_deterministic() {
        for selections in PolicySelections::all_combinations() {
            let first = run_simulation(&selections);
            let second = run_simulation(&selections);
            assert_eq!(first, second, "{selections}");
            for metric in Metric::ALL {
                let value = metric.value(&first);
                assert!(value.is_finite());
                assert!((value * 10.0 - tenths(value)).abs() < 1e-9, "{selections} {metric:?}");
            }
            assert!(first.inequality >= 0.0);
        }
    }

    #[test]
    fn known_outcomes() {
        let strong = PolicySelections {
            education: PolicyLevel::Strong,
            antitrust: PolicyLevel::Strong,
            ethics: PolicyLevel::Strong,
        };
        let result = run_simulation(&strong);
        assert_eq!(result.gdp, 2.7);
        assert_eq!(result.inequality, 2.2);
        assert_eq!(result.energy, -0.1);

        let weak = PolicySelections {
            education: PolicyLevel::Weak,
            antitrust: PolicyLevel::Weak,
            ethics: PolicyLevel::Weak,
        };
        let result = run_simulation(&weak);
        assert_eq!(result.gdp, 2.7);
        assert_eq!(result.inequality, 5.7);
        assert_eq!(result.energy, 2.9);
    }

    fn with(
        mut selections: PolicySelections,
        dimension: PolicyDimension,
        level: PolicyLevel,
    ) -> PolicySelections {
        selections.set(dimension, level);
        selections
    }

    #[test]
    fn green_dividend_only_with_both_strong() {
        let base = PolicySelections::default();
        let edu = run_simulation(&with(base, PolicyDimension::Education, PolicyLevel::Strong));
        let eth = run_simulation(&with(base, PolicyDimension::Ethics, PolicyLevel::Strong));
        let both = run_simulation(&with(
            with(base, PolicyDimension::Education, PolicyLevel::Strong),
            PolicyDimension::Ethics,
            PolicyLevel::Strong,
        ));

        // 2.5 + 0.6 - 0.4 + 0.2
        assert_eq!(both.gdp, 2.9);
        assert!(both.gdp > edu.gdp + eth.gdp - BASELINE.gdp);
        assert!(both.energy < edu.energy + eth.energy - BASELINE.energy);
    }

    #[test]
    fn stronger_ethics_never_raises_emissions() {
        for selections in PolicySelections::all_combinations() {
            let weak = run_simulation(&with(selections, PolicyDimension::Ethics, PolicyLevel::Weak));
            let strong = run_simulation(&with(selections, PolicyDimension::Ethics, PolicyLevel::Strong));
            assert!(strong.energy < weak.energy, "{selections}");
        }
    }

    #[test]
    fn metric_accessors() {
        let results = SimulationResults {
            gdp: 1.0,
            inequality: 2.0,
            energy: 3.0,
        };
        let values: Vec<_> = Metric::ALL.iter().map(|m| m.value(&results)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(Metric::Gdp.unit(), "%");
        assert_eq!(Metric::Inequality.unit(), "");
    }
}
