//! SimulatorState - Policy Selections, Results and Whitepaper Modal

use gpui::{Context, SharedString};

use crate::domain::chart::{ChartEntry, chart_entries};
use crate::domain::policy::{PolicyDimension, PolicyLevel, PolicySelections};
use crate::domain::simulation::{BASELINE, SimulationResults, run_simulation};
use crate::domain::whitepaper::WHITEPAPER_PLACEHOLDER;

/// State of the simulator form
#[derive(Debug, Clone)]
pub struct SimulatorState {
    selections: PolicySelections,
    results: SimulationResults,
    whitepaper: Option<SharedString>,
    runs: u64,
}

impl SimulatorState {
    pub fn new(selections: PolicySelections) -> Self {
        Self {
            selections,
            results: BASELINE,
            whitepaper: None,
            runs: 0,
        }
    }

    // ==================== Getters ====================

    pub fn selections(&self) -> &PolicySelections {
        &self.selections
    }

    /// Whitepaper text while the modal is open
    pub fn whitepaper(&self) -> Option<&SharedString> {
        self.whitepaper.as_ref()
    }

    /// Number of completed simulation runs
    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn chart_entries(&self) -> [ChartEntry; 3] {
        chart_entries(&self.results)
    }

    // ==================== Setters ====================

    /// Select a level for one dimension; returns whether the selection changed
    pub fn select(&mut self, dimension: PolicyDimension, level: PolicyLevel) -> bool {
        if self.selections.get(dimension) == level {
            return false;
        }
        self.selections.set(dimension, level);
        true
    }

    /// Simulate the current selections and display the outcome
    pub fn run(&mut self) -> SimulationResults {
        self.results = run_simulation(&self.selections);
        self.runs += 1;
        self.results
    }

    pub fn open_whitepaper(&mut self) {
        self.whitepaper = Some(SharedString::from(WHITEPAPER_PLACEHOLDER));
    }

    /// Close the modal; returns whether it was open
    pub fn close_whitepaper(&mut self) -> bool {
        self.whitepaper.take().is_some()
    }

    // ==================== Notifying wrappers ====================

    pub fn select_and_notify(
        &mut self,
        dimension: PolicyDimension,
        level: PolicyLevel,
        cx: &mut Context<Self>,
    ) -> bool {
        let changed = self.select(dimension, level);
        if changed {
            cx.notify();
        }
        changed
    }

    pub fn run_and_notify(&mut self, cx: &mut Context<Self>) -> SimulationResults {
        let results = self.run();
        cx.notify();
        results
    }

    pub fn open_whitepaper_and_notify(&mut self, cx: &mut Context<Self>) {
        self.open_whitepaper();
        cx.notify();
    }

    pub fn close_whitepaper_and_notify(&mut self, cx: &mut Context<Self>) -> bool {
        let closed = self.close_whitepaper();
        if closed {
            cx.notify();
        }
        closed
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new(PolicySelections::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::Metric;

    #[test]
    fn starts_at_baseline() {
        let state = SimulatorState::default();
        assert_eq!(state.results, BASELINE);
        assert_eq!(state.runs(), 0);
        assert!(state.whitepaper().is_none());
    }

    #[test]
    fn select_updates_only_one_field() {
        let mut state = SimulatorState::default();
        assert!(state.select(PolicyDimension::Antitrust, PolicyLevel::Strong));

        let selections = state.selections();
        assert_eq!(selections.antitrust, PolicyLevel::Strong);
        assert_eq!(selections.education, PolicyLevel::Moderate);
        assert_eq!(selections.ethics, PolicyLevel::Moderate);

        // Re-selecting the same option is a no-op
        assert!(!state.select(PolicyDimension::Antitrust, PolicyLevel::Strong));
    }

    #[test]
    fn selecting_does_not_rerun() {
        let mut state = SimulatorState::default();
        state.select(PolicyDimension::Ethics, PolicyLevel::Strong);
        assert_eq!(state.results, BASELINE);
    }

    #[test]
    fn run_displays_model_output() {
        for selections in PolicySelections::all_combinations() {
            let mut state = SimulatorState::default();
            for dim in PolicyDimension::ALL {
                state.select(dim, selections.get(dim));
            }

            let returned = state.run();
            let expected = run_simulation(&selections);
            assert_eq!(returned, expected);
            assert_eq!(state.results, expected);

            let entries = state.chart_entries();
            assert_eq!(entries.len(), 3);
            for (entry, metric) in entries.iter().zip(Metric::ALL) {
                assert_eq!(entry.value, metric.value(&expected));
                assert_eq!(entry.baseline, metric.value(&BASELINE));
            }
        }
    }

    #[test]
    fn run_replaces_previous_results() {
        let mut state = SimulatorState::default();
        state.select(PolicyDimension::Education, PolicyLevel::Strong);
        let first = state.run();
        state.select(PolicyDimension::Education, PolicyLevel::Weak);
        let second = state.run();

        assert_ne!(first, second);
        assert_eq!(state.results, second);
        assert_eq!(state.runs(), 2);
    }

    #[test]
    fn whitepaper_modal_lifecycle() {
        let mut state = SimulatorState::default();
        assert!(!state.close_whitepaper());

        state.open_whitepaper();
        assert_eq!(
            state.whitepaper().map(|s| s.to_string()),
            Some(WHITEPAPER_PLACEHOLDER.to_string())
        );

        assert!(state.close_whitepaper());
        assert!(state.whitepaper().is_none());
    }
}
