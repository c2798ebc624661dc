//! ActivityState - Run History
//!
//! Bounded record of what the user did with the simulator. Runs carry the
//! policy package and its results so the history can be compared at a glance.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::domain::policy::{PolicyDimension, PolicyLevel, PolicySelections};
use crate::domain::simulation::SimulationResults;

/// Something the user did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// A dimension was set to a new level
    Selected {
        dimension: PolicyDimension,
        level: PolicyLevel,
    },
    /// A simulation finished
    Ran {
        run: u64,
        selections: PolicySelections,
        results: SimulationResults,
    },
    /// The whitepaper modal was opened
    Whitepaper,
}

#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub activity: Activity,
    pub timestamp: DateTime<Local>,
}

impl ActivityEntry {
    pub fn is_run(&self) -> bool {
        matches!(self.activity, Activity::Ran { .. })
    }
}

/// Ring buffer of activity entries, oldest evicted first
#[derive(Debug)]
pub struct ActivityState {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn record(&mut self, activity: Activity, timestamp: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }

        let entry = ActivityEntry {
            activity,
            timestamp,
        };

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn record_now(&mut self, activity: Activity) {
        self.record(activity, Local::now());
    }

    /// Newest entries first, at most `limit`
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Most recent simulation run still in the buffer
    pub fn last_run(&self) -> Option<&ActivityEntry> {
        self.entries.iter().rev().find(|e| e.is_run())
    }

    /// Number of runs still in the buffer
    pub fn run_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_run()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActivityState {
    fn default() -> Self {
        Self::new(crate::constants::ACTIVITY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation::{BASELINE, run_simulation};

    fn ran(run: u64, selections: PolicySelections) -> Activity {
        Activity::Ran {
            run,
            selections,
            results: run_simulation(&selections),
        }
    }

    fn selected(level: PolicyLevel) -> Activity {
        Activity::Selected {
            dimension: PolicyDimension::Ethics,
            level,
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut state = ActivityState::new(2);
        state.record_now(selected(PolicyLevel::Weak));
        state.record_now(selected(PolicyLevel::Strong));
        state.record_now(Activity::Whitepaper);

        let kept: Vec<_> = state.recent(10).map(|e| e.activity).collect();
        assert_eq!(kept, vec![Activity::Whitepaper, selected(PolicyLevel::Strong)]);
    }

    #[test]
    fn clear_empties_history() {
        let mut state = ActivityState::new(10);
        state.record_now(ran(1, PolicySelections::default()));
        state.record_now(Activity::Whitepaper);
        state.clear();
        assert!(state.is_empty());
        assert!(state.last_run().is_none());
        assert_eq!(state.run_count(), 0);
    }

    #[test]
    fn last_run_skips_other_activity() {
        let mut state = ActivityState::new(10);
        assert!(state.last_run().is_none());

        let strong = PolicySelections {
            education: PolicyLevel::Strong,
            antitrust: PolicyLevel::Strong,
            ethics: PolicyLevel::Strong,
        };
        state.record_now(ran(1, PolicySelections::default()));
        state.record_now(ran(2, strong));
        state.record_now(selected(PolicyLevel::Weak));
        state.record_now(Activity::Whitepaper);

        assert_eq!(state.run_count(), 2);
        let Some(entry) = state.last_run() else {
            panic!("expected a run");
        };
        match entry.activity {
            Activity::Ran {
                run,
                selections,
                results,
            } => {
                assert_eq!(run, 2);
                assert_eq!(selections, strong);
                assert_ne!(results, BASELINE);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_capacity_drops_everything() {
        let mut state = ActivityState::new(0);
        state.record_now(Activity::Whitepaper);
        assert!(state.is_empty());
    }
}
