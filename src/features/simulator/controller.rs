//! Simulator Controller
//!
//! Applies user actions to the simulator state and records them in the run history.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::policy::{PolicyDimension, PolicyLevel};
use crate::domain::simulation::SimulationResults;
use crate::state::activity_state::Activity;

/// Simulator page controller
#[derive(Clone)]
pub struct SimulatorController {
    entities: AppEntities,
}

impl SimulatorController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn record(&self, activity: Activity, cx: &mut App) {
        self.entities.activity.update(cx, |history, cx| {
            history.record_now(activity);
            cx.notify();
        });
    }

    /// Select a level for one policy dimension
    pub fn select_policy(&self, dimension: PolicyDimension, level: PolicyLevel, cx: &mut App) {
        let changed = self
            .entities
            .simulator
            .update(cx, |state, cx| state.select_and_notify(dimension, level, cx));

        if changed {
            tracing::debug!(%dimension, %level, "Policy selection changed");
            self.record(Activity::Selected { dimension, level }, cx);
        }
    }

    /// Run the simulation for the current selections
    pub fn run_simulation(&self, cx: &mut App) -> SimulationResults {
        let (selections, results, runs) = self.entities.simulator.update(cx, |state, cx| {
            let results = state.run_and_notify(cx);
            (*state.selections(), results, state.runs())
        });

        tracing::info!(
            %selections,
            gdp = results.gdp,
            inequality = results.inequality,
            energy = results.energy,
            runs,
            "Simulation run"
        );
        self.record(
            Activity::Ran {
                run: runs,
                selections,
                results,
            },
            cx,
        );

        results
    }

    /// Show the whitepaper modal
    pub fn generate_whitepaper(&self, cx: &mut App) {
        self.entities
            .simulator
            .update(cx, |state, cx| state.open_whitepaper_and_notify(cx));

        tracing::info!("Whitepaper opened");
        self.record(Activity::Whitepaper, cx);
    }

    /// Dismiss the whitepaper modal if it is open
    pub fn close_whitepaper(&self, cx: &mut App) {
        let closed = self
            .entities
            .simulator
            .update(cx, |state, cx| state.close_whitepaper_and_notify(cx));

        if closed {
            tracing::debug!("Whitepaper closed");
        }
    }
}
