//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so the run history and the form
//! re-render independently.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::policy::PolicySelections;
use crate::i18n::Locale;
use crate::state::{
    activity_state::ActivityState, i18n_state::I18nState, simulator_state::SimulatorState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Run history (ring buffer)
    pub activity: Entity<ActivityState>,
    /// Selections, results and whitepaper modal
    pub simulator: Entity<SimulatorState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with the start-up locale and policy package
    pub fn init(locale: Locale, initial: PolicySelections, cx: &mut App) -> Self {
        Self {
            i18n: cx.new(|_| I18nState::new(locale)),
            activity: cx.new(|_| ActivityState::default()),
            simulator: cx.new(|_| SimulatorState::new(initial)),
        }
    }
}
