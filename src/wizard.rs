//! Step-state transitions for the tax wizard.
//!
//! The wizard walks five steps: income, family deductions, insurance
//! deductions, fund deductions, and the summary. The step is an explicit
//! value owned by the caller and passed to the navigation functions; the
//! crate holds no step state of its own. Reaching [`WizardStep::Summary`]
//! is the caller's trigger to run the full calculation, and the summary
//! step restarts at the income step for a fresh calculation.

use serde::{Deserialize, Serialize};

/// One step of the five-step wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Income entry.
    #[default]
    Income,
    /// Family deduction entry.
    Family,
    /// Insurance deduction entry.
    Insurance,
    /// Fund deduction entry.
    Funds,
    /// Result summary; reaching it triggers the calculation.
    Summary,
}

impl WizardStep {
    /// The number of wizard steps.
    pub const COUNT: usize = 5;

    /// All steps in navigation order.
    pub const ALL: [WizardStep; Self::COUNT] = [
        WizardStep::Income,
        WizardStep::Family,
        WizardStep::Insurance,
        WizardStep::Funds,
        WizardStep::Summary,
    ];

    /// Returns the zero-based position of this step.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Income => 0,
            WizardStep::Family => 1,
            WizardStep::Insurance => 2,
            WizardStep::Funds => 3,
            WizardStep::Summary => 4,
        }
    }

    /// Returns the step at a zero-based position, if it exists.
    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next step, staying on the summary step at the end.
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Income => WizardStep::Family,
            WizardStep::Family => WizardStep::Insurance,
            WizardStep::Insurance => WizardStep::Funds,
            WizardStep::Funds => WizardStep::Summary,
            WizardStep::Summary => WizardStep::Summary,
        }
    }

    /// Returns the previous step, staying on the income step at the start.
    pub fn previous(self) -> WizardStep {
        match self {
            WizardStep::Income => WizardStep::Income,
            WizardStep::Family => WizardStep::Income,
            WizardStep::Insurance => WizardStep::Family,
            WizardStep::Funds => WizardStep::Insurance,
            WizardStep::Summary => WizardStep::Funds,
        }
    }

    /// Returns true for the summary step, the trigger for running the
    /// full calculation.
    pub fn is_final(self) -> bool {
        self == WizardStep::Summary
    }

    /// Returns the income step, used by the summary step's "calculate
    /// again" action.
    pub fn restart(self) -> WizardStep {
        WizardStep::Income
    }
}
