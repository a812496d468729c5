//! Display-state reconciliation for criterion indicators.
//!
//! The evaluator produces plain booleans; how those booleans reach the
//! indicator widgets depends on the display mode. During onboarding
//! (`Reset` mode) criteria light up once satisfied and never flicker
//! back; after a failed submit the host switches to `Live` mode, where
//! every indicator mirrors the current result exactly.

use secrecy::SecretString;

use crate::evaluator::evaluate_password_criteria;
use crate::types::{CriteriaSnapshot, Criterion};

/// How a snapshot is projected into indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Met states are sticky; unmet criteria show the neutral visual.
    #[default]
    Reset,
    /// Indicators mirror the current result, both directions.
    Live,
}

/// Visual state of one criterion indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorState {
    /// Not yet satisfied, shown without judgement.
    #[default]
    Neutral,
    Met,
    NotMet,
}

/// Per-criterion indicator states, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    states: [IndicatorState; 5],
}

impl DisplayState {
    /// Returns the indicator state for a single criterion.
    pub fn get(&self, criterion: Criterion) -> IndicatorState {
        self.states[criterion as usize]
    }

    fn set(&mut self, criterion: Criterion, state: IndicatorState) {
        self.states[criterion as usize] = state;
    }

    /// Iterates criteria with their indicator state, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, IndicatorState)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Projects a snapshot into the next display state.
///
/// In `Reset` mode a criterion projects to `Met` if it is satisfied now
/// or was already shown `Met`; otherwise it stays `Neutral`. `NotMet`
/// never appears in this mode. In `Live` mode the previous state is
/// ignored and each indicator mirrors its current result.
pub fn project_display(
    previous: DisplayState,
    snapshot: &CriteriaSnapshot,
    mode: DisplayMode,
) -> DisplayState {
    let mut next = DisplayState::default();

    for criterion in Criterion::ALL {
        let met = snapshot.get(criterion);
        let state = match mode {
            DisplayMode::Reset => {
                if met || previous.get(criterion) == IndicatorState::Met {
                    IndicatorState::Met
                } else {
                    IndicatorState::Neutral
                }
            }
            DisplayMode::Live => {
                if met {
                    IndicatorState::Met
                } else {
                    IndicatorState::NotMet
                }
            }
        };
        next.set(criterion, state);
    }

    next
}

/// Host-side indicator tracker for one password field.
///
/// Owns the display mode and the current indicator states; this is the
/// only state retained between keystrokes. Starts in `Reset` mode with
/// all indicators neutral.
#[derive(Debug, Clone, Default)]
pub struct PasswordStatus {
    mode: DisplayMode,
    display: DisplayState,
}

impl PasswordStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switches the display mode, e.g. to `Live` after a failed submit.
    /// Indicator states carry over and are reconciled on the next update.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn indicator(&self, criterion: Criterion) -> IndicatorState {
        self.display.get(criterion)
    }

    /// Evaluates the current text and reconciles the indicators.
    pub fn update_display(&mut self, password: &SecretString) -> &DisplayState {
        let snapshot = evaluate_password_criteria(password);
        self.apply_snapshot(&snapshot)
    }

    /// Reconciles the indicators from an already-computed snapshot.
    pub fn apply_snapshot(&mut self, snapshot: &CriteriaSnapshot) -> &DisplayState {
        self.display = project_display(self.display, snapshot, self.mode);
        &self.display
    }

    /// Returns every indicator to neutral, clearing sticky met state.
    pub fn reset(&mut self) {
        self.display = DisplayState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        length_and_no_space: bool,
        uppercase: bool,
        lowercase: bool,
        digit: bool,
        special_character: bool,
    ) -> CriteriaSnapshot {
        CriteriaSnapshot {
            length_and_no_space,
            uppercase,
            lowercase,
            digit,
            special_character,
        }
    }

    #[test]
    fn test_initial_state_is_neutral_reset_mode() {
        let status = PasswordStatus::new();
        assert_eq!(status.mode(), DisplayMode::Reset);
        for (_, state) in status.display().iter() {
            assert_eq!(state, IndicatorState::Neutral);
        }
    }

    #[test]
    fn test_reset_mode_lights_up_met_criteria() {
        let mut status = PasswordStatus::new();
        status.apply_snapshot(&snapshot(false, true, true, false, false));

        assert_eq!(status.indicator(Criterion::Uppercase), IndicatorState::Met);
        assert_eq!(status.indicator(Criterion::Lowercase), IndicatorState::Met);
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Neutral);
        assert_eq!(
            status.indicator(Criterion::LengthAndNoSpace),
            IndicatorState::Neutral
        );
    }

    #[test]
    fn test_reset_mode_met_is_sticky() {
        let mut status = PasswordStatus::new();
        status.apply_snapshot(&snapshot(false, false, false, true, false));
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Met);

        // Digit deleted: the indicator must not revert
        status.apply_snapshot(&snapshot(false, false, true, false, false));
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Met);
        assert_eq!(status.indicator(Criterion::Lowercase), IndicatorState::Met);
    }

    #[test]
    fn test_reset_mode_never_shows_not_met() {
        let mut status = PasswordStatus::new();
        let updates = [
            snapshot(true, true, true, true, true),
            snapshot(false, false, false, false, false),
            snapshot(false, true, false, true, false),
        ];

        for update in &updates {
            status.apply_snapshot(update);
            for (criterion, state) in status.display().iter() {
                assert_ne!(
                    state,
                    IndicatorState::NotMet,
                    "{criterion:?} showed NotMet in Reset mode"
                );
            }
        }
    }

    #[test]
    fn test_live_mode_mirrors_both_directions() {
        let mut status = PasswordStatus::new();
        status.set_mode(DisplayMode::Live);

        status.apply_snapshot(&snapshot(false, true, false, false, false));
        assert_eq!(status.indicator(Criterion::Uppercase), IndicatorState::Met);
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::NotMet);

        status.apply_snapshot(&snapshot(false, false, false, true, false));
        assert_eq!(
            status.indicator(Criterion::Uppercase),
            IndicatorState::NotMet
        );
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Met);
    }

    #[test]
    fn test_switch_to_live_after_failed_submit() {
        let mut status = PasswordStatus::new();
        status.apply_snapshot(&snapshot(false, true, true, false, false));
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Neutral);

        // Submit failed: host flips the mode, next keystroke goes live
        status.set_mode(DisplayMode::Live);
        status.apply_snapshot(&snapshot(false, false, true, false, false));
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::NotMet);
        assert_eq!(
            status.indicator(Criterion::Uppercase),
            IndicatorState::NotMet
        );
        assert_eq!(status.indicator(Criterion::Lowercase), IndicatorState::Met);
    }

    #[test]
    fn test_reset_clears_sticky_state() {
        let mut status = PasswordStatus::new();
        status.apply_snapshot(&snapshot(true, true, true, true, true));
        status.reset();

        for (_, state) in status.display().iter() {
            assert_eq!(state, IndicatorState::Neutral);
        }

        // Sticky history is gone as well
        status.apply_snapshot(&snapshot(false, false, false, false, false));
        assert_eq!(status.indicator(Criterion::Digit), IndicatorState::Neutral);
    }

    #[test]
    fn test_project_display_is_pure() {
        let previous = DisplayState::default();
        let current = snapshot(true, false, true, false, true);

        let a = project_display(previous, &current, DisplayMode::Reset);
        let b = project_display(previous, &current, DisplayMode::Reset);
        assert_eq!(a, b);
        // Inputs untouched
        assert_eq!(previous, DisplayState::default());
    }

    #[test]
    fn test_iter_yields_display_order() {
        let status = PasswordStatus::new();
        let order: Vec<Criterion> = status.display().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Criterion::ALL);
    }
}
