//! Display state derived from the counter value.
//!
//! Nothing here is stored on the counter. Every function takes the bounds and
//! the current value and recomputes, so styling can never drift from the count.

use crate::config::{MILESTONE_HIGH, MILESTONE_LOW};

/// The single styling state shown for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Default,
    AtMinimum,
    AtMaximum,
    Milestone18,
    Milestone21,
}

impl DisplayState {
    /// Pick the state for `value`. Bounds win over milestones when they coincide.
    pub fn derive(value: i32, minimum: i32, maximum: i32) -> Self {
        if value == minimum {
            DisplayState::AtMinimum
        } else if value == maximum {
            DisplayState::AtMaximum
        } else if value == MILESTONE_LOW {
            DisplayState::Milestone18
        } else if value == MILESTONE_HIGH {
            DisplayState::Milestone21
        } else {
            DisplayState::Default
        }
    }

    /// Value of the `data-state` styling hook; `None` removes the attribute.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            DisplayState::Default => None,
            DisplayState::AtMinimum => Some("min"),
            DisplayState::AtMaximum => Some("max"),
            DisplayState::Milestone18 => Some("18"),
            DisplayState::Milestone21 => Some("21"),
        }
    }
}

/// Whether landing on `value` should request the celebration effect.
///
/// Deliberately independent of [`DisplayState`]: a maximum of 21 still
/// celebrates even though it is styled as the maximum.
pub fn celebrates(value: i32) -> bool {
    value == MILESTONE_HIGH
}

/// Which buttons are disabled for the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub decrement_disabled: bool,
    pub reset_disabled: bool,
    pub increment_disabled: bool,
}

impl Controls {
    pub fn derive(value: i32, minimum: i32, maximum: i32, default_value: i32) -> Self {
        Self {
            decrement_disabled: value <= minimum,
            reset_disabled: value == default_value,
            increment_disabled: value >= maximum,
        }
    }
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub value: i32,
    pub state: DisplayState,
    pub controls: Controls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_with_default_bounds() {
        let cases = [
            (0, DisplayState::AtMinimum),
            (25, DisplayState::AtMaximum),
            (18, DisplayState::Milestone18),
            (21, DisplayState::Milestone21),
            (10, DisplayState::Default),
        ];
        for (value, expected) in cases {
            assert_eq!(DisplayState::derive(value, 0, 25), expected, "value {}", value);
        }
    }

    #[test]
    fn bounds_shadow_milestones() {
        assert_eq!(DisplayState::derive(21, 0, 21), DisplayState::AtMaximum);
        assert_eq!(DisplayState::derive(18, 18, 30), DisplayState::AtMinimum);
        // styling says maximum, the celebration still fires
        assert!(celebrates(21));
    }

    #[test]
    fn default_state_has_no_tag() {
        assert_eq!(DisplayState::Default.tag(), None);
        assert_eq!(DisplayState::Milestone21.tag(), Some("21"));
        assert_eq!(DisplayState::AtMinimum.tag(), Some("min"));
    }

    #[test]
    fn controls_at_floor_and_one_above() {
        let at_floor = Controls::derive(0, 0, 25, 0);
        assert!(at_floor.decrement_disabled);
        assert!(at_floor.reset_disabled);
        assert!(!at_floor.increment_disabled);

        let above = Controls::derive(1, 0, 25, 0);
        assert_eq!(
            above,
            Controls {
                decrement_disabled: false,
                reset_disabled: false,
                increment_disabled: false,
            }
        );
    }

    #[test]
    fn controls_at_ceiling() {
        let at_ceiling = Controls::derive(25, 0, 25, 0);
        assert!(at_ceiling.increment_disabled);
        assert!(!at_ceiling.decrement_disabled);
    }
}
