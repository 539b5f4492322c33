//! Per-invocation build state machine.
//!
//! ```text
//! Pending → Validating ─┬─→ Rejected
//!                       └─→ Creating ─┬─→ Committed
//!                                     └─→ RolledBack
//! ```
//!
//! `Rejected` means nothing belonging to the package was written;
//! `RolledBack` means something was written and then removed again.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    Pending,
    Validating,
    Rejected,
    Creating,
    Committed,
    RolledBack,
}

impl BuildState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Committed | Self::RolledBack)
    }

    pub const fn can_transition_to(self, next: BuildState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validating)
                | (Self::Validating, Self::Rejected)
                | (Self::Validating, Self::Creating)
                | (Self::Creating, Self::Committed)
                | (Self::Creating, Self::RolledBack)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validating => "validating",
            Self::Rejected => "rejected",
            Self::Creating => "creating",
            Self::Committed => "committed",
            Self::RolledBack => "rolled-back",
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BuildState::*;

    const ALL: [BuildState; 6] = [Pending, Validating, Rejected, Creating, Committed, RolledBack];

    #[test]
    fn exactly_three_terminal_states() {
        let terminal: Vec<_> = ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![&Rejected, &Committed, &RolledBack]);
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in ALL.iter().filter(|s| s.is_terminal()) {
            for to in ALL {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn creating_is_only_reached_through_validating() {
        let sources: Vec<_> = ALL.iter().filter(|s| s.can_transition_to(Creating)).collect();
        assert_eq!(sources, vec![&Validating]);
    }

    #[test]
    fn rejection_cannot_follow_creation() {
        assert!(!Creating.can_transition_to(Rejected));
    }
}
