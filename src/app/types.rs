//! Type definitions for the application state.

use crate::engine::{GuessOutcome, HitOutcome};

/// Which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Map,
}

/// Visual weight of a status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warn,
}

/// A transient status-bar message: overwritten by the next action,
/// expired after a few seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Tick count at creation, for expiry.
    pub born_at_tick: u64,
}

impl Notice {
    pub fn from_guess(outcome: &GuessOutcome, born_at_tick: u64) -> Self {
        match outcome {
            GuessOutcome::NewlyGuessed(name) => Self {
                kind: NoticeKind::Success,
                text: format!("Conquered {name}!"),
                born_at_tick,
            },
            GuessOutcome::AlreadyGuessed(name) => Self {
                kind: NoticeKind::Info,
                text: format!("Already conquered: {name}"),
                born_at_tick,
            },
            GuessOutcome::NoMatch => Self {
                kind: NoticeKind::Warn,
                text: "No such region".to_string(),
                born_at_tick,
            },
        }
    }

    pub fn from_hit(outcome: &HitOutcome, born_at_tick: u64) -> Self {
        match outcome {
            HitOutcome::Conquered(name) => Self {
                kind: NoticeKind::Success,
                text: format!("{name} — conquered"),
                born_at_tick,
            },
            HitOutcome::Unconquered(name) => Self {
                kind: NoticeKind::Info,
                text: format!("{name} — not conquered yet"),
                born_at_tick,
            },
            HitOutcome::Empty => Self {
                kind: NoticeKind::Info,
                text: "No region here".to_string(),
                born_at_tick,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_name_the_region() {
        let notice = Notice::from_guess(&GuessOutcome::NewlyGuessed("Goa".into()), 0);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.text.contains("Goa"));

        let notice = Notice::from_hit(&HitOutcome::Unconquered("Bihar".into()), 3);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.text.contains("Bihar"));
        assert_eq!(notice.born_at_tick, 3);

        let notice = Notice::from_hit(&HitOutcome::Empty, 0);
        assert_eq!(notice.text, "No region here");
    }
}
