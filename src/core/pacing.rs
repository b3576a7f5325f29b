//! Presentation pacing settings.
//!
//! How long a front end should spend animating each kind of event. The
//! durations are plain configuration; the session turns them into a
//! timeline (see `crate::session::pacing`).

use serde::{Deserialize, Serialize};

/// Animation delays in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pacing {
    /// Dice tumble.
    pub dice_roll_ms: u64,
    /// Piece slide.
    pub move_ms: u64,
    /// AI "thinking" before it rolls.
    pub ai_think_ms: u64,
    /// Pause between an AI roll and its move.
    pub ai_decide_ms: u64,
    /// How long a "no moves" notice stays up before the next turn.
    pub pass_notice_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            dice_roll_ms: 800,
            move_ms: 400,
            ai_think_ms: 1500,
            ai_decide_ms: 500,
            pass_notice_ms: 1500,
        }
    }
}

impl Pacing {
    /// No delays at all, for headless play and tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            dice_roll_ms: 0,
            move_ms: 0,
            ai_think_ms: 0,
            ai_decide_ms: 0,
            pass_notice_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let pacing: Pacing = serde_json::from_str(r#"{ "moveMs": 100 }"#).unwrap();
        assert_eq!(pacing.move_ms, 100);
        assert_eq!(pacing.dice_roll_ms, 800);
        assert_ne!(pacing, Pacing::instant());
    }
}
