//! Presentation pacing.
//!
//! The engine never sleeps. A front end that wants the dice to tumble, the
//! pieces to slide and the AI to look like it is thinking asks `Pacing` how
//! long to hold each event on screen, or lays a batch of events out on a
//! timeline with [`Pacing::schedule`].

use std::time::Duration;

use super::events::GameEvent;
use crate::core::Pacing;

/// An event placed on the presentation timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledEvent {
    /// Offset from the start of the batch at which to show the event.
    pub at: Duration,
    pub event: GameEvent,
}

impl Pacing {
    /// How long the presentation should spend on `event` before showing the
    /// next one.
    #[must_use]
    pub fn delay_for(&self, event: &GameEvent) -> Duration {
        let ms = match event {
            GameEvent::AiThinking { .. } => self.ai_think_ms,
            GameEvent::DiceRolled { .. } => self.dice_roll_ms,
            GameEvent::AiDecided { .. } => self.ai_decide_ms,
            GameEvent::PieceMoved { .. } => self.move_ms,
            GameEvent::TurnPassed { .. } => self.pass_notice_ms,
            _ => 0,
        };
        Duration::from_millis(ms)
    }

    /// Lay events out back to back.
    ///
    /// Each event starts when the previous one's delay has elapsed.
    #[must_use]
    pub fn schedule(&self, events: Vec<GameEvent>) -> Vec<ScheduledEvent> {
        let mut at = Duration::ZERO;
        events
            .into_iter()
            .map(|event| {
                let scheduled = ScheduledEvent { at, event };
                at += self.delay_for(&scheduled.event);
                scheduled
            })
            .collect()
    }

    /// Total presentation time for a batch of events.
    #[must_use]
    pub fn total(&self, events: &[GameEvent]) -> Duration {
        events.iter().map(|e| self.delay_for(e)).sum()
    }
}
