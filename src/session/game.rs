//! The turn orchestrator.
//!
//! A `GameSession` owns one match: its state, its RNG, the pacing it
//! advertises and the events produced since the caller last drained them.
//! Each public operation validates against the current turn before touching
//! anything, so a rejected action leaves the match exactly as it was.
//!
//! ```
//! use rust_ludo::session::GameBuilder;
//! use rust_ludo::core::{Difficulty, TurnPhase};
//!
//! let mut session = GameBuilder::new()
//!     .human("Ann", "#6366F1")
//!     .ai("Robo", "#EC4899", Difficulty::Medium)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let roll = session.roll_dice().unwrap();
//! if !roll.passed {
//!     session.move_piece(roll.movable[0]).unwrap();
//! }
//! assert!(session.game_state().is_playing());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::events::{ExtraTurnReason, GameEvent};
use crate::ai::strategy_for;
use crate::core::{
    CellOccupants, Difficulty, GameConfig, GameError, GameRng, GameState, MoveRecord, Pacing,
    PieceId, PlayerConfig, PlayerId, Position, Result, DIE_FACES,
};
use crate::rules::{self, MoveCandidate};

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub player: PlayerId,
    pub value: u8,
    /// Pieces the roll can move, in board order.
    pub movable: Vec<PieceId>,
    /// No piece could move and the turn went to the next player.
    pub passed: bool,
}

/// Result of a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    /// Opponent pieces sent back to base.
    pub captured: CellOccupants,
    /// The mover rolls again.
    pub extra_turn: bool,
    /// Set when this move won the game.
    pub winner: Option<PlayerId>,
}

/// What an AI seat did with its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTurn {
    pub player: PlayerId,
    pub roll: RollOutcome,
    /// `None` when the roll passed the turn.
    pub moved: Option<MoveOutcome>,
}

/// One match of Ludo.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    rng: GameRng,
    pacing: Pacing,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// An empty session awaiting [`setup_game`](Self::setup_game).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// An empty session with OS-seeded dice.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Resume from an existing state, e.g. a saved snapshot or a hand-built
    /// position.
    ///
    /// The state is checked with [`GameState::restore`], which also rebuilds
    /// track occupancy from the piece positions.
    pub fn from_state(state: GameState, seed: u64) -> Result<Self> {
        Ok(Self {
            state: state.restore()?,
            ..Self::new(seed)
        })
    }

    /// Build and start a session from a full configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut session = Self::with_rng(rng).with_pacing(config.pacing.clone());
        session.setup_game(&config.players)?;
        Ok(session)
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
            pacing: Pacing::default(),
            events: Vec::new(),
        }
    }

    /// Replace the pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    // === Setup ===

    /// Seat 2 to 4 players and start a match. The first seat rolls first.
    ///
    /// An invalid configuration is rejected and the previous state kept.
    #[instrument(skip_all, fields(players = configs.len()))]
    pub fn setup_game(&mut self, configs: &[PlayerConfig]) -> Result<&GameState> {
        let state = GameState::from_configs(configs).inspect_err(|e| {
            warn!(error = %e, "rejected game setup");
        })?;

        self.state = state;
        self.events.clear();
        self.events.push(GameEvent::GameStarted {
            players: configs.len(),
        });
        info!(seed = self.rng.seed(), "game started");
        Ok(&self.state)
    }

    /// Discard the match and return to an empty setup state.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> &GameState {
        self.state = GameState::new();
        self.events.clear();
        self.events.push(GameEvent::GameReset);
        info!("game reset");
        &self.state
    }

    // === Turn ===

    /// Roll the die for the current player.
    ///
    /// When no piece can move the turn passes immediately, which the outcome
    /// reports through `passed`.
    pub fn roll_dice(&mut self) -> Result<RollOutcome> {
        self.check_can_roll()?;
        let value = self.rng.roll_die();
        self.roll_dice_with(value)
    }

    /// Apply a roll of `value` for the current player.
    ///
    /// For physical dice and scripted play.
    #[instrument(skip(self))]
    pub fn roll_dice_with(&mut self, value: u8) -> Result<RollOutcome> {
        let player = self.check_can_roll()?;
        if !(1..=DIE_FACES).contains(&value) {
            return Err(GameError::InvalidDiceValue(value));
        }

        let movable = rules::record_roll(&mut self.state, value);
        debug!(%player, value, movable = movable.len(), "dice rolled");
        self.events.push(GameEvent::DiceRolled {
            player,
            value,
            movable: movable.clone(),
        });

        let passed = movable.is_empty();
        if passed {
            info!(%player, value, "no legal moves, turn passes");
            self.events.push(GameEvent::TurnPassed { player, dice: value });
            self.advance_turn();
        }

        Ok(RollOutcome {
            player,
            value,
            movable,
            passed,
        })
    }

    /// Move one of the current player's pieces by the pending roll.
    ///
    /// Resolves the capture, records the move, checks for a win, then either
    /// keeps the turn (a 6 or a capture) or hands it to the next seat.
    #[instrument(skip(self), fields(piece = %id))]
    pub fn move_piece(&mut self, id: PieceId) -> Result<MoveOutcome> {
        if !self.state.is_playing() {
            return Err(GameError::GameNotInProgress);
        }
        let dice = self.state.dice_value();
        if dice == 0 {
            return Err(GameError::DiceNotRolled);
        }
        let player = self
            .state
            .current_player_id()
            .ok_or(GameError::GameNotInProgress)?;
        let piece = self.state.piece(id).ok_or(GameError::UnknownPiece(id))?;
        if piece.owner != player {
            return Err(GameError::NotCurrentPlayersPiece {
                piece: id,
                owner: piece.owner,
            });
        }
        if !piece.can_move {
            return Err(GameError::PieceCannotMove(id));
        }
        let from = piece.position;
        let to = rules::legal_destination(piece, dice).ok_or(GameError::PieceCannotMove(id))?;

        let captured = rules::apply_move(&mut self.state, id, to)?;
        let turn = self.state.turn_count();
        self.state.record_move(MoveRecord {
            player,
            piece: id,
            dice,
            from,
            to,
            captured: captured.clone(),
            turn,
        });
        rules::clear_movable_pieces(&mut self.state);

        self.events.push(GameEvent::PieceMoved {
            player,
            piece: id,
            from,
            to,
        });
        for &victim in &captured {
            info!(%player, by = %id, captured = %victim, "piece captured");
            self.events.push(GameEvent::PieceCaptured { piece: victim, by: id });
        }

        let winner = rules::check_win_condition(&self.state);
        let mut extra_turn = false;
        if let Some(winner) = winner {
            rules::declare_winner(&mut self.state, winner);
            info!(%winner, turns = self.state.turn_count(), "game won");
            self.events.push(GameEvent::GameWon { player: winner });
        } else if rules::grants_extra_turn(dice, !captured.is_empty()) {
            rules::grant_extra_turn(&mut self.state);
            extra_turn = true;
            let reason = if !captured.is_empty() {
                ExtraTurnReason::Captured
            } else {
                ExtraTurnReason::RolledSix
            };
            debug!(%player, ?reason, "extra turn");
            self.events.push(GameEvent::ExtraTurn { player, reason });
        } else {
            self.advance_turn();
        }

        Ok(MoveOutcome {
            player,
            piece: id,
            from,
            to,
            captured,
            extra_turn,
            winner,
        })
    }

    /// Play the current AI seat's roll and move.
    ///
    /// If the AI has already rolled, the pending roll is used. On any error
    /// the state, RNG and event queue are restored to how they were before
    /// the call.
    #[instrument(skip(self))]
    pub fn make_ai_move(&mut self) -> Result<AiTurn> {
        if !self.state.is_playing() {
            return Err(GameError::GameNotInProgress);
        }
        let player = self
            .state
            .current_player()
            .ok_or(GameError::GameNotInProgress)?;
        if !player.is_ai {
            return Err(GameError::NotAiTurn(player.id));
        }
        let (id, difficulty) = (player.id, player.difficulty);

        let checkpoint = (self.state.clone(), self.rng.clone(), self.events.len());
        let result = self.play_ai_turn(id, difficulty);
        if let Err(e) = &result {
            warn!(player = %id, error = %e, "AI turn failed, restoring state");
            let (state, rng, events) = checkpoint;
            self.state = state;
            self.rng = rng;
            self.events.truncate(events);
        }
        result
    }

    fn play_ai_turn(&mut self, player: PlayerId, difficulty: Difficulty) -> Result<AiTurn> {
        let roll = if self.state.dice_value() == 0 {
            self.events.push(GameEvent::AiThinking { player });
            self.roll_dice()?
        } else {
            RollOutcome {
                player,
                value: self.state.dice_value(),
                movable: self.state.movable_pieces(),
                passed: false,
            }
        };

        // A seat restored from a snapshot can claim to be AI without a tier.
        let strategy = strategy_for(difficulty).ok_or(GameError::MissingDifficulty {
            seat: player.number(),
        })?;
        if roll.passed {
            return Ok(AiTurn {
                player,
                roll,
                moved: None,
            });
        }

        let candidates = rules::move_candidates(&self.state);
        let piece = strategy
            .choose(&candidates, &mut self.rng)
            .ok_or(GameError::NoMoveChosen(player))?;
        debug!(%player, strategy = strategy.name(), %piece, "AI chose move");
        self.events.push(GameEvent::AiDecided { player, piece });

        let moved = self.move_piece(piece)?;
        Ok(AiTurn {
            player,
            roll,
            moved: Some(moved),
        })
    }

    fn check_can_roll(&self) -> Result<PlayerId> {
        if !self.state.is_playing() {
            return Err(GameError::GameNotInProgress);
        }
        let dice = self.state.dice_value();
        if dice != 0 {
            return Err(GameError::AlreadyRolled(dice));
        }
        self.state
            .current_player_id()
            .ok_or(GameError::GameNotInProgress)
    }

    fn advance_turn(&mut self) {
        rules::clear_movable_pieces(&mut self.state);
        rules::advance_turn(&mut self.state);
        if let Some(next) = self.state.current_player_id() {
            self.events.push(GameEvent::TurnAdvanced {
                next,
                turn_count: self.state.turn_count(),
            });
        }
    }

    // === Queries ===

    #[must_use]
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Legal moves for the pending roll.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        rules::move_candidates(&self.state)
    }

    /// Whether the seat to act is computer-controlled.
    #[must_use]
    pub fn current_player_is_ai(&self) -> bool {
        self.state.is_playing() && self.state.current_player().is_some_and(|p| p.is_ai)
    }

    #[must_use]
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Events queued so far, without draining them.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Fluent construction of a started session.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Add a seat.
    #[must_use]
    pub fn player(mut self, config: PlayerConfig) -> Self {
        self.config.players.push(config);
        self
    }

    #[must_use]
    pub fn human(self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.player(PlayerConfig::human(name, color))
    }

    #[must_use]
    pub fn ai(self, name: impl Into<String>, color: impl Into<String>, difficulty: Difficulty) -> Self {
        self.player(PlayerConfig::ai(name, color, difficulty))
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.config.pacing = pacing;
        self
    }

    /// Validate the seats and start the match.
    pub fn build(self) -> Result<GameSession> {
        GameSession::from_config(&self.config)
    }
}
