//! Game configuration types.
//!
//! The setup screen hands the engine one `PlayerConfig` per seat:
//! - `PlayerConfig`: name, color and controller for a seat
//! - `GameConfig`: all seats plus an optional seed and pacing
//!
//! Both deserialize from the setup screen's JSON payload, which uses
//! camelCase keys (`isAI`) and lowercase difficulty names. Unknown keys
//! (`Id`, `colorName`) are ignored.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::{Difficulty, PlayerId};
use crate::board::SEAT_COUNT;
use super::pacing::Pacing;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = SEAT_COUNT;

/// Default seat palette as `(hex, name)`.
pub const DEFAULT_COLORS: [(&str, &str); SEAT_COUNT] = [
    ("#6366F1", "Blue"),
    ("#EC4899", "Pink"),
    ("#10B981", "Green"),
    ("#F59E0B", "Yellow"),
];

/// Configuration for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub name: String,

    /// Display color as `#RRGGBB`.
    pub color: String,

    #[serde(rename = "isAI", default)]
    pub is_ai: bool,

    /// Ignored for human seats.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl PlayerConfig {
    /// A human seat.
    pub fn human(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            is_ai: false,
            difficulty: Difficulty::None,
        }
    }

    /// An AI seat at the given tier.
    pub fn ai(name: impl Into<String>, color: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            is_ai: true,
            difficulty,
        }
    }

    /// Setup-screen defaults: `Player N` in the seat's palette color, with
    /// seats 3 and 4 played by a medium AI.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not one of the four board seats.
    #[must_use]
    pub fn default_for_seat(seat: PlayerId) -> Self {
        let (color, _) = DEFAULT_COLORS[seat.index()];
        let name = format!("Player {}", seat.number());
        if seat.index() > 1 {
            Self::ai(name, color, Difficulty::Medium)
        } else {
            Self::human(name, color)
        }
    }

    /// Difficulty the seat will actually play with.
    #[must_use]
    pub fn effective_difficulty(&self) -> Difficulty {
        if self.is_ai {
            self.difficulty
        } else {
            Difficulty::None
        }
    }

    fn validate(&self, seat: PlayerId) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName { seat: seat.number() });
        }
        if !is_hex_color(&self.color) {
            return Err(GameError::InvalidColor {
                seat: seat.number(),
                color: self.color.clone(),
            });
        }
        if self.is_ai && self.difficulty == Difficulty::None {
            return Err(GameError::MissingDifficulty { seat: seat.number() });
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Seats in turn order.
    pub players: Vec<PlayerConfig>,

    /// Seed for dice and random AI choices. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub pacing: Pacing,
}

impl GameConfig {
    /// Create a configuration for the given seats.
    #[must_use]
    pub fn new(players: Vec<PlayerConfig>) -> Self {
        Self {
            players,
            seed: None,
            pacing: Pacing::default(),
        }
    }

    /// The setup screen's initial state for `player_count` seats.
    #[must_use]
    pub fn defaults(player_count: usize) -> Self {
        let players = PlayerId::all(player_count.min(MAX_PLAYERS))
            .map(PlayerConfig::default_for_seat)
            .collect();
        Self::new(players)
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check seat count, names, colors and AI tiers.
    pub fn validate(&self) -> Result<()> {
        validate_players(&self.players)
    }
}

/// Check a list of seat configurations.
pub fn validate_players(players: &[PlayerConfig]) -> Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(GameError::InvalidPlayerCount(players.len()));
    }

    let mut colors = FxHashSet::default();
    for (seat, config) in PlayerId::all(players.len()).zip(players) {
        config.validate(seat)?;
        if !colors.insert(config.color.to_ascii_uppercase()) {
            return Err(GameError::DuplicateColor(config.color.clone()));
        }
    }
    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_humans() -> Vec<PlayerConfig> {
        vec![
            PlayerConfig::human("Ann", "#6366F1"),
            PlayerConfig::human("Ben", "#EC4899"),
        ]
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_players(&two_humans()).is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        let one = vec![PlayerConfig::human("Ann", "#6366F1")];
        assert!(matches!(validate_players(&one), Err(GameError::InvalidPlayerCount(1))));

        let mut five = GameConfig::defaults(4).players;
        five.push(PlayerConfig::human("Extra", "#000000"));
        assert!(matches!(validate_players(&five), Err(GameError::InvalidPlayerCount(5))));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut players = two_humans();
        players[1].name = "   ".to_string();
        assert!(matches!(
            validate_players(&players),
            Err(GameError::EmptyPlayerName { seat: 2 })
        ));
    }

    #[test]
    fn test_rejects_bad_and_duplicate_colors() {
        let mut players = two_humans();
        players[0].color = "blue".to_string();
        assert!(matches!(validate_players(&players), Err(GameError::InvalidColor { seat: 1, .. })));

        let mut players = two_humans();
        players[1].color = "#6366f1".to_string();
        assert!(matches!(validate_players(&players), Err(GameError::DuplicateColor(_))));
    }

    #[test]
    fn test_ai_needs_difficulty() {
        let mut players = two_humans();
        players[1].is_ai = true;
        assert!(matches!(
            validate_players(&players),
            Err(GameError::MissingDifficulty { seat: 2 })
        ));

        players[1].difficulty = Difficulty::Easy;
        assert!(validate_players(&players).is_ok());
    }

    #[test]
    fn test_human_difficulty_is_ignored() {
        let mut config = PlayerConfig::human("Ann", "#6366F1");
        config.difficulty = Difficulty::Hard;
        assert_eq!(config.effective_difficulty(), Difficulty::None);
    }

    #[test]
    fn test_defaults_match_setup_screen() {
        let config = GameConfig::defaults(4);
        assert_eq!(config.players.len(), 4);
        assert_eq!(config.players[0].name, "Player 1");
        assert!(!config.players[1].is_ai);
        assert!(config.players[2].is_ai);
        assert_eq!(config.players[3].difficulty, Difficulty::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_setup_payload() {
        let json = r##"{
            "players": [
                { "Id": 1, "name": "Player 1", "color": "#6366F1", "colorName": "Blue", "isAI": false, "difficulty": "none" },
                { "Id": 2, "name": "Robo", "color": "#EC4899", "colorName": "Pink", "isAI": true, "difficulty": "hard" }
            ],
            "seed": 7
        }"##;

        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.players.len(), 2);
        assert!(config.players[1].is_ai);
        assert_eq!(config.players[1].difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pacing, Pacing::default());
    }

    #[test]
    fn test_pacing_is_read_with_the_config() {
        let json = r##"{
            "players": [
                { "name": "Ann", "color": "#6366F1" },
                { "name": "Ben", "color": "#EC4899" }
            ],
            "pacing": { "diceRollMs": 0, "aiThinkMs": 250 }
        }"##;

        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.pacing.dice_roll_ms, 0);
        assert_eq!(config.pacing.ai_think_ms, 250);
        assert_eq!(config.pacing.move_ms, Pacing::default().move_ms);

        let quiet = GameConfig::new(two_humans()).with_pacing(Pacing::instant());
        assert_eq!(quiet.pacing.pass_notice_ms, 0);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(GameConfig::from_json_str("{"), Err(GameError::Config(_))));

        let json = r##"{ "players": [ { "name": "Solo", "color": "#6366F1" } ] }"##;
        assert!(matches!(
            GameConfig::from_json_str(json),
            Err(GameError::InvalidPlayerCount(1))
        ));
    }
}
