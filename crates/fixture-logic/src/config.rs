//! Tournament settings chosen at setup

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::Format;
use crate::standings::ScoringPolicy;

/// Everything the scheduler and the standings need from the setup screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentConfig {
    pub format: Format,
    /// Target number of games for every player
    pub games_per_player: u32,
    /// Points a win is worth (the game's point limit)
    pub point_value: u32,
    pub scoring: ScoringPolicy,
}

impl TournamentConfig {
    /// Doubles to 11, standard consolation
    pub fn doubles(games_per_player: u32) -> Self {
        Self {
            format: Format::Doubles,
            games_per_player,
            point_value: 11,
            scoring: ScoringPolicy::standard(),
        }
    }

    /// Singles to 11, standard consolation
    pub fn singles(games_per_player: u32) -> Self {
        Self {
            format: Format::Singles,
            ..Self::doubles(games_per_player)
        }
    }

    pub fn with_point_value(mut self, point_value: u32) -> Self {
        self.point_value = point_value;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_per_player == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if self.point_value == 0 {
            return Err(ConfigError::ZeroPointValue);
        }
        if !self.scoring.is_valid() {
            return Err(ConfigError::ConsolationTooLarge(
                self.scoring.consolation_percent,
            ));
        }
        Ok(())
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::doubles(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let c = TournamentConfig::singles(4);
        assert_eq!(c.format, Format::Singles);
        assert_eq!(c.games_per_player, 4);
        assert_eq!(c.point_value, 11);
        assert_eq!(c.scoring.consolation_percent, 30);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let c = TournamentConfig::from_json(r#"{"format":"1v1","gamesPerPlayer":3}"#).unwrap();
        assert_eq!(c.format, Format::Singles);
        assert_eq!(c.games_per_player, 3);
        assert_eq!(c.point_value, 11);
        assert_eq!(c.scoring, ScoringPolicy::standard());

        let c = TournamentConfig::from_json(
            r#"{"pointValue":21,"scoring":{"consolationPercent":0}}"#,
        )
        .unwrap();
        assert_eq!(c.format, Format::Doubles);
        assert_eq!(c.point_value, 21);
        assert_eq!(c.scoring.consolation(21), 0);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            TournamentConfig::from_json(r#"{"gamesPerPlayer":0}"#),
            Err(ConfigError::ZeroTarget)
        ));
        assert!(matches!(
            TournamentConfig::singles(2).with_point_value(0).validate(),
            Err(ConfigError::ZeroPointValue)
        ));
        assert!(matches!(
            TournamentConfig::singles(2)
                .with_scoring(ScoringPolicy { consolation_percent: 150 })
                .validate(),
            Err(ConfigError::ConsolationTooLarge(150))
        ));
        assert!(matches!(
            TournamentConfig::from_json(r#"{"format":"3v3"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
