//! Configuration for the sport catalogue and demo seeding.
//!
//! Everything has a default, so an empty TOML document yields the NFL and Soccer catalogue with
//! one to four generated players per position.

use crate::{Error, Result, Rng, Sport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

const FIRST_NAMES: [&str; 10] = [
    "John", "Mike", "Chris", "David", "Tom", "Steve", "Alex", "Sam", "Ryan", "Dan",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub sports: Vec<Sport>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Fewest players generated for each position.
    pub min_players: u32,
    /// Most players generated for each position.
    pub max_players: u32,
    /// Fixed generator state; OS entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<(u64, u64)>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sports: vec![Sport::nfl(), Sport::soccer()],
            first_names: FIRST_NAMES.iter().map(ToString::to_string).collect(),
            last_names: LAST_NAMES.iter().map(ToString::to_string).collect(),
            seed: SeedConfig::default(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> SeedConfig {
        SeedConfig {
            min_players: 1,
            max_players: 4,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] if the document doesn't parse and [`Error::InvalidConfig`] if it
    /// fails [`Config::validate`].
    pub fn from_toml_str(s: &str) -> Result<Config> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file; see [`Config::from_toml_str`].
    ///
    /// # Errors
    ///
    /// Also returns [`Error::Io`] if the file can't be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");
        Config::from_toml_str(&fs_err::read_to_string(path)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] listing every problem found.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.seed.min_players > self.seed.max_players {
            problems.push(format!(
                "- seed.min_players ({}) is greater than seed.max_players ({})",
                self.seed.min_players, self.seed.max_players
            ));
        }

        let mut names = BTreeSet::new();
        for sport in &self.sports {
            if sport.name.is_empty() {
                problems.push("- a sport has an empty name".to_string());
            } else if !names.insert(sport.name.as_str()) {
                problems.push(format!("- sport {:?} is listed twice", sport.name));
            }

            let mut positions = BTreeSet::new();
            for position in &sport.positions {
                if !positions.insert(position.as_str()) {
                    problems.push(format!(
                        "- {} position {:?} is listed twice",
                        sport.name, position
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(problems.join("\n")))
        }
    }

    pub fn sport(&self, name: &str) -> Option<&Sport> {
        self.sports.iter().find(|sport| sport.name == name)
    }

    /// The seeding generator: fixed if `seed.rng_seed` is set, otherwise from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the OS has no randomness to give.
    pub fn rng(&self) -> Result<Rng> {
        match self.seed.rng_seed {
            Some((s0, s1)) => Ok(Rng::seeded(s0, s1)),
            None => Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::{Error, Rng, Sport};

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document() {
        let config = Config::from_toml_str(
            r#"
            last_names = ["Brown"]

            [[sports]]
            name = "Hockey"
            positions = ["C", "LW", "RW", "D", "G"]

            [seed]
            max_players = 2
            rng_seed = [7, 9]
            "#,
        )
        .unwrap();

        assert_eq!(config.sports.len(), 1);
        assert_eq!(config.sport("Hockey").unwrap().positions.len(), 5);
        assert!(config.sport("NFL").is_none());
        assert_eq!(config.first_names.len(), 10);
        assert_eq!(config.last_names, ["Brown"]);
        assert_eq!(config.seed.min_players, 1);
        assert_eq!(config.seed.max_players, 2);
        assert_eq!(config.rng().unwrap(), Rng::seeded(7, 9));
    }

    #[test]
    fn rejects_bad_ranges_and_duplicates() {
        let err = Config::from_toml_str(
            r#"
            [[sports]]
            name = "NFL"
            positions = ["QB", "QB"]

            [[sports]]
            name = "NFL"
            positions = []

            [seed]
            min_players = 5
            max_players = 2
            "#,
        )
        .unwrap_err();
        let message = match err {
            Error::InvalidConfig(message) => message,
            other => panic!("unexpected error: {:?}", other),
        };
        assert_eq!(message.lines().count(), 3);
        assert!(message.contains("min_players (5)"));
        assert!(message.contains(r#"sport "NFL" is listed twice"#));
        assert!(message.contains(r#"NFL position "QB" is listed twice"#));
    }

    #[test]
    fn parse_errors_are_toml_errors() {
        assert!(matches!(
            Config::from_toml_str("sports = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let config = Config {
            sports: vec![Sport::nfl()],
            ..Config::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/depthchart.toml"),
            Err(Error::Io(_))
        ));
    }
}
