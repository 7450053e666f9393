use crate::id::PlayerId;
use crate::{Config, Performance, Rng, Sport};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
}

macro_rules! strs {
    ($slice:expr) => {
        $slice.iter().map(AsRef::<str>::as_ref)
    };
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Player {
        Player {
            id: id.into(),
            name: name.into(),
            ..Player::default()
        }
    }

    #[must_use]
    pub fn with_tag(mut self, sport: &Sport, position: impl Into<String>) -> Player {
        self.sport = Some(sport.name.clone());
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn with_performance(mut self, performance: Performance) -> Player {
        self.performance = Some(performance);
        self
    }

    pub fn generate(rng: &mut Rng, config: &Config, sport: &Sport, position: &str) -> Player {
        let name = format!(
            "{} {}",
            rng.choose(strs!(config.first_names)).unwrap_or_default(),
            rng.choose(strs!(config.last_names)).unwrap_or_default(),
        );
        Player::new(PlayerId::new(), name.trim())
            .with_tag(sport, position)
            .with_performance(Performance::generate(rng))
    }

    pub fn stats_card(&self) -> StatsCard<'_> {
        StatsCard(self)
    }
}

/// Text rendering of a player's key statistics, or `-` when there are none to show.
pub struct StatsCard<'a>(&'a Player);

impl Display for StatsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.0;
        let Some(perf) = &player.performance else {
            return write!(f, "-");
        };
        writeln!(f, "{}", player.name)?;
        match &player.sport {
            Some(sport) => writeln!(f, "Key statistics for {} in the {} league.", player.name, sport)?,
            None => writeln!(f, "Key statistics for {}.", player.name)?,
        }
        writeln!(f, "Total Actions: {}", perf.total_actions)?;
        writeln!(f, "Successful Actions: {}", perf.successful_actions)?;
        write!(f, "Success Rate (%): {}", perf.success_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::{Config, Performance, Rng, Sport};

    #[test]
    fn generate_tags_and_names() {
        let config = Config::default();
        let mut rng = Rng::seeded(11, 12);
        let soccer = Sport::soccer();
        let player = Player::generate(&mut rng, &config, &soccer, "GK");

        assert_eq!(player.sport.as_deref(), Some("Soccer"));
        assert_eq!(player.position.as_deref(), Some("GK"));
        assert!(player.performance.is_some());
        let (first, last) = player.name.split_once(' ').unwrap();
        assert!(config.first_names.iter().any(|n| n == first));
        assert!(config.last_names.iter().any(|n| n == last));
    }

    #[test]
    fn generate_with_empty_pools() {
        let config = Config {
            first_names: Vec::new(),
            last_names: vec!["Brown".into()],
            ..Config::default()
        };
        let player = Player::generate(&mut Rng::seeded(1, 1), &config, &Sport::nfl(), "QB");
        assert_eq!(player.name, "Brown");
    }

    #[test]
    fn stats_card() {
        let player = Player::new("1", "John Doe")
            .with_tag(&Sport::soccer(), "ST")
            .with_performance(Performance {
                total_actions: 10,
                successful_actions: 8,
                success_rate: 80.0,
                ..Performance::default()
            });
        assert_eq!(
            player.stats_card().to_string(),
            "John Doe\n\
             Key statistics for John Doe in the Soccer league.\n\
             Total Actions: 10\n\
             Successful Actions: 8\n\
             Success Rate (%): 80"
        );
    }

    #[test]
    fn stats_card_without_performance() {
        assert_eq!(Player::new("2", "Jane").stats_card().to_string(), "-");
    }

    #[test]
    fn optional_fields_are_skipped() {
        let json = serde_json::to_string(&Player::new("7", "Sam Jones")).unwrap();
        assert_eq!(json, r#"{"id":"7","name":"Sam Jones"}"#);
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::new("7", "Sam Jones"));
    }
}
