//! Demo roster generation.

use crate::{Config, DepthChartStore, Player, Rng};

/// Fills an empty store with generated players for every configured sport and position.
///
/// Each position gets between `seed.min_players` and `seed.max_players` players, inserted at
/// ascending spots. A store that already has charts is left alone. Returns the number of players
/// added.
pub fn populate(store: &mut DepthChartStore, config: &Config, rng: &mut Rng) -> usize {
    if !store.is_empty() {
        tracing::debug!(sports = store.len(), "store already populated, not seeding");
        return 0;
    }

    let mut added = 0;
    for sport in &config.sports {
        store.add_sport(sport);
        for position in &sport.positions {
            let count = rng.range(config.seed.min_players..=config.seed.max_players);
            for spot in 0..count as usize {
                let player = Player::generate(rng, config, sport, position);
                store.add_player(sport, position, player, Some(spot));
                added += 1;
            }
        }
    }

    tracing::info!(
        sports = config.sports.len(),
        players = added,
        "seeded depth charts"
    );
    added
}

#[cfg(test)]
mod tests {
    use super::populate;
    use crate::{Config, DepthChartStore, Player, Rng, SeedConfig, Sport};

    fn seeded_config(min_players: u32, max_players: u32) -> Config {
        Config {
            seed: SeedConfig {
                min_players,
                max_players,
                rng_seed: Some((42, 4242)),
            },
            ..Config::default()
        }
    }

    #[test]
    fn fills_every_position() {
        let config = seeded_config(1, 4);
        let mut store = DepthChartStore::new();
        let added = populate(&mut store, &config, &mut config.rng().unwrap());

        assert_eq!(store.len(), 2);
        let mut total = 0;
        for sport in &config.sports {
            let chart = store.chart(&sport.name).unwrap();
            assert_eq!(chart.chart.len(), sport.positions.len());
            for position in &sport.positions {
                let players = store.players(sport, position);
                assert!((1..=4).contains(&players.len()), "{} {}", sport.name, position);
                for player in players {
                    assert_eq!(player.sport.as_deref(), Some(sport.name.as_str()));
                    assert_eq!(player.position.as_deref(), Some(position.as_str()));
                }
                total += players.len();
            }
        }
        assert_eq!(added, total);
    }

    #[test]
    fn same_seed_same_names() {
        let config = seeded_config(2, 3);
        let names = |store: &DepthChartStore| {
            store
                .snapshot()
                .iter()
                .flat_map(|chart| chart.chart.iter())
                .flat_map(|entry| entry.players.iter().map(|p| p.name.clone()))
                .collect::<Vec<_>>()
        };

        let mut a = DepthChartStore::new();
        populate(&mut a, &config, &mut config.rng().unwrap());
        let mut b = DepthChartStore::new();
        populate(&mut b, &config, &mut config.rng().unwrap());
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn exact_count() {
        let config = Config {
            sports: vec![Sport::nfl()],
            ..seeded_config(3, 3)
        };
        let mut store = DepthChartStore::new();
        assert_eq!(populate(&mut store, &config, &mut Rng::seeded(5, 6)), 24);
    }

    #[test]
    fn leaves_populated_store_alone() {
        let config = seeded_config(1, 4);
        let mut store = DepthChartStore::new();
        store.add_player(&Sport::nfl(), "QB", Player::new("1", "A"), None);
        let before = store.snapshot();

        assert_eq!(populate(&mut store, &config, &mut Rng::seeded(1, 2)), 0);
        assert!(before.ptr_eq(&store.snapshot()));
    }

    #[test]
    fn sport_without_positions_still_gets_a_chart() {
        let config = Config {
            sports: vec![Sport::new("Chess", Vec::<String>::new())],
            ..seeded_config(1, 4)
        };
        let mut store = DepthChartStore::new();
        assert_eq!(populate(&mut store, &config, &mut Rng::seeded(1, 2)), 0);
        assert!(store.chart("Chess").unwrap().chart.is_empty());
    }
}
