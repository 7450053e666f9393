use crate::Rng;
use serde::{Deserialize, Serialize};

/// Precomputed performance numbers shown alongside a player.
///
/// Nothing in the store reads these; they are carried for display.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Performance {
    #[serde(alias = "totalActions")]
    pub total_actions: u32,
    #[serde(alias = "successfulActions")]
    pub successful_actions: u32,
    /// Percentage, 0 to 100.
    #[serde(alias = "successRate")]
    pub success_rate: f64,
    #[serde(alias = "contestsWon")]
    pub contests_won: u32,
    pub conversions: Conversions,
    #[serde(alias = "distanceCovered")]
    pub distance_covered: DistanceCovered,
    pub possession: Possession,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Conversions {
    pub attempted: u32,
    pub successful: u32,
    pub rate: f64,
}

/// Distances in kilometres.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct DistanceCovered {
    pub total: f64,
    #[serde(alias = "highIntensity")]
    pub high_intensity: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Possession {
    #[serde(alias = "timeInSeconds")]
    pub time_in_seconds: u32,
    #[serde(alias = "percentageOfGame")]
    pub percentage_of_game: f64,
}

impl Performance {
    pub fn generate(rng: &mut Rng) -> Performance {
        let total_actions = rng.range(0..=100);
        let successful_actions = rng.range(0..=total_actions);
        let attempted = rng.range(0..=10);
        let successful = rng.range(0..=attempted);
        let total = round_to(rng.next_f64() * 12.0, 1);
        let time_in_seconds = rng.range(0..=5400);

        Performance {
            total_actions,
            successful_actions,
            success_rate: percent(successful_actions, total_actions),
            contests_won: rng.range(0..=successful_actions),
            conversions: Conversions {
                attempted,
                successful,
                rate: percent(successful, attempted),
            },
            distance_covered: DistanceCovered {
                total,
                high_intensity: round_to(total * rng.next_f64(), 1),
            },
            possession: Possession {
                time_in_seconds,
                percentage_of_game: percent(time_in_seconds, 5400),
            },
        }
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (f64::from(part) / f64::from(whole) * 100.0).round()
    }
}

fn round_to(n: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (n * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::{percent, Performance};
    use crate::Rng;

    #[test]
    fn generated_numbers_are_consistent() {
        let mut rng = Rng::seeded(0x5eed, 0xd1ce);
        for _ in 0..200 {
            let perf = Performance::generate(&mut rng);
            assert!(perf.successful_actions <= perf.total_actions);
            assert!(perf.contests_won <= perf.successful_actions);
            assert!((0.0..=100.0).contains(&perf.success_rate));
            assert!(perf.conversions.successful <= perf.conversions.attempted);
            assert!(perf.distance_covered.high_intensity <= perf.distance_covered.total);
            assert!(perf.possession.time_in_seconds <= 5400);
        }
    }

    #[test]
    fn percent_of_nothing_is_zero() {
        assert!(percent(0, 0).abs() < f64::EPSILON);
        assert!((percent(8, 10) - 80.0).abs() < f64::EPSILON);
        assert!((percent(1, 3) - 33.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reads_camel_case_payloads() {
        let perf: Performance = serde_json::from_str(
            r#"{
                "totalActions": 10,
                "successfulActions": 8,
                "successRate": 80,
                "contestsWon": 2,
                "conversions": { "attempted": 1, "successful": 1, "rate": 100 },
                "distanceCovered": { "total": 100, "highIntensity": 20 },
                "possession": { "timeInSeconds": 300, "percentageOfGame": 50 }
            }"#,
        )
        .unwrap();
        assert_eq!(perf.total_actions, 10);
        assert_eq!(perf.successful_actions, 8);
        assert_eq!(perf.contests_won, 2);
        assert_eq!(perf.possession.time_in_seconds, 300);
        assert!((perf.distance_covered.high_intensity - 20.0).abs() < f64::EPSILON);
    }
}
