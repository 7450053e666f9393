use serde::{Deserialize, Serialize};

/// A sport and the positions that make up its depth chart.
///
/// `name` is the key a store uses to find the sport's chart. The position list is informational:
/// the store accepts players at positions that are not listed here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sport {
    pub name: String,
    pub positions: Vec<String>,
}

impl Sport {
    pub fn new<I>(name: impl Into<String>, positions: I) -> Sport
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Sport {
            name: name.into(),
            positions: positions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nfl() -> Sport {
        Sport::new("NFL", ["QB", "WR", "RB", "TE", "K", "P", "KR", "PR"])
    }

    pub fn soccer() -> Sport {
        Sport::new(
            "Soccer",
            ["GK", "RB", "LB", "CDM", "CAM", "RW", "LW", "SS", "ST"],
        )
    }

    pub fn has_position(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p == position)
    }
}
