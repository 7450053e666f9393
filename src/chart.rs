use crate::id::PlayerId;
use crate::{Player, Sport};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The ranked players at one position. Index 0 is the starter.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct DepthChartEntry {
    pub position: String,
    pub players: Vec<Player>,
}

impl DepthChartEntry {
    pub fn new(position: impl Into<String>) -> DepthChartEntry {
        DepthChartEntry {
            position: position.into(),
            players: Vec::new(),
        }
    }

    /// Inserts at `spot`, or appends when `spot` is `None` or past the end.
    pub(crate) fn insert(&mut self, player: Player, spot: Option<usize>) {
        match spot {
            Some(spot) if spot < self.players.len() => self.players.insert(spot, player),
            _ => self.players.push(player),
        }
    }

    /// Drops every player carrying `id` and returns how many went.
    pub(crate) fn remove(&mut self, id: &PlayerId) -> usize {
        let before = self.players.len();
        self.players.retain(|player| player.id != *id);
        before - self.players.len()
    }

    pub fn rank_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == *id)
    }

    pub fn starter(&self) -> Option<&Player> {
        self.players.first()
    }
}

/// One sport's depth chart. Entries appear in the order their positions were first used.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct DepthChart {
    pub sport: Sport,
    pub chart: Vec<DepthChartEntry>,
}

impl DepthChart {
    pub fn new(sport: Sport) -> DepthChart {
        DepthChart {
            sport,
            chart: Vec::new(),
        }
    }

    pub fn entry(&self, position: &str) -> Option<&DepthChartEntry> {
        self.chart.iter().find(|entry| entry.position == position)
    }

    pub(crate) fn entry_mut(&mut self, position: &str) -> Option<&mut DepthChartEntry> {
        self.chart.iter_mut().find(|entry| entry.position == position)
    }

    pub(crate) fn entry_or_insert(&mut self, position: &str) -> &mut DepthChartEntry {
        let idx = match self.chart.iter().position(|entry| entry.position == position) {
            Some(idx) => idx,
            None => {
                self.chart.push(DepthChartEntry::new(position));
                self.chart.len() - 1
            }
        };
        &mut self.chart[idx]
    }
}

impl Display for DepthChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Depth Chart", self.sport.name)?;
        for entry in &self.chart {
            write!(f, "\n{}: ", entry.position)?;
            if entry.players.is_empty() {
                write!(f, "-")?;
            }
            for (idx, player) in entry.players.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", player.name)?;
            }
        }
        Ok(())
    }
}
