use crate::id::PlayerId;
use crate::{DepthChart, Error, Player, Result, Sport};
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// An immutable view of every depth chart at one point in time.
///
/// The store never mutates a snapshot it has handed out: each write builds a new collection and
/// swaps it in, so two snapshots share storage exactly when nothing changed in between.
#[derive(Debug, Default, Clone, Deref)]
#[deref(forward)]
pub struct Snapshot(Arc<Vec<DepthChart>>);

impl Snapshot {
    fn new(charts: Vec<DepthChart>) -> Snapshot {
        Snapshot(Arc::new(charts))
    }

    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_vec(&self) -> Vec<DepthChart> {
        Vec::clone(&self.0)
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Snapshot) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

/// Roster state for every sport: sport → positions → ranked players.
///
/// Lookups that miss are silent: writes become no-ops and reads come back empty. The `try_*`
/// methods report the miss instead.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DepthChartStore {
    #[serde(
        rename = "depth_charts",
        alias = "depthCharts",
        serialize_with = "serialize_charts",
        deserialize_with = "deserialize_charts"
    )]
    charts: Snapshot,
    #[serde(skip)]
    generation: u64,
}

impl DepthChartStore {
    pub fn new() -> DepthChartStore {
        DepthChartStore::default()
    }

    /// Incremented by every write, no-ops included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> Snapshot {
        self.charts.clone()
    }

    /// Number of sports with a chart.
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn chart(&self, sport_name: &str) -> Option<&DepthChart> {
        self.charts.iter().find(|chart| chart.sport.name == sport_name)
    }

    /// The ranked players at `position`, empty if the sport or position has no entry.
    pub fn players(&self, sport: &Sport, position: &str) -> &[Player] {
        self.chart(&sport.name)
            .and_then(|chart| chart.entry(position))
            .map(|entry| entry.players.as_slice())
            .unwrap_or_default()
    }

    fn update<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Vec<DepthChart>) -> T,
    {
        let mut charts = self.charts.to_vec();
        let result = f(&mut charts);
        self.charts = Snapshot::new(charts);
        self.generation += 1;
        debug_assert!(
            check_consistency(&self.charts).is_ok(),
            "{:?}",
            check_consistency(&self.charts)
        );
        result
    }

    /// Ensures `sport` has a chart. An existing chart is left exactly as it is.
    pub fn add_sport(&mut self, sport: &Sport) {
        self.update(|charts| {
            if charts.iter().any(|chart| chart.sport.name == sport.name) {
                tracing::trace!(sport = %sport.name, "sport already has a depth chart");
            } else {
                tracing::debug!(sport = %sport.name, "adding sport");
                charts.push(DepthChart::new(sport.clone()));
            }
        });
    }

    /// Places `player` at `position`, creating the sport's chart and the position's entry as
    /// needed.
    ///
    /// With no `spot` the player goes to the bottom of the entry. Otherwise it takes that rank and
    /// everyone from there down moves one lower; a spot past the end appends. Neither the position
    /// nor the uniqueness of the player's id is checked.
    pub fn add_player(
        &mut self,
        sport: &Sport,
        position: &str,
        player: Player,
        spot: Option<usize>,
    ) {
        self.update(|charts| {
            let idx = match charts.iter().position(|chart| chart.sport.name == sport.name) {
                Some(idx) => idx,
                None => {
                    tracing::debug!(sport = %sport.name, "creating depth chart");
                    charts.push(DepthChart::new(sport.clone()));
                    charts.len() - 1
                }
            };
            let entry = charts[idx].entry_or_insert(position);
            tracing::debug!(
                sport = %sport.name,
                position,
                player = %player.id,
                ?spot,
                "adding player"
            );
            entry.insert(player, spot);
            tracing::debug!(len = entry.players.len(), "entry updated");
        });
    }

    /// Removes every player with `player_id` from the entry. Missing sports or positions are
    /// ignored.
    pub fn remove_player(&mut self, sport: &Sport, position: &str, player_id: &PlayerId) {
        self.update(|charts| {
            match find_entry_mut(charts, sport, position) {
                Some(entry) => {
                    let removed = entry.remove(player_id);
                    tracing::debug!(
                        sport = %sport.name,
                        position,
                        player = %player_id,
                        removed,
                        "removing player"
                    );
                }
                None => {
                    tracing::trace!(sport = %sport.name, position, "no entry to remove from");
                }
            }
        });
    }

    /// Like [`DepthChartStore::remove_player`], but reports what could not be found and returns
    /// how many players were removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SportNotFound`], [`Error::PositionNotFound`] or [`Error::PlayerNotFound`]
    /// for the first lookup that misses. The store is left untouched in that case.
    pub fn try_remove_player(
        &mut self,
        sport: &Sport,
        position: &str,
        player_id: &PlayerId,
    ) -> Result<usize> {
        let entry = self.lookup(sport, position)?;
        if entry.rank_of(player_id).is_none() {
            return Err(player_not_found(sport, position, player_id));
        }
        Ok(self.update(|charts| {
            find_entry_mut(charts, sport, position).map_or(0, |entry| entry.remove(player_id))
        }))
    }

    /// All charts, or only the one for `sport` when a filter is given.
    pub fn get_full_depth_chart(&self, sport: Option<&Sport>) -> Snapshot {
        match sport {
            None => self.snapshot(),
            Some(sport) => Snapshot::new(
                self.charts
                    .iter()
                    .filter(|chart| chart.sport.name == sport.name)
                    .cloned()
                    .collect(),
            ),
        }
    }

    /// The players ranked strictly below the first player with `player_id`, in rank order.
    pub fn get_players_below(
        &self,
        sport: &Sport,
        position: &str,
        player_id: &PlayerId,
    ) -> Vec<Player> {
        self.try_players_below(sport, position, player_id)
            .unwrap_or_else(|err| {
                tracing::trace!(%err, "no players below");
                Vec::new()
            })
    }

    /// # Errors
    ///
    /// Returns [`Error::SportNotFound`], [`Error::PositionNotFound`] or [`Error::PlayerNotFound`]
    /// for the first lookup that misses.
    pub fn try_players_below(
        &self,
        sport: &Sport,
        position: &str,
        player_id: &PlayerId,
    ) -> Result<Vec<Player>> {
        let entry = self.lookup(sport, position)?;
        let rank = entry
            .rank_of(player_id)
            .ok_or_else(|| player_not_found(sport, position, player_id))?;
        Ok(entry.players[rank + 1..].to_vec())
    }

    fn lookup(&self, sport: &Sport, position: &str) -> Result<&crate::DepthChartEntry> {
        self.chart(&sport.name)
            .ok_or_else(|| Error::SportNotFound(sport.name.clone()))?
            .entry(position)
            .ok_or_else(|| Error::PositionNotFound {
                sport: sport.name.clone(),
                position: position.to_owned(),
            })
    }

    /// Checks that no sport has two charts and no chart has two entries for one position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inconsistent`] listing every problem found.
    pub fn check_consistency(&self) -> Result<()> {
        check_consistency(&self.charts)
    }
}

fn find_entry_mut<'a>(
    charts: &'a mut [DepthChart],
    sport: &Sport,
    position: &str,
) -> Option<&'a mut crate::DepthChartEntry> {
    charts
        .iter_mut()
        .find(|chart| chart.sport.name == sport.name)
        .and_then(|chart| chart.entry_mut(position))
}

fn player_not_found(sport: &Sport, position: &str, player_id: &PlayerId) -> Error {
    Error::PlayerNotFound {
        sport: sport.name.clone(),
        position: position.to_owned(),
        player: player_id.clone(),
    }
}

// Charts live in plain vectors keyed by name, which keeps them cheap to clone for each snapshot
// but lets duplicates slip in through deserialization or a bug in a write. These are the
// invariants we hold the collection to; they're checked when a store is deserialized and, with
// debug assertions enabled, after every write.
fn check_consistency(charts: &[DepthChart]) -> Result<()> {
    let mut problems = Vec::new();

    for (idx, chart) in charts.iter().enumerate() {
        if charts[..idx]
            .iter()
            .any(|other| other.sport.name == chart.sport.name)
        {
            problems.push(format!("- sport {:?} has more than one chart", chart.sport.name));
        }
        for (pos_idx, entry) in chart.chart.iter().enumerate() {
            if chart.chart[..pos_idx]
                .iter()
                .any(|other| other.position == entry.position)
            {
                problems.push(format!(
                    "- {} position {:?} has more than one entry",
                    chart.sport.name, entry.position
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::Inconsistent(problems.join("\n")))
    }
}

fn serialize_charts<S>(charts: &Snapshot, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    charts.as_slice().serialize(serializer)
}

fn deserialize_charts<'de, D>(deserializer: D) -> Result<Snapshot, D::Error>
where
    D: Deserializer<'de>,
{
    let charts = Vec::<DepthChart>::deserialize(deserializer)?;
    check_consistency(&charts).map_err(serde::de::Error::custom)?;
    Ok(Snapshot::new(charts))
}
