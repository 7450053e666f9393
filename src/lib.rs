#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

mod chart;
pub mod config;
mod error;
pub mod id;
mod player;
mod rng;
pub mod seed;
mod sport;
mod stats;
mod store;
mod util;

pub use crate::chart::{DepthChart, DepthChartEntry};
pub use crate::config::{Config, SeedConfig};
pub use crate::error::{Error, Result};
pub use crate::id::PlayerId;
pub use crate::player::{Player, StatsCard};
pub use crate::rng::Rng;
pub use crate::sport::Sport;
pub use crate::stats::{Conversions, DistanceCovered, Performance, Possession};
pub use crate::store::{DepthChartStore, Snapshot};
pub use crate::util::Rank;
