use crate::id::PlayerId;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no depth chart for sport {0:?}")]
    SportNotFound(String),
    #[error("no {position:?} entry in the {sport} depth chart")]
    PositionNotFound { sport: String, position: String },
    #[error("player {player} is not listed at {sport} {position}")]
    PlayerNotFound {
        sport: String,
        position: String,
        player: PlayerId,
    },
    #[error("depth charts are inconsistent:\n{0}")]
    Inconsistent(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to get random seed: {0}")]
    Entropy(#[from] getrandom::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
