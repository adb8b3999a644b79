use std::path::PathBuf;

use level_format::FormatError;

/// Failures while bringing a level into memory. All of them are fatal to the
/// running game; gameplay outcomes (falling, dying, winning) are state
/// transitions and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("missing map asset {}: {source}", path.display())]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("level {level} has no map")]
    UnknownLevel { level: u32 },
    #[error("level {level} is missing required layer '{layer}'")]
    MissingLayer { level: u32, layer: &'static str },
    #[error("level {level} map is malformed: {source}")]
    Malformed {
        level: u32,
        #[source]
        source: FormatError,
    },
    #[error("level {level} is outside 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },
}

pub type LoadResult<T> = Result<T, LoadError>;
