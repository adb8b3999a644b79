//! Engine-free core of the platformer: level loading, physics, pickups,
//! camera tracking and the screen flow. A frontend feeds it `Controls` once
//! per frame and renders whatever `Game` exposes.

pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod level;
pub mod physics;
pub mod pickups;
pub mod player;
pub mod state;

pub use camera::Viewport;
pub use config::{load_config, GameConfig};
pub use controls::{Controls, Key};
pub use error::{LoadError, LoadResult};
pub use events::{GameEvent, SoundCue};
pub use game::Game;
pub use level::{DirMapSource, EntityKind, LevelData, MapSource, MemoryMapSource};
pub use player::{Facing, Player};
pub use state::GameState;
