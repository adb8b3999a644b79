use bevy::prelude::*;
use platformer_game::{Controls, DirMapSource, Game, GameEvent};

// World constants
pub const PLAYER_Z: f32 = 6.0;
pub const VISOR_SIZE: Vec2 = Vec2::new(14.0, 10.0);

// Game-wide resources
#[derive(Resource)]
pub struct Session(pub Game<DirMapSource>);

/// Input collected since the last fixed tick.
#[derive(Resource, Default)]
pub struct PendingControls(pub Controls);

#[derive(Resource)]
pub struct SoundAssets {
    pub coin: Handle<AudioSource>,
    pub jump: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
}

/// Core events re-broadcast to the render side.
#[derive(Event, Debug, Clone)]
pub struct CoreEvent(pub GameEvent);
