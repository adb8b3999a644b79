use bevy::prelude::*;
use platformer_game::{EntityKind, GameState};

// Entities/components
#[derive(Component, Default)]
pub struct Player;

// Small marker on the player's leading side so facing is visible
#[derive(Component)]
pub struct Visor;

#[derive(Component)]
pub struct LevelEntity; // marker to cleanup when switching levels

/// Links a sprite back to the core entity it draws.
#[derive(Component, Debug, Clone, Copy)]
pub struct TileSprite {
    pub kind: EntityKind,
    pub id: u32,
}

// UI markers
#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Score,
    Level,
    Health,
}

#[derive(Component)]
pub struct HudUi;

/// Full-screen page shown only while the game is in the wrapped state.
#[derive(Component)]
pub struct ScreenOverlay(pub GameState);
