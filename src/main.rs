use bevy::prelude::*;

use platformer_game::{load_config, DirMapSource, Game};

mod components;
mod resources;
mod systems;

use resources::{CoreEvent, PendingControls, Session};
use systems::audio::{load_sounds, play_cues_system};
use systems::camera::camera_follow_system;
use systems::levels::level_sync_system;
use systems::player::{game_tick_system, player_input_system, sync_player_system};
use systems::startup::setup;
use systems::ui::{screen_visibility_system, update_hud_system};

// The core advances one frame per fixed tick
const TICK_HZ: f64 = 60.0;

fn main() -> AppExit {
    // Defaults are overridden by config.toml if present
    let cfg = load_config("config.toml");
    let screen = cfg.screen.clone();
    let maps_dir = cfg.level.maps_dir.clone();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: screen.title.clone(),
                    resolution: (screen.width, screen.height).into(),
                    resizable: true,
                    present_mode: bevy::window::PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    let source = DirMapSource::new(maps_dir);
    info!("reading levels from {}", source.root().display());
    let game = match Game::new(cfg, source) {
        Ok(game) => game,
        Err(e) => {
            error!("could not start: {}", e);
            return AppExit::error();
        }
    };

    app.insert_resource(Session(game))
        .init_resource::<PendingControls>()
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .add_event::<CoreEvent>()
        .add_systems(Startup, (setup, load_sounds))
        .add_systems(FixedUpdate, game_tick_system)
        .add_systems(
            Update,
            (
                player_input_system,
                (level_sync_system, play_cues_system),
                (sync_player_system, camera_follow_system, update_hud_system, screen_visibility_system),
            )
                .chain(),
        )
        .run()
}
