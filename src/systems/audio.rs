use bevy::prelude::*;

use platformer_game::{GameEvent, SoundCue};

use crate::resources::{CoreEvent, SoundAssets};

pub fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        coin: asset_server.load("sounds/coin1.wav"),
        jump: asset_server.load("sounds/jump1.wav"),
        game_over: asset_server.load("sounds/gameover1.wav"),
    });
}

pub fn play_cues_system(mut commands: Commands, sounds: Res<SoundAssets>, mut ev_core: EventReader<CoreEvent>) {
    for CoreEvent(ev) in ev_core.read() {
        let GameEvent::Sound(cue) = ev else { continue };
        let source = match cue {
            SoundCue::Coin => sounds.coin.clone(),
            SoundCue::Jump => sounds.jump.clone(),
            SoundCue::GameOver => sounds.game_over.clone(),
        };
        commands.spawn(AudioBundle { source, settings: PlaybackSettings::DESPAWN });
    }
}
