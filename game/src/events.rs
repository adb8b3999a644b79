use crate::level::EntityKind;
use crate::state::GameState;

/// Audio cues the shell should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Any pickup: coins, hearts and poisons all share it.
    Coin,
    Jump,
    GameOver,
}

/// Something the shell has to react to after a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(SoundCue),
    ItemRemoved { kind: EntityKind, id: u32 },
    /// A fresh copy of `index` replaced the previous entity collections.
    LevelLoaded { index: u32 },
    StateChanged { from: GameState, to: GameState },
    Respawned,
}
