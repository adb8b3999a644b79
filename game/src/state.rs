/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InstructionsPage0,
    InstructionsPage1,
    Running,
    Lost,
    Won,
}

/// What a click in a given state asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    NextPage,
    /// Start over from level 1 with fresh score and health.
    Restart,
    Ignore,
}

impl GameState {
    pub fn on_click(self) -> ClickAction {
        match self {
            GameState::InstructionsPage0 => ClickAction::NextPage,
            GameState::InstructionsPage1 | GameState::Lost | GameState::Won => ClickAction::Restart,
            GameState::Running => ClickAction::Ignore,
        }
    }

    /// Whether the level, player and HUD are drawn.
    pub fn shows_world(self) -> bool {
        matches!(self, GameState::Running | GameState::Lost | GameState::Won)
    }
}
