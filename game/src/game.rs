use crate::camera::Viewport;
use crate::config::GameConfig;
use crate::controls::Controls;
use crate::error::{LoadError, LoadResult};
use crate::events::{GameEvent, SoundCue};
use crate::level::{load_level, LevelData, MapSource};
use crate::physics::PhysicsEngine;
use crate::pickups::{self, Stats};
use crate::player::Player;
use crate::state::{ClickAction, GameState};

/// The whole game: one owned aggregate the shell drives a tick at a time.
pub struct Game<S: MapSource> {
    config: GameConfig,
    source: S,
    physics: PhysicsEngine,
    state: GameState,
    level: LevelData,
    player: Player,
    viewport: Viewport,
    stats: Stats,
}

impl<S: MapSource> Game<S> {
    /// Load level 1 up front so a missing first map fails at startup, then
    /// wait on the first instructions page.
    pub fn new(config: GameConfig, source: S) -> LoadResult<Self> {
        let level = load_level(&source, 1, config.level.tile_scaling)?;
        Ok(Self {
            physics: PhysicsEngine::new(&config.physics),
            player: Player::new(&config.player),
            stats: Stats { score: 0, health: config.level.starting_health },
            state: GameState::InstructionsPage0,
            viewport: Viewport::default(),
            level,
            config,
            source,
        })
    }

    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn state(&self) -> GameState { self.state }
    pub fn level(&self) -> &LevelData { &self.level }
    pub fn player(&self) -> &Player { &self.player }
    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn stats(&self) -> Stats { self.stats }
    pub fn score(&self) -> u32 { self.stats.score }
    pub fn health(&self) -> i32 { self.stats.health }
    pub fn level_index(&self) -> u32 { self.level.index }

    /// Direct access to the player, for placing it outside normal play.
    pub fn player_mut(&mut self) -> &mut Player { &mut self.player }

    pub fn can_jump(&self) -> bool {
        self.physics.can_jump(&self.player, &self.level.walls)
    }

    /// Run one frame. Clicks drive the screen flow; everything else only
    /// matters while the game is running.
    pub fn tick(&mut self, controls: &mut Controls) -> LoadResult<Vec<GameEvent>> {
        let mut events = Vec::new();

        if controls.take_click() {
            match self.state.on_click() {
                ClickAction::NextPage => self.set_state(GameState::InstructionsPage1, &mut events),
                ClickAction::Restart => {
                    self.setup(1, &mut events)?;
                    self.set_state(GameState::Running, &mut events);
                }
                ClickAction::Ignore => {}
            }
        }

        if self.state != GameState::Running {
            controls.clear_movement();
            return Ok(events);
        }

        self.update(controls, &mut events)?;
        Ok(events)
    }

    fn update(&mut self, controls: &mut Controls, events: &mut Vec<GameEvent>) -> LoadResult<()> {
        let screen = &self.config.screen;

        self.player.change_x = controls.horizontal.sign() * self.physics.movement_speed;
        if controls.take_jump() && self.physics.try_jump(&mut self.player, &self.level.walls) {
            events.push(GameEvent::Sound(SoundCue::Jump));
        }
        self.physics.step(&mut self.player, &self.level.walls, screen.width, screen.height);

        pickups::collect(&self.player.bounds(), &mut self.level, &mut self.stats, events);

        // Set whenever the camera snapped back to the origin this frame
        let mut camera_reset = false;

        if self.player.center_y < self.config.player.fall_limit {
            tracing::debug!("fell off level {} at x={}", self.level.index, self.player.center_x);
            self.lose_life(events);
            camera_reset = true;
        }

        if pickups::touches_any(&self.player.bounds(), &self.level.hazards) {
            tracing::debug!("touched a hazard on level {}", self.level.index);
            self.lose_life(events);
            camera_reset = true;
        }

        if self.stats.health < 0 {
            self.set_state(GameState::Lost, events);
            self.respawn();
            events.push(GameEvent::Sound(SoundCue::GameOver));
            return Ok(());
        }

        if self.player.center_x >= self.level.end_of_map {
            if self.level.index >= self.config.level.max_level {
                self.set_state(GameState::Won, events);
            } else {
                self.setup(self.level.index + 1, events)?;
            }
            self.viewport.reset();
            camera_reset = true;
        }

        if !camera_reset && self.viewport.track(&self.player, &self.config.camera, &self.config.screen) {
            tracing::trace!("view scrolled to ({}, {})", self.viewport.left, self.viewport.bottom);
        }
        Ok(())
    }

    /// Swap in a fresh copy of `index`. Starting at level 1 also starts a new
    /// playthrough, so score and health reset only then.
    fn setup(&mut self, index: u32, events: &mut Vec<GameEvent>) -> LoadResult<()> {
        let max = self.config.level.max_level;
        if index == 0 || index > max {
            return Err(LoadError::LevelOutOfRange { level: index, max });
        }
        self.level = load_level(&self.source, index, self.config.level.tile_scaling)?;
        if index == 1 {
            self.stats = Stats { score: 0, health: self.config.level.starting_health };
        }
        self.player = Player::new(&self.config.player);
        self.viewport.reset();
        events.push(GameEvent::LevelLoaded { index });
        Ok(())
    }

    fn respawn(&mut self) {
        self.player.respawn(self.config.player.start_x, self.config.player.start_y);
        self.viewport.reset();
    }

    fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        self.respawn();
        self.stats.health -= 1;
        events.push(GameEvent::Respawned);
        events.push(GameEvent::Sound(SoundCue::GameOver));
    }

    fn set_state(&mut self, to: GameState, events: &mut Vec<GameEvent>) {
        let from = self.state;
        if from == to {
            return;
        }
        tracing::info!("game state {:?} -> {:?} (level {}, score {}, health {})",
            from, to, self.level.index, self.stats.score, self.stats.health);
        self.state = to;
        events.push(GameEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Key;
    use crate::level::MemoryMapSource;
    use level_format::TileMap;

    // 25 columns, floor along the bottom row
    fn flat_map() -> TileMap {
        let floor = "#".repeat(25);
        let empty = ".".repeat(25);
        let layer = |name: &str, rows: [&str; 4]| level_format::Layer {
            name: name.to_string(),
            data: rows.iter().map(|r| r.to_string()).collect(),
        };
        let e = empty.as_str();
        let blank = [e; 4];
        TileMap {
            meta: level_format::Meta { name: "flat".into(), background_color: None },
            grid: level_format::Grid { columns: 25, rows: 4, tile_size: 128.0 },
            layers: vec![
                layer("Platforms", [e, e, e, floor.as_str()]),
                layer("Coins", blank),
                layer("Foreground", blank),
                layer("Background", blank),
                layer("Poisons", blank),
                layer("Don't Touch", blank),
                layer("Hearts", blank),
            ],
        }
    }

    fn game() -> Game<MemoryMapSource> {
        let mut src = MemoryMapSource::new();
        for i in 1..=10 {
            src.insert(i, flat_map());
        }
        Game::new(GameConfig::default(), src).unwrap()
    }

    fn click(g: &mut Game<MemoryMapSource>) -> Vec<GameEvent> {
        let mut c = Controls::default();
        c.click();
        g.tick(&mut c).unwrap()
    }

    #[test]
    fn two_clicks_start_the_game() {
        let mut g = game();
        assert_eq!(g.state(), GameState::InstructionsPage0);
        click(&mut g);
        assert_eq!(g.state(), GameState::InstructionsPage1);
        let events = click(&mut g);
        assert_eq!(g.state(), GameState::Running);
        assert!(events.contains(&GameEvent::LevelLoaded { index: 1 }));
        assert_eq!(g.stats(), Stats { score: 0, health: 5 });
    }

    #[test]
    fn movement_keys_are_ignored_on_menu_pages() {
        let mut g = game();
        let mut c = Controls::default();
        c.key_down(Key::Right);
        g.tick(&mut c).unwrap();
        assert_eq!(c, Controls::default());
        assert_eq!(g.player().center_x, 80.0);
    }

    #[test]
    fn running_click_is_a_no_op() {
        let mut g = game();
        click(&mut g);
        click(&mut g);
        let events = click(&mut g);
        assert_eq!(g.state(), GameState::Running);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::StateChanged { .. })));
    }

    #[test]
    fn jump_plays_cue_only_from_the_floor() {
        let mut g = game();
        click(&mut g);
        click(&mut g);
        let mut c = Controls::default();
        c.key_down(Key::Up);
        let events = g.tick(&mut c).unwrap();
        assert!(!events.contains(&GameEvent::Sound(SoundCue::Jump)));

        for _ in 0..120 {
            g.tick(&mut c).unwrap();
        }
        assert!(g.can_jump());
        c.key_down(Key::W);
        let events = g.tick(&mut c).unwrap();
        assert!(events.contains(&GameEvent::Sound(SoundCue::Jump)));
        assert!(g.player().change_y > 0.0);
    }

    #[test]
    fn walking_right_scrolls_the_camera() {
        let mut g = game();
        click(&mut g);
        click(&mut g);
        let mut c = Controls::default();
        c.key_down(Key::D);
        for _ in 0..130 {
            g.tick(&mut c).unwrap();
        }
        let p = g.player();
        let v = g.viewport();
        assert!(p.center_x > 1000.0);
        assert!(v.left > 0);
        assert!(p.right() <= v.left as f32 + 1280.0 - 200.0 + 1.0);
    }

    #[test]
    fn restart_resets_score_and_health() {
        let mut g = game();
        click(&mut g);
        click(&mut g);
        g.stats = Stats { score: 7, health: -1 };
        g.state = GameState::Lost;
        click(&mut g);
        assert_eq!(g.state(), GameState::Running);
        assert_eq!(g.stats(), Stats { score: 0, health: 5 });
        assert_eq!(g.level_index(), 1);
    }

    #[test]
    fn missing_next_map_is_fatal() {
        let src = MemoryMapSource::new().with_map(1, flat_map());
        let mut g = Game::new(GameConfig::default(), src).unwrap();
        click(&mut g);
        click(&mut g);
        g.player_mut().center_x = g.level().end_of_map;
        let err = g.tick(&mut Controls::default()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownLevel { level: 2 }));
    }

    #[test]
    fn missing_first_map_fails_construction() {
        assert!(Game::new(GameConfig::default(), MemoryMapSource::new()).is_err());
    }
}
