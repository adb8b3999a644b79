use crate::config::PlayerCfg;
use crate::geometry::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The only moving sprite. Positions are pixel coordinates of the sprite
/// centre; velocities are pixels per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub center_x: f32,
    pub center_y: f32,
    pub change_x: f32,
    pub change_y: f32,
    pub facing: Facing,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(cfg: &PlayerCfg) -> Self {
        Self {
            center_x: cfg.start_x,
            center_y: cfg.start_y,
            change_x: 0.0,
            change_y: 0.0,
            facing: Facing::Right,
            width: cfg.sprite_width * cfg.character_scaling,
            height: cfg.sprite_height * cfg.character_scaling,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.center_x, self.center_y, self.width, self.height)
    }

    pub fn left(&self) -> f32 { self.center_x - self.width / 2.0 }
    pub fn right(&self) -> f32 { self.center_x + self.width / 2.0 }
    pub fn bottom(&self) -> f32 { self.center_y - self.height / 2.0 }
    pub fn top(&self) -> f32 { self.center_y + self.height / 2.0 }

    /// Put the player back at `(x, y)` at rest.
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.center_x = x;
        self.center_y = y;
        self.change_x = 0.0;
        self.change_y = 0.0;
    }

    /// Face whichever way the player is currently moving; standing still keeps
    /// the last facing.
    pub fn update_facing(&mut self) {
        if self.change_x < 0.0 {
            self.facing = Facing::Left;
        } else if self.change_x > 0.0 {
            self.facing = Facing::Right;
        }
    }

    /// Keep the sprite inside `[0, width - 1]` horizontally and below
    /// `height - 1`. There is no floor: falling off the bottom is how the game
    /// detects a lost life.
    pub fn clamp_to_screen(&mut self, width: f32, height: f32) {
        if self.left() < 0.0 {
            self.center_x = self.width / 2.0;
        } else if self.right() > width - 1.0 {
            self.center_x = width - 1.0 - self.width / 2.0;
        }
        if self.top() > height - 1.0 {
            self.center_y = height - 1.0 - self.height / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerCfg::default())
    }

    #[test]
    fn starts_at_spawn_facing_right() {
        let p = player();
        assert_eq!((p.center_x, p.center_y), (80.0, 294.0));
        assert_eq!(p.facing, Facing::Right);
        assert!((p.width - 76.8).abs() < 1e-4);
        assert!((p.height - 102.4).abs() < 1e-4);
    }

    #[test]
    fn facing_follows_horizontal_velocity() {
        let mut p = player();
        p.change_x = -8.0;
        p.update_facing();
        assert_eq!(p.facing, Facing::Left);
        p.change_x = 0.0;
        p.update_facing();
        assert_eq!(p.facing, Facing::Left);
        p.change_x = 8.0;
        p.update_facing();
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn clamp_keeps_horizontal_range_but_not_floor() {
        let mut p = player();
        p.center_x = -50.0;
        p.center_y = -500.0;
        p.clamp_to_screen(1280.0, 720.0);
        assert_eq!(p.left(), 0.0);
        assert_eq!(p.center_y, -500.0);

        p.center_x = 5000.0;
        p.center_y = 5000.0;
        p.clamp_to_screen(1280.0, 720.0);
        assert!((p.right() - 1279.0).abs() < 1e-3);
        assert!((p.top() - 719.0).abs() < 1e-3);
    }

    #[test]
    fn respawn_resets_position_and_velocity() {
        let mut p = player();
        p.center_x = 600.0;
        p.change_y = -35.0;
        p.respawn(80.0, 294.0);
        assert_eq!((p.center_x, p.center_y, p.change_x, p.change_y), (80.0, 294.0, 0.0, 0.0));
    }
}
