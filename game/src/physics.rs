use crate::config::PhysicsCfg;
use crate::level::Entity;
use crate::player::Player;

// Overlap smaller than this is treated as resting contact
const CONTACT_EPSILON: f32 = 1e-3;

/// Platformer integrator: constant gravity, walls are solid from every side.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    pub gravity: f32,
    pub jump_speed: f32,
    pub movement_speed: f32,
}

impl PhysicsEngine {
    pub fn new(cfg: &PhysicsCfg) -> Self {
        Self { gravity: cfg.gravity, jump_speed: cfg.jump_speed, movement_speed: cfg.movement_speed }
    }

    /// True when the player stands on a wall: not moving vertically and a wall
    /// lies directly below the feet.
    pub fn can_jump(&self, player: &Player, walls: &[Entity]) -> bool {
        if player.change_y != 0.0 {
            return false;
        }
        let probe = player.bounds().translated(0.0, -1.0);
        walls.iter().any(|w| probe.penetration(&w.bounds, CONTACT_EPSILON).is_some())
    }

    /// Start a jump if standing on something. Returns whether it happened.
    pub fn try_jump(&self, player: &mut Player, walls: &[Entity]) -> bool {
        if self.can_jump(player, walls) {
            player.change_y = self.jump_speed;
            true
        } else {
            false
        }
    }

    /// Advance one frame: gravity, vertical move and resolve, horizontal move
    /// and resolve, then keep the player on screen.
    pub fn step(&self, player: &mut Player, walls: &[Entity], screen_width: f32, screen_height: f32) {
        player.change_y -= self.gravity;
        player.update_facing();

        player.center_y += player.change_y;
        let mut landed_on: Option<f32> = None;
        let mut bumped_into: Option<f32> = None;
        for wall in walls {
            if player.bounds().penetration(&wall.bounds, CONTACT_EPSILON).is_none() {
                continue;
            }
            if player.change_y <= 0.0 {
                let top = wall.bounds.top();
                landed_on = Some(landed_on.map_or(top, |t| t.max(top)));
            } else {
                let bottom = wall.bounds.bottom();
                bumped_into = Some(bumped_into.map_or(bottom, |b| b.min(bottom)));
            }
        }
        if let Some(top) = landed_on {
            player.center_y = top + player.height / 2.0;
            player.change_y = 0.0;
        } else if let Some(bottom) = bumped_into {
            player.center_y = bottom - player.height / 2.0;
            player.change_y = 0.0;
        }

        player.center_x += player.change_x;
        let mut stop_at: Option<f32> = None;
        for wall in walls {
            if player.bounds().penetration(&wall.bounds, CONTACT_EPSILON).is_none() {
                continue;
            }
            if player.change_x > 0.0 {
                let left = wall.bounds.left() - player.width / 2.0;
                stop_at = Some(stop_at.map_or(left, |x| x.min(left)));
            } else if player.change_x < 0.0 {
                let right = wall.bounds.right() + player.width / 2.0;
                stop_at = Some(stop_at.map_or(right, |x| x.max(right)));
            }
        }
        if let Some(x) = stop_at {
            player.center_x = x;
            player.change_x = 0.0;
        }

        player.clamp_to_screen(screen_width, screen_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerCfg;
    use crate::geometry::Aabb;
    use crate::level::EntityKind;

    fn wall(id: u32, x: f32, y: f32) -> Entity {
        Entity { id, kind: EntityKind::Wall, glyph: '#', bounds: Aabb::new(x, y, 51.2, 51.2) }
    }

    fn floor() -> Vec<Entity> {
        (0..10).map(|i| wall(i, 25.6 + i as f32 * 51.2, 25.6)).collect()
    }

    fn engine() -> PhysicsEngine {
        PhysicsEngine::new(&PhysicsCfg::default())
    }

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(&PlayerCfg::default());
        p.center_x = x;
        p.center_y = y;
        p
    }

    fn settle(engine: &PhysicsEngine, p: &mut Player, walls: &[Entity]) {
        for _ in 0..120 {
            engine.step(p, walls, 1280.0, 720.0);
        }
    }

    #[test]
    fn gravity_accelerates_free_fall() {
        let e = engine();
        let mut p = player_at(300.0, 400.0);
        e.step(&mut p, &[], 1280.0, 720.0);
        assert!((p.change_y + 1.2).abs() < 1e-5);
        assert!((p.center_y - 398.8).abs() < 1e-4);
        e.step(&mut p, &[], 1280.0, 720.0);
        assert!((p.change_y + 2.4).abs() < 1e-5);
    }

    #[test]
    fn lands_on_top_of_floor_and_can_jump() {
        let e = engine();
        let walls = floor();
        let mut p = player_at(200.0, 294.0);
        assert!(!e.can_jump(&p, &walls));
        settle(&e, &mut p, &walls);
        assert_eq!(p.change_y, 0.0);
        assert!((p.bottom() - 51.2).abs() < 1e-3);
        assert!(e.can_jump(&p, &walls));
    }

    #[test]
    fn jump_only_from_the_ground() {
        let e = engine();
        let walls = floor();
        let mut p = player_at(200.0, 294.0);
        assert!(!e.try_jump(&mut p, &walls));
        settle(&e, &mut p, &walls);
        assert!(e.try_jump(&mut p, &walls));
        assert_eq!(p.change_y, 20.0);
        e.step(&mut p, &walls, 1280.0, 720.0);
        assert!(p.bottom() > 51.2);
        assert!(!e.can_jump(&p, &walls));
    }

    #[test]
    fn walks_along_floor_without_snagging_on_tile_seams() {
        let e = engine();
        let walls = floor();
        let mut p = player_at(100.0, 294.0);
        settle(&e, &mut p, &walls);
        for _ in 0..20 {
            p.change_x = 8.0;
            e.step(&mut p, &walls, 1280.0, 720.0);
        }
        assert!((p.center_x - 260.0).abs() < 1e-3);
        assert_eq!(p.change_x, 8.0);
    }

    #[test]
    fn side_wall_stops_horizontal_motion() {
        let e = engine();
        let mut walls = floor();
        walls.push(wall(100, 332.8, 76.8));
        walls.push(wall(101, 332.8, 128.0));
        let mut p = player_at(200.0, 294.0);
        settle(&e, &mut p, &walls);
        for _ in 0..30 {
            p.change_x = 8.0;
            e.step(&mut p, &walls, 1280.0, 720.0);
        }
        assert!((p.right() - 307.2).abs() < 1e-3);
        assert_eq!(p.change_x, 0.0);
    }

    #[test]
    fn ceiling_stops_upward_motion() {
        let e = engine();
        let ceiling = vec![wall(0, 200.0, 300.0)];
        let mut p = player_at(200.0, 215.0);
        p.change_y = 20.0;
        e.step(&mut p, &ceiling, 1280.0, 720.0);
        assert_eq!(p.change_y, 0.0);
        assert!((p.top() - 274.4).abs() < 1e-3);
    }

    #[test]
    fn step_keeps_player_on_screen_horizontally() {
        let e = engine();
        let mut p = player_at(40.0, 400.0);
        p.change_x = -8.0;
        e.step(&mut p, &[], 1280.0, 720.0);
        assert_eq!(p.left(), 0.0);
        assert_eq!(p.facing, crate::player::Facing::Left);
    }
}
