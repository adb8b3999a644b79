use crate::config::{CameraCfg, ScreenCfg};
use crate::player::Player;

/// Scrolling window over the level, as whole-pixel offsets of its bottom-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
}

impl Viewport {
    pub fn reset(&mut self) {
        *self = Viewport::default();
    }

    /// `(left, right, bottom, top)` bounds for the renderer.
    pub fn bounds(&self, screen: &ScreenCfg) -> (f32, f32, f32, f32) {
        let left = self.left as f32;
        let bottom = self.bottom as f32;
        (left, left + screen.width, bottom, bottom + screen.height)
    }

    /// Scroll just far enough to keep the player inside the margins. Each edge
    /// is checked in turn against the offsets left by the previous check.
    /// Returns whether the view moved.
    pub fn track(&mut self, player: &Player, margins: &CameraCfg, screen: &ScreenCfg) -> bool {
        let mut left = self.left as f32;
        let mut bottom = self.bottom as f32;
        let mut changed = false;

        let left_boundary = left + margins.left_margin;
        if player.left() < left_boundary {
            left -= left_boundary - player.left();
            changed = true;
        }

        let right_boundary = left + screen.width - margins.right_margin;
        if player.right() > right_boundary {
            left += player.right() - right_boundary;
            changed = true;
        }

        let top_boundary = bottom + screen.height - margins.top_margin;
        if player.top() > top_boundary {
            bottom += player.top() - top_boundary;
            changed = true;
        }

        let bottom_boundary = bottom + margins.bottom_margin;
        if player.bottom() < bottom_boundary {
            bottom -= bottom_boundary - player.bottom();
            changed = true;
        }

        if changed {
            // Only whole pixels, otherwise tiles shimmer
            self.left = left.trunc() as i32;
            self.bottom = bottom.trunc() as i32;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerCfg;

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(&PlayerCfg::default());
        p.center_x = x;
        p.center_y = y;
        p
    }

    fn within_margins(v: &Viewport, p: &Player) -> bool {
        let m = CameraCfg::default();
        let s = ScreenCfg::default();
        let (l, r, b, t) = v.bounds(&s);
        // Truncation may leave the boundary up to one pixel off
        p.left() >= l + m.left_margin - 1.0
            && p.right() <= r - m.right_margin + 1.0
            && p.bottom() >= b + m.bottom_margin - 1.0
            && p.top() <= t - m.top_margin + 1.0
    }

    #[test]
    fn no_scroll_inside_margins() {
        let mut v = Viewport::default();
        let p = player_at(600.0, 360.0);
        assert!(!v.track(&p, &CameraCfg::default(), &ScreenCfg::default()));
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn scrolls_right_by_penetration() {
        let mut v = Viewport::default();
        // right edge at 1100.4, boundary at 1080
        let p = player_at(1062.0, 360.0);
        assert!(v.track(&p, &CameraCfg::default(), &ScreenCfg::default()));
        assert_eq!(v.left, 20);
        assert_eq!(v.bottom, 0);
        assert!(within_margins(&v, &p));
    }

    #[test]
    fn scrolls_left_past_map_origin() {
        let mut v = Viewport::default();
        let p = player_at(80.0, 360.0);
        assert!(v.track(&p, &CameraCfg::default(), &ScreenCfg::default()));
        // left edge 41.6 against boundary 200
        assert_eq!(v.left, -158);
        assert!(within_margins(&v, &p));
    }

    #[test]
    fn scrolls_down_while_falling_and_up_while_climbing() {
        let mut v = Viewport::default();
        let p = player_at(600.0, 100.0);
        assert!(v.track(&p, &CameraCfg::default(), &ScreenCfg::default()));
        // bottom edge 48.8 against boundary 150
        assert_eq!(v.bottom, -101);
        assert!(within_margins(&v, &p));

        let mut v = Viewport::default();
        let p = player_at(600.0, 700.0);
        assert!(v.track(&p, &CameraCfg::default(), &ScreenCfg::default()));
        // top edge 751.2 against boundary 620
        assert_eq!(v.bottom, 131);
        assert!(within_margins(&v, &p));
    }

    #[test]
    fn bounds_span_one_screen() {
        let v = Viewport { left: 30, bottom: -12 };
        assert_eq!(v.bounds(&ScreenCfg::default()), (30.0, 1310.0, -12.0, 708.0));
    }
}
