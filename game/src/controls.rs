/// Keys the game listens to. Arrows and WASD are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Left,
    Right,
    W,
    A,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    #[default]
    None,
    Left,
    Right,
}

impl Horizontal {
    pub fn sign(self) -> f32 {
        match self {
            Horizontal::None => 0.0,
            Horizontal::Left => -1.0,
            Horizontal::Right => 1.0,
        }
    }
}

/// Input gathered between two ticks. Movement keeps whatever the most recent
/// key event said; jump and click are one-shot and consumed by the next tick.
/// A jump key arms `jump` only on its first press, so key repeat while held
/// does not jump again until the key is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub horizontal: Horizontal,
    pub jump: bool,
    pub click: bool,
    jump_held: bool,
}

impl Controls {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up | Key::W => {
                if !self.jump_held {
                    self.jump = true;
                }
                self.jump_held = true;
            }
            Key::Left | Key::A => self.horizontal = Horizontal::Left,
            Key::Right | Key::D => self.horizontal = Horizontal::Right,
        }
    }

    /// Releasing either direction stops, even if the other one is still held.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left | Key::A | Key::Right | Key::D => self.horizontal = Horizontal::None,
            Key::Up | Key::W => self.jump_held = false,
        }
    }

    pub fn click(&mut self) {
        self.click = true;
    }

    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click)
    }

    /// Forget movement input, e.g. while a menu page is showing.
    pub fn clear_movement(&mut self) {
        self.horizontal = Horizontal::None;
        self.jump = false;
    }
}
