use pano_model::Vec2;

/// Keys the canvas distinguishes. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Enter,
    Character(char),
    Other,
}

impl Key {
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown
        )
    }

    /// Case-insensitive character match.
    pub fn is_char(&self, c: char) -> bool {
        match self {
            Key::Character(k) => k.to_lowercase().eq(c.to_lowercase()),
            _ => false,
        }
    }
}

/// Set of currently held arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldArrows {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldArrows {
    /// Record a press or release. Returns false for non-arrow keys.
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        let slot = match key {
            Key::ArrowLeft => &mut self.left,
            Key::ArrowRight => &mut self.right,
            Key::ArrowUp => &mut self.up,
            Key::ArrowDown => &mut self.down,
            _ => return false,
        };
        *slot = held;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Unit direction per axis. Left and up pull content toward positive
    /// offsets; opposite keys cancel.
    pub fn direction(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| f64::from(pos as i8 - neg as i8);
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
