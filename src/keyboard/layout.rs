/// Key rows of the guide keyboard, number row first.
pub const GUIDE_ROWS: [[char; 10]; 4] = [
    ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'],
    ['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p'],
    ['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';'],
    ['z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/'],
];

/// Horizontal stagger of each row, in cells.
pub const ROW_OFFSETS: [u16; 4] = [0, 2, 3, 5];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCursor {
    pub row: usize,
    pub col: usize,
}

impl Default for KeyCursor {
    fn default() -> Self {
        // 'f', the left index home key
        Self { row: 2, col: 3 }
    }
}

impl KeyCursor {
    pub fn key(&self) -> char {
        GUIDE_ROWS[self.row][self.col]
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.row = (self.row + 1).min(GUIDE_ROWS.len() - 1);
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.col = (self.col + 1).min(GUIDE_ROWS[self.row].len() - 1);
    }

    pub fn position_of(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_lowercase();
        GUIDE_ROWS.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&k| k == ch)
                .map(|col| Self { row, col })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::finger::qwerty_finger;

    #[test]
    fn test_every_guide_key_has_a_finger() {
        for row in GUIDE_ROWS {
            for key in row {
                assert!(qwerty_finger(key).is_some(), "{key}");
            }
        }
    }

    #[test]
    fn test_cursor_clamps() {
        let mut cursor = KeyCursor { row: 0, col: 0 };
        cursor.up();
        cursor.left();
        assert_eq!(cursor.key(), '1');
        for _ in 0..20 {
            cursor.down();
            cursor.right();
        }
        assert_eq!(cursor.key(), '/');
    }

    #[test]
    fn test_position_of() {
        assert_eq!(KeyCursor::position_of('J'), Some(KeyCursor { row: 2, col: 6 }));
        assert_eq!(KeyCursor::position_of('!'), None);
        assert_eq!(KeyCursor::default().key(), 'f');
    }
}
