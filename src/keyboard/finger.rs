#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
    Thumb,
}

impl Finger {
    /// Finger number counted outward from the index finger; the thumb is 0.
    pub fn number(self) -> u8 {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
            Finger::Thumb => "Thumb",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerAssignment {
    pub hand: Hand,
    pub finger: Finger,
}

impl FingerAssignment {
    pub fn new(hand: Hand, finger: Finger) -> Self {
        Self { hand, finger }
    }

    /// Short code such as `L4` (left pinky) or `R1` (right index).
    pub fn code(&self) -> String {
        let hand = match self.hand {
            Hand::Left => 'L',
            Hand::Right => 'R',
        };
        format!("{hand}{}", self.finger.number())
    }

    pub fn label(&self) -> String {
        let hand = match self.hand {
            Hand::Left => "Left",
            Hand::Right => "Right",
        };
        format!("{hand} {}", self.finger.name())
    }

    /// Legend slot 1-8 from left pinky to right pinky; thumbs have none.
    pub fn legend_slot(&self) -> Option<u8> {
        match (self.hand, self.finger) {
            (_, Finger::Thumb) => None,
            (Hand::Left, f) => Some(5 - f.number()),
            (Hand::Right, f) => Some(4 + f.number()),
        }
    }
}

pub fn qwerty_finger(ch: char) -> Option<FingerAssignment> {
    use Finger::*;
    use Hand::*;

    let assignment = match ch.to_ascii_lowercase() {
        'q' | 'a' | 'z' | '1' => FingerAssignment::new(Left, Pinky),
        'w' | 's' | 'x' | '2' => FingerAssignment::new(Left, Ring),
        'e' | 'd' | 'c' | '3' => FingerAssignment::new(Left, Middle),
        'r' | 'f' | 'v' | 't' | 'g' | 'b' | '4' | '5' => FingerAssignment::new(Left, Index),
        'y' | 'h' | 'n' | 'u' | 'j' | 'm' | '6' | '7' => FingerAssignment::new(Right, Index),
        'i' | 'k' | ',' | '8' => FingerAssignment::new(Right, Middle),
        'o' | 'l' | '.' | '9' => FingerAssignment::new(Right, Ring),
        'p' | ';' | '/' | '0' => FingerAssignment::new(Right, Pinky),
        ' ' => FingerAssignment::new(Right, Thumb),
        _ => return None,
    };
    Some(assignment)
}

/// Legend entries in display order.
pub const LEGEND: [FingerAssignment; 8] = [
    FingerAssignment { hand: Hand::Left, finger: Finger::Pinky },
    FingerAssignment { hand: Hand::Left, finger: Finger::Ring },
    FingerAssignment { hand: Hand::Left, finger: Finger::Middle },
    FingerAssignment { hand: Hand::Left, finger: Finger::Index },
    FingerAssignment { hand: Hand::Right, finger: Finger::Index },
    FingerAssignment { hand: Hand::Right, finger: Finger::Middle },
    FingerAssignment { hand: Hand::Right, finger: Finger::Ring },
    FingerAssignment { hand: Hand::Right, finger: Finger::Pinky },
];
