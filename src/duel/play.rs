use crate::moves::Combo;

/// What a side puts on the table in one turn. A pass is `None`.
pub type Play = Combo;

/// Which side of a duel. A leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// One entry of a duel transcript.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub seat: Seat,
    pub play: Option<Play>,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.play {
            Some(play) => write!(f, "{} {}", self.seat, play),
            None => write!(f, "{} pass", self.seat),
        }
    }
}
