use super::error::CardError;

/// Suit is metadata only. Discriminants are the offsets used by the
/// canonical 1..=54 card index.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    Heart = 1,
    Spade = 2,
    Club = 3,
    Diamond = 4,
}

impl Suit {
    pub const MIN: Self = Suit::Heart;
    pub const MAX: Self = Suit::Diamond;
    pub const ALL: [Self; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];

    pub fn offset(&self) -> u8 {
        *self as u8
    }
}

/// u8 isomorphism over the offsets 1..=4
impl TryFrom<u8> for Suit {
    type Error = CardError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Suit::Heart),
            2 => Ok(Suit::Spade),
            3 => Ok(Suit::Club),
            4 => Ok(Suit::Diamond),
            _ => Err(CardError::InvalidSuit(n.to_string())),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s.offset()
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "heart" | "hearts" => Ok(Suit::Heart),
            "s" | "spade" | "spades" => Ok(Suit::Spade),
            "c" | "club" | "clubs" => Ok(Suit::Club),
            "d" | "diamond" | "diamonds" => Ok(Suit::Diamond),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Heart => "h",
                Suit::Spade => "s",
                Suit::Club => "c",
                Suit::Diamond => "d",
            }
        )
    }
}
