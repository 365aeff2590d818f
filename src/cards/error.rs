use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Validation failures for card input supplied by a collaborator.
///
/// None of these are recovered internally; they always mean the caller
/// handed us something that is not a card of the 54-card pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    InvalidRank(String),
    InvalidSuit(String),
    RankSuitMismatch(Rank, Suit),
    OutOfRange(u8),
    DuplicateCard(Card),
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRank(s) => write!(f, "invalid rank: {}", s),
            Self::InvalidSuit(s) => write!(f, "invalid suit: {}", s),
            Self::RankSuitMismatch(r, s) => write!(f, "rank {} cannot carry suit {}", r, s),
            Self::OutOfRange(n) => write!(f, "card index out of range: {}", n),
            Self::DuplicateCard(c) => write!(f, "card given more than once: {}", c),
        }
    }
}

impl std::error::Error for CardError {}
