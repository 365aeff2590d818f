use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card of the 54-card pack.
///
/// Game logic compares cards by [`Rank`] alone, always through
/// [`Card::rank`]; the suit only tells physically distinct cards apart.
/// The derived `Ord` sorts by rank and breaks ties by suit (`3h < 3s`) so
/// that it agrees with `Eq`. That suit tiebreak is for sorting and dedup
/// only and never decides whether one play beats another.
///
/// # Canonical index
///
/// Every card maps to a dense `1..=54` index, `(value - 3) * 4 + offset`,
/// with suit offsets heart=1, spade=2, club=3, diamond=4. The two jokers sit
/// at 53 (small, heart) and 54 (big, spade).
///
/// # Parsing
///
/// Short text is the rank followed by a one-letter suit: `"3h"`, `"10s"`,
/// `"Qd"`, `"Xh"`. Long pairs such as `("JOKER", "spade")` go through
/// `TryFrom<(&str, &str)>`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        match (rank, suit) {
            (Rank::Joker, Suit::Club | Suit::Diamond) => Err(CardError::RankSuitMismatch(rank, suit)),
            _ => Ok(Self { rank, suit }),
        }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Canonical 1..=54 index.
    pub fn order(&self) -> u8 {
        (self.rank.value() - Rank::MIN.value()) * 4 + self.suit.offset()
    }
    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }
}

/// u8 isomorphism over the canonical 1..=54 index
impl TryFrom<u8> for Card {
    type Error = CardError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=crate::DECK_SIZE => Self::new(
                Rank::try_from((n - 1) / 4 + Rank::MIN.value())?,
                Suit::try_from((n - 1) % 4 + 1)?,
            ),
            _ => Err(CardError::OutOfRange(n)),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.order()
    }
}

/// (Rank, Suit) injection, rejecting club/diamond jokers
impl TryFrom<(Rank, Suit)> for Card {
    type Error = CardError;
    fn try_from((rank, suit): (Rank, Suit)) -> Result<Self, Self::Error> {
        Self::new(rank, suit)
    }
}

/// long-name pair, e.g. ("10", "heart") or ("JOKER", "spade")
impl TryFrom<(&str, &str)> for Card {
    type Error = CardError;
    fn try_from((rank, suit): (&str, &str)) -> Result<Self, Self::Error> {
        Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?)
    }
}

/// str isomorphism over the short notation
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => Self::try_from((&s[..i], &s[i..])),
            _ => Err(CardError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
