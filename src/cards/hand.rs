use super::card::Card;
use super::error::CardError;
use super::rank::Rank;

/// Hand is a multiset of cards kept sorted ascending by rank.
///
/// The sort is stable, so cards of equal rank keep the order in which they
/// were dealt. That order fixes which physical card represents a rank in
/// every combination the move generator builds, making enumeration
/// deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    /// Cards grouped by rank, ascending. Each group is a contiguous run of
    /// the sorted hand.
    pub fn groups(&self) -> impl Iterator<Item = &[Card]> {
        self.0.chunk_by(|a, b| a.rank() == b.rank())
    }
    /// Number of cards held of one rank.
    pub fn count(&self, rank: Rank) -> usize {
        self.0.iter().filter(|c| c.rank() == rank).count()
    }
    /// A copy of this hand with the given cards taken out. Each card removes
    /// at most one matching physical card.
    pub fn without(&self, cards: &[Card]) -> Self {
        let mut rest = self.0.clone();
        for card in cards {
            if let Some(i) = rest.iter().position(|c| c == card) {
                rest.remove(i);
            }
        }
        Self(rest)
    }
    /// Hand of physically distinct cards, rejecting any card given twice.
    fn distinct(cards: Vec<Card>) -> Result<Self, CardError> {
        let mut seen = std::collections::HashSet::with_capacity(cards.len());
        match cards.iter().find(|c| !seen.insert(**c)) {
            Some(card) => Err(CardError::DuplicateCard(*card)),
            None => Ok(Self::from(cards)),
        }
    }
    /// Canonical indices, in hand order.
    pub fn orders(&self) -> Vec<u8> {
        self.0.iter().map(Card::order).collect()
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted by rank)
impl From<Vec<Card>> for Hand {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(Card::rank);
        Self(cards)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

/// u64 projection
/// three bits of count per rank, lowest rank in the least significant bits.
/// two hands project equal exactly when they hold the same multiset of ranks,
/// which is all that legality ever looks at.
impl From<&Hand> for u64 {
    fn from(hand: &Hand) -> Self {
        hand.0
            .iter()
            .map(|c| 1u64 << (c.rank().position() * 3))
            .sum()
    }
}

/// canonical indices, e.g. from a presentation layer
impl TryFrom<&[u8]> for Hand {
    type Error = CardError;
    fn try_from(orders: &[u8]) -> Result<Self, Self::Error> {
        orders
            .iter()
            .map(|n| Card::try_from(*n))
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::distinct)
    }
}

/// long-name (rank, suit) pairs
impl TryFrom<&[(&str, &str)]> for Hand {
    type Error = CardError;
    fn try_from(pairs: &[(&str, &str)]) -> Result<Self, Self::Error> {
        pairs
            .iter()
            .map(|pair| Card::try_from(*pair))
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::distinct)
    }
}

/// whitespace or comma separated short notation
impl TryFrom<&str> for Hand {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::distinct)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
