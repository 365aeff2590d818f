use super::category::Category;
use crate::cards::*;

/// A group of cards leaving the hand in one turn, tagged with its shape.
///
/// Cards are stored main-unit first: the triple before its attachment, the
/// quad before its two singles or pairs, straights ascending. The first
/// card therefore carries the rank that decides who beats whom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(try_from = "(Category, Vec<Card>)", into = "(Category, Vec<Card>)"))]
pub struct Combo {
    category: Category,
    cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboError {
    NoCards(Category),
}

impl std::fmt::Display for ComboError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCards(c) => write!(f, "{} with no cards", c),
        }
    }
}

impl std::error::Error for ComboError {}

/// (Category, Vec<Card>) isomorphism, rejecting an empty group
impl TryFrom<(Category, Vec<Card>)> for Combo {
    type Error = ComboError;
    fn try_from((category, cards): (Category, Vec<Card>)) -> Result<Self, Self::Error> {
        match cards.is_empty() {
            true => Err(ComboError::NoCards(category)),
            false => Ok(Self { category, cards }),
        }
    }
}
impl From<Combo> for (Category, Vec<Card>) {
    fn from(combo: Combo) -> Self {
        (combo.category, combo.cards)
    }
}

impl Combo {
    /// Move generator path, where every group is non-empty by construction.
    pub(crate) fn new(category: Category, cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty());
        Self { category, cards }
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    /// Rank of the leading card.
    pub fn lead(&self) -> Rank {
        self.cards[0].rank()
    }
    /// Rank of the unit attached to a triple or quad, if any.
    pub fn kicker(&self) -> Option<Rank> {
        match self.category {
            Category::TripleSingle | Category::TriplePair => self.cards.get(3).map(Card::rank),
            Category::QuadSingles | Category::QuadPairs => self.cards.get(4).map(Card::rank),
            _ => None,
        }
    }
    pub fn is_rocket(&self) -> bool {
        self.cards.len() == 2 && self.cards.iter().all(Card::is_joker)
    }
    /// Whether `other` can be answered by this combo: same shape, same
    /// size, strictly higher leading rank.
    pub fn beats(&self, other: &Self) -> bool {
        self.category == other.category
            && self.size() == other.size()
            && self.lead() > other.lead()
    }
    pub fn orders(&self) -> Vec<u8> {
        self.cards.iter().map(Card::order).collect()
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.category,
            self.cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
