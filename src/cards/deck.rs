use super::card::Card;
use super::error::CardError;
use super::hand::Hand;
use rand::Rng;

/// The 54-card pack, shrinking as cards are dealt from it.
///
/// Draws are uniform over the remaining cards. Pass a seeded
/// `rand::rngs::SmallRng` for reproducible deals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh pack, in canonical index order.
    pub fn new() -> Self {
        Self(
            (1..=crate::DECK_SIZE)
                .filter_map(|n| Card::try_from(n).ok())
                .collect(),
        )
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(rng.random_range(0..n))),
        }
    }
    /// Deals `n` distinct cards as a sorted hand.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<Hand, CardError> {
        if n > self.size() {
            return Err(CardError::OutOfRange(u8::try_from(n).unwrap_or(u8::MAX)));
        }
        Ok(Hand::from(
            (0..n).filter_map(|_| self.draw(rng)).collect::<Vec<_>>(),
        ))
    }
    /// Deals two disjoint hands, e.g. for a heads-up match.
    pub fn split<R: Rng>(&mut self, a: usize, b: usize, rng: &mut R) -> Result<(Hand, Hand), CardError> {
        let first = self.deal(a, rng)?;
        let other = self.deal(b, rng)?;
        Ok((first, other))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0)
    }
}
