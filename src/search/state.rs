use crate::cards::*;
use crate::moves::*;

/// A snapshot of the cards still to be played, together with everything the
/// searches derive from them: the move catalogue, how many plays it took to
/// get here, and the best-first ordering cost.
///
/// Two states are interchangeable for deduplication when their [`key`]s
/// agree, i.e. they hold the same multiset of ranks.
///
/// [`key`]: HandState::key
#[derive(Debug, Clone)]
pub struct HandState {
    hand: Hand,
    catalogue: Catalogue,
    mode: Mode,
    step: usize,
    cost: usize,
}

impl HandState {
    pub fn root(hand: Hand, mode: Mode) -> Self {
        Self::at(hand, mode, 0)
    }
    /// State reached by playing `combo` from here.
    pub fn child(&self, combo: &Combo) -> Self {
        Self::at(self.hand.without(combo.cards()), self.mode, self.step + 1)
    }
    fn at(hand: Hand, mode: Mode, step: usize) -> Self {
        let catalogue = Catalogue::new(&hand, mode);
        let cost = match catalogue.largest() {
            0 => step,
            n => step + hand.size().div_ceil(n),
        };
        Self {
            hand,
            catalogue,
            mode,
            step,
            cost,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
    pub fn step(&self) -> usize {
        self.step
    }
    /// Plays taken so far plus a lower bound on plays still needed.
    pub fn cost(&self) -> usize {
        self.cost
    }
    pub fn key(&self) -> u64 {
        u64::from(&self.hand)
    }
    pub fn is_terminal(&self) -> bool {
        self.hand.is_empty()
    }
    pub fn double_bombs(&self) -> Vec<Combo> {
        self.catalogue.double_bombs()
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] step {} cost {}", self.hand, self.step, self.cost)
    }
}
