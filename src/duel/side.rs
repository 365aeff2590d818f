use super::play::Play;
use crate::cards::Hand;
use crate::moves::*;
use crate::search::HandState;

/// One player of a duel: a hand and a greedy rule for what to put down.
#[derive(Debug, Clone)]
pub struct Side {
    state: HandState,
}

impl From<Hand> for Side {
    fn from(hand: Hand) -> Self {
        Self {
            state: HandState::root(hand, Mode::All),
        }
    }
}

impl Side {
    pub fn hand(&self) -> &Hand {
        self.state.hand()
    }
    pub fn is_empty(&self) -> bool {
        self.state.is_terminal()
    }

    /// Play in answer to the opponent's last play, or lead after a pass.
    /// The chosen cards leave the hand.
    pub fn take_turn(&mut self, opponent: Option<&Play>) -> Option<Play> {
        let play = match opponent {
            None => self.lead(),
            Some(last) => self.answer(last),
        }?;
        self.state = self.state.child(&play);
        Some(play)
    }

    /// First candidate of the first bucket.
    fn lead(&self) -> Option<Play> {
        self.state
            .catalogue()
            .first(|_| true)
            .map(|(_, combo)| combo.clone())
    }

    /// The first candidate that beats `last`, trying in turn: the same shape
    /// higher, a double bomb over quad+2-pairs, a quad not below `last`,
    /// then the rocket.
    fn answer(&self, last: &Play) -> Option<Play> {
        let catalogue = self.state.catalogue();
        catalogue
            .get(last.category())
            .iter()
            .find(|c| c.beats(last))
            .cloned()
            .or_else(|| match last.category() {
                Category::QuadPairs => self.state.double_bombs().into_iter().next(),
                _ => None,
            })
            .or_else(|| match last.category() {
                Category::Quad => None,
                _ => catalogue
                    .get(Category::Quad)
                    .iter()
                    .find(|c| c.lead() >= last.lead())
                    .cloned(),
            })
            .or_else(|| {
                catalogue
                    .get(Category::Pair)
                    .iter()
                    .filter(|_| !last.is_rocket())
                    .find(|c| c.is_rocket())
                    .cloned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn side(s: &str) -> Side {
        Side::from(Hand::try_from(s).unwrap())
    }
    fn play(category: Category, s: &str) -> Play {
        let cards = s
            .split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect::<Vec<_>>();
        Play::try_from((category, cards)).unwrap()
    }

    #[test]
    fn higher_single() {
        let mut b = side("7s");
        let answer = b.take_turn(Some(&play(Category::Single, "5h")));
        assert_eq!(answer, Some(play(Category::Single, "7s")));
        assert!(b.is_empty());
    }

    #[test]
    fn lower_single_passes() {
        let mut b = side("4s");
        assert_eq!(b.take_turn(Some(&play(Category::Single, "5h"))), None);
        assert_eq!(b.hand().size(), 1);
    }

    #[test]
    fn leads_first_bucket() {
        let mut a = side("3h 4h 5h 6h 7h 9s");
        let lead = a.take_turn(None).unwrap();
        assert_eq!(lead.category(), Category::SingleStraight);
        assert_eq!(a.hand().to_string(), "9s");
    }

    #[test]
    fn same_shape_only() {
        let mut b = side("8h 8s 9c");
        let answer = b.take_turn(Some(&play(Category::Pair, "5h 5s"))).unwrap();
        assert_eq!(answer.to_string(), "pair [8h 8s]");
        let mut c = side("9c Kd");
        assert_eq!(c.take_turn(Some(&play(Category::Pair, "5h 5s"))), None);
    }

    #[test]
    fn bomb_over_pair() {
        let mut b = side("6h 6s 6c 6d 4h");
        let answer = b.take_turn(Some(&play(Category::Pair, "5h 5s"))).unwrap();
        assert_eq!(answer.category(), Category::Quad);
        let mut c = side("4h 4s 4c 4d 3h");
        assert_eq!(c.take_turn(Some(&play(Category::Pair, "5h 5s"))), None);
    }

    #[test]
    fn rocket_over_anything() {
        let mut b = side("Xh Xs 3h");
        let answer = b.take_turn(Some(&play(Category::Quad, "2h 2s 2c 2d"))).unwrap();
        assert!(answer.is_rocket());
        let mut c = side("Xh Xs");
        let rocket = play(Category::Pair, "Xh Xs");
        assert_eq!(c.take_turn(Some(&rocket)), None);
    }

    #[test]
    fn double_bomb_over_quad_pairs() {
        let mut b = side("3h 3s 3c 3d 4h 4s 4c 4d");
        let last = play(Category::QuadPairs, "Ah As Ac Ad 5h 5s 6h 6s");
        let answer = b.take_turn(Some(&last)).unwrap();
        assert_eq!(answer.size(), 8);
        assert!(b.is_empty());
    }
}
