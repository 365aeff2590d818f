use super::play::*;
use super::side::Side;
use crate::cards::Hand;

/// How a duel ended: who emptied their hand first, and every turn taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner: Seat,
    pub transcript: Vec<Turn>,
}

impl Outcome {
    /// Turns taken by one seat, passes included.
    pub fn turns(&self, seat: Seat) -> impl Iterator<Item = &Turn> {
        self.transcript.iter().filter(move |t| t.seat == seat)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for turn in self.transcript.iter() {
            writeln!(f, "{}", turn)?;
        }
        write!(f, "winner {}", self.winner)
    }
}

/// Two greedy sides taking turns until one runs out of cards.
///
/// A leads. Each side answers the last play on the table, or leads freely
/// when the opponent passed. A side that has played something can always
/// lead, so every two turns at least one card leaves the table.
#[derive(Debug, Clone)]
pub struct Duel {
    a: Side,
    b: Side,
}

impl Duel {
    pub fn new(a: Hand, b: Hand) -> Self {
        Self {
            a: Side::from(a),
            b: Side::from(b),
        }
    }

    pub fn play(mut self) -> Outcome {
        let mut transcript = Vec::new();
        let mut last = None::<Play>;
        let mut seat = Seat::A;
        loop {
            let side = match seat {
                Seat::A => &mut self.a,
                Seat::B => &mut self.b,
            };
            if side.is_empty() {
                log::info!("duel won by {} after {} turns", seat, transcript.len());
                return Outcome {
                    winner: seat,
                    transcript,
                };
            }
            let play = side.take_turn(last.as_ref());
            let turn = Turn { seat, play };
            log::debug!("{}", turn);
            last = turn.play.clone();
            transcript.push(turn);
            if side.is_empty() {
                log::info!("duel won by {} after {} turns", seat, transcript.len());
                return Outcome {
                    winner: seat,
                    transcript,
                };
            }
            seat = seat.other();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duel(a: &str, b: &str) -> Outcome {
        Duel::new(Hand::try_from(a).unwrap(), Hand::try_from(b).unwrap()).play()
    }

    #[test]
    fn answer_and_win() {
        let outcome = duel("5h 9d", "7s");
        assert_eq!(outcome.winner, Seat::B);
        assert_eq!(outcome.transcript.len(), 2);
        assert_eq!(outcome.transcript[1].play.as_ref().unwrap().to_string(), "single [7s]");
    }

    #[test]
    fn pass_then_lead() {
        // 3, 5, K, pass, then A leads the 2
        let outcome = duel("3h Kd 2c", "Qs 5s");
        assert_eq!(outcome.winner, Seat::A);
        assert_eq!(outcome.transcript.len(), 5);
        assert_eq!(outcome.turns(Seat::B).filter(|t| t.play.is_none()).count(), 1);
        assert_eq!(outcome.transcript[4].play.as_ref().unwrap().to_string(), "single [2c]");
    }

    #[test]
    fn every_card_played_once() {
        let a = "3h 4h 5h 6h 7h 9s 9d Kc";
        let b = "3s 3c 8h 8s 10d Jd Qd Ah 2s";
        let outcome = duel(a, b);
        let winner = match outcome.winner {
            Seat::A => a,
            Seat::B => b,
        };
        let played = outcome
            .turns(outcome.winner)
            .filter_map(|t| t.play.as_ref())
            .map(|p| p.size())
            .sum::<usize>();
        assert_eq!(played, Hand::try_from(winner).unwrap().size());
    }

    #[test]
    fn empty_side_wins_at_once() {
        let outcome = duel("", "3h");
        assert_eq!(outcome.winner, Seat::A);
        assert!(outcome.transcript.is_empty());
    }
}
