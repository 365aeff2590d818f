use super::rollout::Rollout;
use super::solution::Scored;
use super::state::HandState;
use crate::cards::Hand;
use crate::moves::*;
use rayon::prelude::*;

/// Exhaustive depth-first search for the highest scoring way to empty a
/// hand.
///
/// Every state branches over each candidate of the straight and quad
/// attachment buckets (double bombs included), then plays the rest out
/// greedily. A play is worth its bucket's [`Category::value`] and every
/// terminal is scored with [`Scored::score`]. The first terminal reached
/// with the best score wins.
///
/// Top-level branches run in parallel, each with its own running best; the
/// results are reduced left to right so the answer matches a sequential
/// walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxScore {
    mode: Mode,
}

/// Running best of one part of the walk.
#[derive(Debug, Clone)]
struct Walk {
    best: Scored,
    terminals: usize,
}

impl Default for Walk {
    fn default() -> Self {
        Self {
            best: Scored::unscored(),
            terminals: 0,
        }
    }
}

impl Walk {
    fn record(&mut self, value: u32, path: &[Combo]) {
        self.terminals += 1;
        let score = Scored::score(value, path.len());
        if score > self.best.score {
            self.best = Scored {
                score,
                steps: path.len(),
                path: path.to_vec(),
            };
        }
    }
    /// `self` precedes `other` in walk order.
    fn merge(self, other: Self) -> Self {
        let terminals = self.terminals + other.terminals;
        let best = if other.best.score > self.best.score {
            other.best
        } else {
            self.best
        };
        Self { best, terminals }
    }
}

impl MaxScore {
    pub fn mode(self, mode: Mode) -> Self {
        Self { mode }
    }

    pub fn solve(&self, hand: &Hand) -> Scored {
        let root = HandState::root(hand.clone(), self.mode);
        let branched = Self::branches(&root)
            .into_par_iter()
            .map(|(category, combo)| {
                let mut walk = Walk::default();
                let child = root.child(&combo);
                let ref mut path = vec![combo];
                Self::search(&child, category.value(), path, &mut walk);
                walk
            })
            .reduce(Walk::default, Walk::merge);
        let mut rest = Walk::default();
        Self::playout(&root, 0, &mut Vec::new(), &mut rest);
        let walk = branched.merge(rest);
        log::info!(
            "max score {:.4} in {} steps over {} terminals",
            walk.best.score,
            walk.best.steps,
            walk.terminals
        );
        walk.best
    }

    fn search(state: &HandState, value: u32, path: &mut Vec<Combo>, walk: &mut Walk) {
        for (category, combo) in Self::branches(state) {
            let child = state.child(&combo);
            path.push(combo);
            Self::search(&child, value + category.value(), path, walk);
            path.pop();
        }
        Self::playout(state, value, path, walk);
    }

    /// Greedy finish over the non-branching buckets, recorded as a terminal.
    fn playout(state: &HandState, value: u32, path: &mut Vec<Combo>, walk: &mut Walk) {
        let rollout = Rollout::new(state, |c| !c.is_branching());
        let depth = path.len();
        path.extend(rollout.combos().cloned());
        walk.record(value + rollout.value(), path);
        path.truncate(depth);
    }

    fn branches(state: &HandState) -> Vec<(Category, Combo)> {
        state
            .catalogue()
            .iter()
            .filter(|(category, _)| category.is_branching())
            .flat_map(|(category, combos)| combos.iter().map(move |c| (category, c.clone())))
            .chain(
                state
                    .double_bombs()
                    .into_iter()
                    .map(|c| (Category::QuadPairs, c)),
            )
            .collect()
    }
}
