use super::frontier::Frontier;
use super::rollout::Rollout;
use super::solution::Solution;
use super::state::HandState;
use super::tree::Tree;
use crate::cards::Hand;
use crate::moves::*;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Best-first search for the fewest plays that empty a hand.
///
/// States are ordered by [`HandState::cost`]. Every expansion plays each
/// candidate except quad+2-pairs (double bombs included) and then injects
/// one greedy playout that ignores straights, so a terminal state is queued
/// after the first expansion. A state whose ranks were already expanded in
/// as few plays is not expanded again.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinSteps {
    limit: Option<usize>,
    mode: Mode,
}

impl MinSteps {
    /// Stop after `limit` expansions and answer with the best terminal
    /// found by then.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
    pub fn mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn solve(&self, hand: &Hand) -> Solution {
        let mut tree = Tree::empty();
        let mut frontier = Frontier::default();
        let mut closed = HashMap::<u64, usize>::new();
        let mut best = None::<NodeIndex>;
        let mut expansions = 0usize;
        let root = tree.insert(HandState::root(hand.clone(), self.mode));
        frontier.offer(root, tree.at(root).key(), tree.at(root).cost());
        while let Some(index) = frontier.pop() {
            let state = tree.at(index);
            if state.is_terminal() {
                log::info!(
                    "min steps {} after {} expansions over {} states",
                    state.step(),
                    expansions,
                    tree.size()
                );
                return Solution::from(tree.path(index));
            }
            if best.is_some() && self.limit.is_some_and(|n| expansions >= n) {
                log::warn!("expansion limit {} reached", expansions);
                break;
            }
            if closed.get(&state.key()).is_some_and(|s| *s <= state.step()) {
                continue;
            }
            closed.insert(state.key(), state.step());
            expansions += 1;
            log::debug!("expanding {}", state);
            let children = Self::expand(state);
            let rollout = Rollout::new(state, |c| !c.is_straight());
            for (combo, child) in children {
                if closed.get(&child.key()).is_some_and(|s| *s <= child.step()) {
                    continue;
                }
                let (key, cost) = (child.key(), child.cost());
                let tail = tree.attach(index, combo, child);
                best = Self::fewer(&tree, best, tail);
                frontier.offer(tail, key, cost);
            }
            let mut head = index;
            for (_, combo, next) in rollout {
                head = tree.attach(head, combo, next);
            }
            if head != index {
                best = Self::fewer(&tree, best, head);
                frontier.offer(head, tree.at(head).key(), tree.at(head).cost());
            }
        }
        match best {
            Some(index) => Solution::from(tree.path(index)),
            None => Solution::from(
                Rollout::new(tree.at(root), |_| true)
                    .combos()
                    .cloned()
                    .collect::<Vec<_>>(),
            ),
        }
    }

    fn expand(state: &HandState) -> Vec<(Combo, HandState)> {
        state
            .catalogue()
            .iter()
            .filter(|(category, _)| *category != Category::QuadPairs)
            .flat_map(|(_, combos)| combos.iter().cloned())
            .chain(state.double_bombs())
            .map(|combo| {
                let child = state.child(&combo);
                (combo, child)
            })
            .collect()
    }

    /// Keep whichever terminal took fewer plays, the earlier one on ties.
    fn fewer(tree: &Tree, best: Option<NodeIndex>, candidate: NodeIndex) -> Option<NodeIndex> {
        let state = tree.at(candidate);
        if !state.is_terminal() {
            return best;
        }
        match best {
            Some(index) if tree.at(index).step() <= state.step() => Some(index),
            _ => Some(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(s: &str) -> Solution {
        MinSteps::default().solve(&Hand::try_from(s).unwrap())
    }

    fn partitions(hand: &str, solution: &Solution) -> bool {
        let mut played = solution
            .path
            .iter()
            .flat_map(|c| c.orders())
            .collect::<Vec<_>>();
        let mut held = Hand::try_from(hand).unwrap().orders();
        played.sort();
        held.sort();
        played == held
    }

    #[test]
    fn empty_hand() {
        assert_eq!(solve(""), Solution::default());
    }

    #[test]
    fn one_straight() {
        let solution = solve("3h 4h 5h 6h 7h");
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path[0].category(), Category::SingleStraight);
    }

    #[test]
    fn one_quad() {
        let solution = solve("3h 3s 3c 3d");
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path[0].category(), Category::Quad);
    }

    #[test]
    fn one_rocket() {
        let solution = solve("Xh Xs");
        assert_eq!(solution.steps, 1);
        assert!(solution.path[0].is_rocket());
    }

    #[test]
    fn double_bomb() {
        let solution = solve("3h 3s 3c 3d 9h 9s 9c 9d");
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.path[0].size(), 8);
    }

    #[test]
    fn mixed_hand() {
        let hand = "3h 4h 5h 6h 6s 7h 8h 8c 8s";
        let solution = solve(hand);
        assert!(partitions(hand, &solution));
        assert_eq!(solution.steps, 2);
    }

    #[test]
    fn airplane() {
        let hand = "3h 3s 3c 4h 4s 4c 5h 5s 5c 7h 8h";
        let solution = solve(hand);
        assert!(partitions(hand, &solution));
        assert_eq!(solution.steps, 3);
    }

    #[test]
    fn limited() {
        let hand = "3h 4s 5c 6d 7h 8s 9c 9d 10h Js Qc Kd Ah 2s";
        let solution = MinSteps::with_limit(1).solve(&Hand::try_from(hand).unwrap());
        assert!(partitions(hand, &solution));
        assert!(solution.steps >= 2);
    }
}
