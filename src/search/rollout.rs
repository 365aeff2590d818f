use super::state::HandState;
use crate::moves::*;

/// One greedy play: the bucket it was drawn from, the cards, and the state
/// it leads to.
pub type Step = (Category, Combo, HandState);

/// Greedy choice over the buckets `keep` accepts: the first candidate of
/// the first non-empty bucket, then two substitutions.
///
/// - a quad with two singles, one of which belongs to a rank held as a
///   pair, is swapped for the quad with that pair
/// - a triple with a pair whose pair is cut out of a larger group is
///   swapped for the same triple with a lone single, when one is held
pub fn greedy(state: &HandState, keep: impl Fn(Category) -> bool) -> Option<(Category, Combo)> {
    let (category, combo) = state.catalogue().first(keep)?;
    let combo = match category {
        Category::QuadSingles => with_pair(state, combo),
        Category::TriplePair => with_single(state, combo),
        _ => None,
    }
    .unwrap_or_else(|| combo.clone());
    Some((category, combo))
}

fn with_pair(state: &HandState, combo: &Combo) -> Option<Combo> {
    let [a, b] = combo.cards().get(4..)? else {
        return None;
    };
    if a.rank() == b.rank() {
        return None;
    }
    let rank = [a.rank(), b.rank()]
        .into_iter()
        .find(|r| state.hand().count(*r) == 2)?;
    state
        .catalogue()
        .get(Category::QuadSingles)
        .iter()
        .filter(|c| c.lead() == combo.lead())
        .find(|c| c.cards()[4..].iter().all(|card| card.rank() == rank))
        .cloned()
}

fn with_single(state: &HandState, combo: &Combo) -> Option<Combo> {
    let rank = combo.kicker()?;
    if state.hand().count(rank) < 3 {
        return None;
    }
    state
        .catalogue()
        .get(Category::TripleSingle)
        .iter()
        .filter(|c| c.lead() == combo.lead())
        .filter_map(|c| c.kicker().map(|k| (c, k)))
        .find(|(_, k)| state.hand().count(*k) == 1)
        .map(|(c, _)| c.clone())
}

/// A greedy playout from some state down to the empty hand.
#[derive(Debug, Clone)]
pub struct Rollout(Vec<Step>);

impl Rollout {
    pub fn new(state: &HandState, keep: impl Fn(Category) -> bool) -> Self {
        let mut steps: Vec<Step> = Vec::new();
        loop {
            let current = steps.last().map(|(_, _, s)| s).unwrap_or(state);
            if current.is_terminal() {
                break;
            }
            match greedy(current, &keep) {
                Some((category, combo)) => {
                    let next = current.child(&combo);
                    steps.push((category, combo, next));
                }
                None => break,
            }
        }
        Self(steps)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
    /// Score contribution of every play along the way.
    pub fn value(&self) -> u32 {
        self.0.iter().map(|(category, _, _)| category.value()).sum()
    }
    pub fn combos(&self) -> impl Iterator<Item = &Combo> {
        self.0.iter().map(|(_, combo, _)| combo)
    }
}

impl IntoIterator for Rollout {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn state(s: &str) -> HandState {
        HandState::root(Hand::try_from(s).unwrap(), Mode::All)
    }

    #[test]
    fn empties_the_hand() {
        let root = state("3h 4h 5h 6h 7h 9s 9d Kc");
        let rollout = Rollout::new(&root, |c| !c.is_straight());
        let played = rollout.combos().map(Combo::size).sum::<usize>();
        assert_eq!(played, root.hand().size());
        assert!(rollout.steps().last().unwrap().2.is_terminal());
    }

    #[test]
    fn skips_filtered_buckets() {
        let root = state("3h 4h 5h 6h 7h");
        let rollout = Rollout::new(&root, |c| !c.is_straight());
        assert_eq!(rollout.len(), 5);
        assert_eq!(rollout.value(), 0);
    }

    #[test]
    fn quad_takes_the_pair() {
        // the 8 is listed first but the 5 breaks a pair
        let root = state("3h 3s 3c 3d 5h 5s 8h");
        let (category, combo) = greedy(&root, |_| true).unwrap();
        assert_eq!(category, Category::QuadSingles);
        assert_eq!(combo.to_string(), "quad with two singles [3h 3s 3c 3d 5h 5s]");
    }

    #[test]
    fn quad_keeps_lone_singles() {
        let root = state("3h 3s 3c 3d 5h 8h");
        let (_, combo) = greedy(&root, |_| true).unwrap();
        assert_eq!(combo.to_string(), "quad with two singles [3h 3s 3c 3d 5h 8h]");
    }

    #[test]
    fn triple_takes_a_lone_single() {
        // the pair of 9s would be cut out of a triple
        let root = state("4h 4s 4c 9h 9s 9c Kd");
        let (category, combo) = greedy(&root, |c| !c.is_straight()).unwrap();
        assert_eq!(category, Category::TriplePair);
        assert_eq!(combo.category(), Category::TripleSingle);
        assert_eq!(combo.to_string(), "triple with single [4h 4s 4c Kd]");
    }

    #[test]
    fn empty_state() {
        let root = state("");
        assert!(greedy(&root, |_| true).is_none());
        assert!(Rollout::new(&root, |_| true).is_empty());
    }
}
