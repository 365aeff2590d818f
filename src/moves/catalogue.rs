use super::category::Category;
use super::combo::Combo;
use super::mode::Mode;
use crate::cards::*;
use std::collections::BTreeMap;

/// One family of straights: how many cards per rank, the rank step, the
/// minimum run length in ranks, and the first start rank that can no longer
/// reach that length without crossing a two or a joker.
struct Family {
    category: Category,
    width: usize,
    gap: u8,
    shortest: usize,
    bound: Rank,
}

impl Family {
    const ALL: [Self; 6] = [
        Self::new(Category::TripleStraight, 3, 1, crate::MIN_TRIPLE_STRAIGHT, Rank::Ace),
        Self::new(Category::TripleStraightGap, 3, 2, crate::MIN_TRIPLE_STRAIGHT, Rank::King),
        Self::new(Category::PairStraight, 2, 1, crate::MIN_PAIR_STRAIGHT, Rank::King),
        Self::new(Category::PairStraightGap, 2, 2, crate::MIN_PAIR_STRAIGHT, Rank::Ten),
        Self::new(Category::SingleStraight, 1, 1, crate::MIN_SINGLE_STRAIGHT, Rank::Jack),
        Self::new(Category::SingleStraightGap, 1, 2, crate::MIN_SINGLE_STRAIGHT, Rank::Seven),
    ];
    const fn new(category: Category, width: usize, gap: u8, shortest: usize, bound: Rank) -> Self {
        Self {
            category,
            width,
            gap,
            shortest,
            bound,
        }
    }
}

/// Every candidate play of a hand, bucketed by category.
///
/// Buckets iterate in [`Category`] precedence and empty buckets are never
/// stored. Within a bucket, candidates keep generation order, which the
/// greedy players rely on:
///
/// - singles take one card per rank, lone cards first, then one card out of
///   each pair, triple and quad, so attaching a single breaks the smallest
///   group available
/// - pairs and triples also come out of every triple and quad respectively
/// - straights are listed by ascending start rank
///
/// A triple straight of exactly two ranks also lists the triple+single and
/// triple+pair candidates anchored on either rank, so a search sees those
/// decompositions as alternatives of the straight.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    combos: BTreeMap<Category, Vec<Combo>>,
    largest: usize,
}

impl Catalogue {
    pub fn new(hand: &Hand, mode: Mode) -> Self {
        let mut catalogue = Self::default();
        let groups = hand.groups().collect::<Vec<&[Card]>>();
        let mut table: [Option<&[Card]>; Rank::COUNT] = [None; Rank::COUNT];
        for group in groups.iter() {
            table[group[0].rank().position()] = Some(*group);
        }

        let mut by_size = groups.clone();
        by_size.sort_by_key(|g| g.len());
        let singles = by_size.iter().map(|g| g[0]).collect::<Vec<Card>>();
        let pairs = groups
            .iter()
            .filter(|g| g.len() == 2 || g.len() == 3)
            .map(|g| &g[..2])
            .collect::<Vec<&[Card]>>();
        let triples = groups
            .iter()
            .filter(|g| g.len() == 3 || g.len() == 4)
            .map(|g| &g[..3])
            .collect::<Vec<&[Card]>>();
        let quads = groups
            .iter()
            .filter(|g| g.len() == 4)
            .copied()
            .collect::<Vec<&[Card]>>();

        let triple_singles = Self::triple_singles(&triples, &singles);
        let triple_pairs = Self::triple_pairs(&triples, &pairs);
        let (quad_singles, quad_pairs) = Self::quad_attachments(&quads, &singles, &pairs);

        for family in Family::ALL.iter() {
            let straights = Self::straights(family, &groups, &table, mode, &triple_singles, &triple_pairs);
            catalogue.insert(family.category, straights);
        }
        catalogue.insert(Category::QuadPairs, quad_pairs);
        catalogue.insert(Category::QuadSingles, quad_singles);
        catalogue.insert(Category::TriplePair, triple_pairs);
        catalogue.insert(Category::TripleSingle, triple_singles);
        catalogue.insert(Category::Quad, Self::units(Category::Quad, &quads));
        catalogue.insert(Category::Triple, Self::units(Category::Triple, &triples));
        catalogue.insert(Category::Pair, Self::units(Category::Pair, &pairs));
        catalogue.insert(
            Category::Single,
            singles
                .iter()
                .map(|c| Combo::new(Category::Single, vec![*c]))
                .collect(),
        );
        if quads.len() >= 2 {
            catalogue.largest = catalogue.largest.max(8);
        }
        catalogue
    }

    /// Candidates of one category, in generation order.
    pub fn get(&self, category: Category) -> &[Combo] {
        self.combos
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
    /// Non-empty buckets in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Combo])> {
        self.combos.iter().map(|(c, v)| (*c, v.as_slice()))
    }
    /// First candidate of the first non-empty bucket accepted by `keep`.
    pub fn first(&self, keep: impl Fn(Category) -> bool) -> Option<(Category, &Combo)> {
        self.iter()
            .filter(|(c, _)| keep(*c))
            .find_map(|(c, combos)| combos.first().map(|combo| (c, combo)))
    }
    /// Size of the largest candidate found, counting a double bomb when two
    /// quads coexist. Zero only for an empty hand.
    pub fn largest(&self) -> usize {
        self.largest
    }
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
    /// Every pairing of two held quads as a single eight-card play. These
    /// are tagged quad+2-pairs but are not part of any bucket.
    pub fn double_bombs(&self) -> Vec<Combo> {
        let quads = self.get(Category::Quad);
        quads
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                quads[i + 1..]
                    .iter()
                    .map(move |b| Combo::new(Category::QuadPairs, [a.cards(), b.cards()].concat()))
            })
            .collect()
    }

    fn insert(&mut self, category: Category, combos: Vec<Combo>) {
        if let Some(size) = combos.iter().map(Combo::size).max() {
            self.largest = self.largest.max(size);
            self.combos.insert(category, combos);
        }
    }

    fn units(category: Category, units: &[&[Card]]) -> Vec<Combo> {
        units
            .iter()
            .map(|u| Combo::new(category, u.to_vec()))
            .collect()
    }

    fn triple_singles(triples: &[&[Card]], singles: &[Card]) -> Vec<Combo> {
        let mut combos = Vec::new();
        for triple in triples {
            for single in singles.iter().filter(|s| s.rank() != triple[0].rank()) {
                combos.push(Combo::new(Category::TripleSingle, [*triple, std::slice::from_ref(single)].concat()));
            }
        }
        combos
    }

    /// The rocket is never the pair of a triple+pair.
    fn triple_pairs(triples: &[&[Card]], pairs: &[&[Card]]) -> Vec<Combo> {
        let mut combos = Vec::new();
        for triple in triples {
            for pair in pairs
                .iter()
                .filter(|p| p[0].rank() != triple[0].rank())
                .filter(|p| !p[0].is_joker())
            {
                combos.push(Combo::new(Category::TriplePair, [*triple, *pair].concat()));
            }
        }
        combos
    }

    /// Quad attachments. Two distinct singles, one pair (its halves standing
    /// in for the two singles) and the rocket all land under quad+2-singles;
    /// only two distinct non-joker pairs make a quad+2-pairs.
    fn quad_attachments(quads: &[&[Card]], singles: &[Card], pairs: &[&[Card]]) -> (Vec<Combo>, Vec<Combo>) {
        let mut with_singles = Vec::new();
        let mut with_pairs = Vec::new();
        for quad in quads {
            let rank = quad[0].rank();
            let kickers = singles
                .iter()
                .filter(|s| s.rank() != rank)
                .collect::<Vec<_>>();
            for (i, a) in kickers.iter().enumerate() {
                for b in kickers[i + 1..].iter() {
                    with_singles.push(Combo::new(Category::QuadSingles, [*quad, &[**a, **b][..]].concat()));
                }
            }
            let couples = pairs
                .iter()
                .filter(|p| p[0].rank() != rank)
                .collect::<Vec<_>>();
            for (i, a) in couples.iter().enumerate() {
                with_singles.push(Combo::new(Category::QuadSingles, [*quad, **a].concat()));
                if a[0].is_joker() {
                    continue;
                }
                for b in couples[i + 1..].iter().filter(|b| !b[0].is_joker()) {
                    with_pairs.push(Combo::new(Category::QuadPairs, [*quad, **a, **b].concat()));
                }
            }
        }
        (with_singles, with_pairs)
    }

    fn straights(
        family: &Family,
        groups: &[&[Card]],
        table: &[Option<&[Card]>; Rank::COUNT],
        mode: Mode,
        triple_singles: &[Combo],
        triple_pairs: &[Combo],
    ) -> Vec<Combo> {
        let mut combos = Vec::<Combo>::new();
        let mut covered = Vec::<Rank>::new();
        for group in groups.iter().filter(|g| g.len() >= family.width) {
            let start = group[0].rank();
            if start >= family.bound {
                break;
            }
            if mode == Mode::Longest && covered.contains(&start) {
                continue;
            }
            let mut run = vec![&group[..family.width]];
            let mut rank = start;
            while let Some(next) = rank.next(family.gap).filter(Rank::is_sequential) {
                match table[next.position()] {
                    Some(g) if g.len() >= family.width => {
                        run.push(&g[..family.width]);
                        rank = next;
                    }
                    _ => break,
                }
            }
            if run.len() < family.shortest {
                continue;
            }
            let windows = match mode {
                Mode::All => (family.shortest..=run.len())
                    .rev()
                    .map(|n| &run[..n])
                    .collect::<Vec<_>>(),
                Mode::Longest => {
                    covered.extend(run.iter().map(|unit| unit[0].rank()));
                    (0..=run.len() - family.shortest)
                        .map(|i| &run[i..])
                        .collect::<Vec<_>>()
                }
            };
            for window in windows {
                combos.push(Combo::new(family.category, window.concat()));
                if family.width == 3 && window.len() == crate::MIN_TRIPLE_STRAIGHT {
                    let anchors = [window[0][0].rank(), window[1][0].rank()];
                    for combo in triple_singles
                        .iter()
                        .chain(triple_pairs.iter())
                        .filter(|c| anchors.contains(&c.lead()))
                    {
                        if !combos.contains(combo) {
                            combos.push(combo.clone());
                        }
                    }
                }
            }
        }
        combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue(s: &str) -> Catalogue {
        Catalogue::new(&Hand::try_from(s).unwrap(), Mode::All)
    }

    #[test]
    fn empty_hand() {
        let c = catalogue("");
        assert!(c.is_empty());
        assert_eq!(c.largest(), 0);
    }

    #[test]
    fn single_straight() {
        let c = catalogue("3h 4h 5h 6h 7h");
        assert_eq!(c.get(Category::SingleStraight).len(), 1);
        assert_eq!(c.get(Category::SingleStraight)[0].size(), 5);
        assert_eq!(c.largest(), 5);
        assert_eq!(c.first(|_| true).map(|(c, _)| c), Some(Category::SingleStraight));
    }

    #[test]
    fn straight_windows() {
        let all = Catalogue::new(&Hand::try_from("3h 4h 5h 6h 7h 8h").unwrap(), Mode::All);
        let longest = Catalogue::new(&Hand::try_from("3h 4h 5h 6h 7h 8h").unwrap(), Mode::Longest);
        let sizes = |c: &Catalogue| {
            c.get(Category::SingleStraight)
                .iter()
                .map(|s| (s.lead(), s.size()))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            sizes(&all),
            vec![(Rank::Three, 6), (Rank::Three, 5), (Rank::Four, 5)]
        );
        assert_eq!(sizes(&longest), vec![(Rank::Three, 6), (Rank::Four, 5)]);
    }

    #[test]
    fn straights_stop_before_two() {
        let c = catalogue("10h Jh Qh Kh Ah 2h");
        assert_eq!(c.get(Category::SingleStraight).len(), 1);
        assert_eq!(c.get(Category::SingleStraight)[0].size(), 5);
        assert!(catalogue("Jh Qh Kh Ah 2h").get(Category::SingleStraight).is_empty());
    }

    #[test]
    fn gapped_straights() {
        let c = catalogue("3h 5h 7h 9h Jh");
        assert_eq!(c.get(Category::SingleStraightGap).len(), 1);
        assert!(c.get(Category::SingleStraight).is_empty());
        let c = catalogue("3h 3s 5h 5s 7h 7s");
        assert_eq!(c.get(Category::PairStraightGap).len(), 1);
    }

    #[test]
    fn pair_straight() {
        let c = catalogue("3h 3s 4h 4s 5h 5s");
        assert_eq!(c.get(Category::PairStraight).len(), 1);
        assert_eq!(c.get(Category::PairStraight)[0].size(), 6);
    }

    #[test]
    fn singles_prefer_lone_cards() {
        let c = catalogue("3h 4h 4s 5h 5s 5c 6h");
        let singles = c
            .get(Category::Single)
            .iter()
            .map(|s| s.cards()[0].to_string())
            .collect::<Vec<_>>();
        assert_eq!(singles, vec!["3h", "6h", "4h", "5h"]);
    }

    #[test]
    fn singles_cover_every_rank_once() {
        let hand = Hand::try_from("3h 3s 3c 3d 5h 5s 9c Qd Qh Xh Xs").unwrap();
        let c = Catalogue::new(&hand, Mode::All);
        let mut ranks = c
            .get(Category::Single)
            .iter()
            .map(Combo::lead)
            .collect::<Vec<_>>();
        ranks.sort();
        let mut expected = hand.groups().map(|g| g[0].rank()).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn no_duplicate_cards() {
        let hand = Hand::try_from("3h 3s 3c 3d 4h 4s 4c 5h 5s 6h 7h 8h Xh Xs").unwrap();
        let c = Catalogue::new(&hand, Mode::All);
        for (_, combos) in c.iter() {
            for combo in combos {
                let mut cards = combo.cards().to_vec();
                cards.sort();
                cards.dedup();
                assert_eq!(cards.len(), combo.size(), "{}", combo);
            }
        }
    }

    #[test]
    fn rocket_is_not_a_pair_attachment() {
        let c = catalogue("3h 3s 3c Xh Xs");
        assert!(c.get(Category::TriplePair).is_empty());
        assert!(c.get(Category::Pair).iter().any(Combo::is_rocket));
        let c = catalogue("3h 3s 3c 3d 5h 5s 6h 6s Xh Xs");
        assert!(c.get(Category::QuadPairs).iter().all(|q| !q.cards().iter().any(Card::is_joker)));
        assert_eq!(c.get(Category::QuadPairs).len(), 1);
    }

    #[test]
    fn quad_with_rocket_counts_as_singles() {
        let c = catalogue("3h 3s 3c 3d Xh Xs");
        assert_eq!(c.get(Category::QuadSingles).len(), 1);
        assert_eq!(c.get(Category::QuadSingles)[0].size(), 6);
        assert!(c.get(Category::QuadPairs).is_empty());
    }

    #[test]
    fn quads_supply_triples_and_triples_supply_pairs() {
        let c = catalogue("3h 3s 3c 3d 9h 9s 9c");
        assert_eq!(c.get(Category::Quad).len(), 1);
        assert_eq!(c.get(Category::Triple).len(), 2);
        assert_eq!(c.get(Category::Pair).len(), 1);
        assert_eq!(c.get(Category::Pair)[0].lead(), Rank::Nine);
    }

    #[test]
    fn triple_straight_folds_attachments() {
        let c = catalogue("3h 3s 3c 4h 4s 4c 9h");
        let straights = c.get(Category::TripleStraight);
        assert_eq!(straights[0].category(), Category::TripleStraight);
        assert_eq!(straights[0].size(), 6);
        assert_eq!(straights.len(), 1 + c.get(Category::TripleSingle).len() + c.get(Category::TriplePair).len());
        assert!(straights[1..].iter().all(|s| s.category() != Category::TripleStraight));
    }

    #[test]
    fn gapped_triple_straight_folds_attachments() {
        let c = catalogue("3h 3s 3c 5h 5s 5c 9d");
        assert!(c.get(Category::TripleStraight).is_empty());
        let straights = c.get(Category::TripleStraightGap);
        assert_eq!(straights.len(), 7);
        assert_eq!(straights[0].category(), Category::TripleStraightGap);
        assert_eq!(straights[0].to_string(), "triple straight with gap [3h 3s 3c 5h 5s 5c]");
        assert_eq!(
            straights[1..]
                .iter()
                .filter(|s| s.category() == Category::TripleSingle)
                .count(),
            4
        );
        assert_eq!(
            straights[1..]
                .iter()
                .filter(|s| s.category() == Category::TriplePair)
                .count(),
            2
        );
    }

    #[test]
    fn longest_windows_for_pairs_and_triples() {
        let windows = |s: &str, mode: Mode, category: Category| {
            Catalogue::new(&Hand::try_from(s).unwrap(), mode)
                .get(category)
                .iter()
                .filter(|c| c.category() == category)
                .map(|c| (c.lead(), c.size()))
                .collect::<Vec<_>>()
        };
        let pairs = "3h 3s 4h 4s 5h 5s 6h 6s";
        assert_eq!(
            windows(pairs, Mode::All, Category::PairStraight),
            vec![(Rank::Three, 8), (Rank::Three, 6), (Rank::Four, 6)]
        );
        assert_eq!(
            windows(pairs, Mode::Longest, Category::PairStraight),
            vec![(Rank::Three, 8), (Rank::Four, 6)]
        );
        let triples = "3h 3s 3c 4h 4s 4c 5h 5s 5c";
        assert_eq!(
            windows(triples, Mode::All, Category::TripleStraight),
            vec![(Rank::Three, 9), (Rank::Three, 6), (Rank::Four, 6)]
        );
        assert_eq!(
            windows(triples, Mode::Longest, Category::TripleStraight),
            vec![(Rank::Three, 9), (Rank::Four, 6)]
        );
    }

    #[test]
    fn double_bombs() {
        let c = catalogue("3h 3s 3c 3d 9h 9s 9c 9d");
        assert_eq!(c.double_bombs().len(), 1);
        assert_eq!(c.double_bombs()[0].size(), 8);
        assert_eq!(c.largest(), 8);
        assert!(catalogue("3h 3s 3c 3d").double_bombs().is_empty());
    }
}
