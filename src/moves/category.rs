/// Combination categories, declared in catalogue precedence order.
///
/// The derived `Ord` is that precedence: longer, rarer shapes first and the
/// lone single last. Anything that walks "the first available category"
/// walks this order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    TripleStraight,
    TripleStraightGap,
    PairStraight,
    PairStraightGap,
    SingleStraight,
    SingleStraightGap,
    QuadPairs,
    QuadSingles,
    TriplePair,
    TripleSingle,
    Quad,
    Triple,
    Pair,
    Single,
}

impl Category {
    pub const ALL: [Self; 14] = [
        Self::TripleStraight,
        Self::TripleStraightGap,
        Self::PairStraight,
        Self::PairStraightGap,
        Self::SingleStraight,
        Self::SingleStraightGap,
        Self::QuadPairs,
        Self::QuadSingles,
        Self::TriplePair,
        Self::TripleSingle,
        Self::Quad,
        Self::Triple,
        Self::Pair,
        Self::Single,
    ];

    pub fn is_straight(&self) -> bool {
        *self <= Self::SingleStraightGap
    }
    /// Categories the scoring search branches over. The rest are played out
    /// greedily.
    pub fn is_branching(&self) -> bool {
        *self <= Self::QuadSingles
    }
    /// Score contribution of one play drawn from this category.
    pub fn value(&self) -> u32 {
        match self {
            Self::TripleStraight | Self::TripleStraightGap => 7,
            Self::PairStraight | Self::PairStraightGap => 6,
            Self::SingleStraight | Self::SingleStraightGap => 5,
            Self::QuadPairs | Self::QuadSingles => 4,
            Self::TriplePair | Self::TripleSingle | Self::Quad | Self::Triple => 3,
            Self::Pair | Self::Single => 0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::TripleStraight => "triple straight",
                Self::TripleStraightGap => "triple straight with gap",
                Self::PairStraight => "pair straight",
                Self::PairStraightGap => "pair straight with gap",
                Self::SingleStraight => "single straight",
                Self::SingleStraightGap => "single straight with gap",
                Self::QuadPairs => "quad with two pairs",
                Self::QuadSingles => "quad with two singles",
                Self::TriplePair => "triple with pair",
                Self::TripleSingle => "triple with single",
                Self::Quad => "quad",
                Self::Triple => "triple",
                Self::Pair => "pair",
                Self::Single => "single",
            }
        )
    }
}

impl TryFrom<&str> for Category {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}
