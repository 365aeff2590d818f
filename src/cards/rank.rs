use super::error::CardError;

/// Face value of a card. Discriminants are the numeric values 3..=16
/// used by every comparison in the game; suit never takes part.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 15,
    Joker = 16,
}

impl Rank {
    pub const MIN: Self = Rank::Three;
    pub const MAX: Self = Rank::Joker;
    pub const COUNT: usize = 14;
    pub const ALL: [Self; Self::COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Joker,
    ];

    pub fn value(&self) -> u8 {
        *self as u8
    }
    /// The rank `gap` steps above this one, or None past the joker.
    pub fn next(&self, gap: u8) -> Option<Self> {
        self.value()
            .checked_add(gap)
            .and_then(|v| Self::try_from(v).ok())
    }
    /// Twos and jokers never take part in a straight.
    pub fn is_sequential(&self) -> bool {
        *self < Rank::Two
    }
    /// Dense 0..14 position, for per-rank tables.
    pub fn position(&self) -> usize {
        (self.value() - Self::MIN.value()) as usize
    }
}

/// u8 isomorphism over the numeric values 3..=16
impl TryFrom<u8> for Rank {
    type Error = CardError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.value() == n)
            .ok_or_else(|| CardError::InvalidRank(n.to_string()))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.value()
    }
}

/// str isomorphism, accepting both the short ("X", "T") and long ("10", "JOKER") names
impl TryFrom<&str> for Rank {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "X" | "JOKER" => Ok(Rank::Joker),
            _ => Err(CardError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Joker => "X",
            }
        )
    }
}
