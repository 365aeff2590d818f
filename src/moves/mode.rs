/// How straights are enumerated.
///
/// - `All` emits every window of every run, from every start rank.
/// - `Longest` skips start ranks already covered by an earlier run and
///   emits each run together with its front-trimmed windows.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    All,
    Longest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    InvalidSearchMode(String),
}

impl std::fmt::Display for ModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSearchMode(s) => write!(f, "invalid search mode: {}", s),
        }
    }
}

impl std::error::Error for ModeError {}

impl std::str::FromStr for Mode {
    type Err = ModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "longest" => Ok(Self::Longest),
            _ => Err(ModeError::InvalidSearchMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Longest => write!(f, "longest"),
        }
    }
}
