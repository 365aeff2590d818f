use crate::moves::Combo;

/// Fewest-plays answer: how many plays, and which.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub steps: usize,
    pub path: Vec<Combo>,
}

impl From<Vec<Combo>> for Solution {
    fn from(path: Vec<Combo>) -> Self {
        Self {
            steps: path.len(),
            path,
        }
    }
}

/// Best-valued answer: its score, how many plays, and which.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub score: f64,
    pub steps: usize,
    pub path: Vec<Combo>,
}

impl Scored {
    /// Placeholder every recorded terminal beats.
    pub fn unscored() -> Self {
        Self {
            score: crate::UNSCORED,
            steps: 0,
            path: Vec::new(),
        }
    }
    /// Score of a terminal reached in `steps` plays worth `value` in total:
    /// the logarithm of the value in base `steps`.
    ///
    /// No value scores [`crate::NO_SCORE`]. A single play would make the
    /// base degenerate, so [`crate::DEGENERATE_BASE`] stands in for it.
    pub fn score(value: u32, steps: usize) -> f64 {
        match (value, steps) {
            (0, _) => crate::NO_SCORE,
            (v, 0 | 1) => (v as f64).ln() / crate::DEGENERATE_BASE.ln(),
            (v, n) => (v as f64).ln() / (n as f64).ln(),
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "steps {}", self.steps)?;
        for (i, combo) in self.path.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, combo)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Scored {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "score {:.4} steps {}", self.score, self.steps)?;
        for (i, combo) in self.path.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, combo)?;
        }
        Ok(())
    }
}
