use serde::{Deserialize, Serialize};

/// A 1-based item class. Class 1 is the cheapest; higher classes have
/// steeper fees and more tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemClass(pub u8);

impl ItemClass {
    /// Create a class from its 1-based number.
    pub fn new(number: u8) -> Self {
        Self(number)
    }

    /// The 1-based class number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Row index into per-class tables, or `None` for class 0.
    pub fn row(self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}

impl std::fmt::Display for ItemClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "class {}", self.0)
    }
}

/// Whether a trial ends by transferring the finished item onto another base.
///
/// A transfer lets the fusion chain build an item one tier above the target
/// and move it down onto a fresh base item. Convergence is the discounted
/// variant that skips the extra tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Fuse straight up to the target tier.
    None,
    /// Fuse to one tier above the target, then transfer down.
    Plain,
    /// Fuse to the target tier and converge it onto the new base.
    #[default]
    Convergence,
}

impl TransferMode {
    /// Parse a transfer mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" | "no" => Some(Self::None),
            "plain" | "transfer" => Some(Self::Plain),
            "convergence" | "converge" => Some(Self::Convergence),
            _ => None,
        }
    }

    /// True if the trial ends with a transfer step.
    pub fn has_transfer(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The highest tier the fusion chain must reach for a nominal target.
    pub fn working_tier(self, target: usize) -> usize {
        match self {
            Self::Plain => target + 1,
            Self::None | Self::Convergence => target,
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Plain => write!(f, "plain"),
            Self::Convergence => write!(f, "convergence"),
        }
    }
}
