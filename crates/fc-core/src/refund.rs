use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Probabilities of the bonus refunds a successful fusion may trigger.
///
/// The checks run in field order and at most one fires per success.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundOdds {
    /// The fusion's dust is returned.
    pub dust: f64,
    /// The cores spent on the fusion are returned.
    pub core: f64,
    /// The gold fee is returned.
    pub gold: f64,
    /// An extra item one tier below the fused level is granted.
    pub downgraded_item: f64,
    /// An extra item of the fused level is granted.
    pub same_item: f64,
    /// An extra item one tier above the fused level is granted.
    pub upgraded_item: f64,
}

impl Default for RefundOdds {
    fn default() -> Self {
        Self {
            dust: 1.0 / 6.0,
            core: 1.0 / 20.0,
            gold: 1.0 / 100.0,
            downgraded_item: 1.0 / 250.0,
            same_item: 1.0 / 500.0,
            upgraded_item: 1.0 / 1000.0,
        }
    }
}

impl RefundOdds {
    /// Odds with every refund disabled.
    pub fn none() -> Self {
        Self {
            dust: 0.0,
            core: 0.0,
            gold: 0.0,
            downgraded_item: 0.0,
            same_item: 0.0,
            upgraded_item: 0.0,
        }
    }

    /// The six probabilities with their names, in check order.
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("dust", self.dust),
            ("core", self.core),
            ("gold", self.gold),
            ("downgraded_item", self.downgraded_item),
            ("same_item", self.same_item),
            ("upgraded_item", self.upgraded_item),
        ]
    }

    /// Check that every probability lies within `0.0..=1.0`.
    pub fn validate(&self) -> ModelResult<()> {
        for (name, value) in self.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
