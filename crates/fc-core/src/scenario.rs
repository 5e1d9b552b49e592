use serde::{Deserialize, Serialize};

use crate::class::{ItemClass, TransferMode};
use crate::error::{ModelError, ModelResult};
use crate::model::CostModel;

/// What a simulation estimates: the cost of one item of `tier` in `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Class of the item being built.
    pub class: ItemClass,
    /// Nominal target tier.
    pub tier: usize,
    /// How the finished item reaches its base.
    pub transfer: TransferMode,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            class: ItemClass::new(4),
            tier: 5,
            transfer: TransferMode::Convergence,
        }
    }
}

impl Scenario {
    /// Create a scenario without a transfer step.
    pub fn new(class: ItemClass, tier: usize) -> Self {
        Self {
            class,
            tier,
            transfer: TransferMode::None,
        }
    }

    /// Set the transfer mode.
    pub fn with_transfer(mut self, transfer: TransferMode) -> Self {
        self.transfer = transfer;
        self
    }

    /// The tier the fusion chain has to produce before any transfer.
    pub fn working_tier(&self) -> usize {
        self.transfer.working_tier(self.tier)
    }

    /// Check that every table lookup this scenario can make will succeed.
    pub fn validate(&self, model: &CostModel) -> ModelResult<()> {
        if self.tier == 0 {
            return Err(ModelError::InvalidConfig(
                "target tier must be at least 1".into(),
            ));
        }
        let levels = model.levels(self.class)?;
        let working = self.working_tier();
        if levels < working {
            return Err(ModelError::TierOutOfRange {
                class: self.class.number(),
                tier: working,
                levels,
            });
        }
        match self.transfer {
            TransferMode::None => {}
            TransferMode::Plain => {
                model.transfer_cores_for(self.tier)?;
                model.gold_fee(self.class, self.tier)?;
            }
            TransferMode::Convergence => {
                model.transfer_cores_for(self.tier)?;
                model.convergence_gold_for(self.tier)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, tier {}", self.class, self.tier)?;
        if self.transfer.has_transfer() {
            write!(f, " ({} transfer)", self.transfer)?;
        }
        Ok(())
    }
}
