//! The core-spend policy.
//!
//! Before every fusion the player may spend one core to raise the success
//! chance and another to soften the penalty of a failure. The choice depends
//! only on the class, the level, and market prices, never on luck, so it is
//! a pure function of the cost model.

use fc_core::{CostModel, ItemClass, ModelResult};
use serde::Serialize;

/// Success chance of a fusion without a core.
pub const BASE_SUCCESS: f64 = 0.5;
/// Success chance of a fusion with a core.
pub const CORED_SUCCESS: f64 = 0.65;
/// Success chance a core adds, used to weigh it against its price.
pub const CORE_SUCCESS_GAIN: f64 = 0.15;
/// Tier-loss chance on failure when a protecting core is spent.
pub const PROTECTED_TIER_LOSS: f64 = 0.5;
/// Tier-loss chance on failure without protection.
pub const UNPROTECTED_TIER_LOSS: f64 = 1.0;

/// Odds and core spend for one fusion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttemptPlan {
    /// Probability the fusion succeeds.
    pub success_chance: f64,
    /// Probability a failed fusion loses a tier.
    pub tier_loss_chance: f64,
    /// Cores spent to raise the success chance (0 or 1).
    pub success_cores: u8,
    /// Cores spent to protect against tier loss (0 or 1).
    pub protection_cores: u8,
}

impl AttemptPlan {
    /// Total cores this attempt costs.
    pub fn cores(&self) -> u8 {
        self.success_cores + self.protection_cores
    }
}

/// Decide how many cores a fusion at `level` in `class` is worth.
///
/// Classes outside the low-class group always spend both cores. Low classes
/// buy the success core only if the expected saving (15% of the fee plus an
/// item) reaches a core's price, and at tier 0 buy protection only if half
/// the expected loss of a base item reaches a core's price.
pub fn plan_attempt(model: &CostModel, class: ItemClass, level: usize) -> ModelResult<AttemptPlan> {
    let fee = model.gold_fee(class, level)?;
    let core = model.prices.core() as f64;
    let item = model.prices.item as f64;

    if !model.is_low_class(class) {
        return Ok(AttemptPlan {
            success_chance: CORED_SUCCESS,
            tier_loss_chance: PROTECTED_TIER_LOSS,
            success_cores: 1,
            protection_cores: 1,
        });
    }

    let (success_chance, success_cores) = if (fee as f64 + item) * CORE_SUCCESS_GAIN < core {
        (BASE_SUCCESS, 0)
    } else {
        (CORED_SUCCESS, 1)
    };

    let (tier_loss_chance, protection_cores) =
        if level == 0 && item * (1.0 - success_chance) * 0.5 < core {
            (UNPROTECTED_TIER_LOSS, 0)
        } else {
            (PROTECTED_TIER_LOSS, 1)
        };

    Ok(AttemptPlan {
        success_chance,
        tier_loss_chance,
        success_cores,
        protection_cores,
    })
}
