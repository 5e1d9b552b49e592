use serde::{Deserialize, Serialize};

use crate::class::TransferMode;
use crate::error::{ModelError, ModelResult};
use crate::model::CostModel;

/// Resources consumed by one trial, from an empty inventory to a finished item.
///
/// Dust, cores and gold are signed because refunds subtract from the running
/// totals; net of a whole trial they never go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Base items bought.
    pub items_purchased: u64,
    /// Dust spent.
    pub dust: i64,
    /// Cores spent.
    pub cores: i64,
    /// Gold spent on fees.
    pub gold: i64,
    /// Fusion attempts made, successful or not.
    pub fusions: u64,
}

impl TrialResult {
    /// Add `amount` dust. Returns the amount as charged, for refunds.
    pub fn charge_dust(&mut self, amount: u64) -> ModelResult<i64> {
        charge(&mut self.dust, amount, "dust")
    }

    /// Add `amount` cores. Returns the amount as charged, for refunds.
    pub fn charge_cores(&mut self, amount: u64) -> ModelResult<i64> {
        charge(&mut self.cores, amount, "cores")
    }

    /// Add `amount` gold. Returns the amount as charged, for refunds.
    pub fn charge_gold(&mut self, amount: u64) -> ModelResult<i64> {
        charge(&mut self.gold, amount, "gold")
    }

    /// Total gold-equivalent cost of the trial, in reporting units.
    ///
    /// Dust is not traded, so it does not contribute. The transfer item is a
    /// fixed purchase added whenever the scenario transfers.
    pub fn total_cost(&self, model: &CostModel, transfer: TransferMode) -> f64 {
        let prices = &model.prices;
        let transfer_item = if transfer.has_transfer() {
            prices.transfer_item as f64
        } else {
            0.0
        };
        let gold = prices.item as f64 * self.items_purchased as f64
            + transfer_item
            + prices.core() as f64 * self.cores as f64
            + self.gold as f64;
        gold / model.reporting_unit
    }

    /// Gold fees converted to reporting units.
    pub fn gold_in_units(&self, model: &CostModel) -> f64 {
        self.gold as f64 / model.reporting_unit
    }
}

fn charge(total: &mut i64, amount: u64, resource: &'static str) -> ModelResult<i64> {
    let amount = i64::try_from(amount).map_err(|_| ModelError::LedgerOverflow { resource })?;
    *total = total
        .checked_add(amount)
        .ok_or(ModelError::LedgerOverflow { resource })?;
    Ok(amount)
}
