use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::class::ItemClass;
use crate::error::{ModelError, ModelResult};
use crate::refund::RefundOdds;

/// Market prices, in gold, used to weigh resources against each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPrices {
    /// Average price of one base item.
    pub item: u64,
    /// Price of the base item a finished item is transferred onto.
    pub transfer_item: u64,
    /// Average price of one sliver.
    pub sliver: u64,
    /// Slivers needed to make one core.
    pub slivers_per_core: u64,
}

impl Default for UnitPrices {
    fn default() -> Self {
        Self {
            item: 3_000_000,
            transfer_item: 100_000_000,
            sliver: 15_000,
            slivers_per_core: 50,
        }
    }
}

impl UnitPrices {
    /// Price of one core.
    pub fn core(&self) -> u64 {
        self.sliver.saturating_mul(self.slivers_per_core)
    }
}

/// The static economy a simulation runs against.
///
/// Immutable for the duration of a run. Every field has a default, so a
/// partial JSON document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Unit prices.
    pub prices: UnitPrices,
    /// Gold fee per fusion, one row per class, one column per level.
    pub gold_fees: Vec<Vec<u64>>,
    /// Cores needed to transfer onto a tier `t` item, at index `t - 1`.
    pub transfer_cores: Vec<u64>,
    /// Gold fee of a convergence onto a tier `t` item, at index `t - 1`.
    pub convergence_gold_fees: Vec<u64>,
    /// Refund bonus odds.
    pub refunds: RefundOdds,
    /// Flat dust paid by every fusion attempt and plain transfer.
    pub fusion_dust: u64,
    /// Flat dust paid by a convergence.
    pub convergence_dust: u64,
    /// Classes numbered below this weigh whether cores are worth spending.
    pub low_class_threshold: u8,
    /// Gold per reporting unit (1 000 000 reports costs in "kk").
    pub reporting_unit: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            prices: UnitPrices::default(),
            gold_fees: vec![
                vec![25_000],
                vec![750_000, 5_000_000],
                vec![4_000_000, 10_000_000, 20_000_000],
                vec![
                    8_000_000,
                    20_000_000,
                    40_000_000,
                    65_000_000,
                    100_000_000,
                    250_000_000,
                    750_000_000,
                    2_500_000_000,
                    8_000_000_000,
                    15_000_000_000,
                ],
            ],
            transfer_cores: vec![1, 2, 5, 10, 15, 25, 35, 50, 100],
            convergence_gold_fees: vec![0, 0, 0, 0, 2_000_000_000],
            refunds: RefundOdds::default(),
            fusion_dust: 100,
            convergence_dust: 160,
            low_class_threshold: 4,
            reporting_unit: 1_000_000.0,
        }
    }
}

impl CostModel {
    /// Parse a cost model from a JSON document.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Read and parse a cost model from a JSON file.
    pub fn load(path: &Path) -> ModelResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the model as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of classes the fee table defines.
    pub fn class_count(&self) -> usize {
        self.gold_fees.len()
    }

    /// Number of fusion levels defined for a class.
    pub fn levels(&self, class: ItemClass) -> ModelResult<usize> {
        self.fee_row(class).map(<[u64]>::len)
    }

    /// Gold fee for a fusion of two items of `level` in `class`.
    pub fn gold_fee(&self, class: ItemClass, level: usize) -> ModelResult<u64> {
        let row = self.fee_row(class)?;
        row.get(level)
            .copied()
            .ok_or(ModelError::TierOutOfRange {
                class: class.number(),
                tier: level,
                levels: row.len(),
            })
    }

    /// Cores needed to transfer onto an item of the given tier.
    pub fn transfer_cores_for(&self, tier: usize) -> ModelResult<u64> {
        tier_entry(&self.transfer_cores, "transfer core table", tier)
    }

    /// Gold fee of a convergence onto an item of the given tier.
    pub fn convergence_gold_for(&self, tier: usize) -> ModelResult<u64> {
        tier_entry(
            &self.convergence_gold_fees,
            "convergence gold table",
            tier,
        )
    }

    /// True if the class weighs core spending against item and fee prices.
    pub fn is_low_class(&self, class: ItemClass) -> bool {
        class.number() < self.low_class_threshold
    }

    /// Check the model for values no simulation could use.
    pub fn validate(&self) -> ModelResult<()> {
        self.refunds.validate()?;
        if self.gold_fees.is_empty() {
            return Err(ModelError::InvalidConfig("gold fee table is empty".into()));
        }
        if let Some(pos) = self.gold_fees.iter().position(Vec::is_empty) {
            return Err(ModelError::InvalidConfig(format!(
                "gold fee row for class {} is empty",
                pos + 1
            )));
        }
        self.check_ledger_range()?;
        if self.prices.slivers_per_core == 0 {
            return Err(ModelError::InvalidConfig(
                "slivers_per_core must be at least 1".into(),
            ));
        }
        if !self.reporting_unit.is_finite() || self.reporting_unit <= 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "reporting_unit must be positive, got {}",
                self.reporting_unit
            )));
        }
        Ok(())
    }

    /// Every amount charged to a ledger must fit its signed totals.
    fn check_ledger_range(&self) -> ModelResult<()> {
        let tables: [(&str, &[u64]); 4] = [
            ("transfer_cores", &self.transfer_cores),
            ("convergence_gold_fees", &self.convergence_gold_fees),
            ("fusion_dust", std::slice::from_ref(&self.fusion_dust)),
            ("convergence_dust", std::slice::from_ref(&self.convergence_dust)),
        ];
        let rows = self
            .gold_fees
            .iter()
            .map(|row| ("gold_fees", row.as_slice()));
        for (name, values) in rows.chain(tables) {
            if let Some(&value) = values.iter().find(|&&v| i64::try_from(v).is_err()) {
                return Err(ModelError::InvalidConfig(format!(
                    "{name} value {value} exceeds {}",
                    i64::MAX
                )));
            }
        }
        Ok(())
    }

    fn fee_row(&self, class: ItemClass) -> ModelResult<&[u64]> {
        class
            .row()
            .and_then(|row| self.gold_fees.get(row))
            .map(Vec::as_slice)
            .ok_or(ModelError::UnknownClass {
                class: class.number(),
                known: self.gold_fees.len(),
            })
    }
}

fn tier_entry(table: &[u64], name: &'static str, tier: usize) -> ModelResult<u64> {
    tier.checked_sub(1)
        .and_then(|idx| table.get(idx))
        .copied()
        .ok_or(ModelError::MissingTableEntry { table: name, tier })
}
