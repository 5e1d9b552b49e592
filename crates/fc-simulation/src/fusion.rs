//! One fusion attempt: pay, roll for success, then roll for tier loss or a
//! refund bonus.

use fc_core::{CostModel, ItemClass, ModelResult, RefundOdds, TrialResult};
use serde::Serialize;

use crate::draw::DrawSource;
use crate::inventory::Inventory;
use crate::policy::plan_attempt;

/// A refund bonus granted by a successful fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bonus {
    /// The attempt's dust is returned.
    Dust,
    /// The attempt's cores are returned.
    Core,
    /// The attempt's gold fee is returned.
    Gold,
    /// An extra item one tier below the fused level.
    DowngradedItem,
    /// An extra item of the fused level.
    SameItem,
    /// An extra item one tier above the fused level.
    UpgradedItem,
}

impl Bonus {
    /// All bonuses in check order.
    pub const ORDER: [Self; 6] = [
        Self::Dust,
        Self::Core,
        Self::Gold,
        Self::DowngradedItem,
        Self::SameItem,
        Self::UpgradedItem,
    ];

    fn chance(self, odds: &RefundOdds) -> f64 {
        match self {
            Self::Dust => odds.dust,
            Self::Core => odds.core,
            Self::Gold => odds.gold,
            Self::DowngradedItem => odds.downgraded_item,
            Self::SameItem => odds.same_item,
            Self::UpgradedItem => odds.upgraded_item,
        }
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dust => write!(f, "dust refund"),
            Self::Core => write!(f, "core refund"),
            Self::Gold => write!(f, "gold refund"),
            Self::DowngradedItem => write!(f, "downgraded item"),
            Self::SameItem => write!(f, "same-tier item"),
            Self::UpgradedItem => write!(f, "upgraded item"),
        }
    }
}

/// How a fusion attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FusionOutcome {
    /// The pair became one item of the next tier.
    Success {
        /// The refund bonus that fired, if any.
        bonus: Option<Bonus>,
    },
    /// The fusion failed but both items survived.
    Failed,
    /// The fusion failed and one item dropped a tier (or was destroyed at
    /// tier 0).
    TierLoss,
}

/// Attempt one fusion of a pair at `level`.
///
/// Dust, the gold fee, and the planned cores are charged before any draw.
/// The first draw decides success. A failure takes a second draw for tier
/// loss; a success walks the refund checks in order, one draw each, until
/// one fires.
pub fn attempt_fusion<D: DrawSource + ?Sized>(
    model: &CostModel,
    class: ItemClass,
    level: usize,
    inventory: &mut Inventory,
    ledger: &mut TrialResult,
    draws: &mut D,
) -> ModelResult<FusionOutcome> {
    let plan = plan_attempt(model, class, level)?;
    let dust = ledger.charge_dust(model.fusion_dust)?;
    let fee = ledger.charge_gold(model.gold_fee(class, level)?)?;
    let cores = ledger.charge_cores(u64::from(plan.cores()))?;
    ledger.fusions += 1;

    if draws.next_draw() > plan.success_chance {
        if draws.next_draw() < plan.tier_loss_chance {
            inventory.take(level, 1);
            if level > 0 {
                inventory.add(level - 1, 1);
            }
            return Ok(FusionOutcome::TierLoss);
        }
        return Ok(FusionOutcome::Failed);
    }

    let bonus = roll_bonus(&model.refunds, level, draws);
    match bonus {
        Some(Bonus::Dust) => ledger.dust -= dust,
        Some(Bonus::Core) => ledger.cores -= cores,
        Some(Bonus::Gold) => ledger.gold -= fee,
        Some(Bonus::DowngradedItem) => inventory.add(level - 1, 1),
        Some(Bonus::SameItem) => inventory.add(level, 1),
        Some(Bonus::UpgradedItem) => inventory.add(level + 1, 1),
        None => {}
    }
    inventory.take(level, 2);
    inventory.add(level + 1, 1);
    Ok(FusionOutcome::Success { bonus })
}

/// Walk the refund checks in order and return the first that fires.
///
/// Every check consumes a draw, including the downgraded-item check at
/// tier 0 where it can never fire.
fn roll_bonus<D: DrawSource + ?Sized>(
    odds: &RefundOdds,
    level: usize,
    draws: &mut D,
) -> Option<Bonus> {
    Bonus::ORDER.into_iter().find(|bonus| {
        let hit = draws.next_draw() < bonus.chance(odds);
        hit && !(*bonus == Bonus::DowngradedItem && level == 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ScriptedDraws;
    use fc_core::ModelError;

    /// Draw that never triggers a refund under the default odds.
    const MISS: f64 = 0.99;

    fn setup(level: usize) -> (CostModel, Inventory, TrialResult) {
        let mut inv = Inventory::new(4);
        inv.add(level, 2);
        (CostModel::default(), inv, TrialResult::default())
    }

    fn fuse(
        model: &CostModel,
        level: usize,
        inv: &mut Inventory,
        ledger: &mut TrialResult,
        script: &[f64],
    ) -> (FusionOutcome, u64) {
        let mut draws = ScriptedDraws::new(script.to_vec());
        let outcome =
            attempt_fusion(model, ItemClass::new(4), level, inv, ledger, &mut draws).unwrap();
        (outcome, draws.drawn())
    }

    #[test]
    fn plain_success_without_bonus() {
        let (model, mut inv, mut ledger) = setup(1);
        let script = [0.0, MISS, MISS, MISS, MISS, MISS, MISS];
        let (outcome, drawn) = fuse(&model, 1, &mut inv, &mut ledger, &script);
        assert_eq!(outcome, FusionOutcome::Success { bonus: None });
        assert_eq!(drawn, 7);
        assert_eq!(inv.counts(), &[0, 0, 1, 0, 0]);
        assert_eq!(ledger.dust, 100);
        assert_eq!(ledger.cores, 2);
        assert_eq!(ledger.gold, 20_000_000);
        assert_eq!(ledger.fusions, 1);
    }

    #[test]
    fn failure_without_tier_loss_keeps_pair_and_sinks_cost() {
        let (model, mut inv, mut ledger) = setup(1);
        let (outcome, drawn) = fuse(&model, 1, &mut inv, &mut ledger, &[0.9, 0.6]);
        assert_eq!(outcome, FusionOutcome::Failed);
        assert_eq!(drawn, 2);
        assert_eq!(inv.counts(), &[0, 2, 0, 0, 0]);
        assert_eq!(ledger.dust, 100);
        assert_eq!(ledger.cores, 2);
        assert_eq!(ledger.gold, 20_000_000);
    }

    #[test]
    fn tier_loss_downgrades_one_item() {
        let (model, mut inv, mut ledger) = setup(2);
        let (outcome, _) = fuse(&model, 2, &mut inv, &mut ledger, &[0.9, 0.1]);
        assert_eq!(outcome, FusionOutcome::TierLoss);
        assert_eq!(inv.counts(), &[0, 1, 1, 0, 0]);
    }

    #[test]
    fn tier_loss_at_base_destroys_item() {
        let (model, mut inv, mut ledger) = setup(0);
        let (outcome, _) = fuse(&model, 0, &mut inv, &mut ledger, &[0.9, 0.1]);
        assert_eq!(outcome, FusionOutcome::TierLoss);
        assert_eq!(inv.counts(), &[1, 0, 0, 0, 0]);
    }

    #[test]
    fn each_bonus_fires_alone() {
        let base = TrialResult {
            dust: 100,
            cores: 2,
            gold: 20_000_000,
            fusions: 1,
            ..TrialResult::default()
        };
        for (index, bonus) in Bonus::ORDER.into_iter().enumerate() {
            let (model, mut inv, mut ledger) = setup(1);
            // success, then misses until the forced check hits
            let mut script = vec![0.0];
            script.extend(std::iter::repeat_n(MISS, index));
            script.push(0.0);
            script.extend(std::iter::repeat_n(MISS, 5 - index));

            let (outcome, drawn) = fuse(&model, 1, &mut inv, &mut ledger, &script);
            assert_eq!(outcome, FusionOutcome::Success { bonus: Some(bonus) });
            assert_eq!(drawn, 2 + index as u64, "{bonus} should stop the chain");

            let mut expected_ledger = base;
            let mut expected_inv = vec![0, 0, 1, 0, 0];
            match bonus {
                Bonus::Dust => expected_ledger.dust = 0,
                Bonus::Core => expected_ledger.cores = 0,
                Bonus::Gold => expected_ledger.gold = 0,
                Bonus::DowngradedItem => expected_inv[0] += 1,
                Bonus::SameItem => expected_inv[1] += 1,
                Bonus::UpgradedItem => expected_inv[2] += 1,
            }
            assert_eq!(ledger, expected_ledger, "ledger after {bonus}");
            assert_eq!(inv.counts(), expected_inv.as_slice(), "inventory after {bonus}");
        }
    }

    #[test]
    fn downgraded_bonus_skipped_at_base_tier() {
        let (model, mut inv, mut ledger) = setup(0);
        // dust, core, gold miss; downgraded hits but cannot apply; same-tier hits
        let script = [0.0, MISS, MISS, MISS, 0.0, 0.0, MISS];
        let (outcome, drawn) = fuse(&model, 0, &mut inv, &mut ledger, &script);
        assert_eq!(
            outcome,
            FusionOutcome::Success {
                bonus: Some(Bonus::SameItem)
            }
        );
        assert_eq!(drawn, 6);
        assert_eq!(inv.counts(), &[1, 1, 0, 0, 0]);
    }

    #[test]
    fn core_refund_returns_only_planned_cores() {
        let mut model = CostModel::default();
        model.refunds = RefundOdds {
            core: 1.0,
            ..RefundOdds::none()
        };
        let mut inv = Inventory::new(2);
        inv.add(0, 2);
        let mut ledger = TrialResult {
            cores: 5,
            ..TrialResult::default()
        };
        let mut draws = ScriptedDraws::new([0.0, 0.5, 0.5]);
        let outcome =
            attempt_fusion(&model, ItemClass::new(3), 0, &mut inv, &mut ledger, &mut draws)
                .unwrap();
        assert_eq!(
            outcome,
            FusionOutcome::Success {
                bonus: Some(Bonus::Core)
            }
        );
        assert_eq!(ledger.cores, 5);
    }

    #[test]
    fn fee_overflow_fails_instead_of_wrapping() {
        let model = CostModel {
            gold_fees: vec![vec![i64::MAX as u64]],
            low_class_threshold: 0,
            ..CostModel::default()
        };
        let mut inv = Inventory::new(1);
        inv.add(0, 2);
        let mut ledger = TrialResult {
            gold: 1,
            ..TrialResult::default()
        };
        let mut draws = ScriptedDraws::new([0.0]);
        let err = attempt_fusion(&model, ItemClass::new(1), 0, &mut inv, &mut ledger, &mut draws)
            .unwrap_err();
        assert!(matches!(err, ModelError::LedgerOverflow { resource: "gold" }));
        assert_eq!(draws.drawn(), 0);
    }

    #[test]
    fn bonus_display() {
        assert_eq!(Bonus::Dust.to_string(), "dust refund");
        assert_eq!(Bonus::UpgradedItem.to_string(), "upgraded item");
    }
}
