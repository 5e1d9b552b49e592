use fc_core::{CostModel, ModelResult, Scenario, TransferMode, TrialResult};

/// Charge the transfer that moves the finished item onto its base.
///
/// Runs once per trial after the fusion loop; it never draws. Costs are
/// keyed by the nominal target tier.
pub fn apply_transfer(
    model: &CostModel,
    scenario: &Scenario,
    ledger: &mut TrialResult,
) -> ModelResult<()> {
    let tier = scenario.tier;
    match scenario.transfer {
        TransferMode::None => {}
        TransferMode::Plain => {
            ledger.charge_dust(model.fusion_dust)?;
            ledger.charge_cores(model.transfer_cores_for(tier)?)?;
            ledger.charge_gold(model.gold_fee(scenario.class, tier)?)?;
        }
        TransferMode::Convergence => {
            ledger.charge_dust(model.convergence_dust)?;
            ledger.charge_cores(model.transfer_cores_for(tier)?)?;
            ledger.charge_gold(model.convergence_gold_for(tier)?)?;
        }
    }
    Ok(())
}
