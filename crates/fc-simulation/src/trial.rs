use fc_core::{CostModel, Scenario, TrialResult};

use crate::draw::DrawSource;
use crate::error::{SimError, SimResult};
use crate::fusion::attempt_fusion;
use crate::inventory::Inventory;
use crate::transfer::apply_transfer;

/// Runs single trials of one scenario against a cost model.
///
/// Holds no per-trial state: every call to [`FusionSimulator::run_trial`]
/// starts from an empty inventory and a fresh ledger.
#[derive(Debug, Clone, Copy)]
pub struct FusionSimulator<'a> {
    model: &'a CostModel,
    scenario: Scenario,
    max_attempts: Option<u64>,
}

impl<'a> FusionSimulator<'a> {
    /// Validate the scenario against the model and build a simulator.
    pub fn new(model: &'a CostModel, scenario: Scenario) -> SimResult<Self> {
        model.validate()?;
        scenario.validate(model)?;
        Ok(Self {
            model,
            scenario,
            max_attempts: None,
        })
    }

    /// Abort trials that make more than `limit` fusion attempts.
    pub fn with_max_attempts(mut self, limit: Option<u64>) -> Self {
        self.max_attempts = limit;
        self
    }

    /// The scenario being simulated.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The cost model in use.
    pub fn model(&self) -> &CostModel {
        self.model
    }

    /// Run one trial: fuse from nothing up to the working tier, then pay
    /// for the transfer.
    ///
    /// After every attempt the search for the next pair restarts from the
    /// top tier. A failed attempt that loses nothing leaves the pair in
    /// place to be tried again on the next pass.
    pub fn run_trial<D: DrawSource + ?Sized>(&self, draws: &mut D) -> SimResult<TrialResult> {
        self.run_trial_observed(draws, |_| {})
    }

    /// Like [`FusionSimulator::run_trial`], calling `observe` with the
    /// inventory after every attempt.
    pub fn run_trial_observed<D, F>(&self, draws: &mut D, mut observe: F) -> SimResult<TrialResult>
    where
        D: DrawSource + ?Sized,
        F: FnMut(&Inventory),
    {
        let class = self.scenario.class;
        let mut inventory = Inventory::new(self.scenario.working_tier());
        let mut ledger = TrialResult::default();

        while !inventory.is_complete() {
            if let Some(limit) = self.max_attempts.filter(|&limit| ledger.fusions >= limit) {
                return Err(SimError::AttemptLimitExceeded { limit });
            }
            let (level, bought) = inventory.next_pair();
            ledger.items_purchased += bought;
            attempt_fusion(
                self.model,
                class,
                level,
                &mut inventory,
                &mut ledger,
                draws,
            )?;
            observe(&inventory);
        }

        apply_transfer(self.model, &self.scenario, &mut ledger)?;
        Ok(ledger)
    }
}
