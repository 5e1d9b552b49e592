//! Stochastic fusion simulator and Monte Carlo statistics.
//!
//! A trial starts with an empty inventory and keeps buying base items and
//! fusing pairs until one item of the working tier exists, then pays for the
//! optional transfer. [`MonteCarlo`] runs many independent trials, across
//! worker threads when asked, and reduces their costs to a [`Summary`].

/// Run parameters: seed, trial count, workers, attempt guard.
pub mod config;
/// The uniform draw seam and a scripted replay source.
pub mod draw;
/// Error types for the simulation crate.
pub mod error;
/// A single fusion attempt and its outcomes.
pub mod fusion;
/// Text-free histogram binning of trial costs.
pub mod histogram;
/// Per-tier item counts for one trial.
pub mod inventory;
/// Fan-out/fan-in runner over many trials.
pub mod monte_carlo;
/// The deterministic core-spend policy.
pub mod policy;
/// Summary statistics over trial costs.
pub mod stats;
/// The one-trial fusion simulator.
pub mod trial;
/// The fixed-cost transfer step that closes a trial.
pub mod transfer;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`draw::DrawSource`] and [`draw::ScriptedDraws`].
pub use draw::{DrawSource, ScriptedDraws};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of the fusion outcome types.
pub use fusion::{Bonus, FusionOutcome};
/// Re-export of [`histogram::Histogram`].
pub use histogram::Histogram;
/// Re-export of [`inventory::Inventory`].
pub use inventory::Inventory;
/// Re-exports of [`monte_carlo::MonteCarlo`] and [`monte_carlo::RunReport`].
pub use monte_carlo::{MonteCarlo, RunReport};
/// Re-exports of [`policy::AttemptPlan`] and [`policy::plan_attempt`].
pub use policy::{AttemptPlan, plan_attempt};
/// Re-exports of [`stats::Summary`] and [`stats::PercentilePoint`].
pub use stats::{PercentilePoint, Summary};
/// Re-export of [`trial::FusionSimulator`].
pub use trial::FusionSimulator;
