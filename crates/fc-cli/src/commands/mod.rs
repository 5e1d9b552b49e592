pub mod defaults;
pub mod policy;
pub mod simulate;

use std::path::Path;

use fc_core::CostModel;

/// Load the cost model from `path`, or fall back to the built-in economy.
fn load_model(path: Option<&Path>) -> Result<CostModel, String> {
    match path {
        Some(path) => CostModel::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(CostModel::default()),
    }
}

/// Format a cost in reporting units, e.g. `1234kk` or `0.03kk`.
///
/// The suffix names the unit (`k` per thousand gold); units with no such
/// name print bare numbers.
fn format_cost(value: f64, unit: f64) -> String {
    let suffix = unit_suffix(unit);
    if value.abs() < 10.0 {
        format!("{value:.2}{suffix}")
    } else {
        format!("{value:.0}{suffix}")
    }
}

fn unit_suffix(unit: f64) -> &'static str {
    const NAMED: [(f64, &str); 4] = [(1.0, ""), (1e3, "k"), (1e6, "kk"), (1e9, "kkk")];
    NAMED
        .iter()
        .find(|(scale, _)| (unit - scale).abs() < 1e-9 * scale)
        .map_or("", |&(_, suffix)| suffix)
}
