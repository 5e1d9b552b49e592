use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use fc_core::ItemClass;
use fc_simulation::plan_attempt;

pub fn run(class: u8, config: Option<&Path>) -> Result<(), String> {
    let model = super::load_model(config)?;
    let class = ItemClass::new(class);
    let levels = model.levels(class).map_err(|e| e.to_string())?;

    let group = if model.is_low_class(class) {
        "weighs core prices"
    } else {
        "always spends cores"
    };
    println!("  {} {} {}", "Core policy".bold(), class, format!("({group})").dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Level",
        "Gold fee",
        "Success",
        "Tier loss",
        "Cores",
    ]);

    for level in 0..levels {
        let plan = plan_attempt(&model, class, level).map_err(|e| e.to_string())?;
        let fee = model.gold_fee(class, level).map_err(|e| e.to_string())?;
        table.add_row(vec![
            format!("{level} -> {}", level + 1),
            super::format_cost(fee as f64 / model.reporting_unit, model.reporting_unit),
            format!("{:.0}%", plan.success_chance * 100.0),
            format!("{:.0}%", plan.tier_loss_chance * 100.0),
            plan.cores().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
