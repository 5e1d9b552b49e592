use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use fc_core::{ItemClass, Scenario, TransferMode};
use fc_simulation::{Histogram, MonteCarlo, RunReport, SimConfig};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 50;
/// Most rows a text histogram shows.
const HISTOGRAM_ROWS: usize = 25;

pub struct SimulateArgs {
    pub class: u8,
    pub tier: usize,
    pub transfer: String,
    pub trials: usize,
    pub seed: u64,
    pub workers: Option<usize>,
    pub max_attempts: Option<u64>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub histogram: bool,
}

pub fn run(args: &SimulateArgs) -> Result<(), String> {
    let model = super::load_model(args.config.as_deref())?;
    let transfer = TransferMode::parse(&args.transfer).ok_or_else(|| {
        format!(
            "unknown transfer mode '{}' (expected none, plain, or convergence)",
            args.transfer
        )
    })?;
    let scenario = Scenario::new(ItemClass::new(args.class), args.tier).with_transfer(transfer);

    let mut config = SimConfig::default()
        .with_seed(args.seed)
        .with_trials(args.trials);
    config = match args.workers {
        Some(n) => config.with_workers(n),
        None => config.with_available_parallelism(),
    };
    if let Some(limit) = args.max_attempts {
        config = config.with_max_attempts(limit);
    }

    let mc = MonteCarlo::new(&model, scenario, config).map_err(|e| e.to_string())?;
    let report = mc.run().map_err(|e| format!("simulation error: {e}"))?;

    if args.json {
        let value = serde_json::json!({
            "scenario": report.scenario,
            "summary": report.summary,
        });
        let json = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    print_summary(&report, args.seed, model.reporting_unit);
    if args.histogram {
        let histogram = report.histogram().map_err(|e| e.to_string())?;
        print_histogram(&histogram, report.summary.mean_cost, model.reporting_unit);
    }
    Ok(())
}

fn print_summary(report: &RunReport, seed: u64, unit: f64) {
    let cost = |value| super::format_cost(value, unit);
    let summary = &report.summary;
    println!(
        "  {} {} {}",
        "Fusion cost".bold(),
        report.scenario,
        format!("({} trials, seed={seed})", summary.trials).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statistic", "Value"]);
    let rows = [
        ("mean total cost", cost(summary.mean_cost)),
        ("standard deviation", cost(summary.std_dev)),
        ("min", cost(summary.min_cost)),
        ("max", cost(summary.max_cost)),
        ("mean item count", format!("{:.2}", summary.mean_items)),
        ("mean dust", format!("{:.1}", summary.mean_dust)),
        ("mean cores", format!("{:.2}", summary.mean_cores)),
        ("mean gold fees", cost(summary.mean_gold)),
    ];
    for (name, value) in rows {
        table.add_row(vec![name.to_string(), value]);
    }
    align_right(&mut table, 1);
    println!("{table}");
    println!();

    println!("  {}", "Percentiles".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Percentile", "Total cost"]);
    for point in &summary.percentiles {
        let label = format!("{:.0}%", point.percentile);
        let label = if point.percentile == 50.0 {
            label.bold().to_string()
        } else {
            label
        };
        table.add_row(vec![label, cost(point.value)]);
    }
    align_right(&mut table, 1);
    println!("{table}");
    println!();
}

fn print_histogram(histogram: &Histogram, mean: f64, unit: f64) {
    println!("  {}", "Distribution".bold().underline());
    println!();

    let group = histogram.counts.len().div_ceil(HISTOGRAM_ROWS);
    let rows: Vec<(f64, f64, u64)> = histogram
        .counts
        .chunks(group)
        .enumerate()
        .map(|(i, chunk)| {
            let (lo, _) = histogram.bin_range(i * group);
            let (_, hi) = histogram.bin_range(i * group + chunk.len() - 1);
            (lo, hi, chunk.iter().sum())
        })
        .collect();
    let peak = rows.iter().map(|r| r.2).max().unwrap_or(0).max(1);

    for (lo, hi, count) in rows {
        let len = (count as f64 / peak as f64 * BAR_WIDTH as f64).round() as usize;
        let bar = "#".repeat(len);
        let label = format!(
            "{:>8} - {:<8}",
            super::format_cost(lo, unit),
            super::format_cost(hi, unit)
        );
        let bar = if (lo..hi).contains(&mean) {
            bar.red()
        } else {
            bar.cyan()
        };
        println!("  {label} {bar} {}", count.to_string().dimmed());
    }
    if histogram.overflow > 0 {
        println!(
            "  {}",
            format!("{} trials above the plotted range", histogram.overflow).dimmed()
        );
    }
    println!();
}

fn align_right(table: &mut Table, column: usize) {
    if let Some(col) = table.column_mut(column) {
        col.set_cell_alignment(CellAlignment::Right);
    }
}
