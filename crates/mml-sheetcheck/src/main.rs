//! MegaMekLab Headless Record Sheet Harness
//!
//! Runs the weapon bay pass over unit designs and checks the printed weapon
//! table without the editor or the SVG pipeline.
//!
//! Usage:
//!   cargo run -p mml-sheetcheck
//!   cargo run -p mml-sheetcheck -- --verbose
//!   cargo run -p mml-sheetcheck -- --data my_units.json --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mml_print::bay::BayGroup;
use mml_print::design::{load_designs, validate_design, UnitDesign};
use mml_print::sheet::{bay_rows, collect_bay_groups, BayRow};

// ── Bundled sample designs (same file the integration tests use) ────────
const SAMPLE_UNITS: &str = include_str!("../../../data/sample_units.json");

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless weapon bay check for record sheets")]
struct Cli {
    /// Unit design file (JSON array). Defaults to the bundled samples.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print every check, not just failures, and enable debug logging.
    #[arg(long)]
    verbose: bool,

    /// Print raw per-bay groups without merging mirror bays.
    #[arg(long)]
    no_merge: bool,

    /// Print weapon tables as JSON instead of text.
    #[arg(long)]
    json: bool,
}

// ── Check harness ───────────────────────────────────────────────────────

struct CheckResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match &cli.data {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => SAMPLE_UNITS.to_string(),
    };
    let designs = load_designs(&source).context("failed to load unit designs")?;
    tracing::info!("Loaded {} unit designs", designs.len());

    println!("=== MegaMekLab Weapon Bay Harness ===\n");

    let mut results = Vec::new();
    for design in &designs {
        let groups = if cli.no_merge {
            collect_bay_groups(&design.bays)
        } else {
            design.bay_groups()
        };
        let rows = bay_rows(&groups);
        print_table(design, &rows, cli.json)?;
        results.extend(check_design(design, &groups, cli.no_merge));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "mml_print=debug,mml_sheetcheck=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Also installs the bridge that forwards `log` records from mml-print.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn print_table(design: &UnitDesign, rows: &[BayRow], json: bool) -> Result<()> {
    if json {
        let table = serde_json::json!({ "name": design.name, "rows": rows });
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("--- {} ---", design.name);
    for row in rows {
        println!("  {:<16} {}", row.label, row.weapons.join(", "));
        if !row.ammo.is_empty() {
            println!("  {:<16} ammo: {}", "", row.ammo.join(", "));
        }
        if !row.notes.is_empty() {
            println!("  {:<16} {}", "", row.notes.join(", "));
        }
    }
    Ok(())
}

// ── Checks ──────────────────────────────────────────────────────────────

fn check_design(design: &UnitDesign, groups: &[BayGroup], raw: bool) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let name = &design.name;

    let issues = validate_design(design);
    results.push(CheckResult {
        name: format!("{name}: design_valid"),
        passed: issues.is_empty(),
        detail: if issues.is_empty() {
            format!("{} bays", design.bays.len())
        } else {
            format!("{issues:?}")
        },
    });

    // Every mounted weapon shows up once per location it is listed under
    let mounted: u32 = design.bays.iter().map(|b| b.weapons.len() as u32).sum();
    let printed: u32 = groups
        .iter()
        .map(|g| g.weapon_count() * g.locations().len() as u32)
        .sum();
    results.push(CheckResult {
        name: format!("{name}: weapons_accounted"),
        passed: printed == mounted,
        detail: format!("{printed} printed / {mounted} mounted"),
    });

    if raw {
        return results;
    }

    let weights: Vec<u8> = groups.iter().map(BayGroup::display_weight).collect();
    let sorted = weights.windows(2).all(|w| w[0] <= w[1]);
    results.push(CheckResult {
        name: format!("{name}: rows_in_display_order"),
        passed: sorted,
        detail: format!("weights {weights:?}"),
    });

    let oversize = groups.iter().filter(|g| g.locations().len() > 2).count();
    results.push(CheckResult {
        name: format!("{name}: single_merge_per_row"),
        passed: oversize == 0,
        detail: format!("{} rows, {} with more than two locations", groups.len(), oversize),
    });

    // No two remaining rows should still be mergeable
    let mut leftover = 0;
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            if a.can_combine(b) && b.can_combine(a) {
                leftover += 1;
            }
        }
    }
    results.push(CheckResult {
        name: format!("{name}: mirror_bays_merged"),
        passed: leftover == 0,
        detail: format!("{leftover} mergeable pairs left"),
    });

    results
}
