use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "furrow workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the container benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run this bench target (e.g. `graph_benchmark`)
        #[arg(long)]
        only: Option<String>,

        /// Criterion baseline to save results under
        #[arg(long, default_value = "current")]
        baseline: String,

        /// Baseline to compare against in the report
        #[arg(long)]
        compare: Option<String>,
    },
}

const BENCHES: &[&str] = &[
    "linked_list_benchmark",
    "queue_stack_benchmark",
    "tree_benchmark",
    "graph_benchmark",
];

#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean time in nanoseconds, keyed by benchmark id then baseline.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            only,
            baseline,
            compare,
        } => {
            if !report_only {
                let targets: Vec<&str> = match only.as_deref() {
                    Some(name) if BENCHES.contains(&name) => vec![name],
                    Some(name) => bail!("unknown bench target `{name}`, expected one of {BENCHES:?}"),
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick, &baseline)?;
            }
            generate_report(&baseline, compare.as_deref())?;
        }
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        bail!("Failed to compile benchmarks");
    }

    for target in targets {
        println!("\n>>> Running {target}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", target]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.5");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {target}"))?;

        if status.success() {
            println!("Finished {target} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: bench {target} failed");
        }
    }

    Ok(())
}

fn generate_report(baseline: &str, compare: Option<&str>) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = PathBuf::from("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# furrow Benchmark Report")?;
    writeln!(file)?;
    match compare {
        Some(other) => {
            writeln!(file, "| Benchmark | {baseline} | {other} | Speedup |")?;
            writeln!(file, "|---|---|---|---|")?;
        }
        None => {
            writeln!(file, "| Benchmark | Mean | Ops/s |")?;
            writeln!(file, "|---|---|---|")?;
        }
    }

    for (bench, by_baseline) in &results {
        let Some(&current) = by_baseline.get(baseline) else {
            continue;
        };
        match compare {
            Some(other) => match by_baseline.get(other) {
                Some(&previous) => writeln!(
                    file,
                    "| {bench} | {} | {} | **{:.2}x** |",
                    format_time(current),
                    format_time(previous),
                    previous / current
                )?,
                None => writeln!(file, "| {bench} | {} | N/A | - |", format_time(current))?,
            },
            None => writeln!(
                file,
                "| {bench} | {} | {} |",
                format_time(current),
                format_ops(1e9 / current)
            )?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.1} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion`, reading `<bench id>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(bench_dir) = baseline_dir.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        // Criterion's own "report" and "change" folders are not baselines.
        if matches!(baseline, "report" | "change") {
            continue;
        }
        let Ok(bench_id) = bench_dir.strip_prefix(root) else {
            continue;
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        if estimates.mean.point_estimate > 0.0 {
            results
                .entry(bench_id.to_string_lossy().replace('\\', "/"))
                .or_default()
                .insert(baseline.to_owned(), estimates.mean.point_estimate);
        }
    }
    Ok(())
}
