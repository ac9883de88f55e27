use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use qsort::generate::ALL_CASES;
use qsort::{PivotPolicy, SortError, TraceEvent, sort_traced};
use quickbench::{
    BenchmarkSeries, HarnessError, benchmark_case, render_chart, render_trace_event, run_self_test,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const TRACE_SAMPLE: [i64; 6] = [3, 6, 1, 8, 2, 5];

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PolicyArg {
    First,
    Random,
}

impl From<PolicyArg> for PivotPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => Self::FirstElement,
            PolicyArg::Random => Self::RandomElement,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "quickbench",
    about = "Quicksort case study: correctness self-test, recursion trace, case benchmarks"
)]
struct Args {
    /// Input sizes to benchmark, strictly increasing.
    #[arg(long, value_delimiter = ',', default_value = "100,200,500,1000,2000,5000")]
    sizes: Vec<usize>,
    /// Trials averaged per size.
    #[arg(long, default_value_t = 3)]
    trials: usize,
    /// Output path for the SVG chart.
    #[arg(long, default_value = "quicksort-benchmark.svg")]
    chart: PathBuf,
    #[arg(long, default_value_t = 0x5EED_2026)]
    seed: u64,
    /// Pivot policy to benchmark.
    #[arg(long, value_enum, default_value_t = PolicyArg::First)]
    policy: PolicyArg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let policy = PivotPolicy::from(args.policy);
    let mut rng = StdRng::seed_from_u64(args.seed);

    println!("----- quicksort self-test -----");
    let stdout = std::io::stdout();
    run_self_test(&mut stdout.lock(), &mut rng).context("self-test failed")?;
    println!("all self-test cases passed");

    for &trace_policy in qsort::all_policies() {
        println!("\n----- recursion trace ({}) -----", trace_policy.label());
        let mut sink = |event: &TraceEvent<i64>| println!("{}", render_trace_event(event));
        let sorted = sort_traced(&TRACE_SAMPLE, trace_policy, &mut rng, &mut sink)
            .context("traced sort failed")?;
        println!("sorted: {sorted:?}");
    }

    println!(
        "\n----- benchmark ({} pivot, {} trials per size) -----",
        policy.label(),
        args.trials
    );
    let mut all_series = Vec::new();
    for &case in &ALL_CASES {
        info!(case = case.label(), "benchmarking");
        match benchmark_case(case, policy, &args.sizes, args.trials, args.seed) {
            Ok(series) => all_series.push(series),
            // An exhausted recursion budget kills one series, not the run.
            Err(HarnessError::Sort(SortError::RecursionLimit)) => {
                warn!(case = case.label(), "series aborted: recursion limit");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("benchmark series {}", case.label()));
            }
        }
    }

    print_table(&mut stdout.lock(), &args.sizes, &all_series)?;

    render_chart(&args.chart, &all_series).context("chart rendering failed")?;
    println!("chart written to {}", args.chart.display());
    Ok(())
}

fn print_table<W: Write>(
    out: &mut W,
    sizes: &[usize],
    series: &[BenchmarkSeries],
) -> anyhow::Result<()> {
    write!(out, "{:>8}", "size")?;
    for s in series {
        write!(out, "{:>16}", s.case.label())?;
    }
    writeln!(out)?;

    for &size in sizes {
        write!(out, "{size:>8}")?;
        for s in series {
            match s.points.iter().find(|p| p.size == size) {
                Some(point) => write!(out, "{:>15.6}s", point.mean.as_secs_f64())?,
                None => write!(out, "{:>16}", "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
