use std::hint::black_box;
use std::time::{Duration, Instant};

use qsort::generate::{CaseLabel, generate_case};
use qsort::{PivotPolicy, SortError, sort};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum HarnessError {
    #[error("input sizes must be strictly increasing, got {prev} before {next}")]
    SizesNotIncreasing { prev: usize, next: usize },
    #[error("trial count must be at least 1")]
    ZeroTrials,
    #[error(transparent)]
    Sort(#[from] SortError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkPoint {
    pub size: usize,
    pub mean: Duration,
}

#[derive(Clone, Debug)]
pub struct BenchmarkSeries {
    pub case: CaseLabel,
    pub policy: PivotPolicy,
    pub points: Vec<BenchmarkPoint>,
}

/// Times `sort_fn` over fresh inputs from `generate`, one input per trial,
/// and records the arithmetic mean per size. Generation time is excluded;
/// no warmup, no outlier rejection.
pub fn benchmark<S, G>(
    mut sort_fn: S,
    mut generate: G,
    sizes: &[usize],
    trials: usize,
) -> Result<Vec<BenchmarkPoint>, HarnessError>
where
    S: FnMut(Vec<u64>) -> Result<Vec<u64>, SortError>,
    G: FnMut(usize) -> Vec<u64>,
{
    if trials == 0 {
        return Err(HarnessError::ZeroTrials);
    }
    for pair in sizes.windows(2) {
        if pair[1] <= pair[0] {
            return Err(HarnessError::SizesNotIncreasing {
                prev: pair[0],
                next: pair[1],
            });
        }
    }

    let mut points = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut total = Duration::ZERO;
        for trial in 0..trials {
            let data = generate(size);
            let start = Instant::now();
            let sorted = sort_fn(data)?;
            total += start.elapsed();
            black_box(&sorted);
            debug!(size, trial, "trial complete");
        }
        points.push(BenchmarkPoint {
            size,
            mean: total / trials as u32,
        });
    }
    Ok(points)
}

/// Benchmarks one (case, policy) pair over the seeded case generator,
/// reseeding per trial so every trial sees a fresh input.
pub fn benchmark_case(
    case: CaseLabel,
    policy: PivotPolicy,
    sizes: &[usize],
    trials: usize,
    seed: u64,
) -> Result<BenchmarkSeries, HarnessError> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x50F7_F1A9);
    let mut trial_no = 0_u64;
    let points = benchmark(
        |data| sort(&data, policy, &mut rng),
        |n| {
            trial_no += 1;
            generate_case(case, n, seed.wrapping_add(trial_no))
        },
        sizes,
        trials,
    )?;
    Ok(BenchmarkSeries {
        case,
        policy,
        points,
    })
}
