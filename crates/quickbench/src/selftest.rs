use std::io::Write;

use qsort::{PivotPolicy, SortError, all_policies, sort};
use rand::Rng;
use thiserror::Error;

/// A sorted output diverged from the std-sorted reference.
#[derive(Clone, Debug, PartialEq, Error)]
#[error(
    "sorted output diverged under {policy:?} for input {input:?}: expected {expected:?}, got {actual:?}"
)]
pub struct CorrectnessFailure {
    pub policy: PivotPolicy,
    pub input: Vec<i64>,
    pub expected: Vec<i64>,
    pub actual: Vec<i64>,
}

#[derive(Debug, Error)]
pub enum SelfTestError {
    #[error(transparent)]
    Correctness(#[from] CorrectnessFailure),
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("failed writing diagnostics: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed literal arrays plus one random one: empty, singleton, pair,
/// already sorted, reverse sorted, duplicates.
pub fn test_battery<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![3, 1, 2, 1, 5, 3],
        (0..10).map(|_| rng.random_range(0..=100)).collect(),
    ]
}

/// Runs both policies over the battery, writing before/after listings to
/// `out`. Stops at the first divergence.
pub fn run_self_test<W, R>(out: &mut W, rng: &mut R) -> Result<(), SelfTestError>
where
    W: Write,
    R: Rng + ?Sized,
{
    for input in test_battery(rng) {
        let mut expected = input.clone();
        expected.sort_unstable();

        writeln!(out, "input:          {input:?}")?;
        writeln!(out, "expected:       {expected:?}")?;
        for &policy in all_policies() {
            let actual = sort(&input, policy, rng)?;
            writeln!(out, "{:<15} {actual:?}", format!("{}:", policy.label()))?;
            if actual != expected {
                return Err(CorrectnessFailure {
                    policy,
                    input,
                    expected,
                    actual,
                }
                .into());
            }
        }
        writeln!(out, "{}", "-".repeat(50))?;
    }
    Ok(())
}
