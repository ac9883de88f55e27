mod error;
mod sorter;

pub mod generate;

pub use error::SortError;
pub use sorter::{PivotPolicy, RecursionFrame, TraceEvent, sort, sort_traced};

/// Depth budget for the copying recursion. Worst-case depth is n-1 for the
/// fixed-pivot policy, so this covers inputs well past the largest
/// benchmarked size.
pub const RECURSION_LIMIT: usize = 10_000;

pub const ALL_POLICIES: [PivotPolicy; 2] = [PivotPolicy::FirstElement, PivotPolicy::RandomElement];

pub fn all_policies() -> &'static [PivotPolicy] {
    &ALL_POLICIES
}
