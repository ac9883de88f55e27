use thiserror::Error;

use crate::RECURSION_LIMIT;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("encountered elements with no defined ordering")]
    Comparison,
    #[error("recursion depth limit of {RECURSION_LIMIT} exceeded")]
    RecursionLimit,
}
