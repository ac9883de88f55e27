use std::cmp::Ordering;

use rand::Rng;

use crate::{RECURSION_LIMIT, SortError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotPolicy {
    FirstElement,
    RandomElement,
}

impl PivotPolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstElement => "first_element",
            Self::RandomElement => "random_element",
        }
    }
}

/// One partitioning step of the recursion: the chosen pivot and the two
/// sides it split the remaining elements into.
#[derive(Clone, Debug, PartialEq)]
pub struct RecursionFrame<T> {
    pub depth: usize,
    pub pivot: T,
    pub less: Vec<T>,
    pub greater_or_equal: Vec<T>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent<T> {
    Frame(RecursionFrame<T>),
    Leaf { depth: usize, values: Vec<T> },
}

pub fn sort<T, R>(data: &[T], policy: PivotPolicy, rng: &mut R) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
    R: Rng + ?Sized,
{
    sort_inner(data, policy, rng, 0, &mut None)
}

/// Like [`sort`], but narrates the recursion to `sink`. Frames are emitted
/// pre-order: a call's frame arrives before any frame from its children.
pub fn sort_traced<T, R, F>(
    data: &[T],
    policy: PivotPolicy,
    rng: &mut R,
    sink: &mut F,
) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
    R: Rng + ?Sized,
    F: FnMut(&TraceEvent<T>),
{
    let mut sink: Option<&mut dyn FnMut(&TraceEvent<T>)> = Some(sink);
    sort_inner(data, policy, rng, 0, &mut sink)
}

fn sort_inner<T, R>(
    data: &[T],
    policy: PivotPolicy,
    rng: &mut R,
    depth: usize,
    sink: &mut Option<&mut dyn FnMut(&TraceEvent<T>)>,
) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
    R: Rng + ?Sized,
{
    if depth >= RECURSION_LIMIT {
        return Err(SortError::RecursionLimit);
    }

    if data.len() <= 1 {
        if let Some(emit) = sink.as_mut() {
            emit(&TraceEvent::Leaf {
                depth,
                values: data.to_vec(),
            });
        }
        return Ok(data.to_vec());
    }

    let mut arr = data.to_vec();
    let pivot_index = match policy {
        PivotPolicy::FirstElement => 0,
        // Fresh uniform draw per call; the chosen element is swapped to the
        // front and read from there.
        PivotPolicy::RandomElement => rng.random_range(0..arr.len()),
    };
    arr.swap(0, pivot_index);
    let pivot = arr[0].clone();

    let mut less = Vec::new();
    let mut greater_or_equal = Vec::new();
    for x in &arr[1..] {
        match x.partial_cmp(&pivot) {
            Some(Ordering::Less) => less.push(x.clone()),
            // Ties go to the greater-or-equal side.
            Some(_) => greater_or_equal.push(x.clone()),
            None => return Err(SortError::Comparison),
        }
    }

    if let Some(emit) = sink.as_mut() {
        emit(&TraceEvent::Frame(RecursionFrame {
            depth,
            pivot: pivot.clone(),
            less: less.clone(),
            greater_or_equal: greater_or_equal.clone(),
        }));
    }

    let mut sorted = sort_inner(&less, policy, rng, depth + 1, sink)?;
    sorted.push(pivot);
    sorted.extend(sort_inner(&greater_or_equal, policy, rng, depth + 1, sink)?);
    Ok(sorted)
}
