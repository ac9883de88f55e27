use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CaseLabel {
    Best,
    Worst,
    Average,
}

impl CaseLabel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "best_case",
            Self::Worst => "worst_case",
            Self::Average => "average_case",
        }
    }
}

pub const ALL_CASES: [CaseLabel; 3] = [CaseLabel::Best, CaseLabel::Worst, CaseLabel::Average];

/// Ascending range: maximally unbalanced partitions under a first-element
/// pivot, forcing quadratic behavior and depth n recursion.
pub fn worst_case(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// Median-first reordering: the element at the midpoint of each subrange is
/// moved to its front, so a first-element pivot always splits evenly.
pub fn best_case<T: Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let mid = (data.len() - 1) / 2;
    let mut out = Vec::with_capacity(data.len());
    out.push(data[mid].clone());
    out.extend(best_case(&data[..mid]));
    out.extend(best_case(&data[mid + 1..]));
    out
}

/// n independent uniform draws from [0, n] inclusive.
pub fn average_case<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u64> {
    (0..n).map(|_| rng.random_range(0..=n as u64)).collect()
}

pub fn generate_case(case: CaseLabel, n: usize, seed: u64) -> Vec<u64> {
    match case {
        CaseLabel::Best => best_case(&worst_case(n)),
        CaseLabel::Worst => worst_case(n),
        CaseLabel::Average => {
            let mut rng = StdRng::seed_from_u64(seed);
            average_case(n, &mut rng)
        }
    }
}
