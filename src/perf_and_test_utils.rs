//! Helpers shared by tests and the benchmark binary.
use rand::Rng;
use std::time::Instant;

/// Returns the name of the type of `_val`.
pub fn type_of<T>(_val: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Generates a random text of `n_words` words separated by single spaces,
/// drawn from a vocabulary of `vocabulary` distinct words (`w0`, `w1`, ...).
///
/// Low indices are more likely, so frequencies are skewed as in natural text.
pub fn gen_text(n_words: usize, vocabulary: usize) -> String {
    assert!(vocabulary > 0);
    let mut rng = rand::thread_rng();

    (0..n_words)
        .map(|_| {
            let a = rng.gen_range(0..vocabulary);
            let b = rng.gen_range(0..vocabulary);
            format!("w{}", a.min(b))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collects the duration of `n_runs` repetitions of an experiment made of
/// `n_queries` operations and reports min/max/avg time per operation.
pub struct TimingQueries {
    timings: Vec<u128>,
    time: Instant,
    n_queries: usize,
}

impl TimingQueries {
    pub fn new(n_runs: usize, n_queries: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_queries,
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.time = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.timings.push(self.time.elapsed().as_nanos());
    }

    /// Returns minimum, maximum and average time in nanoseconds per query.
    pub fn get(&self) -> (u128, u128, u128) {
        if self.timings.is_empty() {
            return (0, 0, 0);
        }
        let n_queries = self.n_queries.max(1) as u128;
        let min = self.timings.iter().min().copied().unwrap_or(0) / n_queries;
        let max = self.timings.iter().max().copied().unwrap_or(0) / n_queries;
        let avg = self.timings.iter().sum::<u128>() / (self.timings.len() as u128 * n_queries);
        (min, max, avg)
    }
}
