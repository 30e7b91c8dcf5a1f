//! CPU stress generator: bounded primality-search workload.
//!
//! Scans every integer from 2 up to the configured limit with a trial
//! division primality test. The prime values themselves are not used
//! downstream; the act of finding them is the workload. The sub-score is
//! the ratio of a reference device's scan time to the measured one.

use std::time::Instant;

use crate::config::BenchSettings;
use crate::scoring;

/// Metrics of one completed CPU stress run.
#[derive(Clone, Debug)]
pub struct CpuStressReport {
    /// Normalized sub-score
    pub score: u64,
    /// Measured wall-clock scan time in milliseconds
    pub elapsed_ms: u64,
    /// Number of primes found in the scan range
    pub primes_found: usize,
}

/// Deterministic trial-division primality test.
///
/// Composite iff divisible by any integer in `[2, floor(sqrt(n))]`;
/// values below 2 are not prime.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let limit = (n as f64).sqrt() as u32;
    (2..=limit).all(|d| n % d != 0)
}

/// Run the full scan and derive the sub-score from its duration.
pub fn run(settings: &BenchSettings) -> CpuStressReport {
    let started = Instant::now();
    let mut primes: Vec<u32> = Vec::new();
    for n in 2..=settings.prime_scan_limit {
        if is_prime(n) {
            primes.push(n);
        }
    }
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let score = scoring::cpu_score(settings.cpu_reference_time_ms, elapsed_ms);

    log::info!(
        "cpu stress: {} primes below {} in {} ms, score {}",
        primes.len(),
        settings.prime_scan_limit,
        elapsed_ms,
        score
    );

    CpuStressReport {
        score,
        elapsed_ms,
        primes_found: primes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_primality_boundary_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(is_prime(997));
    }

    #[test]
    fn test_prime_count_below_one_thousand() {
        let count = (2..=1_000u32).filter(|&n| is_prime(n)).count();
        assert_eq!(count, 168);
    }

    #[test]
    fn test_run_reports_prime_count() {
        let settings = BenchSettings {
            prime_scan_limit: 1_000,
            ..BenchSettings::default()
        };
        let report = run(&settings);
        assert_eq!(report.primes_found, 168);
    }

    proptest! {
        #[test]
        fn prop_is_prime_matches_naive_search(n in 0u32..10_000) {
            let naive = n >= 2 && (2..n).all(|d| n % d != 0);
            prop_assert_eq!(is_prime(n), naive);
        }
    }
}
