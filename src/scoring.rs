//! Sub-score normalization and composite scoring.
//!
//! Every scoring constant of the benchmark lives here. The formulas are
//! calibration data carried over from the reference device profile and are
//! preserved exactly; resist the urge to "clean up" the scale factors.

const MIB: f64 = (1024 * 1024) as f64;
const GIB: f64 = (1024 * 1024 * 1024) as f64;

/// CPU sub-score: how many times faster than the reference device the
/// prime scan finished.
///
/// A sub-millisecond measurement would divide by zero; the duration is
/// clamped to 1 ms instead of catching an arithmetic fault.
pub fn cpu_score(reference_time_ms: u64, elapsed_ms: u64) -> u64 {
    reference_time_ms / elapsed_ms.max(1)
}

/// Raster sub-score from the number of fully completed draw passes.
pub fn raster_score(pass_count: u64) -> u64 {
    ((pass_count as f64 / 1000.0) * 2000.0) as u64
}

/// Memory sub-score from the exhaustion run's gathered metrics.
///
/// Combines total capacity (GiB reached) with mutation throughput
/// (operations per MiB per second), scaled down to the hundreds range.
/// An empty allocation set scores 0; elapsed time is clamped like the CPU
/// duration.
pub fn memory_score(total_allocated_bytes: u64, operation_count: u64, elapsed_ms: u64) -> u64 {
    if total_allocated_bytes == 0 {
        return 0;
    }
    let memory_gib = total_allocated_bytes as f64 / GIB;
    let ops_per_mb = operation_count as f64 / (total_allocated_bytes as f64 / MIB);
    let elapsed_s = elapsed_ms.max(1) as f64 / 1000.0;
    let raw = memory_gib * 100.0 + (ops_per_mb / elapsed_s) * 10.0;
    (raw / 10_000.0) as u64
}

/// Weighted composite of the three sub-scores.
///
/// The memory term is truncated by its own integer division before the sum;
/// the sum itself is never truncated. Reordering changes results for memory
/// scores that are not multiples of 5.
pub fn composite_score(cpu_score: u64, gpu_score: u64, memory_score: u64) -> u64 {
    5 * cpu_score + 3 * gpu_score + (2 * memory_score) / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_score_reference_ratio() {
        assert_eq!(cpu_score(30_000, 15_000), 2);
        assert_eq!(cpu_score(30_000, 30_000), 1);
        assert_eq!(cpu_score(30_000, 45_000), 0);
    }

    #[test]
    fn test_cpu_score_zero_duration_clamped() {
        assert_eq!(cpu_score(30_000, 0), 30_000);
    }

    #[test]
    fn test_cpu_score_non_increasing_in_elapsed_time() {
        let mut previous = u64::MAX;
        for elapsed in [0, 1, 10, 100, 1_000, 30_000, 120_000] {
            let score = cpu_score(30_000, elapsed);
            assert!(score <= previous, "score rose at elapsed={}", elapsed);
            previous = score;
        }
    }

    #[test]
    fn test_raster_score_exact_value() {
        assert_eq!(raster_score(1_500), 3_000);
    }

    #[test]
    fn test_raster_score_is_twice_pass_count() {
        for passes in [0, 1, 7, 999, 12_345] {
            assert_eq!(raster_score(passes), passes * 2);
        }
    }

    #[test]
    fn test_memory_score_exact_value() {
        // 1 GiB allocated, 100 ops per MiB, 2 s elapsed:
        // raw = 1*100 + (100/2)*10 = 600, score = floor(600/10000) = 0
        let total = 1024 * 1024 * 1024;
        let ops = 1024 * 100;
        assert_eq!(memory_score(total, ops, 2_000), 0);
    }

    #[test]
    fn test_memory_score_scales_into_hundreds() {
        // 8 GiB and a dense mutation count push raw past the 10000 divisor
        let total = 8 * 1024 * 1024 * 1024u64;
        let ops = total / 8 * 40;
        let score = memory_score(total, ops, 60_000);
        assert!(score > 0);
    }

    #[test]
    fn test_memory_score_empty_allocation_set() {
        assert_eq!(memory_score(0, 0, 5_000), 0);
    }

    #[test]
    fn test_composite_exact_value() {
        // 5*10 + 3*20 + floor(2*5/10) = 50 + 60 + 1
        assert_eq!(composite_score(10, 20, 5), 111);
    }

    #[test]
    fn test_composite_memory_term_truncated_alone() {
        // memory 7: floor(14/10) = 1, not round(1.4) and not floor applied
        // to the whole sum
        assert_eq!(composite_score(0, 0, 7), 1);
        assert_eq!(composite_score(1, 1, 7), 9);
    }
}
