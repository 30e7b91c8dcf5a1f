//! Memory stress generator: growing allocations run to resource exhaustion.
//!
//! Each iteration allocates a block whose size grows with everything
//! allocated so far, fills it, then re-traverses every held block with a
//! stride-8 squaring mutation. Exhaustion is the designed stop condition,
//! not an error: allocation is modeled as a fallible operation and the loop
//! exits on the first exhaustion signal with all gathered metrics intact.
//!
//! Three signals count as exhaustion, checked in order:
//! 1. the optional hard budget from settings,
//! 2. system available memory dropping under the configured headroom
//!    (overcommitting kernels would otherwise OOM-kill the process on first
//!    touch instead of failing the reservation),
//! 3. the allocator refusing the reservation (`try_reserve_exact`).

use std::time::Instant;

use crate::config::BenchSettings;
use crate::scoring;

const MIB: u64 = 1024 * 1024;

/// Offsets visited per block during the mutation traversal.
const MUTATE_STRIDE: usize = 8;

/// Metrics of one completed memory stress run.
#[derive(Clone, Debug)]
pub struct MemoryStressReport {
    /// Normalized sub-score
    pub score: u64,
    /// Bytes held when exhaustion was reached
    pub total_allocated_bytes: u64,
    /// Stride-8 mutation operations performed across all traversals
    pub operation_count: u64,
    /// Measured wall-clock time in milliseconds
    pub elapsed_ms: u64,
    /// Blocks held when exhaustion was reached
    pub blocks_held: usize,
}

/// Fallible block allocation; `None` is the exhaustion signal.
fn try_alloc_block(len: usize) -> Option<Vec<u8>> {
    let mut block: Vec<u8> = Vec::new();
    if block.try_reserve_exact(len).is_err() {
        return None;
    }
    block.resize(len, 0);
    Some(block)
}

/// Run allocations to exhaustion and derive the sub-score from capacity and
/// mutation throughput.
pub fn run(settings: &BenchSettings) -> MemoryStressReport {
    let started = Instant::now();
    let mut system = sysinfo::System::new();
    let mut blocks: Vec<Vec<u8>> = Vec::new();
    let mut total_allocated: u64 = 0;
    let mut operation_count: u64 = 0;

    loop {
        let block_len = settings.memory_base_block_bytes + total_allocated / MIB;

        if let Some(budget) = settings.memory_budget_bytes {
            if total_allocated + block_len > budget {
                log::info!(
                    "memory stress: budget of {} bytes reached, stopping",
                    budget
                );
                break;
            }
        }

        system.refresh_memory();
        if system.available_memory() < block_len + settings.memory_headroom_bytes {
            log::info!(
                "memory stress: {} bytes available, stopping before the OS does",
                system.available_memory()
            );
            break;
        }

        let mut block = match try_alloc_block(block_len as usize) {
            Some(block) => block,
            None => {
                log::info!("memory stress: allocator refused {} bytes, stopping", block_len);
                break;
            }
        };

        for (i, byte) in block.iter_mut().enumerate() {
            *byte = (i % 256) as u8;
        }
        total_allocated += block_len;
        blocks.push(block);

        // Re-traverse every held block, including earlier ones
        for block in &mut blocks {
            for offset in (0..block.len()).step_by(MUTATE_STRIDE) {
                let v = block[offset] as u64;
                block[offset] = ((v * v + offset as u64) % 256) as u8;
                operation_count += 1;
            }
        }
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let score = scoring::memory_score(total_allocated, operation_count, elapsed_ms);

    log::info!(
        "memory stress: {} blocks, {} MiB, {} ops in {} ms, score {}",
        blocks.len(),
        total_allocated / MIB,
        operation_count,
        elapsed_ms,
        score
    );

    MemoryStressReport {
        score,
        total_allocated_bytes: total_allocated,
        operation_count,
        elapsed_ms,
        blocks_held: blocks.len(),
    }
}
