//! Integration test suite for the run-history store.
//!
//! Exercises the on-disk CSV contract across independent store instances:
//! - header written exactly once per file lifetime
//! - run numbering derived from the trailing row
//! - malformed or missing data treated as "no prior runs"
//! - rows surviving a write/read round-trip

use std::path::PathBuf;

use benchrig::history::{RunHistoryStore, RESULTS_HEADER};
use benchrig::models::BenchmarkRun;

fn make_run(n: u64) -> BenchmarkRun {
    BenchmarkRun {
        run_number: n,
        total_time_ms: 60_000 + n * 7,
        cpu_score: n * 3,
        gpu_score: n * 5,
        memory_score: n,
        total_score: n * 30 + (2 * n) / 10,
    }
}

fn temp_store(dir: &tempfile::TempDir) -> (RunHistoryStore, PathBuf) {
    let path = dir.path().join("benchmark_results.csv");
    (RunHistoryStore::new(&path), path)
}

#[test]
fn fresh_store_starts_numbering_at_one() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _path) = temp_store(&dir);
    assert_eq!(store.last_run_number(), 0);
    assert_eq!(store.last_run_number() + 1, 1);
}

#[test]
fn numbering_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("benchmark_results.csv");

    // Separate store instances over the same file, as separate app launches
    for n in 1..=4 {
        let store = RunHistoryStore::new(&path);
        assert_eq!(store.last_run_number(), n - 1);
        store.append(&make_run(n)).unwrap();
    }
    assert_eq!(RunHistoryStore::new(&path).last_run_number(), 4);
}

#[test]
fn header_appears_exactly_once_for_any_append_count() {
    let dir = tempfile::tempdir().unwrap();
    let (store, path) = temp_store(&dir);

    for n in 1..=10 {
        store.append(&make_run(n)).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.lines().filter(|l| *l == RESULTS_HEADER).count(),
            1,
            "after {} appends",
            n
        );
        assert_eq!(contents.lines().next().unwrap(), RESULTS_HEADER);
    }
}

#[test]
fn rows_round_trip_to_the_written_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (store, path) = temp_store(&dir);
    let runs: Vec<BenchmarkRun> = (1..=3).map(make_run).collect();
    for run in &runs {
        store.append(run).unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Vec<u64>> = contents
        .lines()
        .skip(1)
        .map(|row| row.split(',').map(|f| f.parse().unwrap()).collect())
        .collect();
    assert_eq!(parsed.len(), runs.len());
    for (fields, run) in parsed.iter().zip(&runs) {
        assert_eq!(
            fields,
            &vec![
                run.run_number,
                run.total_time_ms,
                run.cpu_score,
                run.gpu_score,
                run.memory_score,
                run.total_score,
            ]
        );
    }
}

#[test]
fn malformed_trailing_row_resets_numbering() {
    let dir = tempfile::tempdir().unwrap();
    let (store, path) = temp_store(&dir);
    store.append(&make_run(1)).unwrap();
    store.append(&make_run(2)).unwrap();

    // Corrupt the tail the way an interrupted foreign writer would
    let mut contents = std::fs::read_to_string(&path).unwrap();
    contents.push_str("not-a-number,0,0\n");
    std::fs::write(&path, contents).unwrap();

    assert_eq!(store.last_run_number(), 0);
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let (store, path) = temp_store(&dir);
    store.append(&make_run(9)).unwrap();

    let mut contents = std::fs::read_to_string(&path).unwrap();
    contents.push_str("\n\n");
    std::fs::write(&path, contents).unwrap();

    assert_eq!(store.last_run_number(), 9);
}

#[test]
fn append_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deeply").join("nested").join("results.csv");
    let store = RunHistoryStore::new(&path);
    store.append(&make_run(1)).unwrap();
    assert!(path.exists());
}
