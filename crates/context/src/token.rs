//! Token counting over context files.
//!
//! Uses the `p50k_base` BPE from `tiktoken-rs` — the fixed, deterministic
//! encoding the token budgets in config are calibrated against. Counting
//! aborts on the first unreadable file; there is no partial-result recovery.

use crate::aggregate::{AggregateOptions, aggregate};
use crate::document::DocumentKind;
use promptpack_core::error::ContextError;
use std::path::PathBuf;
use tiktoken_rs::{CoreBPE, p50k_base};

/// A token counter holding an initialized BPE.
///
/// Construction is the expensive part; reuse one counter across calls.
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    pub fn new() -> Result<Self, ContextError> {
        let bpe = p50k_base().map_err(|e| ContextError::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }

    /// Count tokens in a string.
    pub fn count_text(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Count tokens across a list of files.
    ///
    /// Any unreadable file fails the whole count with
    /// [`ContextError::FileAccess`].
    pub fn count_files(&self, paths: &[PathBuf]) -> Result<usize, ContextError> {
        let mut total = 0;
        for path in paths {
            let content =
                std::fs::read_to_string(path).map_err(|source| ContextError::FileAccess {
                    path: path.clone(),
                    source,
                })?;
            total += self.count_text(&content);
        }
        Ok(total)
    }

    /// Count tokens in custom-instruction files.
    ///
    /// Input paths may name files or directories; they are resolved through
    /// the aggregator first and the count runs over the resolved file list.
    pub fn count_custom_instructions(&self, paths: &[PathBuf]) -> Result<usize, ContextError> {
        let resolved = aggregate(
            paths,
            DocumentKind::CustomInstructions,
            AggregateOptions::default(),
        )?;
        self.count_files(&resolved.files)
    }

    /// Count tokens in curated-dataset files.
    pub fn count_curated_datasets(&self, paths: &[PathBuf]) -> Result<usize, ContextError> {
        let resolved = aggregate(
            paths,
            DocumentKind::CuratedDatasets,
            AggregateOptions::default(),
        )?;
        self.count_files(&resolved.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn empty_file_list_is_zero() {
        let counter = TokenCounter::new().unwrap();
        assert_eq!(counter.count_files(&[]).unwrap(), 0);
    }

    #[test]
    fn empty_text_is_zero() {
        let counter = TokenCounter::new().unwrap();
        assert_eq!(counter.count_text(""), 0);
    }

    #[test]
    fn simple_text_counts() {
        let counter = TokenCounter::new().unwrap();
        // "hello world" is two p50k_base tokens: "hello", " world"
        assert_eq!(counter.count_text("hello world"), 2);
    }

    #[test]
    fn files_sum_across_list() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.txt", "hello world");
        let b = write_file(&dir, "b.txt", "hello world");

        let counter = TokenCounter::new().unwrap();
        let single = counter.count_files(std::slice::from_ref(&a)).unwrap();
        let both = counter.count_files(&[a, b]).unwrap();
        assert_eq!(both, single * 2);
    }

    #[test]
    fn unreadable_file_aborts_count() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.txt", "fine");
        let missing = dir.path().join("gone.txt");

        let counter = TokenCounter::new().unwrap();
        let err = counter.count_files(&[a, missing.clone()]).unwrap_err();
        match err {
            ContextError::FileAccess { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn specialized_entry_points_resolve_directories() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "one.txt", "hello world");
        write_file(&dir, "two.txt", "hello world");

        let counter = TokenCounter::new().unwrap();
        let input = vec![dir.path().to_path_buf()];
        let total = counter.count_custom_instructions(&input).unwrap();
        assert_eq!(total, 4);
        assert_eq!(counter.count_curated_datasets(&input).unwrap(), total);
    }

    #[test]
    fn missing_paths_resolve_to_nothing_in_specialized_count() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let counter = TokenCounter::new().unwrap();
        assert_eq!(counter.count_custom_instructions(&[missing]).unwrap(), 0);
    }
}
