//! File aggregation — resolving a list of user-supplied paths into an ordered
//! list of concrete files and their concatenated, tagged contents.
//!
//! Directories are expanded one level only (no recursion into
//! subdirectories), children in file-system enumeration order. That order is
//! stable across repeated calls in the same environment but is not guaranteed
//! sorted.

use crate::document::{Document, DocumentKind};
use promptpack_core::error::ContextError;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Options controlling aggregation behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// With `strict` set, a path that resolves to neither a regular file nor
    /// a directory fails the whole aggregation instead of being skipped.
    /// The lenient default matches the historical behavior but can hide
    /// typos, so every skip is logged either way.
    pub strict: bool,
}

impl AggregateOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// The result of aggregating a set of paths.
#[derive(Debug, Clone)]
pub struct Aggregate {
    /// All tagged documents joined with a single newline separator.
    pub content: String,

    /// Resolved file paths, 1:1 with the `<document:...>` blocks in
    /// `content`, in encounter order.
    pub files: Vec<PathBuf>,
}

/// Resolve `paths` into tagged documents and concatenate them.
///
/// Each input path is, in order:
/// - a regular file: tagged directly;
/// - a directory: its immediate children that are regular files are tagged,
///   in enumeration order;
/// - anything else: skipped (or, with [`AggregateOptions::strict`], an
///   [`ContextError::UnknownPath`] error).
pub fn aggregate(
    paths: &[PathBuf],
    kind: DocumentKind,
    options: AggregateOptions,
) -> Result<Aggregate, ContextError> {
    let mut documents: Vec<Document> = Vec::new();

    for path in paths {
        if path.is_file() {
            documents.push(Document::read(path, kind.clone())?);
        } else if path.is_dir() {
            collect_dir(path, &kind, &mut documents)?;
        } else if options.strict {
            return Err(ContextError::UnknownPath {
                path: path.clone(),
            });
        } else {
            warn!(path = %path.display(), "Skipping path that is neither file nor directory");
        }
    }

    let content = documents
        .iter()
        .map(Document::render)
        .collect::<Vec<_>>()
        .join("\n");
    let files = documents.into_iter().map(|d| d.path).collect();

    Ok(Aggregate { content, files })
}

/// Tag the regular files immediately under `dir`, in enumeration order.
fn collect_dir(
    dir: &Path,
    kind: &DocumentKind,
    documents: &mut Vec<Document>,
) -> Result<(), ContextError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ContextError::DirAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ContextError::DirAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let child = entry.path();
        if child.is_file() {
            documents.push(Document::read(&child, kind.clone())?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn count_opening_tags(content: &str) -> usize {
        content.matches("<document:").count()
    }

    #[test]
    fn single_file_aggregate_matches_expected_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.txt", "hello\n");

        let agg = aggregate(
            &[path.clone()],
            DocumentKind::Other("t".into()),
            AggregateOptions::default(),
        )
        .unwrap();

        assert_eq!(agg.files, vec![path.clone()]);
        // content is '<document:{id} path="..." type="t">\nhello\n</document:{id}>\n'
        assert!(agg.content.starts_with("<document:"));
        assert!(agg.content.contains(&format!("path=\"{}\" type=\"t\">\nhello\n</document:", path.display())));
        assert!(agg.content.ends_with(">\n"));
    }

    #[test]
    fn files_parallel_to_document_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "one\n");
        let b = write_file(dir.path(), "b.txt", "two\n");

        let agg = aggregate(
            &[a.clone(), b.clone()],
            DocumentKind::CuratedDatasets,
            AggregateOptions::default(),
        )
        .unwrap();

        assert_eq!(agg.files.len(), count_opening_tags(&agg.content));
        assert_eq!(agg.files, vec![a, b]);
    }

    #[test]
    fn directory_expanded_one_level() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "one.txt", "1");
        write_file(dir.path(), "two.txt", "2");
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        write_file(&nested, "three.txt", "3");

        let agg = aggregate(
            &[dir.path().to_path_buf()],
            DocumentKind::CuratedDatasets,
            AggregateOptions::default(),
        )
        .unwrap();

        // Only the two immediate children; nothing from the subdirectory.
        assert_eq!(agg.files.len(), 2);
        assert_eq!(count_opening_tags(&agg.content), 2);
        assert!(agg.files.iter().all(|f| f.parent() == Some(dir.path())));
    }

    #[test]
    fn directory_order_stable_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "a");
        write_file(dir.path(), "b.txt", "b");
        write_file(dir.path(), "c.txt", "c");

        let input = vec![dir.path().to_path_buf()];
        let first = aggregate(&input, DocumentKind::CuratedDatasets, AggregateOptions::default()).unwrap();
        let second = aggregate(&input, DocumentKind::CuratedDatasets, AggregateOptions::default()).unwrap();
        assert_eq!(first.files, second.files);
    }

    #[test]
    fn missing_path_skipped_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let real = write_file(dir.path(), "real.txt", "x");
        let missing = dir.path().join("typo.txt");

        let agg = aggregate(
            &[missing, real.clone()],
            DocumentKind::CustomInstructions,
            AggregateOptions::default(),
        )
        .unwrap();

        assert_eq!(agg.files, vec![real]);
    }

    #[test]
    fn missing_path_fails_in_strict_mode() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.txt");

        let err = aggregate(
            &[missing.clone()],
            DocumentKind::CustomInstructions,
            AggregateOptions::strict(),
        )
        .unwrap_err();

        match err {
            ContextError::UnknownPath { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_aggregate() {
        let agg = aggregate(&[], DocumentKind::CuratedDatasets, AggregateOptions::default()).unwrap();
        assert!(agg.content.is_empty());
        assert!(agg.files.is_empty());
    }

    #[test]
    fn same_file_listed_twice_gets_two_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.txt", "x");

        let agg = aggregate(
            &[path.clone(), path.clone()],
            DocumentKind::CuratedDatasets,
            AggregateOptions::default(),
        )
        .unwrap();

        assert_eq!(agg.files, vec![path.clone(), path]);
        assert_eq!(count_opening_tags(&agg.content), 2);
        // Distinct ids: the two opening tags differ.
        let tags: Vec<&str> = agg
            .content
            .lines()
            .filter(|l| l.starts_with("<document:"))
            .collect();
        assert_eq!(tags.len(), 2);
        assert_ne!(tags[0], tags[1]);
    }
}
