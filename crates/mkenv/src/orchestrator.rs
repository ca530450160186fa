//! The scan pipeline: file discovery, per-file import extraction, name
//! aggregation and canonicalization into an [`EnvironmentSpec`].

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::Result;
use indexmap::IndexSet;
use log::{debug, warn};

use crate::{
    discovery::find_python_files,
    package_map::PackageMap,
    types::{EnvironmentSpec, FailureKind, FileFailure},
    visitors::import_collector::collect_file_imports,
};

/// Everything a scan produced: the finished spec plus the per-file
/// diagnostics for whatever had to be skipped along the way.
#[derive(Debug)]
pub struct ScanOutcome {
    pub spec: EnvironmentSpec,
    pub failures: Vec<FileFailure>,
}

/// Run the whole pipeline over one directory tree.
///
/// The per-file step is best-effort: a file that cannot be read or parsed is
/// recorded as a [`FileFailure`] and the fold continues, so the aggregate is
/// the same as if the broken file were absent. Only an invalid root aborts.
/// A tree with zero Python files is not an error; it yields a spec with an
/// empty dependency list.
pub fn scan(
    root: &Path,
    env_name: &str,
    python_version: &str,
    package_map: &PackageMap,
) -> Result<ScanOutcome> {
    let files = find_python_files(root)?;

    let mut raw_names: IndexSet<String> = IndexSet::new();
    let mut failures: Vec<FileFailure> = Vec::new();

    for path in &files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                push_failure(&mut failures, FailureKind::Unreadable, path, &err);
                continue;
            }
        };
        let analysis = match collect_file_imports(&source) {
            Ok(analysis) => analysis,
            Err(err) => {
                push_failure(&mut failures, FailureKind::Parse, path, &err);
                continue;
            }
        };
        debug!(
            "{}: {} import names",
            path.display(),
            analysis.raw_names().count()
        );
        // Plain and from-import names fold into one flat namespace; the
        // distinction is not preserved past this point.
        raw_names.extend(analysis.raw_names().map(str::to_string));
    }

    let dependencies = canonicalize(&raw_names, package_map);

    Ok(ScanOutcome {
        spec: EnvironmentSpec {
            env_name: env_name.to_string(),
            python_version: python_version.to_string(),
            dependencies,
        },
        failures,
    })
}

fn push_failure(
    failures: &mut Vec<FileFailure>,
    kind: FailureKind,
    path: &Path,
    error: &impl std::fmt::Display,
) {
    let failure = FileFailure::new(kind, path, error);
    warn!("{failure}");
    failures.push(failure);
}

/// Resolve every raw name, truncate surviving canonical names at their first
/// `.`, and return them sorted and deduplicated.
///
/// Deduplication happens after canonicalization: two raw names can resolve to
/// the same package (e.g. `smote` and `imblearn`).
fn canonicalize(raw_names: &IndexSet<String>, package_map: &PackageMap) -> Vec<String> {
    let mut canonical: BTreeSet<String> = BTreeSet::new();
    for raw in raw_names {
        let Some(mapped) = package_map.resolve(raw) else {
            debug!("skipping {raw}");
            continue;
        };
        let leading = mapped.split('.').next().unwrap_or(&mapped);
        canonical.insert(leading.to_string());
    }
    canonical.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw_set(names: &[&str]) -> IndexSet<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_canonicalize_sorts_and_dedupes() {
        let map = PackageMap::new("3.8");
        let raw = raw_set(&["smote", "numpy", "imblearn", "pandas"]);
        assert_eq!(
            canonicalize(&raw, &map),
            vec!["imbalanced-learn", "numpy", "pandas"]
        );
    }

    #[test]
    fn test_canonicalize_truncates_dotted_names() {
        let map = PackageMap::new("3.8");
        let raw = raw_set(&["ruamel.yaml"]);
        assert_eq!(canonicalize(&raw, &map), vec!["ruamel"]);
    }

    #[test]
    fn test_canonicalize_drops_skip_mapped_names() {
        let map = PackageMap::new("3.8");
        let raw = raw_set(&["os", "train_test_split", "collections", "numpy"]);
        assert_eq!(canonicalize(&raw, &map), vec!["numpy"]);
    }
}
