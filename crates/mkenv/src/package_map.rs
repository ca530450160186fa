//! Canonicalization of raw import names into installable package names.
//!
//! Three outcomes are possible for a raw name: it is skipped (standard
//! library or a non-installable token), it is remapped to the name the
//! package is actually distributed under, or it passes through unchanged.

use cow_utils::CowUtils;
use indexmap::IndexMap;
use log::warn;
use once_cell::sync::Lazy;
use ruff_python_stdlib::sys;
use rustc_hash::FxHashMap;

/// Interpreter minor version assumed when the configured version string
/// cannot be parsed.
const DEFAULT_PYTHON_MINOR: u8 = 8;

/// Hand-tuned table from lowercased raw import name to canonical distribution
/// name. An empty value marks "not an installable package" and suppresses the
/// name entirely.
///
/// The skip entries fall into two groups: standard-library names kept for
/// compatibility with older tables (the stdlib database below covers them
/// anyway), and bare symbol names commonly captured through the from-import
/// extraction rule (`train_test_split` and friends), which have no
/// installable counterpart of their own.
static DEFAULT_TABLE: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Standard library and language constructs
        ("os", ""),
        ("sys", ""),
        ("traceback", ""),
        ("json", ""),
        ("re", ""),
        ("glob", ""),
        ("datetime", ""),
        ("platform", ""),
        ("_pickle", ""),
        ("pickle", ""),
        ("ast", ""),
        ("pprint", ""),
        // Symbols that leak through the from-import rule
        ("auc", ""),
        ("expit", ""),
        ("list", ""),
        ("recall_score", ""),
        ("roc_curve", ""),
        ("sgdclassifier", ""),
        ("train_test_split", ""),
        // `from X import *`
        ("*", ""),
        // Packages distributed under a different name than they import as
        ("smote", "imbalanced-learn"),
        ("imblearn", "imbalanced-learn"),
        ("beautiful_soup", "bs4"),
        ("beautifulsoup", "bs4"),
        ("sklearn", "scikit-learn"),
        ("sqlite3", "sqlite"),
        ("jupyter_lab", "jupyterlab"),
        ("pysimplegui", "PySimpleGui"),
        ("pysimpleguiweb", "PySimpleGuiWeb"),
    ]
    .into_iter()
    .collect()
});

/// Resolves raw import names to canonical package names.
///
/// Built once per run from the built-in table plus configuration overrides,
/// immutable afterwards. Overrides win over built-in entries, which win over
/// the standard-library database.
#[derive(Debug)]
pub struct PackageMap {
    /// Configuration-supplied entries, keyed by lowercased raw name
    overrides: FxHashMap<String, String>,
    /// Interpreter minor version used for stdlib classification
    python_minor: u8,
}

impl PackageMap {
    /// Create a map with only the built-in table, classifying stdlib modules
    /// against the given interpreter version string (e.g. "3.8").
    pub fn new(python_version: &str) -> Self {
        Self::with_overrides(python_version, &IndexMap::new())
    }

    /// Create a map with configuration overrides merged over the built-in
    /// table. Override keys are lowercased so lookup stays case-insensitive.
    pub fn with_overrides(python_version: &str, overrides: &IndexMap<String, String>) -> Self {
        let overrides = overrides
            .iter()
            .map(|(k, v)| (k.cow_to_lowercase().into_owned(), v.clone()))
            .collect();
        Self {
            overrides,
            python_minor: python_minor_version(python_version),
        }
    }

    /// Resolve one raw import name to its canonical package name, or `None`
    /// when the name must not appear in the output at all.
    ///
    /// Lookup is case-insensitive. Dot-truncation of the returned name is the
    /// caller's concern: a raw `ruamel.yaml` resolves to `ruamel.yaml` here
    /// and is truncated to its leading segment during aggregation.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let key = raw.cow_to_lowercase();

        let mapped = self
            .overrides
            .get(key.as_ref())
            .map(String::as_str)
            .or_else(|| DEFAULT_TABLE.get(key.as_ref()).copied());

        if let Some(canonical) = mapped {
            if canonical.is_empty() {
                return None;
            }
            return Some(canonical.to_string());
        }

        if self.is_stdlib(key.as_ref()) {
            return None;
        }

        Some(raw.to_string())
    }

    /// Whether the name's leading dot-segment is a standard-library module
    /// for the configured interpreter version.
    fn is_stdlib(&self, name: &str) -> bool {
        // __future__ is not part of ruff's stdlib database
        if name == "__future__" {
            return true;
        }
        let top_level = name.split('.').next().unwrap_or(name);
        sys::is_known_standard_library(self.python_minor, top_level)
    }
}

/// Parse the minor component out of a "3.x" version string.
///
/// Falls back to [`DEFAULT_PYTHON_MINOR`] with a diagnostic on anything that
/// does not look like a Python 3 version.
fn python_minor_version(version: &str) -> u8 {
    let mut parts = version.split('.');
    let parsed = match (parts.next(), parts.next()) {
        (Some("3"), Some(minor)) => minor.parse::<u8>().ok(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        warn!(
            "cannot parse interpreter version {version:?}, assuming 3.{DEFAULT_PYTHON_MINOR} for \
             standard-library detection"
        );
        DEFAULT_PYTHON_MINOR
    })
}
