//! Import collection visitor that records every name introduced by an import
//! statement in a Python module, including imports nested within functions,
//! classes, conditionals and other scopes.
//!
//! Extraction is purely lexical: `import X` records the full dotted token `X`
//! for each name clause (aliases are ignored), while `from X import A, B`
//! records the imported symbols `A` and `B` rather than the module `X`. The
//! two kinds end up in one flat namespace downstream; the canonicalization
//! table is tuned against exactly this behavior, so the conflation is kept
//! deliberately rather than resolved to the true module root.

use ruff_python_ast::{
    Stmt, StmtImport, StmtImportFrom,
    visitor::{Visitor, walk_stmt},
};
use ruff_python_parser::{ParseError, parse_module};

/// The two syntactic forms an import can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import X` or `import X as alias`
    Plain,
    /// `from X import A` or `from X import A as alias`
    From,
}

/// One syntactic import occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub kind: ImportKind,
    /// The token as written in source; dotted names are not truncated here.
    pub name: String,
}

/// All import records collected from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAnalysis {
    records: Vec<ImportRecord>,
}

impl FileAnalysis {
    /// Names recorded from `import X` statements.
    pub fn plain_names(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|r| r.kind == ImportKind::Plain)
            .map(|r| r.name.as_str())
    }

    /// Symbol names recorded from `from X import A` statements.
    pub fn from_names(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|r| r.kind == ImportKind::From)
            .map(|r| r.name.as_str())
    }

    /// Every recorded name, both kinds, in source order.
    pub fn raw_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ImportRecord] {
        &self.records
    }
}

/// Visitor that collects import records from a module's statements.
#[derive(Debug, Default)]
pub struct ImportCollector {
    records: Vec<ImportRecord>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_analysis(self) -> FileAnalysis {
        FileAnalysis {
            records: self.records,
        }
    }

    fn record_import(&mut self, stmt: &StmtImport) {
        for alias in &stmt.names {
            self.records.push(ImportRecord {
                kind: ImportKind::Plain,
                name: alias.name.to_string(),
            });
        }
    }

    fn record_import_from(&mut self, stmt: &StmtImportFrom) {
        for alias in &stmt.names {
            self.records.push(ImportRecord {
                kind: ImportKind::From,
                name: alias.name.to_string(),
            });
        }
    }
}

impl<'a> Visitor<'a> for ImportCollector {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import_stmt) => self.record_import(import_stmt),
            Stmt::ImportFrom(import_from) => self.record_import_from(import_from),
            _ => {}
        }

        // Default traversal reaches import statements in any nested block:
        // function and class bodies, conditionals, loops, with and try.
        walk_stmt(self, stmt);
    }
}

/// Parse one file's text and collect its import records.
///
/// Fails only when the text is not syntactically valid Python; the caller
/// decides whether that aborts the run or just skips the file.
pub fn collect_file_imports(source: &str) -> Result<FileAnalysis, ParseError> {
    let parsed = parse_module(source)?;
    let mut collector = ImportCollector::new();
    for stmt in &parsed.syntax().body {
        collector.visit_stmt(stmt);
    }
    Ok(collector.into_analysis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_import_records_every_clause() {
        let source = r#"
import os
import numpy, pandas
import matplotlib.pyplot as plt
"#;
        let analysis = collect_file_imports(source).expect("valid module");
        let plain: Vec<&str> = analysis.plain_names().collect();
        assert_eq!(plain, vec!["os", "numpy", "pandas", "matplotlib.pyplot"]);
        assert_eq!(analysis.from_names().count(), 0);
    }

    #[test]
    fn test_from_import_records_symbols_not_module() {
        let source = "from sklearn.model_selection import train_test_split, KFold\n";
        let analysis = collect_file_imports(source).expect("valid module");
        let from: Vec<&str> = analysis.from_names().collect();
        assert_eq!(from, vec!["train_test_split", "KFold"]);
        // The module itself must not be recorded.
        assert!(analysis.raw_names().all(|n| n != "sklearn.model_selection"));
    }

    #[test]
    fn test_alias_is_ignored() {
        let source = "import numpy as np\nfrom collections import OrderedDict as OD\n";
        let analysis = collect_file_imports(source).expect("valid module");
        let names: Vec<&str> = analysis.raw_names().collect();
        assert_eq!(names, vec!["numpy", "OrderedDict"]);
    }

    #[test]
    fn test_nested_scopes_are_visited() {
        let source = r#"
def load():
    import json

class Loader:
    def run(self):
        from datetime import datetime
        return datetime.now()

if True:
    import platform
    while False:
        import zlib

try:
    with open("x") as f:
        import csv
except ImportError:
    import io
"#;
        let analysis = collect_file_imports(source).expect("valid module");
        let names: Vec<&str> = analysis.raw_names().collect();
        assert_eq!(
            names,
            vec!["json", "datetime", "platform", "zlib", "csv", "io"]
        );
    }

    #[test]
    fn test_relative_import_records_symbols() {
        let source = "from . import helpers\nfrom ..pkg import util\n";
        let analysis = collect_file_imports(source).expect("valid module");
        let from: Vec<&str> = analysis.from_names().collect();
        assert_eq!(from, vec!["helpers", "util"]);
    }

    #[test]
    fn test_wildcard_import_records_star() {
        let source = "from os.path import *\n";
        let analysis = collect_file_imports(source).expect("valid module");
        let from: Vec<&str> = analysis.from_names().collect();
        assert_eq!(from, vec!["*"]);
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let source = "import \n";
        assert!(collect_file_imports(source).is_err());
    }

    #[test]
    fn test_record_kinds_are_partitioned() {
        let source = "import os\nfrom sys import path\n";
        let analysis = collect_file_imports(source).expect("valid module");
        assert_eq!(
            analysis.records(),
            &[
                ImportRecord {
                    kind: ImportKind::Plain,
                    name: "os".to_string(),
                },
                ImportRecord {
                    kind: ImportKind::From,
                    name: "path".to_string(),
                },
            ]
        );
    }
}
