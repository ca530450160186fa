//! Rendering of an [`EnvironmentSpec`] into the `environment.yml` text.

use crate::types::EnvironmentSpec;

/// Channels emitted in every document.
const CHANNELS: &[&str] = &["conda-forge", "defaults"];

/// Render the conda environment document.
///
/// The first two dependency entries are always the interpreter pin and the
/// `pip` bootstrap; the canonical package names follow, one list entry each,
/// already sorted by the pipeline. No version pins are emitted beyond the
/// interpreter itself: the document is a starting template, not a lockfile.
/// Packages that conda cannot serve would go in a nested `pip:` sub-list,
/// which is left to the user to add.
pub fn render_environment_yml(spec: &EnvironmentSpec) -> String {
    let mut doc = String::new();
    doc.push_str("name: ");
    doc.push_str(&spec.env_name);
    doc.push('\n');
    doc.push_str("channels:\n");
    for channel in CHANNELS {
        doc.push_str("  - ");
        doc.push_str(channel);
        doc.push('\n');
    }
    doc.push_str("dependencies:\n");
    doc.push_str("  - python=");
    doc.push_str(&spec.python_version);
    doc.push('\n');
    doc.push_str("  - pip\n");
    for dependency in &spec.dependencies {
        doc.push_str("  - ");
        doc.push_str(dependency);
        doc.push('\n');
    }
    doc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec(dependencies: &[&str]) -> EnvironmentSpec {
        EnvironmentSpec {
            env_name: "demo".to_string(),
            python_version: "3.8".to_string(),
            dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
        }
    }

    #[test]
    fn test_render_with_dependencies() {
        let doc = render_environment_yml(&spec(&["imbalanced-learn", "numpy", "pandas"]));
        let expected = [
            "name: demo",
            "channels:",
            "  - conda-forge",
            "  - defaults",
            "dependencies:",
            "  - python=3.8",
            "  - pip",
            "  - imbalanced-learn",
            "  - numpy",
            "  - pandas",
            "",
        ]
        .join("\n");
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_empty_dependency_list() {
        let doc = render_environment_yml(&spec(&[]));
        assert!(doc.ends_with("dependencies:\n  - python=3.8\n  - pip\n"));
        assert_eq!(doc.lines().count(), 7);
    }
}
