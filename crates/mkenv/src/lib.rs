//! Static import analysis for Python source trees.
//!
//! The crate walks a directory of `.py` files, collects every name introduced
//! by `import` and `from ... import ...` statements without executing any
//! code, canonicalizes those names into installable package identifiers, and
//! renders a conda-compatible `environment.yml` document.

pub mod config;
pub mod discovery;
pub mod emit;
pub mod orchestrator;
pub mod package_map;
pub mod types;
pub mod visitors;
