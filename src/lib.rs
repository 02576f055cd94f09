//! # keytext
//!
//! Keypath-based text substitution for animation rendering.
//!
//! At render time the host engine asks a [`TextResolver`] which text to draw
//! for a text node, passing the node's keypath and the text authored in the
//! animation file.
//!
//! ## Example
//!
//! ```no_run
//! use keytext::{MapResolver, TextResolver};
//!
//! let resolver = MapResolver::from_path("strings/fr.json").unwrap();
//! let text = resolver.resolve("Intro.Title", "Welcome");
//! println!("{}", text);
//! ```

pub mod case_insensitive;
pub mod error;
pub mod loader;
pub mod resolver;

pub use case_insensitive::{find_case_insensitive, upsert_case_insensitive};
pub use error::{Error, Result};
pub use resolver::{MapResolver, PassthroughResolver, TextResolver};

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;
    use std::collections::HashMap;

    /// Resolves the text for a keypath using the given mapping.
    #[pyfunction]
    fn resolve_text(values: HashMap<String, String>, keypath: &str, source: &str) -> String {
        MapResolver::new(values).resolve(keypath, source)
    }

    /// Returns the source text unchanged.
    #[pyfunction]
    fn passthrough(keypath: &str, source: &str) -> String {
        PassthroughResolver.resolve(keypath, source)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn keytext(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(resolve_text, m)?)?;
        m.add_function(wrap_pyfunction!(passthrough, m)?)?;
        Ok(())
    }
}
