//! The alias registry: source binding, cached expansion, and lookups.
//!
//! [`Registry`] is an explicit context object owned by the host application.
//! It binds the active alias file, builds the alias mapping once on first
//! access, and serves lookups until the source is rebound. There is no
//! process-global state; hosts that want a single registry share one
//! instance.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::format::{format_path, FormatOptions, Variables};
use crate::tree::{expand, AliasMap};

/// Conventional alias-file name used when no source is set explicitly.
pub const DEFAULT_SOURCE: &str = ".onde.yml";

/// Process-lifetime cache of the alias mapping for one source file.
///
/// The mapping is built lazily on the first call to [`Registry::mapping`]
/// (or anything that needs it) and is immutable afterwards; rebinding the
/// source with [`Registry::set_source`] invalidates the cache. Construction
/// is guarded so concurrent callers never observe a partial mapping.
///
/// # Examples
///
/// ```no_run
/// use onde::{FormatOptions, Registry, Variables};
///
/// let registry = Registry::with_source("paths.yml")?;
/// let path = registry.resolve("notes", &Variables::new(), &FormatOptions::default())?;
/// println!("{path}");
/// # Ok::<(), onde::Error>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    source: PathBuf,
    cache: Mutex<Option<Arc<AliasMap>>>,
}

impl Registry {
    /// Create a registry bound to the default source, [`DEFAULT_SOURCE`].
    ///
    /// The default file is not required to exist until the mapping is first
    /// needed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            cache: Mutex::new(None),
        }
    }

    /// Create a registry bound to `path`, validating it up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file cannot be read or is not
    /// valid YAML.
    pub fn with_source(path: impl Into<PathBuf>) -> Result<Self> {
        let mut registry = Self::new();
        registry.set_source(path)?;
        Ok(registry)
    }

    /// Rebind the registry to a new alias file.
    ///
    /// The file must be readable and parseable as YAML; tree-shape errors
    /// are only detected when the mapping is built. On success the previous
    /// cached mapping, if any, is discarded. On failure the registry is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file cannot be read or is not
    /// valid YAML.
    pub fn set_source(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        load_document(&path)?;

        log::debug!("alias source bound to {}", path.display());
        self.source = path;
        *self.cache.get_mut().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    /// The path of the active alias file.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The alias mapping for the active source.
    ///
    /// Built on first access and cached; concurrent callers block until the
    /// in-flight build completes and then observe the cached result. A
    /// failed build leaves the cache untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the source cannot be loaded, or
    /// propagates [`Error::MalformedNode`] / [`Error::DuplicateAlias`] from
    /// expansion.
    pub fn mapping(&self) -> Result<Arc<AliasMap>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mapping) = cache.as_ref() {
            return Ok(Arc::clone(mapping));
        }

        let document = load_document(&self.source)?;
        let mapping = Arc::new(expand(&document)?);
        *cache = Some(Arc::clone(&mapping));
        Ok(mapping)
    }

    /// The set of aliases known to the active source.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`Registry::mapping`].
    pub fn aliases(&self) -> Result<BTreeSet<String>> {
        Ok(self.mapping()?.keys().cloned().collect())
    }

    /// Resolve an alias into a formatted path.
    ///
    /// The alias may be supplied as any string-like value. The raw path is
    /// looked up in the mapping and handed to the formatter with the given
    /// variables and options.
    ///
    /// # Errors
    ///
    /// - [`Error::PathNotFound`] if the alias is absent from the mapping.
    /// - Any mapping-construction error from [`Registry::mapping`].
    /// - Any formatting error from [`crate::format::format_path`].
    pub fn resolve(
        &self,
        alias: impl AsRef<str>,
        variables: &Variables,
        options: &FormatOptions,
    ) -> Result<String> {
        let alias = alias.as_ref();
        let mapping = self.mapping()?;
        let raw = mapping.get(alias).ok_or_else(|| Error::PathNotFound {
            alias: alias.to_string(),
        })?;
        format_path(raw, variables, options)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse the alias file at `path`.
fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| Error::Configuration {
        path: path.to_path_buf(),
        reason: format!("failed to read alias file: {e}"),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| Error::Configuration {
        path: path.to_path_buf(),
        reason: format!("invalid YAML: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn alias_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_source() {
        assert_eq!(Registry::new().source(), Path::new(DEFAULT_SOURCE));
        assert_eq!(Registry::default().source(), Path::new(DEFAULT_SOURCE));
    }

    #[test]
    fn test_set_source_missing_file_fails() {
        let mut registry = Registry::new();
        let err = registry.set_source("/nonexistent/paths.yml").unwrap_err();
        assert!(err.is_configuration());
        // The registry stays bound to its previous source.
        assert_eq!(registry.source(), Path::new(DEFAULT_SOURCE));
    }

    #[test]
    fn test_set_source_invalid_yaml_fails() {
        let file = alias_file("foo: [unbalanced");
        let mut registry = Registry::new();
        assert!(registry.set_source(file.path()).unwrap_err().is_configuration());
    }

    #[test]
    fn test_set_source_accepts_tree_shape_errors() {
        // set_source validates YAML syntax only; the shape error surfaces
        // from mapping().
        let file = alias_file("- dup: a");
        let registry = Registry::with_source(file.path()).unwrap();
        assert!(matches!(
            registry.mapping(),
            Err(Error::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_mapping_is_cached() {
        let file = alias_file("- - foo: foo.txt");
        let registry = Registry::with_source(file.path()).unwrap();
        let first = registry.mapping().unwrap();
        let second = registry.mapping().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_set_source_invalidates_cache() {
        let first_file = alias_file("- - foo: foo.txt");
        let second_file = alias_file("- - bar: bar.txt");

        let mut registry = Registry::with_source(first_file.path()).unwrap();
        assert!(registry.mapping().unwrap().contains_key("foo"));

        registry.set_source(second_file.path()).unwrap();
        let mapping = registry.mapping().unwrap();
        assert!(mapping.contains_key("bar"));
        assert!(!mapping.contains_key("foo"));
    }

    #[test]
    fn test_failed_build_reports_same_error_on_retry() {
        let file = alias_file("- - dup: a\n- - dup: b");
        let registry = Registry::with_source(file.path()).unwrap();
        for _ in 0..2 {
            assert!(matches!(
                registry.mapping(),
                Err(Error::DuplicateAlias { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_unknown_alias() {
        let file = alias_file("- - foo: foo.txt");
        let registry = Registry::with_source(file.path()).unwrap();
        let err = registry
            .resolve("missing", &Variables::new(), &FormatOptions::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_accepts_string_like_aliases() {
        let file = alias_file("- - foo: foo.txt");
        let registry = Registry::with_source(file.path()).unwrap();
        let options = FormatOptions::default();

        let from_str = registry.resolve("foo", &Variables::new(), &options).unwrap();
        let from_string = registry
            .resolve(String::from("foo"), &Variables::new(), &options)
            .unwrap();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_concurrent_mapping_builds_once() {
        let file = alias_file("- - foo: foo.txt");
        let registry = Registry::with_source(file.path()).unwrap();

        let mappings: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.mapping().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for mapping in &mappings {
            assert!(Arc::ptr_eq(mapping, &mappings[0]));
        }
    }
}
