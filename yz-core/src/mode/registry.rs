//! Mode registry
//!
//! Hosts select a mode by name, by the MIME type a buffer is declared with,
//! or by file extension.

use super::{LanguageMode, YzMode};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    #[error("no mode registered for MIME type '{0}'")]
    UnknownMime(String),

    #[error("no mode registered for file extension '{0}'")]
    UnknownExtension(String),
}

/// Registry of language modes, keyed by mode name
#[derive(Default)]
pub struct ModeRegistry {
    modes: HashMap<String, Arc<dyn LanguageMode>>,
    /// MIME type -> mode name
    mimes: HashMap<String, String>,
    /// extension (lowercase, no dot) -> mode name
    extensions: HashMap<String, String>,
}

impl std::fmt::Debug for ModeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeRegistry")
            .field("modes", &self.modes.len())
            .field("mimes", &self.mimes.len())
            .finish()
    }
}

impl ModeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Yz mode under `text/x-yz` and `text/yz`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(YzMode::new()));
        registry
    }

    /// Register a mode together with the MIME types and extensions it declares
    ///
    /// A mode registered under an existing name replaces the old one.
    pub fn register(&mut self, mode: Arc<dyn LanguageMode>) {
        let info = mode.info();
        let name = info.name.to_string();
        debug!(target: "yz::mode", mode = %name, mimes = ?info.mime_types, "Registering mode");

        for mime in info.mime_types {
            self.mimes.insert(mime.to_string(), name.clone());
        }
        for ext in info.extensions {
            self.extensions.insert(ext.to_ascii_lowercase(), name.clone());
        }
        self.modes.insert(name, mode);
    }

    /// Bind an additional MIME type to an already registered mode
    pub fn define_mime(&mut self, mime: &str, mode_name: &str) -> Result<(), RegistryError> {
        if !self.modes.contains_key(mode_name) {
            return Err(RegistryError::UnknownMode(mode_name.to_string()));
        }
        debug!(target: "yz::mode", mime, mode = mode_name, "Defining MIME type");
        self.mimes.insert(mime.to_string(), mode_name.to_string());
        Ok(())
    }

    /// Get a mode by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn LanguageMode>, RegistryError> {
        self.modes
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMode(name.to_string()))
    }

    /// Check if a mode exists
    pub fn contains(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    /// Resolve a MIME type
    pub fn for_mime(&self, mime: &str) -> Result<Arc<dyn LanguageMode>, RegistryError> {
        let name = self
            .mimes
            .get(mime)
            .ok_or_else(|| RegistryError::UnknownMime(mime.to_string()))?;
        self.get(name)
    }

    /// Resolve a file extension (`yz`, `.yz` and `YZ` are equivalent)
    pub fn for_extension(&self, ext: &str) -> Result<Arc<dyn LanguageMode>, RegistryError> {
        let key = ext.trim_start_matches('.').to_ascii_lowercase();
        let name = self
            .extensions
            .get(&key)
            .ok_or_else(|| RegistryError::UnknownExtension(ext.to_string()))?;
        self.get(name)
    }

    /// Resolve a path by its extension
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn LanguageMode>, RegistryError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        self.for_extension(ext)
    }

    /// Registered MIME types, sorted
    pub fn mime_types(&self) -> Vec<&str> {
        let mut mimes: Vec<_> = self.mimes.keys().map(String::as_str).collect();
        mimes.sort_unstable();
        mimes
    }

    /// Get the number of registered modes
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
