//! Caching compiler
//!
//! Compilation results, failures included, are memoized by source text. Caches are
//! bounded: once full, new texts are compiled on every call instead of being admitted.

use dashmap::DashMap;
use jsonpath_query_core::{
    CompilerConfig, ConfigResult, ConfigurationError, FilterExpression, JsonPathResult,
    Validator, compile_filter_with, compile_query_with,
};
use once_cell::sync::Lazy;

use crate::JsonPath;

/// Default number of cached texts per cache
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Upper bound accepted by [`CacheConfig::validate`]
pub const MAX_ENTRIES_LIMIT: usize = 1 << 20;

static GLOBAL: Lazy<JsonPathCompiler> = Lazy::new(JsonPathCompiler::new);

/// The process-wide compiler behind [`crate::compile`] and [`JsonPath::compile`]
pub(crate) fn global() -> &'static JsonPathCompiler {
    &GLOBAL
}

/// Compile cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of texts kept per cache; `0` disables caching
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Configuration that never caches
    #[must_use]
    pub const fn no_cache() -> Self {
        Self { max_entries: 0 }
    }

    #[must_use]
    pub const fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }
}

impl Validator for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_entries > MAX_ENTRIES_LIMIT {
            return Err(ConfigurationError::InvalidParameter(format!(
                "max_entries {} exceeds the limit of {MAX_ENTRIES_LIMIT}",
                self.max_entries
            )));
        }
        Ok(())
    }
}

/// Thread-safe compiler with bounded query and filter caches
#[derive(Debug)]
pub struct JsonPathCompiler {
    config: CompilerConfig,
    cache: CacheConfig,
    queries: DashMap<String, JsonPathResult<JsonPath>>,
    filters: DashMap<String, JsonPathResult<FilterExpression>>,
}

impl Default for JsonPathCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonPathCompiler {
    /// Compiler with default limits and cache size
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CompilerConfig::default(),
            cache: CacheConfig::default(),
            queries: DashMap::new(),
            filters: DashMap::new(),
        }
    }

    /// Compiler with explicit limits and cache size
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if either configuration is invalid.
    pub fn with_config(config: CompilerConfig, cache: CacheConfig) -> ConfigResult<Self> {
        config.validate()?;
        cache.validate()?;
        Ok(Self {
            config,
            cache,
            queries: DashMap::new(),
            filters: DashMap::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile a root query
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntactic error in `text`.
    pub fn compile(&self, text: &str) -> JsonPathResult<JsonPath> {
        if let Some(entry) = self.queries.get(text) {
            tracing::trace!(query = text, "compile cache hit");
            return entry.value().clone();
        }
        tracing::trace!(query = text, "compile cache miss");
        let result = compile_query_with(text, &self.config).map(JsonPath::from_query);
        admit(&self.queries, self.cache.max_entries, text, &result);
        result
    }

    /// Compile a standalone filter expression
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntactic error in `text`.
    pub fn compile_filter(&self, text: &str) -> JsonPathResult<FilterExpression> {
        if let Some(entry) = self.filters.get(text) {
            tracing::trace!(filter = text, "compile cache hit");
            return entry.value().clone();
        }
        tracing::trace!(filter = text, "compile cache miss");
        let result = compile_filter_with(text, &self.config);
        admit(&self.filters, self.cache.max_entries, text, &result);
        result
    }

    /// Number of cached query and filter texts
    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.queries.len() + self.filters.len()
    }

    pub fn clear(&self) {
        self.queries.clear();
        self.filters.clear();
    }
}

fn admit<T: Clone>(cache: &DashMap<String, T>, limit: usize, text: &str, result: &T) {
    if cache.len() < limit {
        cache.insert(text.to_owned(), result.clone());
    } else if limit > 0 {
        tracing::debug!(limit, text, "compile cache full, result not cached");
    }
}
