//! Typed loaders with default fallback

use crate::diagnostic::{DiagnosticSink, LoadEvent, TracingSink};
use crate::error::FallbackReason;
use crate::source::{EnvSource, SystemEnv};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Reads variables from an [`EnvSource`] and reports every outcome to a
/// [`DiagnosticSink`].
///
/// Every `load_*` method returns either the parsed environment value or the
/// supplied default. Nothing is cached; each call reads the source again.
#[derive(Debug, Clone, Default)]
pub struct Loader<E = SystemEnv, D = TracingSink> {
    source: E,
    sink: D,
}

impl Loader {
    /// Loader over the process environment, logging through `tracing`.
    pub fn system() -> Self {
        Self::default()
    }
}

impl<E: EnvSource, D: DiagnosticSink> Loader<E, D> {
    pub fn new(source: E, sink: D) -> Self {
        Self { source, sink }
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Value of `key` with surrounding whitespace removed; absent is empty.
    pub fn trimmed(&self, key: &str) -> String {
        self.source
            .var(key)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Load `key` with a custom parser.
    ///
    /// Blank or absent values return `default` without calling `parse`.
    /// A parser error also returns `default`.
    pub fn load_with<T, F, Err>(&self, key: &str, default: T, parse: F) -> T
    where
        T: Debug,
        F: FnOnce(&str) -> Result<T, Err>,
        Err: Display,
    {
        let value = self.trimmed(key);
        if value.is_empty() {
            self.sink
                .record(&LoadEvent::fallback(key, FallbackReason::Unset, &default));
            return default;
        }

        match parse(&value) {
            Ok(parsed) => {
                self.sink.record(&LoadEvent::loaded(key, &parsed));
                parsed
            }
            Err(e) => {
                let reason = FallbackReason::malformed::<T>(value, e);
                self.sink.record(&LoadEvent::fallback(key, reason, &default));
                default
            }
        }
    }

    /// Load `key` using `FromStr`.
    pub fn load<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Debug,
        T::Err: Display,
    {
        self.load_with(key, default, |raw| raw.parse::<T>())
    }

    /// Base-10 signed 64-bit integer.
    pub fn load_int(&self, key: &str, default: i64) -> i64 {
        self.load(key, default)
    }

    /// 64-bit float.
    pub fn load_float(&self, key: &str, default: f64) -> f64 {
        self.load(key, default)
    }

    /// Exactly `true` or `false`; any other spelling falls back.
    pub fn load_bool(&self, key: &str, default: bool) -> bool {
        self.load(key, default)
    }

    /// The trimmed value as is.
    pub fn load_string(&self, key: &str, default: impl Into<String>) -> String {
        self.load(key, default.into())
    }

    /// Split on `separator`, trim each entry, drop empty ones.
    ///
    /// There is no blank check before splitting: an absent or blank variable
    /// splits into no entries and falls back with
    /// [`FallbackReason::EmptyList`], not [`FallbackReason::Unset`].
    pub fn load_array(&self, key: &str, separator: &str, default: Vec<String>) -> Vec<String> {
        let entries: Vec<String> = self
            .trimmed(key)
            .split(separator)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();

        if entries.is_empty() {
            let reason = FallbackReason::empty_list(separator);
            self.sink.record(&LoadEvent::fallback(key, reason, &default));
            return default;
        }

        self.sink.record(&LoadEvent::loaded(key, &entries));
        entries
    }
}
