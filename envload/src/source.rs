//! Environment variable sources
//!
//! Loaders never touch `std::env` directly; they read through an [`EnvSource`]
//! so the process environment can be swapped for an in-memory table in tests.

use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

/// Read-only key to string lookup.
///
/// Returns `None` when the variable is not set.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The process environment.
///
/// Values that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment table.
///
/// Mutation goes through `&self`, so a shared `MapEnv` can be updated while a
/// [`Loader`](crate::Loader) borrows it.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        let vars = self.vars.read().unwrap_or_else(|e| e.into_inner());
        vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}
