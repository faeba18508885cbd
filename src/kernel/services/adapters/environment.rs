//! Environment adapters: the live process environment and a fixed map.

use crate::kernel::services::ports::Environment;
use rustc_hash::FxHashMap;

/// Reads the current process environment on every call.
///
/// Lookup tries the exact name first, then an ASCII case-insensitive match, which is how
/// `cmd.exe` resolves `%path%` against `Path`. Variables that are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return None;
        }
        if let Ok(value) = std::env::var(name) {
            return Some(value);
        }
        std::env::vars_os().find_map(|(key, value)| {
            let key = key.into_string().ok()?;
            if !key.eq_ignore_ascii_case(name) {
                return None;
            }
            value.into_string().ok()
        })
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// Fixed variable set with case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        let key = name.to_ascii_uppercase();
        match self.index.get(&key) {
            Some(&idx) => self.vars[idx] = (name.to_string(), value.to_string()),
            None => {
                self.index.insert(key, self.vars.len());
                self.vars.push((name.to_string(), value.to_string()));
            }
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for StaticEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.insert(name.as_ref(), value.as_ref());
        }
        env
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        let idx = *self.index.get(&name.to_ascii_uppercase())?;
        self.vars.get(idx).map(|(_, value)| value.clone())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars.clone()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/environment.rs"]
mod tests;
