//! Variable names for generated bindings

use ahash::{AHashMap, AHashSet};

/// Hands out unique, valid Rust identifiers for one generated program
#[derive(Debug, Default)]
pub struct Naming {
    used: AHashSet<String>,
    counters: AHashMap<&'static str, usize>,
}

impl Naming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a name for a construct
    ///
    /// Named constructs become `{prefix}_{name}`; unnamed ones, and names
    /// with no usable characters, take the next `{prefix}_{n}`.
    pub fn bind(&mut self, prefix: &'static str, name: Option<&str>) -> String {
        let cleaned = name.map(sanitize).filter(|s| !s.is_empty());
        match cleaned {
            Some(cleaned) => self.claim(format!("{}_{}", prefix, cleaned)),
            None => self.next_numbered(prefix),
        }
    }

    fn next_numbered(&mut self, prefix: &'static str) -> String {
        loop {
            let counter = self.counters.entry(prefix).or_insert(0);
            *counter += 1;
            let candidate = format!("{}_{}", prefix, counter);
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
        }
    }

    /// Reserve `base`, or the first free `{base}_{n}` when it is taken
    pub fn claim(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// Lowercase ASCII identifier fragment for an arbitrary entry name
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}
