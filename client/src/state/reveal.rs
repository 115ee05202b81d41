//! One-shot watch set for scroll reveal.
//!
//! DESIGN
//! ======
//! Watching is keyed by element identity. `reveal` removes the key, so a
//! second intersection report for the same element is ignored; there is no
//! way back into the set once revealed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    watched: Vec<K>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self { watched: Vec::new() }
    }
}

impl<K: PartialEq> RevealTracker<K> {
    /// Start watching `key`; duplicates are ignored.
    pub fn watch(&mut self, key: K) -> bool {
        if self.watched.contains(&key) {
            return false;
        }
        self.watched.push(key);
        true
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    /// Stop watching `key`. Returns `true` only the first time.
    pub fn reveal(&mut self, key: &K) -> bool {
        let Some(index) = self.watched.iter().position(|k| k == key) else {
            return false;
        };
        self.watched.swap_remove(index);
        true
    }

    pub fn watching(&self) -> usize {
        self.watched.len()
    }
}
