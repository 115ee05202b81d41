//! Scroll reveal for experience entries.
//!
//! Each `.experience-item` is watched until it first crosses the visibility
//! threshold, then marked `visible` and dropped from the watch set. In the
//! browser an `IntersectionObserver` feeds `on_intersections` and
//! unobserves whatever it returns.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::Dom;
use crate::state::reveal::RevealTracker;

pub const ITEM_SELECTOR: &str = ".experience-item";
pub const VISIBLE_CLASS: &str = "visible";

/// Browsers report crossing ratios a hair under the requested threshold.
const RATIO_TOLERANCE: f64 = 0.01;

/// One observer report for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<N> {
    pub target: N,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub struct RevealAnimator<D: Dom> {
    dom: D,
    tracker: RevealTracker<D::Node>,
    threshold: f64,
}

impl<D: Dom> RevealAnimator<D> {
    /// Watch every experience entry currently on the page.
    pub fn observe(dom: D, threshold: f64) -> Self {
        let mut tracker = RevealTracker::default();
        for item in dom.query_all(ITEM_SELECTOR) {
            tracker.watch(item);
        }
        log::debug!("reveal: watching {} entries", tracker.watching());
        Self { dom, tracker, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_watching(&self, node: &D::Node) -> bool {
        self.tracker.is_watching(node)
    }

    pub fn watching(&self) -> usize {
        self.tracker.watching()
    }

    /// Apply one batch of reports. Returns the elements revealed by this
    /// batch; the caller must stop observing them.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry<D::Node>]) -> Vec<D::Node> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio + RATIO_TOLERANCE < self.threshold {
                continue;
            }
            if self.tracker.reveal(&entry.target) {
                self.dom.add_class(&entry.target, VISIBLE_CLASS);
                revealed.push(entry.target.clone());
            }
        }
        revealed
    }
}
