use std::{
    collections::BTreeMap,
    mem,
    ops::{Deref, DerefMut},
};

/// An ordered set of named metrics accumulated by an environment over one episode
///
/// Environments expose a `Report` so training loops can harvest per-episode
/// metrics without knowing how they are produced. [`Report::take`] hands the
/// accumulated values to the caller and resets them to zero for the next
/// episode.
#[derive(Debug, Clone, Default)]
pub struct Report {
    metrics: BTreeMap<&'static str, f64>,
}

impl Report {
    /// Initialize a report with the given metric keys, all zeroed
    pub fn new(keys: Vec<&'static str>) -> Self {
        Self {
            metrics: keys.into_iter().map(|k| (k, 0.0)).collect(),
        }
    }

    /// The metric keys, in iteration order
    pub fn keys(&self) -> Vec<&'static str> {
        self.metrics.keys().copied().collect()
    }

    /// Take the accumulated metrics, resetting them to zero
    pub fn take(&mut self) -> BTreeMap<&'static str, f64> {
        let fresh = self.metrics.keys().map(|k| (*k, 0.0)).collect();
        mem::replace(&mut self.metrics, fresh)
    }
}

impl Deref for Report {
    type Target = BTreeMap<&'static str, f64>;

    fn deref(&self) -> &Self::Target {
        &self.metrics
    }
}

impl DerefMut for Report {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accumulates_and_resets() {
        let mut report = Report::new(vec!["reward", "steps"]);
        assert_eq!(report.keys(), ["reward", "steps"], "keys in order");

        report.entry("reward").and_modify(|x| *x += 1.0);
        report.entry("reward").and_modify(|x| *x += 1.0);
        report.entry("steps").and_modify(|x| *x += 2.0);

        let taken = report.take();
        assert_eq!(taken["reward"], 2.0, "reward accumulated");
        assert_eq!(taken["steps"], 2.0, "steps accumulated");
        assert_eq!(report["reward"], 0.0, "reward reset after take");
        assert_eq!(report.keys(), ["reward", "steps"], "keys survive take");
    }
}
