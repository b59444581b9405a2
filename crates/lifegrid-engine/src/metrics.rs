//! Per-generation metrics for the simulation engine.

/// Timing and transition counts collected during a single generation.
///
/// The world populates these fields after each `step()` call; the most
/// recent values remain available from `last_metrics()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for rule evaluation and commit, in microseconds.
    pub total_us: u64,
    /// Dead cells that became Alive this generation.
    pub births: u64,
    /// Alive cells that became Dead this generation.
    pub deaths: u64,
    /// Live-cell total after the commit.
    pub live_cells: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.live_cells, 0);
    }
}
