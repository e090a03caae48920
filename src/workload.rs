//! Random process tables.
//!
//! Generates small, valid workloads for demonstrations and property
//! tests. The caller supplies the RNG, so seeded generators give
//! reproducible tables.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, ProcessDescriptor};

/// Value ranges for generated processes.
///
/// Defaults: arrival `0..=4`, burst `2..=9`, priority `1..=5`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::default().generate(4, &mut rng);
/// assert_eq!(processes.len(), 4);
/// assert_eq!(processes[0].pid, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Arrival time range (ticks).
    pub arrival: RangeInclusive<u64>,
    /// Burst time range (ticks). Must start above zero.
    pub burst: RangeInclusive<u64>,
    /// Priority range.
    pub priority: RangeInclusive<i32>,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival: 0..=4,
            burst: 2..=9,
            priority: 1..=5,
        }
    }
}

impl WorkloadGenerator {
    /// Sets the arrival time range. A reversed range collapses to its start.
    pub fn with_arrival(mut self, arrival: RangeInclusive<u64>) -> Self {
        let (lo, hi) = arrival.into_inner();
        self.arrival = lo..=hi.max(lo);
        self
    }

    /// Sets the burst time range. A lower bound of 0 is raised to 1.
    pub fn with_burst(mut self, burst: RangeInclusive<u64>) -> Self {
        let (lo, hi) = burst.into_inner();
        let lo = lo.max(1);
        self.burst = lo..=hi.max(lo);
        self
    }

    /// Sets the priority range. A reversed range collapses to its start.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        let (lo, hi) = priority.into_inner();
        self.priority = lo..=hi.max(lo);
        self
    }

    /// Generates `count` processes with pids `1..=count`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessDescriptor> {
        (1..=count as Pid)
            .map(|pid| {
                ProcessDescriptor::new(
                    pid,
                    rng.random_range(self.arrival.clone()),
                    rng.random_range(self.burst.clone()),
                )
                .with_priority(rng.random_range(self.priority.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use crate::simulation::SimulationConfig;
    use crate::validation::validate_input;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let processes = WorkloadGenerator::default().generate(50, &mut rng);
        assert_eq!(processes.len(), 50);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.pid, i as Pid + 1);
            assert!(p.arrival_time <= 4);
            assert!((2..=9).contains(&p.burst_time));
            assert!((1..=5).contains(&p.priority));
        }
    }

    #[test]
    fn test_generated_tables_are_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let processes = WorkloadGenerator::default().generate(8, &mut rng);
        assert!(validate_input(&processes, &SimulationConfig::new(Policy::RoundRobin)).is_ok());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(5, &mut SmallRng::seed_from_u64(9));
        let b = generator.generate(5, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_burst_clamped() {
        let generator = WorkloadGenerator::default().with_burst(0..=0);
        assert_eq!(generator.burst, 1..=1);
        let processes = generator.generate(3, &mut SmallRng::seed_from_u64(3));
        assert!(processes.iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_custom_ranges() {
        let generator = WorkloadGenerator::default()
            .with_arrival(10..=10)
            .with_priority(-1..=-1);
        let processes = generator.generate(2, &mut SmallRng::seed_from_u64(0));
        assert!(processes.iter().all(|p| p.arrival_time == 10 && p.priority == -1));
    }

    #[test]
    fn test_reversed_ranges_collapse() {
        let generator = WorkloadGenerator::default()
            .with_arrival(5..=2)
            .with_burst(7..=3)
            .with_priority(4..=-2);
        assert_eq!(generator.arrival, 5..=5);
        assert_eq!(generator.burst, 7..=7);
        assert_eq!(generator.priority, 4..=4);

        let processes = generator.generate(4, &mut SmallRng::seed_from_u64(5));
        assert_eq!(processes.len(), 4);
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 5 && p.burst_time == 7 && p.priority == 4));
    }
}
