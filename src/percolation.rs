//! Newman-Ziff node percolation.
//!
//! One *trial* shuffles the activation order, then switches nodes on one
//! at a time, merging clusters through a [`ClusterTracker`] and recording
//! the largest cluster seen so far after every step. Many trials are
//! averaged per step by [`StepStatistics`].
//!
//! All per-trial buffers live in the [`Percolation`] context and are
//! reused, so a run allocates only once regardless of the trial count.
//!
//! # Reproducibility
//!
//! The activation order is reshuffled in place each trial, starting from
//! ascending node order for the first one. Given the same network and
//! seed, every trial and therefore every statistic is reproduced
//! exactly.
//!
//! # References
//!
//! - Newman & Ziff (2000), "Efficient Monte Carlo algorithm and
//!   high-precision results for percolation", *Phys. Rev. Lett.* 85, 4104.

use tracing::{debug, info};

use crate::collections::ClusterTracker;
use crate::config::{ConfigError, SimulationConfig};
use crate::network::Network;
use crate::random::{shuffle, Pcg32};
use crate::stats::{StepStatistics, StepSummary};

const PROGRESS_INTERVAL: u32 = 1_000;

/// Trial runner bound to one network.
///
/// # Examples
/// ```
/// use u_percolation::network::Network;
/// use u_percolation::percolation::Percolation;
///
/// let ring = Network::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let mut runner = Percolation::new(&ring, 42);
/// assert_eq!(runner.run_trial(), &[1, 2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct Percolation<'a> {
    network: &'a Network,
    tracker: ClusterTracker,
    order: Vec<usize>,
    largest: Vec<usize>,
    rng: Pcg32,
    stats: StepStatistics,
}

impl<'a> Percolation<'a> {
    /// Creates a runner with the generator state set to `seed`.
    pub fn new(network: &'a Network, seed: u64) -> Self {
        let n = network.node_count();
        Self {
            network,
            tracker: ClusterTracker::new(n),
            order: (0..n).collect(),
            largest: vec![0; n],
            rng: Pcg32::new(seed),
            stats: StepStatistics::new(n),
        }
    }

    /// Runs one trial and records it.
    ///
    /// # Returns
    /// The running maximum of the cluster size after each activation
    /// step. The series is non-decreasing and ends at the size of the
    /// network's largest connected component.
    pub fn run_trial(&mut self) -> &[usize] {
        shuffle(&mut self.order, &mut self.rng);
        self.tracker.reset();

        let mut current = 0;
        for (step, &node) in self.order.iter().enumerate() {
            let neighbors = self.network.neighbors(node).iter().copied();
            current = current.max(self.tracker.activate(node, neighbors));
            self.largest[step] = current;
        }

        self.stats.record_trial(&self.largest);
        &self.largest
    }

    /// Runs `trials` trials in sequence.
    ///
    /// # Returns
    /// The finalised table over every trial recorded so far, or `None`
    /// while fewer than 2 trials have run.
    pub fn run(&mut self, trials: u32) -> Option<Vec<StepSummary>> {
        for trial in 1..=trials {
            self.run_trial();
            if trial % PROGRESS_INTERVAL == 0 {
                debug!(trial, of = trials, "percolation progress");
            }
        }
        self.summarize()
    }

    /// Activation order used by the most recent trial.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Accumulated statistics.
    pub fn statistics(&self) -> &StepStatistics {
        &self.stats
    }

    /// Random generator, for inspecting consumption.
    pub fn rng(&self) -> &Pcg32 {
        &self.rng
    }

    /// Finalised per-step table, or `None` before the second trial.
    pub fn summarize(&self) -> Option<Vec<StepSummary>> {
        self.stats.finalize()
    }
}

/// Runs a full simulation and returns one summary row per step.
///
/// # Errors
/// Returns `Err` if the configuration is invalid; nothing is simulated
/// in that case.
///
/// # Examples
/// ```
/// use u_percolation::config::SimulationConfig;
/// use u_percolation::network::Network;
/// use u_percolation::percolation::simulate;
///
/// let pair = Network::from_edges(2, &[(0, 1)]).unwrap();
/// let table = simulate(&pair, &SimulationConfig::new(1).with_trials(10)).unwrap();
/// assert_eq!(table[0].mean, 1.0);
/// assert_eq!(table[1].mean, 2.0);
/// ```
pub fn simulate(
    network: &Network,
    config: &SimulationConfig,
) -> Result<Vec<StepSummary>, ConfigError> {
    config.validate()?;
    info!(
        seed = config.seed,
        trials = config.trials,
        nodes = network.node_count(),
        edges = network.edge_count(),
        "starting percolation"
    );

    let mut runner = Percolation::new(network, config.seed);
    Ok(runner
        .run(config.trials)
        .expect("validated configuration has at least 2 trials"))
}
