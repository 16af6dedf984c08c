//! The capacity sweep driver.

use tracing::info;

use crate::common::config::{
    DEFAULT_INSTRUCTIONS_PER_PAGE, DEFAULT_INSTRUCTION_COUNT, DEFAULT_MAX_FRAMES,
    DEFAULT_MIN_FRAMES, DEFAULT_SEED, MAX_SWEEP_FRAMES,
};
use crate::common::{Capacity, Error, Result};
use crate::experiment::{PolicyResult, SweepReport, SweepRow};
use crate::replacer::{Policy, RunStats};
use crate::workload::{AddressGenerator, ReferenceString, WalkProbabilities};

/// Everything needed to reproduce one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Length of the generated address sequence.
    pub instruction_count: u32,

    pub instructions_per_page: u32,

    /// Sweep bounds, both inclusive.
    pub min_frames: usize,
    pub max_frames: usize,

    pub probabilities: WalkProbabilities,
    pub seed: u64,

    /// Report columns, in order. Duplicates are dropped.
    pub policies: Vec<Policy>,

    /// Run each policy's column on its own thread.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            instruction_count: DEFAULT_INSTRUCTION_COUNT,
            instructions_per_page: DEFAULT_INSTRUCTIONS_PER_PAGE,
            min_frames: DEFAULT_MIN_FRAMES,
            max_frames: DEFAULT_MAX_FRAMES,
            probabilities: WalkProbabilities::default(),
            seed: DEFAULT_SEED,
            policies: Policy::ALL.to_vec(),
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    /// Check everything except the workload parameters.
    ///
    /// # Errors
    /// - `Error::InvalidFrameRange` if `min_frames` is 0 or above `max_frames`,
    ///   or `max_frames` exceeds [`MAX_SWEEP_FRAMES`]
    /// - `Error::NoPolicies` if `policies` is empty
    pub fn validate_sweep(&self) -> Result<()> {
        if self.min_frames == 0
            || self.min_frames > self.max_frames
            || self.max_frames > MAX_SWEEP_FRAMES
        {
            return Err(Error::InvalidFrameRange {
                min: self.min_frames,
                max: self.max_frames,
            });
        }
        if self.policies.is_empty() {
            return Err(Error::NoPolicies);
        }
        Ok(())
    }

    /// Full validation, including the generator parameters.
    pub fn validate(&self) -> Result<()> {
        self.validate_sweep()?;
        if self.instruction_count == 0 {
            return Err(Error::EmptyAddressSpace);
        }
        if self.instructions_per_page == 0 {
            return Err(Error::InvalidPageSize(self.instructions_per_page));
        }
        self.probabilities.validate()
    }

    pub fn capacities(&self) -> Result<Vec<Capacity>> {
        self.validate_sweep()?;
        (self.min_frames..=self.max_frames).map(Capacity::new).collect()
    }
}

/// One reference string, swept across capacities for each selected policy.
///
/// # Example
/// ```
/// use pagesim::experiment::{Experiment, ExperimentConfig};
///
/// let config = ExperimentConfig { seed: 7, ..ExperimentConfig::default() };
/// let report = Experiment::new(config).unwrap().run();
/// assert_eq!(report.rows.len(), 29); // 4..=32 frames
/// ```
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    reference: ReferenceString,
    capacities: Vec<Capacity>,
    policies: Vec<Policy>,
    seed: Option<u64>,
}

impl Experiment {
    /// Generate the reference string from `config` and prepare the sweep.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let addresses =
            AddressGenerator::new(config.instruction_count, config.probabilities, config.seed)?
                .generate();
        let reference = ReferenceString::from_addresses(&addresses, config.instructions_per_page)?;
        let seed = Some(config.seed);
        Self::build(config, reference, seed)
    }

    /// Sweep a caller-supplied reference string instead of generating one.
    ///
    /// Only the sweep settings of `config` are used.
    pub fn with_reference(config: ExperimentConfig, reference: ReferenceString) -> Result<Self> {
        Self::build(config, reference, None)
    }

    fn build(
        config: ExperimentConfig,
        reference: ReferenceString,
        seed: Option<u64>,
    ) -> Result<Self> {
        let capacities = config.capacities()?;

        let mut policies = Vec::with_capacity(config.policies.len());
        for &policy in &config.policies {
            if !policies.contains(&policy) {
                policies.push(policy);
            }
        }

        Ok(Self {
            config,
            reference,
            capacities,
            policies,
            seed,
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceString {
        &self.reference
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Run every `(policy, capacity)` pair and collect the table.
    ///
    /// Serial and parallel execution produce identical reports.
    pub fn run(&self) -> SweepReport {
        info!(
            references = self.reference.len(),
            distinct_pages = self.reference.distinct_pages(),
            fingerprint = %format!("{:#010x}", self.reference.fingerprint()),
            seed = ?self.seed,
            policies = self.policies.len(),
            capacities = self.capacities.len(),
            parallel = self.config.parallel,
            "starting sweep"
        );

        let columns = if self.config.parallel {
            self.run_parallel()
        } else {
            self.policies
                .iter()
                .map(|&policy| self.column(policy))
                .collect()
        };

        let rows = self
            .capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| SweepRow {
                capacity,
                results: self
                    .policies
                    .iter()
                    .zip(&columns)
                    .map(|(&policy, column)| PolicyResult {
                        policy,
                        stats: column[i],
                    })
                    .collect(),
            })
            .collect();

        SweepReport {
            references: self.reference.len(),
            fingerprint: self.reference.fingerprint(),
            seed: self.seed,
            policies: self.policies.clone(),
            rows,
        }
    }

    /// One policy across every capacity.
    fn column(&self, policy: Policy) -> Vec<RunStats> {
        let engine = policy.engine();
        self.capacities
            .iter()
            .map(|&capacity| engine.run(&self.reference, capacity))
            .collect()
    }

    /// One thread per policy; columns come back in policy order.
    fn run_parallel(&self) -> Vec<Vec<RunStats>> {
        std::thread::scope(|s| {
            let handles: Vec<_> = self
                .policies
                .iter()
                .map(|&policy| s.spawn(move || self.column(policy)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}
