use crate::adm::{
    config::AdmConfig,
    error::{AdmError, domain_exhausted},
    ports::{SolverPort, filter_solver_output},
    preference::{PreferenceInfo, PreferenceStrategy, ReferencePointStrategy},
    scoring::representative_point,
    telemetry::{InMemoryTelemetry, IterationRecord, TelemetrySink},
    utility::UtilityFunction,
};
use crate::region::{BoxId, Hyperbox, PotentialRegion, Vector};

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptOutcome {
    pub changed: bool,
    pub new_solutions: Vec<Vector>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    pub preference: PreferenceInfo,
    pub changed: bool,
    /// The caller is expected to pass this box's id back as `retire` on
    /// the following iteration once the optimizer has produced a
    /// solution from it.
    pub chosen_box: Hyperbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub iteration: IterationOutcome,
    pub solutions: Vec<Vector>,
}

/// Automatic decision maker: consumes Pareto-optimal objective vectors
/// round by round and produces reference-point preference information
/// for the next round. Owns the potential region, the Pareto pool and
/// the telemetry log; all operations are synchronous and run to
/// completion.
pub struct Adm {
    config: AdmConfig,
    region: PotentialRegion,
    pool: Vec<Vector>,
    utility: Box<dyn UtilityFunction>,
    strategy: Box<dyn PreferenceStrategy>,
    log: InMemoryTelemetry,
    observer: Option<Box<dyn TelemetrySink>>,
    iteration: u64,
}

impl std::fmt::Debug for Adm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adm")
            .field("config", &self.config)
            .field("region", &self.region)
            .field("pool_size", &self.pool.len())
            .field("iteration", &self.iteration)
            .finish_non_exhaustive()
    }
}

impl Adm {
    pub fn new(config: AdmConfig, utility: Box<dyn UtilityFunction>) -> Result<Self, AdmError> {
        config.validate()?;
        let region = PotentialRegion::new(&config.ideal, &config.nadir)?;
        Ok(Self {
            config,
            region,
            pool: Vec::new(),
            utility,
            strategy: Box::new(ReferencePointStrategy),
            log: InMemoryTelemetry::new(),
            observer: None,
            iteration: 1,
        })
    }

    pub fn with_preference_strategy(mut self, strategy: Box<dyn PreferenceStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_telemetry(mut self, observer: Box<dyn TelemetrySink>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Folds solutions into the Pareto pool and the potential region.
    /// An empty `solutions` batch is a strict no-op. Vectors are
    /// deduplicated against the pool by exact componentwise equality, a
    /// deliberate choice: the pool holds values echoed verbatim by the
    /// optimizer, not independently recomputed ones. Retired boxes are
    /// deleted unconditionally if still live.
    pub fn accept(
        &mut self,
        solutions: &[Vector],
        retire: &[BoxId],
    ) -> Result<AcceptOutcome, AdmError> {
        if solutions.is_empty() && retire.is_empty() {
            return Ok(AcceptOutcome {
                changed: false,
                new_solutions: Vec::new(),
            });
        }

        let mut new_solutions: Vec<Vector> = Vec::new();
        for candidate in solutions {
            if self.pool.contains(candidate) || new_solutions.contains(candidate) {
                continue;
            }
            new_solutions.push(candidate.clone());
        }

        let mut changed = false;
        for solution in &new_solutions {
            self.pool.push(solution.clone());
            changed |= self.region.add_point(solution)?;
        }
        for &id in retire {
            changed |= self.region.remove_box(id);
        }

        Ok(AcceptOutcome {
            changed,
            new_solutions,
        })
    }

    /// Single-vector entry point.
    pub fn accept_one(&mut self, solution: Vector) -> Result<AcceptOutcome, AdmError> {
        self.accept(std::slice::from_ref(&solution), &[])
    }

    /// The live box with the highest score. Ties are broken by
    /// encounter order of the underlying store, so the winner among
    /// equally scored boxes is store-dependent; with the default store
    /// it is the lowest id.
    pub fn best_box(&self) -> Result<Hyperbox, AdmError> {
        self.best_scored().map(|(hbox, _)| hbox)
    }

    pub fn box_score(&self, hbox: &Hyperbox) -> Result<f64, AdmError> {
        let representative = representative_point(hbox, self.config.coefficient_of_optimism);
        self.utility
            .evaluate(&representative, &self.config.ideal, &self.config.nadir)
    }

    /// One full ADM step: accept solutions, pick the best box, emit its
    /// preference, append a telemetry record and advance the iteration
    /// counter.
    pub fn next_iteration(
        &mut self,
        solutions: &[Vector],
        retire: &[BoxId],
    ) -> Result<IterationOutcome, AdmError> {
        let accepted = self.accept(solutions, retire)?;

        let mut max_utility: Option<f64> = None;
        for solution in solutions {
            let utility =
                self.utility
                    .evaluate(solution, &self.config.ideal, &self.config.nadir)?;
            if max_utility.is_none_or(|best| utility > best) {
                max_utility = Some(utility);
            }
        }

        let (chosen_box, box_score) = self.best_scored()?;
        let representative =
            representative_point(&chosen_box, self.config.coefficient_of_optimism);
        let preference = self.strategy.preference(&chosen_box, &representative);

        let record = IterationRecord {
            iteration: self.iteration,
            hypervolume: self.region.hypervolume(),
            box_count: self.region.box_count(),
            creation_count: self.region.creation_count(),
            pool_size: self.pool.len(),
            accepted: solutions.to_vec(),
            max_utility,
            chosen_box: chosen_box.clone(),
            box_score,
            preference: preference.clone(),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.record(record.clone());
        }
        self.log.record(record);
        self.iteration += 1;

        Ok(IterationOutcome {
            preference,
            changed: accepted.changed,
            chosen_box,
        })
    }

    /// One ADM-step/solver-step exchange: runs `next_iteration` on the
    /// pending solutions, hands the emitted preference to the solver
    /// and returns its filtered output for the next round.
    pub fn run_round(
        &mut self,
        solver: &mut dyn SolverPort,
        weights: &[f64],
        iteration_budget: u32,
        pending: &[Vector],
        retire: &[BoxId],
    ) -> Result<RoundOutcome, AdmError> {
        let iteration = self.next_iteration(pending, retire)?;
        let current_best = self.best_solution()?.map(|(y, _)| y);
        let raw = solver.solve(
            &iteration.preference,
            weights,
            current_best.as_deref(),
            iteration_budget,
        );
        let solutions = filter_solver_output(raw);
        Ok(RoundOutcome {
            iteration,
            solutions,
        })
    }

    /// The pool vector with the highest utility, or `None` while the
    /// pool is empty.
    pub fn best_solution(&self) -> Result<Option<(Vector, f64)>, AdmError> {
        let mut best: Option<(Vector, f64)> = None;
        for solution in &self.pool {
            let utility =
                self.utility
                    .evaluate(solution, &self.config.ideal, &self.config.nadir)?;
            if best.as_ref().is_none_or(|(_, score)| utility > *score) {
                best = Some((solution.clone(), utility));
            }
        }
        Ok(best)
    }

    pub fn config(&self) -> &AdmConfig {
        &self.config
    }

    pub fn hypervolume(&self) -> f64 {
        self.region.hypervolume()
    }

    pub fn potential_boxes(&self) -> Vec<Hyperbox> {
        self.region.boxes()
    }

    pub fn region(&self) -> &PotentialRegion {
        &self.region
    }

    pub fn pool(&self) -> &[Vector] {
        &self.pool
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The ADM-owned append-only telemetry log, one record per
    /// completed iteration.
    pub fn telemetry(&self) -> &[IterationRecord] {
        self.log.records()
    }

    fn best_scored(&self) -> Result<(Hyperbox, f64), AdmError> {
        let boxes = self.region.boxes();
        if boxes.is_empty() {
            return Err(domain_exhausted(
                "potential region holds no boxes to choose from",
            ));
        }
        let mut best: Option<(Hyperbox, f64)> = None;
        for hbox in boxes {
            let score = self.box_score(&hbox)?;
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((hbox, score));
            }
        }
        best.ok_or_else(|| domain_exhausted("potential region holds no boxes to choose from"))
    }
}
