//! Discrete-time uniprocessor simulation loop.
//!
//! # Algorithm
//!
//! Per tick, in order:
//! 1. Admit processes whose arrival time equals the clock.
//! 2. Select: non-preemptive and round-robin policies pick only when the
//!    CPU is idle; preemptive policies re-rank every arrived, unfinished
//!    process every tick.
//! 3. Record a snapshot of the state before execution.
//! 4. Execute one unit and advance the clock.
//! 5. Free the CPU if the running process finished.
//! 6. Round robin: after `quantum` consecutive ticks, admit arrivals at
//!    the new time, then re-queue the preempted process at the tail.
//!
//! The run ends when every process has finished or the clock reaches the
//! tick ceiling.
//!
//! # Complexity
//! O(T * n log n) where T = simulated ticks, n = processes.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::{BoundExceeded, SimulationConfig, SimulationOutcome};
use crate::error::SimulationError;
use crate::models::{Pid, ProcessDescriptor, ProcessRuntimeState};
use crate::policy::{CandidateSet, PolicySelector, Preemption};
use crate::trace::TraceRecorder;
use crate::validation::validate_input;

const IDLE_EXPLANATION: &str = "CPU Idle.";
const COMPLETE_EXPLANATION: &str = "Simulation complete. Results calculated.";

/// Runs scheduling simulations for one configuration.
///
/// Each call to [`run`](Self::run) is independent: no state is carried
/// between runs, and identical inputs produce identical traces.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::policy::Policy;
/// use u_cpusched::simulation::{SimulationConfig, Simulator};
///
/// let processes = vec![
///     ProcessDescriptor::new(1, 0, 5),
///     ProcessDescriptor::new(2, 1, 3),
///     ProcessDescriptor::new(3, 2, 1),
/// ];
/// let simulator = Simulator::new(SimulationConfig::new(Policy::RoundRobin).with_quantum(2));
/// let outcome = simulator.run(&processes).unwrap();
///
/// assert!(outcome.is_completed());
/// assert_eq!(outcome.trace().gantt().run_order(), vec![1, 2, 3, 1, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `processes` and returns the full trace.
    ///
    /// # Errors
    /// `SimulationError::InvalidConfiguration` if validation fails. Reaching
    /// the tick ceiling is not an error here; it is reported as
    /// [`SimulationOutcome::BoundExceeded`].
    pub fn run(&self, processes: &[ProcessDescriptor]) -> Result<SimulationOutcome, SimulationError> {
        validate_input(processes, &self.config).map_err(SimulationError::InvalidConfiguration)?;

        let policy = self.config.policy;
        let ceiling = self.config.tick_ceiling;
        info!(%policy, processes = processes.len(), ceiling, "simulation started");

        let mut cpu = Cpu::new(processes, policy.selector(), self.config.quantum);
        let mut recorder = TraceRecorder::new();

        while !cpu.all_finished() && cpu.time < ceiling {
            cpu.admit_arrivals();
            let explanation = cpu.select();
            recorder.record_tick(
                cpu.time,
                cpu.running_pid(),
                cpu.ready_ids(),
                &cpu.states,
                explanation,
            );
            if cpu.dispatched {
                recorder.mark_dispatch();
            }
            cpu.execute();
        }

        if cpu.all_finished() {
            info!(%policy, ticks = cpu.time, "simulation complete");
            let trace = recorder.finish(cpu.time, processes, COMPLETE_EXPLANATION);
            return Ok(SimulationOutcome::Completed { trace });
        }

        let unfinished = cpu.unfinished();
        warn!(%policy, ceiling, ?unfinished, "tick ceiling reached before all processes finished");
        let trace = recorder.finish(
            cpu.time,
            processes,
            format!("Simulation stopped: tick ceiling of {ceiling} reached."),
        );
        Ok(SimulationOutcome::BoundExceeded {
            trace,
            reason: BoundExceeded { ceiling, unfinished },
        })
    }
}

/// Simulates with a one-off simulator.
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::policy::Policy;
/// use u_cpusched::simulation::simulate;
///
/// let outcome = simulate(Policy::Sjf, &[ProcessDescriptor::new(1, 0, 4)]).unwrap();
/// assert_eq!(outcome.trace().metrics[0].completion_time, Some(4));
/// ```
pub fn simulate(
    config: impl Into<SimulationConfig>,
    processes: &[ProcessDescriptor],
) -> Result<SimulationOutcome, SimulationError> {
    Simulator::new(config.into()).run(processes)
}

/// Live state of one run.
///
/// Processes are referenced by index into `states`; the ready queue and
/// the running slot never alias each other.
struct Cpu {
    states: Vec<ProcessRuntimeState>,
    ready: VecDeque<usize>,
    running: Option<usize>,
    selector: &'static dyn PolicySelector,
    quantum: u64,
    time: u64,
    slice_ticks: u64,
    /// Set when the current tick started a new dispatch.
    dispatched: bool,
    unfinished_count: usize,
}

impl Cpu {
    fn new(processes: &[ProcessDescriptor], selector: &'static dyn PolicySelector, quantum: u64) -> Self {
        Self {
            states: processes.iter().copied().map(ProcessRuntimeState::new).collect(),
            ready: VecDeque::with_capacity(processes.len()),
            running: None,
            selector,
            quantum,
            time: 0,
            slice_ticks: 0,
            dispatched: false,
            unfinished_count: processes.len(),
        }
    }

    fn all_finished(&self) -> bool {
        self.unfinished_count == 0
    }

    fn running_pid(&self) -> Option<Pid> {
        self.running.map(|i| self.states[i].pid())
    }

    fn ready_ids(&self) -> Vec<Pid> {
        self.ready.iter().map(|&i| self.states[i].pid()).collect()
    }

    fn unfinished(&self) -> Vec<Pid> {
        self.states
            .iter()
            .filter(|s| s.remaining_time > 0)
            .map(ProcessRuntimeState::pid)
            .collect()
    }

    /// Appends processes arriving at the current time to the ready queue.
    fn admit_arrivals(&mut self) {
        for i in 0..self.states.len() {
            if self.states[i].arrival_time() == self.time
                && self.running != Some(i)
                && !self.ready.contains(&i)
            {
                debug!(time = self.time, pid = self.states[i].pid(), "arrived");
                self.ready.push_back(i);
            }
        }
    }

    /// Chooses the running process for this tick and explains the decision.
    fn select(&mut self) -> String {
        self.dispatched = false;
        match self.selector.candidate_set() {
            CandidateSet::ReadyQueue => self.select_from_queue(),
            CandidateSet::AllArrived => self.select_preemptive(),
        }
    }

    fn select_from_queue(&mut self) -> String {
        if let Some(i) = self.running {
            return format!("P{} running.", self.states[i].pid());
        }

        let selector = self.selector;
        let states = &self.states;
        self.ready
            .make_contiguous()
            .sort_by(|&a, &b| selector.compare(&states[a], &states[b]));

        match self.ready.pop_front() {
            Some(next) => self.dispatch(next),
            None => IDLE_EXPLANATION.to_string(),
        }
    }

    fn select_preemptive(&mut self) -> String {
        let selector = self.selector;
        let states = &self.states;
        let mut candidates: Vec<usize> = (0..states.len())
            .filter(|&i| states[i].is_eligible_at(self.time))
            .collect();
        candidates.sort_by(|&a, &b| selector.compare(&states[a], &states[b]));

        let mut ranked = candidates.into_iter();
        let Some(best) = ranked.next() else {
            self.running = None;
            self.ready.clear();
            return IDLE_EXPLANATION.to_string();
        };
        self.ready = ranked.collect();

        if self.running == Some(best) {
            return format!("P{} running.", self.states[best].pid());
        }
        if let Some(prev) = self.running {
            debug!(
                time = self.time,
                preempted = self.states[prev].pid(),
                by = self.states[best].pid(),
                "preempted"
            );
        }
        self.dispatch(best)
    }

    fn dispatch(&mut self, index: usize) -> String {
        let pid = self.states[index].pid();
        debug!(time = self.time, pid, policy = self.selector.name(), "dispatched");
        self.running = Some(index);
        self.slice_ticks = 0;
        self.dispatched = true;
        self.selector.explain_dispatch(pid)
    }

    /// Executes one unit (or idles) and advances the clock.
    fn execute(&mut self) {
        let Some(i) = self.running else {
            self.time += 1;
            return;
        };

        let finished = self.states[i].execute_unit();
        self.time += 1;
        self.slice_ticks += 1;

        if finished {
            debug!(time = self.time, pid = self.states[i].pid(), "completed");
            self.running = None;
            self.unfinished_count -= 1;
        } else if self.selector.preemption() == Preemption::QuantumExpiry
            && self.slice_ticks >= self.quantum
        {
            debug!(time = self.time, pid = self.states[i].pid(), "quantum expired");
            self.admit_arrivals();
            self.running = None;
            self.ready.push_back(i);
        }
    }
}
