//! Owner of the running simulation. Repetition is left to the caller: a
//! scheduler keeps calling [`SimulationController::step`] every
//! [`SimulationController::interval`] for as long as
//! [`SimulationController::is_running`] holds.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::config::Configuration;
use crate::error::{Result, RuleWarning};
use crate::proc::{self, Grid};
use crate::rule::RuleSet;
use crate::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Ready,
    Running,
    Paused,
}

#[derive(Debug, Clone)]
struct Simulation {
    grid: Grid,
    rules: RuleSet,
    interval: Duration,
    step: u64,
}

#[derive(Debug, Clone)]
pub struct SimulationController {
    sim: Option<Simulation>,
    state: State,
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationController {
    pub fn new() -> Self {
        SimulationController {
            sim: None,
            state: State::Unconfigured,
        }
    }

    /// Seeds a fresh grid and resets the step counter, stopping any run.
    ///
    /// On error nothing changes. On success returns the rule digits that
    /// can never match, which are also logged.
    pub fn configure(&mut self, config: &Configuration) -> Result<Vec<RuleWarning>> {
        let grid = seed::seed(config.width, config.height, config.cell_count, config.seed)?;
        debug!(
            "configured {}x{} grid, {} cells, rule {}",
            config.width, config.height, config.cell_count, config.rules
        );
        Ok(self.install(grid, config.rules, config.interval))
    }

    /// Like `configure`, but starts from a ready-made grid.
    pub fn load(&mut self, grid: Grid, rules: RuleSet, interval: Duration) -> Vec<RuleWarning> {
        debug!(
            "loaded {}x{} grid, {} cells, rule {rules}",
            grid.width(),
            grid.height(),
            grid.population()
        );
        self.install(grid, rules, interval)
    }

    fn install(&mut self, grid: Grid, rules: RuleSet, interval: Duration) -> Vec<RuleWarning> {
        let warnings = rules.warnings();
        for w in &warnings {
            warn!("{w}");
        }
        self.sim = Some(Simulation {
            grid,
            rules,
            interval,
            step: 0,
        });
        self.state = State::Ready;
        warnings
    }

    /// Starts a run and performs its first step at once. Does nothing when
    /// already running or never configured.
    pub fn play(&mut self) -> Option<&Grid> {
        match self.state {
            State::Unconfigured | State::Running => None,
            State::Ready | State::Paused => {
                debug!("play");
                self.state = State::Running;
                self.step()
            }
        }
    }

    /// Stops the run. Calling it while not running is harmless.
    pub fn pause(&mut self) {
        if self.state == State::Running {
            debug!("pause");
            self.state = State::Paused;
        }
    }

    /// The single play/pause button.
    pub fn toggle(&mut self) -> Option<&Grid> {
        if self.is_running() {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// Advances one generation and returns it, or `None` before the first
    /// successful `configure`.
    pub fn step(&mut self) -> Option<&Grid> {
        let sim = self.sim.as_mut()?;
        sim.grid = proc::step(&sim.grid, &sim.rules);
        sim.step += 1;
        trace!("step {}: population {}", sim.step, sim.grid.population());
        Some(&sim.grid)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    pub fn current_grid(&self) -> Option<&Grid> {
        self.sim.as_ref().map(|s| &s.grid)
    }

    /// Generations since the last `configure`; 0 when unconfigured.
    pub fn current_step(&self) -> u64 {
        self.sim.as_ref().map_or(0, |s| s.step)
    }

    pub fn rules(&self) -> Option<&RuleSet> {
        self.sim.as_ref().map(|s| &s.rules)
    }

    pub fn interval(&self) -> Option<Duration> {
        self.sim.as_ref().map(|s| s.interval)
    }

    pub fn population(&self) -> usize {
        self.current_grid().map_or(0, Grid::population)
    }
}
