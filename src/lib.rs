//! Birth/survival cellular automata on a toroidal grid.
//!
//! ```
//! use life_automaton::{RawConfig, SimulationController};
//!
//! let config = RawConfig::default().parse().unwrap().with_seed(1);
//! let mut sim = SimulationController::new();
//! sim.configure(&config).unwrap();
//! sim.play();
//! while sim.is_running() && sim.current_step() < 10 {
//!     sim.step();
//! }
//! assert_eq!(sim.current_step(), 10);
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod proc;
pub mod rule;
pub mod seed;
pub mod sim;

pub use config::{Configuration, RawConfig};
pub use error::{Error, Field, Result, RuleWarning};
pub use proc::{neighbor_counts, step, Grid, NeighborCounts};
pub use rule::{CountSet, RuleSet};
pub use seed::seed;
pub use sim::{SimulationController, State};
