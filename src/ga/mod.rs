//! Genetic Algorithm for room/slot timetabling.
//!
//! A candidate timetable is a [`Chromosome`]: one [`Gene`] (room, slot) per
//! event. Fitness counts conflicts (unavailable rooms and double bookings)
//! and maps them into `(0, 1]`.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elites, rates)
//! - [`Population`]: One generation of chromosomes
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best timetable plus run statistics
//!
//! # Submodules
//!
//! - [`fitness`]: Conflict counting and the fitness mapping
//! - [`selection`]: Tournament selection
//! - [`operators`]: Uniform crossover and reassignment mutation
//! - [`engine`]: One generational step (elitism, crossover fill, mutation)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Burke, Elliman & Weare (1994), "A Genetic Algorithm Based University
//!   Timetabling System"

mod chromosome;
mod config;
pub mod engine;
pub mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use chromosome::{Chromosome, Gene, ScheduledEvent};
pub use config::GaConfig;
pub use engine::evolve;
pub use fitness::Evaluation;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{best_first, sort_best_first, Individual};
