//! Genetic-algorithm timetabling.
//!
//! Assigns a fixed set of events to rooms and discrete time slots so that no
//! room hosts two events at once and no event lands in a room that is
//! unavailable at its slot.
//!
//! - **Models** ([`models`]): `Event`, `Room`, `TimeSlot`, `SlotAxis`
//! - **Problem** ([`problem`]): the immutable rooms/events/axis of one run
//! - **GA** ([`ga`]): chromosome encoding, conflict-counting fitness,
//!   tournament selection, uniform crossover, reassignment mutation and the
//!   generational loop
//! - **Search** ([`search`]): one-call entry point from a flat request to a
//!   flat result
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::search::{run_search, SearchRequest, DEFAULT_EVENT_NAMES};
//!
//! let request =
//!     SearchRequest::with_clock_strings(3, DEFAULT_EVENT_NAMES, "09:00 AM", "05:00 PM")?
//!         .with_ga_config(GaConfig::default().with_seed(42));
//! let best = run_search(&request)?;
//! assert_eq!(best.assignments.len(), 8);
//! # Ok::<(), u_timetable::TimetableError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for models, requests and results
//! - `parallel`: rayon-backed fitness evaluation within a generation

pub mod error;
pub mod ga;
pub mod models;
pub mod problem;
pub mod random;
pub mod search;

pub use error::{Result, TimetableError};
pub use problem::ProblemInstance;
pub use search::{run_search, BestResult, SearchRequest};
