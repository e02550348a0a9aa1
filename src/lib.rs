//! Timetable Weaver - constraint-aware weekly timetable generator
//!
//! Builds a multi-week class schedule from a teacher-load table, a group
//! roster, and a room inventory. The pipeline runs in four phases:
//!
//! 1. **LogicPrecheck**: bound obvious infeasibility (unknown groups, bad
//!    semesters/hours, rooms too small, weekly overload) before placement.
//! 2. **DemandModel**: convert yearly hours into a per-week pair count using
//!    cumulative rounding, so the weekly total never drifts from the ideal.
//! 3. **TaskBuilder**: merge same-subject/same-teacher demands from two
//!    groups into joint "flow" lectures where possible.
//! 4. **Placer**: a two-pass (strict, then relaxed) greedy search over the
//!    (day, pair) grid, splitting a flow into solo lessons if it cannot be
//!    placed as a unit.
//!
//! # Example
//!
//! ```no_run
//! use timetable_weaver::parser::load_input_from_dir;
//! use timetable_weaver::core::generate_schedule;
//! use std::path::Path;
//! use std::sync::atomic::AtomicBool;
//! use std::sync::Arc;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let cancelled = Arc::new(AtomicBool::new(false));
//! let result = generate_schedule(&input, &cancelled, false).unwrap();
//! println!("Semesters generated: {}", result.semesters.len());
//! ```

pub mod core;
pub mod error;
pub mod parser;
pub mod reporter;
pub mod types;

pub use error::{Result, SchedulerError};
