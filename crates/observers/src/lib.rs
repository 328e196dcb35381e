//! Reusable observers for the Wolfpack framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `wolfpack-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TraceObserver`] logs search progress through `tracing`.
//! - [`History`] records the convergence curve.
//! - [`StopAtTarget`] stops a search once a target objective is reached.
//!
//! [`Observer`]: wolfpack_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod history;
mod target;
mod trace;

pub use history::History;
pub use target::StopAtTarget;
pub use trace::TraceObserver;
