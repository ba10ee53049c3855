//! tagflow
//!
//! Terminal blog list whose tag chips wrap into lines with a flow layout.
//!
//! The flow layout engine in [`flow`] is pure and reusable on its own. The
//! rest follows the Pure Core / Impure Shell split: [`model`] and [`state`]
//! hold data and transitions, [`view`] owns the terminal.

pub mod config;
pub mod flow;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
