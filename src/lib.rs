//! csb: customer success balancing.
//!
//! Customers are assigned to the least capable available agent whose score
//! covers theirs; the result is the agent left serving strictly the most
//! customers. The core routine lives in [`balance`]; the remaining modules
//! make up the `csb` command-line tool around it.

pub mod balance;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod report;
pub mod roster;

#[cfg(test)]
mod test_support;
