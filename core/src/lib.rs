//! The scanning engine.
//!
//! Layers, leaves first: [`prober`] answers "is it up / is it open" for a
//! single target, [`scheduler`] fans a prober out over a target list with a
//! concurrency cap, [`scanner`] turns that into network and port sweeps, and
//! [`discovery`] strings the sweeps and hostname lookups into one scan.

pub mod discovery;
pub mod error;
pub mod network;
pub mod prober;
pub mod scanner;
pub mod scheduler;
