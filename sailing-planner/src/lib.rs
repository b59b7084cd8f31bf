//! Shipping route planner.
//!
//! Answers "what is the best way to ship from this port to that one?" over a
//! static catalog of sailings, per-sailing freight rates and daily exchange
//! rates. Routes may be the cheapest single sailing, the cheapest chain of
//! sailings, or the fastest chain of sailings.

pub mod cli;
pub mod config;
pub mod currency;
pub mod data;
pub mod domain;
pub mod input;
pub mod output;
pub mod planner;
pub mod web;
