//! Configuration and wire types

pub mod config;
pub mod models;
