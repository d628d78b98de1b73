//! Trim specification server library.
//!
//! Ingests apparel trim specification files (CSV/Excel), persists the
//! normalized trims, suppliers, color BOM and measurements, and renders
//! export views back out.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
