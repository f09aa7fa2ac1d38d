//! Business layer for the mesa back-office.
//!
//! The services here are transport-free: they speak to storage through
//! the ports in [`gateway`] and surface typed domain errors from
//! `mesa-core`. [`store`] provides the Postgres adapters over the
//! `mesa-db` repositories; tests substitute in-memory fakes.

pub mod auth;
pub mod category;
pub mod config;
pub mod gateway;
pub mod guard;
pub mod store;
