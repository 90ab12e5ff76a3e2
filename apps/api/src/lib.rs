//! Notes API Library
//!
//! A small CRUD service for notes: domain types, the repository port with
//! PostgreSQL and in-memory adapters, and the axum HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
