//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod health;
pub mod schemas;
pub mod state;
