pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod questions;
pub mod routes;
pub mod templates;
