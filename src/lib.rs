//! # Aquafeed API
//!
//! Marketing-site backend and admin back-office for a fish-feed
//! distributor: public catalog, lead capture, pincode deliverability
//! lookup, and a session-guarded admin panel.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod image_host;
pub mod models;
pub mod order_flow;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
