//! # Reporter
//!
//! HTTP client for the microservice integrity server.
//!
//! Two operations: register/update a microservice's contract graph, and
//! verify a pending change-set against the current contracts. Any
//! non-success response or transport failure aborts the run; there is no
//! retry, and nothing is transmitted twice.

mod client;

pub use client::IntegrityClient;
