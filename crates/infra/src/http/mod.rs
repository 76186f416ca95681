//! HTTP client shared by the store, auth and relay adapters

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
