//! Profile lookup and role-based access

pub mod access;
pub mod ports;
pub mod service;

pub use access::Viewer;
pub use service::ProfileService;
