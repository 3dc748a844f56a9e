pub mod blocking;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use blocking::{Domain, DomainChecker, DomainIndex};
