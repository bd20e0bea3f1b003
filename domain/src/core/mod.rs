//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question to pose to the panel
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text matching helpers used by board composition

pub mod error;
pub mod question;
pub mod string;
