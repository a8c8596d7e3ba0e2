//! Utility modules for datepick.
//!
//! - [`datetime`] - Host clock access and date formatting helpers

pub mod datetime;
