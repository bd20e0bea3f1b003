//! Application-level configuration.
//!
//! - [`PanelParams`]: timeouts and agent defaults applied by the use cases

pub mod panel_params;

pub use panel_params::PanelParams;
