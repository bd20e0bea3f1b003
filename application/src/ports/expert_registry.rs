//! Expert profile registry port

use panel_domain::ExpertProfile;

/// Read-only catalog of candidate board members
///
/// How the catalog is populated or persisted is up to the adapter.
pub trait ExpertRegistry: Send + Sync {
    /// All profiles, in registry order
    fn profiles(&self) -> &[ExpertProfile];
}
