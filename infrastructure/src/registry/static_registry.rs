//! In-memory expert registry
//!
//! Built either from `[[experts]]` config entries or from the catalog
//! below, which covers the life-sciences domains the analyzer usually
//! reports.

use panel_application::ExpertRegistry;
use panel_domain::ExpertProfile;
use tracing::debug;

use crate::config::FileConfig;

/// Registry over a fixed list of profiles
#[derive(Debug, Clone, Default)]
pub struct StaticExpertRegistry {
    profiles: Vec<ExpertProfile>,
}

impl StaticExpertRegistry {
    pub fn new(profiles: Vec<ExpertProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_catalog())
    }

    /// Profiles from config, or the built-in catalog when none are configured.
    pub fn from_config(config: &FileConfig) -> Self {
        let profiles = config.expert_profiles();
        if profiles.is_empty() {
            debug!("No [[experts]] configured; using the built-in catalog");
            Self::builtin()
        } else {
            debug!("Loaded {} expert profiles from config", profiles.len());
            Self::new(profiles)
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ExpertRegistry for StaticExpertRegistry {
    fn profiles(&self) -> &[ExpertProfile] {
        &self.profiles
    }
}

fn builtin_catalog() -> Vec<ExpertProfile> {
    vec![
        ExpertProfile::new(
            "Regulatory Affairs Director",
            ["fda_submissions", "regulatory_compliance", "digital_health_policy"],
            ["regulatory"],
        )
        .with_chair(),
        ExpertProfile::new(
            "EU MDR Specialist",
            ["ce_marking", "notified_bodies", "regulatory_compliance"],
            ["regulatory"],
        ),
        ExpertProfile::new(
            "Clinical Research Lead",
            ["clinical_research", "trial_design", "endpoint_selection"],
            ["clinical"],
        )
        .with_chair(),
        ExpertProfile::new(
            "Biostatistician",
            ["statistical_analysis", "sample_size", "real_world_evidence"],
            ["biostatistics", "clinical"],
        ),
        ExpertProfile::new(
            "Market Access Strategist",
            ["pricing", "payer_negotiation", "market_access"],
            ["market_access"],
        )
        .with_chair(),
        ExpertProfile::new(
            "Reimbursement Specialist",
            ["coding_coverage", "reimbursement", "payer_policy"],
            ["reimbursement", "market_access"],
        ),
        ExpertProfile::new(
            "Health Economist",
            ["cost_effectiveness", "budget_impact", "outcomes_research"],
            ["health_economics"],
        ),
        ExpertProfile::new(
            "Quality Systems Manager",
            ["iso_13485", "design_controls", "capa"],
            ["quality"],
        ),
        ExpertProfile::new(
            "Data Privacy Officer",
            ["hipaa", "gdpr", "cybersecurity"],
            ["data_privacy", "regulatory"],
        ),
        ExpertProfile::new(
            "Chief Executive Advisor",
            ["corporate_strategy", "business_development", "fundraising"],
            ["executive", "general"],
        )
        .with_chair(),
        ExpertProfile::new(
            "Chief Medical Officer",
            ["clinical_strategy", "patient_safety", "medical_affairs"],
            ["clinical", "executive"],
        )
        .with_chair(),
    ]
}
