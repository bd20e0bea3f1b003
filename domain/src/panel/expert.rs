//! Expert categories and their fixed agent templates.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of expert categories a panel can seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpertType {
    #[serde(rename = "CEO")]
    Ceo,
    #[serde(rename = "CFO")]
    Cfo,
    #[serde(rename = "CTO")]
    Cto,
    #[serde(rename = "CMO")]
    Cmo,
    #[serde(rename = "RegulatoryAffairs")]
    RegulatoryAffairs,
    #[serde(rename = "ClinicalResearch")]
    ClinicalResearch,
    #[serde(rename = "MarketAccess")]
    MarketAccess,
    #[serde(rename = "QualityAssurance")]
    QualityAssurance,
}

/// Fixed persona fields used to build an execution-ready agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertTemplate {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub system_instruction: &'static str,
    pub expertise: &'static [&'static str],
}

impl ExpertType {
    pub fn all() -> &'static [ExpertType] {
        &[
            ExpertType::Ceo,
            ExpertType::Cfo,
            ExpertType::Cto,
            ExpertType::Cmo,
            ExpertType::RegulatoryAffairs,
            ExpertType::ClinicalResearch,
            ExpertType::MarketAccess,
            ExpertType::QualityAssurance,
        ]
    }

    /// Wire name, e.g. `"CEO"` or `"RegulatoryAffairs"`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertType::Ceo => "CEO",
            ExpertType::Cfo => "CFO",
            ExpertType::Cto => "CTO",
            ExpertType::Cmo => "CMO",
            ExpertType::RegulatoryAffairs => "RegulatoryAffairs",
            ExpertType::ClinicalResearch => "ClinicalResearch",
            ExpertType::MarketAccess => "MarketAccess",
            ExpertType::QualityAssurance => "QualityAssurance",
        }
    }

    /// Lowercase identifier used for agent ids
    pub fn slug(&self) -> &'static str {
        match self {
            ExpertType::Ceo => "ceo",
            ExpertType::Cfo => "cfo",
            ExpertType::Cto => "cto",
            ExpertType::Cmo => "cmo",
            ExpertType::RegulatoryAffairs => "regulatory_affairs",
            ExpertType::ClinicalResearch => "clinical_research",
            ExpertType::MarketAccess => "market_access",
            ExpertType::QualityAssurance => "quality_assurance",
        }
    }

    pub fn template(&self) -> ExpertTemplate {
        match self {
            ExpertType::Ceo => ExpertTemplate {
                role: "Chief Executive Officer",
                goal: "Set strategic direction and weigh the business case of each option",
                backstory: "Has led several health-technology companies from seed stage \
                            through commercial launch and regulatory approval.",
                system_instruction: "You are the CEO on an advisory panel. Focus on strategy, \
                                     risk appetite and long-term positioning. Be decisive.",
                expertise: &["strategy", "leadership", "business_development"],
            },
            ExpertType::Cfo => ExpertTemplate {
                role: "Chief Financial Officer",
                goal: "Assess cost, funding runway and financial risk of each option",
                backstory: "Former investment banker who has financed clinical programs \
                            and managed budgets through multiple regulatory submissions.",
                system_instruction: "You are the CFO on an advisory panel. Quantify costs, \
                                     timelines and financial exposure. Be concrete.",
                expertise: &["finance", "budgeting", "investment"],
            },
            ExpertType::Cto => ExpertTemplate {
                role: "Chief Technology Officer",
                goal: "Evaluate technical feasibility, architecture and delivery risk",
                backstory: "Built regulated software platforms, including software as a \
                            medical device under IEC 62304.",
                system_instruction: "You are the CTO on an advisory panel. Address technical \
                                     feasibility, security and engineering effort.",
                expertise: &["software_engineering", "architecture", "cybersecurity"],
            },
            ExpertType::Cmo => ExpertTemplate {
                role: "Chief Medical Officer",
                goal: "Ensure clinical validity and patient safety of the recommendation",
                backstory: "Practicing physician turned industry medical lead with oversight \
                            of pivotal trials and post-market safety.",
                system_instruction: "You are the CMO on an advisory panel. Ground every point \
                                     in clinical evidence and patient safety.",
                expertise: &["clinical_medicine", "patient_safety", "medical_affairs"],
            },
            ExpertType::RegulatoryAffairs => ExpertTemplate {
                role: "Regulatory Affairs Lead",
                goal: "Identify the applicable regulatory pathway and submission requirements",
                backstory: "Has prepared 510(k), De Novo and PMA submissions and negotiated \
                            pre-submission meetings with the FDA and notified bodies.",
                system_instruction: "You are the regulatory affairs expert on an advisory \
                                     panel. Cite pathways, guidance documents and evidence \
                                     expectations precisely.",
                expertise: &["fda_submissions", "regulatory_compliance", "eu_mdr"],
            },
            ExpertType::ClinicalResearch => ExpertTemplate {
                role: "Clinical Research Director",
                goal: "Design the evidence-generation plan that supports the recommendation",
                backstory: "Ran multi-site randomized trials and real-world evidence studies \
                            for digital and pharmaceutical therapeutics.",
                system_instruction: "You are the clinical research expert on an advisory panel. \
                                     Propose study designs, endpoints and sample sizes.",
                expertise: &["clinical_research", "trial_design", "biostatistics"],
            },
            ExpertType::MarketAccess => ExpertTemplate {
                role: "Market Access Strategist",
                goal: "Secure reimbursement and payer adoption for the product",
                backstory: "Negotiated coverage with national payers and built health \
                            economic models for launch dossiers.",
                system_instruction: "You are the market access expert on an advisory panel. \
                                     Address pricing, reimbursement and payer evidence needs.",
                expertise: &["reimbursement", "pricing", "health_economics"],
            },
            ExpertType::QualityAssurance => ExpertTemplate {
                role: "Quality Assurance Head",
                goal: "Keep the plan inside a compliant quality management system",
                backstory: "Led ISO 13485 certifications and FDA inspection readiness \
                            programs.",
                system_instruction: "You are the quality expert on an advisory panel. Flag \
                                     design-control, documentation and audit risks.",
                expertise: &["quality_management", "iso_13485", "design_controls"],
            },
        }
    }
}

impl fmt::Display for ExpertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExpertType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        ExpertType::all()
            .iter()
            .copied()
            .find(|t| {
                t.as_str().to_lowercase() == normalized || t.slug().replace('_', "") == normalized
            })
            .ok_or_else(|| DomainError::UnknownExpertType(s.to_string()))
    }
}
