//! Expert registry entries from TOML (`[[experts]]` array)
//!
//! ```toml
//! [[experts]]
//! name = "Regulatory Strategist"
//! expertise = ["fda_submissions", "regulatory_compliance"]
//! domains = ["regulatory"]
//! roles = ["chair", "expert"]
//! ```

use panel_domain::{BoardRole, ExpertProfile};
use serde::{Deserialize, Serialize};

use super::ConfigValidationError;

fn default_roles() -> Vec<String> {
    vec![BoardRole::Expert.as_str().to_string()]
}

/// Raw expert profile from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileExpertConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    /// Board roles this expert may take (`chair`, `expert`)
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

impl FileExpertConfig {
    /// Convert into a domain profile, rejecting unusable entries.
    pub fn to_profile(&self) -> Result<ExpertProfile, ConfigValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConfigValidationError::EmptyExpertName);
        }
        if self.roles.is_empty() {
            return Err(ConfigValidationError::NoExpertRoles(name.to_string()));
        }

        let roles = self
            .roles
            .iter()
            .map(|role| {
                role.parse::<BoardRole>()
                    .map_err(|_| ConfigValidationError::UnknownExpertRole {
                        expert: name.to_string(),
                        role: role.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExpertProfile::new(name, &self.expertise, &self.domains).with_roles(roles))
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_experts_array_deserialize() {
        let toml_str = r#"
[[experts]]
name = "Regulatory Strategist"
expertise = ["fda_submissions"]
domains = ["regulatory"]
roles = ["chair", "expert"]

[[experts]]
name = "Payer Analyst"
expertise = ["reimbursement"]
domains = ["market_access"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.experts.len(), 2);

        let chair = config.experts[0].to_profile().unwrap();
        assert!(chair.can_chair());
        assert!(chair.has_domain("regulatory"));

        let analyst = config.experts[1].to_profile().unwrap();
        assert!(!analyst.can_chair());
        assert_eq!(analyst.expertise, vec!["reimbursement".to_string()]);
    }

    #[test]
    fn test_entry_without_name_rejected() {
        let entry = FileExpertConfig {
            name: "  ".to_string(),
            expertise: vec![],
            domains: vec!["clinical".to_string()],
            roles: default_roles(),
        };
        assert!(matches!(
            entry.to_profile(),
            Err(ConfigValidationError::EmptyExpertName)
        ));
    }

    #[test]
    fn test_entry_without_roles_rejected() {
        let entry = FileExpertConfig {
            name: "Ghost".to_string(),
            expertise: vec![],
            domains: vec![],
            roles: vec![],
        };
        assert!(matches!(
            entry.to_profile(),
            Err(ConfigValidationError::NoExpertRoles(_))
        ));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let entry = FileExpertConfig {
            name: "Ghost".to_string(),
            expertise: vec![],
            domains: vec![],
            roles: vec!["observer".to_string()],
        };
        assert!(matches!(
            entry.to_profile(),
            Err(ConfigValidationError::UnknownExpertRole { .. })
        ));
    }
}
