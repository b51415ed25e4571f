//! Resume facts — the structured output of the extract pass.
//!
//! Missing arrays default to empty; nullable strings deserialize to `None`.
//! Anything that fails to match this shape is rejected before the compose pass.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFacts {
    pub target_company: Option<String>,
    pub target_role_title: Option<String>,
    #[serde(default)]
    pub job_keywords: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<RequirementMatch>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub top_achievements: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub gaps: Vec<String>,
}

/// How well the base resume backs a job requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Strong,
    Weak,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementMatch {
    pub requirement: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    pub support_level: SupportLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub field: Option<String>,
    pub institution: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

impl ResumeFacts {
    /// Requirements the base resume cannot back at all.
    pub fn unsupported_requirements(&self) -> impl Iterator<Item = &RequirementMatch> {
        self.requirements
            .iter()
            .filter(|r| r.support_level == SupportLevel::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_facts_deserialize() {
        let json = r#"{
            "targetCompany": "Ledgerly",
            "targetRoleTitle": "Staff Engineer",
            "jobKeywords": ["Rust", "Kafka"],
            "requirements": [
                {
                    "requirement": "5+ years backend",
                    "keywords": ["backend"],
                    "evidence": ["8 years at Acme"],
                    "supportLevel": "strong"
                },
                {
                    "requirement": "Kubernetes",
                    "supportLevel": "unsupported"
                }
            ],
            "roles": [
                {
                    "title": "Senior Engineer",
                    "company": "Acme",
                    "location": null,
                    "start": "2018",
                    "end": null,
                    "bullets": ["Cut latency 40%"]
                }
            ],
            "topAchievements": ["Cut latency 40%"],
            "education": [
                {"degree": "B.S.", "field": "Computer Science", "institution": "Purdue"}
            ],
            "certifications": [{"name": "CKA", "issuer": null, "date": "2022"}],
            "gaps": ["No Kubernetes"]
        }"#;

        let facts: ResumeFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.target_company.as_deref(), Some("Ledgerly"));
        assert_eq!(facts.requirements.len(), 2);
        assert!(facts.requirements[1].evidence.is_empty());
        assert_eq!(facts.roles[0].end, None);
        assert!(facts.education[0].details.is_empty());
        assert_eq!(facts.unsupported_requirements().count(), 1);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let facts: ResumeFacts =
            serde_json::from_str(r#"{"targetCompany": null, "targetRoleTitle": null}"#).unwrap();
        assert!(facts.roles.is_empty());
        assert!(facts.job_keywords.is_empty());
        assert!(facts.gaps.is_empty());
    }

    #[test]
    fn test_unknown_support_level_rejected() {
        let json = r#"{
            "requirements": [{"requirement": "Go", "supportLevel": "maybe"}]
        }"#;
        assert!(serde_json::from_str::<ResumeFacts>(json).is_err());
    }

    #[test]
    fn test_role_requires_company() {
        let json = r#"{"roles": [{"title": "Engineer"}]}"#;
        assert!(serde_json::from_str::<ResumeFacts>(json).is_err());
    }
}
