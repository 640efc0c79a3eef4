use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Site user. The password is an opaque string; nothing here hashes or checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Current,
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub const VALUES: &'static [&'static str] = &["current", "completed", "in-progress"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub period: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResearchProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub period: String,
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationBadge {
    Featured,
    PeerReviewed,
    Collaboration,
}

impl PublicationBadge {
    pub const VALUES: &'static [&'static str] = &["featured", "peer-reviewed", "collaboration"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub journal: String,
    pub year: i32,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub citations: u32,
    pub views: u32,
    pub featured: bool,
    pub badge: Option<PublicationBadge>,
    pub pdf_url: Option<String>,
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPublication {
    pub title: String,
    pub journal: String,
    pub year: i32,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub citations: u32,
    pub views: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub badge: Option<PublicationBadge>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Education,
    Work,
    Research,
}

impl ExperienceKind {
    pub const VALUES: &'static [&'static str] = &["education", "work", "research"];
}

/// Key into the fixed timeline icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceIcon {
    University,
    Flask,
    GraduationCap,
    Medal,
}

impl ExperienceIcon {
    pub const VALUES: &'static [&'static str] = &["university", "flask", "graduation-cap", "medal"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub current: bool,
    pub icon: ExperienceIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertExperience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    #[serde(default)]
    pub current: bool,
    pub icon: ExperienceIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Topics offered by the contact form, as `(value, label)`.
pub const CONTACT_TOPICS: &[(&str, &str)] = &[
    ("collaboration", "Research Collaboration"),
    ("publication", "Publication Inquiry"),
    ("speaking", "Speaking Engagement"),
    ("mentoring", "Mentoring Opportunity"),
    ("other", "Other"),
];

pub const CONTACT_TOPIC_VALUES: &[&str] =
    &["collaboration", "publication", "speaking", "mentoring", "other"];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_values_match_serde_names() {
        for v in ProjectStatus::VALUES {
            assert!(serde_json::from_value::<ProjectStatus>(json!(v)).is_ok(), "{v}");
        }
        for v in PublicationBadge::VALUES {
            assert!(serde_json::from_value::<PublicationBadge>(json!(v)).is_ok(), "{v}");
        }
        for v in ExperienceKind::VALUES {
            assert!(serde_json::from_value::<ExperienceKind>(json!(v)).is_ok(), "{v}");
        }
        for v in ExperienceIcon::VALUES {
            assert!(serde_json::from_value::<ExperienceIcon>(json!(v)).is_ok(), "{v}");
        }
    }

    #[test]
    fn topic_values_follow_topic_table() {
        let values: Vec<&str> = CONTACT_TOPICS.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, CONTACT_TOPIC_VALUES);
    }

    #[test]
    fn publication_uses_camel_case_and_abstract() {
        let p = Publication {
            id: "p".into(),
            title: "T".into(),
            journal: "J".into(),
            year: 2020,
            summary: "S".into(),
            citations: 1,
            views: 2,
            featured: false,
            badge: Some(PublicationBadge::PeerReviewed),
            pdf_url: None,
            external_url: Some("#".into()),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["abstract"], "S");
        assert_eq!(v["badge"], "peer-reviewed");
        assert_eq!(v["externalUrl"], "#");
        assert!(v["pdfUrl"].is_null());
    }

    #[test]
    fn experience_kind_serializes_as_type() {
        let e = Experience {
            id: "e".into(),
            title: "T".into(),
            organization: "O".into(),
            period: "P".into(),
            description: "D".into(),
            kind: ExperienceKind::Research,
            current: false,
            icon: ExperienceIcon::GraduationCap,
        };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["type"], "research");
        assert_eq!(v["icon"], "graduation-cap");
    }
}
