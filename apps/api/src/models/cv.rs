use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::settings::TemplateSettings;

/// Contact and header data shown at the top of every template.
/// Only `full_name` is required; empty optional fields are omitted when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub avatar_url: Option<String>,
}

/// The closed set of section kinds a CV may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Awards,
    Volunteer,
    References,
    Publications,
    Interests,
    About,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
            SectionKind::Awards => "awards",
            SectionKind::Volunteer => "volunteer",
            SectionKind::References => "references",
            SectionKind::Publications => "publications",
            SectionKind::Interests => "interests",
            SectionKind::About => "about",
            SectionKind::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillItem {
    pub name: String,
    /// Self-assessed level, 1 (beginner) to 5 (expert).
    pub level: Option<u8>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageItem {
    pub language: String,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardItem {
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerItem {
    pub organization: String,
    pub role: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceItem {
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationItem {
    pub title: String,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestItem {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutItem {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Section payload. The `type` tag fixes the shape of `items`, so a
/// renderer can never read experience items out of a skills section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum SectionContent {
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillItem>),
    Projects(Vec<ProjectItem>),
    Certifications(Vec<CertificationItem>),
    Languages(Vec<LanguageItem>),
    Awards(Vec<AwardItem>),
    Volunteer(Vec<VolunteerItem>),
    References(Vec<ReferenceItem>),
    Publications(Vec<PublicationItem>),
    Interests(Vec<InterestItem>),
    About(Vec<AboutItem>),
    Custom(Vec<CustomItem>),
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Experience(_) => SectionKind::Experience,
            SectionContent::Education(_) => SectionKind::Education,
            SectionContent::Skills(_) => SectionKind::Skills,
            SectionContent::Projects(_) => SectionKind::Projects,
            SectionContent::Certifications(_) => SectionKind::Certifications,
            SectionContent::Languages(_) => SectionKind::Languages,
            SectionContent::Awards(_) => SectionKind::Awards,
            SectionContent::Volunteer(_) => SectionKind::Volunteer,
            SectionContent::References(_) => SectionKind::References,
            SectionContent::Publications(_) => SectionKind::Publications,
            SectionContent::Interests(_) => SectionKind::Interests,
            SectionContent::About(_) => SectionKind::About,
            SectionContent::Custom(_) => SectionKind::Custom,
        }
    }
}

/// A named, orderable, independently hideable block of CV content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(flatten)]
    pub content: SectionContent,
}

fn default_visible() -> bool {
    true
}

impl CvSection {
    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

/// A user's stored CV: data, style preferences and the selected template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDocument {
    pub user_id: Uuid,
    pub personal_info: PersonalInfo,
    pub sections: Vec<CvSection>,
    pub settings: TemplateSettings,
    pub template_id: String,
    pub updated_at: DateTime<Utc>,
}
