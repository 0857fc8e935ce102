use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a closed enum receives a value outside its set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Unknown skill level: {0:?} (expected beginner, intermediate, advanced or expert)")]
    SkillLevel(String),

    #[error("Unknown priority: {0:?} (expected low, medium or high)")]
    Priority(String),

    #[error("Unknown career match level: {0:?} (expected poor, fair, good or excellent)")]
    CareerMatch(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(ValueError::SkillLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValueError::Priority(s.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CareerMatchLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CareerMatchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerMatchLevel::Poor => "poor",
            CareerMatchLevel::Fair => "fair",
            CareerMatchLevel::Good => "good",
            CareerMatchLevel::Excellent => "excellent",
        }
    }
}

impl FromStr for CareerMatchLevel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Ok(CareerMatchLevel::Poor),
            "fair" => Ok(CareerMatchLevel::Fair),
            "good" => Ok(CareerMatchLevel::Good),
            "excellent" => Ok(CareerMatchLevel::Excellent),
            _ => Err(ValueError::CareerMatch(s.to_string())),
        }
    }
}

impl TryFrom<String> for CareerMatchLevel {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CareerMatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known kinds of learning resource. The set is open: anything else is
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Course,
    Book,
    Project,
    Certification,
    Other,
}

/// Resource type as written in the document. The text is kept verbatim so
/// labels and re-serialization preserve its casing; `kind()` classifies it
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceType {
    raw: String,
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> ResourceKind {
        match self.raw.trim().to_lowercase().as_str() {
            "course" => ResourceKind::Course,
            "book" => ResourceKind::Book,
            "project" => ResourceKind::Project,
            "certification" => ResourceKind::Certification,
            _ => ResourceKind::Other,
        }
    }
}

impl From<String> for ResourceType {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&str> for ResourceType {
    fn from(value: &str) -> Self {
        ResourceType::from(value.to_string())
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        value.raw
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub category: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    pub match_level: CareerMatchLevel,
    pub match_percentage: u8,
    pub salary_range: SalaryRange,
    pub growth_potential: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSkill {
    pub name: String,
    pub level: SkillLevel,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub name: String,
    pub importance: Priority,
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    #[serde(default)]
    pub current_skills: Vec<CurrentSkill>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LearningResource {
    /// Provider wins over author when both are set.
    pub fn source(&self) -> Option<&str> {
        self.provider
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.author.as_deref().filter(|a| !a.is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub title: String,
    pub description: String,
    /// Weeks.
    pub duration: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    #[serde(default)]
    pub phases: Vec<LearningPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub major: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

/// A complete assessment document as produced by the assessment backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    /// 0.0 to 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub career_recommendations: Vec<CareerRecommendation>,
    #[serde(default)]
    pub skills_analysis: SkillsAnalysis,
    #[serde(default)]
    pub learning_roadmap: LearningRoadmap,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}
