use crate::types::AssessmentResult;
use std::fs;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum AssessmentError {
    #[error("Failed to read assessment file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse assessment JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse assessment YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` select YAML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

pub fn load_assessment(path: impl AsRef<Path>) -> Result<AssessmentResult, AssessmentError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path);
    log::info!("[LOADER] Reading {:?} as {:?}", path, format);

    let content = fs::read_to_string(path)?;
    let result = match format {
        DocumentFormat::Json => parse_assessment_json(&content)?,
        DocumentFormat::Yaml => parse_assessment_yaml(&content)?,
    };

    log::debug!(
        "[LOADER] Loaded {} careers, {} skills, {} gaps, {} phases, {} action items",
        result.career_recommendations.len(),
        result.skills_analysis.current_skills.len(),
        result.skills_analysis.skill_gaps.len(),
        result.learning_roadmap.phases.len(),
        result.action_items.len()
    );

    Ok(result)
}

pub fn parse_assessment_json(content: &str) -> Result<AssessmentResult, AssessmentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_assessment_yaml(content: &str) -> Result<AssessmentResult, AssessmentError> {
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("results")), DocumentFormat::Json);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let result = parse_assessment_json("{}").unwrap();
        assert!(result.action_items.is_empty());
        assert!(result.learning_roadmap.phases.is_empty());
        assert!(result.student_profile.is_none());
    }

    #[test]
    fn test_unknown_priority_fails_loudly() {
        let doc = r#"{
            "actionItems": [{
                "title": "Ship a portfolio",
                "description": "Publish three projects",
                "estimatedTime": "2 weeks",
                "category": "Portfolio",
                "priority": "critical"
            }]
        }"#;

        let err = parse_assessment_json(doc).unwrap_err();
        assert!(matches!(err, AssessmentError::Json(_)));
        assert!(err.to_string().contains("critical"));
    }
}
