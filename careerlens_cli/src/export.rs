/// CSV and JSON export of an assessment result
use anyhow::{Context, Result};
use careerlens_core::formatters::format_priority;
use careerlens_core::types::{ActionItem, AssessmentResult};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Serialize)]
struct ActionItemRow<'a> {
    title: &'a str,
    category: &'a str,
    priority: &'static str,
    estimated_time: &'a str,
    description: &'a str,
}

impl<'a> From<&'a ActionItem> for ActionItemRow<'a> {
    fn from(item: &'a ActionItem) -> Self {
        Self {
            title: &item.title,
            category: &item.category,
            priority: format_priority(item.priority),
            estimated_time: &item.estimated_time,
            description: &item.description,
        }
    }
}

/// Writes one CSV row per action item, header included even when empty.
pub fn write_action_items_csv<W: Write>(items: &[ActionItem], writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(["title", "category", "priority", "estimated_time", "description"])?;
    for item in items {
        csv.serialize(ActionItemRow::from(item))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_assessment_json<W: Write>(result: &AssessmentResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn export_to_file(result: &AssessmentResult, format: ExportFormat, out: &Path) -> Result<()> {
    let file = File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    match format {
        ExportFormat::Csv => write_action_items_csv(&result.action_items, file)?,
        ExportFormat::Json => write_assessment_json(result, file)?,
    }

    log::info!("[EXPORT] wrote {:?} to {}", format, out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerlens_core::types::Priority;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_quotes_and_labels() {
        let items = vec![ActionItem {
            title: "Build a portfolio".to_string(),
            description: "Three projects, one \"capstone\"".to_string(),
            estimated_time: "4 weeks".to_string(),
            category: "Projects".to_string(),
            priority: Priority::High,
        }];

        let mut out = Vec::new();
        write_action_items_csv(&items, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "title,category,priority,estimated_time,description\n\
             Build a portfolio,Projects,High Priority,4 weeks,\"Three projects, one \"\"capstone\"\"\"\n"
        );
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let mut out = Vec::new();
        write_action_items_csv(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "title,category,priority,estimated_time,description\n"
        );
    }
}
