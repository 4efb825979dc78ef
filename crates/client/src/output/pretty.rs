//! Pretty output formatting.

use rankpilot_core::ProjectRef;

use crate::client::health::Health;
use crate::client::projects::{DashboardSummary, Project};
use crate::client::seo::SeoAnalysis;

/// Format a project for display.
pub fn format_project(project: &Project) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  URL: {}",
        project.name, project.id, project.url
    );
    if let Some(industry) = &project.industry {
        output.push_str(&format!("\n  Industry: {}", industry));
    }
    output
}

/// Format projects for display.
pub fn format_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }
    let mut output = format!("PROJECTS ({})\n", projects.len());
    output.push_str(&"-".repeat(40));
    for project in projects {
        output.push_str(&format!("\n{}", format_project(project)));
        output.push('\n');
    }
    output
}

/// Format the selected project for display.
pub fn format_current_project(project: Option<&ProjectRef>) -> String {
    match project {
        Some(project) => format!("{} (ID: {})", project.name, project.id),
        None => "No project selected.".to_string(),
    }
}

/// Format an analysis for display.
pub fn format_analysis(analysis: &SeoAnalysis) -> String {
    let mut output = format!(
        "{} — score {:.1}\n  ID: {}\n  Analyzed: {}",
        analysis.url, analysis.score, analysis.id, analysis.created_at
    );
    for issue in &analysis.issues {
        output.push_str(&format!("\n  [{:?}] {}", issue.severity, issue.message));
    }
    output
}

/// Format analyses for display.
pub fn format_analyses(analyses: &[SeoAnalysis]) -> String {
    if analyses.is_empty() {
        return "No analyses found.".to_string();
    }
    let mut output = format!("ANALYSES ({})\n", analyses.len());
    output.push_str(&"-".repeat(40));
    for analysis in analyses {
        output.push_str(&format!("\n{}", format_analysis(analysis)));
        output.push('\n');
    }
    output
}

/// Format a dashboard summary for display.
pub fn format_summary(summary: &DashboardSummary) -> String {
    format!(
        "Project {}\n  SEO score: {:.1}\n  Tracked keywords: {}\n  Backlinks: {}\n  Open issues: {}",
        summary.project_id,
        summary.seo_score,
        summary.tracked_keywords,
        summary.backlinks_total,
        summary.open_issues
    )
}

/// Format a health check for display.
pub fn format_health(health: &Health) -> String {
    match &health.version {
        Some(version) => format!("Status: {} (version {})", health.status, version),
        None => format!("Status: {}", health.status),
    }
}
