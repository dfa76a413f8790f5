use crate::models::Report;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// A `Report` wrapped with presentation context. The timestamp is stamped
/// here so the engine output itself stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedReport {
    pub url: String,
    pub robots_url: String,
    pub timestamp: String,
    pub report: Report,
}

pub struct Reporter;

impl Reporter {
    pub fn generate_report(url: &str, robots_url: &str, report: Report) -> RenderedReport {
        RenderedReport {
            url: url.to_string(),
            robots_url: robots_url.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            report,
        }
    }

    pub fn print_text_report(rendered: &RenderedReport) {
        let report = &rendered.report;
        let page = &report.page;

        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Pagegrade - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), rendered.url);
        println!(
            "{}: {}",
            "Timestamp".bright_white().bold(),
            rendered.timestamp
        );
        println!();

        println!(
            "{}: {}",
            "Score".bright_white().bold(),
            Self::colorize_score(report.score)
        );
        println!();

        println!("{}", "Page".bright_yellow().bold().underline());
        println!("  Title:            {}", page.title);
        println!("  Meta description: {}", page.meta_description);
        println!("  Word count:       {}", page.word_count);
        println!(
            "  Images w/o ALT:   {}/{}",
            if page.images_without_alt > 0 {
                page.images_without_alt.to_string().bright_red()
            } else {
                page.images_without_alt.to_string().bright_green()
            },
            page.image_count
        );
        println!(
            "  HTTPS:            {}",
            if report.retrieval.is_secure_transport {
                "Yes".bright_green()
            } else {
                "No".bright_red()
            }
        );
        println!(
            "  robots.txt:       {} ({})",
            report.retrieval.robots_status, rendered.robots_url
        );
        println!();

        println!("{}", "Headings".bright_yellow().bold().underline());
        println!("  Total:          {}", page.headings.len());
        println!("  Empty:          {}", page.empty_heading_count());
        println!(
            "  Levels present: {}",
            Self::format_levels(&page.heading_levels, "None")
        );
        println!(
            "  Levels missing: {}",
            Self::format_levels(&page.missing_levels, "None")
        );
        println!();

        if report.tips.is_empty() {
            println!("{}", "No issues found.".bright_green());
        } else {
            println!("{}", "Tips".bright_yellow().bold().underline());
            for tip in &report.tips {
                println!("  - {}", tip);
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    fn colorize_score(score: i32) -> ColoredString {
        let text = format!("{}/100", score);
        if score >= 80 {
            text.bright_green()
        } else if score >= 50 {
            text.yellow()
        } else {
            text.bright_red()
        }
    }

    fn format_levels(levels: &[u8], when_empty: &str) -> String {
        if levels.is_empty() {
            return when_empty.to_string();
        }
        levels
            .iter()
            .map(|level| format!("H{}", level))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn save_json_report(rendered: &RenderedReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(rendered)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
