// Colored terminal output for analysis results, rule tables and status.
//
// This module handles all terminal-specific formatting. The main.rs
// command handlers delegate here.

use colored::Colorize;

use crate::analyzer::AnalysisResult;
use crate::config::Config;
use crate::scoring::rules::RuleSummary;
use crate::scoring::{DisplayClass, Tone};

/// Display a full analysis report.
pub fn display_analysis(result: &AnalysisResult) {
    println!(
        "\n{}",
        format!("=== {} ===", super::truncate_chars(&result.url, 72)).bold()
    );

    println!(
        "  Verdict: {}  (score {:+}, confidence {}%)",
        colorize_class(&result.verdict.title, result.verdict.display_class),
        result.score,
        result.confidence
    );
    println!("  {}", confidence_bar(result.confidence));
    println!("  {}", result.verdict.description.dimmed());

    println!("\n  {}", "Details:".bold());
    for detail in &result.details {
        let marker = match detail.tone {
            Tone::Positive => "+".green(),
            Tone::Negative => "-".red(),
            Tone::Neutral => "·".dimmed(),
        };
        println!("    {} {:<28} {}", marker, detail.title, detail.value);
    }

    if !result.red_flags.is_empty() {
        println!(
            "\n  {} ({}):",
            "Red flags".red().bold(),
            result.red_flags.len()
        );
        for flag in &result.red_flags {
            println!("    {} {}", "!".red(), flag);
        }
    }

    if !result.green_flags.is_empty() {
        println!(
            "\n  {} ({}):",
            "Green flags".green().bold(),
            result.green_flags.len()
        );
        for flag in &result.green_flags {
            println!("    {} {}", "✓".green(), flag);
        }
    }
    println!();
}

/// Display the loaded rule tables.
pub fn display_rules(rules: &[RuleSummary]) {
    println!("\n{}", format!("=== Rule Tables ({} rules) ===", rules.len()).bold());
    println!(
        "  {:<10} {:>6}  {:<36} {}",
        "Category".dimmed(),
        "Delta".dimmed(),
        "Pattern".dimmed(),
        "Label".dimmed()
    );
    println!("  {}", "-".repeat(96).dimmed());

    for rule in rules {
        let delta = format!("{:+}", rule.delta);
        let delta = if rule.delta < 0 {
            delta.red()
        } else {
            delta.green()
        };
        println!(
            "  {:<10} {:>6}  {:<36} {}",
            rule.category,
            delta,
            super::truncate_chars(&rule.pattern, 33),
            rule.label
        );
    }
    println!();
}

/// Display which enrichment services are configured.
pub fn display_status(config: &Config) {
    let state = |configured: bool| {
        if configured {
            "configured".green()
        } else {
            "not configured (skipped)".yellow()
        }
    };

    println!("\n{}", "=== Enrichment Status ===".bold());
    println!(
        "  Page content (Firecrawl):      {}  {}",
        state(config.firecrawl_api_key.is_some()),
        config.firecrawl_api_url.dimmed()
    );
    println!(
        "  Video statistics (YouTube):    {}  {}",
        state(config.youtube_api_key.is_some()),
        config.youtube_api_url.dimmed()
    );
    println!("  Lookup timeout:                {}s", config.timeout.as_secs());
    println!();
}

/// A 20-cell bar for a 0–100 confidence value.
pub fn confidence_bar(confidence: u8) -> String {
    let filled = usize::from(confidence.min(100)) / 5;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

/// Colorize a verdict title by its display class.
fn colorize_class(title: &str, class: DisplayClass) -> colored::ColoredString {
    match class {
        DisplayClass::Real => title.green().bold(),
        DisplayClass::Uncertain => title.yellow().bold(),
        DisplayClass::Fake => title.red().bold(),
    }
}
