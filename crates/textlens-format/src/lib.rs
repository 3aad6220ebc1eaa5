//! # textlens-format
//!
//! **Tier 3 (Formatting)**
//!
//! Rendering and serialization of analysis results: the plain-text section
//! output and the JSON receipt envelope.
//!
//! ## What belongs here
//! * Section rendering (fixed headers, blank-line separation)
//! * Receipt construction and JSON serialization
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * CLI arg parsing

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use textlens_config::OutputFormat;
use textlens_types::{
    AnalysisReceipt, AnalysisReport, AnalyzeArgsMeta, SCHEMA_VERSION, ToolInfo,
};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Print the report to stdout in the requested format.
pub fn print_report(
    report: &AnalysisReport,
    meta: &AnalyzeArgsMeta,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&build_receipt(report, meta))?),
    }
    Ok(())
}

/// Wrap a report in the receipt envelope.
pub fn build_receipt(report: &AnalysisReport, meta: &AnalyzeArgsMeta) -> AnalysisReceipt {
    AnalysisReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        args: meta.clone(),
        report: report.clone(),
    }
}

/// Render the labeled sections. Output always opens with a blank line;
/// sections appear in flag-evaluation order, separated by blank lines. A
/// header prints whenever its feature was enabled, even with no rows.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(language) = &report.language {
        blocks.push(format!("Detected language: {language}\n"));
    }

    if let Some(score) = report.sentiment {
        blocks.push(format!("Sentiment: {score:.2}\n"));
    }

    if let Some(lemmas) = &report.lemmas {
        let mut block = String::from("Found the following lemmas:\n");
        for lemma in lemmas {
            block.push_str(lemma);
            block.push('\n');
        }
        blocks.push(block);
    }

    if let Some(alternatives) = &report.alternatives {
        let mut block = String::from("Found the following alternatives:\n");
        for entry in alternatives {
            // Lemmas with no neighbors are omitted rather than printed bare.
            if entry.neighbors.is_empty() {
                continue;
            }
            let rendered: Vec<String> = entry
                .neighbors
                .iter()
                .map(|n| format!("{} ({:.2})", n.word, n.distance))
                .collect();
            block.push_str(&format!("{}: {}\n", entry.lemma, rendered.join(", ")));
        }
        blocks.push(block);
    }

    if let Some(entities) = &report.entities {
        let mut block = String::from("Found the following entities:\n");
        for record in entities {
            block.push_str(&format!("{}: {}\n", record.kind.label(), record.text));
        }
        blocks.push(block);
    }

    let mut out = String::from("\n");
    out.push_str(&blocks.join("\n"));
    out
}
