use crate::types::report::{BatchSummary, ProfileReport};

pub fn to_markdown(report: &ProfileReport) -> String {
    let mut output = String::new();
    output.push_str("# Profile Completion Report\n\n");
    output.push_str(&format!("Source: {}\n\n", report.source));
    output.push_str(&format!("Completion: {}%\n\n", report.result.percent));

    output.push_str("## Categories\n\n");
    for category in &report.categories {
        output.push_str(&format!(
            "- [{}] {}: {:.2}/{:.0} ({}/{} fields)\n",
            if category.complete { "x" } else { " " },
            category.category.report_key(),
            category.points,
            category.weight,
            category.present,
            category.total
        ));
    }
    output.push('\n');

    output.push_str("## Missing Fields\n\n");
    if report.missing.is_empty() {
        output.push_str("- none\n");
    } else {
        for field in &report.missing {
            output.push_str(&format!("- {field}\n"));
        }
    }

    output
}

pub fn batch_to_markdown(reports: &[ProfileReport], summary: &BatchSummary) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&to_markdown(report));
        output.push('\n');
    }

    output.push_str("# Batch Summary\n\n");
    output.push_str(&format!(
        "- scored: {}\n- failed: {}\n- below threshold: {}\n- average: {:.1}%\n",
        summary.scored, summary.failed, summary.below_threshold, summary.average_percent
    ));
    output
}
