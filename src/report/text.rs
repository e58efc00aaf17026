use crate::report::{BatchSummary, RecordOutcome, ReportContext, format_f64_3};

pub fn render_report_text(
    ctx: &ReportContext,
    summary: &BatchSummary,
    outcomes: &[RecordOutcome],
) -> String {
    let mut out = String::new();

    out.push_str("Early Sepsis Radar Report\n");
    out.push_str("=========================\n\n");

    out.push_str("1. Run settings\n");
    out.push_str(&format!("Tool: {} {}\n", ctx.tool_name, ctx.tool_version));
    out.push_str(&format!(
        "Trigger threshold: {}\n\n",
        format_f64_3(ctx.threshold)
    ));

    out.push_str("2. Batch overview\n");
    out.push_str(&format!(
        "Records: {} (evaluated {}, failed {})\n",
        summary.n_records, summary.n_evaluated, summary.n_failed
    ));
    out.push_str(&format!(
        "Triggered: {} ({})\n",
        summary.n_triggered,
        format_f64_3(summary.triggered_fraction)
    ));
    out.push_str(&format!(
        "Risk score median: {}, p90: {}, max: {}\n",
        format_f64_3(summary.risk_median),
        format_f64_3(summary.risk_p90),
        format_f64_3(summary.risk_max)
    ));
    out.push_str(&format!(
        "NEWS2 high fraction: {}\nqSOFA high fraction: {}\n",
        format_f64_3(summary.news2_high_fraction),
        format_f64_3(summary.qsofa_high_fraction)
    ));
    let by_category = summary
        .reasons_by_category
        .iter()
        .map(|c| format!("{}={}", c.name, c.count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Reasons by category: {}\n\n", by_category));

    out.push_str("3. Triggered records\n");
    let mut any_triggered = false;
    for outcome in outcomes {
        let Ok(result) = &outcome.result else {
            continue;
        };
        if !result.triggered {
            continue;
        }
        any_triggered = true;
        out.push_str(&format!(
            "- {}: risk {} (NEWS2 {}, qSOFA {})\n",
            outcome.id,
            format_f64_3(result.risk_score),
            result.news2,
            result.qsofa
        ));
        if !result.reasons.is_empty() {
            out.push_str(&format!(
                "  Reasons: {}\n",
                result.reason_strings().join("; ")
            ));
        }
        for action in &result.recommended_bundle {
            out.push_str(&format!("  * {}\n", action));
        }
    }
    if !any_triggered {
        out.push_str("None\n");
    }

    let failures = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err().map(|e| (o.id.as_str(), e)))
        .collect::<Vec<_>>();
    if !failures.is_empty() {
        out.push_str("\n4. Failed records\n");
        for (id, err) in failures {
            out.push_str(&format!("- {}: {}\n", id, err));
        }
    }

    out
}
