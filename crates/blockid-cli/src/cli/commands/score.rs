//! `blockid score` - Look up the trust score of a wallet.

use std::time::Duration;

use anyhow::Result;
use blockid::{ScoreBand, ScoreColor, TrustError, TrustScoreResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use super::Context;
use crate::cli::args::ScoreArgs;
use crate::output::{csv_field, risk_color, score_color, OutputFormat};

/// Shown for 503, which the backend returns when its scorer is not up.
pub const UNAVAILABLE_MESSAGE: &str = "Trust API unavailable. Is the backend running?";

#[derive(Tabled, Debug, PartialEq, Eq)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Description")]
    desc: &'static str,
}

pub async fn execute(ctx: Context, args: ScoreArgs) -> Result<()> {
    let wallet = args.wallet.trim();
    if wallet.is_empty() {
        anyhow::bail!("Wallet address is required.\n\nUsage: blockid score <WALLET>");
    }

    let client = ctx.client(args.timeout)?;
    debug!(endpoint = client.endpoint(), "looking up wallet");

    let spinner = (ctx.output_format == OutputFormat::Pretty).then(|| lookup_spinner(wallet));
    let outcome = client.fetch_trust_score(wallet).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = outcome.map_err(|e| anyhow::anyhow!(failure_message(&e, &ctx.api_url)))?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&report)?);
        }
        OutputFormat::Csv => {
            print!("{}", render_csv(&report));
        }
        OutputFormat::Pretty => {
            print_report_pretty(&report);
        }
    }

    Ok(())
}

fn lookup_spinner(wallet: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching trust score for {wallet}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// User-facing text for a failed lookup.
pub fn failure_message(err: &TrustError, api_url: &str) -> String {
    match err {
        TrustError::RequestFailed { status: 503, detail } => {
            format!("{UNAVAILABLE_MESSAGE} ({detail})")
        }
        TrustError::RequestFailed { detail, .. } => detail.clone(),
        TrustError::Transport(msg) => {
            format!("Could not reach trust API at {api_url}: {msg}\n\n{UNAVAILABLE_MESSAGE}")
        }
        TrustError::MalformedResponse(msg) => {
            format!("Trust API returned an unexpected report: {msg}")
        }
        other => other.to_string(),
    }
}

fn metric_rows(report: &TrustScoreResult) -> Vec<MetricRow> {
    let metrics = &report.metrics;
    let unknown = || "unknown".to_string();

    vec![
        MetricRow {
            label: "Transaction count",
            value: metrics.tx_count.to_string(),
            desc: "Recent on-chain transactions",
        },
        MetricRow {
            label: "Activity score",
            value: metrics.activity_score_display(),
            desc: "0-100 from tx volume",
        },
        MetricRow {
            label: "Wallet age",
            value: metrics.wallet_age_display(),
            desc: "From oldest tx",
        },
        MetricRow {
            label: "Activity level",
            value: metrics.activity_level.map_or_else(unknown, |l| l.to_string()),
            desc: "Activity band",
        },
        MetricRow {
            label: "Suspicious behaviour",
            value: metrics
                .suspicious_behavior_count
                .map_or_else(unknown, |c| c.to_string()),
            desc: "Flagged behaviour count",
        },
    ]
}

fn render_csv(report: &TrustScoreResult) -> String {
    let metrics = &report.metrics;
    let mut out = String::from(
        "wallet,trust_score,score_band,risk_level,tx_count,wallet_age_months,\
         activity_score,activity_level,suspicious_behavior_count,risk_flags\n",
    );
    out.push_str(&format!(
        "{},{},{},{},{},{},{},{},{},{}\n",
        csv_field(&report.wallet),
        report.trust_score,
        ScoreBand::of(report.trust_score),
        report.risk_level,
        metrics.tx_count,
        metrics.wallet_age_months,
        metrics.activity_score,
        metrics.activity_level.map(|l| l.to_string()).unwrap_or_default(),
        metrics
            .suspicious_behavior_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
        csv_field(&metrics.risk_flags.join(";")),
    ));
    out
}

/// Whole-number score as displayed, with the band and colour derived from it.
fn displayed_score(trust_score: f64) -> (f64, ScoreBand, ScoreColor) {
    let shown = trust_score.round();
    (shown, ScoreBand::of(shown), ScoreColor::of(shown))
}

fn print_report_pretty(report: &TrustScoreResult) {
    let (shown, band, color) = displayed_score(report.trust_score);
    let score = format!("{shown:.0}");

    println!("{} {}", "Wallet:".bold(), report.wallet.cyan().bold());
    println!();
    println!(
        "  {} {} {}",
        "Trust Score:".bold(),
        score.color(score_color(color)).bold(),
        format!("({band})").dimmed()
    );
    println!(
        "  {} {}",
        "Risk Level:".bold(),
        report
            .risk_level
            .to_string()
            .color(risk_color(report.risk_level.style()))
            .bold()
    );

    println!();
    println!("{}", "Metrics breakdown".bold().underline());
    let mut table = Table::new(metric_rows(report));
    table.with(Style::rounded());
    println!("{table}");

    println!();
    if report.metrics.has_risk_flags() {
        println!("{}", "Risk flags:".bold());
        for label in report.metrics.risk_flag_labels() {
            println!("  {} {}", "!".red().bold(), label.red());
        }
    } else {
        println!("{}", "No risk flags detected".green());
    }
}
