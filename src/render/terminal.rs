//! Terminal implementations of the renderer and feedback traits

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use super::chart::{ChartSlot, ProbabilityChart};
use super::{ResultsRenderer, UserFeedback};
use crate::client::PredictionResult;
use crate::form::ValidationErrors;
use crate::wizard::{ProgressMark, StepLayout};

const CHART_WIDTH: usize = 40;

/// Writes the wizard view to a terminal (or any writer).
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    chart: ChartSlot,
    results_visible: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            chart: ChartSlot::new(),
            results_visible: false,
        }
    }

    pub fn chart(&self) -> &ChartSlot {
        &self.chart
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> ResultsRenderer for TerminalRenderer<W> {
    fn sync_steps(&mut self, layout: &StepLayout) {
        let entries: Vec<String> = layout
            .progress
            .iter()
            .map(|(step, mark)| {
                let text = format!("{} {}", step.step_number(), step.title());
                match mark {
                    ProgressMark::Completed => {
                        format!("{} {}", style("✓").green(), style(text).green())
                    }
                    ProgressMark::Active => {
                        format!("{} {}", style("●").cyan(), style(text).cyan().bold())
                    }
                    ProgressMark::Pending => format!("{} {}", style("○").dim(), style(text).dim()),
                }
            })
            .collect();

        let separator = format!(" {} ", style("──").dim());
        self.write_lines(&[String::new(), format!("  {}", entries.join(&separator))]);
    }

    fn render(&mut self, result: &PredictionResult) {
        let chart_lines = self
            .chart
            .mount(ProbabilityChart::from_result(result))
            .lines(CHART_WIDTH);
        self.results_visible = true;

        let mut lines = vec![String::new()];
        lines.extend(header_lines(result, true));
        lines.push(String::new());
        lines.extend(stats_table(result).lines().map(|l| format!("  {l}")));
        lines.push(String::new());
        lines.extend(chart_lines.iter().map(|l| format!("  {l}")));
        lines.push(String::new());
        self.write_lines(&lines);
    }

    fn deactivate(&mut self) {
        self.chart.dispose();
        self.results_visible = false;
    }
}

fn header_lines(result: &PredictionResult, styled: bool) -> Vec<String> {
    let approved = result.prediction.is_approved();
    let icon = if approved { "✓" } else { "✗" };
    let title = format!("Loan {}", result.prediction_label);
    let applicant = format!("Application for {}", result.applicant_name);

    if !styled {
        return vec![format!("  {icon} {title}"), format!("  {applicant}")];
    }

    let (icon, title) = if approved {
        (style(icon).green().bold(), style(title).green().bold())
    } else {
        (style(icon).red().bold(), style(title).red().bold())
    };
    vec![
        format!("  {icon} {title}"),
        format!("  {}", style(applicant).dim()),
    ]
}

fn stats_table(result: &PredictionResult) -> String {
    let mut header = vec!["Approval Probability", "Rejection Probability"];
    let mut row = vec![
        format!("{:.2}%", result.probability_approved),
        format!("{:.2}%", result.probability_rejected),
    ];
    if let Some(confidence) = result.confidence {
        header.push("Confidence");
        row.push(format!("{confidence:.2}%"));
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header)
        .add_row(row);
    table.to_string()
}

/// Uncolored result card, suitable for saving to a file or printing.
pub fn plain_report(result: &PredictionResult, generated_at: DateTime<Local>) -> String {
    let chart = ProbabilityChart::from_result(result);

    let mut lines = vec![
        "Loan Application Result".to_string(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
    ];
    lines.extend(header_lines(result, false));
    lines.push(String::new());
    lines.extend(stats_table(result).lines().map(|l| format!("  {l}")));
    lines.push(String::new());
    lines.extend(chart.lines(CHART_WIDTH).iter().map(|l| format!("  {l}")));
    lines.push(String::new());
    lines.join("\n")
}

/// Spinner while a request is in flight, colored lines for everything else.
#[derive(Default)]
pub struct TerminalFeedback {
    spinner: Option<ProgressBar>,
}

impl TerminalFeedback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserFeedback for TerminalFeedback {
    fn show_loading(&mut self, message: &str) {
        self.hide_loading();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn hide_loading(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn report_invalid(&mut self, errors: &ValidationErrors) {
        println!();
        println!("  {}", style("Please fix the following:").yellow().bold());
        for error in errors.iter() {
            println!("  {} {}", style("✗").red(), error);
        }
    }

    fn alert(&mut self, message: &str) {
        println!();
        println!("  {} {}", style("!").yellow().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Decision;
    use crate::wizard::WizardStep;

    fn approved() -> PredictionResult {
        PredictionResult {
            prediction: Decision::Approved,
            prediction_label: "Approved".to_string(),
            applicant_name: "Alice".to_string(),
            probability_approved: 82.5,
            probability_rejected: 17.5,
            confidence: None,
        }
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_approved_card() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&approved());

        assert!(renderer.results_visible());
        assert_eq!(
            renderer.chart().current().map(|c| c.values()),
            Some([82.5, 17.5])
        );

        let text = output(renderer);
        assert!(text.contains("Loan Approved"));
        assert!(text.contains("Application for Alice"));
        assert!(text.contains("82.50%"));
        assert!(text.contains("17.50%"));
        assert!(!text.contains("Confidence"));
    }

    #[test]
    fn test_render_rejected_with_confidence() {
        let result = PredictionResult {
            prediction: Decision::Rejected,
            prediction_label: "Rejected".to_string(),
            probability_approved: 30.0,
            probability_rejected: 70.0,
            confidence: Some(70.0),
            ..approved()
        };
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&result);

        let text = output(renderer);
        assert!(text.contains("Loan Rejected"));
        assert!(text.contains("✗"));
        assert!(text.contains("Confidence"));
    }

    #[test]
    fn test_render_twice_then_deactivate() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&approved());
        renderer.render(&approved());
        assert_eq!(renderer.chart().disposed_count(), 1);

        renderer.deactivate();
        assert_eq!(renderer.chart().disposed_count(), 2);
        assert!(renderer.chart().current().is_none());
        assert!(!renderer.results_visible());
    }

    #[test]
    fn test_sync_steps_lists_every_step() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.sync_steps(&StepLayout::for_step(WizardStep::LoanDetails));

        let text = output(renderer);
        assert!(text.contains("1 Profile"));
        assert!(text.contains("2 Loan Details"));
        assert!(text.contains("3 Results"));
    }

    #[test]
    fn test_plain_report() {
        let generated_at = Local::now();
        let report = plain_report(&approved(), generated_at);

        assert!(report.starts_with("Loan Application Result"));
        assert!(report.contains("✓ Loan Approved"));
        assert!(report.contains("Approved │"));
        assert!(report.contains("Rejected │"));
        assert!(!report.contains('\u{1b}'));
    }
}
