//! Two-bar probability chart
//!
//! A `ChartSlot` holds at most one mounted chart. Mounting a new chart
//! disposes the previous one first.

use tracing::debug;

use crate::client::PredictionResult;

/// Upper bound of the chart scale
pub const CHART_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    label: &'static str,
    value: f64,
}

/// Approved vs. rejected probability on a 0–100 scale
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityChart {
    bars: [Bar; 2],
}

impl ProbabilityChart {
    pub fn new(approved: f64, rejected: f64) -> Self {
        Self {
            bars: [
                Bar {
                    label: "Approved",
                    value: approved,
                },
                Bar {
                    label: "Rejected",
                    value: rejected,
                },
            ],
        }
    }

    pub fn from_result(result: &PredictionResult) -> Self {
        Self::new(result.probability_approved, result.probability_rejected)
    }

    pub fn values(&self) -> [f64; 2] {
        [self.bars[0].value, self.bars[1].value]
    }

    /// One line per bar. Bar lengths are clamped to the scale, the printed
    /// values are not.
    pub fn lines(&self, width: usize) -> Vec<String> {
        let label_width = self.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
        self.bars
            .iter()
            .map(|bar| {
                let ratio = if bar.value.is_finite() {
                    bar.value.clamp(0.0, CHART_MAX) / CHART_MAX
                } else {
                    0.0
                };
                let filled = ((ratio * width as f64).round() as usize).min(width);
                format!(
                    "{:<label_width$} │{}{}│ {:>6.2}%",
                    bar.label,
                    "█".repeat(filled),
                    "░".repeat(width - filled),
                    bar.value
                )
            })
            .collect()
    }
}

/// Holds the currently mounted chart.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<ProbabilityChart>,
    disposed: usize,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disposes the mounted chart, if any, then mounts `chart`.
    pub fn mount(&mut self, chart: ProbabilityChart) -> &ProbabilityChart {
        self.dispose();
        self.current.insert(chart)
    }

    pub fn dispose(&mut self) {
        if self.current.take().is_some() {
            self.disposed += 1;
            debug!(disposed = self.disposed, "chart disposed");
        }
    }

    pub fn current(&self) -> Option<&ProbabilityChart> {
        self.current.as_ref()
    }

    /// Number of charts disposed so far
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_follow_result_order() {
        let chart = ProbabilityChart::new(82.5, 17.5);
        assert_eq!(chart.values(), [82.5, 17.5]);
        let lines = chart.lines(10);
        assert!(lines[0].starts_with("Approved"));
        assert!(lines[1].starts_with("Rejected"));
    }

    #[test]
    fn test_lines_scale_to_width() {
        let chart = ProbabilityChart::new(50.0, 100.0);
        let lines = chart.lines(10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Approved │█████░░░░░│  50.00%");
        assert_eq!(lines[1], "Rejected │██████████│ 100.00%");
    }

    #[test]
    fn test_out_of_scale_values_are_clamped() {
        let chart = ProbabilityChart::new(120.0, -5.0);
        let lines = chart.lines(4);
        assert!(lines[0].contains("████│"));
        assert!(lines[0].ends_with("120.00%"));
        assert!(lines[1].contains("│░░░░│"));
    }

    #[test]
    fn test_slot_disposes_previous_chart() {
        let mut slot = ChartSlot::new();
        assert!(slot.current().is_none());

        slot.mount(ProbabilityChart::new(82.5, 17.5));
        assert_eq!(slot.disposed_count(), 0);

        slot.mount(ProbabilityChart::new(10.0, 90.0));
        assert_eq!(slot.disposed_count(), 1);
        assert_eq!(slot.current().unwrap().values(), [10.0, 90.0]);

        slot.dispose();
        assert_eq!(slot.disposed_count(), 2);
        assert!(slot.current().is_none());

        // Nothing mounted, nothing to dispose.
        slot.dispose();
        assert_eq!(slot.disposed_count(), 2);
    }
}
