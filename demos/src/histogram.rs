//! Histogram rendering for measurement counts.
//!
//! A [`Histogram`] renders either as a bar chart for the terminal or as a
//! standalone SVG image. Bars are ordered by bitstring so the same outcome
//! always sits in the same place.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use qmaze_hal::Counts;

const BAR_WIDTH: u64 = 48;
const BAR_GAP: u64 = 16;
const MARGIN_LEFT: u64 = 64;
const MARGIN_RIGHT: u64 = 24;
const MARGIN_TOP: u64 = 48;
const MARGIN_BOTTOM: u64 = 56;
const PLOT_HEIGHT: u64 = 240;
const BAR_COLOR: &str = "#648fff";

/// Bar chart of measurement counts.
#[derive(Debug, Clone)]
pub struct Histogram {
    title: String,
    bars: Vec<(String, u64)>,
    total: u64,
}

impl Histogram {
    /// Build a histogram from counts.
    pub fn from_counts(counts: &Counts) -> Self {
        let bars: Vec<_> = counts
            .sorted_by_bitstring()
            .into_iter()
            .map(|(bitstring, &n)| (bitstring.clone(), n))
            .collect();
        Self {
            title: String::new(),
            total: counts.total_shots(),
            bars,
        }
    }

    /// Set the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Bars as `(bitstring, count)`, sorted by bitstring.
    pub fn bars(&self) -> &[(String, u64)] {
        &self.bars
    }

    /// Total count over all bars.
    pub fn total(&self) -> u64 {
        self.total
    }

    fn max_count(&self) -> u64 {
        self.bars.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Render as text, with the longest bar `width` characters wide.
    pub fn render_text(&self, width: usize) -> String {
        if self.bars.is_empty() {
            return "(no counts)\n".to_string();
        }

        let max = self.max_count().max(1);
        let label_width = self.bars.iter().map(|(b, _)| b.len()).max().unwrap_or(0);
        let count_width = max.to_string().len();

        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&self.title);
            out.push('\n');
        }
        for (bitstring, n) in &self.bars {
            // Non-zero counts always get at least one cell.
            let len = ((*n as f64 / max as f64) * width as f64).round() as usize;
            let len = if *n > 0 { len.max(1) } else { 0 };
            let pct = 100.0 * *n as f64 / self.total.max(1) as f64;
            out.push_str(&format!(
                "{bitstring:>label_width$} │{:<width$} {n:>count_width$} ({pct:5.1}%)\n",
                "█".repeat(len),
            ));
        }
        out
    }

    /// Render as a standalone SVG document.
    pub fn render_svg(&self) -> String {
        let n = self.bars.len() as u64;
        let plot_width = (n * (BAR_WIDTH + BAR_GAP)).max(BAR_WIDTH + BAR_GAP) + BAR_GAP;
        let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
        let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
        let base_y = MARGIN_TOP + PLOT_HEIGHT;
        let max = self.max_count().max(1);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="{width}" height="{height}" fill="white"/>"#
        );
        if !self.title.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="16" text-anchor="middle">{}</text>"#,
                width / 2,
                MARGIN_TOP / 2,
                escape_xml(&self.title)
            );
        }

        // Axes and y-axis label.
        let _ = writeln!(
            svg,
            r#"  <line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{base_y}" stroke="black"/>"#
        );
        let _ = writeln!(
            svg,
            r#"  <line x1="{MARGIN_LEFT}" y1="{base_y}" x2="{}" y2="{base_y}" stroke="black"/>"#,
            MARGIN_LEFT + plot_width
        );
        let _ = writeln!(
            svg,
            r#"  <text x="16" y="{}" font-size="12" text-anchor="middle" transform="rotate(-90 16 {})">Count</text>"#,
            MARGIN_TOP + PLOT_HEIGHT / 2,
            MARGIN_TOP + PLOT_HEIGHT / 2
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="12" text-anchor="end">{max}</text>"#,
            MARGIN_LEFT - 6,
            MARGIN_TOP + 4
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="12" text-anchor="end">0</text>"#,
            MARGIN_LEFT - 6,
            base_y + 4
        );

        if self.bars.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="14" text-anchor="middle">No counts</text>"#,
                MARGIN_LEFT + plot_width / 2,
                MARGIN_TOP + PLOT_HEIGHT / 2
            );
        }

        for (i, (bitstring, count)) in self.bars.iter().enumerate() {
            let x = MARGIN_LEFT + BAR_GAP + i as u64 * (BAR_WIDTH + BAR_GAP);
            let bar_height = count * PLOT_HEIGHT / max;
            let y = base_y - bar_height;
            let center = x + BAR_WIDTH / 2;
            let _ = writeln!(
                svg,
                r#"  <rect class="bar" x="{x}" y="{y}" width="{BAR_WIDTH}" height="{bar_height}" fill="{BAR_COLOR}"><title>{bitstring}: {count}</title></rect>"#
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{center}" y="{}" font-size="11" text-anchor="middle">{count}</text>"#,
                y.saturating_sub(4)
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{center}" y="{}" font-size="12" font-family="monospace" text-anchor="middle">{}</text>"#,
                base_y + 18,
                escape_xml(bitstring)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG rendering to `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_svg())
            .with_context(|| format!("Failed to write histogram to {}", path.display()))
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
