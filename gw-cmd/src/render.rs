//! Plain-text rendering of dashboard views for the terminal.

use gw_core::{ChartPair, ChartView, DashboardView, ExportChart};
use std::fmt::Write;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 30;

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize
}

/// Render one chart as a block of text.
pub fn render_chart(view: &ChartView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{} {} [{}]  {}",
        view.spec.icon,
        view.spec.title,
        view.year,
        view.total_label()
    );
    if view.loading {
        out.push_str("  (refreshing...)");
    }
    out.push('\n');

    if view.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let max = view.max_value();
    for bar in &view.bars {
        let _ = write!(
            out,
            "  {:<16} {}",
            bar.tick_label(view.spec),
            "█".repeat(bar_length(bar.value, max))
        );
        if view.show_value_labels() {
            let _ = write!(out, " {}", view.value_label(bar));
        }
        out.push('\n');
    }
    out
}

fn render_pair(pair: &ChartPair) -> String {
    let mut out = render_chart(&pair.primary);
    if let Some(compare) = &pair.compare {
        out.push_str(&render_chart(compare));
    }
    out
}

/// Render the export view: one line per chart with its image URL.
pub fn render_export(charts: &[ExportChart]) -> String {
    let mut out = String::new();
    for chart in charts {
        let _ = writeln!(out, "{} {}\n  {}", chart.spec.icon, chart.title, chart.image_url);
    }
    out
}

pub fn render_view(view: &DashboardView) -> String {
    match view {
        DashboardView::Interactive(pairs) => pairs
            .iter()
            .map(render_pair)
            .collect::<Vec<_>>()
            .join("\n"),
        DashboardView::Export(charts) => render_export(charts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::{ChartId, ChartSpec, GameEntry, PlaytimeEntry, Slot, YearStats};

    fn stats() -> YearStats {
        YearStats {
            year: 2024,
            most_played_games: vec![
                GameEntry {
                    title: "Hades II".to_string(),
                    platform: "Steam".to_string(),
                    console: "PC".to_string(),
                    playtime: 40.0,
                },
                GameEntry {
                    title: "Balatro".to_string(),
                    platform: "Steam".to_string(),
                    console: "Steam Deck".to_string(),
                    playtime: 30.0,
                },
            ],
            busiest_months: vec![PlaytimeEntry {
                title: "September".to_string(),
                playtime: 12.0,
                count: 2,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_chart_with_values() {
        let view = ChartView::build(ChartSpec::get(ChartId::Games), Slot::Primary, 2024, Some(&stats()), false);
        let text = render_chart(&view);

        assert!(text.starts_with("🎮 Most Played Games [2024]  Total: 70h\n"));
        let hades = text.lines().nth(1).unwrap();
        assert!(hades.contains("Hades II"));
        assert!(hades.ends_with(&format!("{} 40h", "█".repeat(BAR_WIDTH))));
        assert!(text.lines().nth(2).unwrap().ends_with("30h"));
    }

    #[test]
    fn test_loading_chart_hides_values() {
        let view = ChartView::build(ChartSpec::get(ChartId::Games), Slot::Primary, 2023, Some(&stats()), true);
        let text = render_chart(&view);

        assert!(text.lines().next().unwrap().ends_with("(refreshing...)"));
        assert!(!text.contains("40h"));
        assert!(text.contains("Hades II"));
    }

    #[test]
    fn test_month_ticks_are_abbreviated() {
        let view = ChartView::build(ChartSpec::get(ChartId::Months), Slot::Compare, 2024, Some(&stats()), false);
        let text = render_chart(&view);
        assert!(text.contains("  Sep "));
        assert!(!text.contains("September"));
    }

    #[test]
    fn test_empty_chart() {
        let view = ChartView::build(ChartSpec::get(ChartId::Series), Slot::Primary, 2024, None, false);
        assert!(render_chart(&view).ends_with("(no data)\n"));
    }

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(40.0, 40.0), BAR_WIDTH);
        assert_eq!(bar_length(20.0, 40.0), BAR_WIDTH / 2);
        assert_eq!(bar_length(0.1, 400.0), 1);
        assert_eq!(bar_length(0.0, 40.0), 0);
    }
}
