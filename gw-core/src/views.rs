//! Read-only projections of a [`Dashboard`] for a rendering layer.

use crate::chart::{ChartSpec, CHART_SPECS, COMPARE_COLOR};
use crate::client::chart_image_url;
use crate::dashboard::{Dashboard, Slot, SlotState, ViewMode};
use crate::models::YearStats;
use serde::Serialize;

/// Number of bars drawn per chart.
pub const MAX_BARS: usize = 12;

/// Tick labels on the month axis keep this many characters ("Jan").
pub const MONTH_TICK_LEN: usize = 3;

/// Category tick labels are cut to this many characters.
pub const CATEGORY_TICK_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Tooltip text
    pub caption: String,
}

impl Bar {
    /// Axis label for this bar.
    pub fn tick_label(&self, spec: &ChartSpec) -> String {
        let max = if spec.is_months {
            MONTH_TICK_LEN
        } else {
            CATEGORY_TICK_LEN
        };
        self.label.chars().take(max).collect()
    }
}

/// One bar chart built from one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub spec: &'static ChartSpec,
    pub slot: Slot,
    pub year: i32,
    /// At most [`MAX_BARS`], in backend order
    pub bars: Vec<Bar>,
    /// Sum over every entry returned, not only the drawn ones
    pub total: f64,
    pub loading: bool,
}

impl ChartView {
    pub fn build(
        spec: &'static ChartSpec,
        slot: Slot,
        year: i32,
        stats: Option<&YearStats>,
        loading: bool,
    ) -> Self {
        let metric = spec.metric();
        let mut bars: Vec<Bar> = stats
            .map(|s| {
                s.entries(spec.field)
                    .into_iter()
                    .map(|entry| Bar {
                        label: entry.title().to_string(),
                        value: entry.metric(metric),
                        caption: entry.caption(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let total: f64 = bars.iter().map(|b| b.value).sum();
        bars.truncate(MAX_BARS);

        Self {
            spec,
            slot,
            year,
            bars,
            total,
            loading,
        }
    }

    fn from_slot(spec: &'static ChartSpec, slot: Slot, year: i32, state: &SlotState) -> Self {
        Self::build(spec, slot, year, state.stats(), state.is_loading())
    }

    /// Bar color: the chart's own for the primary year, the compare color otherwise.
    pub fn color(&self) -> &'static str {
        match self.slot {
            Slot::Primary => self.spec.color,
            Slot::Compare => COMPARE_COLOR,
        }
    }

    /// Per-bar value labels are hidden while a refresh is running.
    pub fn show_value_labels(&self) -> bool {
        !self.loading
    }

    pub fn total_label(&self) -> String {
        format!("Total: {}", self.spec.format_value(self.total))
    }

    pub fn value_label(&self, bar: &Bar) -> String {
        self.spec.format_value(bar.value)
    }

    /// Largest drawn value, for scaling.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// A primary chart and, when a compare year is set, its counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPair {
    pub primary: ChartView,
    pub compare: Option<ChartView>,
}

/// A server-rendered chart image; the download link points at the same URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportChart {
    #[serde(skip)]
    pub spec: &'static ChartSpec,
    pub title: &'static str,
    pub image_url: String,
}

impl ExportChart {
    pub fn download_url(&self) -> &str {
        &self.image_url
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Interactive(Vec<ChartPair>),
    Export(Vec<ExportChart>),
}

impl Dashboard {
    /// What to draw for the current view mode.
    pub fn view(&self, api_url: &str) -> DashboardView {
        match self.view_mode() {
            ViewMode::Interactive => DashboardView::Interactive(self.interactive_charts()),
            ViewMode::Export => DashboardView::Export(self.export_charts(api_url)),
        }
    }

    pub fn interactive_charts(&self) -> Vec<ChartPair> {
        let primary_year = self.primary_year();
        CHART_SPECS
            .iter()
            .map(|spec| ChartPair {
                primary: ChartView::from_slot(spec, Slot::Primary, primary_year, self.primary()),
                compare: self
                    .compare_year()
                    .map(|year| ChartView::from_slot(spec, Slot::Compare, year, self.compare())),
            })
            .collect()
    }

    pub fn export_charts(&self, api_url: &str) -> Vec<ExportChart> {
        let year = self.primary_year();
        let orientation = self.orientation();
        CHART_SPECS
            .iter()
            .map(|spec| ExportChart {
                spec,
                title: spec.title,
                image_url: chart_image_url(api_url, spec.id, year, orientation),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartId, Orientation};
    use crate::dashboard::Applied;
    use crate::models::{GameEntry, PlaytimeEntry};
    use crate::years::YearRange;

    fn game(title: &str, playtime: f64) -> GameEntry {
        GameEntry {
            title: title.to_string(),
            platform: "Steam".to_string(),
            console: "PC".to_string(),
            playtime,
        }
    }

    fn entry(title: &str, playtime: f64, count: u32) -> PlaytimeEntry {
        PlaytimeEntry {
            title: title.to_string(),
            playtime,
            count,
        }
    }

    fn dashboard_with(stats: YearStats) -> Dashboard {
        let mut dashboard = Dashboard::new(YearRange::new(2021, 2025));
        let ticket = dashboard.start();
        assert_eq!(dashboard.apply(ticket, Ok(stats)), Applied::Updated);
        dashboard
    }

    #[test]
    fn test_games_total_and_order() {
        let dashboard = dashboard_with(YearStats {
            year: 2024,
            most_played_games: vec![game("Hades II", 40.0), game("Balatro", 30.0)],
            ..Default::default()
        });

        let charts = dashboard.interactive_charts();
        assert_eq!(charts.len(), 6);
        let games = &charts[0].primary;
        assert_eq!(games.spec.id, ChartId::Games);
        assert_eq!(games.year, 2024);
        assert_eq!(games.total, 70.0);
        assert_eq!(games.total_label(), "Total: 70h");
        let labels: Vec<&str> = games.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Hades II", "Balatro"]);
        assert!(charts[0].compare.is_none());
    }

    #[test]
    fn test_total_covers_entries_beyond_top_twelve() {
        let consoles: Vec<PlaytimeEntry> = (1..=15)
            .map(|i| entry(&format!("Console {}", i), 1.0, 1))
            .collect();
        let view = ChartView::build(
            ChartSpec::get(ChartId::Consoles),
            Slot::Primary,
            2023,
            Some(&YearStats {
                year: 2023,
                most_played_consoles: consoles,
                ..Default::default()
            }),
            false,
        );

        assert_eq!(view.bars.len(), MAX_BARS);
        assert_eq!(view.total, 15.0);
        assert_eq!(view.bars[0].label, "Console 1");
        assert_eq!(view.bars[11].label, "Console 12");
    }

    #[test]
    fn test_status_chart_plots_count() {
        let view = ChartView::build(
            ChartSpec::get(ChartId::Status),
            Slot::Primary,
            2024,
            Some(&YearStats {
                year: 2024,
                games_by_status: vec![entry("Beaten", 200.0, 14), entry("Abandoned", 30.0, 3)],
                ..Default::default()
            }),
            false,
        );
        assert_eq!(view.bars[0].value, 14.0);
        assert_eq!(view.total, 17.0);
        assert_eq!(view.total_label(), "Total: 17");
        assert_eq!(view.value_label(&view.bars[1]), "3");
    }

    #[test]
    fn test_no_stats_renders_empty_chart() {
        let view = ChartView::build(ChartSpec::get(ChartId::Series), Slot::Compare, 2022, None, false);
        assert!(view.is_empty());
        assert_eq!(view.total, 0.0);
        assert_eq!(view.max_value(), 0.0);
    }

    #[test]
    fn test_loading_hides_value_labels() {
        let mut dashboard = dashboard_with(YearStats {
            year: 2024,
            most_played_games: vec![game("Hades II", 40.0)],
            ..Default::default()
        });
        assert!(dashboard.interactive_charts()[0].primary.show_value_labels());

        dashboard.select_primary_year(2023).unwrap();
        let charts = dashboard.interactive_charts();
        let games = &charts[0].primary;
        assert!(games.loading);
        assert!(!games.show_value_labels());
        // the stale bars stay on screen for layout stability
        assert_eq!(games.bars.len(), 1);
    }

    #[test]
    fn test_compare_chart_only_with_compare_year() {
        let mut dashboard = dashboard_with(YearStats {
            year: 2024,
            ..Default::default()
        });
        let ticket = dashboard.select_compare_year(Some(2022)).unwrap().unwrap();
        dashboard.apply(
            ticket,
            Ok(YearStats {
                year: 2022,
                busiest_months: vec![entry("January", 12.0, 2), entry("February", 8.5, 1)],
                ..Default::default()
            }),
        );

        let charts = dashboard.interactive_charts();
        let months = charts[5].compare.as_ref().unwrap();
        assert_eq!(months.slot, Slot::Compare);
        assert_eq!(months.year, 2022);
        assert_eq!(months.total, 20.5);
        assert_eq!(months.bars[1].tick_label(months.spec), "Feb");
        assert_eq!(months.color(), COMPARE_COLOR);
        assert_eq!(charts[5].primary.color(), "#fca311");

        dashboard.select_compare_year(None).unwrap();
        assert!(dashboard.interactive_charts().iter().all(|pair| pair.compare.is_none()));
    }

    #[test]
    fn test_category_ticks_truncate() {
        let bar = Bar {
            label: "The Legend of Zelda: Tears of the Kingdom".to_string(),
            value: 90.0,
            caption: String::new(),
        };
        assert_eq!(bar.tick_label(ChartSpec::get(ChartId::Games)), "The Legend of Ze");
    }

    #[test]
    fn test_export_view_uses_primary_year_and_orientation() {
        let mut dashboard = dashboard_with(YearStats {
            year: 2024,
            ..Default::default()
        });
        dashboard.set_view_mode(ViewMode::Export);
        dashboard.set_orientation(Orientation::Landscape);

        match dashboard.view("http://localhost:8080") {
            DashboardView::Export(charts) => {
                assert_eq!(charts.len(), 6);
                assert_eq!(
                    charts[4].image_url,
                    "http://localhost:8080/api/charts/status?year=2024&orientation=horizontal"
                );
                assert_eq!(charts[4].download_url(), charts[4].image_url);
                assert_eq!(charts[4].title, "Games Beaten");
            }
            other => panic!("expected export view, got {:?}", other),
        }
    }
}
