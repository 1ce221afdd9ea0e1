//! Static chart descriptors shared by the interactive and export views.

use crate::error::GwError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a chart; doubles as the path segment of `/api/charts/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartId {
    Games,
    Consoles,
    Platforms,
    Series,
    Status,
    Months,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::Games,
        ChartId::Consoles,
        ChartId::Platforms,
        ChartId::Series,
        ChartId::Status,
        ChartId::Months,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::Games => "games",
            ChartId::Consoles => "consoles",
            ChartId::Platforms => "platforms",
            ChartId::Series => "series",
            ChartId::Status => "status",
            ChartId::Months => "months",
        }
    }

    /// The static descriptor for this chart.
    pub fn spec(&self) -> &'static ChartSpec {
        // CHART_SPECS is ordered like ChartId::ALL
        &CHART_SPECS[*self as usize]
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = GwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GwError::UnknownChart(s.to_string()))
    }
}

/// Which `YearStats` collection feeds a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsField {
    MostPlayedGames,
    MostPlayedConsoles,
    MostPlayedPlatforms,
    MostPlayedSeries,
    GamesByStatus,
    BusiestMonths,
}

impl StatsField {
    /// JSON key of the collection in the stats payload.
    pub fn key(&self) -> &'static str {
        match self {
            StatsField::MostPlayedGames => "most_played_games",
            StatsField::MostPlayedConsoles => "most_played_consoles",
            StatsField::MostPlayedPlatforms => "most_played_platforms",
            StatsField::MostPlayedSeries => "most_played_series",
            StatsField::GamesByStatus => "games_by_status",
            StatsField::BusiestMonths => "busiest_months",
        }
    }
}

/// Which entry field is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Hours played
    Playtime,
    /// Number of games
    Count,
}

/// Bar color of every chart drawn for the compare year.
pub const COMPARE_COLOR: &str = "#4cc9f0";

/// Static description of one chart.
#[derive(Debug, PartialEq)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: &'static str,
    pub icon: &'static str,
    pub field: StatsField,
    /// Bar color (CSS)
    pub color: &'static str,
    /// Month-labelled horizontal axis instead of ranked vertical bars
    pub is_months: bool,
    /// Values are a count of games rather than hours
    pub is_status: bool,
}

impl ChartSpec {
    pub fn get(id: ChartId) -> &'static ChartSpec {
        id.spec()
    }

    pub fn metric(&self) -> Metric {
        if self.is_status {
            Metric::Count
        } else {
            Metric::Playtime
        }
    }

    /// Render a plotted value with its unit, e.g. `40h` or `14`.
    pub fn format_value(&self, value: f64) -> String {
        if self.is_status {
            format!("{}", value)
        } else {
            format!("{}h", value)
        }
    }
}

const PLAYTIME_COLOR: &str = "#fca311";
const STATUS_COLOR: &str = "#B4F8C8";

/// The six charts, in display order.
pub static CHART_SPECS: [ChartSpec; 6] = [
    ChartSpec {
        id: ChartId::Games,
        title: "Most Played Games",
        icon: "🎮",
        field: StatsField::MostPlayedGames,
        color: PLAYTIME_COLOR,
        is_months: false,
        is_status: false,
    },
    ChartSpec {
        id: ChartId::Consoles,
        title: "Most Played Consoles",
        icon: "🖥",
        field: StatsField::MostPlayedConsoles,
        color: PLAYTIME_COLOR,
        is_months: false,
        is_status: false,
    },
    ChartSpec {
        id: ChartId::Platforms,
        title: "Most Played Platforms",
        icon: "🗂",
        field: StatsField::MostPlayedPlatforms,
        color: PLAYTIME_COLOR,
        is_months: false,
        is_status: false,
    },
    ChartSpec {
        id: ChartId::Series,
        title: "Most Played Series",
        icon: "✨",
        field: StatsField::MostPlayedSeries,
        color: PLAYTIME_COLOR,
        is_months: false,
        is_status: false,
    },
    ChartSpec {
        id: ChartId::Status,
        title: "Games Beaten",
        icon: "🏆",
        field: StatsField::GamesByStatus,
        color: STATUS_COLOR,
        is_months: false,
        is_status: true,
    },
    ChartSpec {
        id: ChartId::Months,
        title: "Busiest Months",
        icon: "📅",
        field: StatsField::BusiestMonths,
        color: PLAYTIME_COLOR,
        is_months: true,
        is_status: false,
    },
];

/// Layout of exported chart images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Value of the `orientation` query parameter understood by the chart endpoint.
    pub fn as_query(&self) -> &'static str {
        match self {
            Orientation::Portrait => "vertical",
            Orientation::Landscape => "horizontal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Orientation {
    type Err = GwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" | "vertical" => Ok(Orientation::Portrait),
            "landscape" | "horizontal" => Ok(Orientation::Landscape),
            _ => Err(GwError::UnknownOrientation(s.to_string())),
        }
    }
}
