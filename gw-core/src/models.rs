//! Payload structs returned by the `/api/stats` endpoint.
//!
//! The backend serializes an empty result set as JSON `null`, so every
//! collection decodes `null` (or a missing key) as an empty `Vec`.

use crate::chart::{Metric, StatsField};
use serde::{Deserialize, Deserializer, Serialize};

/// Aggregated playtime for one title (console, platform, series, status or month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaytimeEntry {
    pub title: String,
    /// Hours played
    #[serde(default)]
    pub playtime: f64,
    /// Number of games counted under this title
    #[serde(default)]
    pub count: u32,
}

/// A single game with the hardware it was played on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub console: String,
    /// Hours played
    #[serde(default)]
    pub playtime: f64,
}

/// All statistics for one calendar year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YearStats {
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub most_played_consoles: Vec<PlaytimeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub most_played_platforms: Vec<PlaytimeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub most_played_games: Vec<GameEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub most_played_series: Vec<PlaytimeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub games_by_status: Vec<PlaytimeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub busiest_months: Vec<PlaytimeEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that can be drawn as one bar of a chart.
pub trait ChartEntry {
    fn title(&self) -> &str;
    fn metric(&self, metric: Metric) -> f64;
    /// Longer caption used for tooltips.
    fn caption(&self) -> String;
}

impl ChartEntry for PlaytimeEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Playtime => self.playtime,
            Metric::Count => f64::from(self.count),
        }
    }

    fn caption(&self) -> String {
        if self.count == 1 {
            format!("{} (1 game)", self.title)
        } else {
            format!("{} ({} games)", self.title, self.count)
        }
    }
}

impl ChartEntry for GameEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Playtime => self.playtime,
            // games carry no count
            Metric::Count => 0.0,
        }
    }

    fn caption(&self) -> String {
        format!("{} ({}) on {}", self.title, self.platform, self.console)
    }
}

impl YearStats {
    /// Entries of one collection, in the order the backend returned them.
    pub fn entries(&self, field: StatsField) -> Vec<&dyn ChartEntry> {
        fn erase<T: ChartEntry>(items: &[T]) -> Vec<&dyn ChartEntry> {
            items.iter().map(|e| e as &dyn ChartEntry).collect()
        }

        match field {
            StatsField::MostPlayedGames => erase(&self.most_played_games),
            StatsField::MostPlayedConsoles => erase(&self.most_played_consoles),
            StatsField::MostPlayedPlatforms => erase(&self.most_played_platforms),
            StatsField::MostPlayedSeries => erase(&self.most_played_series),
            StatsField::GamesByStatus => erase(&self.games_by_status),
            StatsField::BusiestMonths => erase(&self.busiest_months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stats_payload() {
        let body = r#"{
            "year": 2024,
            "most_played_consoles": [{"title": "Steam Deck", "playtime": 120, "count": 9}],
            "most_played_platforms": null,
            "most_played_games": [
                {"title": "Hades II", "platform": "Steam", "console": "PC", "playtime": 40},
                {"title": "Balatro", "platform": "Steam", "console": "Steam Deck", "playtime": 30}
            ],
            "most_played_series": [],
            "games_by_status": [{"title": "Beaten", "playtime": 200, "count": 14}],
            "busiest_months": [{"title": "January", "playtime": 22.5, "count": 3}]
        }"#;

        let stats: YearStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.year, 2024);
        assert_eq!(stats.most_played_consoles[0].count, 9);
        assert!(stats.most_played_platforms.is_empty());
        assert_eq!(stats.most_played_games.len(), 2);
        assert_eq!(stats.most_played_games[1].console, "Steam Deck");
        assert_eq!(stats.busiest_months[0].playtime, 22.5);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let stats: YearStats = serde_json::from_str(r#"{"year": 2021}"#).unwrap();
        assert_eq!(stats, YearStats { year: 2021, ..Default::default() });
    }

    #[test]
    fn test_missing_year_is_rejected() {
        let result = serde_json::from_str::<YearStats>(r#"{"most_played_games": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_metrics() {
        let status = PlaytimeEntry {
            title: "Beaten".to_string(),
            playtime: 200.0,
            count: 14,
        };
        assert_eq!(status.metric(Metric::Count), 14.0);
        assert_eq!(status.metric(Metric::Playtime), 200.0);

        let game = GameEntry {
            title: "Hades II".to_string(),
            platform: "Steam".to_string(),
            console: "PC".to_string(),
            playtime: 40.0,
        };
        assert_eq!(game.metric(Metric::Playtime), 40.0);
        assert_eq!(game.metric(Metric::Count), 0.0);
    }

    #[test]
    fn test_captions() {
        let single = PlaytimeEntry {
            title: "Metroid".to_string(),
            playtime: 12.0,
            count: 1,
        };
        assert_eq!(single.caption(), "Metroid (1 game)");

        let game = GameEntry {
            title: "Balatro".to_string(),
            platform: "Steam".to_string(),
            console: "Steam Deck".to_string(),
            playtime: 30.0,
        };
        assert_eq!(game.caption(), "Balatro (Steam) on Steam Deck");
    }

    #[test]
    fn test_entries_keep_backend_order() {
        let stats = YearStats {
            year: 2023,
            most_played_series: vec![
                PlaytimeEntry { title: "Zelda".to_string(), playtime: 5.0, count: 1 },
                PlaytimeEntry { title: "Mario".to_string(), playtime: 50.0, count: 2 },
            ],
            ..Default::default()
        };
        let entries = stats.entries(StatsField::MostPlayedSeries);
        let titles: Vec<&str> = entries.iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Zelda", "Mario"]);
    }
}
