//! One-shot commands: print stats, list export URLs, download chart images.

use crate::render;
use anyhow::Context;
use gw_core::{
    Applied, ChartId, Dashboard, DashboardView, Orientation, StatsClient, ViewMode, YearRange,
};
use log::info;
use std::path::Path;

fn open_dashboard(years: YearRange, year: Option<i32>) -> anyhow::Result<Dashboard> {
    Ok(match year {
        Some(year) => Dashboard::with_primary_year(years, year)?,
        None => Dashboard::new(years),
    })
}

/// Fetch the primary (and optional compare) year concurrently and print them.
pub async fn run_stats(
    client: &StatsClient,
    years: YearRange,
    year: Option<i32>,
    compare: Option<i32>,
    json: bool,
) -> anyhow::Result<()> {
    let mut dashboard = open_dashboard(years, year)?;
    let primary = dashboard.start();
    let compare = dashboard.select_compare_year(compare)?;

    let (primary_result, compare_result) = tokio::join!(
        client.fetch_year_stats(primary.year),
        async {
            match compare {
                Some(ticket) => Some(client.fetch_year_stats(ticket.year).await),
                None => None,
            }
        }
    );

    if dashboard.apply(primary, primary_result) == Applied::Failed {
        anyhow::bail!(
            "could not load stats for {} from {}",
            primary.year,
            client.api_url()
        );
    }
    if let (Some(ticket), Some(result)) = (compare, compare_result) {
        // a failed compare year still prints the primary year
        dashboard.apply(ticket, result);
    }

    if json {
        let payload: Vec<_> = [dashboard.primary().stats(), dashboard.compare().stats()]
            .into_iter()
            .flatten()
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render::render_view(&dashboard.view(client.api_url())));
    }
    Ok(())
}

/// Print the export view for a year without touching the network.
pub fn run_charts(
    client: &StatsClient,
    years: YearRange,
    year: Option<i32>,
    orientation: Orientation,
) -> anyhow::Result<()> {
    let mut dashboard = open_dashboard(years, year)?;
    dashboard.set_view_mode(ViewMode::Export);
    dashboard.set_orientation(orientation);

    if let DashboardView::Export(charts) = dashboard.view(client.api_url()) {
        print!("{}", render::render_export(&charts));
    }
    Ok(())
}

/// File name a downloaded chart image is saved under.
pub fn image_file_name(chart: ChartId, year: i32, orientation: Orientation) -> String {
    format!("{}-{}-{}.png", chart, year, orientation.as_query())
}

/// Save the chart images of the export view into `out_dir`.
pub async fn run_download(
    client: &StatsClient,
    years: YearRange,
    year: Option<i32>,
    orientation: Orientation,
    out_dir: &str,
    charts: &[ChartId],
) -> anyhow::Result<()> {
    let dashboard = open_dashboard(years, year)?;
    let year = dashboard.primary_year();
    let charts: Vec<ChartId> = if charts.is_empty() {
        ChartId::ALL.to_vec()
    } else {
        charts.to_vec()
    };

    let out_dir = Path::new(out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    info!(
        "Downloading {} charts for {} ({}) into {}",
        charts.len(),
        year,
        orientation,
        out_dir.display()
    );

    for chart in charts {
        let bytes = client
            .download_chart_image(chart, year, orientation)
            .await
            .with_context(|| format!("failed to download the {} chart", chart))?;
        let path = out_dir.join(image_file_name(chart, year, orientation));
        std::fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} ({} bytes)", path.display(), bytes.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_name() {
        assert_eq!(
            image_file_name(ChartId::Series, 2023, Orientation::Landscape),
            "series-2023-horizontal.png"
        );
    }

    #[test]
    fn test_open_dashboard_checks_year() {
        let years = YearRange::new(2021, 2025);
        assert_eq!(open_dashboard(years, None).unwrap().primary_year(), 2024);
        assert_eq!(open_dashboard(years, Some(2022)).unwrap().primary_year(), 2022);
        assert!(open_dashboard(years, Some(2019)).is_err());
    }
}
