//! RSX components of the dashboard page.

mod chart_pair;
mod controls;
mod export_card;
mod loading_overlay;
mod stat_chart;
mod toggle_button;

pub use chart_pair::ChartPairView;
pub use controls::Controls;
pub use export_card::ExportCard;
pub use loading_overlay::LoadingOverlay;
pub use stat_chart::StatChart;
pub use toggle_button::ToggleButton;
