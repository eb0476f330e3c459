pub mod keyboard_diagram;
pub mod menu;
pub mod metrics_panel;
pub mod progress_bar;
pub mod result_panel;
pub mod stats_dashboard;
pub mod typing_area;
