pub mod chart_panel;
pub mod forecast_panel;
pub mod map_panel;
