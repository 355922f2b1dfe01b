//! Provincial bar chart and national time-series line chart.

use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::DashboardApp;
use chrono::{TimeZone, Utc};
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot};

pub fn render_provincial_bars(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let prices = app
        .table
        .provincial_prices(&app.chart_commodity, app.aggregation);

    ui.label(
        egui::RichText::new(format!(
            "Provincial comparison — {} ({})",
            app.chart_commodity, app.aggregation
        ))
        .strong()
        .size(16.0)
        .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    if prices.is_empty() {
        ui.label(
            egui::RichText::new("No provincial data to compare.")
                .color(DesignSystem::TEXT_SECONDARY),
        );
        return;
    }

    let min = prices.iter().map(|(_, p)| *p).fold(f64::INFINITY, f64::min);
    let max = prices
        .iter()
        .map(|(_, p)| *p)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);

    let bars: Vec<Bar> = prices
        .iter()
        .enumerate()
        .map(|(i, (province, price))| {
            Bar::new(i as f64, *price)
                .name(province)
                .fill(DesignSystem::heat_color((price - min) / span))
        })
        .collect();

    let provinces: Vec<String> = prices.iter().map(|(p, _)| p.clone()).collect();

    Plot::new("provincial_bars")
        .height(260.0)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if i < 0.0 || (mark.value - i).abs() > f64::EPSILON {
                return String::new();
            }
            provinces
                .get(i as usize)
                .map(|p| abbreviate(p))
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(app.chart_commodity.clone(), bars));
        });
}

pub fn render_national_trend(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let series = app.table.national_average_series(&app.chart_commodity);

    ui.label(
        egui::RichText::new(format!(
            "National average price — {}",
            app.chart_commodity
        ))
        .strong()
        .size(16.0)
        .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    if series.is_empty() {
        ui.label(
            egui::RichText::new("No historical observations for this commodity.")
                .color(DesignSystem::TEXT_SECONDARY),
        );
        return;
    }

    let points: Vec<[f64; 2]> = series
        .iter()
        .map(|(date, price)| {
            let ts = date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc();
            [ts.timestamp() as f64, *price]
        })
        .collect();

    Plot::new("national_trend")
        .height(240.0)
        .show_grid([true, true])
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| {
            let dt = Utc.timestamp_opt(mark.value as i64, 0).unwrap();
            dt.format("%d/%m/%y").to_string()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("National average", points).color(DesignSystem::ACCENT_PRIMARY),
            );
        });
}

/// Shortens long province names so the bar axis stays readable.
fn abbreviate(name: &str) -> String {
    if name.len() <= 12 {
        return name.to_string();
    }
    name.split_whitespace()
        .map(|word| word.chars().take(3).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
