//! Choropleth of provincial prices for the selected commodity.

use crate::domain::types::format_rupiah;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::DashboardApp;
use eframe::egui;
use egui_plot::{Plot, PlotPoints, Polygon};
use std::collections::HashMap;

pub fn render_choropleth(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let prices = app
        .table
        .provincial_prices(&app.chart_commodity, app.aggregation);

    ui.label(
        egui::RichText::new(format!(
            "{} per province ({}) — {}",
            app.chart_commodity,
            app.aggregation,
            app.table.latest_date().format("%d/%m/%y")
        ))
        .strong()
        .size(16.0)
        .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    if prices.is_empty() {
        ui.label(
            egui::RichText::new("No observations for this commodity on the latest date.")
                .color(DesignSystem::TEXT_SECONDARY),
        );
        return;
    }

    let by_province: HashMap<&str, f64> = prices
        .iter()
        .map(|(province, price)| (province.as_str(), *price))
        .collect();
    let min = prices.iter().map(|(_, p)| *p).fold(f64::INFINITY, f64::min);
    let max = prices
        .iter()
        .map(|(_, p)| *p)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);

    Plot::new("choropleth")
        .height(340.0)
        .data_aspect(1.0)
        .show_grid([false, false])
        .show_axes([false, false])
        .show(ui, |plot_ui| {
            for shape in &app.atlas {
                let price = by_province.get(shape.name.as_str()).copied();
                let fill = match price {
                    Some(p) => DesignSystem::heat_color((p - min) / span),
                    // Provinces without data stay on the neutral card color.
                    None => DesignSystem::BG_CARD,
                };
                let name = match price {
                    Some(p) => format!("{} — {}", shape.name, format_rupiah(p)),
                    None => format!("{} — no data", shape.name),
                };

                for ring in &shape.rings {
                    let points: Vec<[f64; 2]> =
                        ring.iter().map(|(lon, lat)| [*lon, *lat]).collect();
                    plot_ui.polygon(
                        Polygon::new(name.clone(), PlotPoints::from(points))
                            .fill_color(fill)
                            .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE)),
                    );
                }
            }
        });

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("Low {}", format_rupiah(min)))
                .color(DesignSystem::TEXT_MUTED)
                .small(),
        );
        ui.label(egui::RichText::new("→").color(DesignSystem::TEXT_MUTED).small());
        ui.label(
            egui::RichText::new(format!("High {}", format_rupiah(max)))
                .color(DesignSystem::TEXT_MUTED)
                .small(),
        );
    });
}
