//! Forecast controls and next-day prediction result.

use crate::domain::types::{format_rupiah, Direction};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::DashboardApp;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

pub fn render_controls(app: &mut DashboardApp, ui: &mut egui::Ui) {
    ui.heading("Next-day forecast");
    ui.add_space(DesignSystem::SPACING_SMALL);

    combo(ui, "fc_province", "Province", &mut app.sel_province, &app.provinces);
    combo(ui, "fc_regency", "Regency / city", &mut app.sel_regency, &app.regencies);
    combo(ui, "fc_market", "Market", &mut app.sel_market, &app.markets);
    combo(
        ui,
        "fc_commodity",
        "Commodity",
        &mut app.sel_commodity,
        &app.model_commodities,
    );

    ui.horizontal(|ui| {
        ui.label("Date");
        ui.add(
            egui::TextEdit::singleline(&mut app.date_input)
                .desired_width(110.0)
                .hint_text("YYYY-MM-DD"),
        );
    });

    ui.add_space(DesignSystem::SPACING_SMALL);
    if ui
        .add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(egui::RichText::new("Predict").strong()),
        )
        .clicked()
    {
        app.run_forecast();
    }

    if let Some(error) = &app.forecast_error {
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(egui::RichText::new(error).color(DesignSystem::DANGER));
    }
}

// Combos borrow the cloned label lists, not the registry itself. Salted ids
// keep these from colliding with the market-view combos.
fn combo(ui: &mut egui::Ui, id: &str, label: &str, value: &mut String, options: &[String]) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt(id)
            .selected_text(value.clone())
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, option.clone(), option);
                }
            });
        ui.label(label);
    });
}

pub fn render_result(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let Some(forecast) = app.forecast else {
        return;
    };

    ui.label(
        egui::RichText::new(format!("Forecast — {}", app.sel_commodity))
            .strong()
            .size(16.0)
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    egui::Frame::NONE
        .fill(DesignSystem::BG_CARD)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .corner_radius(6)
        .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
        .show(ui, |ui| {
            ui.label(format!(
                "📅 Today ({}): {}",
                forecast.today.date,
                format_rupiah(forecast.today.price)
            ));
            ui.label(format!(
                "📅 Tomorrow ({}): {}",
                forecast.tomorrow.date,
                format_rupiah(forecast.tomorrow.price)
            ));

            ui.add_space(DesignSystem::SPACING_SMALL);
            let (text, color) = match forecast.direction {
                Direction::Rising => ("⬆ Price expected to RISE", DesignSystem::DANGER),
                Direction::Falling => ("⬇ Price expected to FALL", DesignSystem::SUCCESS),
                Direction::Stable => ("➡ Price expected to stay STABLE", DesignSystem::TEXT_SECONDARY),
            };
            ui.label(egui::RichText::new(text).strong().size(15.0).color(color));
        });

    ui.add_space(DesignSystem::SPACING_SMALL);

    let bars = vec![
        Bar::new(0.0, forecast.today.price)
            .name("Today")
            .fill(DesignSystem::ACCENT_PRIMARY),
        Bar::new(1.0, forecast.tomorrow.price)
            .name("Tomorrow")
            .fill(match forecast.direction {
                Direction::Rising => DesignSystem::DANGER,
                Direction::Falling => DesignSystem::SUCCESS,
                Direction::Stable => DesignSystem::TEXT_SECONDARY,
            }),
    ];

    Plot::new("forecast_bars")
        .height(180.0)
        .show_grid([false, true])
        .x_axis_formatter(|mark, _range| match mark.value.round() as i64 {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => String::new(),
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Today vs tomorrow", bars));
        });
}
