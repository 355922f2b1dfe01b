//! The dashboard shell: window layout, selection state, predict action.

use crate::application::forecast::ForecastService;
use crate::domain::errors::PredictionError;
use crate::domain::types::{CategoryField, Forecast, MarketSelection};
use crate::infrastructure::dataset::{PriceAggregation, PriceTable};
use crate::infrastructure::geo::ProvinceShape;
use crate::interfaces::components::{chart_panel, forecast_panel, map_panel};
use crate::interfaces::design_system::DesignSystem;
use chrono::NaiveDate;
use eframe::egui;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub struct DashboardApp {
    pub service: ForecastService,
    pub table: PriceTable,
    pub atlas: Vec<ProvinceShape>,

    // Label lists are cloned out of the immutable context once so the
    // selection widgets can borrow them while mutating selection state.
    pub commodities: Vec<String>,
    pub provinces: Vec<String>,
    pub regencies: Vec<String>,
    pub markets: Vec<String>,
    pub model_commodities: Vec<String>,

    // Chart controls
    pub chart_commodity: String,
    pub aggregation: PriceAggregation,

    // Forecast controls
    pub sel_province: String,
    pub sel_regency: String,
    pub sel_market: String,
    pub sel_commodity: String,
    pub date_input: String,

    pub forecast: Option<Forecast>,
    pub forecast_error: Option<String>,

    theme_applied: bool,
}

impl DashboardApp {
    pub fn new(service: ForecastService, table: PriceTable, atlas: Vec<ProvinceShape>) -> Self {
        let commodities = table.commodities();
        let encoders = service.encoders();
        let provinces = encoders.known_labels(CategoryField::Province).to_vec();
        let regencies = encoders.known_labels(CategoryField::Regency).to_vec();
        let markets = encoders.known_labels(CategoryField::Market).to_vec();
        let model_commodities = encoders.known_labels(CategoryField::Commodity).to_vec();

        let first = |labels: &[String]| labels.first().cloned().unwrap_or_default();
        let chart_commodity = first(&commodities);
        let sel_province = first(&provinces);
        let sel_regency = first(&regencies);
        let sel_market = first(&markets);
        let sel_commodity = first(&model_commodities);
        let date_input = chrono::Local::now()
            .date_naive()
            .format(DATE_INPUT_FORMAT)
            .to_string();

        Self {
            service,
            table,
            atlas,
            commodities,
            provinces,
            regencies,
            markets,
            model_commodities,
            chart_commodity,
            aggregation: PriceAggregation::Lowest,
            sel_province,
            sel_regency,
            sel_market,
            sel_commodity,
            date_input,
            forecast: None,
            forecast_error: None,
            theme_applied: false,
        }
    }

    /// Parses the date field. Rejected before any feature is assembled.
    fn parse_date(&self) -> Result<NaiveDate, PredictionError> {
        NaiveDate::parse_from_str(self.date_input.trim(), DATE_INPUT_FORMAT).map_err(|e| {
            PredictionError::InvalidDate {
                input: self.date_input.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Runs the prediction flow for the current selection.
    /// Failures land in `forecast_error`; no stale forecast survives them.
    pub fn run_forecast(&mut self) {
        self.forecast = None;
        self.forecast_error = None;

        let selection = MarketSelection {
            province: self.sel_province.clone(),
            regency: self.sel_regency.clone(),
            market: self.sel_market.clone(),
            commodity: self.sel_commodity.clone(),
        };

        let result = self
            .parse_date()
            .and_then(|date| self.service.predict_today_and_tomorrow(&selection, date));

        match result {
            Ok(forecast) => self.forecast = Some(forecast),
            Err(e) => {
                tracing::warn!("Forecast rejected: {}", e);
                self.forecast_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(DesignSystem::theme());
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📈 Harga Pangan");
                ui.separator();
                ui.label(
                    egui::RichText::new("Staple commodity prices and next-day forecast")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Latest data: {}",
                            self.table.latest_date().format("%d/%m/%y")
                        ))
                        .color(DesignSystem::TEXT_MUTED)
                        .small(),
                    );
                });
            });
        });

        egui::SidePanel::left("controls_panel")
            .default_width(320.0)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.heading("Market view");
                ui.add_space(DesignSystem::SPACING_SMALL);

                egui::ComboBox::from_label("Commodity")
                    .selected_text(self.chart_commodity.clone())
                    .show_ui(ui, |ui| {
                        for label in &self.commodities {
                            ui.selectable_value(
                                &mut self.chart_commodity,
                                label.clone(),
                                label,
                            );
                        }
                    });

                egui::ComboBox::from_label("Aggregation")
                    .selected_text(self.aggregation.to_string())
                    .show_ui(ui, |ui| {
                        for agg in PriceAggregation::ALL {
                            ui.selectable_value(&mut self.aggregation, agg, agg.to_string());
                        }
                    });

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.separator();
                ui.add_space(DesignSystem::SPACING_SMALL);

                forecast_panel::render_controls(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                map_panel::render_choropleth(self, ui);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                chart_panel::render_provincial_bars(self, ui);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                chart_panel::render_national_trend(self, ui);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                forecast_panel::render_result(self, ui);
            });
        });
    }
}
