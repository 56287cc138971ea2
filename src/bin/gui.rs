#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 대시보드 진입점.

use std::time::Duration;
use std::{fs, path::Path};

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use tracing::{error, info, warn};

use financial_planner::{
    config::{self, Theme},
    dashboard::{DashboardInputs, DashboardView},
    investment::{InvestmentPlan, Projection, ProjectionStrategy},
    logging, money,
    notification::Notification,
    payment::{self, UpiId},
    planning::{
        expenses::{self, ExpenseCategory, ExpenseKind},
        income::{IncomeType, RECOMMENDED_ALLOCATION, RECOMMENDED_SAVINGS_RATE_PERCENT},
    },
};

/// 원형/선형 차트 색상 (순환 사용).
const CHART_COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(0x00, 0x88, 0xFE),
    egui::Color32::from_rgb(0x00, 0xC4, 0x9F),
    egui::Color32::from_rgb(0xFF, 0xBB, 0x28),
    egui::Color32::from_rgb(0xFF, 0x80, 0x42),
    egui::Color32::from_rgb(0x88, 0x84, 0xD8),
];

fn main() -> Result<(), eframe::Error> {
    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            config::Config::default()
        }
    };
    logging::init(&app_cfg.logging.level);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Financial Planner",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, app_cfg.ui.theme);
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::System => {}
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Planning,
    Expenses,
    Investments,
    Upi,
}

/// 화면에 떠 있는 알림과 만료 시각.
struct Toast {
    notification: Notification,
    expires_at: f64,
}

struct GuiApp {
    config: config::Config,
    tab: Tab,
    income_type: IncomeType,
    monthly_income: f64,
    monthly_expenses: f64,
    initial_investment: f64,
    monthly_contribution: f64,
    years: u32,
    annual_return_percent: f64,
    upi_id: String,
    upi_error: Option<String>,
    toasts: Vec<Toast>,
    status: Option<String>,
    show_settings_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let inputs = DashboardInputs::from(&config.defaults);
        Self {
            tab: Tab::Planning,
            income_type: inputs.income_type,
            monthly_income: inputs.monthly_income,
            monthly_expenses: inputs.monthly_expenses,
            initial_investment: inputs.plan.initial_investment,
            monthly_contribution: inputs.plan.monthly_contribution,
            years: inputs.plan.years.min(config.projection.max_years),
            annual_return_percent: inputs.plan.annual_return_percent,
            upi_id: String::new(),
            upi_error: None,
            toasts: Vec::new(),
            status: None,
            show_settings_modal: false,
            config,
        }
    }

    /// 현재 입력 필드로 불변 스냅샷을 만든다.
    fn inputs(&self) -> DashboardInputs {
        DashboardInputs {
            income_type: self.income_type,
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            plan: InvestmentPlan {
                initial_investment: self.initial_investment,
                monthly_contribution: self.monthly_contribution,
                years: self.years,
                annual_return_percent: self.annual_return_percent,
            },
        }
    }

    fn push_toast(&mut self, notification: Notification, now: f64) {
        info!(title = %notification.title, "{}", notification.description);
        self.toasts.push(Toast {
            notification,
            expires_at: now + f64::from(self.config.ui.toast_seconds),
        });
    }

    fn prune_toasts(&mut self, now: f64) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    fn pay(&mut self, now: f64) {
        match UpiId::parse(&self.upi_id) {
            Ok(id) => {
                self.upi_error = None;
                let receipt = payment::initiate_payment(&id);
                self.push_toast(receipt.notification, now);
            }
            Err(e) => {
                warn!("rejected UPI ID: {e}");
                self.upi_error = Some(e.to_string());
            }
        }
    }

    fn export_projection(&mut self, projection: &Projection) {
        let Some(path) = FileDialog::new()
            .set_file_name("projection.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        match fs::write(&path, projection_csv(projection)) {
            Ok(()) => {
                info!(path = %path.display(), "projection exported");
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                error!(path = %path.display(), "export failed: {e}");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn ui_header(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Income Type");
                egui::ComboBox::from_id_source("income_type")
                    .selected_text(self.income_type.label())
                    .show_ui(ui, |ui| {
                        for t in IncomeType::ALL {
                            ui.selectable_value(&mut self.income_type, t, t.label());
                        }
                    });
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.label("Monthly Income");
                ui.add(egui::DragValue::new(&mut self.monthly_income).speed(10.0).prefix("$"));
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.label("Monthly Expenses");
                ui.add(egui::DragValue::new(&mut self.monthly_expenses).speed(10.0).prefix("$"));
            });
            ui.separator();
            if ui.button("Enter").clicked() {
                let notification = self.inputs().submit();
                self.push_toast(notification, now);
            }
        });
    }

    fn ui_planning(&self, ui: &mut egui::Ui, view: &DashboardView) {
        ui.heading("Income-Based Financial Advice");
        ui.label(view.advice);
        ui.add_space(8.0);
        ui.label("Recommended Savings Rate");
        ui.add(
            egui::ProgressBar::new(f32::from(RECOMMENDED_SAVINGS_RATE_PERCENT) / 100.0)
                .text(format!("Aim to save {RECOMMENDED_SAVINGS_RATE_PERCENT}% of your income")),
        );
        ui.add_space(8.0);
        ui.label("Recommended Investment Allocation");
        ui.columns(3, |cols| {
            for (col, (name, pct)) in cols.iter_mut().zip([
                ("Stocks", RECOMMENDED_ALLOCATION.stocks),
                ("Bonds", RECOMMENDED_ALLOCATION.bonds),
                ("Cash", RECOMMENDED_ALLOCATION.cash),
            ]) {
                col.label(name);
                col.add(egui::ProgressBar::new(f32::from(pct) / 100.0).text(format!("{pct}%")));
            }
        });
        ui.separator();
        ui.heading("Savings Prediction");
        ui.label("Based on your income and expenses:");
        ui.strong(format!(
            "Potential Monthly Savings: {}",
            money::plain(view.savings.potential_savings)
        ));
        match view.savings.savings_rate_percent {
            Some(rate) => {
                ui.strong(format!("Savings Rate: {}", money::percent(rate)));
                ui.add(egui::ProgressBar::new((rate / 100.0).clamp(0.0, 1.0) as f32));
            }
            None => {
                ui.strong("Savings Rate: n/a");
            }
        }
    }

    fn ui_expenses(&self, ui: &mut egui::Ui, view: &DashboardView) {
        ui.heading("Expense Breakdown");
        pie_chart(ui, view.expenses, 110.0);
        ui.add_space(8.0);
        ui.label("Expense Categories");
        egui::Grid::new("expense_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for (i, c) in view.expenses.iter().enumerate() {
                    ui.colored_label(CHART_COLORS[i % CHART_COLORS.len()], c.name);
                    ui.label(match c.kind {
                        ExpenseKind::Essential => "Essential",
                        ExpenseKind::Discretionary => "Discretionary",
                    });
                    ui.strong(money::plain(c.amount));
                    ui.end_row();
                }
                ui.label("Total");
                ui.label("");
                ui.strong(money::plain(expenses::total(view.expenses)));
                ui.end_row();
            });
    }

    fn ui_investments(&mut self, ui: &mut egui::Ui, view: &DashboardView) {
        ui.heading("Wealth Forecast");
        egui::Grid::new("plan_grid").num_columns(2).show(ui, |ui| {
            ui.label("Initial Investment");
            ui.add(
                egui::DragValue::new(&mut self.initial_investment)
                    .speed(100.0)
                    .prefix("$")
                    .clamp_range(0.0..=f64::MAX),
            );
            ui.end_row();
            ui.label("Monthly Contribution");
            ui.add(egui::DragValue::new(&mut self.monthly_contribution).speed(10.0).prefix("$"));
            ui.end_row();
            ui.label("Years");
            ui.add(
                egui::DragValue::new(&mut self.years)
                    .clamp_range(0..=self.config.projection.max_years),
            );
            ui.end_row();
            ui.label("Expected Return");
            ui.add(
                egui::DragValue::new(&mut self.annual_return_percent)
                    .speed(0.1)
                    .suffix("%"),
            );
            ui.end_row();
        });
        let projection = &view.projection;
        ui.horizontal(|ui| {
            ui.strong(format!(
                "Future Value: {}",
                money::grouped(projection.rounded_future_value)
            ));
            ui.separator();
            ui.strong(format!("ROI: {}", projection.roi));
            ui.separator();
            if ui.button("Export CSV").clicked() {
                self.export_projection(projection);
            }
        });
        if let Some(status) = &self.status {
            ui.small(status);
        }
        line_chart(ui, projection, 220.0);

        ui.separator();
        ui.heading("Investment Suggestions");
        for s in view.suggestions {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong(s.name);
                ui.label(format!("Risk: {}", s.risk));
                ui.label(format!("Expected Return: {}", s.expected_return));
                ui.label(format!("Recommended Duration: {}", s.duration));
            });
        }

        ui.separator();
        ui.heading("Comparative Investment Plans");
        for c in &view.comparisons {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong(c.plan.name);
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Stocks: {}%  Bonds: {}%  Cash: {}%",
                        c.plan.stocks, c.plan.bonds, c.plan.cash
                    ));
                    ui.separator();
                    ui.label(format!("Expected Return: {}%", c.plan.expected_return_percent));
                    ui.separator();
                    ui.label(format!(
                        "Projected: {} ({})",
                        money::grouped(c.projection.rounded_future_value),
                        c.projection.roi
                    ));
                });
                ui.add(egui::ProgressBar::new(f32::from(c.plan.stocks) / 100.0));
            });
        }
    }

    fn ui_upi(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("UPI Payments");
        ui.label("UPI ID");
        ui.add(egui::TextEdit::singleline(&mut self.upi_id).hint_text("Enter UPI ID"));
        if let Some(err) = &self.upi_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        ui.horizontal(|ui| {
            if ui.button("Pay using UPI ID").clicked() {
                self.pay(now);
            }
            // QR 스캔은 표시만 한다.
            let _ = ui.add_enabled(false, egui::Button::new("Scan QR Code"));
        });
        ui.small("Payments are simulated; no money is transferred.");
    }

    fn ui_settings_modal(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut save = false;
        egui::Window::new("Settings")
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Theme");
                ui.horizontal(|ui| {
                    for (theme, label) in [
                        (Theme::System, "System"),
                        (Theme::Light, "Light"),
                        (Theme::Dark, "Dark"),
                    ] {
                        if ui
                            .selectable_value(&mut self.config.ui.theme, theme, label)
                            .clicked()
                        {
                            apply_theme(ctx, theme);
                        }
                    }
                });
                ui.label("Projection strategy");
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.config.projection.strategy,
                        ProjectionStrategy::Incremental,
                        "Incremental",
                    );
                    ui.selectable_value(
                        &mut self.config.projection.strategy,
                        ProjectionStrategy::Recompute,
                        "Recompute",
                    );
                });
                ui.label("Notification seconds");
                ui.add(egui::Slider::new(&mut self.config.ui.toast_seconds, 1.0..=15.0));
                if ui.button("Save").clicked() {
                    save = true;
                }
            });
        if save {
            match self.config.save() {
                Ok(()) => self.status = Some("Settings saved".to_string()),
                Err(e) => {
                    error!("settings save failed: {e}");
                    self.status = Some(format!("Settings save failed: {e}"));
                }
            }
        }
        self.show_settings_modal = open;
    }

    fn ui_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.strong(&toast.notification.title);
                        ui.label(&toast.notification.description);
                    });
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.prune_toasts(now);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Financial Planner");
                ui.separator();
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
            });
            ui.separator();
            self.ui_header(ui, now);
            ui.add_space(4.0);
        });

        if self.show_settings_modal {
            self.ui_settings_modal(ctx);
        }

        let view = DashboardView::compute(&self.inputs(), self.config.projection.strategy);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (Tab::Planning, "Income Planning"),
                    (Tab::Expenses, "Expense Tracking"),
                    (Tab::Investments, "Investments"),
                    (Tab::Upi, "UPI Payments"),
                ] {
                    ui.selectable_value(&mut self.tab, tab, label);
                }
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| match (&view, self.tab) {
                (_, Tab::Upi) => self.ui_upi(ui, now),
                (Ok(view), Tab::Planning) => self.ui_planning(ui, view),
                (Ok(view), Tab::Expenses) => self.ui_expenses(ui, view),
                (Ok(view), Tab::Investments) => self.ui_investments(ui, view),
                (Err(e), _) => {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                }
            });
        });

        self.ui_toasts(ctx);
        if !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

/// 예측 결과를 CSV 문자열로 만든다.
fn projection_csv(projection: &Projection) -> String {
    let mut out = String::from("year,value,rounded_value\n");
    for p in &projection.series {
        out.push_str(&format!("{},{},{}\n", p.year, p.value, p.rounded_value()));
    }
    out
}

/// 각 항목의 (시작각, 끝각) [rad]. 12시 방향에서 시계 방향으로 그린다.
fn slice_angles(categories: &[ExpenseCategory]) -> Vec<(f32, f32)> {
    let total = expenses::total(categories);
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -std::f32::consts::FRAC_PI_2;
    categories
        .iter()
        .map(|c| {
            let sweep = (c.amount / total) as f32 * std::f32::consts::TAU;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn pie_chart(ui: &mut egui::Ui, categories: &[ExpenseCategory], radius: f32) {
    let size = egui::vec2(ui.available_width(), radius * 2.0 + 16.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let center = response.rect.center();
    for (i, (start, end)) in slice_angles(categories).into_iter().enumerate() {
        let color = CHART_COLORS[i % CHART_COLORS.len()];
        let steps = ((end - start) / 0.05).ceil().max(1.0) as usize;
        let step = (end - start) / steps as f32;
        for k in 0..steps {
            let a0 = start + step * k as f32;
            let a1 = a0 + step;
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center,
                    center + radius * egui::vec2(a0.cos(), a0.sin()),
                    center + radius * egui::vec2(a1.cos(), a1.sin()),
                ],
                color,
                egui::Stroke::NONE,
            ));
        }
    }
}

/// 연도별 예측값을 화면 좌표로 변환한다.
fn chart_points(projection: &Projection, rect: egui::Rect) -> Vec<egui::Pos2> {
    let series = &projection.series;
    if series.is_empty() {
        return Vec::new();
    }
    let (min, max) = series.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    let min = min.min(0.0);
    let span = if max > min { max - min } else { 1.0 };
    let last_year = series.len().max(2) - 1;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = rect.left() + rect.width() * i as f32 / last_year as f32;
            let y = rect.bottom() - rect.height() * ((p.value - min) / span) as f32;
            egui::pos2(x, y)
        })
        .collect()
}

fn line_chart(ui: &mut egui::Ui, projection: &Projection, height: f32) {
    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect.shrink(24.0);
    let axis = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], axis);
    painter.line_segment([rect.left_bottom(), rect.left_top()], axis);
    let points = chart_points(projection, rect);
    if points.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No projection for 0 years",
            egui::FontId::proportional(13.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }
    painter.add(egui::Shape::line(
        points.clone(),
        egui::Stroke::new(2.0, CHART_COLORS[4]),
    ));
    let font = egui::FontId::proportional(11.0);
    for (point, p) in points.iter().zip(&projection.series) {
        painter.circle_filled(*point, 3.0, CHART_COLORS[4]);
        painter.text(
            egui::pos2(point.x, rect.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            p.year.to_string(),
            font.clone(),
            ui.visuals().text_color(),
        );
    }
    if let Some(hover) = response.hover_pos() {
        let nearest = points
            .iter()
            .zip(&projection.series)
            .min_by(|a, b| {
                (a.0.x - hover.x)
                    .abs()
                    .total_cmp(&(b.0.x - hover.x).abs())
            });
        if let Some((point, p)) = nearest {
            painter.text(
                *point + egui::vec2(0.0, -8.0),
                egui::Align2::CENTER_BOTTOM,
                format!("Year {}: {}", p.year, money::grouped(p.value)),
                font,
                ui.visuals().strong_text_color(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use financial_planner::investment::project;
    use financial_planner::planning::expenses::EXPENSE_BREAKDOWN;

    #[test]
    fn new_app_uses_config_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.inputs(), DashboardInputs::default());
    }

    #[test]
    fn years_are_capped_by_config() {
        let mut cfg = config::Config::default();
        cfg.defaults.years = 500;
        cfg.projection.max_years = 40;
        assert_eq!(GuiApp::new(cfg).years, 40);
    }

    #[test]
    fn toasts_expire() {
        let mut app = GuiApp::new(config::Config::default());
        app.push_toast(Notification::upi_payment_initiated("a@b"), 10.0);
        app.prune_toasts(12.0);
        assert_eq!(app.toasts.len(), 1);
        app.prune_toasts(14.5);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn invalid_upi_id_sets_error_without_toast() {
        let mut app = GuiApp::new(config::Config::default());
        app.upi_id = "not-an-id".to_string();
        app.pay(0.0);
        assert!(app.upi_error.is_some());
        assert!(app.toasts.is_empty());
        app.upi_id = "alice@okbank".to_string();
        app.pay(0.0);
        assert!(app.upi_error.is_none());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn csv_has_header_and_one_line_per_year() {
        let projection = project(&InvestmentPlan::default()).unwrap();
        let csv = projection_csv(&projection);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "year,value,rounded_value");
        assert!(lines[10].starts_with("10,"));
        assert!(lines[10].ends_with(",107144"));
    }

    #[test]
    fn slices_cover_full_circle() {
        let slices = slice_angles(&EXPENSE_BREAKDOWN);
        assert_eq!(slices.len(), 5);
        let sweep: f32 = slices.iter().map(|(a, b)| b - a).sum();
        assert!((sweep - std::f32::consts::TAU).abs() < 1e-4);
        assert!(slice_angles(&[]).is_empty());
    }

    #[test]
    fn chart_points_span_rect() {
        let projection = project(&InvestmentPlan::default()).unwrap();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 50.0));
        let pts = chart_points(&projection, rect);
        assert_eq!(pts.len(), 10);
        assert!((pts[0].x - 0.0).abs() < 1e-4);
        assert!((pts[9].x - 100.0).abs() < 1e-4);
        assert!((pts[9].y - 0.0).abs() < 1e-3);
    }
}
