//! Native chart window built on eframe and egui_plot.

use eframe::egui::{self, Color32, RichText, Stroke};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};
use tracing::info;

use super::{date_to_x, x_to_date, ChartColor, ChartRenderer, ChartSpec, RenderError};

const DEFAULT_WIDTH: f32 = 1400.0;
const DEFAULT_HEIGHT: f32 = 700.0;
const LINE_WIDTH: f32 = 1.5;

/// The label grows up and to the right of the last close
pub const ANNOTATION_ANCHOR: egui::Align2 = egui::Align2::LEFT_BOTTOM;

/// Opens a window and blocks until the user closes it
pub struct EguiChartRenderer {
    width: f32,
    height: f32,
}

impl EguiChartRenderer {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Default for EguiChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for EguiChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), RenderError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_title(chart.title.clone()),
            ..Default::default()
        };

        info!(title = %chart.title, "opening chart window");

        let app = ChartApp {
            chart: chart.clone(),
        };
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| RenderError::Window(e.to_string()))
    }
}

fn color32(color: ChartColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

fn translucent(color: ChartColor, alpha: f32) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

struct ChartApp {
    chart: ChartSpec,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let chart = &self.chart;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&chart.title);

            Plot::new("price_chart")
                .legend(Legend::default())
                .x_axis_label(chart.x_label.clone())
                .y_axis_label(chart.y_label.clone())
                .x_axis_formatter(|mark, _range| {
                    x_to_date(mark.value)
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default()
                })
                .show(ui, |plot_ui| {
                    // egui only fills convex polygons, so the band is drawn
                    // as one quad per pair of adjacent dates.
                    let fill = translucent(chart.band.color, chart.band.alpha);
                    for pair in chart.band.points.windows(2) {
                        let (d0, lower0, upper0) = pair[0];
                        let (d1, lower1, upper1) = pair[1];
                        let (x0, x1) = (date_to_x(d0), date_to_x(d1));
                        plot_ui.polygon(
                            Polygon::new(
                                chart.band.label.clone(),
                                PlotPoints::new(vec![
                                    [x0, lower0],
                                    [x1, lower1],
                                    [x1, upper1],
                                    [x0, upper0],
                                ]),
                            )
                            .fill_color(fill)
                            .stroke(Stroke::NONE),
                        );
                    }

                    for line in &chart.lines {
                        let points: Vec<[f64; 2]> = line
                            .points
                            .iter()
                            .map(|(date, value)| [date_to_x(*date), *value])
                            .collect();
                        plot_ui.line(
                            Line::new(line.label.clone(), PlotPoints::new(points))
                                .color(color32(line.color))
                                .width(LINE_WIDTH),
                        );
                    }

                    let note = &chart.annotation;
                    let mut text = RichText::new(note.text.clone())
                        .color(color32(note.color))
                        .size(note.font_size);
                    if note.bold {
                        text = text.strong();
                    }
                    plot_ui.text(
                        Text::new("", PlotPoint::new(date_to_x(note.date), note.price), text)
                            .anchor(ANNOTATION_ANCHOR),
                    );
                });
        });
    }
}
