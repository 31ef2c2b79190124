// src/gui/components/bar_chart.rs
//
// Foreclosures by neighborhood, painted directly: one bar per entry in the
// (already sorted) counts, hover for the exact figure.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::aggregate::NeighborhoodCount;
use crate::config::consts::{BAR_COLOR, CHART_HEIGHT};

const TOP_PAD: f32 = 14.0;
const LABEL_H: f32 = 16.0;
const MIN_SLOT_FOR_VALUES: f32 = 24.0;
const MIN_SLOT_FOR_NAMES: f32 = 70.0;

pub fn draw(ui: &mut egui::Ui, counts: &[NeighborhoodCount]) {
    ui.label(RichText::new("Foreclosures by Neighborhood").strong());

    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (rect, resp) = ui.allocate_exact_size(size, Sense::hover());
    if counts.is_empty() || rect.width() <= 0.0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let bar_color = Color32::from_rgb(BAR_COLOR.0, BAR_COLOR.1, BAR_COLOR.2);

    let plot = Rect::from_min_max(
        Pos2::new(rect.left(), rect.top() + TOP_PAD),
        Pos2::new(rect.right(), rect.bottom() - LABEL_H),
    );
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1) as f32;
    let slot = plot.width() / counts.len() as f32;
    let bar_w = (slot * 0.8).max(1.0);

    let hover = resp.hover_pos();
    let mut hovered: Option<&NeighborhoodCount> = None;

    for (i, c) in counts.iter().enumerate() {
        let h = plot.height() * (c.count as f32 / max);
        let x0 = plot.left() + slot * i as f32 + (slot - bar_w) * 0.5;
        let bar = Rect::from_min_max(Pos2::new(x0, plot.bottom() - h), Pos2::new(x0 + bar_w, plot.bottom()));

        let column = Rect::from_min_max(Pos2::new(plot.left() + slot * i as f32, rect.top()),
                                        Pos2::new(plot.left() + slot * (i + 1) as f32, rect.bottom()));
        let is_hot = hover.is_some_and(|p| column.contains(p));
        if is_hot { hovered = Some(c); }

        let fill = if is_hot { bar_color.gamma_multiply(1.3) } else { bar_color };
        painter.rect_filled(bar, 2.0, fill);

        if slot >= MIN_SLOT_FOR_VALUES {
            painter.text(
                Pos2::new(bar.center().x, bar.top() - 2.0),
                Align2::CENTER_BOTTOM,
                c.count.to_string(),
                FontId::proportional(11.0),
                text_color,
            );
        }
        if slot >= MIN_SLOT_FOR_NAMES {
            painter.text(
                Pos2::new(bar.center().x, plot.bottom() + 2.0),
                Align2::CENTER_TOP,
                &c.neighborhood,
                FontId::proportional(10.0),
                text_color,
            );
        }
    }

    painter.line_segment(
        [Pos2::new(plot.left(), plot.bottom()), Pos2::new(plot.right(), plot.bottom())],
        Stroke::new(1.0, text_color.gamma_multiply(0.5)),
    );

    if let Some(c) = hovered {
        resp.on_hover_text(format!("{}: {} foreclosures", c.neighborhood, c.count));
    }
}
