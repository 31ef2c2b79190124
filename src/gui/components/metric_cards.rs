// src/gui/components/metric_cards.rs
//
// Five summary cards across the top of the central panel.

use eframe::egui::{self, RichText};

use crate::metrics::Metrics;

/// `12345` → `"12,345"`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

fn card(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).small().weak());
        ui.label(RichText::new(value).size(20.0).strong());
    });
}

pub fn draw(ui: &mut egui::Ui, m: &Metrics) {
    let total = thousands(m.count);
    let cards: [(&str, &str); 5] = [
        ("Total Foreclosures", total.as_str()),
        ("Top Zip Code", m.modal_zip.as_str()),
        ("Peak Filing Month", m.modal_filing_month.as_str()),
        ("Peak Sale Month", m.modal_sale_month.as_str()),
        ("Top Purchaser", m.modal_purchaser.as_str()),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            card(col, title, value);
        }
    });
}
