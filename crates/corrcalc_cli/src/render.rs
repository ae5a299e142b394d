use corrcalc_core::presenter::{INTERPRETATION_GUIDE, PEARSON_ABOUT, SPEARMAN_ABOUT};
use corrcalc_core::{ColorTier, Dataset, ResultCard, ResultView, ServiceInfo, Trend};
use std::fmt::Write;

use crate::session::{Axis, RequestPhase, Session};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_HIGH: &str = "\x1b[1;32m";
const ANSI_MEDIUM: &str = "\x1b[1;34m";

fn trend_symbol(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Flat => "–",
    }
}

fn paint(text: &str, tier: ColorTier, color: bool) -> String {
    let code = match tier {
        ColorTier::High => ANSI_HIGH,
        ColorTier::Medium => ANSI_MEDIUM,
        ColorTier::Neutral => return text.to_string(),
    };
    if color {
        format!("{}{}{}", code, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

pub fn render_card(card: &ResultCard, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", card.title, trend_symbol(card.trend));
    let _ = writeln!(
        out,
        "  Coefficient: {}",
        paint(&card.coefficient_text, card.tier, color)
    );
    let _ = writeln!(out, "  Percentage:  {}", card.percentage);
    let _ = writeln!(out, "  Strength:    {}", card.strength.label());
    out
}

pub fn render_view(view: &ResultView, color: bool) -> String {
    let mut out = format!("{}\n", view.heading);
    for card in &view.cards {
        out.push('\n');
        out.push_str(&render_card(card, color));
    }
    out
}

pub fn render_dataset(dataset: &Dataset) -> String {
    let mut out = format!("{}:", dataset.label());
    for (i, value) in dataset.values().iter().enumerate() {
        let _ = write!(out, " [{}] {}", i, value);
    }
    let _ = write!(out, "\n  Count: {}", dataset.len());
    out
}

pub fn render_session(session: &Session, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_dataset(session.dataset(Axis::X)));
    let _ = writeln!(out, "{}", render_dataset(session.dataset(Axis::Y)));
    let _ = writeln!(out, "Correlation Type: {}", session.correlation_type());
    if session.phase() == RequestPhase::InFlight {
        let _ = writeln!(out, "Calculating...");
    }
    if let Some(err) = session.error() {
        let _ = writeln!(out, "Error: {}", err);
    }
    if let Some(outcome) = session.result() {
        out.push('\n');
        out.push_str(&render_view(&ResultView::from_outcome(outcome), color));
    }
    out
}

pub fn render_guide() -> String {
    let mut out = String::from("About Correlation Coefficients\n\n");
    let _ = writeln!(out, "Pearson Correlation: {}", PEARSON_ABOUT);
    let _ = writeln!(out, "Spearman Correlation: {}", SPEARMAN_ABOUT);
    out.push_str("\nInterpretation:\n");
    for (range, meaning) in INTERPRETATION_GUIDE {
        let _ = writeln!(out, "  {}: {}", range, meaning);
    }
    out
}

pub fn render_service_info(info: &ServiceInfo) -> String {
    let mut out = format!("{}\n", info.message);
    for (path, description) in &info.endpoints {
        let _ = writeln!(out, "  {}  {}", path, description);
    }
    out
}
