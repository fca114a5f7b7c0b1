//! Presentation helpers. Prices stay unrounded through resolution and cart
//! arithmetic; these are applied only when a value is shown to a buyer.

/// Round to the nearest cent (half away from zero)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal display string, e.g. `49.50`
pub fn format_price(value: f64) -> String {
    format!("{:.2}", round_cents(value))
}
