//! Summary Card Component
//!
//! Income / expense / balance cards at the top of the dashboard.

use leptos::*;

/// Money formatting used across the dashboard; negatives carry the sign
/// before the currency symbol.
pub fn format_amount(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

/// Single total card
#[component]
pub fn SummaryCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    /// Tailwind text color class for the amount
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-4 shadow">
            <span class="text-gray-500 text-sm">{label}</span>
            <div class=format!("text-2xl font-bold mt-1 {}", accent)>
                {move || format_amount(value.get())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_format_with_two_decimals() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.5), "$1234.50");
    }

    #[test]
    fn negative_balance_puts_the_sign_before_the_symbol() {
        assert_eq!(format_amount(-80.0), "-$80.00");
    }
}
