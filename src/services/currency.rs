//! USD to INR conversion and rupee display formatting.
//!
//! Every monetary figure the planner reports goes through [`usd_to_inr`], so
//! the exchange rate is a single configurable value.

/// Convert a USD amount to whole rupees, rounding to the nearest rupee.
/// Negative or non-finite input yields zero.
pub fn usd_to_inr(usd: f64, rate: f64) -> u64 {
    let inr = usd * rate;
    if !inr.is_finite() || inr <= 0.0 {
        return 0;
    }
    inr.round() as u64
}

/// Format rupees with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}
