//! Monetary display.
//!
//! Amounts are shown with exactly two decimals. Rounding is half-up, applied to
//! the shortest decimal representation of the `f64` (the digits a user would
//! type), so `9.005` displays as `9.01` even though the nearest binary value is
//! slightly below it.

/// Formats an amount with exactly two decimals, rounding half-up.
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Display for f64 is the shortest round-trip form and never uses exponents.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut fraction = frac_part.bytes().map(|b| b - b'0');
    digits.push(fraction.next().unwrap_or(0));
    digits.push(fraction.next().unwrap_or(0));

    if fraction.next().unwrap_or(0) >= 5 {
        carry_one(&mut digits);
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let cents: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();

    let is_zero = digits.iter().all(|d| *d == 0);
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}.{}", sign, whole, cents)
}

fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
