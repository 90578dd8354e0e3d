//! Brazilian real formatting for masked inputs and display labels.
//!
//! Masked fields hold the amount in cents as typed digits and display it as
//! `1.500,50` (`.` thousands separator, `,` decimal separator). On submit the
//! display string is turned back into a plain decimal (`1500.50`).

/// Mask the digits typed into a currency field.
///
/// Every non-digit is dropped and the remaining digits are read as cents.
/// Returns `None` when no digit is left, in which case the field must be left
/// untouched rather than coerced to `0,00`.
pub fn mask_digits(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (integer, cents) = padded.split_at(padded.len() - 2);

    Some(format!("{},{}", group_thousands(integer), cents))
}

/// Turn a masked display value back into a plain decimal string.
pub fn unmask(display: &str) -> String {
    display.trim().replace('.', "").replacen(',', ".", 1)
}

/// Normalize a value rendered by the server into the raw cents digits the
/// mask expects.
///
/// Server values use a dot decimal separator (`1500.50`, `1500.5`, `1500`).
/// A value that already carries a decimal comma is treated as masked.
pub fn normalize_server_value(value: &str) -> String {
    let value = value.trim();
    let plain = if value.contains(',') {
        unmask(value)
    } else {
        value.to_string()
    };

    match plain.split_once('.') {
        Some((integer, fraction)) => {
            let cents: String = fraction
                .chars()
                .filter(char::is_ascii_digit)
                .chain(std::iter::repeat('0'))
                .take(2)
                .collect();
            format!("{}{}", digits_only(integer), cents)
        }
        None => {
            let digits = digits_only(&plain);
            if digits.is_empty() {
                digits
            } else {
                format!("{digits}00")
            }
        }
    }
}

/// Masked display for a decimal amount, e.g. `1500.5` → `1.500,50`.
pub fn mask_amount(amount: f64) -> String {
    let cents = to_cents(amount);
    let masked = mask_digits(&cents.unsigned_abs().to_string()).unwrap_or_default();
    if cents < 0 {
        format!("-{masked}")
    } else {
        masked
    }
}

/// Localized currency label, e.g. `1250.5` → `R$ 1.250,50`, `-5.0` → `-R$ 5,00`.
pub fn format_brl(amount: f64) -> String {
    let cents = to_cents(amount);
    let masked = mask_digits(&cents.unsigned_abs().to_string()).unwrap_or_default();
    if cents < 0 {
        format!("-R$ {masked}")
    } else {
        format!("R$ {masked}")
    }
}

fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
