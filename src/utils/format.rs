//! Number formatting for tooltip counters
//!
//! The site is in Brazilian Portuguese, so counters use `.` as the thousands
//! separator, the way `toLocaleString('pt-BR')` prints them.

const THOUSANDS_SEPARATOR: char = '.';

/// Format a counter with pt-BR thousands separators (`125000` -> `125.000`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Format a recycled mass in kilograms (`95000` -> `95.000 kg`)
pub fn format_kilograms(value: u64) -> String {
    format!("{} kg", format_count(value))
}
