// File: crates/chart-core/src/format.rs
// Summary: Axis value formatting and footer label fitting.

/// Axis label for `value`: whole number below 1000, thousands with one decimal and `K` above.
/// `999 -> "999"`, `1500 -> "1.5K"`, `1234567 -> "1,234.6K"`.
pub fn format_axis_value(value: f64) -> String {
    if value < 1000.0 {
        group_thousands(&format!("{:.0}", value.round()))
    } else {
        let k = (value / 1000.0 * 10.0).round() / 10.0;
        format!("{}K", group_thousands(&format!("{:.1}", k)))
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", number),
    };
    let (int, frac) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let mut grouped = String::with_capacity(number.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac}")
}

/// First `n` characters of `text` (char-based, never splits a code point).
pub fn truncate_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Shortens `text` until `measure` reports it fits in `max_width`: full text, then 3 chars,
/// then 1 char. The last candidate is returned even if it still overflows.
pub fn fit_label<F>(text: &str, max_width: f32, mut measure: F) -> &str
where
    F: FnMut(&str) -> f32,
{
    let mut fitted = text;
    for n in [3usize, 1] {
        if measure(fitted) <= max_width {
            break;
        }
        fitted = truncate_chars(fitted, n);
    }
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_values() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(25.0), "25");
        assert_eq!(format_axis_value(999.0), "999");
        assert_eq!(format_axis_value(1000.0), "1.0K");
        assert_eq!(format_axis_value(1500.0), "1.5K");
        assert_eq!(format_axis_value(1_234_567.0), "1,234.6K");
        assert_eq!(format_axis_value(-2500.0), "-2,500");
        assert_eq!(format_axis_value(2.5), "3");
    }

    #[test]
    fn truncation_is_char_based() {
        assert_eq!(truncate_chars("héllo", 3), "hél");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("", 1), "");
    }

    #[test]
    fn fit_label_steps_down() {
        let width = |s: &str| s.chars().count() as f32 * 10.0;
        assert_eq!(fit_label("January", 100.0, width), "January");
        assert_eq!(fit_label("January", 40.0, width), "Jan");
        assert_eq!(fit_label("January", 15.0, width), "J");
        // irreducible overflow is kept
        assert_eq!(fit_label("January", 5.0, width), "J");
    }
}
