/// `$1,250,000`, or a placeholder when the backend sent no (or a zero) price.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p != 0.0 => format!("${}", group_thousands(p)),
        _ => "Price not specified".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if cents > 0 {
        let frac = format!("{cents:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 {
        format!("-{out}")
    } else {
        out
    }
}
