//! Short human-readable labels for arbitrarily large amounts.
//!
//! Output is locale-independent: `,` groups thousands and `.` is the decimal
//! point regardless of the host environment.

/// A magnitude band: values at or above `threshold` are divided by `divisor`
/// and printed as a grouped integer followed by `suffix`.
#[derive(Debug, Clone, Copy)]
pub struct SuffixBand {
    pub threshold: f64,
    pub divisor: f64,
    pub suffix: &'static str,
    pub name: &'static str,
}

/// Values at or above this are printed in scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e68;

/// Values below this keep two fractional digits.
pub const FRACTION_THRESHOLD: f64 = 1e2;

/// Suffix bands in descending order of threshold.
pub const SUFFIX_BANDS: [SuffixBand; 21] = [
    band(1e65, 1e63, "*", "Vigintillion"),
    band(1e62, 1e60, "&", "Novemdecillion"),
    band(1e59, 1e57, "^", "Octodecillion"),
    band(1e56, 1e54, "%", "Septendecillion"),
    band(1e53, 1e51, "$", "Sexdecillion"),
    band(1e50, 1e48, "#", "Quindecillion"),
    band(1e47, 1e45, "@", "Quattuordecillion"),
    band(1e44, 1e42, "!", "Tredecillion"),
    band(1e41, 1e39, "D", "Duodecillion"),
    band(1e38, 1e36, "U", "Undecillion"),
    band(1e35, 1e33, "d", "Decillion"),
    band(1e32, 1e30, "N", "Nonillion"),
    band(1e29, 1e27, "O", "Octillion"),
    band(1e26, 1e24, "S", "Septillion"),
    band(1e23, 1e21, "s", "Sextillion"),
    band(1e20, 1e18, "Q", "Quintillion"),
    band(1e17, 1e15, "q", "Quadrillion"),
    band(1e14, 1e12, "T", "Trillion"),
    band(1e11, 1e9, "B", "Billion"),
    band(1e8, 1e6, "M", "Million"),
    band(1e5, 1e3, "K", "Thousand"),
];

const fn band(
    threshold: f64,
    divisor: f64,
    suffix: &'static str,
    name: &'static str,
) -> SuffixBand {
    SuffixBand {
        threshold,
        divisor,
        suffix,
        name,
    }
}

/// Formats an amount for display.
///
/// # Examples
///
/// ```
/// use investment_sim::core::format::format_number;
///
/// assert_eq!(format_number(42.5), "42.50");
/// assert_eq!(format_number(999.0), "999");
/// assert_eq!(format_number(150_000.0), "150K");
/// assert_eq!(format_number(1.2e11), "120B");
/// assert_eq!(format_number(1e68), "1.000e+68");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n >= SCIENTIFIC_THRESHOLD {
        return scientific(n);
    }
    if let Some(band) = SUFFIX_BANDS.iter().find(|b| n >= b.threshold) {
        return format!("{}{}", group_thousands(&format!("{:.0}", n / band.divisor)), band.suffix);
    }
    if n >= FRACTION_THRESHOLD {
        return group_thousands(&format!("{:.0}", n));
    }
    group_thousands(&format!("{:.2}", n))
}

/// Legend lines such as `"K = Thousand"`, largest suffix last.
pub fn suffix_legend() -> Vec<String> {
    SUFFIX_BANDS
        .iter()
        .rev()
        .map(|b| format!("{} = {}", b.suffix, b.name))
        .chain(std::iter::once("e+XX = Scientific Notation".to_string()))
        .collect()
}

/// `1.234e+68` style: three fractional mantissa digits, signed two-digit exponent.
fn scientific(n: f64) -> String {
    if n.is_infinite() {
        return "inf".to_string();
    }
    let formatted = format!("{:.3e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// Inserts `,` every three digits of the integer part of a plain decimal string.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
