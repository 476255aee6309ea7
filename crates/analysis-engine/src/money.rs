//! Locale-ambiguous monetary parsing and es-ES display formatting.
//!
//! Contract text mixes `1.900,50`, `1,900.50` and `1.900` freely depending
//! on the drafter's locale. Separator roles are resolved positionally: when
//! both symbols appear, the last one is the decimal separator; a single
//! separator followed by 1-2 digits is decimal, followed by 3 digits it is
//! a thousands group. Output always renders in the es-ES convention
//! (`.` thousands, `,` decimal) so downstream display is uniform.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any monetary mention: grouped digits plus an optional adjacent
    /// currency token.
    static ref MONEY_MENTION: Regex = Regex::new(
        r"(?i)(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(€|euros?|eur|usd|\$|d[oó]lares?|dollars?)?"
    )
    .unwrap();
}

/// A parsed monetary value. `cents` records whether the source string
/// carried a decimal part, so integers render without decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub cents: bool,
}

/// Upper bound on accepted amounts (one trillion). Anything larger is
/// reference-number noise, not a contract price, and keeps the cents
/// arithmetic in `format_es` within exact i64 range.
const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Parses a digit string with ambiguous `.`/`,` separators. Amounts above
/// [`MAX_AMOUNT`] are rejected.
pub fn parse_amount(raw: &str) -> Option<ParsedAmount> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let seps: Vec<(usize, char)> = raw
        .char_indices()
        .filter(|(_, c)| *c == '.' || *c == ',')
        .collect();

    if seps.is_empty() {
        let value = raw.parse::<f64>().ok()?;
        if value > MAX_AMOUNT {
            return None;
        }
        return Some(ParsedAmount { value, cents: false });
    }

    let (last_idx, last_sep) = *seps.last().unwrap();
    let tail = &raw[last_idx + 1..];
    let mixed = seps.iter().any(|(_, c)| *c != last_sep);

    let last_is_decimal = if mixed {
        // Both symbols present: the last one wins the decimal role
        true
    } else if seps.len() == 1 {
        matches!(tail.len(), 1 | 2)
    } else {
        // Repeated identical separator: pure thousands grouping
        false
    };

    let (int_src, dec_part) = if last_is_decimal {
        // With both symbols present the tail may run past two digits
        // ("1,234.567" is 1234.567); a lone separator is only decimal
        // when followed by 1-2 digits, checked above
        if tail.is_empty() || (!mixed && tail.len() > 2) {
            return None;
        }
        (&raw[..last_idx], Some(tail))
    } else {
        // Every thousands group must be exactly three digits
        let mut prev = 0usize;
        for (idx, _) in &seps {
            if *idx > prev && raw[prev..*idx].contains(|c: char| !c.is_ascii_digit()) {
                return None;
            }
            prev = idx + 1;
        }
        if tail.len() != 3 {
            return None;
        }
        (raw, None)
    };

    let digits: String = int_src.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let mut value = digits.parse::<f64>().ok()?;
    if let Some(dec) = dec_part {
        value += dec.parse::<f64>().ok()? / 10f64.powi(dec.len() as i32);
    }
    if value > MAX_AMOUNT {
        return None;
    }

    Some(ParsedAmount {
        value,
        cents: dec_part.is_some(),
    })
}

/// Renders a value in the es-ES convention, used for all display output
/// regardless of the document language.
pub fn format_es(amount: &ParsedAmount) -> String {
    if amount.cents {
        let total_cents = (amount.value * 100.0).round() as i64;
        format!("{},{:02}", group_thousands(total_cents / 100), total_cents % 100)
    } else {
        group_thousands(amount.value.round() as i64)
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Resolves the currency for a match at `start..end` (byte offsets into
/// `text`). An explicit adjacent token wins; otherwise a 10-character
/// window on each side of the match is scanned for currency hints.
pub fn resolve_currency(text: &str, start: usize, end: usize, explicit: Option<&str>) -> String {
    if let Some(token) = explicit {
        return normalize_currency(token);
    }

    let before: String = text[..start]
        .chars()
        .rev()
        .take(10)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let after: String = text[end..].chars().take(10).collect();
    let window = format!("{}{}", before, after).to_lowercase();

    if window.contains('€') || window.contains("eur") {
        "€".to_string()
    } else if window.contains('$')
        || window.contains("usd")
        || window.contains("dollar")
        || window.contains("dólar")
        || window.contains("dolar")
    {
        "$".to_string()
    } else {
        String::new()
    }
}

fn normalize_currency(token: &str) -> String {
    let lower = token.trim().to_lowercase();
    if lower == "€" || lower == "eur" || lower.starts_with("euro") {
        "€".to_string()
    } else if lower == "$"
        || lower == "usd"
        || lower.starts_with("dollar")
        || lower.starts_with("dólar")
        || lower.starts_with("dolar")
    {
        "$".to_string()
    } else {
        token.trim().to_string()
    }
}

/// Formats a parsed amount together with its currency symbol.
pub fn render(amount: &ParsedAmount, currency: &str) -> String {
    if currency.is_empty() {
        format_es(amount)
    } else {
        format!("{} {}", format_es(amount), currency)
    }
}

/// Scans every monetary mention in the text and returns the numerically
/// largest one, rendered. The largest mention is taken as the contract's
/// principal amount so partial installments never shadow the total.
pub fn principal_amount(text: &str) -> Option<String> {
    let mut best: Option<(ParsedAmount, String)> = None;

    for cap in MONEY_MENTION.captures_iter(text) {
        let m = match cap.get(1) {
            Some(m) => m,
            None => continue,
        };
        let parsed = match parse_amount(m.as_str()) {
            Some(p) => p,
            None => continue,
        };
        let currency = resolve_currency(text, m.start(), m.end(), cap.get(2).map(|c| c.as_str()));

        // Strictly greater, so the first of equal mentions wins
        let replace = match &best {
            Some((current, _)) => parsed.value > current.value,
            None => true,
        };
        if replace {
            best = Some((parsed, currency));
        }
    }

    best.map(|(p, cur)| render(&p, &cur))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn es_grouping_with_comma_decimal() {
        let p = parse_amount("1.900,50").unwrap();
        assert_eq!(p.value, 1900.50);
        assert!(p.cents);
    }

    #[test]
    fn en_grouping_with_dot_decimal() {
        let p = parse_amount("1,900.50").unwrap();
        assert_eq!(p.value, 1900.50);
        assert!(p.cents);
    }

    #[test]
    fn single_separator_with_three_digits_is_thousands() {
        let p = parse_amount("1.900").unwrap();
        assert_eq!(p.value, 1900.0);
        assert!(!p.cents);
    }

    #[test]
    fn single_separator_with_two_digits_is_decimal() {
        let p = parse_amount("1,50").unwrap();
        assert_eq!(p.value, 1.5);
        assert!(p.cents);
    }

    #[test]
    fn repeated_separator_is_pure_grouping() {
        let p = parse_amount("1.234.567").unwrap();
        assert_eq!(p.value, 1_234_567.0);
        assert!(!p.cents);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.23450"), None);
        assert_eq!(parse_amount("12a34"), None);
    }

    #[test]
    fn mixed_separators_accept_long_decimal_tails() {
        let p = parse_amount("1,234.567").unwrap();
        assert_eq!(p.value, 1234.567);
        assert!(p.cents);

        let p = parse_amount("1.234,567").unwrap();
        assert_eq!(p.value, 1234.567);
    }

    #[test]
    fn single_separator_decimal_tail_stays_capped_at_two() {
        assert_eq!(parse_amount("1,2345"), None);
    }

    #[test]
    fn rejects_amounts_beyond_the_monetary_bound() {
        assert_eq!(parse_amount("999.999.999.999.999.999"), None);
        assert_eq!(parse_amount("99999999999999999999"), None);
        // The bound itself is still accepted
        let p = parse_amount("1.000.000.000.000").unwrap();
        assert_eq!(p.value, 1_000_000_000_000.0);
    }

    #[test]
    fn formats_in_es_convention() {
        assert_eq!(format_es(&ParsedAmount { value: 1900.5, cents: true }), "1.900,50");
        assert_eq!(format_es(&ParsedAmount { value: 1900.0, cents: false }), "1.900");
        assert_eq!(format_es(&ParsedAmount { value: 50_000.0, cents: false }), "50.000");
        assert_eq!(format_es(&ParsedAmount { value: 600.0, cents: false }), "600");
        assert_eq!(format_es(&ParsedAmount { value: 1.5, cents: true }), "1,50");
    }

    #[test]
    fn explicit_currency_token_wins() {
        assert_eq!(resolve_currency("50.000 euros", 0, 6, Some("euros")), "€");
        assert_eq!(resolve_currency("600 dollars", 0, 3, Some("dollars")), "$");
    }

    #[test]
    fn window_scan_finds_nearby_symbol() {
        let text = "un precio de € 1.500 pagadero";
        assert_eq!(resolve_currency(text, 17, 22, None), "€");
        let text = "price of $ 600 payable";
        assert_eq!(resolve_currency(text, 11, 14, None), "$");
        assert_eq!(resolve_currency("plazo de 12 meses", 9, 11, None), "");
    }

    #[test]
    fn principal_amount_picks_largest_mention() {
        let text = "cuotas de 600 euros, precio total de 50.000 euros, fianza de 1.200 euros";
        assert_eq!(principal_amount(text).unwrap(), "50.000 €");
    }

    #[test]
    fn principal_amount_none_without_numbers() {
        assert_eq!(principal_amount("sin cantidades aquí"), None);
    }
}
