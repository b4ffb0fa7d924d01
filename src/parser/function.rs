//! Shared tokenizing for CSS functional notation: `name(a, b, c[, d])` and
//! the space-separated `name(a b c[ / d])` form.

/// Arguments of a color function, split but not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgs<'a> {
    pub channels: [&'a str; 3],
    pub alpha: Option<&'a str>,
}

/// Return the text between the parentheses if `input` is a call to one of `names`.
///
/// `input` is expected trimmed and lowercased. Whitespace between the name and
/// `(` is not allowed, matching CSS.
pub fn function_body<'a>(input: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        input
            .strip_prefix(name)?
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

/// True when `input` starts like a call to one of `names`, whether or not the
/// rest is well formed. Used to tell "not this format" from "broken value".
pub fn looks_like_call(input: &str, names: &[&str]) -> bool {
    names.iter().any(|name| {
        input
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('('))
    })
}

/// Split a function body into three channels and an optional alpha.
///
/// Comma syntax takes 3 or 4 comma-separated values; space syntax takes 3
/// whitespace-separated values and an optional `/ alpha`. The two never mix.
/// Returns None on any other shape.
pub fn split_args(body: &str) -> Option<FunctionArgs<'_>> {
    if body.contains(',') {
        if body.contains('/') {
            return None;
        }
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty() || p.contains(char::is_whitespace)) {
            return None;
        }
        return match parts.as_slice() {
            [a, b, c] => Some(FunctionArgs { channels: [*a, *b, *c], alpha: None }),
            [a, b, c, d] => Some(FunctionArgs { channels: [*a, *b, *c], alpha: Some(*d) }),
            _ => None,
        };
    }

    let (color_part, alpha) = match body.split_once('/') {
        Some((head, tail)) => {
            let tail = tail.trim();
            if tail.is_empty() || tail.contains(char::is_whitespace) || tail.contains('/') {
                return None;
            }
            (head, Some(tail))
        }
        None => (body, None),
    };

    let parts: Vec<&str> = color_part.split_whitespace().collect();
    match parts.as_slice() {
        [a, b, c] => Some(FunctionArgs { channels: [*a, *b, *c], alpha }),
        _ => None,
    }
}

/// Parse a finite CSS number. Rejects `inf`, `nan` and friends that
/// `f64::from_str` would otherwise accept.
pub fn parse_number(token: &str) -> Option<f64> {
    if !token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e'))
    {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `N%` into N. Returns None when the `%` is missing.
pub fn parse_percentage(token: &str) -> Option<f64> {
    parse_number(token.strip_suffix('%')?)
}

/// Alpha as a number in [0, 1] or a percentage in [0%, 100%].
pub fn parse_alpha(token: &str) -> Option<f64> {
    if token.ends_with('%') {
        let pct = parse_percentage(token)?;
        return (0.0..=100.0).contains(&pct).then_some(pct / 100.0);
    }
    let a = parse_number(token)?;
    (0.0..=1.0).contains(&a).then_some(a)
}

/// Round a 0-255 float to the nearest channel value.
pub fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── function_body ──

    #[test]
    fn body_extracted() {
        assert_eq!(function_body("rgb(1, 2, 3)", &["rgb", "rgba"]), Some("1, 2, 3"));
        assert_eq!(function_body("rgba(1,2,3,0.5)", &["rgb", "rgba"]), Some("1,2,3,0.5"));
    }

    #[test]
    fn body_requires_closing_paren() {
        assert_eq!(function_body("rgb(1, 2, 3", &["rgb"]), None);
    }

    #[test]
    fn body_rejects_other_names() {
        assert_eq!(function_body("hsl(1, 2%, 3%)", &["rgb", "rgba"]), None);
        assert_eq!(function_body("rgb (1, 2, 3)", &["rgb"]), None);
    }

    #[test]
    fn looks_like_call_ignores_tail() {
        assert!(looks_like_call("rgb(garbage", &["rgb"]));
        assert!(!looks_like_call("rgbx(1, 2, 3)", &["rgb"]));
        assert!(!looks_like_call("red", &["rgb"]));
    }

    // ── split_args ──

    #[test]
    fn comma_three_args() {
        let args = split_args(" 255 , 0,128 ").unwrap();
        assert_eq!(args.channels, ["255", "0", "128"]);
        assert_eq!(args.alpha, None);
    }

    #[test]
    fn comma_four_args() {
        let args = split_args("0, 0, 0, 0.5").unwrap();
        assert_eq!(args.alpha, Some("0.5"));
    }

    #[test]
    fn space_with_slash_alpha() {
        let args = split_args("10 20 30 / 50%").unwrap();
        assert_eq!(args.channels, ["10", "20", "30"]);
        assert_eq!(args.alpha, Some("50%"));
    }

    #[test]
    fn wrong_arity_rejected() {
        assert_eq!(split_args("1, 2"), None);
        assert_eq!(split_args("1, 2, 3, 4, 5"), None);
        assert_eq!(split_args("1 2"), None);
        assert_eq!(split_args("1 2 3 4"), None);
        assert_eq!(split_args("1, 2, , 3"), None);
    }

    #[test]
    fn mixed_syntax_rejected() {
        assert_eq!(split_args("1, 2, 3 / 0.5"), None);
        assert_eq!(split_args("1 2, 3"), None);
        assert_eq!(split_args("1 2 3 /"), None);
    }

    // ── numbers ──

    #[test]
    fn numbers() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn percentages() {
        assert_eq!(parse_percentage("50%"), Some(50.0));
        assert_eq!(parse_percentage("50"), None);
    }

    #[test]
    fn alpha_ranges() {
        assert_eq!(parse_alpha("0.25"), Some(0.25));
        assert_eq!(parse_alpha("25%"), Some(0.25));
        assert_eq!(parse_alpha("1"), Some(1.0));
        assert_eq!(parse_alpha("1.5"), None);
        assert_eq!(parse_alpha("-0.1"), None);
        assert_eq!(parse_alpha("150%"), None);
    }
}
