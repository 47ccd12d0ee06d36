//! Decimal tick patterns such as `###0.00` or `#,##0.0#`.
//!
//! Grammar: `prefix? int ('.' frac)? suffix?` where `int` is made of `#`,
//! `0` and `,` and `frac` of `0` followed by `#`.  A `0` is a digit that is
//! always printed, a `#` one that is printed only when significant.  The
//! distance between the last `,` and the end of `int` is the grouping size.
//! Anything before the first or after the last pattern character is copied
//! verbatim.

use std::fmt;

use crate::core::constants::DEFAULT_TICK_FORMAT;

/// Compiled decimal pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    min_int: usize,
    group: usize,
    min_frac: usize,
    max_frac: usize,
}

#[inline]
const fn is_digit_symbol(c: char) -> bool {
    matches!(c, '#' | '0' | '.')
}

impl TickFormat {
    /// Compile `pattern`.  Never fails; a pattern without digit symbols
    /// formats whole numbers between its literals.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let start = chars.iter().position(|&c| is_digit_symbol(c));
        let end = chars.iter().rposition(|&c| is_digit_symbol(c));

        let (Some(start), Some(end)) = (start, end) else {
            return Self {
                pattern: pattern.to_owned(),
                prefix: pattern.to_owned(),
                suffix: String::new(),
                min_int: 1,
                group: 0,
                min_frac: 0,
                max_frac: 0,
            };
        };

        let body = &chars[start..=end];
        let (int_part, frac_part) = match body.iter().position(|&c| c == '.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, &[][..]),
        };

        let group = int_part
            .iter()
            .rposition(|&c| c == ',')
            .map_or(0, |comma| {
                int_part[comma + 1..]
                    .iter()
                    .filter(|&&c| c == '#' || c == '0')
                    .count()
            });
        let min_frac = frac_part.iter().filter(|&&c| c == '0').count();
        let max_frac = frac_part
            .iter()
            .filter(|&&c| c == '0' || c == '#')
            .count();

        Self {
            pattern: pattern.to_owned(),
            prefix: chars[..start].iter().collect(),
            suffix: chars[end + 1..].iter().collect(),
            min_int: int_part.iter().filter(|&&c| c == '0').count(),
            group,
            min_frac,
            max_frac,
        }
    }

    /// The pattern this format was compiled from.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render `value` according to the pattern.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{sign}{}∞{}", self.prefix, self.suffix);
        }

        let digits = format!("{:.*}", self.max_frac, value.abs());
        let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut frac = frac_digits;
        while frac.len() > self.min_frac && frac.ends_with('0') {
            frac = &frac[..frac.len() - 1];
        }

        let significant = int_digits.trim_start_matches('0');
        let mut int = "0".repeat(self.min_int.saturating_sub(significant.len()));
        int.push_str(significant);
        if int.is_empty() && frac.is_empty() {
            int.push('0');
        }
        if self.group > 0 {
            int = group_digits(&int, self.group);
        }

        let is_zero = !int.bytes().chain(frac.bytes()).any(|b| matches!(b, b'1'..=b'9'));
        let sign = if is_zero { "" } else { sign };

        let mut out = String::with_capacity(
            sign.len() + self.prefix.len() + int.len() + frac.len() + self.suffix.len() + 1,
        );
        out.push_str(sign);
        out.push_str(&self.prefix);
        out.push_str(&int);
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Insert `,` every `size` digits counting from the right.
fn group_digits(int: &str, size: usize) -> String {
    let len = int.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for TickFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_FORMAT)
    }
}

impl From<&str> for TickFormat {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&String> for TickFormat {
    #[inline]
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
