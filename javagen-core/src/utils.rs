//! Shared string utilities for source rendering.

use std::fmt::Write;

/// Quote and escape a string literal (e.g., `a"b` -> `"a\"b"`)
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                // Control characters outside the BMP do not exist, one unit is enough
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Insert `separator` every `interval` characters counting from the end
/// (e.g., "1234567" with 3 -> "1_234_567"). An interval of 0 leaves the digits untouched.
pub fn group_digits(digits: &str, interval: usize, separator: char) -> String {
    if interval == 0 || digits.len() <= interval {
        return digits.to_string();
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + len / interval);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % interval == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("hello"), "\"hello\"");
        assert_eq!(quote_string(""), "\"\"");
        assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_string("line\nnext\ttab"), "\"line\\nnext\\ttab\"");
        assert_eq!(quote_string("\u{0}"), "\"\\u0000\"");
        assert_eq!(quote_string("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1234567", 3, '_'), "1_234_567");
        assert_eq!(group_digits("1234567", 0, '_'), "1234567");
        assert_eq!(group_digits("123", 3, '_'), "123");
        assert_eq!(group_digits("ffffffff", 4, '_'), "ffff_ffff");
        assert_eq!(group_digits("101", 1, '_'), "1_0_1");
        assert_eq!(group_digits("", 3, '_'), "");
    }

    mod proptest_grouping {
        use proptest::prelude::*;

        use super::super::group_digits;

        proptest! {
            #[test]
            fn grouping_preserves_digits(value in any::<u64>(), interval in 0usize..8) {
                let digits = value.to_string();
                let grouped = group_digits(&digits, interval, '_');
                prop_assert_eq!(grouped.replace('_', ""), digits.clone());
                if interval > 0 {
                    let runs: Vec<&str> = grouped.split('_').collect();
                    for run in &runs[1..] {
                        prop_assert_eq!(run.len(), interval);
                    }
                    prop_assert!(!runs[0].is_empty() && runs[0].len() <= interval);
                }
            }
        }
    }
}
