//! Display utilities for rule sets and prompts

use std::fmt::{self, Display, Write};

/// Write `xs` separated by `separator`, with `last_separator` before the final element
fn joined(
    w: &mut impl Write,
    xs: &[impl Display],
    separator: &str,
    last_separator: &str,
) -> fmt::Result {
    let last_idx = xs.len().saturating_sub(1);
    for (idx, v) in xs.iter().enumerate() {
        match idx {
            0 => {}
            _ if idx == last_idx => w.write_str(last_separator)?,
            _ => w.write_str(separator)?,
        }
        write!(w, "{}", v)?;
    }
    Ok(())
}

/// Comma separated list, e.g. `1, 2, 4`
#[inline]
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    joined(w, xs, ", ", ", ")
}

/// Human readable choice list, e.g. `1,2 or 4`
#[inline]
pub fn alternatives(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    joined(w, xs, ",", " or ")
}

fn enclosed<W>(
    w: &mut W,
    open: char,
    close: char,
    inner: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result
where
    W: Write,
{
    w.write_char(open)?;
    inner(w)?;
    w.write_char(close)
}

pub fn parens<W>(w: &mut W, inner: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    enclosed(w, '(', ')', inner)
}

pub fn braces<W>(w: &mut W, inner: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    enclosed(w, '{', '}', inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
        let mut s = String::new();
        f(&mut s).unwrap();
        s
    }

    #[test]
    fn alternatives_formatting() {
        assert_eq!(render(|s| alternatives(s, &[] as &[u32])), "");
        assert_eq!(render(|s| alternatives(s, &[3])), "3");
        assert_eq!(render(|s| alternatives(s, &[1, 2])), "1 or 2");
        assert_eq!(render(|s| alternatives(s, &[1, 2, 4])), "1,2 or 4");
    }

    #[test]
    fn nested_brackets() {
        assert_eq!(render(|s| commas(s, &[1, 2, 4])), "1, 2, 4");
        assert_eq!(
            render(|s| parens(s, |s| braces(s, |s| commas(s, &[5, 6])))),
            "({5, 6})"
        );
        assert_eq!(render(|s| braces(s, |_| Ok(()))), "{}");
    }
}
