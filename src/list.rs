//! Parsing of bracketed value lists such as `[0, 1, 5]`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Parse a bracketed, comma-separated list of non-negative integers.
///
/// Whitespace around the brackets, the commas and the numbers is ignored,
/// and `[]` is the empty list.
///
/// ```
/// use petrick_rs::list::parse_list;
///
/// assert_eq!(parse_list("[1, 2,3 ]").unwrap(), vec![1, 2, 3]);
/// assert!(parse_list("[]").unwrap().is_empty());
/// assert!(parse_list("1,2").is_err());
/// ```
pub fn parse_list(text: &str) -> Result<Vec<u32>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::MalformedList(text.to_string()))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return Err(Error::MalformedList(text.to_string()));
            }
            parse_number(item)
        })
        .collect()
}

pub fn parse_number(text: &str) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| Error::NotANumber(text.trim().to_string()))
}

/// A parsed value list, usable as a command-line argument type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueList(pub Vec<u32>);

impl FromStr for ValueList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_list(s).map(ValueList)
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("[0,1,5]").unwrap(), vec![0, 1, 5]);
        assert_eq!(parse_list("  [ 7 ]  ").unwrap(), vec![7]);
        assert_eq!(parse_list("[ ]").unwrap(), Vec::<u32>::new());
        // Duplicates are kept here and collapsed by the function
        assert_eq!(parse_list("[3,3]").unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(parse_list("1,2"), Err(Error::MalformedList(_))));
        assert!(matches!(parse_list("[1,2"), Err(Error::MalformedList(_))));
        assert!(matches!(parse_list("[1,,2]"), Err(Error::MalformedList(_))));
        assert!(matches!(parse_list("[1,]"), Err(Error::MalformedList(_))));
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(parse_list("[1,b]"), Err(Error::NotANumber(s)) if s == "b"));
        assert!(matches!(parse_list("[-1]"), Err(Error::NotANumber(_))));
        assert!(matches!(parse_number("four"), Err(Error::NotANumber(_))));
        assert_eq!(parse_number(" 4 ").unwrap(), 4);
    }

    #[test]
    fn test_value_list() {
        let list: ValueList = "[4, 2]".parse().unwrap();
        assert_eq!(list, ValueList(vec![4, 2]));
        assert_eq!(list.to_string(), "[4,2]");
    }
}
