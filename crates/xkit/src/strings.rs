//! String helpers: trimming, case conversion and random identifiers

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

static KEBAB_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([a-z])").expect("kebab regex is valid"));
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel regex is valid"));

/// Removes every leading and trailing repetition of `pattern`
///
/// ```
/// use xkit::strings::strip;
///
/// assert_eq!(strip("//a/b//", "/"), "a/b");
/// assert_eq!(strip("abab-x-abab", "ab"), "-x-");
/// ```
pub fn strip<'a>(s: &'a str, pattern: &str) -> &'a str {
    if pattern.is_empty() {
        return s;
    }

    let mut out = s;
    while let Some(rest) = out.strip_prefix(pattern) {
        out = rest;
    }
    while let Some(rest) = out.strip_suffix(pattern) {
        out = rest;
    }
    out
}

/// Removes at most one leading and one trailing occurrence of `pattern`
pub fn strip_once<'a>(s: &'a str, pattern: &str) -> &'a str {
    if pattern.is_empty() {
        return s;
    }

    let s = s.strip_prefix(pattern).unwrap_or(s);
    s.strip_suffix(pattern).unwrap_or(s)
}

/// `background-color` → `backgroundColor`
pub fn camel(s: &str) -> String {
    KEBAB_SEGMENT
        .replace_all(s, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// `backgroundColor` → `background-color`
///
/// Vendor-prefixed `webkit*` names gain a leading dash (`-webkit-...`).
pub fn re_camel(s: &str) -> String {
    let prefixed;
    let input = if s.starts_with("webkit") {
        prefixed = format!("-{}", s);
        prefixed.as_str()
    } else {
        s
    };

    CAMEL_BOUNDARY
        .replace_all(input, "$1-$2")
        .to_lowercase()
}

/// Uniform integer in `0..max` (0 when `max` is 0)
pub fn rand_below(max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..max)
}

/// Uniform integer in `min..=max`
pub fn rand_between(min: usize, max: usize) -> usize {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

/// One random ASCII letter
pub fn random_az() -> char {
    let letters = [UPPER, LOWER].concat();
    pick(&letters, &mut rand::thread_rng())
}

/// Random identifier of `length` characters
///
/// The first character is always a letter; the rest are letters or digits.
///
/// ```
/// use xkit::strings::make_id;
///
/// let id = make_id(20);
/// assert_eq!(id.len(), 20);
/// assert!(id.chars().next().unwrap().is_ascii_alphabetic());
/// ```
pub fn make_id(length: usize) -> String {
    let letters = [UPPER, LOWER].concat();
    let alphanumeric = [UPPER, LOWER, DIGITS].concat();
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|i| {
            if i == 0 {
                pick(&letters, &mut rng)
            } else {
                pick(&alphanumeric, &mut rng)
            }
        })
        .collect()
}

fn pick<R: Rng>(charset: &str, rng: &mut R) -> char {
    let bytes = charset.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip("--x--", "-"), "x");
        assert_eq!(strip("x", ""), "x");
        assert_eq!(strip("----", "-"), "");
    }

    #[test]
    fn test_strip_once() {
        assert_eq!(strip_once("--x--", "-"), "-x-");
        assert_eq!(strip_once("x", "-"), "x");
    }

    #[test]
    fn test_camel_round_trip() {
        assert_eq!(camel("background-color"), "backgroundColor");
        assert_eq!(camel("plain"), "plain");
        assert_eq!(re_camel("backgroundColor"), "background-color");
        assert_eq!(re_camel("webkitTransform"), "-webkit-transform");
    }

    #[test]
    fn test_random_ranges() {
        for _ in 0..50 {
            assert!(rand_below(3) < 3);
            let n = rand_between(2, 4);
            assert!((2..=4).contains(&n));
        }
        assert_eq!(rand_below(0), 0);
        assert_eq!(rand_between(5, 5), 5);
        assert!(random_az().is_ascii_alphabetic());
    }

    #[test]
    fn test_make_id_charset() {
        let id = make_id(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(make_id(0), "");
    }
}
