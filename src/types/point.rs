//! Geometric point value.

use std::fmt;

/// A PostgreSQL `point`, held as an `(x, y)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse the catalog text form `(x,y)`.
    ///
    /// Parentheses and whitespace are ignored; a missing or unreadable
    /// coordinate becomes `0.0`.
    pub fn parse(text: &str) -> Self {
        let cleaned: String = text.chars().filter(|c| *c != '(' && *c != ')').collect();
        let mut parts = cleaned.splitn(2, ',');

        let coord = |part: Option<&str>| {
            part.and_then(|p| p.trim().parse::<f64>().ok())
                .unwrap_or(0.0)
        };

        let x = coord(parts.next());
        let y = coord(parts.next());
        Self { x, y }
    }

    /// Parse the catalog text form `(x,y)`, requiring exactly two readable
    /// coordinates.
    pub fn try_parse(text: &str) -> Option<Self> {
        let cleaned: String = text.chars().filter(|c| *c != '(' && *c != ')').collect();
        let mut parts = cleaned.split(',');

        let x = parts.next()?.trim().parse::<f64>().ok()?;
        let y = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self { x, y })
    }

    /// Coordinates as an array.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl PartialEq<[f64; 2]> for Point {
    fn eq(&self, other: &[f64; 2]) -> bool {
        self.x == other[0] && self.y == other[1]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_text() {
        assert_eq!(Point::parse("(3.14, 4.53)"), [3.14, 4.53]);
        assert_eq!(Point::parse("(-1,2.5)"), [-1.0, 2.5]);
    }

    #[test]
    fn test_parse_missing_coordinate() {
        assert_eq!(Point::parse("(7)"), [7.0, 0.0]);
        assert_eq!(Point::parse(""), [0.0, 0.0]);
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(Point::try_parse("(3.14, 4.53)"), Some(Point::new(3.14, 4.53)));
        assert_eq!(Point::try_parse(" 1,2 "), Some(Point::new(1.0, 2.0)));
        assert_eq!(Point::try_parse("(7)"), None);
        assert_eq!(Point::try_parse("hello"), None);
        assert_eq!(Point::try_parse("(1,2,3)"), None);
        assert_eq!(Point::try_parse("(x,2)"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5,-2)");
    }
}
