use std::str::FromStr;

/// Team identity of a marble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Black, Color::White, Color::Red, Color::Blue];

    /// One-letter token used in setup files and the text rendering
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
            Color::Red => 'R',
            Color::Blue => 'U',
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }
}

/// Returned when a token names none of the known colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct UnknownColor(pub String);

/// Accepts either the one-letter symbol or the full name, in any case.
impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch.to_ascii_uppercase()),
            _ => None,
        };
        Color::ALL
            .into_iter()
            .find(|c| single == Some(c.symbol()) || token.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| UnknownColor(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("B".parse::<Color>(), Ok(Color::Black));
        assert_eq!("w".parse::<Color>(), Ok(Color::White));
        assert_eq!("R".parse::<Color>(), Ok(Color::Red));
        assert_eq!("U".parse::<Color>(), Ok(Color::Blue));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("BLUE".parse::<Color>(), Ok(Color::Blue));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("X".parse::<Color>(), Err(UnknownColor("X".to_string())));
        assert!("".parse::<Color>().is_err());
        assert!("Bl".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_name() {
        assert_eq!(Color::Black.name(), "Black");
        assert_eq!(Color::Blue.symbol(), 'U');
    }
}
