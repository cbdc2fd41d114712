use phf::{Map, phf_map};
use std::fmt;
use thiserror::Error;

/// Matplotlib single-letter color codes.
static COLOR_CODES: Map<char, Rgb> = phf_map! {
    'b' => Rgb(0, 0, 255),
    'g' => Rgb(0, 128, 0),
    'r' => Rgb(255, 0, 0),
    'c' => Rgb(0, 191, 191),
    'm' => Rgb(191, 0, 191),
    'y' => Rgb(191, 191, 0),
    'k' => Rgb(0, 0, 0),
    'w' => Rgb(255, 255, 255),
};

pub const DEFAULT_PALETTE: [&str; 7] = ["g", "c", "m", "y", "k", "b", "r"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PaletteError {
    #[error("Palette must contain at least one color")]
    Empty,
    #[error("Unrecognized color '{0}'. Expected a single-letter code (bgrcmykw) or '#rrggbb'.")]
    InvalidColor(String),
}

impl Rgb {
    pub fn parse(spec: &str) -> Result<Self, PaletteError> {
        let spec = spec.trim();
        let invalid = || PaletteError::InvalidColor(spec.to_string());

        if let Some(hex) = spec.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let mut chars = spec.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => COLOR_CODES.get(&code).copied().ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

/// Point colors, cycled by sample index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self, PaletteError> {
        let colors = specs
            .iter()
            .map(|s| Rgb::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    #[inline]
    pub fn color_for(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE
                .iter()
                .filter_map(|code| code.chars().next())
                .filter_map(|c| COLOR_CODES.get(&c).copied())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_letter_codes_and_hex() {
        assert_eq!(Rgb::parse("k").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::parse(" g ").unwrap(), Rgb(0, 128, 0));
        assert_eq!(Rgb::parse("#1f77b4").unwrap(), Rgb(0x1f, 0x77, 0xb4));
    }

    #[test]
    fn parse_rejects_unknown_specs() {
        assert!(matches!(Rgb::parse("q"), Err(PaletteError::InvalidColor(_))));
        assert!(matches!(Rgb::parse("gg"), Err(PaletteError::InvalidColor(_))));
        assert!(matches!(Rgb::parse("#12345"), Err(PaletteError::InvalidColor(_))));
        assert!(matches!(Rgb::parse("#zzzzzz"), Err(PaletteError::InvalidColor(_))));
        assert!(matches!(Rgb::parse(""), Err(PaletteError::InvalidColor(_))));
    }

    #[test]
    fn default_palette_cycles_by_index() {
        let palette = Palette::default();
        assert_eq!(palette.colors().len(), 7);
        assert_eq!(palette.color_for(0), Rgb::parse("g").unwrap());
        assert_eq!(palette.color_for(6), Rgb::parse("r").unwrap());
        assert_eq!(palette.color_for(7), palette.color_for(0));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::Empty));
        assert_eq!(Palette::parse::<&str>(&[]), Err(PaletteError::Empty));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb(255, 0, 16).to_string(), "#ff0010");
    }
}
