use ratatui::style::Color;
use std::fmt;
use uuid::Uuid;

/// Identity for a decoded palette. Generated locally at decode time; the
/// wire format carries no identifier, so two palettes with identical
/// colors decoded separately are still distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteId(pub Uuid);

impl PaletteId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaletteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    pub id: PaletteId,
    pub colors: Vec<String>,
}

impl ColorPalette {
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            id: PaletteId::new(),
            colors,
        }
    }
}

/// Normalized RGB triple, each channel in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::Rgb(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_ids_are_unique_per_construction() {
        let a = ColorPalette::new(vec!["#FF0000".to_string()]);
        let b = ColorPalette::new(vec!["#FF0000".to_string()]);
        assert_eq!(a.colors, b.colors);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rgb_converts_to_terminal_color() {
        let c = Rgb {
            r: 1.0,
            g: 0.0,
            b: 0.5,
        };
        assert_eq!(c.to_color(), Color::Rgb(255, 0, 128));
    }
}
