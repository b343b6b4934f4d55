//! Closed style vocabularies accepted by the chart renderer.
//!
//! Every style value a user can pick comes from one of these enums, so only
//! known markers, colors, dash patterns, and hatches ever reach `viz`. Each
//! type also knows the menu it is picked from and the default used on an
//! empty answer.

use crate::prompt::{Menu, MenuDefault, MenuError};

/// Point marker for line plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Star,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::Circle, Marker::Square, Marker::Star];

    pub fn name(self) -> &'static str {
        match self {
            Marker::Circle => "Circle",
            Marker::Square => "Square",
            Marker::Star => "Star",
        }
    }

    /// Conventional plotting symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Marker::Circle => "o",
            Marker::Square => "s",
            Marker::Star => "*",
        }
    }

    pub fn menu() -> Result<Menu<Marker>, MenuError> {
        Menu::from_pairs("Marker Options:", Self::ALL.map(|m| (m.name(), m)))
    }

    pub fn default_choice() -> MenuDefault<Marker> {
        MenuDefault::new(Marker::Circle.name(), Marker::Circle)
    }
}

/// Named fill/stroke colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Orange,
    Pink,
}

impl NamedColor {
    /// Full palette offered for bars and pie slices.
    pub const PALETTE: [NamedColor; 7] = [
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Purple,
        NamedColor::Orange,
        NamedColor::Pink,
    ];

    /// Reduced set offered for line plots.
    pub const LINE: [NamedColor; 3] = [NamedColor::Red, NamedColor::Blue, NamedColor::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "Red",
            NamedColor::Blue => "Blue",
            NamedColor::Yellow => "Yellow",
            NamedColor::Green => "Green",
            NamedColor::Purple => "Purple",
            NamedColor::Orange => "Orange",
            NamedColor::Pink => "Pink",
        }
    }

    /// CSS keyword values (`red`, `blue`, ...).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Red => (255, 0, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Green => (0, 128, 0),
            NamedColor::Purple => (128, 0, 128),
            NamedColor::Orange => (255, 165, 0),
            NamedColor::Pink => (255, 192, 203),
        }
    }

    pub fn line_menu() -> Result<Menu<NamedColor>, MenuError> {
        Menu::from_pairs("Color Options:", Self::LINE.map(|c| (c.name(), c)))
    }

    pub fn palette_menu() -> Result<Menu<NamedColor>, MenuError> {
        Menu::from_pairs("Color Options:", Self::PALETTE.map(|c| (c.name(), c)))
    }

    pub fn line_default() -> MenuDefault<NamedColor> {
        MenuDefault::new(NamedColor::Red.name(), NamedColor::Red)
    }

    pub fn palette_default() -> MenuDefault<NamedColor> {
        MenuDefault::new(NamedColor::Blue.name(), NamedColor::Blue)
    }
}

/// Stroke pattern for line plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    DashDotted,
}

impl LineStyle {
    pub const ALL: [LineStyle; 4] = [
        LineStyle::Solid,
        LineStyle::Dotted,
        LineStyle::Dashed,
        LineStyle::DashDotted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineStyle::Solid => "Solid",
            LineStyle::Dotted => "Dotted",
            LineStyle::Dashed => "Dashed",
            LineStyle::DashDotted => "Dashed-Dotted",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dotted => ":",
            LineStyle::Dashed => "--",
            LineStyle::DashDotted => "-.",
        }
    }

    /// Alternating on/off run lengths in pixels for a 2px stroke; empty means solid.
    pub fn dash_pattern(self) -> &'static [u32] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dotted => &[2, 4],
            LineStyle::Dashed => &[10, 6],
            LineStyle::DashDotted => &[10, 4, 2, 4],
        }
    }

    pub fn menu() -> Result<Menu<LineStyle>, MenuError> {
        Menu::from_pairs("Line Style Options:", Self::ALL.map(|s| (s.name(), s)))
    }

    pub fn default_choice() -> MenuDefault<LineStyle> {
        MenuDefault::new(LineStyle::Solid.name(), LineStyle::Solid)
    }
}

/// Fill pattern drawn over pie wedges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hatch {
    ForwardSlash,
    Backslash,
    Vertical,
    Horizontal,
    Cross,
    None,
}

impl Hatch {
    pub const ALL: [Hatch; 6] = [
        Hatch::ForwardSlash,
        Hatch::Backslash,
        Hatch::Vertical,
        Hatch::Horizontal,
        Hatch::Cross,
        Hatch::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Hatch::ForwardSlash => "/ (forward slash)",
            Hatch::Backslash => "\\ (backslash)",
            Hatch::Vertical => "| (vertical)",
            Hatch::Horizontal => "- (horizontal)",
            Hatch::Cross => "+ (cross)",
            Hatch::None => "None",
        }
    }

    /// Hatch symbol; `""` for no hatch.
    pub fn symbol(self) -> &'static str {
        match self {
            Hatch::ForwardSlash => "/",
            Hatch::Backslash => "\\",
            Hatch::Vertical => "|",
            Hatch::Horizontal => "-",
            Hatch::Cross => "+",
            Hatch::None => "",
        }
    }

    /// Stroke directions as unit vectors in pixel space (y grows downward).
    pub fn directions(self) -> &'static [(f64, f64)] {
        const DIAG: f64 = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Hatch::ForwardSlash => &[(DIAG, -DIAG)],
            Hatch::Backslash => &[(DIAG, DIAG)],
            Hatch::Vertical => &[(0.0, 1.0)],
            Hatch::Horizontal => &[(1.0, 0.0)],
            Hatch::Cross => &[(0.0, 1.0), (1.0, 0.0)],
            Hatch::None => &[],
        }
    }

    pub fn menu() -> Result<Menu<Hatch>, MenuError> {
        Menu::from_pairs("Hatch Pattern Options:", Self::ALL.map(|h| (h.label(), h)))
    }

    pub fn default_choice() -> MenuDefault<Hatch> {
        MenuDefault::new(Hatch::None.label(), Hatch::None)
    }
}
