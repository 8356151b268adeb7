use crate::ColorRole;
use serde::Serialize;
use std::fmt;

/// Fill colors offered by the color pickers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    White,
    Blue,
    Red,
    Green,
    Brown,
    Yellow,
    Grey,
    Purple,
    Pink,
}

impl NamedColor {
    pub const ALL: [NamedColor; 10] = [
        Self::Black,
        Self::White,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Brown,
        Self::Yellow,
        Self::Grey,
        Self::Purple,
        Self::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::Grey => "grey",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// sRGB components (CSS named colors).
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Black => [0, 0, 0],
            Self::White => [255, 255, 255],
            Self::Blue => [0, 0, 255],
            Self::Red => [255, 0, 0],
            Self::Green => [0, 128, 0],
            Self::Brown => [165, 42, 42],
            Self::Yellow => [255, 255, 0],
            Self::Grey => [128, 128, 128],
            Self::Purple => [128, 0, 128],
            Self::Pink => [255, 192, 203],
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current fill for each color role.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Palette {
    pub alive: NamedColor,
    pub dead: NamedColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: NamedColor::Black,
            dead: NamedColor::White,
        }
    }
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> NamedColor {
        match role {
            ColorRole::Alive => self.alive,
            ColorRole::Dead => self.dead,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: NamedColor) {
        match role {
            ColorRole::Alive => self.alive = color,
            ColorRole::Dead => self.dead = color,
        }
    }
}
