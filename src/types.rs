//! Strongly-typed numeric primitives for field geometry (zero-cost newtypes).
//!
//! Field-space quantities are `Yards`; canvas-space quantities are raw `f64`
//! pixels carried in `glam::DVec2`. The two only meet inside
//! [`ScalingContext`](crate::scaling::ScalingContext).

use std::fmt;
use std::ops::{Add, Div, Neg, Sub};
use std::str::FromStr;

/// Distance in yards (field canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Yards(pub f64);

impl Yards {
    pub const ZERO: Yards = Yards(0.0);

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Yards {
    type Output = Yards;
    fn add(self, rhs: Yards) -> Yards { Yards(self.0 + rhs.0) }
}
impl Sub for Yards {
    type Output = Yards;
    fn sub(self, rhs: Yards) -> Yards { Yards(self.0 - rhs.0) }
}
impl Div<f64> for Yards {
    type Output = Yards;
    fn div(self, rhs: f64) -> Yards { Yards(self.0 / rhs) }
}
impl Neg for Yards {
    type Output = Yards;
    fn neg(self) -> Yards { Yards(-self.0) }
}

impl fmt::Display for Yards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in radians
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    pub const ZERO: Radians = Radians(0.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

/// A landing location in field space: `x` is the lateral offset from the
/// center line (positive = right), `y` the distance downfield.
pub type FieldPoint = Point<Yards>;

impl Point<Yards> {
    /// Shorthand for building a field point from raw yard values
    pub fn yards(x: f64, y: f64) -> Self {
        Point { x: Yards(x), y: Yards(y) }
    }
}

/// Render color of a group. The core treats it as an opaque attribute and
/// only ever hands its CSS form to the render surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    /// CSS representation (`#rrggbb` for RGB colors)
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Error returned when a color string cannot be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rgb` and bare alphabetic color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            // Byte slicing below needs single-byte characters
            if !hex.is_ascii() {
                return Err(err());
            }
            let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| err());
            return match hex.len() {
                6 => Ok(Color::Rgb(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                3 => {
                    let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                    Ok(Color::Rgb(short(0)?, short(1)?, short(2)?))
                }
                _ => Err(err()),
            };
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Color::Named(s.to_ascii_lowercase()))
        } else {
            Err(err())
        }
    }
}
