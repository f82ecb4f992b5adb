//! Shot groups and the data source handed to a render pass.

use std::borrow::Cow;

use crate::types::{Color, FieldPoint};

/// A named, colored collection of landing points (typically one club)
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub color: Color,
    pub points: Vec<FieldPoint>,
}

impl Group {
    pub fn new(label: impl Into<String>, color: Color, points: Vec<FieldPoint>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }
}

/// Which groups a render pass draws.
///
/// The caller picks explicitly; clearing imported data means passing
/// `Samples` again, not mutating shared state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataSource {
    #[default]
    Samples,
    Imported(Vec<Group>),
}

impl DataSource {
    /// The groups this source stands for
    pub fn groups(&self) -> Cow<'_, [Group]> {
        match self {
            DataSource::Samples => Cow::Owned(sample_groups()),
            DataSource::Imported(groups) => Cow::Borrowed(groups),
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, DataSource::Samples)
    }
}

/// Group colors, handed out in order and reused once exhausted
pub const PALETTE: [Color; 15] = [
    Color::Rgb(0xFF, 0x6B, 0x6B),
    Color::Rgb(0x4E, 0xCD, 0xC4),
    Color::Rgb(0x45, 0xB7, 0xD1),
    Color::Rgb(0x96, 0xCE, 0xB4),
    Color::Rgb(0xFF, 0xEA, 0xA7),
    Color::Rgb(0xDD, 0xA0, 0xDD),
    Color::Rgb(0x98, 0xD8, 0xC8),
    Color::Rgb(0xF7, 0xDC, 0x6F),
    Color::Rgb(0xBB, 0x8F, 0xCE),
    Color::Rgb(0x85, 0xC1, 0xE9),
    Color::Rgb(0xF8, 0xC4, 0x71),
    Color::Rgb(0x82, 0xE0, 0xAA),
    Color::Rgb(0xF1, 0x94, 0x8A),
    Color::Rgb(0x85, 0xC1, 0xE9),
    Color::Rgb(0xD7, 0xBD, 0xE2),
];

/// Deterministic color for the `index`-th group
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()].clone()
}

/// Built-in demonstration groups shown when nothing has been imported
pub fn sample_groups() -> Vec<Group> {
    fn group(label: &str, color: &str, raw: &[(f64, f64)]) -> Group {
        Group::new(
            label,
            Color::named(color),
            raw.iter().map(|&(x, y)| FieldPoint::yards(x, y)).collect(),
        )
    }

    vec![
        group("Sample 1", "red", &[(30.0, 120.0), (35.0, 130.0), (40.0, 125.0)]),
        group("Sample 2", "blue", &[(-25.0, 80.0), (-30.0, 85.0), (-20.0, 75.0)]),
        group(
            "Sample 3",
            "green",
            &[(45.0, 220.0), (50.0, 230.0), (40.0, 210.0), (35.0, 225.0)],
        ),
        group(
            "Sample 4",
            "orange",
            &[(-40.0, 150.0), (-35.0, 160.0), (-45.0, 155.0), (-50.0, 145.0)],
        ),
        group(
            "Sample 5",
            "purple",
            &[(10.0, 250.0), (15.0, 260.0), (5.0, 255.0), (0.0, 245.0), (20.0, 265.0)],
        ),
        // Ring around the 25 yard mark
        group(
            "Sample 6",
            "black",
            &[
                (12.0, 25.0),
                (-12.0, 25.0),
                (0.0, 35.0),
                (0.0, 15.0),
                (8.5, 33.5),
                (-8.5, 16.5),
                (8.5, 16.5),
                (-8.5, 33.5),
            ],
        ),
    ]
}
