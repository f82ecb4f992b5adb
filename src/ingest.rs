//! CSV ingestion of shot data.
//!
//! Expected header columns (matched case-insensitively):
//! - `carry`: distance downfield, becomes the point's `y`
//! - `offline`: lateral offset, becomes the point's `x`
//! - `club` (optional): group label; without it every row joins one group
//! - `color` (optional): `#rrggbb`, `#rgb` or a color name; the first valid
//!   value in a group overrides its palette color
//!
//! Bad rows are dropped with a [`RowDiagnostic`]; loading fails only when
//! the header is unusable or no row survives.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::data::{DataSource, Group, palette_color};
use crate::errors::{InputError, RowDiagnostic, RowProblem, SourceContext};
use crate::types::{Color, FieldPoint};

pub const CARRY_COLUMN: &str = "carry";
pub const OFFLINE_COLUMN: &str = "offline";
pub const CLUB_COLUMN: &str = "club";
pub const COLOR_COLUMN: &str = "color";

/// Label used when the input has no club column
pub const DEFAULT_LABEL: &str = "All shots";

/// Result of a successful load
#[derive(Debug)]
pub struct Ingested {
    /// Groups in order of first appearance
    pub groups: Vec<Group>,
    /// One entry per rejected row
    pub diagnostics: Vec<RowDiagnostic>,
}

impl Ingested {
    pub fn total_points(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }

    pub fn into_source(self) -> DataSource {
        DataSource::Imported(self.groups)
    }
}

impl fmt::Display for Ingested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.groups.iter().map(|g| g.label.as_str()).collect();
        write!(
            f,
            "imported {} data points from {} clubs: {}",
            self.total_points(),
            self.groups.len(),
            labels.join(", ")
        )?;
        if !self.diagnostics.is_empty() {
            write!(f, " ({} rows skipped)", self.diagnostics.len())?;
        }
        Ok(())
    }
}

/// Column positions resolved from the header
struct Columns {
    carry: usize,
    offline: usize,
    club: Option<usize>,
    color: Option<usize>,
}

/// A group being collected, before palette colors are assigned
struct PendingGroup {
    label: String,
    points: Vec<FieldPoint>,
    color: Option<Color>,
}

/// One accepted row
struct Row {
    label: String,
    point: FieldPoint,
    color: Option<Color>,
}

/// Read and parse a CSV file
pub fn load_csv_file(path: &Path) -> Result<Ingested, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(&path.display().to_string(), &text)
}

/// Parse CSV text into shot groups.
///
/// `name` is only used to label diagnostics.
pub fn parse_csv(name: &str, text: &str) -> Result<Ingested, InputError> {
    let ctx = SourceContext::new(name, text);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(InputError::Empty);
    }

    let header_offset = headers.position().map(|p| p.byte() as usize).unwrap_or(0);
    let find = |column: &'static str| -> Result<usize, InputError> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| InputError::MissingColumn {
                column,
                src: ctx.named_source(),
                span: ctx.line_span(header_offset),
            })
    };
    let columns = Columns {
        carry: find(CARRY_COLUMN)?,
        offline: find(OFFLINE_COLUMN)?,
        club: headers.iter().position(|h| h.eq_ignore_ascii_case(CLUB_COLUMN)),
        color: headers.iter().position(|h| h.eq_ignore_ascii_case(COLOR_COLUMN)),
    };

    let mut order: Vec<PendingGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut diagnostics = Vec::new();

    for result in reader.records() {
        let (line, offset, row) = match result {
            Ok(record) => {
                let (line, offset) = record
                    .position()
                    .map(|p| (p.line(), p.byte() as usize))
                    .unwrap_or((0, 0));
                (line, offset, parse_row(&record, &columns))
            }
            Err(err) => {
                let (line, offset) = err
                    .position()
                    .map(|p| (p.line(), p.byte() as usize))
                    .unwrap_or((0, 0));
                (line, offset, Err(RowProblem::Unreadable))
            }
        };

        match row {
            Ok(row) => {
                let slot = *index.entry(row.label.clone()).or_insert_with(|| {
                    order.push(PendingGroup {
                        label: row.label,
                        points: Vec::new(),
                        color: None,
                    });
                    order.len() - 1
                });
                let group = &mut order[slot];
                group.points.push(row.point);
                if group.color.is_none() {
                    group.color = row.color;
                }
            }
            Err(problem) => {
                crate::log::warn!(line, %problem, "skipping row");
                diagnostics.push(RowDiagnostic {
                    line,
                    problem,
                    src: ctx.named_source(),
                    span: ctx.line_span(offset),
                });
            }
        }
    }

    if order.is_empty() {
        return Err(InputError::NoValidRows {
            skipped: diagnostics.len(),
            src: ctx.named_source(),
        });
    }

    let groups: Vec<Group> = order
        .into_iter()
        .enumerate()
        .map(|(i, pending)| {
            let color = pending.color.unwrap_or_else(|| palette_color(i));
            Group::new(pending.label, color, pending.points)
        })
        .collect();

    let ingested = Ingested { groups, diagnostics };
    crate::log::info!(
        points = ingested.total_points(),
        groups = ingested.groups.len(),
        skipped = ingested.diagnostics.len(),
        "ingested {}",
        name
    );
    Ok(ingested)
}

fn parse_row(record: &csv::StringRecord, columns: &Columns) -> Result<Row, RowProblem> {
    let carry = parse_number(record, columns.carry, CARRY_COLUMN)?;
    let offline = parse_number(record, columns.offline, OFFLINE_COLUMN)?;

    let label = match columns.club {
        Some(idx) => match record.get(idx) {
            Some(club) if !club.is_empty() => club.to_string(),
            _ => return Err(RowProblem::EmptyLabel),
        },
        None => DEFAULT_LABEL.to_string(),
    };

    // A bad color is cosmetic; the shot is kept and the palette takes over
    let color = columns
        .color
        .and_then(|idx| record.get(idx))
        .filter(|cell| !cell.is_empty())
        .and_then(|cell| match cell.parse::<Color>() {
            Ok(color) => Some(color),
            Err(_err) => {
                crate::log::warn!(err = %_err, "ignoring color");
                None
            }
        });

    Ok(Row {
        label,
        point: FieldPoint::yards(offline, carry),
        color,
    })
}

fn parse_number(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
) -> Result<f64, RowProblem> {
    let cell = match record.get(idx) {
        Some(cell) if !cell.is_empty() => cell,
        _ => return Err(RowProblem::MissingField(column)),
    };
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RowProblem::NotANumber(column)),
    }
}
