//! Parsing and formatting of persisted annotation records.
//!
//! One record per line, space separated: `class_id cx cy w h`, with
//! `class_id` a non-negative integer and the remaining four fields
//! floating-point values in `[0, 1]` normalized by the image dimensions.
//! A file with zero lines denotes an image with no labeled objects and is
//! valid.

use std::fmt;
use std::str::FromStr;

/// A labeled bounding box in normalized center format.
///
/// `cx`, `cy` locate the box center and `w`, `h` its extent, all scaled
/// to `[0, 1]` by the image width/height. The class id is never altered
/// by geometric transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    /// Class label of the object.
    pub class_id: u32,
    /// X-coordinate of the box center, normalized by image width.
    pub cx: f64,
    /// Y-coordinate of the box center, normalized by image height.
    pub cy: f64,
    /// Box width, normalized by image width.
    pub w: f64,
    /// Box height, normalized by image height.
    pub h: f64,
}

/// An error type for malformed annotation records.
///
/// Parsing faults are surfaced to the caller before a record reaches the
/// projection engine; the projectors themselves assume well-formed input.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AnnotationError {
    /// The record does not have exactly five fields.
    #[error("Expected 5 fields in annotation record, got {0}")]
    InvalidFieldCount(usize),

    /// The class id field is not a non-negative integer.
    #[error("Invalid class id: {0:?}")]
    InvalidClassId(String),

    /// A coordinate field is not a floating-point number.
    #[error("Invalid coordinate value: {0:?}")]
    InvalidCoordinate(String),

    /// A coordinate field is outside the normalized `[0, 1]` range.
    #[error("Coordinate value {0} out of range [0, 1]")]
    OutOfRange(f64),
}

impl FromStr for Annotation {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(AnnotationError::InvalidFieldCount(fields.len()));
        }

        let class_id = fields[0]
            .parse::<u32>()
            .map_err(|_| AnnotationError::InvalidClassId(fields[0].to_string()))?;

        let mut coords = [0.0f64; 4];
        for (coord, field) in coords.iter_mut().zip(&fields[1..]) {
            let value = field
                .parse::<f64>()
                .map_err(|_| AnnotationError::InvalidCoordinate(field.to_string()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(AnnotationError::OutOfRange(value));
            }
            *coord = value;
        }

        Ok(Annotation {
            class_id,
            cx: coords[0],
            cy: coords[1],
            w: coords[2],
            h: coords[3],
        })
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.class_id, self.cx, self.cy, self.w, self.h
        )
    }
}

/// Parses a whole annotation file body, one record per line.
///
/// Blank lines are ignored; an empty body yields an empty set. Record
/// order is preserved.
///
/// # Errors
///
/// Returns the first parsing fault encountered.
pub fn parse_annotations(body: &str) -> Result<Vec<Annotation>, AnnotationError> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Formats annotations back to the persisted record form, one per line.
pub fn format_annotations(annotations: &[Annotation]) -> String {
    let mut out = String::new();
    for ann in annotations {
        out.push_str(&ann.to_string());
        out.push('\n');
    }
    out
}
