//! Input model for the eight coordinates of two segments.
//!
//! State changes go through [`update`], which consumes a `Form` and a `FormMsg` and
//! returns the next `Form`. Each coordinate is addressed by a typed [`Field`].

use std::fmt;

use segisect::{Segment, Vec2};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Which {
    First,
    Second,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One coordinate slot, e.g. `segment2.end.x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub segment: Which,
    pub endpoint: Endpoint,
    pub axis: Axis,
}

impl Field {
    pub const fn new(segment: Which, endpoint: Endpoint, axis: Axis) -> Self {
        Self {
            segment,
            endpoint,
            axis,
        }
    }

    /// Entry order: segment1 start, segment1 end, segment2 start, segment2 end; x before y.
    pub const ALL: [Field; 8] = [
        Field::new(Which::First, Endpoint::Start, Axis::X),
        Field::new(Which::First, Endpoint::Start, Axis::Y),
        Field::new(Which::First, Endpoint::End, Axis::X),
        Field::new(Which::First, Endpoint::End, Axis::Y),
        Field::new(Which::Second, Endpoint::Start, Axis::X),
        Field::new(Which::Second, Endpoint::Start, Axis::Y),
        Field::new(Which::Second, Endpoint::End, Axis::X),
        Field::new(Which::Second, Endpoint::End, Axis::Y),
    ];

    fn slot(self) -> usize {
        let s = match self.segment {
            Which::First => 0,
            Which::Second => 4,
        };
        let e = match self.endpoint {
            Endpoint::Start => 0,
            Endpoint::End => 2,
        };
        let a = match self.axis {
            Axis::X => 0,
            Axis::Y => 1,
        };
        s + e + a
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self.segment {
            Which::First => "segment1",
            Which::Second => "segment2",
        };
        let e = match self.endpoint {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        };
        let a = match self.axis {
            Axis::X => "x",
            Axis::Y => "y",
        };
        write!(f, "{s}.{e}.{a}")
    }
}

/// Content of one coordinate slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Empty,
    /// Text that does not parse as a number.
    Invalid(String),
    Value(f64),
}

impl Entry {
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return Entry::Empty;
        }
        match t.parse::<f64>() {
            Ok(v) => Entry::Value(v),
            Err(_) => Entry::Invalid(raw.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("field {0} is empty")]
    Missing(Field),
    #[error("field {field} is not a number: {raw:?}")]
    NotNumeric { field: Field, raw: String },
    #[error("field {field} is not finite")]
    NotFinite { field: Field },
}

/// Edit applied by [`update`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormMsg {
    /// Raw text typed into a field.
    Input { field: Field, raw: String },
}

/// All eight coordinates; starts at zero everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    entries: [Entry; 8],
}

impl Default for Form {
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|_| Entry::Value(0.0)),
        }
    }
}

/// Next form state after `msg`.
pub fn update(form: Form, msg: FormMsg) -> Form {
    match msg {
        FormMsg::Input { field, raw } => form.with(field, Entry::parse(&raw)),
    }
}

impl Form {
    /// Feed raw strings into the fields in [`Field::ALL`] order.
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        Field::ALL
            .iter()
            .zip(raw)
            .fold(Form::default(), |form, (&field, r)| {
                update(
                    form,
                    FormMsg::Input {
                        field,
                        raw: r.as_ref().to_string(),
                    },
                )
            })
    }

    fn with(mut self, field: Field, entry: Entry) -> Self {
        self.entries[field.slot()] = entry;
        self
    }

    fn value(&self, field: Field) -> Result<f64, FormError> {
        match &self.entries[field.slot()] {
            Entry::Empty => Err(FormError::Missing(field)),
            Entry::Invalid(raw) => Err(FormError::NotNumeric {
                field,
                raw: raw.clone(),
            }),
            Entry::Value(v) if !v.is_finite() => Err(FormError::NotFinite { field }),
            Entry::Value(v) => Ok(*v),
        }
    }

    fn point(&self, segment: Which, endpoint: Endpoint) -> Result<Vec2<f64>, FormError> {
        Ok(Vec2::new(
            self.value(Field::new(segment, endpoint, Axis::X))?,
            self.value(Field::new(segment, endpoint, Axis::Y))?,
        ))
    }

    fn segment(&self, which: Which) -> Result<Segment, FormError> {
        Ok(Segment::new(
            self.point(which, Endpoint::Start)?,
            self.point(which, Endpoint::End)?,
        ))
    }

    /// Both segments, or the first offending field in entry order.
    pub fn submit(&self) -> Result<(Segment, Segment), FormError> {
        Ok((self.segment(Which::First)?, self.segment(Which::Second)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S2_END_X: Field = Field::new(Which::Second, Endpoint::End, Axis::X);

    #[test]
    fn field_names_and_slots() {
        let names: Vec<String> = Field::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names[0], "segment1.start.x");
        assert_eq!(names[3], "segment1.end.y");
        assert_eq!(names[6], "segment2.end.x");
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(f.slot(), i);
        }
    }

    #[test]
    fn submit_builds_both_segments() {
        let form = Form::from_raw(&["0", "0", "2", "2", "0", "2", "2.5", "-1e1"]);
        let (a, b) = form.submit().unwrap();
        assert_eq!(a, Segment::from_coords(0.0, 0.0, 2.0, 2.0));
        assert_eq!(b, Segment::from_coords(0.0, 2.0, 2.5, -10.0));
    }

    #[test]
    fn blank_and_garbage_block_submission() {
        let form = Form::from_raw(&["0", "0", "1", "1", "0", "1", " ", "1"]);
        assert_eq!(form.submit(), Err(FormError::Missing(S2_END_X)));

        let form = update(
            form,
            FormMsg::Input {
                field: S2_END_X,
                raw: "abc".into(),
            },
        );
        assert_eq!(
            form.submit(),
            Err(FormError::NotNumeric {
                field: S2_END_X,
                raw: "abc".into()
            })
        );
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "field segment2.end.x is not a number: \"abc\"");
    }

    #[test]
    fn infinite_values_are_rejected() {
        let form = Form::from_raw(&["inf", "0", "1", "1", "0", "1", "1", "1"]);
        // Parses as a number but still blocks submission.
        assert_eq!(&form.entries[0], &Entry::Value(f64::INFINITY));
        assert_eq!(
            form.submit(),
            Err(FormError::NotFinite {
                field: Field::ALL[0]
            })
        );
        let form = Form::from_raw(&["0", "0", "1", "1", "0", "1", "1", "-inf"]);
        assert_eq!(
            form.submit(),
            Err(FormError::NotFinite {
                field: Field::ALL[7]
            })
        );
    }

    #[test]
    fn update_returns_new_state() {
        let before = Form::default();
        let after = update(
            before.clone(),
            FormMsg::Input {
                field: S2_END_X,
                raw: String::new(),
            },
        );
        assert_eq!(&before.entries[S2_END_X.slot()], &Entry::Value(0.0));
        assert_eq!(&after.entries[S2_END_X.slot()], &Entry::Empty);
        assert!(before.submit().is_ok());
        assert_eq!(after.submit(), Err(FormError::Missing(S2_END_X)));
    }
}
