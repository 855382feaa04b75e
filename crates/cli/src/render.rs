//! Output for intersection results: plain text, JSON and plot traces.

use segisect::{Intersection, Segment, Vec2};
use serde::Serialize;
use serde_json::{json, Value};

fn fmt_point(p: Vec2<f64>) -> String {
    format!("({}, {})", p.x, p.y)
}

pub fn describe_segment(s: Segment) -> String {
    format!("{} - {}", fmt_point(s.start), fmt_point(s.end))
}

/// Human-readable verdict.
pub fn text(result: Option<Intersection>) -> String {
    match result {
        None => "Segments do not intersect".to_string(),
        Some(Intersection::Point(p)) => {
            format!("Segments intersect: YES\nIntersection point: {}", fmt_point(p))
        }
        Some(Intersection::Segment { start, end }) => format!(
            "Segments intersect: YES\nOverlapping segment: {}",
            describe_segment(Segment::new(start, end))
        ),
    }
}

fn point_json(p: Vec2<f64>) -> Value {
    json!({ "x": p.x, "y": p.y })
}

pub fn segment_json(s: Segment) -> Value {
    json!({ "start": point_json(s.start), "end": point_json(s.end) })
}

/// `{"type":"point",x,y}`, `{"type":"segment",start,end}` or `null`.
pub fn json(result: Option<Intersection>) -> Value {
    match result {
        None => Value::Null,
        Some(Intersection::Point(p)) => json!({ "type": "point", "x": p.x, "y": p.y }),
        Some(Intersection::Segment { start, end }) => json!({
            "type": "segment",
            "start": point_json(start),
            "end": point_json(end),
        }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
}

/// One scatter trace of a 2D plot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: Mode,
    pub name: &'static str,
}

impl Trace {
    fn line(s: Segment, name: &'static str) -> Self {
        Self {
            x: vec![s.start.x, s.end.x],
            y: vec![s.start.y, s.end.y],
            kind: "scatter",
            mode: Mode::Lines,
            name,
        }
    }

    fn marker(p: Vec2<f64>, name: &'static str) -> Self {
        Self {
            x: vec![p.x],
            y: vec![p.y],
            kind: "scatter",
            mode: Mode::Markers,
            name,
        }
    }
}

/// Both input segments, then the intersection if there is one.
pub fn plot_traces(segment1: Segment, segment2: Segment, result: Option<Intersection>) -> Vec<Trace> {
    let mut traces = vec![
        Trace::line(segment1, "Segment 1"),
        Trace::line(segment2, "Segment 2"),
    ];
    match result {
        None => {}
        Some(Intersection::Point(p)) => traces.push(Trace::marker(p, "Intersection point")),
        Some(Intersection::Segment { start, end }) => {
            traces.push(Trace::line(Segment::new(start, end), "Overlapping segment"))
        }
    }
    traces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_variants() {
        assert_eq!(text(None), "Segments do not intersect");
        assert_eq!(
            text(Some(Intersection::Point(Vec2::new(1.0, 1.5)))),
            "Segments intersect: YES\nIntersection point: (1, 1.5)"
        );
        assert_eq!(
            text(Some(Intersection::Segment {
                start: Vec2::new(2.0, 0.0),
                end: Vec2::new(4.0, 0.0),
            })),
            "Segments intersect: YES\nOverlapping segment: (2, 0) - (4, 0)"
        );
    }

    #[test]
    fn json_shapes() {
        assert_eq!(json(None), Value::Null);
        let p = json(Some(Intersection::Point(Vec2::new(1.0, 2.0))));
        assert_eq!(p, json!({"type": "point", "x": 1.0, "y": 2.0}));
        let s = json(Some(Intersection::Segment {
            start: Vec2::new(2.0, 0.0),
            end: Vec2::new(4.0, 0.0),
        }));
        assert_eq!(s["type"], "segment");
        assert_eq!(s["end"]["x"], 4.0);
    }

    #[test]
    fn plot_traces_append_result() {
        let a = Segment::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment::from_coords(0.0, 2.0, 2.0, 0.0);
        assert_eq!(plot_traces(a, b, None).len(), 2);

        let traces = plot_traces(a, b, Some(Intersection::Point(Vec2::new(1.0, 1.0))));
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[2].mode, Mode::Markers);
        let v = serde_json::to_value(&traces[0]).unwrap();
        assert_eq!(
            v,
            json!({"x": [0.0, 2.0], "y": [0.0, 2.0], "type": "scatter", "mode": "lines", "name": "Segment 1"})
        );
    }
}
