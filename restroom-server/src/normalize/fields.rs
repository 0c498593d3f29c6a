//! Data-driven field resolution for heterogeneous source records.
//!
//! Each canonical field owns an ordered list of accessors. Resolution walks
//! the list and takes the first accessor that yields a usable value, so a
//! new source shape only needs new table entries.

use serde_json::Value;

/// Where to look for a value in a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// A top-level field.
    Field(&'static str),
    /// An element of a GeoJSON point stored under `field`
    /// (`{"coordinates": [lon, lat]}`).
    GeometryCoordinate { field: &'static str, index: usize },
}

impl Accessor {
    /// Look up the value, returning it only if it is usable.
    ///
    /// Null, `false`, empty strings and numeric zero are treated as absent
    /// so that resolution moves on to the next alias.
    pub fn resolve<'a>(&self, raw: &'a Value) -> Option<&'a Value> {
        let value = match self {
            Accessor::Field(name) => raw.get(name)?,
            Accessor::GeometryCoordinate { field, index } => {
                raw.get(field)?.get("coordinates")?.get(index)?
            }
        };
        is_present(value).then_some(value)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An encoding that marks a facility as accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truthy {
    /// A string flag, matched exactly (e.g. `"Y"`).
    Flag(&'static str),
    /// JSON `true`.
    Bool,
}

impl Truthy {
    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Truthy::Flag(flag), Value::String(s)) => s == flag,
            (Truthy::Bool, Value::Bool(b)) => *b,
            _ => false,
        }
    }
}

/// A field that marks accessibility, with the encodings it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityRule {
    pub field: &'static str,
    pub accepts: &'static [Truthy],
}

impl AccessibilityRule {
    fn matches(&self, raw: &Value) -> bool {
        raw.get(self.field)
            .is_some_and(|v| self.accepts.iter().any(|t| t.matches(v)))
    }
}

/// Ordered accessors for every canonical field.
#[derive(Debug, Clone)]
pub struct FieldTable {
    pub id: Vec<Accessor>,
    pub name: Vec<Accessor>,
    pub latitude: Vec<Accessor>,
    pub longitude: Vec<Accessor>,
    pub address: Vec<Accessor>,
    pub hours: Vec<Accessor>,
    pub accessibility: Vec<AccessibilityRule>,
}

const Y_OR_TRUE: &[Truthy] = &[Truthy::Flag("Y"), Truthy::Bool];
const Y_ONLY: &[Truthy] = &[Truthy::Flag("Y")];

impl FieldTable {
    /// Aliases covering the three NYC Open Data restroom datasets.
    pub fn nyc_open_data() -> Self {
        use Accessor::{Field, GeometryCoordinate};

        Self {
            id: vec![Field("objectid"), Field("id")],
            name: vec![
                Field("name"),
                Field("location_name"),
                Field("site_name"),
                Field("park_name"),
            ],
            latitude: vec![
                Field("latitude"),
                Field("lat"),
                GeometryCoordinate {
                    field: "the_geom",
                    index: 1,
                },
            ],
            longitude: vec![
                Field("longitude"),
                Field("lon"),
                Field("lng"),
                GeometryCoordinate {
                    field: "the_geom",
                    index: 0,
                },
            ],
            address: vec![
                Field("address"),
                Field("location"),
                Field("street_address"),
            ],
            hours: vec![
                Field("hours_of_operation"),
                Field("hours"),
                Field("operation_hours"),
            ],
            accessibility: vec![
                AccessibilityRule {
                    field: "ada_accessible",
                    accepts: Y_OR_TRUE,
                },
                AccessibilityRule {
                    field: "accessible",
                    accepts: Y_OR_TRUE,
                },
                AccessibilityRule {
                    field: "handicap_accessible",
                    accepts: Y_ONLY,
                },
            ],
        }
    }

    /// First usable value among the accessors.
    pub fn first<'a>(accessors: &[Accessor], raw: &'a Value) -> Option<&'a Value> {
        accessors.iter().find_map(|a| a.resolve(raw))
    }

    /// Whether any accessibility rule matches.
    pub fn is_accessible(&self, raw: &Value) -> bool {
        self.accessibility.iter().any(|rule| rule.matches(raw))
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::nyc_open_data()
    }
}

/// Interpret a JSON value as a coordinate.
///
/// Accepts numbers and numeric strings (surrounding whitespace allowed).
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a JSON value as display text. Blank strings yield nothing.
pub fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
