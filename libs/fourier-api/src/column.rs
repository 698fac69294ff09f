/// Scalar type tag reported by the query service.
///
/// Rendering is a passthrough of the scalar text regardless of tag —
/// the tag is metadata for consumers that want to re-parse values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalarType {
    Varchar,
    Bigint,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Date,
    Time,
    IntervalDayToSecond,
    IntervalYearToMonth,
    /// Any tag this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Column kind. Exactly one payload per kind, enforced at construction —
/// the wire shape discriminates by which nullable field is populated,
/// this enum does not.
///
/// - `Array` and `TimeSeries` carry a single nested descriptor shared by
///   every element (containers are monomorphic).
/// - `Row` carries one descriptor per field, positionally aligned with
///   the row's values.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Scalar(ScalarType),
    Array(Box<ColumnInfo>),
    Row(Vec<ColumnInfo>),
    TimeSeries(Box<ColumnInfo>),
}

impl ColumnType {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ColumnType::Scalar(_) => "scalar",
            ColumnType::Array(_) => "array",
            ColumnType::Row(_) => "row",
            ColumnType::TimeSeries(_) => "timeseries",
        }
    }
}

/// Type metadata for one column or nested slot.
///
/// `name` is present on top-level columns and row fields, absent for
/// slots nested inside arrays and time series.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: Option<String>,
    pub column_type: ColumnType,
}

impl ColumnInfo {
    pub fn named(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: Some(name.into()),
            column_type,
        }
    }

    pub fn unnamed(column_type: ColumnType) -> Self {
        Self {
            name: None,
            column_type,
        }
    }
}
