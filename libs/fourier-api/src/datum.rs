/// A single value node, positionally parallel to a `ColumnInfo`.
///
/// `Null` is valid against any column kind. Every other variant must
/// match its descriptor's kind — the decoder rejects mismatches instead
/// of probing fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    /// Raw scalar text as the service sent it.
    Scalar(String),
    Array(Vec<Datum>),
    /// Same length and order as the Row descriptor's fields.
    Row(Vec<Datum>),
    TimeSeries(Vec<TimeSeriesPoint>),
}

impl Datum {
    pub fn scalar(text: impl Into<String>) -> Self {
        Datum::Scalar(text.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Datum::Null => "null",
            Datum::Scalar(_) => "scalar",
            Datum::Array(_) => "array",
            Datum::Row(_) => "row",
            Datum::TimeSeries(_) => "timeseries",
        }
    }
}

/// One point of a time-series value: a timestamp and the value carried
/// at it, interpreted via the descriptor's nested value descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub time: String,
    pub value: Datum,
}

/// Positional array of datums. Order matches the page header.
///
/// Values only — all metadata (names, types) lives in the header's
/// `ColumnInfo` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(pub Vec<Datum>);
