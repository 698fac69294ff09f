//! Recursive rendering of (descriptor, datum) pairs.
//!
//! Pure and deterministic: no I/O, no hidden state. Callers decide
//! whether the rendered text is printed, written to a file, or both.

use fourier_api::column::{ColumnInfo, ColumnType};
use fourier_api::datum::{Datum, Row};

use crate::error::EngineError;

/// Render the page header: comma-joined column names, in header order.
/// An unnamed column renders as an empty slot so positions stay stable.
pub fn render_header(columns: &[ColumnInfo]) -> String {
    columns
        .iter()
        .map(|c| c.name.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one row against the page header, positionally. Column order in
/// the output equals header order — consumers parse this positionally.
pub fn render_row(columns: &[ColumnInfo], row: &Row) -> Result<String, EngineError> {
    if columns.len() != row.0.len() {
        return Err(EngineError::MalformedSchema(format!(
            "row carries {} values, header describes {} columns",
            row.0.len(),
            columns.len()
        )));
    }
    let mut parts = Vec::with_capacity(row.0.len());
    for (column, datum) in columns.iter().zip(&row.0) {
        parts.push(render_datum(column, datum)?);
    }
    Ok(format!("{{{}}}", parts.join(",")))
}

/// Render one datum against its descriptor, recursively.
///
/// - `Null` renders as the literal `NULL` regardless of kind.
/// - Scalar text passes through verbatim, no quoting or escaping.
/// - Arrays and time series wrap in `[...]`; rows flatten into their
///   fields without an extra prefix of their own.
/// - Named slots (top-level columns, row fields) get a `name=` prefix.
pub fn render_datum(column: &ColumnInfo, datum: &Datum) -> Result<String, EngineError> {
    if let Datum::Null = datum {
        return Ok(format!("{}NULL", name_prefix(column)));
    }
    match (&column.column_type, datum) {
        (ColumnType::Scalar(_), Datum::Scalar(text)) => {
            Ok(format!("{}{text}", name_prefix(column)))
        }
        (ColumnType::Array(element), Datum::Array(items)) => {
            let items = items
                .iter()
                .map(|item| render_datum(element, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{}[{}]", name_prefix(column), items.join(", ")))
        }
        (ColumnType::Row(fields), Datum::Row(values)) => {
            if fields.len() != values.len() {
                return Err(EngineError::MalformedSchema(format!(
                    "row datum carries {} values, descriptor has {} fields",
                    values.len(),
                    fields.len()
                )));
            }
            let fields = fields
                .iter()
                .zip(values)
                .map(|(field, value)| render_datum(field, value))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(fields.join(", "))
        }
        (ColumnType::TimeSeries(value_column), Datum::TimeSeries(points)) => {
            let points = points
                .iter()
                .map(|point| {
                    Ok(format!(
                        "{}:{}",
                        point.time,
                        render_datum(value_column, &point.value)?
                    ))
                })
                .collect::<Result<Vec<_>, EngineError>>()?;
            Ok(format!("{}[{}]", name_prefix(column), points.join(", ")))
        }
        (column_type, datum) => Err(EngineError::MalformedSchema(format!(
            "{} column paired with {} datum",
            column_type.kind_name(),
            datum.kind_name()
        ))),
    }
}

fn name_prefix(column: &ColumnInfo) -> String {
    match &column.name {
        Some(name) => format!("{name}="),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourier_api::column::ScalarType;
    use fourier_api::datum::TimeSeriesPoint;

    fn scalar(name: &str) -> ColumnInfo {
        ColumnInfo::named(name, ColumnType::Scalar(ScalarType::Varchar))
    }

    #[test]
    fn named_scalar() {
        let rendered = render_datum(&scalar("region"), &Datum::scalar("us-east-1")).unwrap();
        assert_eq!(rendered, "region=us-east-1");
    }

    #[test]
    fn unnamed_scalar_has_no_prefix() {
        let column = ColumnInfo::unnamed(ColumnType::Scalar(ScalarType::Double));
        assert_eq!(render_datum(&column, &Datum::scalar("1.5")).unwrap(), "1.5");
    }

    #[test]
    fn scalar_text_passes_through_verbatim() {
        let rendered = render_datum(&scalar("s"), &Datum::scalar("a \"quoted\", [odd] text")).unwrap();
        assert_eq!(rendered, "s=a \"quoted\", [odd] text");
    }

    #[test]
    fn array_of_scalars() {
        let column = ColumnInfo::unnamed(ColumnType::Array(Box::new(ColumnInfo::unnamed(
            ColumnType::Scalar(ScalarType::Varchar),
        ))));
        let datum = Datum::Array(vec![Datum::scalar("a"), Datum::scalar("b")]);
        assert_eq!(render_datum(&column, &datum).unwrap(), "[a, b]");
    }

    #[test]
    fn named_array_gets_prefix() {
        let column = ColumnInfo::named(
            "tags",
            ColumnType::Array(Box::new(ColumnInfo::unnamed(ColumnType::Scalar(
                ScalarType::Varchar,
            )))),
        );
        let datum = Datum::Array(vec![Datum::scalar("a")]);
        assert_eq!(render_datum(&column, &datum).unwrap(), "tags=[a]");
    }

    #[test]
    fn row_flattens_fields_in_order() {
        let column = ColumnInfo::unnamed(ColumnType::Row(vec![scalar("x"), scalar("y")]));
        let datum = Datum::Row(vec![Datum::scalar("1"), Datum::Null]);
        assert_eq!(render_datum(&column, &datum).unwrap(), "x=1, y=NULL");
    }

    #[test]
    fn time_series_of_scalars() {
        let column = ColumnInfo::unnamed(ColumnType::TimeSeries(Box::new(ColumnInfo::unnamed(
            ColumnType::Scalar(ScalarType::Bigint),
        ))));
        let datum = Datum::TimeSeries(vec![
            TimeSeriesPoint { time: "t1".into(), value: Datum::scalar("10") },
            TimeSeriesPoint { time: "t2".into(), value: Datum::scalar("12") },
        ]);
        assert_eq!(render_datum(&column, &datum).unwrap(), "[t1:10, t2:12]");
    }

    #[test]
    fn null_short_circuits_every_kind() {
        let kinds = [
            ColumnType::Scalar(ScalarType::Varchar),
            ColumnType::Array(Box::new(scalar("e"))),
            ColumnType::Row(vec![scalar("x")]),
            ColumnType::TimeSeries(Box::new(scalar("v"))),
        ];
        for kind in kinds {
            let named = ColumnInfo::named("c", kind.clone());
            assert_eq!(render_datum(&named, &Datum::Null).unwrap(), "c=NULL");
            let unnamed = ColumnInfo::unnamed(kind);
            assert_eq!(render_datum(&unnamed, &Datum::Null).unwrap(), "NULL");
        }
    }

    #[test]
    fn deeply_nested_matched_trees_decode() {
        // timeseries of arrays of rows — every branch of the dispatch.
        let column = ColumnInfo::named(
            "deep",
            ColumnType::TimeSeries(Box::new(ColumnInfo::unnamed(ColumnType::Array(Box::new(
                ColumnInfo::unnamed(ColumnType::Row(vec![scalar("k"), scalar("v")])),
            ))))),
        );
        let datum = Datum::TimeSeries(vec![TimeSeriesPoint {
            time: "t1".into(),
            value: Datum::Array(vec![
                Datum::Row(vec![Datum::scalar("az"), Datum::scalar("1a")]),
                Datum::Null,
            ]),
        }]);
        assert_eq!(
            render_datum(&column, &datum).unwrap(),
            "deep=[t1:[k=az, v=1a, NULL]]"
        );
    }

    #[test]
    fn re_decode_is_byte_identical() {
        let column = ColumnInfo::named(
            "tags",
            ColumnType::Array(Box::new(ColumnInfo::unnamed(ColumnType::Scalar(
                ScalarType::Varchar,
            )))),
        );
        let datum = Datum::Array(vec![Datum::scalar("a"), Datum::Null, Datum::scalar("c")]);
        let first = render_datum(&column, &datum).unwrap();
        let second = render_datum(&column, &datum).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn kind_mismatch_is_malformed_schema() {
        let err = render_datum(&scalar("x"), &Datum::Array(vec![])).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSchema(_)));

        let row_column = ColumnInfo::unnamed(ColumnType::Row(vec![scalar("x")]));
        let err = render_datum(&row_column, &Datum::scalar("1")).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSchema(_)));
    }

    #[test]
    fn row_arity_mismatch_is_malformed_schema() {
        let column = ColumnInfo::unnamed(ColumnType::Row(vec![scalar("x"), scalar("y")]));
        let err = render_datum(&column, &Datum::Row(vec![Datum::scalar("1")])).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSchema(_)));
    }

    #[test]
    fn header_renders_names_in_order() {
        let columns = vec![
            scalar("region"),
            ColumnInfo::unnamed(ColumnType::Scalar(ScalarType::Double)),
            scalar("hostname"),
        ];
        assert_eq!(render_header(&columns), "region, , hostname");
    }

    #[test]
    fn row_rendering_preserves_header_order_and_wraps() {
        let columns = vec![scalar("a"), scalar("b"), scalar("c")];
        let row = Row(vec![
            Datum::scalar("1"),
            Datum::scalar("2"),
            Datum::scalar("3"),
        ]);
        assert_eq!(render_row(&columns, &row).unwrap(), "{a=1,b=2,c=3}");
    }

    #[test]
    fn row_header_arity_mismatch_is_malformed_schema() {
        let columns = vec![scalar("a"), scalar("b")];
        let row = Row(vec![Datum::scalar("1")]);
        let err = render_row(&columns, &row).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSchema(_)));
    }
}
