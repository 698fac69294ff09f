//! Adapter for the query service's JSON wire representation.
//!
//! On the wire, column kind is discriminated by which of several
//! mutually-exclusive nullable fields is populated, and datum payload
//! likewise. The adapter mirrors that shape verbatim and converts it
//! into the model through fallible constructors, so ambiguity is
//! rejected at the boundary and nothing downstream probes fields.

use serde::Deserialize;

use crate::column::{ColumnInfo, ColumnType, ScalarType};
use crate::datum::{Datum, Row, TimeSeriesPoint};
use crate::error::SourceError;
use crate::page::{QueryPage, QueryStatus};

/// One query response page as the service sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireQueryResponse {
    #[serde(default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub column_info: Vec<WireColumnInfo>,
    #[serde(default)]
    pub rows: Vec<WireRow>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub query_status: Option<WireQueryStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireQueryStatus {
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub cumulative_bytes_scanned: u64,
    #[serde(default)]
    pub cumulative_bytes_metered: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireColumnInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub column_type: WireType,
}

/// The service's type descriptor: exactly one kind field must be
/// populated. Zero or several is a malformed response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireType {
    #[serde(default)]
    pub scalar_type: Option<ScalarType>,
    #[serde(default)]
    pub array_column_info: Option<Box<WireColumnInfo>>,
    #[serde(default)]
    pub row_column_info: Option<Vec<WireColumnInfo>>,
    #[serde(default)]
    pub time_series_measure_value_column_info: Option<Box<WireColumnInfo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireDatum {
    #[serde(default)]
    pub scalar_value: Option<String>,
    #[serde(default)]
    pub array_value: Option<Vec<WireDatum>>,
    #[serde(default)]
    pub row_value: Option<WireRow>,
    #[serde(default)]
    pub time_series_value: Option<Vec<WireTimeSeriesPoint>>,
    #[serde(default)]
    pub null_value: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireRow {
    #[serde(default)]
    pub data: Vec<WireDatum>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireTimeSeriesPoint {
    pub time: String,
    pub value: WireDatum,
}

impl WireColumnInfo {
    pub fn into_column_info(self) -> Result<ColumnInfo, SourceError> {
        let WireColumnInfo { name, column_type } = self;
        let column_type = column_type.into_column_type().map_err(|e| match &name {
            Some(n) => e.with_context(format!("column '{n}'")),
            None => e,
        })?;
        Ok(ColumnInfo { name, column_type })
    }
}

impl WireType {
    pub fn into_column_type(self) -> Result<ColumnType, SourceError> {
        match (
            self.scalar_type,
            self.array_column_info,
            self.row_column_info,
            self.time_series_measure_value_column_info,
        ) {
            (Some(scalar), None, None, None) => Ok(ColumnType::Scalar(scalar)),
            (None, Some(element), None, None) => {
                Ok(ColumnType::Array(Box::new(element.into_column_info()?)))
            }
            (None, None, Some(fields), None) => {
                let fields = fields
                    .into_iter()
                    .map(WireColumnInfo::into_column_info)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ColumnType::Row(fields))
            }
            (None, None, None, Some(value)) => {
                Ok(ColumnType::TimeSeries(Box::new(value.into_column_info()?)))
            }
            _ => Err(SourceError::format(
                "type descriptor must populate exactly one kind field",
            )),
        }
    }
}

/// Convert a wire datum against its column descriptor.
///
/// A wire datum alone is ambiguous (an empty `ArrayValue` could belong
/// to an array or a row column), so conversion is always
/// descriptor-driven.
pub fn datum_from_wire(column_type: &ColumnType, wire: WireDatum) -> Result<Datum, SourceError> {
    if wire.null_value == Some(true) {
        return Ok(Datum::Null);
    }
    match column_type {
        ColumnType::Scalar(_) => match wire.scalar_value {
            Some(text) => Ok(Datum::Scalar(text)),
            None => Err(SourceError::format(
                "scalar column datum carries no ScalarValue",
            )),
        },
        ColumnType::Array(element) => match wire.array_value {
            Some(items) => {
                let items = items
                    .into_iter()
                    .map(|d| datum_from_wire(&element.column_type, d))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Datum::Array(items))
            }
            None => Err(SourceError::format(
                "array column datum carries no ArrayValue",
            )),
        },
        ColumnType::Row(fields) => match wire.row_value {
            Some(row) => Ok(Datum::Row(row_from_wire(fields, row)?.0)),
            None => Err(SourceError::format("row column datum carries no RowValue")),
        },
        ColumnType::TimeSeries(value_column) => match wire.time_series_value {
            Some(points) => {
                let points = points
                    .into_iter()
                    .map(|p| {
                        Ok(TimeSeriesPoint {
                            time: p.time,
                            value: datum_from_wire(&value_column.column_type, p.value)?,
                        })
                    })
                    .collect::<Result<Vec<_>, SourceError>>()?;
                Ok(Datum::TimeSeries(points))
            }
            None => Err(SourceError::format(
                "timeseries column datum carries no TimeSeriesValue",
            )),
        },
    }
}

pub fn row_from_wire(columns: &[ColumnInfo], wire: WireRow) -> Result<Row, SourceError> {
    if wire.data.len() != columns.len() {
        return Err(SourceError::format(format!(
            "row carries {} values, header describes {} columns",
            wire.data.len(),
            columns.len()
        )));
    }
    let data = columns
        .iter()
        .zip(wire.data)
        .map(|(column, datum)| datum_from_wire(&column.column_type, datum))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Row(data))
}

impl WireQueryResponse {
    pub fn into_page(self) -> Result<QueryPage, SourceError> {
        let columns = self
            .column_info
            .into_iter()
            .map(WireColumnInfo::into_column_info)
            .collect::<Result<Vec<_>, _>>()?;
        let rows = self
            .rows
            .into_iter()
            .map(|row| row_from_wire(&columns, row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QueryPage {
            columns,
            rows,
            next_token: self.next_token,
            query_id: self.query_id,
            status: self.query_status.map(|s| QueryStatus {
                progress_percentage: s.progress_percentage,
                cumulative_bytes_scanned: s.cumulative_bytes_scanned,
                cumulative_bytes_metered: s.cumulative_bytes_metered,
            }),
        })
    }
}
