use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use super::column_normalizer::ColumnNormalizer;
use super::error::DataLoadError;
use crate::models::{DISCOUNT_COLUMN, Dataset, OrderRecord, QUANTITY_COLUMN, REQUIRED_COLUMNS};

pub const DEFAULT_DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// `chrono` formats tried in order for the order-date column.
    pub date_formats: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Header names of a file before and after normalization.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    pub raw: Vec<String>,
    pub normalized: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    options: LoaderOptions,
}

impl DatasetLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Reads a delimited file into a typed [`Dataset`].
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset, DataLoadError> {
        let path = path.as_ref();
        let mut df = self.read_frame(path)?;

        let normalized = ColumnNormalizer.normalize_columns(df.get_column_names_str().as_slice())?;
        df.set_column_names(normalized.as_slice())
            .map_err(|source| read_error(path, source))?;

        let missing = missing_columns(&normalized);
        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns {
                path: path.to_path_buf(),
                missing,
            });
        }

        let records = self
            .extract_records(&df)
            .map_err(|e| e.with_path(path))?;

        info!(
            "Loaded {} order records from {} with columns {:?}",
            records.len(),
            path.display(),
            normalized
        );

        Ok(Dataset::new(normalized, records))
    }

    /// Inspects the header of a file without building records.
    pub fn column_report(&self, path: impl AsRef<Path>) -> Result<ColumnReport, DataLoadError> {
        let path = path.as_ref();
        let df = self.read_frame(path)?;
        let raw: Vec<String> = df
            .get_column_names_str()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let raw_names: Vec<&str> = raw.iter().map(String::as_str).collect();
        let normalized = ColumnNormalizer.normalize_columns(&raw_names)?;
        let missing = missing_columns(&normalized);

        Ok(ColumnReport {
            raw,
            normalized,
            missing,
        })
    }

    fn read_frame(&self, path: &Path) -> Result<DataFrame, DataLoadError> {
        if !path.is_file() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        debug!("Reading dataset file {}", path.display());

        // Every column is read as a string; typing happens per record.
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|opts| opts.with_encoding(CsvEncoding::LossyUtf8))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|source| read_error(path, source))?;

        if df.width() == 0 {
            return Err(DataLoadError::NoHeader {
                path: path.to_path_buf(),
            });
        }

        Ok(df)
    }

    fn extract_records(&self, df: &DataFrame) -> Result<Vec<OrderRecord>, RecordError> {
        let order_id = text_column(df, "order_id")?;
        let customer_id = text_column(df, "customer_id")?;
        let order_date = text_column(df, "order_date")?;
        let ship_mode = text_column(df, "ship_mode")?;
        let segment = text_column(df, "segment")?;
        let region = text_column(df, "region")?;
        let category = text_column(df, "category")?;
        let product_name = text_column(df, "product_name")?;
        let sales = text_column(df, "sales")?;
        let profit = text_column(df, "profit")?;
        let quantity = optional_column(df, QUANTITY_COLUMN)?;
        let discount = optional_column(df, DISCOUNT_COLUMN)?;

        let mut records = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let row = idx + 1;
            let order_date_raw = required(order_date, "order_date", idx)?;

            records.push(OrderRecord {
                order_id: required(order_id, "order_id", idx)?.to_string(),
                customer_id: required(customer_id, "customer_id", idx)?.to_string(),
                order_date: self.parse_date(order_date_raw).ok_or_else(|| {
                    RecordError::invalid(row, "order_date", order_date_raw)
                })?,
                ship_mode: required(ship_mode, "ship_mode", idx)?.to_string(),
                segment: required(segment, "segment", idx)?.to_string(),
                region: required(region, "region", idx)?.to_string(),
                category: required(category, "category", idx)?.to_string(),
                product_name: required(product_name, "product_name", idx)?.to_string(),
                sales: parse_amount(required(sales, "sales", idx)?, "sales", row)?,
                profit: parse_amount(required(profit, "profit", idx)?, "profit", row)?,
                quantity: optional_amount(quantity, QUANTITY_COLUMN, idx)?,
                discount: optional_amount(discount, DISCOUNT_COLUMN, idx)?,
            });
        }

        Ok(records)
    }

    /// Tries each configured format as a plain date, then as a timestamp
    /// whose time component is dropped.
    pub fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        self.options.date_formats.iter().find_map(|format| {
            NaiveDate::parse_from_str(raw, format).ok().or_else(|| {
                NaiveDateTime::parse_from_str(raw, &format!("{format} %H:%M:%S"))
                    .ok()
                    .map(|ts| ts.date())
            })
        })
    }
}

fn missing_columns(normalized: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !normalized.iter().any(|c| c.as_str() == **required))
        .map(|c| c.to_string())
        .collect()
}

fn read_error(path: &Path, source: PolarsError) -> DataLoadError {
    DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn text_column<'df>(df: &'df DataFrame, name: &str) -> Result<&'df StringChunked, RecordError> {
    df.column(name)
        .and_then(|c| c.str())
        .map_err(RecordError::Frame)
}

fn optional_column<'df>(
    df: &'df DataFrame,
    name: &str,
) -> Result<Option<&'df StringChunked>, RecordError> {
    match df.column(name) {
        Ok(column) => column.str().map(Some).map_err(RecordError::Frame),
        Err(_) => Ok(None),
    }
}

fn required<'c>(column: &'c StringChunked, name: &str, idx: usize) -> Result<&'c str, RecordError> {
    match column.get(idx) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        other => Err(RecordError::invalid(idx + 1, name, other.unwrap_or_default())),
    }
}

fn parse_amount(raw: &str, column: &str, row: usize) -> Result<f64, RecordError> {
    f64::from_str(raw.trim())
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::invalid(row, column, raw))
}

fn optional_amount(
    column: Option<&StringChunked>,
    name: &str,
    idx: usize,
) -> Result<Option<f64>, RecordError> {
    let Some(column) = column else {
        return Ok(None);
    };
    match column.get(idx) {
        Some(raw) if !raw.trim().is_empty() => parse_amount(raw, name, idx + 1).map(Some),
        _ => Ok(None),
    }
}

/// Record-level failure before the file path is attached.
enum RecordError {
    Frame(PolarsError),
    Invalid {
        row: usize,
        column: String,
        value: String,
    },
}

impl RecordError {
    fn invalid(row: usize, column: &str, value: &str) -> Self {
        RecordError::Invalid {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    fn with_path(self, path: &Path) -> DataLoadError {
        match self {
            RecordError::Frame(source) => read_error(path, source),
            RecordError::Invalid { row, column, value } => {
                DataLoadError::InvalidValue { row, column, value }
            }
        }
    }
}
