// Mapper to decode the source CSV into domain records
use crate::domain::market::{Dataset, PriceRecord};
use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid price `{value}`")]
    InvalidPrice { row: usize, value: String },
}

struct Columns {
    date: usize,
    market: usize,
    price: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            date: find("date")?,
            market: find("market")?,
            price: find("price")?,
        })
    }
}

/// Decode CSV text with a `date,market,price` header.
///
/// Dates that don't match `YYYY/MM/DD` and blank prices are kept as `None`;
/// a non-numeric price fails the whole load.
pub fn parse_dataset(text: &str) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::locate(reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or("");

        let raw_price = field(columns.price).trim();
        let price = if raw_price.is_empty() {
            None
        } else {
            let value = raw_price
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidPrice {
                    row: index + 1,
                    value: raw_price.to_string(),
                })?;
            Some(value)
        };

        records.push(PriceRecord::new(
            parse_date(field(columns.date)),
            field(columns.market),
            price,
        ));
    }

    Ok(Dataset::new(records))
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}
