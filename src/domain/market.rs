// Market price domain model
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    /// `None` when the source date could not be parsed.
    pub date: Option<NaiveDate>,
    pub market: String,
    /// `None` when the source cell was blank.
    pub price: Option<f64>,
}

impl PriceRecord {
    pub fn new(date: Option<NaiveDate>, market: &str, price: impl Into<Option<f64>>) -> Self {
        Self {
            date,
            market: market.trim().to_string(),
            price: price.into(),
        }
    }
}

/// Immutable, ordered set of price records loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PriceRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn head(&self, n: usize) -> &[PriceRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Distinct market identifiers, sorted.
    pub fn markets(&self) -> Vec<String> {
        let mut markets: Vec<String> = self.records.iter().map(|r| r.market.clone()).collect();
        markets.sort();
        markets.dedup();
        markets
    }

    /// Rows belonging to the selected market, in dataset order.
    ///
    /// An absent selection or an identifier with no rows yields an empty result.
    pub fn select(&self, selection: &Selection) -> Vec<&PriceRecord> {
        match selection {
            Selection::Absent => Vec::new(),
            Selection::Market(id) => {
                let id = id.trim();
                self.records.iter().filter(|r| r.market == id).collect()
            }
        }
    }
}

/// A single slot's choice: nothing, or one market identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Absent,
    Market(String),
}

impl Selection {
    /// Interpret raw user input, treating blank text or `sentinel` as absent.
    ///
    /// A market whose identifier equals the sentinel stays selectable.
    pub fn from_input(input: Option<&str>, sentinel: &str, markets: &[String]) -> Self {
        match input.map(str::trim) {
            None | Some("") => Selection::Absent,
            Some(value) if value == sentinel && !markets.iter().any(|m| m == value) => {
                Selection::Absent
            }
            Some(value) => Selection::Market(value.to_string()),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Selection::Absent => None,
            Selection::Market(id) => Some(id),
        }
    }
}
