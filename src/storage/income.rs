//! Income repository backed by income.json

use std::path::PathBuf;

use log::debug;

use crate::error::FinanceError;
use crate::models::{DateRange, Income};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    income: Vec<Income>,
}

/// Repository for income persistence
///
/// Holds no records in memory; every call reads the file afresh.
pub struct IncomeRepository {
    path: PathBuf,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Income dated within `range`, newest first
    ///
    /// Records sharing a date keep their insertion order.
    pub fn get_by_date_range(&self, range: DateRange) -> Result<Vec<Income>, FinanceError> {
        let data: IncomeData = read_json(&self.path)?;

        let mut income: Vec<_> = data
            .income
            .into_iter()
            .filter(|i| range.contains(i.date))
            .collect();
        income.sort_by(|a, b| b.date.cmp(&a.date));

        debug!("Fetched {} income records for {}", income.len(), range);
        Ok(income)
    }

    /// Append a new income record
    pub fn insert(&self, income: Income) -> Result<(), FinanceError> {
        let mut data: IncomeData = read_json(&self.path)?;
        data.income.push(income);
        write_json_atomic(&self.path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_range_query_is_inclusive_and_descending() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));

        repo.insert(Income::new(Money::from_cents(100), "A", date(1), ""))
            .unwrap();
        repo.insert(Income::new(Money::from_cents(200), "B", date(5), ""))
            .unwrap();
        repo.insert(Income::new(Money::from_cents(300), "C", date(10), ""))
            .unwrap();
        repo.insert(Income::new(Money::from_cents(400), "D", date(5), ""))
            .unwrap();

        let range = DateRange::new(date(1), date(5)).unwrap();
        let fetched = repo.get_by_date_range(range).unwrap();

        let sources: Vec<_> = fetched.iter().map(|i| i.source.as_str()).collect();
        assert_eq!(sources, vec!["B", "D", "A"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));
        let range = DateRange::new(date(1), date(31)).unwrap();
        assert!(repo.get_by_date_range(range).unwrap().is_empty());
    }
}
