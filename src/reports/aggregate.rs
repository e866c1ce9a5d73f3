//! Aggregation over transaction snapshots
//!
//! Pure folds: totals, per-key breakdowns, and dense daily series. None of
//! these fail; empty input yields zero-valued results.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CategorizedExpense, DateRange, Expense, Income, Money, Transaction};

/// Anything with an amount and a date
pub trait LedgerEntry {
    fn amount(&self) -> Money;
    fn date(&self) -> NaiveDate;
}

impl LedgerEntry for Income {
    fn amount(&self) -> Money {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl LedgerEntry for Expense {
    fn amount(&self) -> Money {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl LedgerEntry for CategorizedExpense {
    fn amount(&self) -> Money {
        self.expense.amount
    }

    fn date(&self) -> NaiveDate {
        self.expense.date
    }
}

impl LedgerEntry for Transaction {
    fn amount(&self) -> Money {
        Transaction::amount(self)
    }

    fn date(&self) -> NaiveDate {
        Transaction::date(self)
    }
}

/// Sum of amounts; zero for an empty slice
///
/// No sign checks happen here. Entry validation rejects non-positive amounts
/// before they are stored.
pub fn total_amount<T: LedgerEntry>(entries: &[T]) -> Money {
    entries.iter().map(LedgerEntry::amount).sum()
}

/// Income minus expenses; negative when spending exceeds income
pub fn net_balance(income_total: Money, expense_total: Money) -> Money {
    income_total - expense_total
}

/// Summed amounts per key, in the order each key was first seen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grouping {
    entries: Vec<(String, Money)>,
}

impl Grouping {
    pub fn get(&self, key: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, amount)| *amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(k, amount)| (k.as_str(), *amount))
    }

    /// Entries by amount, largest first; equal amounts keep first-seen order
    pub fn sorted_desc(&self) -> Vec<(String, Money)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl FromIterator<(String, Money)> for Grouping {
    fn from_iter<I: IntoIterator<Item = (String, Money)>>(iter: I) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, Money)> = Vec::new();

        for (key, amount) in iter {
            match index.get(&key) {
                Some(&i) => entries[i].1 += amount,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, amount));
                }
            }
        }

        Self { entries }
    }
}

/// Sum amounts per key. Keys with no entries never appear.
pub fn group_by_key<T, F>(entries: &[T], key_fn: F) -> Grouping
where
    T: LedgerEntry,
    F: Fn(&T) -> &str,
{
    entries
        .iter()
        .map(|e| (key_fn(e).to_string(), e.amount()))
        .collect()
}

/// Expenses per category name; orphaned expenses go to "Unknown"
pub fn expenses_by_category(expenses: &[CategorizedExpense]) -> Grouping {
    group_by_key(expenses, CategorizedExpense::category_name)
}

/// Income per source
pub fn income_by_source(income: &[Income]) -> Grouping {
    group_by_key(income, |i| i.source.as_str())
}

/// Key with the largest amount, or `None` for an empty grouping
///
/// Ties go to the key seen first, not the alphabetically smallest.
pub fn top_key(grouped: &Grouping) -> Option<&str> {
    let mut best: Option<(&str, Money)> = None;
    for (key, amount) in grouped.iter() {
        match best {
            Some((_, best_amount)) if amount <= best_amount => {}
            _ => best = Some((key, amount)),
        }
    }
    best.map(|(key, _)| key)
}

/// One point per calendar day in `range`, ascending, zero-filled
///
/// The result always has `range.day_count()` points. Entries outside the
/// range are ignored.
pub fn daily_series<T: LedgerEntry>(entries: &[T], range: DateRange) -> Vec<(NaiveDate, Money)> {
    let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
    for entry in entries.iter().filter(|e| range.contains(e.date())) {
        *by_day.entry(entry.date()).or_default() += entry.amount();
    }

    range
        .days()
        .map(|day| (day, by_day.get(&day).copied().unwrap_or_default()))
        .collect()
}
