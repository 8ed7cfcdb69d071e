use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::deal::Deal;

/// Groups deals by purchase date for the calendar view.
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Every date on which at least one deal was purchased, ascending, no repeats.
    pub fn purchase_dates(&self, deals: &[Deal]) -> Vec<NaiveDate> {
        deals
            .iter()
            .map(|d| d.purchase_date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Deals purchased on `date`, in collection order.
    pub fn deals_on(&self, deals: &[Deal], date: NaiveDate) -> Vec<Deal> {
        deals
            .iter()
            .filter(|d| d.purchase_date == date)
            .cloned()
            .collect()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
