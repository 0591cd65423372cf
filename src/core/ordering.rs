//! Bill list ordering
//!
//! The list view shows bills from most recent to earliest. Dates are
//! `YYYY-MM-DD` strings and are compared lexicographically, which orders
//! well-formed dates chronologically without parsing them. Malformed dates
//! are passed through unchanged and sort lexicographically against
//! well-formed ones; that is deliberate, the ordering never fails on bad
//! input.

use crate::core::bill::Bill;
use std::cmp::Ordering;

/// Descending date comparator
///
/// An earlier date sorts after a later one. Equal dates compare `Equal`,
/// leaving the tie to the stable sort: entries with the same date keep
/// their relative input order. There is no secondary sort key; stability
/// is the documented tie-break policy.
pub fn anti_chrono(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Order bills from most recent to earliest date
///
/// Pure and infallible: an empty input yields an empty output, and the
/// same records come back in a new order with nothing dropped or altered.
pub fn order_by_date_desc(mut bills: Vec<Bill>) -> Vec<Bill> {
    bills.sort_by(|a, b| anti_chrono(&a.date, &b.date));
    bills
}

/// Sort bare date strings in place, most recent first
///
/// The borrowed counterpart of [`order_by_date_desc`] for callers that
/// hold dates without full records. Same comparator, same stability.
pub fn sort_dates_desc<S: AsRef<str>>(dates: &mut [S]) {
    dates.sort_by(|a, b| anti_chrono(a.as_ref(), b.as_ref()));
}
