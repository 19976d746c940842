//! Detection and removal of duplicates in sequences of primitives and sequences of records.
//!
//! Detection sorts a copy of the input, so that equal values become neighbours,
//! and then scans adjacent pairs.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    equality::{is_same_record, primitive_order},
    support::Support,
    value::{Record, Value},
};

/// Stands in for fields that a record does not have.
const UNDEFINED: &Value = &Value::Undefined;

fn field_value<'a>(record: &'a Record, field: &str) -> &'a Value {
    record.get(field).unwrap_or(UNDEFINED)
}

/// Find the values that occur more than once in a sequence of primitives.
///
/// Each duplicated value is reported once, regardless of how often it occurs.
/// The result is a set, callers should not rely on its order.
///
/// Returns [`Support::Unsupported`] if the sequence contains a value that is not a primitive.
/// Sequences with less than two elements have no duplicates and are not inspected further.
pub fn find_duplicates(values: &[Value]) -> Support<Vec<Value>> {
    log::trace!("searching duplicates among {} values", values.len());

    if values.len() < 2 {
        return Support::Supported(Vec::new());
    }

    if !values.iter().all(Value::is_primitive) {
        log::debug!("duplicate search is only defined for sequences of primitives");
        return Support::Unsupported;
    }

    let duplicates = values
        .iter()
        .sorted_by(primitive_order)
        .tuple_windows()
        .filter(|(current, next)| current.strict_eq(next))
        .map(|(current, _)| current)
        .dedup_by(|left, right| left.strict_eq(right))
        .cloned()
        .collect();

    Support::Supported(duplicates)
}

/// Find all records that share the value of `field` with another record.
///
/// Records are ordered by the numeric value of `field` before searching.
/// Use [find_duplicated_records_by] for fields that do not hold numbers.
pub fn find_duplicated_records(records: &[Record], field: &str) -> Support<Vec<Record>> {
    find_duplicated_records_by(records, field, |left, right| {
        numeric_order(left, right, field)
    })
}

/// Find all records that share the value of `field` with another record,
/// ordering the records with the given comparator beforehand.
///
/// The comparator has to place records with equal values of `field` next to each other,
/// and should implement a total order.
/// Records of a group of equal values appear contiguously and in sorted order in the result.
///
/// Returns [`Support::Unsupported`] if the first record does not have the field.
pub fn find_duplicated_records_by<F>(
    records: &[Record],
    field: &str,
    mut compare: F,
) -> Support<Vec<Record>>
where
    F: FnMut(&Record, &Record) -> Ordering,
{
    log::trace!(
        "searching duplicates of field {field} among {} records",
        records.len()
    );

    if let Some(first) = records.first() {
        if matches!(field_value(first, field), Value::Undefined) {
            log::debug!("first record has no field {field}");
            return Support::Unsupported;
        }
    }

    if records.len() < 2 {
        return Support::Supported(Vec::new());
    }

    let sorted = records
        .iter()
        .sorted_by(|left, right| compare(*left, *right))
        .collect::<Vec<_>>();

    let mut duplicates = Vec::new();
    // Whether `current` has already been pushed as the successor of its predecessor
    let mut previous_duplicated = false;

    for (current, next) in sorted.iter().tuple_windows() {
        if field_value(current, field).strict_eq(field_value(next, field)) {
            if !previous_duplicated {
                duplicates.push(Record::clone(current));
            }
            duplicates.push(Record::clone(next));

            previous_duplicated = true;
        } else {
            previous_duplicated = false;
        }
    }

    Support::Supported(duplicates)
}

/// Order records by the numeric interpretation of `field`.
///
/// Values without a numeric interpretation are placed last.
fn numeric_order(left: &Record, right: &Record, field: &str) -> Ordering {
    field_value(left, field)
        .to_number()
        .total_cmp(&field_value(right, field).to_number())
}

/// Return a copy of the records in which only the first of a group of equal records is kept.
///
/// Records are compared with [is_same_record].
/// Records that cannot be compared are treated as different.
pub fn filter_duplicated_records(records: &[Record]) -> Vec<Record> {
    log::trace!("filtering duplicates among {} records", records.len());

    let mut kept: Vec<Record> = Vec::with_capacity(records.len());

    for record in records {
        let seen = kept
            .iter()
            .any(|previous| is_same_record(record, previous).is_true());

        if !seen {
            kept.push(record.clone());
        }
    }

    kept
}
