//! Sorting records on one or more fields.

use std::cmp::Ordering;

use crate::value::{Record, Value};

/// Direction in which the values of a field are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

/// A field on which records are sorted, together with the direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Name of the field
    pub column: String,
    /// Order of the values
    pub direction: SortDirection,
}

impl SortKey {
    /// Create a new [SortKey].
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Create a [SortKey] that orders the values of `column` ascendingly.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    /// Create a [SortKey] that orders the values of `column` descendingly.
    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }

    /// Incomparable values are placed last in both directions.
    fn compare(&self, left: &Record, right: &Record) -> Ordering {
        let left = SortClass::of(left.get(&self.column));
        let right = SortClass::of(right.get(&self.column));
        let ordering = left.cmp(&right);

        match self.direction {
            SortDirection::Descending if left.is_comparable() && right.is_comparable() => {
                ordering.reverse()
            }
            _ => ordering,
        }
    }
}

/// How a value takes part in sorting.
#[derive(Debug)]
enum SortClass<'a> {
    /// Numbers, booleans and null, compared by their numeric value
    Numeric(f64),
    /// Strings, compared lexicographically
    Text(&'a str),
    /// Missing fields, NaN and compound values
    Incomparable,
}

impl<'a> SortClass<'a> {
    /// NaN is never [SortClass::Numeric], which keeps the order total.
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(string)) => SortClass::Text(string),
            Some(value @ (Value::Number(_) | Value::Boolean(_) | Value::Null)) => {
                let number = value.to_number();
                if number.is_nan() {
                    SortClass::Incomparable
                } else {
                    SortClass::Numeric(number)
                }
            }
            _ => SortClass::Incomparable,
        }
    }

    fn is_comparable(&self) -> bool {
        !matches!(self, SortClass::Incomparable)
    }

    fn rank(&self) -> u8 {
        match self {
            SortClass::Numeric(_) => 0,
            SortClass::Text(_) => 1,
            SortClass::Incomparable => 2,
        }
    }
}

impl PartialEq for SortClass<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortClass<'_> {}

impl PartialOrd for SortClass<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortClass<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortClass::Numeric(left), SortClass::Numeric(right)) => left.total_cmp(right),
            (SortClass::Text(left), SortClass::Text(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Sort records in place on multiple fields.
///
/// The first key decides the order, later keys are consulted for records whose values are equal.
/// Numbers (as well as booleans and null) come before strings,
/// values that cannot be compared, like missing fields, come last and keep their relative order.
/// The sort is stable, so a field that no record has leaves the records as they are.
pub fn sort_records(records: &mut [Record], keys: &[SortKey]) {
    log::trace!("sorting {} records on {} keys", records.len(), keys.len());

    records.sort_by(|left, right| {
        keys.iter()
            .map(|key| key.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Sort records in place on a single field.
pub fn sort_by_column(records: &mut [Record], column: &str, direction: SortDirection) {
    sort_records(records, &[SortKey::new(column, direction)]);
}
