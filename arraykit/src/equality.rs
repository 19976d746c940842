//! Shallow structural equality of sequences of primitives and of flat records.

use std::{cmp::Ordering, collections::HashSet};

use itertools::Itertools;

use crate::{
    support::Support,
    value::{Record, Value},
};

/// Order in which primitives are grouped before comparing them.
///
/// Only meaningful for primitives, everything else is considered equal.
pub(crate) fn primitive_order(left: &&Value, right: &&Value) -> Ordering {
    left.primitive_cmp(right).unwrap_or(Ordering::Equal)
}

/// Check whether two sequences of primitives contain the same values.
///
/// If `order_matters` is `false`, both sequences are compared as multisets,
/// otherwise position by position.
/// Sequences of different length are never the same.
///
/// Returns [`Support::Unsupported`] if an element is not a primitive.
pub fn is_same_array(left: &[Value], right: &[Value], order_matters: bool) -> Support<bool> {
    if left.len() != right.len() {
        return Support::Supported(false);
    }

    if !left.iter().chain(right).all(Value::is_primitive) {
        log::debug!("sequence equality is only defined for sequences of primitives");
        return Support::Unsupported;
    }

    let same = if order_matters {
        left.iter().zip(right).all(|(a, b)| a.strict_eq(b))
    } else {
        left.iter()
            .sorted_by(primitive_order)
            .zip(right.iter().sorted_by(primitive_order))
            .all(|(a, b)| a.strict_eq(b))
    };

    Support::Supported(same)
}

/// Variant of [is_same_array] for dynamically shaped inputs.
///
/// Returns [`Support::Unsupported`] if one of the values is not a sequence.
pub fn is_same_value_array(left: &Value, right: &Value, order_matters: bool) -> Support<bool> {
    match (left.as_sequence(), right.as_sequence()) {
        (Some(left), Some(right)) => is_same_array(left, right, order_matters),
        _ => Support::Unsupported,
    }
}

/// Check whether two flat records are the same.
///
/// Records are the same if they have the same set of fields
/// and the values of each field are strictly equal.
///
/// Fields holding sequences are compared by their index positions only, not by their contents,
/// so `{a: [1, 2]}` and `{a: [3, 4]}` are considered the same.
///
/// Returns [`Support::Unsupported`] if a field holds a value
/// that is neither a primitive nor [`Value::Undefined`].
pub fn is_same_record(left: &Record, right: &Record) -> Support<bool> {
    let same_fields = left.len() == right.len() && left.keys().all(|field| right.contains_key(field));
    if !same_fields {
        return Support::Supported(false);
    }

    for (field, value) in left {
        let Some(other) = right.get(field) else {
            return Support::Supported(false);
        };

        if let Value::Sequence(values) = value {
            let Support::Supported(other_keys) = index_keys(other) else {
                log::debug!("field {field} cannot be compared against a sequence");
                return Support::Unsupported;
            };

            let keys = (0..values.len()).map(|index| index.to_string()).collect::<HashSet<_>>();
            if keys != other_keys {
                return Support::Supported(false);
            }
        } else if !is_flat(value) || !is_flat(other) {
            log::debug!("field {field} holds a value that is not supported in flat records");
            return Support::Unsupported;
        } else if !value.strict_eq(other) {
            return Support::Supported(false);
        }
    }

    Support::Supported(true)
}

/// Variant of [is_same_record] for dynamically shaped inputs.
///
/// Returns [`Support::Unsupported`] if one of the values is not a record.
pub fn is_same_object(left: &Value, right: &Value) -> Support<bool> {
    match (left.as_record(), right.as_record()) {
        (Some(left), Some(right)) => is_same_record(left, right),
        _ => Support::Unsupported,
    }
}

/// Values that may appear in a flat record.
fn is_flat(value: &Value) -> bool {
    value.is_primitive() || matches!(value, Value::Undefined)
}

/// Names under which the parts of a value can be addressed.
fn index_keys(value: &Value) -> Support<HashSet<String>> {
    let keys = match value {
        Value::Sequence(values) => (0..values.len()).map(|index| index.to_string()).collect(),
        Value::Record(record) => record.keys().cloned().collect(),
        Value::String(string) => (0..string.encode_utf16().count())
            .map(|index| index.to_string())
            .collect(),
        Value::Boolean(_) | Value::Number(_) => HashSet::new(),
        Value::Undefined | Value::Null => return Support::Unsupported,
    };

    Support::Supported(keys)
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::{is_same_array, is_same_object, is_same_record, is_same_value_array};
    use crate::{record, support::Support, value::Value};

    fn values<T: Into<Value> + Clone>(items: &[T]) -> Vec<Value> {
        items.iter().cloned().map(Into::into).collect()
    }

    #[test]
    fn arrays_ignore_order_by_default() {
        let left = values(&[1, 2, 3]);
        let right = values(&[3, 2, 1]);

        assert_eq!(is_same_array(&left, &right, false), Support::Supported(true));
        assert_eq!(is_same_array(&left, &right, true), Support::Supported(false));
        assert_eq!(is_same_array(&left, &left, true), Support::Supported(true));
    }

    #[test]
    fn arrays_compare_multiplicities() {
        let left = values(&["a", "a", "b"]);
        let right = values(&["a", "b", "b"]);
        assert_eq!(is_same_array(&left, &right, false), Support::Supported(false));

        let left = values(&[1, 2]);
        let right = values(&[1, 2, 2]);
        assert_eq!(is_same_array(&left, &right, false), Support::Supported(false));
    }

    #[test]
    fn arrays_distinguish_domains() {
        let left = vec![Value::from(1), Value::from(true)];
        let right = vec![Value::from("1"), Value::from(true)];
        assert_eq!(is_same_array(&left, &right, false), Support::Supported(false));

        let nan = vec![Value::from(f64::NAN)];
        assert_eq!(is_same_array(&nan, &nan, true), Support::Supported(false));
    }

    #[test]
    fn arrays_with_compound_elements_are_unsupported() {
        let left = vec![Value::from(1), Value::from(vec![2])];
        let right = values(&[1, 2]);
        assert_eq!(is_same_array(&left, &right, false), Support::Unsupported);

        let left = vec![Value::Null];
        let right = vec![Value::Null];
        assert_eq!(is_same_array(&left, &right, false), Support::Unsupported);

        // the length is checked before the elements
        let left = vec![Value::Null];
        let right = vec![];
        assert_eq!(is_same_array(&left, &right, false), Support::Supported(false));
    }

    #[test]
    fn dynamic_arrays_must_be_sequences() {
        let sequence = Value::from(vec![1, 2]);
        assert_eq!(
            is_same_value_array(&sequence, &Value::from(vec![2, 1]), false),
            Support::Supported(true)
        );
        assert_eq!(
            is_same_value_array(&sequence, &Value::from("12"), false),
            Support::Unsupported
        );
    }

    #[test]
    fn records_ignore_field_order() {
        let left = record! { "a" => 1, "b" => 2 };
        let right = record! { "b" => 2, "a" => 1 };
        assert_eq!(is_same_record(&left, &right), Support::Supported(true));
    }

    #[test]
    fn records_need_same_fields() {
        let left = record! { "a" => 1 };
        let right = record! { "a" => 1, "b" => 2 };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));
        assert_eq!(is_same_record(&right, &left), Support::Supported(false));

        let left = record! { "a" => 1, "c" => 2 };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));
    }

    #[test]
    fn records_compare_values_strictly() {
        let left = record! { "a" => 1, "b" => "x" };
        let right = record! { "a" => 1, "b" => "y" };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));

        let left = record! { "a" => 1 };
        let right = record! { "a" => "1" };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));

        let left = record! { "a" => Value::Undefined };
        assert_eq!(is_same_record(&left, &left), Support::Supported(true));
    }

    #[test]
    fn records_with_nested_values_are_unsupported() {
        let left = record! { "a" => record! { "b" => 1 } };
        assert_eq!(is_same_record(&left, &left), Support::Unsupported);

        let left = record! { "a" => Value::Null };
        assert_eq!(is_same_record(&left, &left), Support::Unsupported);

        let left = record! { "a" => 1 };
        let right = record! { "a" => record! {} };
        assert_eq!(is_same_record(&left, &right), Support::Unsupported);
    }

    #[test]
    fn records_short_circuit_on_first_difference() {
        let left = record! { "a" => 1, "b" => record! {} };
        let right = record! { "a" => 2, "b" => record! {} };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));
    }

    /// Sequence-valued fields are only compared by their positions.
    /// `{a: [1, 2]}` and `{a: [3, 4]}` count as the same record.
    #[test]
    fn records_compare_sequence_fields_by_positions_only() {
        let left = record! { "a" => vec![1, 2] };
        let right = record! { "a" => vec![3, 4] };
        assert_eq!(is_same_record(&left, &right), Support::Supported(true));

        let right = record! { "a" => vec![1, 2, 3] };
        assert_eq!(is_same_record(&left, &right), Support::Supported(false));

        let right = record! { "a" => "xy" };
        assert_eq!(is_same_record(&left, &right), Support::Supported(true));

        let right = record! { "a" => Value::Null };
        assert_eq!(is_same_record(&left, &right), Support::Unsupported);

        let empty = record! { "a" => Vec::<Value>::new() };
        let number = record! { "a" => 5 };
        assert_eq!(is_same_record(&empty, &number), Support::Supported(true));
    }

    #[test]
    fn dynamic_records_must_be_records() {
        let record = Value::from(record! { "a" => 1 });
        assert_eq!(is_same_object(&record, &record), Support::Supported(true));
        assert_eq!(
            is_same_object(&record, &Value::from(vec![1])),
            Support::Unsupported
        );
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn same_as_reversed(values: Vec<Value>) -> bool {
        let mut reversed = values.clone();
        reversed.reverse();

        let contains_nan = values.iter().any(|value| value.as_f64().is_some_and(f64::is_nan));
        is_same_array(&values, &reversed, false) == Support::Supported(!contains_nan)
    }
}
