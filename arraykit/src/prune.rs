//! Removal of empty entries from records and sequences.

use crate::{error::Error, value::Value};

/// Entries that are removed by pruning.
fn is_empty_entry(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(string) => string.is_empty(),
        Value::Number(number) => number.is_nan(),
        _ => false,
    }
}

/// Remove entries that are empty strings, null, undefined or NaN
/// from a record or sequence.
///
/// If `nested` is `true`, nested records and sequences are pruned as well.
/// Entries that are only empty after pruning, like `{}` or `[]`, are kept.
///
/// # Errors
/// Returns [Error::UnsupportedContainer] if `value` is neither a record nor a sequence.
pub fn prune_empty(value: &mut Value, nested: bool) -> Result<(), Error> {
    prune_empty_with(value, nested, |entry| entry)
}

/// Like [prune_empty], but additionally replaces every remaining entry
/// that is truthy by the result of `transform`.
///
/// Nested containers are pruned before they are passed to `transform`.
/// The results of `transform` are not pruned again.
///
/// # Errors
/// Returns [Error::UnsupportedContainer] if `value` is neither a record nor a sequence.
pub fn prune_empty_with<F>(value: &mut Value, nested: bool, mut transform: F) -> Result<(), Error>
where
    F: FnMut(Value) -> Value,
{
    let domain = value.domain();
    if !domain.is_container() {
        return Err(Error::UnsupportedContainer(domain));
    }

    log::trace!("pruning empty entries of a {domain:?} (nested: {nested})");

    prune_container(value, nested, &mut transform);
    Ok(())
}

fn prune_container<F>(container: &mut Value, nested: bool, transform: &mut F)
where
    F: FnMut(Value) -> Value,
{
    match container {
        Value::Sequence(values) => {
            values.retain(|entry| !is_empty_entry(entry));

            for entry in values.iter_mut() {
                prune_entry(entry, nested, transform);
            }
        }
        Value::Record(record) => {
            let empty = record
                .iter()
                .filter(|(_, entry)| is_empty_entry(entry))
                .map(|(field, _)| field.clone())
                .collect::<Vec<_>>();
            for field in empty {
                record.remove(&field);
            }

            for (_, entry) in record.iter_mut() {
                prune_entry(entry, nested, transform);
            }
        }
        _ => {}
    }
}

fn prune_entry<F>(entry: &mut Value, nested: bool, transform: &mut F)
where
    F: FnMut(Value) -> Value,
{
    if nested && entry.domain().is_container() {
        prune_container(entry, nested, transform);
    }

    if entry.is_truthy() {
        *entry = transform(std::mem::take(entry));
    }
}
