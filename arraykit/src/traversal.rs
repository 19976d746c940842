//! Recursive transformation of the entries of nested records and sequences.

use crate::value::Value;

/// Replace every entry of `value`, at any depth, by the result of `f`.
///
/// Entries are visited depth-first in order.
/// Records and sequences are passed to `f` after their own entries have been replaced.
/// If `value` is not a container, nothing happens and `f` is never called.
pub fn map_elements<F>(value: &mut Value, mut f: F)
where
    F: FnMut(Value) -> Value,
{
    log::trace!("mapping the entries of a {:?}", value.domain());

    map_entries(value, &mut f);
}

fn map_entries<F>(container: &mut Value, f: &mut F)
where
    F: FnMut(Value) -> Value,
{
    match container {
        Value::Sequence(values) => {
            for entry in values.iter_mut() {
                map_entry(entry, f);
            }
        }
        Value::Record(record) => {
            for (_, entry) in record.iter_mut() {
                map_entry(entry, f);
            }
        }
        _ => {}
    }
}

fn map_entry<F>(entry: &mut Value, f: &mut F)
where
    F: FnMut(Value) -> Value,
{
    map_entries(entry, f);
    *entry = f(std::mem::take(entry));
}
