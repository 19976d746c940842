//! One-level projection of records onto a subset of their fields.

use crate::{
    error::Error,
    value::{Record, Value},
};

/// Selection of the fields that remain in a record after projecting it.
///
/// Nested records are not projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Keep exactly the listed fields
    Include(Vec<String>),
    /// Keep all fields but the listed ones
    Exclude(Vec<String>),
}

impl Projection {
    /// Create a [Projection] that keeps only the given fields.
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Include(fields.into_iter().map(Into::into).collect())
    }

    /// Create a [Projection] that drops the given fields.
    pub fn exclude<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Exclude(fields.into_iter().map(Into::into).collect())
    }

    /// Create a [Projection] from pairs of fields and flags,
    /// where `true` marks a field for inclusion and `false` for exclusion.
    ///
    /// The first flag determines the kind of the projection,
    /// an empty list includes nothing.
    ///
    /// # Errors
    /// Returns [Error::InclusionInExclusion] or [Error::ExclusionInInclusion]
    /// if the flags contradict the first one.
    pub fn from_flags<I, S>(flags: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut flags = flags.into_iter().peekable();
        let exclusion = flags.peek().is_some_and(|(_, include)| !include);

        let mut fields = Vec::new();
        for (field, include) in flags {
            let field = field.into();

            match (exclusion, include) {
                (true, true) => return Err(Error::InclusionInExclusion { field }),
                (false, false) => return Err(Error::ExclusionInInclusion { field }),
                _ => fields.push(field),
            }
        }

        Ok(if exclusion {
            Projection::Exclude(fields)
        } else {
            Projection::Include(fields)
        })
    }

    /// Create a [Projection] from a record whose values are the flags.
    ///
    /// `0` and `false` mark a field for exclusion, any other value for inclusion.
    ///
    /// # Errors
    /// Same as [Projection::from_flags].
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        Self::from_flags(
            record
                .iter()
                .map(|(field, flag)| (field.clone(), !is_exclusion_flag(flag))),
        )
    }

    /// Return whether `field` remains after projecting.
    pub fn keeps(&self, field: &str) -> bool {
        match self {
            Projection::Include(fields) => fields.iter().any(|kept| kept == field),
            Projection::Exclude(fields) => fields.iter().all(|dropped| dropped != field),
        }
    }
}

fn is_exclusion_flag(flag: &Value) -> bool {
    match flag {
        Value::Boolean(include) => !include,
        Value::Number(number) => *number == 0.0,
        _ => false,
    }
}

/// Remove the fields not selected by `projection` from each record.
///
/// The remaining fields keep their order.
pub fn project_records(records: &mut [Record], projection: &Projection) {
    log::trace!("projecting {} records with {projection:?}", records.len());

    for record in records.iter_mut() {
        let dropped = record
            .keys()
            .filter(|field| !projection.keeps(field))
            .cloned()
            .collect::<Vec<_>>();

        for field in dropped {
            record.remove(&field);
        }
    }
}
