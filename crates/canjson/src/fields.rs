//! Field descriptor resolution for records.
//!
//! A record declares, per member, a tag string of the form `"name,opt,opt"`:
//!
//! - an empty name falls back to the member identifier
//! - `"-"` drops the member entirely; `"-,"` names it `-`
//! - the `omitempty` option turns on omit-if-empty
//! - other options are ignored
//!
//! Tags are parsed once per record type into [`Descriptors`] and cached for the
//! life of the process (see [`impl_record!`](crate::impl_record)).

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::value::{Field, Value};

/// Resolved metadata for one record member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Position of the member in declaration order.
    pub index: usize,
    pub name: String,
    pub omit_if_empty: bool,
}

impl FieldSpec {
    /// Parse a member's tag. Returns `None` when the member is skipped.
    pub fn parse(index: usize, member: &str, tag: &str) -> Option<FieldSpec> {
        if tag == "-" {
            return None;
        }
        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        let omit_if_empty = parts.any(|opt| opt == "omitempty");
        let name = if name.is_empty() { member } else { name };
        Some(FieldSpec { index, name: name.to_string(), omit_if_empty })
    }
}

/// Ordered field metadata for one record type.
#[derive(Debug, Clone, Default)]
pub struct Descriptors {
    specs: Vec<FieldSpec>,
    duplicate: Option<String>,
}

impl Descriptors {
    /// Build from `(member, tag)` pairs in declaration order.
    pub fn from_tags(members: &[(&str, &str)]) -> Self {
        let specs: Vec<FieldSpec> = members
            .iter()
            .enumerate()
            .filter_map(|(i, (member, tag))| FieldSpec::parse(i, member, tag))
            .collect();

        let duplicate = {
            let mut seen = HashSet::new();
            specs
                .iter()
                .find(|s| !seen.insert(s.name.as_str()))
                .map(|s| s.name.clone())
        };

        Self { specs, duplicate }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Error when two members resolved to the same name.
    pub fn validate(&self) -> Result<()> {
        match &self.duplicate {
            Some(name) => Err(Error::DuplicateField { name: name.clone() }),
            None => Ok(()),
        }
    }
}

/// A structured type whose members encode as a `Value::Struct`.
///
/// Usually implemented through [`impl_record!`](crate::impl_record).
pub trait Record {
    fn descriptors() -> &'static Descriptors;

    /// Current value of the member at declaration position `index`.
    fn member_value(&self, index: usize) -> Result<Value>;

    fn to_struct(&self) -> Result<Value>
    where
        Self: Sized,
    {
        let descriptors = Self::descriptors();
        descriptors.validate()?;
        let mut fields = Vec::with_capacity(descriptors.len());
        for spec in descriptors.specs() {
            fields.push(Field {
                name: spec.name.clone(),
                omit_if_empty: spec.omit_if_empty,
                value: self.member_value(spec.index)?,
            });
        }
        Ok(Value::Struct(fields))
    }
}

/// Implement [`Record`] and [`ToValue`](crate::ToValue) for a struct.
///
/// ```
/// struct Target {
///     name: String,
///     count: i64,
///     scratch: u8,
/// }
///
/// canjson::impl_record!(Target {
///     name: "name,omitempty",
///     count,
///     scratch: "-",
/// });
///
/// let t = Target { name: String::new(), count: 2, scratch: 0 };
/// assert_eq!(canjson::to_string(&t).unwrap(), r#"{"count":2}"#);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($member:ident $(: $tag:literal)?),* $(,)? }) => {
        impl $crate::fields::Record for $ty {
            fn descriptors() -> &'static $crate::fields::Descriptors {
                static DESCRIPTORS: ::std::sync::OnceLock<$crate::fields::Descriptors> =
                    ::std::sync::OnceLock::new();
                DESCRIPTORS.get_or_init(|| {
                    $crate::fields::Descriptors::from_tags(&[
                        $((stringify!($member), concat!("" $(, $tag)?))),*
                    ])
                })
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn member_value(&self, index: usize) -> $crate::Result<$crate::Value> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return $crate::ToValue::to_value(&self.$member);
                    }
                    position += 1;
                )*
                Err($crate::Error::Message(format!("no member at position {index}")))
            }
        }

        impl $crate::ToValue for $ty {
            fn to_value(&self) -> $crate::Result<$crate::Value> {
                $crate::fields::Record::to_struct(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tag_forms() {
        assert_eq!(
            FieldSpec::parse(0, "Str", "str,omitempty"),
            Some(FieldSpec { index: 0, name: "str".into(), omit_if_empty: true })
        );
        assert_eq!(
            FieldSpec::parse(1, "Count", ""),
            Some(FieldSpec { index: 1, name: "Count".into(), omit_if_empty: false })
        );
        assert_eq!(
            FieldSpec::parse(2, "Count", ",omitempty"),
            Some(FieldSpec { index: 2, name: "Count".into(), omit_if_empty: true })
        );
        assert_eq!(FieldSpec::parse(3, "Secret", "-"), None);
        assert_eq!(
            FieldSpec::parse(4, "Dash", "-,"),
            Some(FieldSpec { index: 4, name: "-".into(), omit_if_empty: false })
        );
        assert_eq!(
            FieldSpec::parse(5, "N", "n,string,omitempty"),
            Some(FieldSpec { index: 5, name: "n".into(), omit_if_empty: true })
        );
    }

    #[test]
    fn skipped_members_keep_declaration_index() {
        let d = Descriptors::from_tags(&[("a", ""), ("b", "-"), ("c", "cee")]);
        let idx: Vec<(usize, &str)> = d.specs().iter().map(|s| (s.index, s.name.as_str())).collect();
        assert_eq!(idx, vec![(0, "a"), (2, "cee")]);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn duplicate_names_fail_validation() {
        let d = Descriptors::from_tags(&[("a", "x"), ("x", "")]);
        match d.validate() {
            Err(Error::DuplicateField { name }) => assert_eq!(name, "x"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
