use std::collections::BTreeMap;
use std::sync::Arc;

use canjson::{Any, Error, Record, impl_record};

struct Inner {
    label: String,
}
impl_record!(Inner { label: "label,omitempty" });

struct Outer {
    id: u32,
    secret: String,
    dash: i32,
    inner: Option<Box<Inner>>,
    shared: Arc<Inner>,
    tags: BTreeMap<String, Any>,
    plain: String,
}
impl_record!(Outer {
    id: "id",
    secret: "-",
    dash: "-,omitempty",
    inner: "inner,omitempty",
    shared: "shared",
    tags: "tags,omitempty",
    plain,
});

fn outer() -> Outer {
    Outer {
        id: 7,
        secret: "hidden".into(),
        dash: 0,
        inner: None,
        shared: Arc::new(Inner { label: String::new() }),
        tags: BTreeMap::new(),
        plain: String::new(),
    }
}

#[test]
fn tags_rename_skip_and_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(canjson::to_string(&outer())?, r#"{"id":7,"shared":{},"plain":""}"#);
    Ok(())
}

#[test]
fn nested_records_and_dynamic_members() -> Result<(), Box<dyn std::error::Error>> {
    let mut o = outer();
    o.dash = 3;
    o.inner = Some(Box::new(Inner { label: "in".into() }));
    o.tags.insert("b".into(), Any::new(vec!["x"]));
    o.tags.insert("a".into(), Any::none());
    assert_eq!(
        canjson::to_string(&o)?,
        r#"{"id":7,"-":3,"inner":{"label":"in"},"shared":{},"tags":{"a":null,"b":["x"]},"plain":""}"#
    );
    Ok(())
}

#[test]
fn descriptors_are_cached() {
    let a = Outer::descriptors() as *const _;
    let b = Outer::descriptors() as *const _;
    assert_eq!(a, b);
    assert_eq!(Outer::descriptors().len(), 6);
}

struct Clash {
    first: i32,
    second: i32,
}
impl_record!(Clash { first: "n", second: "n,omitempty" });

#[test]
fn duplicate_names_are_rejected() {
    let err = canjson::to_string(&Clash { first: 1, second: 2 }).unwrap_err();
    match err {
        Error::DuplicateField { name } => assert_eq!(name, "n"),
        other => panic!("unexpected: {other}"),
    }
}

struct Empty {}
impl_record!(Empty {});

#[test]
fn record_without_members() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(canjson::to_string(&Empty {})?, "{}");
    Ok(())
}
