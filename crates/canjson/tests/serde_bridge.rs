#![cfg(feature = "serde")]
use std::collections::HashMap;

use serde::Serialize;

#[derive(Serialize)]
struct Row {
    b: String,
    a: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Serialize)]
enum Shape {
    Unit,
    Circle(f64),
    Pair(i32, i32),
    Rect { w: u8, h: u8 },
}

#[test]
fn struct_fields_keep_declaration_order() -> Result<(), Box<dyn std::error::Error>> {
    let row = Row { b: "x".into(), a: 1, note: None };
    let out = canjson::ser::to_string(&row, &canjson::Options::default())?;
    assert_eq!(out, r#"{"b":"x","a":1}"#);
    Ok(())
}

#[test]
fn maps_are_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let mut m = HashMap::new();
    m.insert("foo", 1);
    m.insert("bar", 2);
    m.insert("baz", 3);
    let out = canjson::ser::to_vec(&m, &canjson::Options::default())?;
    assert_eq!(out, br#"{"bar":2,"baz":3,"foo":1}"#);
    Ok(())
}

#[test]
fn integer_map_keys_become_strings() -> Result<(), Box<dyn std::error::Error>> {
    let mut m = HashMap::new();
    m.insert(10, "ten");
    m.insert(2, "two");
    let out = canjson::ser::to_string(&m, &canjson::Options::default())?;
    // ordinal order of the key text
    assert_eq!(out, r#"{"10":"ten","2":"two"}"#);
    Ok(())
}

#[test]
fn enum_variants_are_externally_tagged() -> Result<(), Box<dyn std::error::Error>> {
    let opts = canjson::Options::default();
    let shapes = vec![
        Shape::Unit,
        Shape::Circle(0.5),
        Shape::Pair(1, -1),
        Shape::Rect { w: 2, h: 3 },
    ];
    let out = canjson::ser::to_string(&shapes, &opts)?;
    assert_eq!(
        out,
        r#"["Unit",{"Circle":0.5},{"Pair":[1,-1]},{"Rect":{"w":2,"h":3}}]"#
    );
    Ok(())
}

#[test]
fn non_finite_floats_are_rejected() {
    let err = canjson::ser::to_string(&vec![1.0, f64::NAN], &canjson::Options::default())
        .unwrap_err();
    assert!(matches!(err, canjson::Error::UnsupportedType { .. }));
}

#[test]
fn to_value_exposes_the_tree() -> Result<(), Box<dyn std::error::Error>> {
    let v = canjson::ser::to_value(&Some(vec![Some(1u8), None]))?;
    assert_eq!(
        v,
        canjson::Value::Seq(vec![canjson::Value::Int(1), canjson::Value::Null])
    );
    Ok(())
}

#[test]
fn writer_variant() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    canjson::ser::to_writer(&mut buf, &("a", 1, true), &canjson::Options::default())?;
    assert_eq!(buf, br#"["a",1,true]"#);
    Ok(())
}

#[test]
fn f32_fields_print_their_shortest_form() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Serialize)]
    struct Reading {
        ratio: f32,
    }
    let out = canjson::ser::to_string(&Reading { ratio: 0.1 }, &canjson::Options::default())?;
    assert_eq!(out, r#"{"ratio":0.1}"#);
    Ok(())
}
