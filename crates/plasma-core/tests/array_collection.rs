//! `ArrayCollection` construction, list API and wire mapping.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use plasma_core::io::ArrayCollection;
use plasma_core::PlasmaError;

fn abc() -> ArrayCollection {
    ArrayCollection::from(vec![json!("a"), json!("b"), json!("c")])
}

fn assert_out_of_range<T: std::fmt::Debug>(res: plasma_core::Result<T>) {
    match res {
        Err(PlasmaError::IndexOutOfRange { .. }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn create() {
    assert!(ArrayCollection::<Value>::new().is_empty());
    assert_eq!(abc().as_slice(), &[json!("a"), json!("b"), json!("c")]);

    let dup: ArrayCollection<&str> = ArrayCollection::from(&["a", "b", "b"][..]);
    assert_eq!(dup.as_slice(), &["a", "b", "b"]);

    let from_iter: ArrayCollection<String> =
        ["foo", "bar", "baz"].iter().map(|s| s.to_string()).collect();
    assert_eq!(from_iter.into_vec(), vec!["foo", "bar", "baz"]);
}

#[test]
fn create_from_value_requires_a_sequence() {
    let ok = ArrayCollection::<Value>::try_from(json!([1, 2, 3])).unwrap();
    assert_eq!(ok.as_slice(), &[json!(1), json!(2), json!(3)]);

    let err = ArrayCollection::<Value>::try_from(json!({"first": "Matt", "last": "Matthews"})).unwrap_err();
    assert!(matches!(err, PlasmaError::TypeMismatch(_)), "{err}");

    let err = ArrayCollection::<Value>::try_from(json!("abc")).unwrap_err();
    assert!(matches!(err, PlasmaError::TypeMismatch(_)), "{err}");
}

#[test]
fn add_item() {
    let mut a = ArrayCollection::new();
    assert_eq!(a.len(), 0);

    a.add_item(json!("hi"));
    assert_eq!(a.as_slice(), &[json!("hi")]);
    assert_eq!(a.len(), 1);
}

#[test]
fn add_item_at() {
    let mut a = ArrayCollection::new();
    assert_out_of_range(a.add_item_at(json!("foo"), 1));

    a.add_item_at(json!("foo"), 0).unwrap();
    assert_eq!(a.as_slice(), &[json!("foo")]);
    a.add_item_at(json!("bar"), 0).unwrap();
    assert_eq!(a.as_slice(), &[json!("bar"), json!("foo")]);
    a.add_item_at(json!("baz"), 2).unwrap();
    assert_eq!(a.as_slice(), &[json!("bar"), json!("foo"), json!("baz")]);
    assert_eq!(a.len(), 3);
    assert_out_of_range(a.add_item_at(json!("x"), 4));
}

#[test]
fn get_item_at() {
    let a = abc();
    assert_eq!(a.get_item_at(0).unwrap(), "a");
    assert_eq!(a.get_item_at(1).unwrap(), "b");
    assert_eq!(a.get_item_at(2).unwrap(), "c");
    assert_out_of_range(a.get_item_at(3));
}

#[test]
fn get_item_index() {
    let a = abc();
    assert_eq!(a.get_item_index(&json!("a")), Some(0));
    assert_eq!(a.get_item_index(&json!("b")), Some(1));
    assert_eq!(a.get_item_index(&json!("c")), Some(2));
    assert_eq!(a.get_item_index(&json!("d")), None);

    let dup = ArrayCollection::from(vec![1, 2, 2]);
    assert_eq!(dup.get_item_index(&2), Some(1));
}

#[test]
fn remove_all() {
    let mut a = abc();
    assert_eq!(a.len(), 3);
    a.remove_all();
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
}

#[test]
fn remove_item_at() {
    let mut a = abc();
    assert_out_of_range(a.remove_item_at(3));

    assert_eq!(a.remove_item_at(1).unwrap(), "b");
    assert_eq!(a.as_slice(), &[json!("a"), json!("c")]);
    assert_eq!(a.remove_item_at(1).unwrap(), "c");
    assert_eq!(a.len(), 1);
    assert_eq!(a.remove_item_at(0).unwrap(), "a");
    assert!(a.is_empty());
}

#[test]
fn set_item_at() {
    let mut a = abc();
    assert_eq!(a.set_item_at(json!("d"), 1).unwrap(), "b");
    assert_eq!(a.as_slice(), &[json!("a"), json!("d"), json!("c")]);
    assert_eq!(a.len(), 3);
    assert_out_of_range(a.set_item_at(json!("e"), 3));
}

#[test]
fn list_walkthrough() {
    let mut a = abc();
    assert_eq!(a.get_item_at(1).unwrap(), "b");
    assert_eq!(a.remove_item_at(1).unwrap(), "b");
    a.add_item_at(json!("x"), 0).unwrap();
    assert_eq!(a.as_slice(), &[json!("x"), json!("a"), json!("c")]);
    assert_eq!(a.set_item_at(json!("y"), 0).unwrap(), "x");
    assert_eq!(a.as_slice(), &[json!("y"), json!("a"), json!("c")]);
}

#[test]
fn empty_collection_positional_ops_fail() {
    let mut a = ArrayCollection::<Value>::new();
    assert_out_of_range(a.get_item_at(0));
    assert_out_of_range(a.remove_item_at(0));
    assert_out_of_range(a.set_item_at(json!(1), 0));
}

#[test]
fn bounds_follow_live_length() {
    let mut a = ArrayCollection::from(vec![1, 2]);
    a.get_item_at(1).unwrap();
    a.remove_item_at(0).unwrap();
    assert_out_of_range(a.get_item_at(1));
    a.add_item(3);
    assert_eq!(*a.get_item_at(1).unwrap(), 3);
}

#[test]
fn encodes_as_sequence() {
    let mut x = ArrayCollection::new();
    x.add_item(json!("eggs"));
    assert_eq!(serde_json::to_string(&x).unwrap(), r#"["eggs"]"#);
}

#[test]
fn decodes_sequence() {
    let x: ArrayCollection = serde_json::from_str(r#"["eggs"]"#).unwrap();
    assert_eq!(x.as_slice(), &[json!("eggs")]);
}

#[test]
fn decodes_source_record() {
    let x: ArrayCollection = serde_json::from_str(r#"{"source": ["foo", "bar"]}"#).unwrap();
    assert_eq!(x.as_slice(), &[json!("foo"), json!("bar")]);

    assert!(serde_json::from_str::<ArrayCollection>(r#"{"items": ["foo"]}"#).is_err());
    assert!(serde_json::from_str::<ArrayCollection>(r#"{"source": ["a"], "extra": 1}"#).is_err());
    assert!(serde_json::from_str::<ArrayCollection>(r#"{}"#).is_err());
    assert!(serde_json::from_str::<ArrayCollection>(r#"{"source": {"a": 1}}"#).is_err());
}

#[test]
fn decodes_alias_tagged_record() {
    let x: ArrayCollection = serde_json::from_value(json!({
        "_explicitType": "flex.messaging.io.ArrayCollection",
        "source": ["foo", "bar"],
    }))
    .unwrap();
    assert_eq!(x.as_slice(), &[json!("foo"), json!("bar")]);

    let mistagged = json!({"_explicitType": "flex.messaging.io.ObjectProxy", "source": []});
    assert!(serde_json::from_value::<ArrayCollection>(mistagged).is_err());

    let tag_only = json!({"_explicitType": "flex.messaging.io.ArrayCollection"});
    assert!(serde_json::from_value::<ArrayCollection>(tag_only).is_err());
}

#[test]
fn round_trip_preserves_contents() {
    let original = ArrayCollection::from(vec![json!(1), json!("two"), json!({"three": 3}), json!(null)]);
    let back: ArrayCollection = serde_json::from_value(serde_json::to_value(&original).unwrap()).unwrap();
    assert_eq!(back, original);
}

#[test]
fn nested_in_message_body() {
    use plasma_core::messages::Message;

    let mut m = Message::async_message();
    m.envelope.body = serde_json::to_value(abc()).unwrap();
    let back: Message = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
    let items = ArrayCollection::<Value>::try_from(back.envelope.body).unwrap();
    assert_eq!(items, abc());
}

#[test]
fn declares_wire_alias() {
    assert_eq!(ArrayCollection::<Value>::class_def().alias, "flex.messaging.io.ArrayCollection");
}
