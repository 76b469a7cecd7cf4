use yaml_rust2::{Yaml, YamlLoader};
use yaml_stream::{dump, dump_file, load, load_file, Error, Node};

const DOCUMENTS: &str = r#"
title: Stream Codec
version: 3
ratio: 0.5
enabled: true
authors:
  - name: Ann
    roles: [dev, docs]
  - name: Bo
nested:
  deep:
    list: [1, 2, 3]
---
- second
- document
"#;

/// Text form of a yaml-rust2 value, for comparing against untyped nodes.
fn from_yaml_rust2(yaml: &Yaml) -> Node {
    match yaml {
        Yaml::String(text) | Yaml::Real(text) => Node::from(text.as_str()),
        Yaml::Integer(value) => Node::from(value.to_string()),
        Yaml::Boolean(value) => Node::from(value.to_string()),
        Yaml::Array(items) => Node::Sequence(items.iter().map(from_yaml_rust2).collect()),
        Yaml::Hash(entries) => entries
            .iter()
            .map(|(key, value)| {
                let key = match from_yaml_rust2(key) {
                    Node::Scalar(text) => text,
                    other => panic!("non-scalar key {other:?}"),
                };
                (key, from_yaml_rust2(value))
            })
            .collect(),
        other => panic!("unexpected value {other:?}"),
    }
}

#[test]
fn test_load_matches_yaml_rust2() {
    let ours = load(DOCUMENTS).unwrap();
    let theirs: Vec<Node> = YamlLoader::load_from_str(DOCUMENTS)
        .unwrap()
        .iter()
        .map(from_yaml_rust2)
        .collect();

    assert_eq!(ours, theirs);
}

#[test]
fn test_load_multiple_documents() {
    let docs = load(DOCUMENTS).unwrap();
    assert_eq!(docs.len(), 2);

    let first = &docs[0];
    assert_eq!(first.get("title").and_then(Node::as_str), Some("Stream Codec"));

    let roles = first
        .get("authors")
        .and_then(|authors| authors.get_index(0))
        .and_then(|author| author.get("roles"))
        .unwrap();
    assert_eq!(roles, &Node::from(vec![Node::from("dev"), Node::from("docs")]));

    assert_eq!(
        docs[1],
        Node::from(vec![Node::from("second"), Node::from("document")])
    );
}

#[test]
fn test_load_basic_scalar() {
    assert_eq!(load("foo").unwrap(), vec![Node::from("foo")]);
}

#[test]
fn test_load_reports_parse_errors() {
    let err = load("a: 1\n- b\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "did not find expected key, while parsing a block mapping, on line 2"
    );
}

#[test]
fn test_load_rejects_collection_keys() {
    let err = load("ok: 1\n---\n{a: b}: c\n").unwrap_err();
    match err {
        Error::Load { message, mark } => {
            assert!(message.contains("mapping keys must be scalars"));
            assert_eq!(mark.line, 2);
        }
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
fn test_dump_basic_scalar() {
    assert_eq!(dump(&[Node::from("foo")]).unwrap(), "--- foo\n...\n");
}

#[test]
fn test_dump_then_load_returns_same_trees() {
    let docs = load(DOCUMENTS).unwrap();
    let output = dump(&docs).unwrap();
    assert_eq!(load(&output).unwrap(), docs);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stream.yml");

    dump_file(&path, &[Node::from("foo")]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "--- foo\n...\n");
    assert_eq!(load_file(&path).unwrap(), vec![Node::from("foo")]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
