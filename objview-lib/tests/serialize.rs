use objview_lib::build::{build, BuildOptions};
use objview_lib::model::{NodeType, Value};
use serde_json::json;

#[test]
fn test_serialize_node_tree() {
    let value = Value::from(json!({"a": 1, "list": ["x"], "secret": {"k": 1}}));
    let options = BuildOptions::new().with_redact_keys(["secret"]).unwrap();
    let nodes = build(&value, &options).unwrap();

    let serialized = serde_json::to_value(&nodes).unwrap();
    assert_eq!(
        serialized,
        json!([
            {
                "id": "a",
                "key": "a.0",
                "name": "a",
                "level": 0,
                "type": "integer",
                "value": "1",
                "inArray": false
            },
            {
                "id": "list",
                "key": "list.0",
                "name": "list",
                "level": 0,
                "type": "array",
                "inArray": false,
                "children": [
                    {
                        "id": "list.0",
                        "key": "0.1",
                        "name": "0",
                        "level": 1,
                        "type": "string",
                        "value": "x",
                        "inArray": true
                    }
                ]
            },
            {
                "id": "secret",
                "key": "secret.0",
                "name": "secret",
                "level": 0,
                "type": "redacted",
                "inArray": false
            }
        ])
    );
}

#[test]
fn test_node_type_names() {
    let all = [
        NodeType::String,
        NodeType::Integer,
        NodeType::Float,
        NodeType::Nan,
        NodeType::Null,
        NodeType::Undefined,
        NodeType::Boolean,
        NodeType::Callable,
        NodeType::Object,
        NodeType::Array,
        NodeType::Redacted,
    ];
    for node_type in all {
        assert_eq!(
            serde_json::to_value(node_type).unwrap(),
            json!(node_type.as_str())
        );
        assert_eq!(node_type.to_string(), node_type.as_str());
    }
}
