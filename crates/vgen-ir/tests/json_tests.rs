use vgen_ir::{Callee, Fragment, HelperId, IRNode, IrError, RootNode};

#[test]
fn test_decode_root() {
    let source = r#"{
        "helpers": [7, 18],
        "components": ["Foo"],
        "hoists": [{ "type": "SimpleExpression", "content": "hello", "isStatic": true }],
        "cached": 2,
        "codegenNode": {
            "type": "CallExpression",
            "callee": 7,
            "arguments": ["\"div\"", { "helper": 18 }]
        }
    }"#;

    let root = RootNode::from_json(source).expect("valid root");
    assert_eq!(root.helpers, vec![HelperId::CREATE_VNODE, HelperId::TO_DISPLAY_STRING]);
    assert_eq!(root.components, vec!["Foo".to_string()]);
    assert_eq!(root.hoists, vec![IRNode::simple("hello", true)]);
    assert_eq!(root.cached, 2);
    assert_eq!(root.temps, 0);
    assert!(root.directives.is_empty());

    let Some(IRNode::CallExpression {
        callee, arguments, ..
    }) = root.codegen_node
    else {
        panic!("expected a call expression");
    };
    assert_eq!(callee, Callee::Helper(HelperId::CREATE_VNODE));
    assert_eq!(
        arguments,
        vec![
            Fragment::Raw("\"div\"".to_string()),
            Fragment::Helper {
                helper: HelperId::TO_DISPLAY_STRING
            },
        ]
    );
}

#[test]
fn test_decode_empty_root() {
    let root = RootNode::from_json("{}").expect("empty object is a valid root");
    assert_eq!(root, RootNode::default());
    assert!(root.codegen_node.is_none());
}

#[test]
fn test_unknown_node_type_is_malformed() {
    let err = IRNode::from_json(r#"{ "type": "VNodeCall", "tag": "div" }"#).unwrap_err();
    assert!(matches!(err, IrError::Decode(_)));
    assert!(err.to_string().starts_with("malformed IR"));
}

#[test]
fn test_missing_required_field_is_malformed() {
    let err = IRNode::from_json(r#"{ "type": "Interpolation" }"#).unwrap_err();
    assert!(matches!(err, IrError::Decode(_)));
}

#[test]
fn test_nested_unknown_node_type_is_named() {
    let source = r#"{
        "type": "CallExpression",
        "callee": 7,
        "arguments": ["\"div\"", { "type": "VNodeCall", "tag": "span" }]
    }"#;
    let message = IRNode::from_json(source).unwrap_err().to_string();
    assert!(message.starts_with("malformed IR"), "{message}");
    assert!(message.contains("VNodeCall"), "{message}");
    assert!(message.contains("SimpleExpression"), "{message}");

    let source = r#"{
        "codegenNode": {
            "type": "ArrayExpression",
            "elements": [["a", { "type": "Nope" }]]
        }
    }"#;
    let message = RootNode::from_json(source).unwrap_err().to_string();
    assert!(message.contains("Nope"), "{message}");
}

#[test]
fn test_nested_missing_field_is_reported() {
    let source = r#"{
        "type": "TemplateLiteral",
        "elements": ["foo", { "type": "Interpolation" }]
    }"#;
    let message = IRNode::from_json(source).unwrap_err().to_string();
    assert!(message.contains("content"), "{message}");
}

#[test]
fn test_decode_root_from_reader() {
    let source = br#"{ "helpers": [7], "temps": 2 }"#;
    let root = RootNode::from_reader(&source[..]).expect("valid root");
    assert_eq!(root.helpers, vec![HelperId::CREATE_VNODE]);
    assert_eq!(root.temps, 2);

    let err = RootNode::from_reader(&b"{ \"helpers\": "[..]).unwrap_err();
    assert!(matches!(err, IrError::Decode(_)));
}

#[test]
fn test_fragment_forms() {
    let node = IRNode::from_json(
        r#"{
            "type": "CompoundExpression",
            "children": [
                "_ctx.foo + ",
                { "helper": 18 },
                ["a", "b"],
                { "type": "Interpolation", "content": { "type": "SimpleExpression", "content": "bar" } }
            ]
        }"#,
    )
    .expect("valid compound");

    assert_eq!(
        node,
        IRNode::compound(vec![
            "_ctx.foo + ".into(),
            HelperId::TO_DISPLAY_STRING.into(),
            vec![Fragment::from("a"), Fragment::from("b")].into(),
            IRNode::interpolation("bar").into(),
        ])
    );
}

#[test]
fn test_callee_name_or_helper() {
    let by_name = IRNode::from_json(r#"{ "type": "CallExpression", "callee": "_push" }"#)
        .expect("named callee");
    assert_eq!(by_name, IRNode::call("_push", vec![]));

    let by_helper = IRNode::from_json(r#"{ "type": "CallExpression", "callee": 16 }"#)
        .expect("helper callee");
    assert_eq!(by_helper, IRNode::call(HelperId::RENDER_SLOT, vec![]));
}

#[test]
fn test_cache_flag_name() {
    let node = IRNode::from_json(
        r#"{ "type": "CacheExpression", "index": 1, "isVNode": true,
             "value": { "type": "SimpleExpression", "content": "foo" } }"#,
    )
    .expect("valid cache");
    assert_eq!(node, IRNode::cache(1, IRNode::simple("foo", false), true));
}

#[test]
fn test_locations_are_preserved() {
    let node = IRNode::from_json(
        r#"{ "type": "Text", "content": "hi",
             "loc": { "start": { "offset": 4, "line": 1, "column": 5 },
                      "end": { "offset": 6, "line": 1, "column": 7 },
                      "source": "hi" } }"#,
    )
    .expect("valid text");
    assert_eq!(node.loc().start.offset, 4);
    assert_eq!(node.loc().source, "hi");
    assert!(!node.loc().is_stub());
    assert!(IRNode::text("hi").loc().is_stub());
}

#[test]
fn test_root_json_round_trip() {
    let mut root = RootNode::with_codegen(IRNode::conditional(
        IRNode::simple("ok", false),
        IRNode::call("foo", vec![]),
        IRNode::simple("bar", false),
    ));
    root.helpers.push(HelperId::CREATE_VNODE);

    let json = root.to_json().expect("encodable");
    assert_eq!(RootNode::from_json(&json).expect("decodable"), root);
}
