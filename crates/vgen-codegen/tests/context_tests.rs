use vgen_codegen::{CodegenContext, CodegenError, CodegenOptions};
use vgen_ir::{HelperId, HelperRegistry, RootNode};

#[test]
fn test_push_and_indentation() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let mut ctx = CodegenContext::new(&options, &registry);

    ctx.push("{");
    ctx.indent();
    ctx.push("a");
    ctx.newline();
    ctx.push("b");
    assert_eq!(ctx.indent_level(), 1);
    ctx.deindent(false);
    ctx.push("}");

    assert_eq!(ctx.code(), "{\n  a\n  b\n}");
    assert_eq!(ctx.indent_level(), 0);
}

#[test]
fn test_deindent_without_newline() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let mut ctx = CodegenContext::new(&options, &registry);

    ctx.indent();
    ctx.indent();
    ctx.push("x");
    ctx.deindent(true);
    ctx.newline();
    ctx.push("y");

    assert_eq!(ctx.code(), "\n  \n    x\n  y");
}

#[test]
fn test_deindent_saturates_at_zero() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let mut ctx = CodegenContext::new(&options, &registry);

    ctx.deindent(true);
    assert_eq!(ctx.indent_level(), 0);
    assert_eq!(ctx.code(), "");
}

#[test]
fn test_helper_marks_used() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let mut ctx = CodegenContext::new(&options, &registry);

    assert_eq!(ctx.helper(HelperId::CREATE_VNODE).unwrap(), "_createVNode");
    assert_eq!(
        ctx.helper_name(HelperId::TO_DISPLAY_STRING).unwrap(),
        "toDisplayString"
    );
    // Repeated lookups are not duplicated
    ctx.push_helper(HelperId::CREATE_VNODE).unwrap();

    let (code, helpers) = ctx.into_parts();
    assert_eq!(code, "_createVNode");
    assert_eq!(
        helpers,
        vec![HelperId::CREATE_VNODE, HelperId::TO_DISPLAY_STRING]
    );
}

#[test]
fn test_unknown_helper() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::empty();
    let mut ctx = CodegenContext::new(&options, &registry);

    let err = ctx.helper(HelperId::CREATE_VNODE).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::UnknownHelper(HelperId::CREATE_VNODE)
    ));
    let (_, helpers) = ctx.into_parts();
    assert!(helpers.is_empty());
}

#[test]
fn test_root_helpers_seed_used_list() {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let root = RootNode {
        helpers: vec![HelperId::RESOLVE_DIRECTIVE, HelperId::CREATE_VNODE],
        ..RootNode::default()
    };
    let mut ctx = CodegenContext::for_root(&root, &options, &registry);

    ctx.helper(HelperId::SET_BLOCK_TRACKING).unwrap();
    ctx.helper(HelperId::CREATE_VNODE).unwrap();

    let (code, helpers) = ctx.into_parts();
    assert!(code.is_empty());
    assert_eq!(
        helpers,
        vec![
            HelperId::RESOLVE_DIRECTIVE,
            HelperId::CREATE_VNODE,
            HelperId::SET_BLOCK_TRACKING,
        ]
    );
}
