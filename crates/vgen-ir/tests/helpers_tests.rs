use vgen_ir::helpers::{CORE_HELPERS, SSR_HELPERS};
use vgen_ir::{HelperId, HelperRegistry};

#[test]
fn test_default_registry_names() {
    let registry = HelperRegistry::new();
    assert_eq!(registry.name(HelperId::CREATE_VNODE), Some("createVNode"));
    assert_eq!(
        registry.name(HelperId::CREATE_COMMENT),
        Some("createCommentVNode")
    );
    assert_eq!(
        registry.name(HelperId::TO_DISPLAY_STRING),
        Some("toDisplayString")
    );
    assert_eq!(
        registry.name(HelperId::SSR_RENDER_ATTR),
        Some("ssrRenderAttr")
    );
    assert_eq!(registry.entries().len(), CORE_HELPERS.len() + SSR_HELPERS.len());
}

#[test]
fn test_empty_registry_has_no_names() {
    let registry = HelperRegistry::empty();
    assert!(registry.entries().is_empty());
    assert_eq!(registry.name(HelperId::FRAGMENT), None);
    }

#[test]
fn test_register_platform_helper() {
    let mut registry = HelperRegistry::new();
    let v_show = HelperId(200);
    assert_eq!(registry.name(v_show), None);

    registry.register(v_show, "vShow");
    assert_eq!(registry.name(v_show), Some("vShow"));

    // Re-registering renames
    registry.register(v_show, "vShowDev");
    assert_eq!(registry.name(v_show), Some("vShowDev"));
}

#[test]
fn test_entries_sorted_by_id() {
    let mut registry = HelperRegistry::empty();
    registry.register(HelperId(42), "later");
    registry.register(HelperId(3), "earlier");
    registry.register(HelperId(7), "middle");

    let entries = registry.entries();
    assert_eq!(
        entries,
        vec![
            (HelperId(3), "earlier"),
            (HelperId(7), "middle"),
            (HelperId(42), "later"),
        ]
    );
}

#[test]
fn test_ssr_range() {
    assert!(!HelperId::CREATE_VNODE.is_ssr());
    assert!(!HelperId::WITH_CTX.is_ssr());
    assert!(HelperId::SSR_INTERPOLATE.is_ssr());
    assert!(HelperId::SSR_RENDER_SUSPENSE.is_ssr());
    assert!(!HelperId(200).is_ssr());

    for &(id, _) in SSR_HELPERS {
        assert!(id.is_ssr(), "{id} should be in the server-renderer range");
    }
}

#[test]
fn test_helper_display() {
    assert_eq!(HelperId::CREATE_VNODE.to_string(), "helper#7");
}
