//! Presentation rendering: a validated node tree to interactive markup.

use crate::writer::MarkupWriter;
use mml_core::{Element, ElementKind, Node};

const NAME_ATTR: &str = "name";
const VALUE_ATTR: &str = "value";
const CHECKED_ATTR: &str = "checked";

const DIV_TAG: &str = "div";
const CLASS_ATTR: &str = "class";
const CHECKBOX_GROUP_CLASS: &str = "checkbox-group";

const INPUT_TAG: &str = "input";
const TYPE_ATTR: &str = "type";
const CHECKBOX_INPUT_TYPE: &str = "checkbox";
const DEFAULT_CHECKBOX_VALUE: &str = "on";

const LABEL_TAG: &str = "label";

/// Renders a validated node into presentation markup.
///
/// Must only be called after the subtree validated successfully; rendering
/// performs no checks of its own. Read-only with respect to the node, so the
/// same tree renders identically any number of times, and disjoint trees can
/// render concurrently.
pub fn render_node(node: &Node, out: &mut MarkupWriter) {
    match node {
        Node::Text(value) => out.text(value),
        Node::Element(el) => render_element(el, out),
    }
}

/// Renders a node tree to a presentation markup string.
pub fn render_to_string(node: &Node) -> String {
    let mut out = MarkupWriter::new();
    render_node(node, &mut out);
    out.finish()
}

fn render_element(el: &Element, out: &mut MarkupWriter) {
    match el.kind() {
        // Text runs are leaves (`Node::Text`); an element carrying the text
        // kind has no presentation form of its own.
        ElementKind::Text => log::warn!("element node with text kind has no presentation form"),
        ElementKind::Bold => render_wrapped(el, "b", out),
        ElementKind::Italic => render_wrapped(el, "i", out),
        ElementKind::Checkbox => render_checkbox(el, out),
    }
}

fn render_wrapped(el: &Element, tag: &str, out: &mut MarkupWriter) {
    out.open_element(tag);
    for child in el.children() {
        render_node(child, out);
    }
    out.close_element();
}

/// Expands a checkbox into its presentation structure: a fixed wrapper div,
/// a self-closing input with derived attributes, and a label wrapping the
/// rendered children in document order.
fn render_checkbox(el: &Element, out: &mut MarkupWriter) {
    out.open_element_with_attrs(DIV_TAG, &[(CLASS_ATTR, CHECKBOX_GROUP_CLASS)]);

    out.print_element(INPUT_TAG, &checkbox_input_attrs(el));

    out.open_element(LABEL_TAG);
    for child in el.children() {
        render_node(child, out);
    }
    out.close_element(); // label
    out.close_element(); // div
}

/// Derives the input attribute list. The attributes are not copied verbatim
/// from the source: `type` is a fixed constant, `name` is copied through,
/// `checked` only when present, and `value` falls back to the literal
/// default `"on"` when absent. Emission order is observable: type, name,
/// checked, value.
fn checkbox_input_attrs(el: &Element) -> Vec<(&'static str, &str)> {
    let mut attrs: Vec<(&'static str, &str)> = Vec::with_capacity(4);
    attrs.push((TYPE_ATTR, CHECKBOX_INPUT_TYPE));
    attrs.push((NAME_ATTR, el.attribute(NAME_ATTR).unwrap_or_default()));
    if let Some(checked) = el.attribute(CHECKED_ATTR) {
        attrs.push((CHECKED_ATTR, checked));
    }
    attrs.push((
        VALUE_ATTR,
        el.attribute(VALUE_ATTR).unwrap_or(DEFAULT_CHECKBOX_VALUE),
    ));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use mml_core::default_registry;

    fn checkbox(name: &str) -> Element {
        let mut el = default_registry()
            .new_element(ElementKind::Checkbox)
            .unwrap();
        el.set_attribute("name", name).unwrap();
        el
    }

    #[test]
    fn test_text_node_is_escaped() {
        let node = Node::text("1 < 2 & 3");
        assert_eq!(render_to_string(&node), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn test_bold_and_italic_wrap_children() {
        let registry = default_registry();
        let mut italic = registry.new_element(ElementKind::Italic).unwrap();
        italic.append_child(Node::text("really"));
        let mut bold = registry.new_element(ElementKind::Bold).unwrap();
        bold.append_child(Node::text("I "));
        bold.append_child(italic);
        bold.append_child(Node::text(" agree"));

        assert_eq!(
            render_to_string(&bold.into()),
            "<b>I <i>really</i> agree</b>"
        );
    }

    #[test]
    fn test_checkbox_without_value_uses_default() {
        let mut el = checkbox("agree");
        el.append_child(Node::text("I agree"));
        el.validate().unwrap();

        assert_eq!(
            render_to_string(&el.into()),
            "<div class=\"checkbox-group\">\
             <input type=\"checkbox\" name=\"agree\" value=\"on\" />\
             <label>I agree</label></div>"
        );
    }

    #[test]
    fn test_checkbox_explicit_value_is_never_defaulted() {
        let mut el = checkbox("agree");
        el.set_attribute("value", "yes").unwrap();
        el.append_child(Node::text("I agree"));
        el.validate().unwrap();

        let html = render_to_string(&el.into());
        assert!(html.contains("value=\"yes\""));
        assert!(!html.contains("value=\"on\""));
    }

    #[test]
    fn test_checkbox_attr_order_with_checked() {
        let mut el = checkbox("agree");
        el.set_attribute("checked", "true").unwrap();
        el.set_attribute("value", "yes").unwrap();
        el.append_child(Node::text("I agree"));
        el.validate().unwrap();

        assert_eq!(
            render_to_string(&el.into()),
            "<div class=\"checkbox-group\">\
             <input type=\"checkbox\" name=\"agree\" checked=\"true\" value=\"yes\" />\
             <label>I agree</label></div>"
        );
    }

    #[test]
    fn test_checked_is_omitted_when_absent() {
        let mut el = checkbox("agree");
        el.append_child(Node::text("I agree"));
        el.validate().unwrap();

        assert!(!render_to_string(&el.into()).contains("checked"));
    }

    #[test]
    fn test_attribute_values_are_escaped_on_emission() {
        let mut el = checkbox("a\"b&c");
        el.append_child(Node::text("label"));
        el.validate().unwrap();

        assert!(render_to_string(&el.into()).contains("name=\"a&quot;b&amp;c\""));
    }

    #[test]
    fn test_label_wraps_children_in_order() {
        let registry = default_registry();
        let mut el = checkbox("agree");
        let mut bold = registry.new_element(ElementKind::Bold).unwrap();
        bold.append_child(Node::text("terms"));
        el.append_child(Node::text("I accept the "));
        el.append_child(bold);
        el.validate().unwrap();

        let html = render_to_string(&el.into());
        assert!(html.contains("<label>I accept the <b>terms</b></label>"));
    }
}
