use super::{Attribute, Document, NodeId, NodeName};
use crate::html::VoidElementSet;

/// Renders `document` as indented markup text.
///
/// Depth-first pre-order walk, one line per node, each nesting level
/// indented by `indent_width` spaces. The output never starts with a blank
/// line and always ends with a newline.
pub fn serialize(document: &Document, indent_width: usize, void_elements: &VoidElementSet) -> String {
    let mut html = String::new();

    render_children(
        document,
        Document::ROOT,
        0,
        indent_width,
        void_elements,
        &mut html,
    );

    let mut out = match html.strip_prefix('\n') {
        Some(stripped) => stripped.to_string(),
        None => html,
    };

    out.push('\n');
    out
}

fn render_children(
    document: &Document,
    id: NodeId,
    depth: usize,
    indent_width: usize,
    void_elements: &VoidElementSet,
    out: &mut String,
) {
    for &child_id in document[id].children() {
        let child = &document[child_id];

        out.push('\n');
        out.push_str(&" ".repeat(indent_width * depth));

        match &child.name {
            NodeName::Data => out.push_str(&child.data),
            NodeName::Comment => {
                out.push_str("<!--");
                out.push_str(&child.data);
                out.push_str("-->");
            }
            NodeName::Element(name) => {
                out.push('<');
                out.push_str(name);
                render_attrs(&child.attrs, out);
                out.push('>');

                if !void_elements.contains(name) {
                    render_children(
                        document,
                        child_id,
                        depth + 1,
                        indent_width,
                        void_elements,
                        out,
                    );

                    out.push('\n');
                    out.push_str(&" ".repeat(indent_width * depth));
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
            }
            // The root sentinel never appears among children.
            NodeName::Root => (),
        }
    }
}

fn render_attrs(attrs: &[Attribute], out: &mut String) {
    for attr in attrs {
        out.push(' ');
        out.push_str(&attr.name);

        if !attr.value.is_empty() {
            out.push_str("=\"");
            out.push_str(&attr.value);
            out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::tree::build;

    fn canonicalize(input: &str) -> String {
        let voids = VoidElementSet::default();

        serialize(&build(&tokenize(input), &voids), 4, &voids)
    }

    #[test]
    fn nested_elements_are_indented() {
        assert_eq!(
            canonicalize("<div><span>hi</span></div>"),
            "<div>\n    <span>\n        hi\n    </span>\n</div>\n"
        );
    }

    #[test]
    fn canonical_output_is_a_fixed_point() {
        let first = canonicalize("<main><p>one</p><p>two</p><!--x--></main>");
        let second = canonicalize(&first);

        assert_eq!(first, second);
    }

    #[test]
    fn boolean_attrs_render_bare() {
        assert_eq!(
            canonicalize("<input type=\"text\" disabled>"),
            "<input type=\"text\" disabled>\n"
        );
    }

    #[test]
    fn void_elements_get_no_closing_tag_and_no_children() {
        assert_eq!(
            canonicalize("<div><br>after</div>"),
            "<div>\n    <br>\n</div>\n"
        );
    }

    #[test]
    fn comments_are_rendered_inline() {
        assert_eq!(canonicalize("<!--note-->"), "<!--note-->\n");
    }

    #[test]
    fn indent_width_is_configurable() {
        let voids = VoidElementSet::default();
        let document = build(&tokenize("<div>x</div>"), &voids);

        assert_eq!(
            serialize(&document, 2, &voids),
            "<div>\n  x\n</div>\n"
        );
    }

    #[test]
    fn empty_document_serializes_to_a_single_newline() {
        assert_eq!(canonicalize(""), "\n");
    }
}
