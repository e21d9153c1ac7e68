use core::fmt;

use crate::tokenizer::{Attribute, Node, Part};

/// Display adapter printing nodes as an indented tree.
///
/// ```text
/// element <div> [0..17]
///   name: text "div"
///   attribute "class"
///     name: text "class"
///     value: attribute_quoted_value_start "\""
/// ```
pub struct NodeTree<'a>(pub &'a [Node]);

fn write_parts(
    f: &mut fmt::Formatter<'_>,
    indent: &str,
    label: &str,
    parts: &[Part],
) -> fmt::Result {
    for part in parts {
        writeln!(f, "{indent}{label}: {} {:?}", part.kind(), part.text())?;
    }
    Ok(())
}

fn write_attribute(f: &mut fmt::Formatter<'_>, attribute: &Attribute) -> fmt::Result {
    if attribute.is_nameless() {
        writeln!(f, "  attribute (nameless) [{}]", attribute.span())?;
    } else {
        writeln!(f, "  attribute {:?} [{}]", attribute.name(), attribute.span())?;
    }
    write_parts(f, "    ", "name", attribute.name_parts())?;
    write_parts(f, "    ", "value", attribute.value_parts())
}

impl fmt::Display for NodeTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.0 {
            match node {
                Node::CData(content) | Node::Comment(content) | Node::Text(content) => {
                    writeln!(f, "{} [{}]", node.kind_name(), node.span())?;
                    write_parts(f, "  ", "content", content.content_parts())?;
                }
                Node::Element(element) => {
                    let slash = if element.is_closing() { "/" } else { "" };
                    let self_closing = if element.is_self_closing() { " /" } else { "" };
                    writeln!(
                        f,
                        "element <{slash}{}{self_closing}> [{}]",
                        element.name(),
                        node.span()
                    )?;
                    write_parts(f, "  ", "name", element.name_parts())?;
                    for attribute in element.attributes() {
                        write_attribute(f, attribute)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Render nodes as an indented tree.
#[must_use]
pub fn format_nodes(nodes: &[Node]) -> String {
    NodeTree(nodes).to_string()
}

/// Print nodes as an indented tree to stdout.
pub fn print_nodes(nodes: &[Node]) {
    print!("{}", NodeTree(nodes));
}
