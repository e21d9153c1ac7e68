//! Property tests: tokenizing is lossless and stable under re-tokenization.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use stencil_html::{Node, PartKind, TemplateLanguage, parse, reconstruct};

/// Markup-heavy fragments; plain random strings almost never hit a tag.
const FRAGMENTS: &[&str] = &[
    "<", ">", "/", "/>", "</", "=", "\"", "'", " ", "\n", "\t", "<%", "<%=", "%>", "[%", "[%=",
    "%]", "<!--", "-->", "<![CDATA[", "]]>", "div", "a", "class", "é", "日本",
];

#[derive(Debug, Clone)]
struct Template(String);

impl Arbitrary for Template {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        let text = (0..len)
            .filter_map(|_| g.choose(FRAGMENTS).copied())
            .collect();
        Self(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|text| !text.is_empty())
                .map(Self),
        )
    }
}

const LANGUAGES: [TemplateLanguage; 3] = [
    TemplateLanguage::Html,
    TemplateLanguage::Javascript,
    TemplateLanguage::Lodash,
];

fn parts_are_ordered_slices(input: &str, nodes: &[Node]) -> bool {
    nodes.iter().all(|node| {
        let mut cursor = node.span().start;
        let parts_ok = node.parts().into_iter().all(|part| {
            let ordered = part.span().start >= cursor && !part.span().is_empty();
            cursor = part.span().end;
            ordered && input.get(part.span().range()) == Some(part.text())
        });
        parts_ok && cursor <= node.span().end
    })
}

#[quickcheck]
fn prop_reconstruction_is_lossless(template: Template) -> bool {
    LANGUAGES.iter().all(|&language| {
        let nodes = parse(&template.0, language);
        reconstruct(&nodes) == template.0 && parts_are_ordered_slices(&template.0, &nodes)
    })
}

#[quickcheck]
fn prop_retokenizing_is_idempotent(template: Template) -> bool {
    LANGUAGES.iter().all(|&language| {
        let nodes = parse(&template.0, language);
        parse(&reconstruct(&nodes), language) == nodes
    })
}

#[quickcheck]
fn prop_text_nodes_cover_their_source(template: Template) -> bool {
    LANGUAGES.iter().all(|&language| {
        parse(&template.0, language).iter().all(|node| match node {
            Node::Text(text) => text.text() == node.source(),
            _ => true,
        })
    })
}

#[quickcheck]
fn prop_text_only_profile_yields_at_most_one_node(template: Template) -> bool {
    parse(&template.0, TemplateLanguage::Javascript).len() <= 1
}

#[quickcheck]
fn prop_quote_markers_only_in_values(template: Template) -> bool {
    parse(&template.0, TemplateLanguage::Html)
        .iter()
        .filter_map(Node::as_element)
        .all(|element| {
            let quote_in_name = element
                .name_parts()
                .iter()
                .chain(element.attributes().iter().flat_map(|a| a.name_parts()))
                .any(|part| {
                    matches!(
                        part.kind(),
                        PartKind::QuotedValueStart | PartKind::QuotedValueEnd
                    )
                });
            let names_present = element
                .attributes()
                .iter()
                .all(|attribute| !attribute.is_nameless() || attribute.is_quoted());
            !quote_in_name && names_present
        })
}
