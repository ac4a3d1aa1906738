use super::{Attribute, Document, Node, NodeId, NodeName};
use crate::html::VoidElementSet;
use crate::parser::Token;

/// Builds a [`Document`] from a flat token stream.
///
/// The builder is as permissive as the lexer: it never fails. A closing tag
/// pops whatever element is currently open without checking its name, so
/// mismatched markup silently produces a different tree shape instead of an
/// error. A void element is auto-closed as soon as the next sibling tag
/// opens; content between a void element and that tag still attaches to it,
/// but the serializer drops void children on output.
pub fn build(tokens: &[Token], void_elements: &VoidElementSet) -> Document {
    TreeBuilder::new(void_elements).run(tokens)
}

struct TreeBuilder<'v> {
    document: Document,
    open_path: Vec<NodeId>,
    void_elements: &'v VoidElementSet,
}

impl<'v> TreeBuilder<'v> {
    fn new(void_elements: &'v VoidElementSet) -> Self {
        TreeBuilder {
            document: Document::new(),
            open_path: vec![Document::ROOT],
            void_elements,
        }
    }

    fn run(mut self, tokens: &[Token]) -> Document {
        let mut i = 0;

        while i < tokens.len() {
            match &tokens[i] {
                Token::TagOpenStart => self.open_element(tokens.get(i + 1)),
                Token::TagCloseStart => self.close_element(),
                Token::AttrName(name) => {
                    // A value, if any, sits two tokens ahead behind the
                    // equals sign; consume both along with the name.
                    if let Some(Token::AttrValue(value)) = tokens.get(i + 2) {
                        self.add_attr(name, value);
                        i += 2;
                    } else {
                        self.add_attr(name, "");
                    }
                }
                Token::Text(text) | Token::RawCode(text) => self.append_leaf(Node::data(text)),
                Token::CommentBody(text) => self.append_leaf(Node::comment(text)),
                _ => (),
            }

            i += 1;
        }

        self.document
    }

    fn open_element(&mut self, name_token: Option<&Token>) {
        let name = match name_token {
            Some(Token::TagName(name)) => name.clone(),
            _ => String::new(),
        };

        if self.top_is_void() {
            self.open_path.pop();
        }

        let id = self.document.append(self.top(), Node::element(name));

        self.open_path.push(id);
    }

    fn close_element(&mut self) {
        // No name match against the opener; the root itself is never popped.
        if self.open_path.len() > 1 {
            self.open_path.pop();
        }
    }

    fn add_attr(&mut self, name: &str, value: &str) {
        let top = self.top();

        self.document.node_mut(top).attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn append_leaf(&mut self, node: Node) {
        self.document.append(self.top(), node);
    }

    #[inline]
    fn top(&self) -> NodeId {
        self.open_path[self.open_path.len() - 1]
    }

    fn top_is_void(&self) -> bool {
        match &self.document[self.top()].name {
            NodeName::Element(name) => self.void_elements.contains(name),
            _ => false,
        }
    }
}
