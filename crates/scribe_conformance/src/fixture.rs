//! Turns Ruby fixtures into syntax trees with tree-sitter.
//!
//! The tree-sitter Ruby grammar is lowered into the child layouts the rules
//! expect (`send`, `block`, `def`, `defs`, `class`, `module`, `sclass`,
//! `begin`, `const`, ...). Constructs the rules never look at keep their
//! tree-sitter kind name and their named children. Every `comment` node,
//! including `=begin`/`=end` blocks, becomes a tree comment; heredoc bodies
//! do not.

use scribe_syntax::{Child, NodeId, NodeKind, SyntaxTree, TreeBuilder, TreeError};
use thiserror::Error;
use tree_sitter::{LanguageError, Node, Parser};

/// A fixture that cannot be turned into a tree.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The Ruby grammar could not be loaded.
    #[error("failed to load the Ruby grammar: {0}")]
    Language(#[from] LanguageError),

    /// tree-sitter returned no tree.
    #[error("failed to parse fixture")]
    Parse,

    /// The fixture is not valid Ruby.
    #[error("line {line}: syntax error in fixture")]
    Syntax {
        /// 1-indexed line of the first error.
        line: usize,
    },

    /// The lowered tree failed validation.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Parses a Ruby fixture into a syntax tree.
pub fn read_fixture(source: &str) -> Result<SyntaxTree, FixtureError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_ruby::LANGUAGE.into())?;
    let parsed = parser.parse(source, None).ok_or(FixtureError::Parse)?;
    let program = parsed.root_node();
    if program.has_error() {
        let line = first_error(program).map_or(1, |node| node.start_position().row + 1);
        return Err(FixtureError::Syntax { line });
    }

    let mut lowering = Lowering {
        source,
        builder: TreeBuilder::new("fixture.rb", source),
    };
    lowering.collect_comments(program);
    let root = match lowering.sequence(program) {
        Some(root) => root,
        None => {
            let span = lowering.builder.span(0, source.len() as u32);
            lowering.builder.begin(span, Vec::new())
        }
    };
    Ok(lowering.builder.finish(root)?)
}

/// Like [`read_fixture`].
///
/// # Panics
///
/// Panics with the parse error if the fixture cannot be read.
pub fn fixture(source: &str) -> SyntaxTree {
    read_fixture(source).unwrap_or_else(|err| panic!("bad fixture: {err}"))
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

/// Named children that take part in the tree, i.e. not comments or heredoc
/// bodies.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra() && !matches!(child.kind(), "comment" | "heredoc_body"))
        .collect();
    children
}

/// The statement container of a class, module, method or block.
fn body_of(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("body").or_else(|| {
        named_children(node)
            .into_iter()
            .find(|child| matches!(child.kind(), "body_statement" | "block_body"))
    })
}

struct Lowering<'s> {
    source: &'s str,
    builder: TreeBuilder,
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn node(&mut self, kind: impl Into<NodeKind>, node: Node<'_>, children: Vec<Child>) -> NodeId {
        let span = self.builder.span(node.start_byte() as u32, node.end_byte() as u32);
        self.builder.node(kind, span, children)
    }

    fn collect_comments(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children {
            if child.kind() == "comment" {
                let text = self.text(child).trim_end_matches(['\n', '\r']);
                let start = child.start_byte() as u32;
                let span = self.builder.span(start, start + text.len() as u32);
                self.builder.comment(span);
            } else {
                self.collect_comments(child);
            }
        }
    }

    /// Lowers a statement container: nothing, the single statement, or a
    /// `begin` over all of them.
    fn sequence(&mut self, container: Node<'_>) -> Option<NodeId> {
        let statements = named_children(container);
        let (first, last) = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => (first.start_byte() as u32, last.end_byte() as u32),
            _ => return None,
        };
        let mut ids: Vec<_> = statements.into_iter().map(|stmt| self.lower(stmt)).collect();
        if ids.len() == 1 {
            return ids.pop();
        }
        let span = self.builder.span(first, last);
        Some(self.builder.begin(span, ids))
    }

    fn body(&mut self, owner: Node<'_>) -> Child {
        match body_of(owner) {
            Some(body) if matches!(body.kind(), "body_statement" | "block_body") => {
                slot(self.sequence(body))
            }
            Some(expr) => Child::Node(self.lower(expr)),
            None => Child::Nil,
        }
    }

    fn field(&mut self, node: Node<'_>, name: &str) -> Child {
        slot(node.child_by_field_name(name).map(|child| self.lower(child)))
    }

    fn lower(&mut self, node: Node<'_>) -> NodeId {
        match node.kind() {
            "class" => {
                let name = self.field(node, "name");
                let superclass = match node.child_by_field_name("superclass") {
                    Some(superclass) => slot(
                        named_children(superclass)
                            .first()
                            .map(|expr| self.lower(*expr)),
                    ),
                    None => Child::Nil,
                };
                let body = self.body(node);
                self.node(NodeKind::Class, node, vec![name, superclass, body])
            }
            "module" => {
                let name = self.field(node, "name");
                let body = self.body(node);
                self.node(NodeKind::Module, node, vec![name, body])
            }
            "singleton_class" => {
                let target = self.field(node, "value");
                let body = self.body(node);
                self.node(NodeKind::SClass, node, vec![target, body])
            }
            "method" => {
                let name = self.method_name(node);
                let args = self.parameters(node);
                let body = self.body(node);
                self.node(NodeKind::Def, node, vec![name, Child::Node(args), body])
            }
            "singleton_method" => {
                let receiver = self.field(node, "object");
                let name = self.method_name(node);
                let args = self.parameters(node);
                let body = self.body(node);
                self.node(NodeKind::Defs, node, vec![receiver, name, Child::Node(args), body])
            }
            "call" => self.call(node),
            "identifier" => {
                let name = self.text(node);
                self.node(NodeKind::Send, node, vec![Child::Nil, Child::sym(name)])
            }
            "constant" => {
                let name = self.text(node);
                self.node(NodeKind::Const, node, vec![Child::Nil, Child::sym(name)])
            }
            "scope_resolution" => {
                let scope = self.field(node, "scope");
                let name = node.child_by_field_name("name").map_or("", |name| self.text(name));
                self.node(NodeKind::Const, node, vec![scope, Child::sym(name)])
            }
            "self" => self.node(NodeKind::SelfRef, node, Vec::new()),
            "simple_symbol" | "hash_key_symbol" => {
                let name = self.text(node).trim_start_matches(':').trim_end_matches(':');
                self.node(NodeKind::Sym, node, vec![Child::sym(name)])
            }
            "string" if named_children(node).iter().all(|part| part.kind() == "string_content") => {
                let value: String = named_children(node)
                    .into_iter()
                    .map(|part| self.text(part))
                    .collect();
                self.node(NodeKind::Str, node, vec![Child::str(value)])
            }
            "integer" => match self.text(node).replace('_', "").parse() {
                Ok(value) => self.node(NodeKind::Int, node, vec![Child::int(value)]),
                Err(_) => self.generic(node, "integer"),
            },
            "begin" => self.generic(node, "kwbegin"),
            "block" | "do_block" => self.generic(node, "block_literal"),
            kind => self.generic(node, kind),
        }
    }

    fn generic(&mut self, node: Node<'_>, kind: &str) -> NodeId {
        let children = named_children(node)
            .into_iter()
            .map(|child| Child::Node(self.lower(child)))
            .collect();
        self.node(NodeKind::from_name(kind), node, children)
    }

    fn method_name(&self, node: Node<'_>) -> Child {
        Child::sym(node.child_by_field_name("name").map_or("", |name| self.text(name)))
    }

    /// `send [receiver|nil, :name, args...]`, wrapped in
    /// `block [send, args, body|nil]` when the call has a block.
    fn call(&mut self, node: Node<'_>) -> NodeId {
        let receiver = node.child_by_field_name("receiver");
        let method = node.child_by_field_name("method");
        let arguments = node.child_by_field_name("arguments");
        let block = node.child_by_field_name("block");

        let safe_navigation = node
            .child_by_field_name("operator")
            .is_some_and(|op| op.kind() == "&.");
        let kind = if safe_navigation { NodeKind::CSend } else { NodeKind::Send };
        let name = method.map_or("call", |method| self.text(method));

        let mut children = vec![slot(receiver.map(|recv| self.lower(recv))), Child::sym(name)];
        if let Some(arguments) = arguments {
            for argument in named_children(arguments) {
                children.push(Child::Node(self.lower(argument)));
            }
        }

        let Some(block) = block else {
            return self.node(kind, node, children);
        };
        let call_end = [receiver, method, arguments]
            .into_iter()
            .flatten()
            .map(|part| part.end_byte())
            .max()
            .unwrap_or(block.start_byte()) as u32;
        let call_span = self.builder.span(node.start_byte() as u32, call_end);
        let send = self.builder.node(kind, call_span, children);
        let args = self.block_parameters(block);
        let body = self.body(block);
        self.node(NodeKind::Block, node, vec![Child::Node(send), Child::Node(args), body])
    }

    fn parameters(&mut self, method: Node<'_>) -> NodeId {
        match method.child_by_field_name("parameters") {
            Some(params) => self.parameter_list(params),
            None => {
                let at = method
                    .child_by_field_name("name")
                    .map_or(method.start_byte(), |name| name.end_byte()) as u32;
                self.builder.args(self.builder.span(at, at), Vec::new())
            }
        }
    }

    fn block_parameters(&mut self, block: Node<'_>) -> NodeId {
        match block.child_by_field_name("parameters") {
            Some(params) => self.parameter_list(params),
            None => {
                let at = block.start_byte() as u32;
                self.builder.args(self.builder.span(at, at), Vec::new())
            }
        }
    }

    fn parameter_list(&mut self, params: Node<'_>) -> NodeId {
        let children = named_children(params)
            .into_iter()
            .map(|param| Child::Node(self.parameter(param)))
            .collect();
        self.node(NodeKind::Args, params, children)
    }

    fn parameter(&mut self, param: Node<'_>) -> NodeId {
        let kind = match param.kind() {
            "identifier" => {
                let name = self.text(param);
                return self.node(NodeKind::from_name("arg"), param, vec![Child::sym(name)]);
            }
            "optional_parameter" => "optarg",
            "keyword_parameter" if param.child_by_field_name("value").is_some() => "kwoptarg",
            "keyword_parameter" => "kwarg",
            "splat_parameter" => "restarg",
            "hash_splat_parameter" => "kwrestarg",
            "block_parameter" => "blockarg",
            other => return self.generic(param, other),
        };
        let name = param.child_by_field_name("name").map_or("", |name| self.text(name));
        let mut children = vec![Child::sym(name)];
        if let Some(value) = param.child_by_field_name("value") {
            children.push(Child::Node(self.lower(value)));
        }
        self.node(NodeKind::from_name(kind), param, children)
    }
}

fn slot(id: Option<NodeId>) -> Child {
    id.map_or(Child::Nil, Child::Node)
}
