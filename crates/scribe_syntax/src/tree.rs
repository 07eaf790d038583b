//! The validated, read-only syntax tree.

use crate::arena::{Arena, NodeId};
use crate::comment::Comment;
use crate::data::{NodeData, TreeData};
use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::node::{Child, Node};
use scribe_source::{FileId, SourceFile, Span};
use std::collections::BTreeMap;

/// A parsed file: its source text, nodes, and comments.
///
/// Built once per file and never mutated afterwards. Parent links and sibling
/// indices are derived at construction and used only for navigation.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    file: SourceFile,
    nodes: Arena<NodeId, Node>,
    root: NodeId,
    comments: Vec<Comment>,
    /// Own-line comments keyed by the last line they cover.
    comments_by_end_line: BTreeMap<u32, usize>,
}

impl SyntaxTree {
    /// Validates host-supplied tree data and builds the tree.
    pub fn from_data(data: TreeData) -> Result<Self, TreeError> {
        let TreeData {
            file_id,
            path,
            source,
            nodes: node_data,
            comments: comment_data,
            root,
        } = data;

        if node_data.is_empty() {
            return Err(TreeError::Empty);
        }
        let len = node_data.len();
        if root.as_raw() as usize >= len {
            return Err(TreeError::RootOutOfRange {
                root: root.as_raw(),
                len,
            });
        }

        let mut links: Vec<Option<(NodeId, usize)>> = vec![None; len];
        for (index, node) in node_data.iter().enumerate() {
            if !span_in_bounds(&source, node.start, node.end) {
                return Err(TreeError::NodeSpanOutOfBounds {
                    node: index as u32,
                    start: node.start,
                    end: node.end,
                });
            }
            for (slot, child) in node.children.iter().enumerate() {
                let Child::Node(child_id) = child else {
                    continue;
                };
                let raw = child_id.as_raw();
                if raw as usize >= len {
                    return Err(TreeError::DanglingChild {
                        parent: index as u32,
                        child: raw,
                    });
                }
                if *child_id == root {
                    return Err(TreeError::RootHasParent { root: raw });
                }
                let link = &mut links[raw as usize];
                if link.is_some() {
                    return Err(TreeError::SharedChild { child: raw });
                }
                *link = Some((NodeId::from_raw(index as u32), slot));
            }
        }
        check_reachable(&node_data, root)?;

        let file_id = FileId::from_raw(file_id);
        let file = SourceFile::new(file_id, path, source);

        let mut nodes = Arena::with_capacity(len);
        for (data, link) in node_data.into_iter().zip(links) {
            nodes.alloc(Node {
                kind: data.kind,
                children: data.children,
                span: Span::new(file_id, data.start, data.end),
                parent: link.map(|(parent, _)| parent),
                sibling_index: link.map(|(_, slot)| slot),
            });
        }

        let mut comments = Vec::with_capacity(comment_data.len());
        let mut comments_by_end_line = BTreeMap::new();
        for (index, data) in comment_data.iter().enumerate() {
            if !span_in_bounds(&file.content, data.start, data.end) {
                return Err(TreeError::CommentSpanOutOfBounds {
                    index,
                    start: data.start,
                    end: data.end,
                });
            }
            let (start_line, start_col) = file.line_col(data.start);
            let end_line = file.line_of(data.end.saturating_sub(1).max(data.start));
            let line_start = data.start - (start_col - 1);
            let own_line = file.snippet(line_start, data.start).trim().is_empty();
            if own_line {
                comments_by_end_line.insert(end_line, comments.len());
            }
            comments.push(Comment {
                text: file.snippet(data.start, data.end).to_string(),
                span: Span::new(file_id, data.start, data.end),
                start_line,
                end_line,
                own_line,
            });
        }

        Ok(Self {
            file,
            nodes,
            root,
            comments,
            comments_by_end_line,
        })
    }

    /// Returns the source file the tree was built from.
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Iterates over all nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Returns the kind of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id].kind
    }

    /// Returns the parent of a node, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Returns the position of a node within its parent's children.
    pub fn sibling_index(&self, id: NodeId) -> Option<usize> {
        self.nodes[id].sibling_index
    }

    /// Returns the node occupying the slot right before this one in the
    /// parent's children.
    ///
    /// Returns `None` for the root, for the first slot, and when the previous
    /// slot is a leaf or nil.
    pub fn preceding_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id];
        let parent = node.parent?;
        let index = node.sibling_index?.checked_sub(1)?;
        self.nodes[parent].child(index).and_then(Child::as_node)
    }

    /// Returns the 1-indexed line on which a node starts.
    pub fn first_line(&self, id: NodeId) -> u32 {
        self.file.line_of(self.nodes[id].span.start)
    }

    /// Returns the source text covered by a node.
    pub fn source_text(&self, id: NodeId) -> &str {
        let span = self.nodes[id].span;
        self.file.snippet(span.start, span.end)
    }

    /// Returns all comments in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the own-line comment whose last line is `line`, if any.
    pub fn line_comment_ending_at(&self, line: u32) -> Option<&Comment> {
        self.comments_by_end_line
            .get(&line)
            .map(|&index| &self.comments[index])
    }

    /// Returns the run of own-line comments directly above a node, in source
    /// order.
    ///
    /// The run must end on the line right above the node's first line; a blank
    /// line or a line of code ends it. Trailing comments after code never
    /// belong to a run.
    pub fn leading_comments(&self, id: NodeId) -> Vec<&Comment> {
        let mut line = self.first_line(id);
        let mut block = Vec::new();
        while line > 1 {
            let Some(comment) = self.line_comment_ending_at(line - 1) else {
                break;
            };
            block.push(comment);
            line = comment.start_line;
        }
        block.reverse();
        block
    }
}

fn span_in_bounds(source: &str, start: u32, end: u32) -> bool {
    start <= end
        && (end as usize) <= source.len()
        && source.is_char_boundary(start as usize)
        && source.is_char_boundary(end as usize)
}

fn check_reachable(nodes: &[NodeData], root: NodeId) -> Result<(), TreeError> {
    let mut visited = vec![false; nodes.len()];
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let index = id.as_raw() as usize;
        if visited[index] {
            continue;
        }
        visited[index] = true;
        stack.extend(nodes[index].children.iter().filter_map(Child::as_node));
    }
    match visited.iter().position(|seen| !seen) {
        Some(index) => Err(TreeError::Detached { node: index as u32 }),
        None => Ok(()),
    }
}
