use std::rc::Rc;

use crate::{
    candidate::DocumentId,
    error::{EvalError, Result},
    node::{Node, NodeValue},
    path::{Path, PathSegment},
};

/// Owns the loaded document trees for the whole evaluation.
///
/// Candidates only hold snapshots plus a path; every mutation goes through
/// [`Documents::replace_at`]. Roots are copy-on-write, so snapshots taken
/// before an assignment keep their old value.
#[derive(Debug, Clone, Default)]
pub struct Documents {
    roots: Vec<Rc<Node>>,
}

impl Documents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document and returns its id.
    pub fn add(&mut self, root: Node) -> DocumentId {
        self.roots.push(Rc::new(root));
        DocumentId(self.roots.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn get(&self, document: DocumentId) -> Option<&Rc<Node>> {
        self.roots.get(document.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &Rc<Node>)> {
        self.roots
            .iter()
            .enumerate()
            .map(|(index, root)| (DocumentId(index), root))
    }

    /// Current node at `path`, or `None` when nothing lives there yet.
    pub fn resolve(&self, document: DocumentId, path: &Path) -> Option<Rc<Node>> {
        let root = self.roots.get(document.0)?;
        if path.is_root() {
            return Some(Rc::clone(root));
        }

        let mut current: &Node = root;
        for segment in path.segments() {
            let node = current.unwrap_document();
            current = match (&node.value, segment) {
                (NodeValue::Mapping(_), PathSegment::Key(key)) => node.get_key(key)?,
                (NodeValue::Sequence(items), PathSegment::Index(index)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(Rc::new(current.clone()))
    }

    /// Replaces whatever lives at `path` with `node`, creating missing
    /// mapping keys, sequence slots and null intermediates on the way.
    pub fn replace_at(&mut self, document: DocumentId, path: &Path, node: Node) -> Result<()> {
        let root = self
            .roots
            .get_mut(document.0)
            .ok_or(EvalError::UnknownDocument(document))?;
        replace_in(Rc::make_mut(root), path.segments(), node)
    }
}

fn replace_in(current: &mut Node, path: &[PathSegment], node: Node) -> Result<()> {
    let Some((segment, rest)) = path.split_first() else {
        // Assigning to a document root keeps the wrapper
        if matches!(node.value, NodeValue::Document(_)) {
            *current = node;
        } else {
            *current.unwrap_document_mut() = node;
        }
        return Ok(());
    };

    let current = current.unwrap_document_mut();
    if current.is_null() {
        *current = match segment {
            PathSegment::Key(_) => Node::mapping(Vec::new()),
            PathSegment::Index(_) => Node::sequence(Vec::new()),
        };
    }

    let kind = current.kind();
    let tag = current.tag.clone();
    match (&mut current.value, segment) {
        (NodeValue::Mapping(entries), PathSegment::Key(key)) => {
            let position = match entries.iter().position(|(k, _)| k.text() == Some(key.as_str())) {
                Some(position) => position,
                None => {
                    entries.push((Node::string(key.as_str()), Node::null()));
                    entries.len() - 1
                }
            };
            replace_in(&mut entries[position].1, rest, node)
        }
        (NodeValue::Sequence(items), PathSegment::Index(index)) => {
            while items.len() <= *index {
                items.push(Node::null());
            }
            replace_in(&mut items[*index], rest, node)
        }
        _ => Err(EvalError::TraverseMismatch {
            segment: segment.clone(),
            kind,
            tag,
        }),
    }
}
