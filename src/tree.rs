//! Document tree model and flattening.
//!
//! The portal API describes a site's public documents as a nested
//! structure of folders and documents. Each node is classified once at
//! parse time, so the traversal dispatches on a tagged variant instead
//! of probing fields.

use serde::Deserialize;

/// One node of the portal document tree.
///
/// A node carrying a direct file URL is a document; a node carrying a
/// child collection is a folder. Anything else fails to parse, which
/// surfaces as an unexpected-response error in the fetcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Document(DocumentNode),
    Folder(FolderNode),
}

/// A leaf entry: a named document with a direct download URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub name: String,
    pub public_url: String,
}

/// A container of further nodes. Empty folders are valid.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderNode {
    pub name: String,
    pub children: Vec<Node>,
}

/// A flat (display name, URL) pair extracted from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub name: String,
    pub url: String,
}

/// Flatten a document tree into records, depth-first and pre-order.
///
/// Child ordering from the source tree is preserved as-is; nothing is
/// sorted or deduplicated here. An empty tree yields an empty vec.
#[must_use]
pub fn flatten(nodes: &[Node]) -> Vec<DocumentRecord> {
    let mut records = Vec::new();
    collect(nodes, &mut records);
    records
}

fn collect(nodes: &[Node], out: &mut Vec<DocumentRecord>) {
    for node in nodes {
        match node {
            Node::Document(doc) => out.push(DocumentRecord {
                name: doc.name.clone(),
                url: doc.public_url.clone(),
            }),
            Node::Folder(folder) => collect(&folder.children, out),
        }
    }
}
