//! Scoped ownership of `<head>` nodes created after mount.
//!
//! DESIGN
//! ======
//! A [`ScopedHeadNode`] is acquired by a stable marker id. Acquiring adopts a
//! node that is already present (e.g. one the server rendered) and only
//! inserts when none exists, so rehydration never duplicates it. Dropping the
//! guard removes the node. The document is behind [`HeadDocument`] so the
//! lifecycle is testable without a browser.

#[cfg(test)]
#[path = "head_test.rs"]
mod head_test;

/// Element to place in `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadNode {
    pub tag: &'static str,
    /// Marker id; the node's identity across server render and hydration.
    pub id: String,
    pub attrs: Vec<(&'static str, String)>,
    pub text: String,
}

impl HeadNode {
    /// `<script type="application/ld+json">` carrying already-escaped JSON.
    #[must_use]
    pub fn json_ld(id: &str, json: String) -> Self {
        Self { tag: "script", id: id.to_owned(), attrs: vec![("type", "application/ld+json".to_owned())], text: json }
    }
}

/// Minimal view of the document head.
pub trait HeadDocument {
    fn contains(&self, id: &str) -> bool;
    fn insert(&self, node: &HeadNode);
    fn set_text(&self, id: &str, text: &str);
    fn remove(&self, id: &str);
}

impl<T: HeadDocument + ?Sized> HeadDocument for &T {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn insert(&self, node: &HeadNode) {
        (**self).insert(node);
    }

    fn set_text(&self, id: &str, text: &str) {
        (**self).set_text(id, text);
    }

    fn remove(&self, id: &str) {
        (**self).remove(id);
    }
}

/// Guard that keeps one head node alive for as long as it is held.
pub struct ScopedHeadNode<H: HeadDocument> {
    doc: H,
    id: String,
    adopted: bool,
}

impl<H: HeadDocument> ScopedHeadNode<H> {
    /// Insert `node` unless a node with its id already exists, in which case
    /// the existing node is adopted and its content refreshed.
    pub fn acquire(doc: H, node: &HeadNode) -> Self {
        let adopted = doc.contains(&node.id);
        if adopted {
            doc.set_text(&node.id, &node.text);
        } else {
            doc.insert(node);
        }
        Self { doc, id: node.id.clone(), adopted }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `true` when the node pre-existed (server-rendered) rather than inserted.
    #[must_use]
    pub fn adopted(&self) -> bool {
        self.adopted
    }
}

impl<H: HeadDocument> Drop for ScopedHeadNode<H> {
    fn drop(&mut self) {
        self.doc.remove(&self.id);
    }
}

// =============================================================================
// BROWSER DOCUMENT
// =============================================================================

/// The live `document.head`. Every operation is a no-op if the DOM is unavailable.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHead;

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
impl HeadDocument for BrowserHead {
    fn contains(&self, id: &str) -> bool {
        document().and_then(|d| d.get_element_by_id(id)).is_some()
    }

    fn insert(&self, node: &HeadNode) {
        let Some(doc) = document() else {
            return;
        };
        let Some(head) = doc.head() else {
            return;
        };
        let Ok(el) = doc.create_element(node.tag) else {
            return;
        };
        el.set_id(&node.id);
        for (name, value) in &node.attrs {
            let _ = el.set_attribute(name, value);
        }
        el.set_text_content(Some(&node.text));
        let _ = head.append_child(&el);
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn remove(&self, id: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.remove();
        }
    }
}
