//! Focus System - ordered focus chain with a single current entry.
//!
//! Manages focus state and navigation:
//! - `curr` node (the widget currently holding focus)
//! - Insertion at the head or after any node, truncation after a node
//! - Stepping forward/backward without wrap-around
//! - Removal that hands focus to a neighbour
//!
//! Nodes live in a slot-map arena and link to each other by [`NodeKey`], so
//! the list is doubly linked without raw pointers. A removed node's key goes
//! stale and is rejected by every operation.
//!
//! Once the chain is non-empty exactly one widget reports focus, and it is
//! the widget of the current node. Moves unfocus the old widget before
//! focusing the new one, then update `curr`.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{shared, Alignment, Button, FocusChain};
//!
//! let mut chain = FocusChain::new();
//! let ok = chain.insert_at_beginning(shared(Button::new(6, "OK", Alignment::Center)));
//! chain.insert_after_node(ok, Some(shared(Button::new(8, "Cancel", Alignment::Center))))?;
//!
//! chain.next(); // Cancel focused
//! chain.prev(); // OK focused
//! ```

use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::error::FocusError;
use crate::widgets::{SharedWidget, Widget};

new_key_type! {
    /// Handle to a node in a [`FocusChain`].
    pub struct NodeKey;
}

// =============================================================================
// FOCUS NODE
// =============================================================================

/// One entry of the chain: a shared widget plus its neighbours.
#[derive(Debug)]
pub struct FocusNode {
    widget: SharedWidget,
    next: Option<NodeKey>,
    prev: Option<NodeKey>,
}

impl FocusNode {
    pub fn widget(&self) -> &SharedWidget {
        &self.widget
    }

    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }

    pub fn prev(&self) -> Option<NodeKey> {
        self.prev
    }
}

// =============================================================================
// FOCUS CHAIN
// =============================================================================

/// Doubly linked, ordered set of focusable widgets.
#[derive(Debug, Default)]
pub struct FocusChain {
    nodes: SlotMap<NodeKey, FocusNode>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    curr: Option<NodeKey>,
    size: usize,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of linked nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn head(&self) -> Option<NodeKey> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeKey> {
        self.tail
    }

    /// Key of the focused node (`None` only when empty).
    pub fn current_key(&self) -> Option<NodeKey> {
        self.curr
    }

    /// Widget of the focused node.
    pub fn current(&self) -> Option<&SharedWidget> {
        self.curr.map(|key| &self.nodes[key].widget)
    }

    pub fn node(&self, key: NodeKey) -> Option<&FocusNode> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Node keys from head to tail.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            chain: self,
            cursor: self.head,
        }
    }

    /// Widgets from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &SharedWidget> + '_ {
        self.keys().map(move |key| &self.nodes[key].widget)
    }

    // =========================================================================
    // INSERTION
    // =========================================================================

    /// Link `widget` as the new head.
    ///
    /// The first node of an empty chain becomes current and gets focus.
    pub fn insert_at_beginning(&mut self, widget: SharedWidget) -> NodeKey {
        let key = self.nodes.insert(FocusNode {
            widget,
            next: self.head,
            prev: None,
        });

        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.size += 1;

        self.settle_inserted(key);
        trace!(?key, size = self.size, "focus node inserted at head");
        key
    }

    /// Splice `widget` in right after `target`.
    ///
    /// With `None`, everything after `target` is cut off instead and `target`
    /// becomes the tail. If the current node is cut off, focus moves to
    /// `target`.
    pub fn insert_after_node(
        &mut self,
        target: NodeKey,
        widget: Option<SharedWidget>,
    ) -> Result<Option<NodeKey>, FocusError> {
        if !self.nodes.contains_key(target) {
            return Err(FocusError::StaleNode);
        }

        let Some(widget) = widget else {
            self.truncate_after(target);
            return Ok(None);
        };

        let next = self.nodes[target].next;
        let key = self.nodes.insert(FocusNode {
            widget,
            next,
            prev: Some(target),
        });

        self.nodes[target].next = Some(key);
        match next {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.size += 1;

        self.settle_inserted(key);
        trace!(?key, ?target, size = self.size, "focus node inserted");
        Ok(Some(key))
    }

    /// Focus a fresh node if the chain has no current node yet, otherwise
    /// make sure it doesn't report focus alongside the current one.
    ///
    /// A widget linked a second time may be the current widget itself; it
    /// keeps its focus.
    fn settle_inserted(&mut self, key: NodeKey) {
        match self.curr {
            None => {
                self.nodes[key].widget.borrow_mut().focus_on();
                self.curr = Some(key);
            }
            Some(curr) if curr != key => {
                if !Rc::ptr_eq(&self.nodes[key].widget, &self.nodes[curr].widget) {
                    self.nodes[key].widget.borrow_mut().focus_off();
                }
            }
            Some(_) => {}
        }
    }

    fn truncate_after(&mut self, target: NodeKey) {
        let mut cursor = self.nodes[target].next.take();
        self.tail = Some(target);

        let mut removed = 0usize;
        let mut lost_focus = false;
        while let Some(key) = cursor {
            let Some(node) = self.nodes.remove(key) else {
                break;
            };
            if self.curr == Some(key) {
                node.widget.borrow_mut().focus_off();
                lost_focus = true;
            }
            cursor = node.next;
            removed += 1;
        }
        self.size -= removed;

        if lost_focus {
            self.nodes[target].widget.borrow_mut().focus_on();
            self.curr = Some(target);
        }

        debug!(?target, removed, size = self.size, "focus chain truncated");
    }

    // =========================================================================
    // REMOVAL
    // =========================================================================

    /// Unlink `key` and hand back its widget.
    ///
    /// When the removed node was current, focus passes to its next neighbour,
    /// or its previous one at the tail. Removing the last node empties the chain.
    pub fn remove(&mut self, key: NodeKey) -> Result<SharedWidget, FocusError> {
        let node = self.nodes.remove(key).ok_or(FocusError::StaleNode)?;

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.size -= 1;

        if self.curr == Some(key) {
            node.widget.borrow_mut().focus_off();
            self.curr = node.next.or(node.prev);
            if let Some(replacement) = self.curr {
                self.nodes[replacement].widget.borrow_mut().focus_on();
            }
        }

        trace!(?key, size = self.size, "focus node removed");
        Ok(node.widget)
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Key of the node at `index`, counting from the head.
    pub fn key_at(&self, index: usize) -> Result<NodeKey, FocusError> {
        if index >= self.size {
            return Err(FocusError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }

        self.keys().nth(index).ok_or(FocusError::IndexOutOfRange {
            index,
            size: self.size,
        })
    }

    /// Widget of the node at `index`, counting from the head.
    pub fn get_at_position(&self, index: usize) -> Result<&SharedWidget, FocusError> {
        let key = self.key_at(index)?;
        Ok(&self.nodes[key].widget)
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Move focus one node toward the tail. No-op at the tail.
    pub fn next(&mut self) -> bool {
        let Some(curr) = self.curr else {
            return false;
        };
        match self.nodes[curr].next {
            Some(next) => {
                self.move_focus(curr, next);
                true
            }
            None => false,
        }
    }

    /// Move focus one node toward the head. No-op at the head.
    pub fn prev(&mut self) -> bool {
        let Some(curr) = self.curr else {
            return false;
        };
        match self.nodes[curr].prev {
            Some(prev) => {
                self.move_focus(curr, prev);
                true
            }
            None => false,
        }
    }

    /// Jump focus to `key`.
    pub fn focus_key(&mut self, key: NodeKey) -> Result<(), FocusError> {
        if !self.nodes.contains_key(key) {
            return Err(FocusError::StaleNode);
        }
        if let Some(curr) = self.curr {
            if curr != key {
                self.move_focus(curr, key);
            }
        }
        Ok(())
    }

    fn move_focus(&mut self, from: NodeKey, to: NodeKey) {
        self.nodes[from].widget.borrow_mut().focus_off();
        self.nodes[to].widget.borrow_mut().focus_on();
        self.curr = Some(to);
        trace!(?from, ?to, "focus moved");
    }

    // =========================================================================
    // ACTIVATION
    // =========================================================================

    /// Run the current widget's activation callback.
    ///
    /// The callback runs after the widget borrow is released, so it may
    /// mutate the widget (or the rest of the UI) freely.
    pub fn activate_current(&self) -> bool {
        let callback = self
            .current()
            .and_then(|widget| widget.borrow().as_button().and_then(|b| b.on_activate.clone()));

        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// Iterator over node keys, head to tail.
pub struct Keys<'a> {
    chain: &'a FocusChain,
    cursor: Option<NodeKey>,
}

impl Iterator for Keys<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let key = self.cursor?;
        self.cursor = self.chain.nodes.get(key).and_then(|node| node.next);
        Some(key)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alignment;
    use crate::widgets::{shared, Button, Text};
    use std::cell::Cell;

    fn button(label: &str) -> SharedWidget {
        shared(Button::new(10, label, Alignment::Center))
    }

    fn labels(chain: &FocusChain) -> Vec<String> {
        chain
            .iter()
            .map(|w| match w.borrow().as_button() {
                Some(b) => b.value.clone(),
                None => String::new(),
            })
            .collect()
    }

    fn focused_labels(chain: &FocusChain) -> Vec<String> {
        chain
            .iter()
            .filter(|w| w.borrow().is_focused())
            .map(|w| w.borrow().as_button().map(|b| b.value.clone()).unwrap_or_default())
            .collect()
    }

    fn chain_of(items: &[&str]) -> (FocusChain, Vec<NodeKey>) {
        let mut chain = FocusChain::new();
        let mut keys: Vec<NodeKey> = Vec::new();
        for label in items {
            let key = match keys.last() {
                None => chain.insert_at_beginning(button(label)),
                Some(&last) => chain.insert_after_node(last, Some(button(label))).unwrap().unwrap(),
            };
            keys.push(key);
        }
        (chain, keys)
    }

    #[test]
    fn test_initial_state() {
        let chain = FocusChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.size(), 0);
        assert!(chain.current().is_none());
        assert!(chain.head().is_none());
        assert!(chain.tail().is_none());
    }

    #[test]
    fn test_first_insert_focuses() {
        let mut chain = FocusChain::new();
        let widget = button("a");
        let key = chain.insert_at_beginning(widget.clone());

        assert_eq!(chain.size(), 1);
        assert_eq!(chain.current_key(), Some(key));
        assert_eq!(chain.head(), Some(key));
        assert_eq!(chain.tail(), Some(key));
        assert!(widget.borrow().is_focused());
    }

    #[test]
    fn test_insert_at_beginning_keeps_current() {
        let mut chain = FocusChain::new();
        for n in 1..=5 {
            chain.insert_at_beginning(button(&n.to_string()));
            assert_eq!(chain.size(), n);
            assert_eq!(focused_labels(&chain), vec!["1"]);
        }
        assert_eq!(labels(&chain), vec!["5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_inserted_widget_loses_stray_focus() {
        let (mut chain, keys) = chain_of(&["a"]);
        let stray = button("b");
        stray.borrow_mut().focus_on();
        chain.insert_after_node(keys[0], Some(stray.clone())).unwrap();
        assert!(!stray.borrow().is_focused());
        assert_eq!(focused_labels(&chain), vec!["a"]);
    }

    #[test]
    fn test_relinking_current_widget_keeps_focus() {
        let mut chain = FocusChain::new();
        let widget = button("a");
        let first = chain.insert_at_beginning(widget.clone());
        let second = chain.insert_after_node(first, Some(widget.clone())).unwrap().unwrap();
        chain.insert_at_beginning(widget.clone());

        assert_eq!(chain.size(), 3);
        assert_eq!(chain.current_key(), Some(first));
        assert!(widget.borrow().is_focused());

        chain.focus_key(second).unwrap();
        assert!(widget.borrow().is_focused());
        chain.remove(second).unwrap();
        assert!(chain.current().unwrap().borrow().is_focused());
    }

    #[test]
    fn test_insert_after_node_splices() {
        let (mut chain, keys) = chain_of(&["a", "c"]);
        let b = chain.insert_after_node(keys[0], Some(button("b"))).unwrap().unwrap();

        assert_eq!(labels(&chain), vec!["a", "b", "c"]);
        assert_eq!(chain.size(), 3);
        assert_eq!(chain.node(b).unwrap().prev(), Some(keys[0]));
        assert_eq!(chain.node(b).unwrap().next(), Some(keys[1]));
        assert_eq!(chain.node(keys[1]).unwrap().prev(), Some(b));
        assert_eq!(chain.tail(), Some(keys[1]));
    }

    #[test]
    fn test_insert_after_tail_moves_tail() {
        let (mut chain, keys) = chain_of(&["a"]);
        let b = chain.insert_after_node(keys[0], Some(button("b"))).unwrap().unwrap();
        assert_eq!(chain.tail(), Some(b));
        assert_eq!(labels(&chain), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_after_stale_target_fails() {
        let (mut chain, keys) = chain_of(&["a", "b"]);
        chain.remove(keys[1]).unwrap();
        assert_eq!(
            chain.insert_after_node(keys[1], Some(button("x"))),
            Err(FocusError::StaleNode)
        );
        assert_eq!(chain.insert_after_node(keys[1], None), Err(FocusError::StaleNode));
        assert_eq!(chain.size(), 1);
    }

    #[test]
    fn test_insert_none_truncates() {
        let (mut chain, keys) = chain_of(&["a", "b", "c", "d"]);
        assert_eq!(chain.insert_after_node(keys[1], None), Ok(None));

        assert_eq!(labels(&chain), vec!["a", "b"]);
        assert_eq!(chain.size(), 2);
        assert_eq!(chain.tail(), Some(keys[1]));
        assert!(!chain.contains(keys[2]));
        assert!(!chain.contains(keys[3]));
        assert_eq!(focused_labels(&chain), vec!["a"]);
    }

    #[test]
    fn test_truncating_current_moves_focus_to_target() {
        let (mut chain, keys) = chain_of(&["a", "b", "c"]);
        let c = chain.get_at_position(2).unwrap().clone();
        chain.next();
        chain.next();
        assert!(c.borrow().is_focused());

        chain.insert_after_node(keys[0], None).unwrap();
        assert_eq!(chain.current_key(), Some(keys[0]));
        assert!(!c.borrow().is_focused());
        assert_eq!(focused_labels(&chain), vec!["a"]);
        assert_eq!(chain.size(), 1);
    }

    #[test]
    fn test_get_at_position_bounds() {
        let (chain, _) = chain_of(&["a", "b", "c"]);
        for (i, want) in ["a", "b", "c"].iter().enumerate() {
            let widget = chain.get_at_position(i).unwrap();
            assert_eq!(widget.borrow().as_button().unwrap().value, *want);
        }
        assert_eq!(
            chain.get_at_position(3).err(),
            Some(FocusError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert!(FocusChain::new().get_at_position(0).is_err());
    }

    #[test]
    fn test_next_prev_walk_the_chain() {
        let (mut chain, keys) = chain_of(&["a", "b", "c"]);

        assert!(chain.next());
        assert_eq!(chain.current_key(), Some(keys[1]));
        assert_eq!(focused_labels(&chain), vec!["b"]);

        assert!(chain.next());
        assert_eq!(focused_labels(&chain), vec!["c"]);

        assert!(chain.prev());
        assert!(chain.prev());
        assert_eq!(chain.current_key(), Some(keys[0]));
        assert_eq!(focused_labels(&chain), vec!["a"]);
    }

    #[test]
    fn test_ends_are_noops() {
        let (mut chain, keys) = chain_of(&["a", "b"]);

        assert!(!chain.prev());
        assert_eq!(chain.current_key(), Some(keys[0]));
        assert_eq!(focused_labels(&chain), vec!["a"]);

        chain.next();
        assert!(!chain.next());
        assert_eq!(chain.current_key(), Some(keys[1]));
        assert_eq!(focused_labels(&chain), vec!["b"]);

        let mut empty = FocusChain::new();
        assert!(!empty.next());
        assert!(!empty.prev());
    }

    #[test]
    fn test_remove_current_hands_focus_on() {
        let (mut chain, keys) = chain_of(&["a", "b", "c"]);

        let a = chain.remove(keys[0]).unwrap();
        assert!(!a.borrow().is_focused());
        assert_eq!(chain.head(), Some(keys[1]));
        assert_eq!(chain.current_key(), Some(keys[1]));
        assert_eq!(focused_labels(&chain), vec!["b"]);

        chain.next();
        chain.remove(keys[2]).unwrap();
        assert_eq!(chain.current_key(), Some(keys[1]));
        assert_eq!(chain.tail(), Some(keys[1]));
        assert_eq!(focused_labels(&chain), vec!["b"]);

        chain.remove(keys[1]).unwrap();
        assert!(chain.is_empty());
        assert!(chain.current().is_none());
        assert_eq!(chain.remove(keys[1]).err(), Some(FocusError::StaleNode));
    }

    #[test]
    fn test_remove_middle_relinks() {
        let (mut chain, keys) = chain_of(&["a", "b", "c"]);
        chain.remove(keys[1]).unwrap();
        assert_eq!(labels(&chain), vec!["a", "c"]);
        assert_eq!(chain.node(keys[0]).unwrap().next(), Some(keys[2]));
        assert_eq!(chain.node(keys[2]).unwrap().prev(), Some(keys[0]));
        assert_eq!(focused_labels(&chain), vec!["a"]);
    }

    #[test]
    fn test_reinsert_after_empty_refocuses() {
        let (mut chain, keys) = chain_of(&["a"]);
        chain.remove(keys[0]).unwrap();
        let b = button("b");
        chain.insert_at_beginning(b.clone());
        assert!(b.borrow().is_focused());
    }

    #[test]
    fn test_focus_key_jumps() {
        let (mut chain, keys) = chain_of(&["a", "b", "c"]);
        chain.focus_key(keys[2]).unwrap();
        assert_eq!(focused_labels(&chain), vec!["c"]);
        chain.focus_key(keys[2]).unwrap();
        assert_eq!(focused_labels(&chain), vec!["c"]);

        chain.remove(keys[0]).unwrap();
        assert_eq!(chain.focus_key(keys[0]), Err(FocusError::StaleNode));
    }

    #[test]
    fn test_mixed_widgets() {
        let mut chain = FocusChain::new();
        let text = shared(Text::new(4, 1, "t", Alignment::Left));
        let key = chain.insert_at_beginning(text.clone());
        chain.insert_after_node(key, Some(button("b"))).unwrap();

        assert!(text.borrow().is_focused());
        chain.next();
        assert!(!text.borrow().is_focused());
    }

    #[test]
    fn test_activate_current() {
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let widget = shared(Button {
            on_activate: Some(Rc::new(move || hits_clone.set(hits_clone.get() + 1))),
            ..Button::new(6, "go", Alignment::Left)
        });

        let mut chain = FocusChain::new();
        let key = chain.insert_at_beginning(widget);
        chain.insert_after_node(key, Some(shared(Text::new(2, 1, "t", Alignment::Left)))).unwrap();

        assert!(chain.activate_current());
        assert_eq!(hits.get(), 1);

        chain.next();
        assert!(!chain.activate_current());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_callback_may_borrow_its_widget() {
        let mut chain = FocusChain::new();
        let widget = shared(Button::new(6, "go", Alignment::Left));
        let handle = widget.clone();
        if let crate::widgets::Element::Button(b) = &mut *widget.borrow_mut() {
            b.on_activate = Some(Rc::new(move || {
                if let crate::widgets::Element::Button(b) = &mut *handle.borrow_mut() {
                    b.value = "done".to_string();
                }
            }));
        }
        chain.insert_at_beginning(widget.clone());

        assert!(chain.activate_current());
        assert_eq!(widget.borrow().as_button().unwrap().value, "done");
    }
}
