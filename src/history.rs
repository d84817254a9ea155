// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded snapshot history with a cursor.
//!
//! The unit of history is a whole [`Canvas`]; recording after the cursor
//! discards the redo branch (linear history), and the buffer keeps at most
//! `cap` snapshots by evicting the oldest.

use crate::model::Canvas;

/// Maximum number of reachable past states, including the current one.
pub const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Canvas>,
    cursor: Option<usize>,
    cap: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    /// `cap` is clamped to at least 1 so the opening snapshot always fits.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            cap: cap.max(1),
        }
    }

    /// Appends a snapshot after the cursor, discarding any redo branch, then
    /// evicts from the front if the buffer exceeds its cap.
    pub fn record(&mut self, snapshot: Canvas) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.cap {
            let overflow = self.snapshots.len() - self.cap;
            self.snapshots.drain(..overflow);
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Steps the cursor back and returns the snapshot now under it, or `None`
    /// at the oldest reachable state.
    pub fn undo(&mut self) -> Option<&Canvas> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.snapshots.get(cursor - 1)
    }

    /// Steps the cursor forward and returns the snapshot now under it, or
    /// `None` when there is no redo branch.
    pub fn redo(&mut self) -> Option<&Canvas> {
        let cursor = self.cursor?;
        let next = cursor + 1;
        if next >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(next);
        self.snapshots.get(next)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.snapshots.len())
    }

    pub fn current(&self) -> Option<&Canvas> {
        self.snapshots.get(self.cursor?)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{History, HISTORY_CAP};
    use crate::model::{Canvas, Node, NodeId, NodeKind, Position};

    fn canvas_with_marker(suffix: u64) -> Canvas {
        let mut canvas = Canvas::new();
        let node_id = NodeId::new(format!("n{suffix}")).expect("node id");
        canvas.nodes_mut().insert(
            node_id.clone(),
            Node::new(node_id, NodeKind::Annotation, Position::default()),
        );
        canvas
    }

    fn marker(canvas: &Canvas) -> &str {
        canvas
            .nodes()
            .keys()
            .next()
            .map(|id| id.as_str())
            .expect("marker node")
    }

    #[test]
    fn empty_history_has_nothing_to_step() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.current().is_none());
    }

    #[test]
    fn undo_and_redo_walk_the_cursor() {
        let mut history = History::new();
        history.record(canvas_with_marker(1));
        history.record(canvas_with_marker(2));
        history.record(canvas_with_marker(3));

        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert_eq!(marker(history.undo().expect("undo to n2")), "n2");
        assert_eq!(marker(history.undo().expect("undo to n1")), "n1");
        assert!(history.undo().is_none());
        assert!(!history.can_undo());

        assert_eq!(marker(history.redo().expect("redo to n2")), "n2");
        assert_eq!(marker(history.redo().expect("redo to n3")), "n3");
        assert!(history.redo().is_none());
    }

    #[test]
    fn record_discards_the_redo_branch() {
        let mut history = History::new();
        history.record(canvas_with_marker(1));
        history.record(canvas_with_marker(2));
        history.record(canvas_with_marker(3));

        history.undo().expect("undo to n2");
        history.record(canvas_with_marker(4));

        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 3);
        assert_eq!(marker(history.current().expect("current")), "n4");
        assert_eq!(marker(history.undo().expect("undo to n2")), "n2");
    }

    #[test]
    fn cap_evicts_oldest_snapshots() {
        let mut history = History::with_cap(3);
        for suffix in 1..=5 {
            history.record(canvas_with_marker(suffix));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(marker(history.undo().expect("undo to n4")), "n4");
        assert_eq!(marker(history.undo().expect("undo to n3")), "n3");
        assert!(history.undo().is_none());
    }

    #[test]
    fn default_cap_is_fifty() {
        let mut history = History::new();
        for suffix in 0..(HISTORY_CAP as u64 + 20) {
            history.record(canvas_with_marker(suffix));
        }
        assert_eq!(history.len(), HISTORY_CAP);
    }

    #[test]
    fn with_cap_zero_still_keeps_one_snapshot() {
        let mut history = History::with_cap(0);
        history.record(canvas_with_marker(1));
        assert_eq!(history.len(), 1);
        assert_eq!(marker(history.current().expect("current")), "n1");
    }
}
