//! Scope chain.
//!
//! An `Env` is a stack of shared frames (`Rc<RefCell<..>>`). A child
//! environment re-uses every parent frame and pushes one fresh frame of its
//! own, so a closure that captured the chain sees definitions that land in
//! a shared frame after the capture. Lookup walks innermost to outermost.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::value::{Fields, Record, Value};

type Frame = Rc<RefCell<Fields>>;

#[derive(Clone, Debug)]
pub struct Env {
    frames: Vec<Frame>,
}

impl Env {
    /// Root environment: a single empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    /// Child environment sharing every existing frame, plus one fresh
    /// innermost frame.
    pub fn child(&self) -> Self {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        frames.extend(self.frames.iter().cloned());
        frames.push(Frame::default());
        Self { frames }
    }

    /// Bind into the innermost frame. Re-binding a name already in that
    /// frame overwrites it; the name keeps its original position.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last() {
            frame.borrow_mut().insert(name.into(), value);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.borrow().get(name) {
                return Some(value.clone());
            }
        }
        None
    }

    /// Snapshot the innermost frame as an immutable record. The frame
    /// itself stays live for closures that captured the chain.
    pub fn freeze_top(&self) -> Record {
        let fields = self
            .frames
            .last()
            .map(|frame| frame.borrow().clone())
            .unwrap_or_default();
        Record::from_fields(fields)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
