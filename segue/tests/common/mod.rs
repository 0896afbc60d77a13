#![allow(dead_code)]

use segue::{IsContinuation, resolve_continuation};

// ============================================================================
// Test Handlers
// ============================================================================

/// Opts in without overriding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plain;

impl IsContinuation for Plain {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlwaysContinuation;

impl IsContinuation for AlwaysContinuation {
    fn is_continuation(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeverContinuation;

impl IsContinuation for NeverContinuation {
    fn is_continuation(&self) -> bool {
        false
    }
}

/// Composite handler forwarding to the handler it wraps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wrapper<H> {
    pub inner: H,
}

impl<H: IsContinuation> IsContinuation for Wrapper<H> {
    fn is_continuation(&self) -> bool {
        resolve_continuation(&self.inner)
    }
}

/// A handler carrying captured state, as a real completion handler would.
/// Deliberately neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq)]
pub struct ReadHandler {
    pub buffer: Vec<u8>,
    pub bytes_read: usize,
    pub chained: bool,
}

impl ReadHandler {
    pub fn new(chained: bool) -> Self {
        Self {
            buffer: vec![0xAB; 16],
            bytes_read: 7,
            chained,
        }
    }
}

impl IsContinuation for ReadHandler {
    fn is_continuation(&self) -> bool {
        self.chained
    }
}

/// What resolving a handler declaring `declared` should return.
pub fn expected(declared: bool) -> bool {
    declared && !segue::CONSERVATIVE
}
