//! Test support: an engine with canned results.

use std::cell::RefCell;

use sass_engine::{CompileRequest, CompileResult, Engine};

/// Engine that returns a fixed result and records every request it receives.
pub struct MockEngine {
    result: CompileResult,
    requests: RefCell<Vec<CompileRequest>>,
}

impl MockEngine {
    pub fn new(result: CompileResult) -> Self {
        MockEngine {
            result,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Number of times `compile` was invoked.
    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompileRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl Engine for MockEngine {
    fn compile(&self, request: &CompileRequest) -> CompileResult {
        self.requests.borrow_mut().push(request.clone());
        self.result.clone()
    }
}
