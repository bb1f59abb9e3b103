//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Each keeps its decision logic pure and native-testable
//! and confines `web-sys` glue to `csr`-gated wrappers.

pub mod form;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod service_worker;
pub mod storage;
pub mod theme;
pub mod watchers;
