//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `notices`) so individual components can
//! depend on small focused models. Everything here is plain data; signals
//! wrap these types at the `App` level.

pub mod notices;
pub mod ui;
