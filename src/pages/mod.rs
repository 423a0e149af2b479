//! Page-specific modules.
//!
//! Each probes for its page root once at initialization and attaches only
//! when the root is present; every other page is a silent no-op.

pub mod dashboard;
pub mod live_class;
pub mod materials;
