//! Page sub-behaviors, one module per concern.
//!
//! DESIGN
//! ======
//! Each behavior owns a small pure core (testable natively) plus browser
//! wiring gated behind the `browser` feature. Wiring probes the document
//! once for the behavior's anchor elements; a page without them is a valid
//! "feature not present" state and the behavior silently stays inactive.
//! Behaviors share no state beyond the DOM itself and the single persisted
//! theme key.

pub mod form;
pub mod motion;
pub mod nav;
pub mod notify;
pub mod overlay;
pub mod theme;
