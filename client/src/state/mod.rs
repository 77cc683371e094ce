//! Per-view client state.
//!
//! DESIGN
//! ======
//! Views create these as local signals on mount and drop them on unmount.
//! Nothing here is provided as app-wide context.

pub mod forms;
pub mod session;
