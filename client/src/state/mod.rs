//! Client state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so pages can subscribe to only what they render.
//! Pure transition logic lives here and is tested natively; pages only wire
//! it to signals and navigation.

pub mod dashboard;
pub mod session;
pub mod sketch;
