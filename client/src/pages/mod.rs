//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and pure state transitions to `state`.

pub mod dashboard;
pub mod draw;
pub mod login;
pub mod register;
