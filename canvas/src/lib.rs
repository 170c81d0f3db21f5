//! Hand-tracking sketch engine for the gesture canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! capture-infer-render loop: gating camera frames into a hand detector,
//! turning detected landmarks into skeleton overlays and a fingertip stroke,
//! and painting the mirrored composite onto a 2D surface. The host Leptos
//! component only wires the animation-frame callback and DOM elements to the
//! [`engine::Engine`].
//!
//! Everything except [`web`] and [`engine::Engine`] is plain Rust and is
//! tested natively against the [`surface::RecordingSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Engine`] and testable [`engine::SketchCore`] |
//! | [`capture`] | Camera / detector capability traits and the [`capture::CaptureLoop`] driver |
//! | [`gate`] | Single-slot in-flight inference gate |
//! | [`landmark`] | Normalized hand landmarks and the hand skeleton topology |
//! | [`stroke`] | Fingertip stroke history |
//! | [`geom`] | Points and the mirror transform |
//! | [`surface`] | 2D drawing surface trait and a recording implementation |
//! | [`render`] | Skeleton, marker, stroke and overlay painters |
//! | [`web`] | `web-sys` surface, webcam source and MediaPipe Hands binding |
//! | [`consts`] | Shared constants (landmark indices, colors, sizes) |

pub mod capture;
pub mod consts;
pub mod engine;
pub mod gate;
pub mod geom;
pub mod landmark;
pub mod render;
pub mod stroke;
pub mod surface;
pub mod web;
