//! Shared Dioxus components and D3.js bridge for the medal chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `adapter`: `D3Adapter`, the `RenderAdapter` drawing engine layers through the bridge
//! - `source`: where an app gets its CSV from (embedded or fetched)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, toggle, containers, etc.)

pub mod adapter;
pub mod components;
pub mod js_bridge;
pub mod source;
pub mod state;

pub use adapter::D3Adapter;
pub use source::DataSource;
