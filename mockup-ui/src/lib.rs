//! mockup-ui - UI types and components for the mockup builder
//!
//! Contains the builder store and pure view components. Browser interop
//! (drag library, image export, clipboard) lives in the app crate.

pub mod components;
pub mod stores;

pub use components::*;
