// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the carousel.
//!
//! Each sub-component has its own State, Message, and handle() method; those
//! that report back to the controller also return an Effect.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── indicator - Time-driven progress bar, one per slide
//!     ├── slide     - Media frame and its load state
//!     └── snap      - Settles an idle scroller on the nearest slide
//! ```

pub mod indicator;
pub mod slide;
pub mod snap;
