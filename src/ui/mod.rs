// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`gallery`] - Scrollable thumbnail grid backed by the pure layout

pub mod gallery;
