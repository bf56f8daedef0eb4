// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute value codec and test harness for geo-engine-port.
//!
//! This crate provides:
//! - The string ⇄ typed value codec used by every reflected attribute
//! - MockEngine / MockFactory for headless testing of element wiring
//!
//! # Design
//!
//! Attribute encoding is deliberately separated from the port contract.
//! This keeps geo-engine-port free of markup concerns.

mod attr;
mod mock_engine;

pub use attr::*;
pub use mock_engine::*;
