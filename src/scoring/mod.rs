// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how sheets get their numbers.
//!
//! Relevance is additive. Every field that matches adds its weight, query
//! words add smaller bonuses on top, and popularity is added last. Nothing
//! is gated, so overlapping rules stack.

mod core;
pub mod ranking;

pub use self::core::*;
