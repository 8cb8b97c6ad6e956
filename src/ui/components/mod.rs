// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error panel with a retry action, expandable
//!   technical details, and i18n support

pub mod error_display;
