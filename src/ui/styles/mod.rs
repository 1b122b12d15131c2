// SPDX-License-Identifier: MPL-2.0
//! Styles shared by every page and component.

pub mod button;
pub mod container;
pub mod text_input;
