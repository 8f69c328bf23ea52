//! minivdom-core — Shared description types for minivdom renderers
//!
//! Defines the dynamic [`Value`] that description trees are made of, the
//! [`Description`] shape produced by [`create_element`], the [`Component`]
//! capability user logic implements, the type classifier that drives
//! dispatch, and the error taxonomy every renderer reports with.

mod classify;
mod component;
mod description;
mod error;
mod json;
mod value;

pub use classify::{classify, Kind};
pub use component::{component_fn, Component, ComponentRef, FnComponent, Scope};
pub use description::{create_element, Description, ElementType, CHILDREN};
pub use error::{RenderError, RenderResult};
pub use json::parse_description;
pub use value::{format_number, merge, props, Props, Value};
