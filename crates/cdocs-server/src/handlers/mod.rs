//! HTTP request handlers.

pub(crate) mod api;
pub(crate) mod assets;
pub(crate) mod pages;
