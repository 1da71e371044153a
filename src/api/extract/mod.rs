//! Request extractors shared by API handlers.

mod json_or_form;

pub use json_or_form::JsonOrForm;
