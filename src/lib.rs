//! Client and server for a small DeepL-style translation endpoint.
//!
//! The `odl` binary either asks `http://localhost:5000` for a translation
//! (prompting for the languages and the text) or runs that endpoint itself.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::OdlError;
pub use domain::model::{EndpointReply, EndpointResponse, Outcome, TranslationRequest};
pub use domain::traits::Translator;
