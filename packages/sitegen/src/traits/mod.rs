//! Core trait abstractions.
//!
//! All external collaborators sit behind traits so implementations can be
//! swapped and fakes substituted in tests: the language model behind
//! [`model::CompletionModel`], hosting providers behind
//! [`host::StaticHost`], and the document store behind
//! [`store::ProjectStore`].

pub mod host;
pub mod model;
pub mod store;

pub use host::StaticHost;
pub use model::CompletionModel;
pub use store::ProjectStore;
