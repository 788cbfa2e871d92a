//! Trait definitions for Taiga operations.
//!
//! Each entity type declares its endpoint once via [`Resource`] and opts
//! into the operations its API supports with empty trait impls; the
//! request/parse plumbing lives in the default method bodies.

mod attach;
mod attributes;
mod create;
mod delete;
mod get;
mod import;
mod list;
mod update;

use serde::de::DeserializeOwned;

pub use attach::Attachable;
pub use attributes::{AttributeBag, CustomAttributeValues};
pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use import::Import;
pub use list::List;
pub use update::{Commentable, Update};

/// A remote Taiga record type.
///
/// The endpoint constant is the collection path segment every generic
/// operation builds its URLs from; a concrete `Get`/`List`/`Create`/
/// `Update`/`Delete` impl never needs to repeat it.
pub trait Resource: DeserializeOwned + Sized + Send {
    /// Remote collection path segment (e.g. `"userstories"`).
    const ENDPOINT: &'static str;

    /// Numeric identifier of this record.
    fn id(&self) -> u64;
}
