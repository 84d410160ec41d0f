//! Core module containing the generic list-management engine

pub mod collection;
pub mod entity;
pub mod error;
pub mod field;
pub mod notice;
pub mod query;
pub mod store;
pub mod validation;

pub use collection::Collection;
pub use entity::{Record, RecordId};
pub use error::{StockSageError, StockSageResult, StoreError, ValidationErrors};
pub use field::{FieldFormat, FieldValue};
pub use notice::{Notice, NoticeKind};
pub use query::{ListQuery, Sort, SortDirection};
pub use store::ListStore;
