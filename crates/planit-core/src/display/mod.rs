//! Display formatting and result types.
//!
//! Domain models and the [`ListView`](crate::render::ListView) implement
//! [`std::fmt::Display`] directly, producing markdown. Wrapper types add
//! context for operation results.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Task, ListView  │    │  Result Types   │    │   Formatted     │
//! │                 │───▶│ & Status Lines  │───▶│    Markdown     │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status lines (OperationStatus)
//! - [`datetime`]: Local timestamp formatting
//! - [`models`]: Display implementations and markdown escaping
//!
//! ## Usage Examples
//!
//! ```rust
//! use planit_core::{
//!     display::OperationStatus,
//!     models::{SortKey, Theme},
//!     render::ListView,
//! };
//!
//! let view = ListView::build(&[], SortKey::Time, Theme::Light);
//! assert!(view.to_string().contains("No tasks yet."));
//!
//! let status = OperationStatus::failure("Task name is required");
//! assert_eq!(status.to_string(), "Error: Task name is required\n");
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use models::escape_markdown;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
