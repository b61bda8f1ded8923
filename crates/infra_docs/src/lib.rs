//! Document generation for bills and monthly reports
//!
//! This crate owns everything that ends up as a PDF on disk: the store
//! layout under the documents root, the printpdf layout helpers, and the
//! two concrete renderers. Callers pass plain values in and get a
//! store-relative path back; persistence of that path is the caller's
//! business.
//!
//! Documents are rendered with the built-in Helvetica faces only, so no
//! font files ship with the binary.

pub mod bill_document;
pub mod error;
pub mod monthly_report;
pub mod pdf;
pub mod store;

pub use bill_document::{render_bill, BillSheet};
pub use error::DocumentError;
pub use monthly_report::{render_monthly_report, IncomeRow};
pub use pdf::amount_label;
pub use store::{DocumentStore, StoredPath};
