//! Time utilities
//!
//! - **[`dates`]**: lenient calendar-date parsing and the two output shapes
//!   used by forms (`YYYY-MM-DD`) and APIs (ISO-8601 UTC timestamps)
//!
//! ## Usage
//!
//! ```rust
//! use profilehub_common::time::{to_date_only, to_iso_timestamp};
//!
//! assert_eq!(to_date_only("2024-03-09T17:45:00Z"), "2024-03-09");
//! assert_eq!(to_date_only("03/09/2024"), "2024-03-09");
//! assert_eq!(to_date_only("someday"), "");
//!
//! assert_eq!(to_iso_timestamp("2024-03-09").as_deref(), Some("2024-03-09T00:00:00.000Z"));
//! ```

pub mod dates;

pub use dates::{parse_loose_datetime, to_date_only, to_iso_timestamp};
