//! Sheetkit - quiet runtime scaffold for workbook-to-JSON glue scripts
//!
//! This library carries the working set those scripts share (workbook IO,
//! JSON, pattern matching, timestamps, subprocess spawning) and installs a
//! process-wide log filter that drops the warn-level styling noise legacy
//! workbooks trigger in the writer library.
//!
//! # Example
//!
//! ```no_run
//! use sheetkit::prelude::*;
//!
//! sheetkit::logging::init();
//!
//! let workbook = open_workbook::<Xlsx<std::io::BufReader<std::fs::File>>, _>("ledger.xlsx")
//!     .map_err(|e| SheetError::Workbook(e.to_string()))?;
//! for sheet in workbook.sheet_names() {
//!     println!("{sheet}");
//! }
//! # Ok::<(), sheetkit::SheetError>(())
//! ```

pub mod error;
pub mod logging;
pub mod prelude;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
