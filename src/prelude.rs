//! Single import surface for script code.
//!
//! Glue scripts start with `use sheetkit::prelude::*;` and get the full
//! working set: workbook IO, JSON, pattern matching, timestamps, OS paths,
//! and process spawning.

pub use crate::error::{SheetError, SheetResult};

pub use calamine::{open_workbook, Data, Range, Reader, Xlsx};
pub use chrono::{DateTime, Local, NaiveDate, Utc};
pub use regex::Regex;
pub use rust_xlsxwriter::{Format, Workbook, Worksheet};
pub use serde_json::{json, Value};

pub use std::path::{Path, PathBuf};
pub use std::process::Command;
