//! tabstat - typed in-memory tables with frequency and contingency analysis
//!
//! A [`Table`] is loaded once from row-major data plus one [`ColumnType`]
//! per column and stored column-major. Analyses read it and return plain
//! result records:
//!
//! - descriptive statistics per numeric column ([`stats`])
//! - one-way frequency tables and two-way cross tables with chi-square
//!   diagnostics ([`analysis`])
//! - normalization, z-scores and train/test splits ([`transform`])
//!
//! Query operations never fail: an unknown column or a type mismatch yields
//! an empty (or zero) result.
//!
//! ```
//! use tabstat::{ColumnType, Table, Value};
//! use tabstat::analysis::{Frequency, Grouping};
//!
//! let rows: Vec<Vec<Value>> = vec![
//!     vec!["year".into(), "color".into()],
//!     vec![2009.into(), "Red".into()],
//!     vec![2009.into(), "Blue".into()],
//!     vec![2010.into(), "Black".into()],
//! ];
//! let mut table = Table::new();
//! table.load(&rows, &[ColumnType::Numeric, ColumnType::Character]).unwrap();
//!
//! let years = table.one_way("year", false);
//! assert_eq!(years.get(&Value::from(2009)), Some(Frequency::Count(2)));
//!
//! let grouping = Grouping::new(["Black Silver White Gray", "Blue Gold Green Red Yellow"])
//!     .with_names(["Simple", "Bold"]);
//! let cross = table.cross_table("year", "color", Some(&grouping));
//! assert_eq!(cross.rows.len(), 2);
//! assert_eq!(cross.degrees_of_freedom, 1);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod stats;
pub mod transform;

pub use config::Config;
pub use error::TableError;
pub use model::{ColumnType, Table, Value};
