//! Frequency and contingency analysis over a loaded table

mod contingency;
mod cross_table;
mod cross_tabulation;
mod one_way;

pub use contingency::CrossTabCell;
pub use cross_table::{CrossTabAnalyzer, CrossTabResult, CrossTabRow, Grouping};
pub use cross_tabulation::CrossTabulation;
pub use one_way::{Frequency, ItemCount, OneWayAnalyzer, OneWayTable};

use crate::model::Table;

impl Table {
    /// Frequency table of one column, see [`OneWayAnalyzer::one_way`]
    pub fn one_way(&self, column: &str, as_percentage: bool) -> OneWayTable {
        OneWayAnalyzer::new(self.config()).one_way(self, column, as_percentage)
    }

    /// Contingency table between two columns, see [`CrossTabAnalyzer::cross_table`]
    pub fn cross_table(
        &self,
        independent: &str,
        dependent: &str,
        grouping: Option<&Grouping>,
    ) -> CrossTabResult {
        CrossTabAnalyzer::new(self.config()).cross_table(self, independent, dependent, grouping)
    }

    /// Pre-aggregated cross-tabulation, see [`CrossTabAnalyzer::cross_tabulation`]
    pub fn cross_tabulation(&self) -> CrossTabulation {
        CrossTabAnalyzer::new(self.config()).cross_tabulation(self)
    }
}
