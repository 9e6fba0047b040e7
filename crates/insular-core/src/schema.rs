//! Column layout of the manuscript CSV
//!
//! The dataset is hand-compiled from the Gneuss & Lapidge handlist and library
//! catalogues. Only four columns feed the report; the rest are carried along
//! and only count towards the minimum width of a row.

/// One expected column of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Consumed by the report (as opposed to passthrough)
    pub required: bool,
}

const fn passthrough(name: &'static str) -> Column {
    Column {
        name,
        required: false,
    }
}

const fn required(name: &'static str) -> Column {
    Column {
        name,
        required: true,
    }
}

/// Ordered column list of the manuscript dataset
#[derive(Debug, Clone, Copy)]
pub struct ColumnSchema {
    columns: &'static [Column],
}

pub const YEAR_START: usize = 4;
pub const YEAR_END: usize = 5;
pub const PLACE_BROAD: usize = 6;
pub const ILLUSTRATED: usize = 9;

const MANUSCRIPT_COLUMNS: [Column; 13] = [
    passthrough("Manuscript_ID"),
    passthrough("Gneuss_Lapidge_Ref"),
    passthrough("Shelfmark"),
    passthrough("Production_Century"),
    required("Production_Year_Start"),
    required("Production_Year_End"),
    required("Production_Place_Broad"),
    passthrough("Production_Place_Specific"),
    passthrough("Script_Style"),
    required("Contains_Illustration"),
    passthrough("Illustration_Details"),
    passthrough("Holding_Institution"),
    passthrough("Digitized_Link"),
];

/// Schema of `insular_manuscripts_britain_700_1100.csv`
pub const MANUSCRIPT_SCHEMA: ColumnSchema = ColumnSchema {
    columns: &MANUSCRIPT_COLUMNS,
};

impl ColumnSchema {
    /// Column at `idx`, if the schema defines one
    pub fn column(&self, idx: usize) -> Option<&'static Column> {
        self.columns.get(idx)
    }

    /// Column name for diagnostics, `"?"` past the last column
    pub fn name(&self, idx: usize) -> &'static str {
        self.column(idx).map_or("?", |c| c.name)
    }

    /// Indices of the columns the report reads
    pub fn required_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.required)
            .map(|(i, _)| i)
    }

    /// Narrowest row that still holds every required column
    pub fn min_columns(&self) -> usize {
        self.required_indices().max().map_or(0, |i| i + 1)
    }
}
