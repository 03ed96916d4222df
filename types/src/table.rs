//! Render contract between the board presenter and the table renderer.

/// A single body row: display cells plus an optional hero id used only for
/// icon lookup, never drawn as text.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub icon_id: Option<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            icon_id: None,
        }
    }

    pub fn with_icon(cells: Vec<String>, icon_id: impl Into<String>) -> Self {
        Self {
            cells,
            icon_id: Some(icon_id.into()),
        }
    }
}

/// Everything the renderer needs to draw one board image: title bar text,
/// column headers with pixel widths, and body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub headers: Vec<String>,
    pub col_widths: Vec<u32>,
    pub rows: Vec<TableRow>,
}

impl TableSpec {
    /// Check the structural invariants the renderer relies on: one width
    /// per header, at least the rank and name columns, and every row's cell
    /// count equal to the header count.
    pub fn validate(&self) -> Result<(), String> {
        if self.headers.len() != self.col_widths.len() {
            return Err(format!(
                "{} headers but {} column widths",
                self.headers.len(),
                self.col_widths.len()
            ));
        }
        if self.headers.len() < 2 {
            return Err("a board needs at least the rank and name columns".to_string());
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.cells.len() != self.headers.len() {
                return Err(format!(
                    "row {index} has {} cells for {} columns",
                    row.cells.len(),
                    self.headers.len()
                ));
            }
        }
        Ok(())
    }
}
