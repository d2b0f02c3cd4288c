//! CSV artifact shared by the extractor and the query service.
//!
//! Columns: `Day`, `Meal Time`, `Recipe Dict` (JSON object recipe → attributes).

use std::io::{Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domains::menu::models::{MealPeriod, MenuBook, MenuEntry, RecipeMap};

/// Spreadsheet tools expect it; the reader tolerates it.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid Recipe Dict: {source}")]
    RecipeDict {
        row: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("row {row}: unknown meal time {label:?}")]
    MealTime { row: usize, label: String },

    #[error("failed to encode Recipe Dict: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct MenuRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Meal Time")]
    meal_time: String,
    #[serde(rename = "Recipe Dict")]
    recipe_dict: String,
}

/// Write `entries` as CSV (BOM + header + one row per entry). Returns rows written.
pub fn write_menu_csv<W, I>(mut writer: W, entries: I) -> Result<usize, StoreError>
where
    W: Write,
    I: IntoIterator<Item = MenuEntry>,
{
    writer.write_all(UTF8_BOM).map_err(|source| StoreError::Io {
        path: PathBuf::from("<writer>"),
        source,
    })?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for entry in entries {
        let recipe_dict = serde_json::to_string(&entry.recipes).map_err(StoreError::Encode)?;
        csv_writer.serialize(MenuRow {
            day: entry.day,
            meal_time: entry.meal_period.to_string(),
            recipe_dict,
        })?;
        rows += 1;
    }

    // Header is only emitted with the first record
    if rows == 0 {
        csv_writer.write_record(["Day", "Meal Time", "Recipe Dict"])?;
    }
    csv_writer.flush().map_err(|source| StoreError::Io {
        path: PathBuf::from("<writer>"),
        source,
    })?;

    Ok(rows)
}

/// Read CSV into a [`MenuBook`]. Later rows replace earlier ones for the same pair.
pub fn read_menu_csv<R: Read>(reader: R) -> Result<MenuBook, StoreError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut book = MenuBook::new();

    for (index, row) in csv_reader.deserialize::<MenuRow>().enumerate() {
        // Row 1 is the header
        let row_number = index + 2;
        let row = row?;

        let label = row.meal_time.trim();
        let meal_period = MealPeriod::parse_label(label).ok_or_else(|| StoreError::MealTime {
            row: row_number,
            label: label.to_string(),
        })?;
        let recipes: RecipeMap =
            serde_json::from_str(&row.recipe_dict).map_err(|source| StoreError::RecipeDict {
                row: row_number,
                source,
            })?;

        if book
            .insert(MenuEntry::new(row.day.trim(), meal_period, recipes))
            .is_some()
        {
            debug!(row = row_number, day = %row.day.trim(), meal = %meal_period, "Duplicate row replaced earlier entry");
        }
    }

    Ok(book)
}

/// Location of the CSV artifact on disk.
#[derive(Debug, Clone)]
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Re-read the whole artifact. Nothing is cached.
    pub async fn load(&self) -> Result<MenuBook, StoreError> {
        info!(path = %self.path.display(), "Reading menu from CSV");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        let book = read_menu_csv(strip_bom(&bytes))?;
        info!(days = book.len(), path = %self.path.display(), "Loaded menu");
        Ok(book)
    }

    /// Replace the artifact with `entries`. Returns rows written.
    pub fn save<I>(&self, entries: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = MenuEntry>,
    {
        let file = std::fs::File::create(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        write_menu_csv(std::io::BufWriter::new(file), entries)
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
