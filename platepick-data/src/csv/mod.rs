//! Catalogue import and export in CSV form.
//!
//! Import is lenient at the file level and strict at the row level: every
//! row is validated on its own, valid rows are kept, and failures are
//! reported with their row number so an operator can fix and re-run the
//! file. Rows naming a restaurant that was already imported replace the
//! earlier record in place. Every imported restaurant has a distinct id;
//! colliding ids gain a numeric suffix.

use std::collections::{HashMap, HashSet};
use std::io;
use std::pin::pin;

use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder, ErrorKind, Trim};
use futures_util::StreamExt;
use platepick_core::Restaurant;
use serde::Serialize;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};

mod row;

pub use row::{CSV_COLUMNS, CsvRow, RowError, row_to_restaurant, validate_row};

/// Errors that abort an import or export as a whole.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvError {
    /// The input could not be read.
    #[error("failed to read CSV input: {source}")]
    Read {
        /// Underlying reader error.
        source: csv_async::Error,
    },
    /// A record could not be written.
    #[error("failed to write CSV record: {source}")]
    Write {
        /// Underlying writer error.
        source: csv_async::Error,
    },
    /// Buffered output could not be flushed.
    #[error("failed to flush CSV output: {source}")]
    Flush {
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Outcome of importing a catalogue file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvImport {
    /// Valid restaurants in first-seen order, one per distinct name.
    pub restaurants: Vec<Restaurant>,
    /// Number of rows accepted, counting rows that replaced an earlier one.
    pub imported: usize,
    /// Rejected rows in file order.
    pub errors: Vec<RowError>,
}

/// Serialisable summary of a [`CsvImport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Whether every row was accepted.
    pub success: bool,
    /// Number of rows accepted.
    pub imported: usize,
    /// Rejected rows.
    pub errors: Vec<RowError>,
}

impl CsvImport {
    /// Whether every row was accepted.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Summarise the import for display.
    #[must_use]
    pub fn report(&self) -> ImportReport {
        ImportReport {
            success: self.success(),
            imported: self.imported,
            errors: self.errors.clone(),
        }
    }
}

#[derive(Default)]
struct Importer {
    import: CsvImport,
    positions: HashMap<String, usize>,
    ids: HashSet<String>,
}

impl Importer {
    fn accept(&mut self, restaurant: Restaurant) {
        self.import.imported = self.import.imported.saturating_add(1);
        let existing = self
            .positions
            .get(&restaurant.name)
            .and_then(|&position| self.import.restaurants.get_mut(position));
        if let Some(slot) = existing {
            log::debug!("row replaces earlier record for {}", restaurant.name);
            let id = std::mem::take(&mut slot.id);
            *slot = Restaurant { id, ..restaurant };
        } else {
            let id = self.unique_id(&restaurant.id);
            if id != restaurant.id {
                log::warn!(
                    "id {} is already taken; importing {} as {id}",
                    restaurant.id,
                    restaurant.name
                );
            }
            self.ids.insert(id.clone());
            self.positions
                .insert(restaurant.name.clone(), self.import.restaurants.len());
            self.import.restaurants.push(Restaurant { id, ..restaurant });
        }
    }

    /// `base`, or `base-2`, `base-3`, ... when it is taken.
    fn unique_id(&self, base: &str) -> String {
        if !self.ids.contains(base) {
            return base.to_owned();
        }
        let mut suffix = 2_u32;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !self.ids.contains(&candidate) {
                return candidate;
            }
            suffix = suffix.saturating_add(1);
        }
    }

    fn reject(&mut self, error: RowError) {
        log::warn!("{error}");
        self.import.errors.push(error);
    }
}

/// Read a catalogue from CSV.
///
/// The first line is the header. Fields are trimmed, empty lines are
/// skipped, and unknown columns are ignored.
///
/// # Errors
/// Returns [`CsvError::Read`] when the underlying reader fails. Malformed or
/// invalid rows do not abort the import; they are reported in
/// [`CsvImport::errors`].
///
/// # Examples
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// use platepick_data::import_csv;
///
/// let input = "name,heaviness,portionSize,fineDining,priceLevel\n\
///              Taco Stand,60,70,10,1\n\
///              ,50,50,50,2\n";
/// let import = import_csv(input.as_bytes()).await.unwrap();
///
/// assert_eq!(import.restaurants[0].id, "taco-stand");
/// assert_eq!(import.errors[0].message, "Row 2: name is required");
/// assert!(!import.success());
/// # });
/// ```
pub async fn import_csv<R>(reader: R) -> Result<CsvImport, CsvError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .create_deserializer(reader);
    let mut records = pin!(deserializer.deserialize::<CsvRow>());
    let mut importer = Importer::default();
    let mut index = 0_usize;
    while let Some(record) = records.next().await {
        match record {
            Ok(row) => match row_to_restaurant(&row, index) {
                Ok(restaurant) => importer.accept(restaurant),
                Err(error) => importer.reject(error),
            },
            Err(source) if matches!(source.kind(), ErrorKind::Io(_)) => {
                return Err(CsvError::Read { source });
            }
            Err(source) => importer.reject(RowError::new(index.saturating_add(1), source)),
        }
        index = index.saturating_add(1);
    }
    let import = importer.import;
    log::debug!(
        "imported {} rows into {} restaurants, {} rejected",
        import.imported,
        import.restaurants.len(),
        import.errors.len()
    );
    Ok(import)
}

/// Write restaurants as CSV with a header row.
///
/// Cuisines are written as a JSON array and absent optional fields as empty
/// cells. Returns the number of records written.
///
/// # Errors
/// Returns [`CsvError::Write`] or [`CsvError::Flush`] when the writer fails.
pub async fn export_csv<'a, I, W>(restaurants: I, writer: W) -> Result<usize, CsvError>
where
    I: IntoIterator<Item = &'a Restaurant>,
    W: AsyncWrite + Unpin,
{
    let mut serializer = AsyncWriterBuilder::new()
        .has_headers(false)
        .create_serializer(writer);
    serializer
        .serialize(CSV_COLUMNS)
        .await
        .map_err(|source| CsvError::Write { source })?;
    let mut written = 0_usize;
    for restaurant in restaurants {
        serializer
            .serialize(CsvRow::from(restaurant))
            .await
            .map_err(|source| CsvError::Write { source })?;
        written = written.saturating_add(1);
    }
    serializer
        .flush()
        .await
        .map_err(|source| CsvError::Flush { source })?;
    log::debug!("exported {written} restaurants");
    Ok(written)
}

#[cfg(test)]
mod tests;
