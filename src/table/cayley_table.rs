//! Dense Cayley tables of pairwise products

use crate::algebra::{OutputFormat, Word};
use crate::{FreeGroupError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::debug;

/// Table whose cell `(i, j)` is `row_headers[i] * column_headers[j]`.
///
/// All products are computed in the constructor, so a `CayleyTable` is never
/// observed half built and can be shared freely between threads. Deserializing
/// reads only the headers and computes the products again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableHeaders")]
pub struct CayleyTable {
    row_headers: Vec<Word>,
    column_headers: Vec<Word>,
    table: Array2<Word>,
}

/// Serialized form accepted back: the products are never trusted
#[derive(Deserialize)]
struct TableHeaders {
    row_headers: Vec<Word>,
    column_headers: Vec<Word>,
}

impl TryFrom<TableHeaders> for CayleyTable {
    type Error = FreeGroupError;

    fn try_from(headers: TableHeaders) -> Result<Self> {
        CayleyTable::new(&headers.row_headers, &headers.column_headers)
    }
}

impl CayleyTable {
    /// Table with separate row and column headers. Fails if any product
    /// overflows its exponents.
    pub fn new(row_headers: &[Word], column_headers: &[Word]) -> Result<Self> {
        let cells = row_headers
            .iter()
            .flat_map(|row| column_headers.iter().map(move |column| row.multiply(column)))
            .collect::<Result<Vec<_>>>()?;
        let table = Array2::from_shape_vec((row_headers.len(), column_headers.len()), cells)
            .map_err(|e| FreeGroupError::InvalidArgument(e.to_string()))?;
        debug!(
            rows = row_headers.len(),
            columns = column_headers.len(),
            "built cayley table"
        );

        Ok(CayleyTable {
            row_headers: row_headers.to_vec(),
            column_headers: column_headers.to_vec(),
            table,
        })
    }

    /// Table whose row headers are the same as its column headers
    pub fn symmetric(words: &[Word]) -> Result<Self> {
        Self::new(words, words)
    }

    /// Product in row `i`, column `j`
    pub fn entry(&self, i: usize, j: usize) -> Option<&Word> {
        self.table.get((i, j))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.row_headers.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.column_headers.len()
    }

    /// Row headers
    pub fn row_headers(&self) -> &[Word] {
        &self.row_headers
    }

    /// Column headers
    pub fn column_headers(&self) -> &[Word] {
        &self.column_headers
    }

    /// Render as an HTML `<table>` with header row and header column
    pub fn to_html_string(&self) -> String {
        let mut out = String::from("<table>\n");
        self.write_header(&mut out);
        for (header, row) in self.row_headers.iter().zip(self.table.rows()) {
            let _ = write!(out, "<tr><th scope=\"row\">{}</th>", header.render(OutputFormat::Html));
            for word in row.iter() {
                let _ = write!(out, "<td>{}</td>", word.render(OutputFormat::Html));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>");
        out
    }

    fn write_header(&self, out: &mut String) {
        out.push_str("<tr><th></th>");
        for word in &self.column_headers {
            let _ = write!(out, "<th scope=\"col\">{}</th>", word.render(OutputFormat::Html));
        }
        out.push_str("</tr>\n");
    }
}
