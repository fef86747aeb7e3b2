use crate::domain::model::RankRow;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

const NOT_FOUND: &str = "not found";

/// Ordered keyword → pixel-rank table. Rows are rendered in submission order;
/// no sorting, filtering or pagination.
pub struct RankReport {
    rows: Vec<RankRow>,
    generated_at: DateTime<Utc>,
}

impl RankReport {
    pub fn new(rows: Vec<RankRow>) -> Self {
        Self {
            rows,
            generated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table as aligned plain text.
    pub fn render(&self) -> String {
        let keyword_width = self
            .rows
            .iter()
            .map(|row| row.keyword.len())
            .chain(std::iter::once("Keyword".len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{:<keyword_width$}  Pixel Rank\n", "Keyword"));
        out.push_str(&format!("{:-<keyword_width$}  ----------\n", ""));

        for row in &self.rows {
            let rank = match row.pixel_rank {
                Some(offset) => offset.to_string(),
                None => NOT_FOUND.to_string(),
            };
            out.push_str(&format!("{:<keyword_width$}  {}\n", row.keyword, rank));
        }

        out
    }

    /// Writes the table as CSV. A missing rank becomes an empty cell, not a
    /// zero.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["keyword", "pixel_rank"])?;

        for row in &self.rows {
            let rank = row
                .pixel_rank
                .map(|offset| offset.to_string())
                .unwrap_or_default();
            writer.write_record([row.keyword.as_str(), rank.as_str()])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Timestamped filename for exports when the user gives a directory.
    pub fn default_filename(&self) -> String {
        format!(
            "pixel_ranks_{}.csv",
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}
