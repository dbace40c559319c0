use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::{ItemStatus, WorkItem};
use crate::pipeline::RunReport;

/// One row of the results snapshot
#[derive(Debug, Serialize)]
struct ItemRow {
    id: u32,
    priority: u8,
    status: ItemStatus,
}

impl From<&WorkItem> for ItemRow {
    fn from(item: &WorkItem) -> Self {
        Self {
            id: item.id,
            priority: item.priority,
            status: item.status,
        }
    }
}

/// Write a run's item results as CSV (`id,priority,status`)
///
/// Rows appear in the report's order. The header is always written, even for
/// an empty run.
pub async fn write_report<W>(report: &RunReport, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut rows = csv::Writer::from_writer(Vec::new());

    if report.items.is_empty() {
        rows.write_record(["id", "priority", "status"])?;
    }
    for item in &report.items {
        rows.serialize(ItemRow::from(item))?;
    }

    let buffer = rows.into_inner().map_err(|e| e.into_error())?;
    writer.write_all(&buffer).await?;
    writer.flush().await?;

    Ok(())
}
