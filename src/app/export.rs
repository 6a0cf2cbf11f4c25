use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::models::Holding;

pub fn write_holdings(path: &str, holdings: &[Holding]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file at path: {}", path))?;

    writer.write_record(["Name", "ISIN", "Anzahl", "Kaufkurs", "Waehrung"])?;

    for holding in holdings {
        writer.serialize(holding)?;
    }

    writer.flush()?;
    Ok(())
}
