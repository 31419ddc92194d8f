use super::{ReportError, Sheet};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct Workbook<'a> {
    sheets: &'a [Sheet],
}

pub fn write_sheets(sheets: &[Sheet], output: &Path) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(&mut writer, &Workbook { sheets })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
