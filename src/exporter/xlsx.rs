// file: src/exporter/xlsx.rs
// description: XLSX workbook generation, one worksheet per workout category
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::{Result, SheetError};
use crate::exporter::rows::{self, DISPLAY_HEADER};
use crate::models::WorkoutSheet;
use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::PathBuf;
use tracing::info;

// Column widths roughly matching the printed document layout
const COLUMN_WIDTHS: [f64; 7] = [5.0, 35.0, 30.0, 9.0, 13.0, 10.0, 30.0];

pub struct XlsxExporter {
    output_dir: PathBuf,
}

impl XlsxExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| SheetError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn export_sheet(&self, sheet: &WorkoutSheet) -> Result<PathBuf> {
        let sections = rows::sections(&sheet.exercises);
        if sections.is_empty() {
            return Err(SheetError::Export(format!(
                "Sheet \"{}\" has no exercises to export",
                sheet.title
            )));
        }

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        for (category, group) in sections {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(format!("Treino {category}"))?;

            for (col, header) in DISPLAY_HEADER.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
                worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
            }

            for (index, row) in rows::display_rows(&group).into_iter().enumerate() {
                let row_number = (index + 1) as u32;
                worksheet.write_number(row_number, 0, (index + 1) as f64)?;
                for (col, value) in row.iter().enumerate().skip(1) {
                    worksheet.write_string(row_number, col as u16, value.as_str())?;
                }
            }
        }

        let filename = format!(
            "Treino_{}_{}.xlsx",
            sanitize_for_filename(&sheet.title),
            Utc::now().format("%Y-%m-%d")
        );
        let path = self.output_dir.join(filename);
        workbook.save(&path)?;

        info!("Wrote workbook {}", path.display());
        Ok(path)
    }
}

fn sanitize_for_filename(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "planilha".to_string()
    } else {
        cleaned
    }
}
