use contracts::projections::p900_payroll_matrix::{Cell, ExportMatrix};

use super::ExportError;

/// Plain-text rendering of a cell; currency always carries two decimals
pub fn cell_to_text(cell: &Cell) -> String {
    match cell {
        Cell::Blank => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Integer(i) => i.to_string(),
        Cell::Currency(v) => format!("{:.2}", v),
    }
}

/// CSV for Excel: UTF-8 BOM, `;` separated, header first and totals last
pub fn write_csv(matrix: &ExportMatrix) -> Result<Vec<u8>, ExportError> {
    // BOM so Excel opens the file as UTF-8 (accents in names and tasks)
    let buf = "\u{FEFF}".as_bytes().to_vec();

    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(buf);

    for row in matrix.all_rows() {
        writer.write_record(row.iter().map(cell_to_text))?;
    }

    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv() {
        let matrix = ExportMatrix {
            workers: vec!["Juan".into()],
            header: vec![
                Cell::text("Tarifa"),
                Cell::text("Precio"),
                Cell::text("Fecha"),
                Cell::text("Juan · Tarea"),
                Cell::text("Cant."),
                Cell::text("Subtotal"),
            ],
            rows: vec![vec![
                Cell::text("Armado; marco"),
                Cell::Currency(12.5),
                Cell::text("2024-01-10"),
                Cell::text("Armado"),
                Cell::Integer(3),
                Cell::Currency(37.5),
            ]],
            totals: vec![
                Cell::text("TOTAL"),
                Cell::Blank,
                Cell::Blank,
                Cell::Blank,
                Cell::Blank,
                Cell::Currency(37.5),
            ],
        };

        let bytes = write_csv(&matrix).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with('\u{FEFF}'));

        let lines: Vec<&str> = text.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Tarifa;Precio;Fecha;Juan · Tarea;Cant.;Subtotal");
        assert_eq!(lines[1], "\"Armado; marco\";12.50;2024-01-10;Armado;3;37.50");
        assert_eq!(lines[2], "TOTAL;;;;;37.50");
    }
}
