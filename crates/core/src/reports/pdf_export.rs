//! PDF rendering of a monthly report.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use super::reports_model::{CategoryReportRow, MonthlyReport};
use crate::errors::{Error, Result};
use crate::utils::format::format_brl_number;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 14.0;
const MARGIN_BOTTOM: f64 = 20.0;
const TABLE_TOP: f64 = 35.0;
const ROW_HEIGHT: f64 = 8.0;
const TABLE_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN_LEFT;
const COLUMN_OFFSETS: [f64; 3] = [0.0, 90.0, 135.0];

const TITLE: &str = "Relatório de Gastos por Categoria";
const TABLE_HEADERS: [&str; 3] = ["Categoria", "Valor (R$)", "Quantidade de Gastos"];

/// Header band color, RGB(59, 130, 246).
fn header_fill() -> Color {
    Color::Rgb(Rgb::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn grid_gray() -> Color {
    Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None))
}

fn pdf_error(err: impl std::fmt::Debug) -> Error {
    Error::Export(format!("{:?}", err))
}

/// Distances are measured from the top of the page; PDF space starts at the
/// bottom-left corner.
fn from_top(offset: f64) -> Mm {
    Mm(PAGE_HEIGHT - offset)
}

fn rectangle(x: f64, top: f64, width: f64, height: f64, fill: bool) -> Line {
    let points = vec![
        (Point::new(Mm(x), from_top(top)), false),
        (Point::new(Mm(x + width), from_top(top)), false),
        (Point::new(Mm(x + width), from_top(top + height)), false),
        (Point::new(Mm(x), from_top(top + height)), false),
    ];
    Line {
        points,
        is_closed: true,
        has_fill: fill,
        has_stroke: !fill,
        is_clipping_path: false,
    }
}

struct TableWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: f64,
}

impl TableWriter {
    fn write_header_row(&mut self) {
        self.layer.set_fill_color(header_fill());
        self.layer.add_shape(rectangle(
            MARGIN_LEFT,
            self.cursor,
            TABLE_WIDTH,
            ROW_HEIGHT,
            true,
        ));
        self.layer.set_fill_color(white());
        for (header, offset) in TABLE_HEADERS.iter().zip(COLUMN_OFFSETS) {
            self.layer.use_text(
                *header,
                10.0,
                Mm(MARGIN_LEFT + offset + 2.0),
                from_top(self.cursor + ROW_HEIGHT - 2.5),
                &self.bold,
            );
        }
        self.layer.set_fill_color(black());
        self.cursor += ROW_HEIGHT;
    }

    fn write_row(&mut self, row: &CategoryReportRow) {
        if self.cursor + ROW_HEIGHT > PAGE_HEIGHT - MARGIN_BOTTOM {
            self.new_page();
        }
        self.layer.add_shape(rectangle(
            MARGIN_LEFT,
            self.cursor,
            TABLE_WIDTH,
            ROW_HEIGHT,
            false,
        ));
        let cells = [
            row.category.clone(),
            format_brl_number(row.amount),
            row.count.to_string(),
        ];
        for (cell, offset) in cells.iter().zip(COLUMN_OFFSETS) {
            self.layer.use_text(
                cell.as_str(),
                10.0,
                Mm(MARGIN_LEFT + offset + 2.0),
                from_top(self.cursor + ROW_HEIGHT - 2.5),
                &self.regular,
            );
        }
        self.cursor += ROW_HEIGHT;
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.layer.set_outline_color(grid_gray());
        self.cursor = MARGIN_BOTTOM;
        self.write_header_row();
    }
}

/// Renders the report as an A4 document with a title, the period and a
/// table of categories. The table continues on new pages when it does not
/// fit, repeating its header row.
pub fn export_pdf(report: &MonthlyReport) -> Result<Vec<u8>> {
    let period = report.period()?;
    let (doc, page, layer) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    first_layer.use_text(TITLE, 16.0, Mm(MARGIN_LEFT), from_top(18.0), &bold);
    first_layer.use_text(
        format!("Período: {} / {}", period.month_name(), period.year()),
        12.0,
        Mm(MARGIN_LEFT),
        from_top(28.0),
        &regular,
    );
    first_layer.set_outline_color(grid_gray());
    first_layer.set_outline_thickness(0.3);

    let mut table = TableWriter {
        doc,
        layer: first_layer,
        regular,
        bold,
        cursor: TABLE_TOP,
    };
    table.write_header_row();
    for row in &report.categories {
        table.write_row(row);
    }

    table.doc.save_to_bytes().map_err(pdf_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn report(rows: usize) -> MonthlyReport {
        let categories = (0..rows)
            .map(|i| CategoryReportRow {
                category_id: format!("c{}", i),
                category: format!("Categoria {}", i),
                color: "#3B82F6".to_string(),
                amount: dec!(1234.56),
                count: i + 1,
                share: Decimal::ZERO,
            })
            .collect();
        MonthlyReport {
            month: 3,
            year: 2024,
            categories,
            daily: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    #[test]
    fn test_pdf_is_produced_for_empty_report() {
        let bytes = export_pdf(&report(0)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_report_spans_pages() {
        let short = export_pdf(&report(3)).unwrap();
        let long = export_pdf(&report(80)).unwrap();
        assert!(long.starts_with(b"%PDF"));
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let mut bad = report(1);
        bad.month = 13;
        assert!(export_pdf(&bad).is_err());
    }
}
