//! Thin layout layer over printpdf
//!
//! Documents here are simple top-to-bottom sheets: a heading, some
//! key-value rows, a few tables, a footer. `Sheet` tracks the write
//! cursor and starts a new page when a row would run off the bottom.
//! Only the built-in Helvetica faces are used, which keeps documents
//! free of font files but limits text to WinAnsi glyphs (amounts are
//! labelled `INR`, not with the rupee sign).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use core_kernel::Money;

use crate::error::DocumentError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const TOP: f32 = 270.0;
const BOTTOM: f32 = 20.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Label used for monetary values in documents, e.g. `INR 9000.00`
pub fn amount_label(amount: &Money) -> String {
    format!("{} {:.2}", amount.currency().code(), amount.amount())
}

/// Truncates a table cell so long free text cannot collide with the next
/// column
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{kept}..")
    } else {
        text.to_string()
    }
}

/// A single flowing PDF document
pub struct Sheet {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    col_widths: Vec<f32>,
    y: f32,
}

impl Sheet {
    pub fn new(title: &str) -> Result<Self, DocumentError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::RenderFailed(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::RenderFailed(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            col_widths: Vec::new(),
            y: TOP,
        })
    }

    /// Document heading, large and bold
    pub fn heading(&mut self, text: &str) {
        self.write(MARGIN, 20.0, true, text);
        self.y -= 12.0;
    }

    /// Section header with a rule underneath
    pub fn section(&mut self, text: &str) {
        self.break_page_if_full();
        self.write(MARGIN, 12.0, true, text);
        self.y -= 6.0;
        self.rule();
        self.y -= 8.0;
    }

    /// A plain line of body text
    pub fn line(&mut self, text: &str) {
        self.break_page_if_full();
        self.write(MARGIN + 5.0, 10.0, false, text);
        self.y -= 7.0;
    }

    /// Label on the left, value right-aligned, as ledger rows read
    pub fn key_value(&mut self, label: &str, value: &str) {
        self.break_page_if_full();
        self.write(MARGIN + 5.0, 10.0, false, label);
        self.write_at(right_aligned(value), self.y, 10.0, false, value);
        self.y -= 7.0;
    }

    /// Emphasized variant of [`key_value`](Self::key_value) for totals
    pub fn key_value_bold(&mut self, label: &str, value: &str) {
        self.break_page_if_full();
        self.write(MARGIN + 5.0, 11.0, true, label);
        self.write_at(right_aligned(value), self.y, 11.0, true, value);
        self.y -= 8.0;
    }

    /// Starts a table: bold column captions over a rule. Widths are in
    /// millimetres and also drive the following [`table_row`](Self::table_row)
    /// calls.
    pub fn table_header(&mut self, columns: &[(&str, f32)]) {
        self.break_page_if_full();
        let mut x = MARGIN;
        for (caption, width) in columns {
            self.write(x, 9.0, true, caption);
            x += width;
        }
        self.y -= 3.0;
        self.rule();
        self.y -= 5.0;
        self.col_widths = columns.iter().map(|(_, width)| *width).collect();
    }

    /// One table row under the most recent header
    pub fn table_row(&mut self, cells: &[&str]) {
        self.break_page_if_full();
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(&self.col_widths) {
            self.write_at(x, self.y, 8.0, false, cell);
            x += width;
        }
        self.y -= 5.0;
    }

    /// Horizontal rule across the content width
    pub fn rule(&mut self) {
        let rule = Line::from_iter(vec![
            (Point::new(Mm(MARGIN), Mm(self.y)), false),
            (Point::new(Mm(MARGIN + CONTENT_WIDTH), Mm(self.y)), false),
        ]);
        self.layer.add_line(rule);
    }

    /// Vertical whitespace
    pub fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Small print pinned to the bottom of the current page
    pub fn footer(&mut self, text: &str) {
        self.write_at(MARGIN, 10.0, 8.0, false, text);
    }

    /// Writes the document. Parent directories must already exist; the
    /// store creates them when it allocates the path.
    pub fn save(self, path: &Path) -> Result<(), DocumentError> {
        let file = File::create(path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| DocumentError::RenderFailed(e.to_string()))
    }

    fn write(&self, x: f32, size: f32, bold: bool, text: &str) {
        self.write_at(x, self.y, size, bold, text);
    }

    fn write_at(&self, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.begin_text_section();
        self.layer.set_font(font, size);
        self.layer.set_text_cursor(Mm(x), Mm(y));
        self.layer.write_text(text, font);
        self.layer.end_text_section();
    }

    fn break_page_if_full(&mut self) {
        if self.y < BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
    }
}

/// Rough right-alignment for Helvetica at 10pt; good enough for the
/// amounts column
fn right_aligned(value: &str) -> f32 {
    MARGIN + CONTENT_WIDTH - 10.0 - value.chars().count() as f32 * 2.1
}
