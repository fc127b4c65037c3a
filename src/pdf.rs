// seating-chart: printable seating chart

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::error::AppError;
use crate::export::render_plan;
use crate::labels::Labels;
use crate::layout::{self, Cell, SeatRow, AISLE_AFTER_SEAT};
use crate::store::OccupancyStore;

// ============================================================================
// Constants
// ============================================================================

/// US Letter dimensions in mm
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;

/// Margins
const MARGIN_MM: f32 = 15.0;

/// Table boxes
const TABLE_WIDTH_MM: f32 = 40.0;
const TABLE_HEIGHT_MM: f32 = 18.0;
const TABLE_GAP_MM: f32 = 8.0;

/// Seat boxes
const SEAT_SIZE_MM: f32 = 14.0;
const SEAT_GAP_MM: f32 = 1.5;
const AISLE_WIDTH_MM: f32 = 10.0;
const ROW_LABEL_WIDTH_MM: f32 = 18.0;
const ROW_GAP_MM: f32 = 4.0;

/// Assignment listing
const LISTING_LINE_HEIGHT_MM: f32 = 5.5;

/// Font sizes in points
const TITLE_FONT_SIZE: f32 = 18.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const NORMAL_FONT_SIZE: f32 = 11.0;
const SMALL_FONT_SIZE: f32 = 9.0;
const NAME_FONT_SIZE: f32 = 6.0;

/// Characters of an occupant name that fit inside a seat box
const SEAT_NAME_CHARS: usize = 8;
/// Characters of an occupant name that fit inside a table box
const TABLE_NAME_CHARS: usize = 20;

/// Header text and font for the printed chart
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub date: NaiveDate,
    /// TrueType font for all text; the built-in Helvetica pair when absent
    pub font: Option<PathBuf>,
}

// ============================================================================
// PDF Generation
// ============================================================================

/// Draw the venue with every occupant, followed by the exported plan.
///
/// The built-in Helvetica fonts only cover WinAnsi text. Without an
/// external font, any label or name outside that set is an error.
pub fn generate_pdf(
    store: &OccupancyStore,
    labels: &Labels,
    config: &ChartConfig,
    output_path: &Path,
) -> Result<(), AppError> {
    let (doc, page1, layer1) = PdfDocument::new(
        "Seating Chart",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let mut current_layer = doc.get_page(page1).get_layer(layer1);

    let (font_regular, font_bold) = match &config.font {
        Some(path) => (load_font(&doc, path)?, load_font(&doc, path)?),
        None => {
            check_builtin_encoding(store, labels, config)?;
            let regular = doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::PdfError(e.to_string()))?;
            let bold = doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| AppError::PdfError(e.to_string()))?;
            (regular, bold)
        }
    };

    let mut y_pos = PAGE_HEIGHT_MM - MARGIN_MM;
    y_pos = draw_header_section(&current_layer, &font_regular, &font_bold, labels, config, y_pos);
    y_pos = draw_tables(&current_layer, &font_regular, &font_bold, labels, &layout::table_cells(store), y_pos);

    for row in layout::seat_rows(store) {
        y_pos = draw_seat_row(&current_layer, &font_regular, &font_bold, labels, &row, y_pos);
    }

    // Listing continues onto new pages as needed
    y_pos -= 6.0;
    let headings = [labels.plan_title, labels.tables_heading, labels.seats_heading];
    for line in render_plan(store, labels).lines() {
        if y_pos < MARGIN_MM + LISTING_LINE_HEIGHT_MM {
            let (new_page, new_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current_layer = doc.get_page(new_page).get_layer(new_layer);
            y_pos = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        let font = if headings.contains(&line) { &font_bold } else { &font_regular };
        current_layer.use_text(line, NORMAL_FONT_SIZE, Mm(MARGIN_MM), Mm(y_pos), font);
        y_pos -= LISTING_LINE_HEIGHT_MM;
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| AppError::PdfError(e.to_string()))?;

    Ok(())
}

pub fn format_date_display(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

// ============================================================================
// Fonts
// ============================================================================

fn load_font(doc: &PdfDocumentReference, path: &Path) -> Result<IndirectFontRef, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::PdfError(format!("{}: {}", path.display(), e)))?;
    doc.add_external_font(BufReader::new(file))
        .map_err(|e| AppError::PdfError(format!("{}: {}", path.display(), e)))
}

/// Characters the built-in fonts can draw (Windows-1252)
fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ".contains(c)
}

/// Reject text the built-in fonts would silently drop.
fn check_builtin_encoding(
    store: &OccupancyStore,
    labels: &Labels,
    config: &ChartConfig,
) -> Result<(), AppError> {
    let label_text: [&str; 6] = [
        labels.plan_title,
        labels.tables_heading,
        labels.seats_heading,
        labels.table,
        labels.row,
        labels.seat,
    ];
    let mut texts = label_text
        .into_iter()
        .chain(std::iter::once(config.title.as_str()))
        .chain(store.iter().map(|(_, name)| name));

    match texts.find(|text| !text.chars().all(is_win_ansi)) {
        Some(text) => Err(AppError::PdfError(format!(
            "'{}' cannot be drawn with the built-in fonts; pass --font with a TrueType font that covers it",
            text
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// Header Section
// ============================================================================

fn draw_header_section(
    layer: &PdfLayerReference,
    font_regular: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    labels: &Labels,
    config: &ChartConfig,
    start_y: f32,
) -> f32 {
    let title = labels.plan_title.trim_end_matches(':').to_uppercase();
    layer.use_text(title, TITLE_FONT_SIZE, Mm(MARGIN_MM), Mm(start_y - 6.0), font_bold);

    let mut y_pos = start_y - 6.0;
    if !config.title.is_empty() {
        y_pos -= 8.0;
        layer.use_text(&config.title, HEADER_FONT_SIZE, Mm(MARGIN_MM), Mm(y_pos), font_bold);
    }

    y_pos -= 6.0;
    layer.use_text(
        format_date_display(&config.date),
        NORMAL_FONT_SIZE,
        Mm(MARGIN_MM),
        Mm(y_pos),
        font_regular,
    );

    let content_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    y_pos -= 4.0;
    set_line_style(layer, 0.0, 0.5);
    draw_line(layer, MARGIN_MM, y_pos, MARGIN_MM + content_width, y_pos);

    y_pos - 8.0
}

// ============================================================================
// Tables and Seats
// ============================================================================

fn draw_tables(
    layer: &PdfLayerReference,
    font_regular: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    labels: &Labels,
    tables: &[Cell],
    start_y: f32,
) -> f32 {
    let count = tables.len() as f32;
    let total_width = count * TABLE_WIDTH_MM + (count - 1.0).max(0.0) * TABLE_GAP_MM;
    let mut x = (PAGE_WIDTH_MM - total_width) / 2.0;
    let bottom = start_y - TABLE_HEIGHT_MM;

    for cell in tables {
        draw_cell_box(layer, cell, x, bottom, TABLE_WIDTH_MM, TABLE_HEIGHT_MM);
        layer.use_text(
            cell.id.caption(labels),
            NORMAL_FONT_SIZE,
            Mm(x + 3.0),
            Mm(start_y - 6.5),
            font_bold,
        );
        if let Some(name) = &cell.occupant {
            layer.use_text(
                truncate(name, TABLE_NAME_CHARS),
                SMALL_FONT_SIZE,
                Mm(x + 3.0),
                Mm(start_y - 13.0),
                font_regular,
            );
        }
        x += TABLE_WIDTH_MM + TABLE_GAP_MM;
    }

    bottom - 10.0
}

fn draw_seat_row(
    layer: &PdfLayerReference,
    font_regular: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    labels: &Labels,
    row: &SeatRow,
    start_y: f32,
) -> f32 {
    let bottom = start_y - SEAT_SIZE_MM;
    let text_y = start_y - SEAT_SIZE_MM / 2.0 - 1.5;

    layer.use_text(
        format!("{} {}", labels.row, row.row),
        NORMAL_FONT_SIZE,
        Mm(MARGIN_MM),
        Mm(text_y),
        font_bold,
    );

    let step = SEAT_SIZE_MM + SEAT_GAP_MM;
    let left_x = MARGIN_MM + ROW_LABEL_WIDTH_MM;
    let right_x = left_x + AISLE_AFTER_SEAT as f32 * step + AISLE_WIDTH_MM;

    let blocks = [(left_x, &row.left, 1), (right_x, &row.right, AISLE_AFTER_SEAT + 1)];
    for (block_x, cells, first_seat) in blocks {
        for (index, cell) in cells.iter().enumerate() {
            let x = block_x + index as f32 * step;
            draw_cell_box(layer, cell, x, bottom, SEAT_SIZE_MM, SEAT_SIZE_MM);
            layer.use_text(
                (first_seat + index as u32).to_string(),
                SMALL_FONT_SIZE,
                Mm(x + 1.5),
                Mm(start_y - 4.5),
                font_regular,
            );
            if let Some(name) = &cell.occupant {
                layer.use_text(
                    truncate(name, SEAT_NAME_CHARS),
                    NAME_FONT_SIZE,
                    Mm(x + 1.0),
                    Mm(bottom + 2.5),
                    font_regular,
                );
            }
        }
    }

    bottom - ROW_GAP_MM
}

/// Occupied cells get a heavy dark outline, free ones a light grey one
fn draw_cell_box(layer: &PdfLayerReference, cell: &Cell, x: f32, y: f32, width: f32, height: f32) {
    if cell.is_occupied() {
        set_line_style(layer, 0.1, 0.9);
    } else {
        set_line_style(layer, 0.7, 0.3);
    }
    draw_rect(layer, x, y, width, height);
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(max_chars - 1).collect();
        short.push('.');
        short
    }
}

// ============================================================================
// Drawing Utilities
// ============================================================================

fn set_line_style(layer: &PdfLayerReference, grey: f32, thickness: f32) {
    let line_color = Color::Rgb(Rgb::new(grey, grey, grey, None));
    layer.set_outline_color(line_color);
    layer.set_outline_thickness(thickness);
}

fn draw_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
    draw_line(layer, x, y, x + width, y);
    draw_line(layer, x + width, y, x + width, y + height);
    draw_line(layer, x + width, y + height, x, y + height);
    draw_line(layer, x, y + height, x, y);
}

fn draw_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    let points = vec![
        (Point::new(Mm(x1), Mm(y1)), false),
        (Point::new(Mm(x2), Mm(y2)), false),
    ];
    let line = Line {
        points,
        is_closed: false,
    };
    layer.add_line(line);
}
