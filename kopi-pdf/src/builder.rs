//! PDF page builder
//!
//! Provides a fluent, cursor-based API for laying out text pages.
//! All positions are in millimetres from the top-left corner of an A4 page.

use std::io::Write;

use tracing::instrument;

use crate::encoding::{escape_string, to_win_ansi};
use crate::metrics::{Font, MM_PER_PT, text_width};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
/// Distance from the bottom edge that triggers a page break
const BREAK_MARGIN_MM: f64 = 20.0;
/// Inner horizontal padding of a cell
const CELL_PADDING_MM: f64 = 1.0;

// Object numbers: catalog, page tree, then one per font face, then pages.
const CATALOG_OBJ: usize = 1;
const PAGES_OBJ: usize = 2;
const FIRST_FONT_OBJ: usize = 3;
const FIRST_PAGE_OBJ: usize = FIRST_FONT_OBJ + Font::ALL.len();

/// RGB colour, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    fn operands(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0
        )
    }
}

/// Horizontal text alignment inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// PDF document builder
///
/// Builds a complete PDF 1.4 byte stream. A page is opened on creation and
/// new pages are opened automatically when content would run past the
/// bottom break margin.
pub struct PdfBuilder {
    pages: Vec<Vec<u8>>,
    current: Vec<u8>,
    x: f64,
    y: f64,
    font: Font,
    font_size: f64,
    text_color: Rgb,
    background: Option<(Rgb, f64)>,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBuilder {
    /// Create a builder with one empty A4 page
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::with_capacity(4096),
            x: MARGIN_MM,
            y: MARGIN_MM,
            font: Font::Regular,
            font_size: 12.0,
            text_color: Rgb::BLACK,
            background: None,
        }
    }

    /// Number of pages so far (including the open one)
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Current vertical cursor position
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Usable width between the side margins
    pub fn content_width(&self) -> f64 {
        PAGE_WIDTH_MM - 2.0 * MARGIN_MM
    }

    // === Style ===

    /// Select font face and size (in points)
    pub fn font(&mut self, font: Font, size_pt: f64) -> &mut Self {
        self.font = font;
        self.font_size = size_pt;
        self
    }

    /// Set the colour used for subsequent text
    pub fn text_color(&mut self, color: Rgb) -> &mut Self {
        self.text_color = color;
        self
    }

    /// Fill every page with `color`, leaving an `inset` millimetre border
    ///
    /// Applied to the current page immediately and to every page opened later.
    pub fn page_background(&mut self, color: Rgb, inset: f64) -> &mut Self {
        self.background = Some((color, inset));
        self.fill_rect(
            inset,
            inset,
            PAGE_WIDTH_MM - 2.0 * inset,
            PAGE_HEIGHT_MM - 2.0 * inset,
            color,
        )
    }

    // === Drawing ===

    /// Draw a filled rectangle (top-left corner at `x`, `y`)
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) -> &mut Self {
        let _ = writeln!(
            self.current,
            "q {} rg {:.2} {:.2} {:.2} {:.2} re f Q",
            color.operands(),
            to_pt(x),
            to_pt(PAGE_HEIGHT_MM - y - h),
            to_pt(w),
            to_pt(h)
        );
        self
    }

    /// Write a single-line cell and move the cursor right
    ///
    /// A width of `0` extends the cell to the right margin.
    pub fn cell(&mut self, w: f64, h: f64, text: &str, align: Align) -> &mut Self {
        if self.y + h > PAGE_HEIGHT_MM - BREAK_MARGIN_MM {
            self.add_page();
        }

        let w = if w <= 0.0 {
            PAGE_WIDTH_MM - MARGIN_MM - self.x
        } else {
            w
        };

        let encoded = to_win_ansi(text);
        if !encoded.is_empty() {
            let tw = text_width(self.font, self.font_size, &encoded);
            let dx = match align {
                Align::Left => CELL_PADDING_MM,
                Align::Center => (w - tw) / 2.0,
                Align::Right => w - CELL_PADDING_MM - tw,
            };
            // Vertically centre the baseline in the cell
            let baseline = self.y + 0.5 * h + 0.3 * self.font_size * MM_PER_PT;
            self.show_text(self.x + dx, baseline, &encoded);
        }

        self.x += w;
        self
    }

    /// Write a cell, then move to the start of the next line
    pub fn cell_ln(&mut self, w: f64, h: f64, text: &str, align: Align) -> &mut Self {
        self.cell(w, h, text, align);
        self.ln(h)
    }

    /// Write left-aligned text wrapped to the content width, `h` per line
    ///
    /// Explicit `\n` starts a new line. Words longer than a line are split.
    pub fn multi_cell(&mut self, h: f64, text: &str) -> &mut Self {
        self.x = MARGIN_MM;
        let max = self.content_width() - 2.0 * CELL_PADDING_MM;
        for line in self.wrap(text, max) {
            self.cell_ln(0.0, h, &line, Align::Left);
        }
        self
    }

    /// Line break: return to the left margin and move down `h`
    pub fn ln(&mut self, h: f64) -> &mut Self {
        self.x = MARGIN_MM;
        self.y += h;
        self
    }

    /// Close the current page and open a new one
    pub fn add_page(&mut self) -> &mut Self {
        let finished = std::mem::replace(&mut self.current, Vec::with_capacity(4096));
        self.pages.push(finished);
        self.x = MARGIN_MM;
        self.y = MARGIN_MM;
        if let Some((color, inset)) = self.background {
            self.page_background(color, inset);
        }
        tracing::debug!(page = self.page_count(), "Opened new PDF page");
        self
    }

    // === Output ===

    /// Serialize the document
    #[instrument(skip_all)]
    pub fn build(mut self) -> Vec<u8> {
        let last = std::mem::take(&mut self.current);
        self.pages.push(last);

        let mut out = Vec::with_capacity(self.pages.iter().map(Vec::len).sum::<usize>() + 2048);
        let mut offsets: Vec<usize> = Vec::new();

        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        // 1: catalog
        push_object(
            &mut out,
            &mut offsets,
            format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_OBJ).as_bytes(),
        );

        // 2: page tree
        let kids = (0..self.pages.len())
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect::<Vec<_>>()
            .join(" ");
        push_object(
            &mut out,
            &mut offsets,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids,
                self.pages.len()
            )
            .as_bytes(),
        );

        // 3..: fonts
        for font in Font::ALL {
            push_object(
                &mut out,
                &mut offsets,
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font()
                )
                .as_bytes(),
            );
        }

        let font_resources = Font::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| format!("/{} {} 0 R", font.resource(), FIRST_FONT_OBJ + i))
            .collect::<Vec<_>>()
            .join(" ");

        // pages: page object followed by its content stream
        for (i, content) in self.pages.iter().enumerate() {
            push_object(
                &mut out,
                &mut offsets,
                format!(
                    "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << {} >> >> /Contents {} 0 R >>",
                    PAGES_OBJ,
                    to_pt(PAGE_WIDTH_MM),
                    to_pt(PAGE_HEIGHT_MM),
                    font_resources,
                    page_obj(i) + 1
                )
                .as_bytes(),
            );

            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            push_object(&mut out, &mut offsets, &stream);
        }

        let xref_offset = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
        for offset in &offsets {
            let _ = write!(out, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            CATALOG_OBJ,
            xref_offset
        );

        out
    }

    // === Internals ===

    fn show_text(&mut self, x: f64, baseline: f64, encoded: &[u8]) {
        let _ = write!(
            self.current,
            "BT /{} {:.2} Tf {} rg {:.2} {:.2} Td (",
            self.font.resource(),
            self.font_size,
            self.text_color.operands(),
            to_pt(x),
            to_pt(PAGE_HEIGHT_MM - baseline)
        );
        self.current.extend_from_slice(&escape_string(encoded));
        self.current.extend_from_slice(b") Tj ET\n");
    }

    fn wrap(&self, text: &str, max_width: f64) -> Vec<String> {
        let fits = |s: &str| text_width(self.font, self.font_size, &to_win_ansi(s)) <= max_width;
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{} {}", line, word)
                };
                if fits(&candidate) {
                    line = candidate;
                    continue;
                }

                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                // Hard-split a word that is wider than a whole line
                for c in word.chars() {
                    line.push(c);
                    if !fits(&line) && line.chars().count() > 1 {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(c);
                    }
                }
            }
            lines.push(line);
        }

        lines
    }
}

fn to_pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

fn page_obj(index: usize) -> usize {
    FIRST_PAGE_OBJ + 2 * index
}

fn push_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &[u8]) {
    offsets.push(out.len());
    let _ = write!(out, "{} 0 obj\n", offsets.len());
    out.extend_from_slice(body);
    out.extend_from_slice(b"\nendobj\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_document_frame() {
        let mut pdf = PdfBuilder::new();
        pdf.cell_ln(0.0, 10.0, "Hello", Align::Left);
        let bytes = pdf.build();

        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        assert!(contains(&bytes, "(Hello) Tj"));
        assert!(contains(&bytes, "/BaseFont /Helvetica-Bold"));
        assert!(contains(&bytes, "/Count 1"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut pdf = PdfBuilder::new();
        pdf.font(Font::Bold, 18.0).cell_ln(0.0, 20.0, "Title (draft)", Align::Center);
        let bytes = pdf.build();

        let marker = b"startxref\n";
        let tail_start = bytes
            .windows(marker.len())
            .rposition(|w| w == marker)
            .unwrap();
        let tail = std::str::from_utf8(&bytes[tail_start..]).unwrap();
        let xref_offset: usize = tail.lines().nth(1).unwrap().parse().unwrap();
        assert!(bytes[xref_offset..].starts_with(b"xref\n"));

        // catalog, page tree, three fonts, one page and its content stream
        let xref = std::str::from_utf8(&bytes[xref_offset..]).unwrap();
        let entries: Vec<&str> = xref.lines().skip(3).take(7).collect();
        assert_eq!(entries.len(), 7);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let header = format!("{} 0 obj\n", i + 1);
            assert!(bytes[offset..].starts_with(header.as_bytes()), "object {}", i + 1);
        }
    }

    #[test]
    fn test_parentheses_escaped() {
        let mut pdf = PdfBuilder::new();
        pdf.cell(0.0, 10.0, "Nasi (large)", Align::Left);
        let bytes = pdf.build();
        assert!(contains(&bytes, "(Nasi \\(large\\)) Tj"));
    }

    #[test]
    fn test_automatic_page_break() {
        let mut pdf = PdfBuilder::new();
        for i in 0..60 {
            pdf.multi_cell(10.0, &format!("- 1 x Item {} @ Rs. 10", i));
        }
        assert!(pdf.page_count() > 1);
        let pages = pdf.page_count();

        let bytes = pdf.build();
        assert!(contains(&bytes, &format!("/Count {}", pages)));
        assert!(contains(&bytes, "(- 1 x Item 59 @ Rs. 10) Tj"));
    }

    #[test]
    fn test_background_repeats_on_new_pages() {
        let mut pdf = PdfBuilder::new();
        pdf.page_background(Rgb(245, 245, 245), 5.0);
        pdf.add_page();
        let bytes = pdf.build();
        let fills = String::from_utf8_lossy(&bytes).matches(" re f Q").count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn test_wrap_long_text() {
        let pdf = PdfBuilder::new();
        let long = "word ".repeat(80);
        let lines = pdf.wrap(&long, pdf.content_width());
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| !l.is_empty()));

        let unbroken = "x".repeat(400);
        let lines = pdf.wrap(&unbroken, pdf.content_width());
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), unbroken);
    }

    #[test]
    fn test_wrap_keeps_explicit_breaks() {
        let pdf = PdfBuilder::new();
        let lines = pdf.wrap("one\ntwo", 100.0);
        assert_eq!(lines, vec!["one", "two"]);
    }
}
