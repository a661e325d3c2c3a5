//! Cursor-based page writer over printpdf.
//!
//! Maintains a vertical cursor in millimetres from the top of an A4 page.
//! Callers draw blocks top-down; `ensure_space` starts a fresh page and
//! resets the cursor when the remaining height cannot fit the next block.
//! printpdf's coordinate origin is the bottom-left corner, so the writer
//! flips the cursor on every draw call.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use super::metrics::{text_width_mm, wrap_text, FontFace};
use super::style::{StyleConfig, Tint};
use super::RenderError;

struct Faces {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

pub struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    faces: Faces,
    pub style: StyleConfig,
    /// Cursor position, millimetres from the top edge.
    y: f32,
    page_count: usize,
}

impl PageWriter {
    pub fn new(style: StyleConfig, title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(style.page_width),
            Mm(style.page_height),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let pdf_err = |e: printpdf::Error| RenderError::Pdf(e.to_string());
        let faces = Faces {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_err)?,
            oblique: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(pdf_err)?,
        };

        let y = style.margin;
        Ok(Self {
            doc,
            layer,
            faces,
            style,
            y,
            page_count: 1,
        })
    }

    pub fn cursor(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn advance(&mut self, amount: f32) {
        self.y += amount;
    }

    /// Starts a new page (cursor back to the top margin) unless `required`
    /// millimetres still fit above the bottom margin.
    pub fn ensure_space(&mut self, required: f32) {
        if self.y + required > self.style.page_height - self.style.margin {
            let (page, layer) = self.doc.add_page(
                Mm(self.style.page_width),
                Mm(self.style.page_height),
                "Layer 1",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.page_count += 1;
            self.y = self.style.margin;
        }
    }

    fn font(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.faces.regular,
            FontFace::Bold => &self.faces.bold,
            FontFace::Oblique => &self.faces.oblique,
        }
    }

    fn set_fill(&self, color: Tint) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(color.r, color.g, color.b, None)));
    }

    /// Draws a single line of text with its baseline at the current cursor.
    /// Does not advance the cursor; the caller owns vertical rhythm.
    pub fn text(&self, text: &str, x: f32, face: FontFace, size_pt: f32, color: Tint) {
        self.set_fill(color);
        self.layer.use_text(
            text,
            size_pt,
            Mm(x),
            Mm(self.style.page_height - self.y),
            self.font(face),
        );
    }

    /// Draws text so its right edge lands on the right content margin.
    pub fn right_aligned_text(&self, text: &str, face: FontFace, size_pt: f32, color: Tint) {
        let x = self.style.page_width - self.style.margin - text_width_mm(text, face, size_pt);
        self.text(text, x, face, size_pt, color);
    }

    /// Thin rule across the content width at the current cursor, then
    /// advances past it.
    pub fn horizontal_line(&mut self) {
        let y = self.style.page_height - self.y;
        let line = Line {
            points: vec![
                (Point::new(Mm(self.style.margin), Mm(y)), false),
                (
                    Point::new(Mm(self.style.page_width - self.style.margin), Mm(y)),
                    false,
                ),
            ],
            is_closed: false,
        };
        let c = self.style.colors.line;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(c.r, c.g, c.b, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(line);
        self.y += 6.0;
    }

    /// Word-wraps and draws a paragraph, advancing the cursor one
    /// `line_height` per printed line.
    pub fn wrapped_text(
        &mut self,
        text: &str,
        x: f32,
        max_width: f32,
        face: FontFace,
        size_pt: f32,
        color: Tint,
        line_height: f32,
    ) {
        for line in wrap_text(text, face, size_pt, max_width) {
            self.text(&line, x, face, size_pt, color);
            self.y += line_height;
        }
    }

    /// Bulleted list: each item is prefixed with a bullet glyph, indented,
    /// and word-wrapped slightly narrower than the content width.
    pub fn bullet_list(&mut self, items: &[String]) {
        let style = self.style;
        let size = style.sizes.normal;
        for item in items {
            self.wrapped_text(
                &format!("• {item}"),
                style.margin + style.bullet_indent,
                style.content_width() - 2.0 * style.bullet_indent,
                FontFace::Regular,
                size,
                style.colors.text,
                6.5,
            );
        }
    }

    /// Section title in the accent color with a rule underneath.
    pub fn section_header(&mut self, title: &str) {
        let style = self.style;
        self.text(
            title,
            style.margin,
            FontFace::Bold,
            style.sizes.section_header,
            style.colors.primary,
        );
        self.y += style.spacing.tight;
        self.horizontal_line();
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
