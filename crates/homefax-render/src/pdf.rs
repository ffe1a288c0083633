use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::FOOTER_TEXT;
use crate::layout::{Layout, paginate};

const BODY_FONT: Name<'static> = Name(b"F1");
const TITLE_FONT: Name<'static> = Name(b"F2");

/// Advance width of every Courier glyph, in text space units per point.
const COURIER_ADVANCE: f32 = 0.6;

/// Finished PDF bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Incrementally writes titled sections as pages of a single PDF.
pub struct PdfDocumentBuilder {
    pdf: Pdf,
    layout: Layout,
    next_id: i32,
    catalog_id: Ref,
    page_tree_id: Ref,
    body_font_id: Ref,
    title_font_id: Ref,
    page_ids: Vec<Ref>,
}

impl PdfDocumentBuilder {
    pub fn new(layout: Layout) -> Self {
        let mut builder = Self {
            pdf: Pdf::new(),
            layout,
            next_id: 1,
            catalog_id: Ref::new(1),
            page_tree_id: Ref::new(1),
            body_font_id: Ref::new(1),
            title_font_id: Ref::new(1),
            page_ids: Vec::new(),
        };
        builder.catalog_id = builder.alloc();
        builder.page_tree_id = builder.alloc();
        builder.body_font_id = builder.alloc();
        builder.title_font_id = builder.alloc();

        builder
            .pdf
            .type1_font(builder.body_font_id)
            .base_font(Name(b"Courier"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        builder
            .pdf
            .type1_font(builder.title_font_id)
            .base_font(Name(b"Courier-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        builder
    }

    /// Set the document title shown by PDF viewers.
    pub fn title(&mut self, title: &str) -> &mut Self {
        let info_id = self.alloc();
        self.pdf
            .document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr("homefax"));
        self
    }

    /// Append a section, paginated on its own. Returns the pages it used.
    pub fn section(&mut self, title: &str, lines: &[String]) -> usize {
        let pages = paginate(lines, &self.layout);
        let count = pages.len();
        for page_lines in pages {
            self.page(title, &page_lines);
        }
        count
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> RenderedPdf {
        self.pdf.catalog(self.catalog_id).pages(self.page_tree_id);
        let pages = self.page_ids.len();
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.page_ids.iter().copied())
            .count(pages as i32);
        RenderedPdf {
            bytes: self.pdf.finish(),
            pages,
        }
    }

    fn page(&mut self, title: &str, lines: &[String]) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        let layout = self.layout;

        let mut content = Content::new();
        centered_text(
            &mut content,
            &layout,
            TITLE_FONT,
            layout.title_size,
            layout.title_baseline(),
            title,
        );
        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            content.begin_text();
            content.set_font(BODY_FONT, layout.body_size);
            content.next_line(layout.left(), layout.line_baseline(index));
            content.show(Str(&encode_win_ansi(line)));
            content.end_text();
        }
        centered_text(
            &mut content,
            &layout,
            BODY_FONT,
            layout.footer_size,
            layout.footer_baseline(),
            FOOTER_TEXT,
        );
        self.pdf.stream(content_id, &content.finish());

        let mut page = self.pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, layout.page_width, layout.page_height));
        page.parent(self.page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            resources
                .fonts()
                .pair(BODY_FONT, self.body_font_id)
                .pair(TITLE_FONT, self.title_font_id);
        }
        page.finish();

        self.page_ids.push(page_id);
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }
}

fn centered_text(
    content: &mut Content,
    layout: &Layout,
    font: Name<'_>,
    size: f32,
    baseline: f32,
    text: &str,
) {
    let encoded = encode_win_ansi(text);
    let width = encoded.len() as f32 * size * COURIER_ADVANCE;
    let x = ((layout.page_width - width) / 2.0).max(0.0);
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, baseline);
    content.show(Str(&encoded));
    content.end_text();
}

/// Encode text for the standard fonts' WinAnsi code page. Characters outside
/// the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '•' => 0x95,
            '§' => 0xA7,
            '–' => 0x96,
            '—' => 0x97,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_maps_typographic_characters() {
        assert_eq!(encode_win_ansi("• § –"), vec![0x95, b' ', 0xA7, b' ', 0x96]);
        assert_eq!(encode_win_ansi("Ok"), b"Ok".to_vec());
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("✓"), b"?".to_vec());
    }

    #[test]
    fn builder_counts_pages_across_sections() {
        let mut builder = PdfDocumentBuilder::new(Layout::default());
        let long: Vec<String> = (0..60).map(|i| format!("row {i}")).collect();
        assert_eq!(builder.section("First", &long), 2);
        assert_eq!(builder.section("Second", &["one".to_string()]), 1);
        let rendered = builder.finish();
        assert_eq!(rendered.pages, 3);
        assert!(rendered.bytes.starts_with(b"%PDF-"));
    }
}
