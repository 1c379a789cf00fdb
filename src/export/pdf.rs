use std::fs::File;
use std::io::Write;
use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::errors::AppResult;
use crate::export::document::ScheduleDocument;
use crate::export::notify_export_success;
use crate::ui::messages::info;

/// Paginated PDF rendering of a schedule document: header block, one
/// table per day section, optional vendor table, footer on every page.
struct SheetPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    body_size: f32,
    header_size: f32,
    heading_size: f32,
    title_size: f32,

    footer: String,
    page_no: usize,
}

impl SheetPdf {
    fn new(footer: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let next_id = 5;

        // Base-14 fonts; WinAnsi keeps umlauts in names and headings
        // intact.
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,
            bold_id,

            body_size: 10.0,
            header_size: 11.0,
            heading_size: 13.0,
            title_size: 18.0,

            footer: footer.to_string(),
            page_no: 0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and draw its footer; returns the content stream
    /// to draw into.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);
        self.page_no += 1;

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_id);
        drop(page);

        self.current_content_id = Some(content_id);

        let mut content = Content::new();
        self.draw_footer(&mut content);
        content
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { b"F2".as_slice() } else { b"F1".as_slice() };

        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    fn draw_footer(&self, content: &mut Content) {
        let y = self.margin - 25.0;
        self.draw_text(content, self.margin, y, 8.0, false, &self.footer);

        let pg = format!("Seite {}", self.page_no);
        self.draw_text(content, self.page_w - self.margin - 40.0, y, 8.0, false, &pg);
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        size: f32,
        bold: bool,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, size, bold, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths sized from header + content, scaled down to the
    /// printable width when they overflow.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len() as f32 * 6.2 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn content_top(&self) -> f32 {
        self.page_h - self.margin
    }

    fn content_bottom(&self) -> f32 {
        self.margin
    }

    /// Start a fresh page when fewer than `needed` points remain.
    fn ensure_space(&mut self, content: &mut Content, y: &mut f32, needed: f32) {
        if *y - needed < self.content_bottom() {
            let done = std::mem::replace(content, Content::new());
            self.finalize_page(done);
            *content = self.new_page();
            *y = self.content_top();
        }
    }

    fn draw_table(
        &mut self,
        content: &mut Content,
        y: &mut f32,
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let total_w: f32 = col_widths.iter().sum();

        let mut header_pending = true;

        for (i, row) in rows.iter().enumerate() {
            let needed = if header_pending {
                2.0 * self.row_h
            } else {
                self.row_h
            };
            let page_before = self.page_no;
            self.ensure_space(content, y, needed);
            if self.page_no != page_before {
                // Repeat the table header after a page break.
                header_pending = true;
            }

            if header_pending {
                *y -= self.row_h;
                content.save_state();
                content.set_fill_rgb(0.91, 0.87, 0.88);
                content.rect(self.margin, *y, total_w, self.row_h);
                content.fill_nonzero();
                content.restore_state();
                self.draw_row(content, *y, &col_widths, &header_row, self.header_size, true);
                header_pending = false;
            }

            *y -= self.row_h;

            if i % 2 == 0 {
                content.save_state();
                content.set_fill_rgb(0.96, 0.96, 0.96);
                content.rect(self.margin, *y, total_w, self.row_h);
                content.fill_nonzero();
                content.restore_state();
            }

            self.draw_row(content, *y, &col_widths, row, self.body_size, false);
        }
    }

    fn write_document(&mut self, doc: &ScheduleDocument, detail: bool) {
        let mut content = self.new_page();
        let mut y = self.content_top();

        // Header block
        y -= self.title_size;
        self.draw_text(&mut content, self.margin, y, self.title_size, true, &doc.header.title);
        y -= self.header_size + 6.0;
        self.draw_text(&mut content, self.margin, y, self.header_size, false, &doc.header.couple);
        if let Some(date) = &doc.header.date {
            y -= self.header_size + 4.0;
            self.draw_text(&mut content, self.margin, y, self.header_size, false, date);
        }
        if let Some(location) = &doc.header.location {
            y -= self.header_size + 4.0;
            self.draw_text(&mut content, self.margin, y, self.header_size, false, location);
        }

        let mut headers = vec!["Zeit", "Dauer", "Konflikt", "Programmpunkt", "Ort"];
        if detail {
            headers.push("Verantwortlich");
            headers.push("Notizen");
        }

        for section in &doc.sections {
            self.ensure_space(&mut content, &mut y, 3.0 * self.row_h + self.heading_size);

            y -= self.heading_size + 14.0;
            self.draw_text(&mut content, self.margin, y, self.heading_size, true, &section.heading);
            y -= 6.0;

            if section.rows.is_empty() {
                y -= self.row_h;
                self.draw_text(
                    &mut content,
                    self.margin,
                    y,
                    self.body_size,
                    false,
                    "(keine Programmpunkte)",
                );
                continue;
            }

            let rows: Vec<Vec<String>> = section
                .rows
                .iter()
                .map(|r| {
                    let mut cells = vec![
                        r.time.clone(),
                        r.duration.clone().unwrap_or_default(),
                        if r.conflict { "!".to_string() } else { String::new() },
                        r.title.clone(),
                        r.location.clone().unwrap_or_default(),
                    ];
                    if detail {
                        cells.push(r.owner.clone().unwrap_or_default());
                        cells.push(r.notes.clone().unwrap_or_default());
                    }
                    cells
                })
                .collect();

            self.draw_table(&mut content, &mut y, &headers, &rows);
        }

        if let Some(vendors) = &doc.vendors {
            self.ensure_space(&mut content, &mut y, 3.0 * self.row_h + self.heading_size);

            y -= self.heading_size + 14.0;
            self.draw_text(
                &mut content,
                self.margin,
                y,
                self.heading_size,
                true,
                "Dienstleister-Kontakte",
            );
            y -= 6.0;

            let rows: Vec<Vec<String>> = vendors
                .iter()
                .map(|v| {
                    vec![
                        v.name.clone(),
                        v.category.clone(),
                        v.contact_name.clone().unwrap_or_default(),
                        v.email.clone().unwrap_or_default(),
                        v.phone.clone().unwrap_or_default(),
                    ]
                })
                .collect();

            self.draw_table(
                &mut content,
                &mut y,
                &["Name", "Kategorie", "Kontakt", "E-Mail", "Telefon"],
                &rows,
            );
        }

        self.finalize_page(content);
    }

    fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// WinAnsi is Latin-1 compatible for the characters a run sheet uses;
/// anything outside that range degrades to '?'.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

pub(crate) fn export_pdf(doc: &ScheduleDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let detail = doc
        .sections
        .iter()
        .any(|s| s.rows.iter().any(|r| r.owner.is_some() || r.notes.is_some()));

    let mut sheet = SheetPdf::new(&doc.footer);
    sheet.write_document(doc, detail);
    sheet.save(path)?;

    notify_export_success("PDF", path);
    Ok(())
}
