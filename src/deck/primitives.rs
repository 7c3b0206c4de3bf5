//! Drawing primitives.
//!
//! Each primitive places a fixed arrangement of shapes on one slide, styled
//! from the theme. Slide compositions are built only from these calls.

use crate::common::RGBColor;
use crate::common::unit::{inches, pt_to_emu_f64};
use crate::ooxml::pptx::{
    Alignment, Bullet, Frame, MutableShape, MutableSlide, Outline, Paragraph, TextFormat,
};

use super::bullets::{BulletItem, BulletLevel};
use super::layout::{self, Layout};
use super::theme::Theme;

/// A slide being drawn, together with the theme and page geometry.
pub struct Canvas<'a> {
    slide: &'a mut MutableSlide,
    theme: &'a Theme,
    layout: Layout,
}

impl<'a> Canvas<'a> {
    pub fn new(slide: &'a mut MutableSlide, theme: &'a Theme, layout: Layout) -> Self {
        Self {
            slide,
            theme,
            layout,
        }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Fill the slide background with a solid color.
    pub fn set_background(&mut self, color: RGBColor) {
        self.slide.set_background(color);
    }

    /// Place a word-wrapped text box holding one paragraph with one run.
    pub fn place_text(
        &mut self,
        text: &str,
        frame: Frame,
        format: TextFormat,
        alignment: Alignment,
    ) -> &mut MutableShape {
        self.slide
            .add_text_box(frame, Paragraph::with_run(text, format).align(alignment))
    }

    /// Place a bullet list, one paragraph per item.
    ///
    /// Items starting with two spaces become sub-bullets: one level deeper,
    /// an arrow glyph, two points smaller and in the secondary color.
    pub fn place_bullet_list(&mut self, items: &[String], frame: Frame, size: f64) -> &mut MutableShape {
        let palette = self.theme.palette;
        let font = self.theme.fonts.body.as_str();

        let shape = self.slide.add_text_frame(frame);
        for item in items {
            let item = BulletItem::parse(item);
            let color = match item.level {
                BulletLevel::Top => palette.body,
                BulletLevel::Sub => palette.secondary,
            };
            let (margin_left, indent) = item.level.indentation();
            let format = TextFormat::new(font, item.level.font_size(size), color);

            shape.push_paragraph(
                Paragraph::with_run(item.text, format)
                    .level(item.level.outline_level())
                    .space_before(item.level.space_before())
                    .indentation(margin_left, indent)
                    .bullet(Bullet::new(item.level.glyph()).with_color(color)),
            );
        }
        shape
    }

    /// Place a thin border-colored rule across the content width.
    pub fn place_divider(&mut self, top: i64) -> &mut MutableShape {
        let frame = Frame::new(
            self.layout.pad(),
            top,
            self.layout.content_width(),
            inches(layout::DIVIDER_HEIGHT),
        );
        self.slide
            .add_rectangle(frame, Some(self.theme.palette.border), None)
    }

    /// Place a code block: an outlined panel behind a non-wrapping
    /// monospace text box with one paragraph per line.
    ///
    /// Lines end at `\n`; a `\r` before it is dropped so CRLF sources
    /// render the same as LF ones.
    pub fn place_code_block(&mut self, code: &str, frame: Frame, size: f64) -> &mut MutableShape {
        let palette = self.theme.palette;
        self.slide.add_rectangle(
            frame,
            Some(palette.code_background),
            Some(Outline {
                color: palette.border,
                width: pt_to_emu_f64(0.75),
            }),
        );

        let inner = frame.inset(
            inches(layout::CODE_INSET_X),
            inches(layout::CODE_INSET_Y),
        );
        let shape = self.slide.add_text_frame(inner);
        shape.set_word_wrap(false);
        for line in code.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let format = TextFormat::new(&self.theme.fonts.code, size, palette.body);
            shape.push_paragraph(Paragraph::with_run(line, format));
        }
        shape
    }

    /// Place the brand mark at bottom-left and "`page / total`" at bottom-right.
    pub fn place_footer(&mut self, page: usize, total: usize) {
        let top = self.layout.footer_top();
        let height = inches(layout::FOOTER_HEIGHT);
        let secondary = self.theme.palette.secondary;

        let brand = TextFormat::new(&self.theme.fonts.display, 9.0, secondary).with_bold(true);
        let brand_text = self.theme.brand.clone();
        self.place_text(
            &brand_text,
            Frame::new(
                inches(layout::BRAND_LEFT),
                top,
                inches(layout::BRAND_WIDTH),
                height,
            ),
            brand,
            Alignment::Left,
        );

        let number = TextFormat::new(&self.theme.fonts.body, 9.0, secondary);
        self.place_text(
            &format!("{} / {}", page, total),
            Frame::new(
                self.layout.width - inches(layout::PAGE_NUMBER_INSET),
                top,
                inches(layout::PAGE_NUMBER_WIDTH),
                height,
            ),
            number,
            Alignment::Right,
        );
    }

    /// Place the small section label above the heading.
    pub fn place_section_label(&mut self, label: &str) -> &mut MutableShape {
        let frame = Frame::new(
            self.layout.pad(),
            inches(layout::LABEL_TOP),
            inches(layout::LABEL_WIDTH),
            inches(layout::LABEL_HEIGHT),
        );
        let format = TextFormat::new(&self.theme.fonts.body, 8.5, self.theme.palette.secondary);
        self.place_text(label, frame, format, Alignment::Left)
    }

    /// Place the slide heading and the rule beneath it.
    pub fn place_heading(&mut self, heading: &str) {
        let frame = self
            .layout
            .content_frame(layout::HEADING_TOP, layout::HEADING_HEIGHT);
        let format = TextFormat::new(&self.theme.fonts.display, 36.0, self.theme.palette.accent)
            .with_bold(true);
        self.place_text(heading, frame, format, Alignment::Left);
        self.place_divider(inches(layout::HEADING_TOP + layout::HEADING_RULE_OFFSET));
    }

    /// Place the full-width bar along the top edge.
    pub fn place_accent_bar(&mut self) -> &mut MutableShape {
        let frame = Frame::new(
            0,
            0,
            self.layout.width,
            inches(layout::ACCENT_BAR_HEIGHT),
        );
        self.slide
            .add_rectangle(frame, Some(self.theme.palette.border), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::PageSize;

    fn with_canvas(f: impl FnOnce(&mut Canvas<'_>)) -> MutableSlide {
        let theme = Theme::default();
        let mut slide = MutableSlide::new(256);
        let mut canvas = Canvas::new(&mut slide, &theme, Layout::new(PageSize::default()));
        f(&mut canvas);
        slide
    }

    #[test]
    fn test_bullet_levels() {
        let items = vec!["first".to_string(), "  nested".to_string(), "second".to_string()];
        let slide = with_canvas(|c| {
            c.place_bullet_list(&items, Frame::new(0, 0, 100, 100), 16.0);
        });
        let theme = Theme::default();

        let paragraphs = slide.shapes()[0].paragraphs();
        assert_eq!(paragraphs.len(), 3);

        let nested = &paragraphs[1];
        assert_eq!(nested.text(), "nested");
        assert_eq!(nested.outline_level(), 1);
        assert_eq!(nested.spacing_before(), Some(3.0));
        assert_eq!(nested.bullet_marker().map(|b| b.glyph), Some('→'));
        assert_eq!(nested.runs()[0].format().size, Some(14.0));
        assert_eq!(nested.runs()[0].format().color, Some(theme.palette.secondary));

        let top = &paragraphs[2];
        assert_eq!(top.outline_level(), 0);
        assert_eq!(top.bullet_marker().map(|b| b.glyph), Some('•'));
        assert_eq!(top.runs()[0].format().color, Some(theme.palette.body));
    }

    #[test]
    fn test_code_block_lines() {
        let slide = with_canvas(|c| {
            c.place_code_block("a\n\n  b", Frame::new(0, 0, 1_000_000, 1_000_000), 10.5);
        });

        let panel = &slide.shapes()[0];
        assert_eq!(panel.fill(), Some(Theme::default().palette.code_background));
        assert_eq!(panel.outline().map(|o| o.width), Some(9_525));

        let text = &slide.shapes()[1];
        assert_eq!(text.word_wrap(), Some(false));
        let lines: Vec<String> = text.paragraphs().iter().map(|p| p.text()).collect();
        assert_eq!(lines, ["a", "", "  b"]);
        assert_eq!(text.frame().x, inches(0.22));
        assert_eq!(text.frame().y, inches(0.18));
    }

    #[test]
    fn test_code_block_crlf_lines() {
        let slide = with_canvas(|c| {
            c.place_code_block("a\r\n\r\nb\r\n", Frame::new(0, 0, 1_000_000, 1_000_000), 9.0);
        });
        let lines: Vec<String> = slide.shapes()[1].paragraphs().iter().map(|p| p.text()).collect();
        assert_eq!(lines, ["a", "", "b", ""]);
    }

    #[test]
    fn test_footer() {
        let slide = with_canvas(|c| c.place_footer(3, 9));
        let texts: Vec<String> = slide.text_boxes().map(|s| s.text()).collect();
        assert_eq!(texts, ["Resend", "3 / 9"]);

        let number = &slide.shapes()[1];
        assert_eq!(number.paragraphs()[0].alignment(), Alignment::Right);
        assert_eq!(number.frame().x, 12_188_952 - inches(1.6));

        let brand = slide.shapes()[0].paragraphs()[0].runs()[0].format();
        assert_eq!(brand.bold, Some(true));
        assert_eq!(brand.font.as_deref(), Some("Georgia"));
    }

    #[test]
    fn test_heading_places_divider() {
        let slide = with_canvas(|c| c.place_heading("Webhooks"));
        assert_eq!(slide.shape_count(), 2);
        let divider = &slide.shapes()[1];
        assert_eq!(divider.frame().y, inches(0.72 + 0.88));
        assert_eq!(divider.frame().width, 10_817_352);
        assert_eq!(divider.outline(), None);
    }

    #[test]
    fn test_accent_bar_spans_page() {
        let slide = with_canvas(|c| {
            c.place_accent_bar();
        });
        assert_eq!(slide.shapes()[0].frame(), Frame::new(0, 0, 12_188_952, inches(0.045)));
    }
}
