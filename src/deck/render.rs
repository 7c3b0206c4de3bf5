//! Deck rendering.
//!
//! A deck is drawn slide by slide through the [`Canvas`] primitives into a
//! [`MutablePresentation`], which is then serialized to .pptx bytes. Output
//! depends only on the deck and the theme: rendering the same input twice
//! yields identical bytes.

use crate::common::Result;
use crate::common::unit::inches;
use crate::ooxml::pptx::{Alignment, Frame, MutablePresentation, TextFormat};

use super::layout::{self, Layout};
use super::primitives::Canvas;
use super::spec::{CodePanel, Deck, SlideSpec};
use super::theme::Theme;

/// Build the presentation model for a deck.
///
/// The theme and deck are validated first; the first malformed slide aborts
/// the build.
pub fn build(deck: &Deck, theme: &Theme) -> Result<MutablePresentation> {
    theme.validate()?;
    deck.validate()?;

    let page = deck.page();
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(page.width);
    pres.set_slide_height(page.height);
    pres.set_theme_fonts(theme.fonts.display.as_str(), theme.fonts.body.as_str());
    if let Some(title) = deck.title() {
        pres.set_title(title);
    }

    let renderer = Renderer {
        theme,
        layout: Layout::new(page),
        total: deck.len(),
    };

    log::info!("Rendering {} slides", deck.len());
    for (index, spec) in deck.slides().iter().enumerate() {
        let number = index + 1;
        log::debug!("Slide {}/{}: {}", number, deck.len(), spec.kind());

        let mut canvas = Canvas::new(pres.add_slide(), theme, renderer.layout);
        renderer.draw(&mut canvas, spec, number);
    }

    Ok(pres)
}

/// Render a deck to .pptx bytes.
pub fn render(deck: &Deck, theme: &Theme) -> Result<Vec<u8>> {
    let pres = build(deck, theme)?;
    Ok(pres.to_bytes()?)
}

struct Renderer<'a> {
    theme: &'a Theme,
    layout: Layout,
    total: usize,
}

impl Renderer<'_> {
    fn draw(&self, canvas: &mut Canvas<'_>, spec: &SlideSpec, number: usize) {
        canvas.set_background(self.theme.palette.background);

        match spec {
            SlideSpec::Title {
                title,
                subtitle,
                byline,
            } => self.draw_title(canvas, title, subtitle, byline),
            SlideSpec::Bullets {
                label,
                heading,
                items,
            } => {
                self.draw_header(canvas, label, heading);
                canvas.place_bullet_list(
                    items,
                    self.layout.content_frame(layout::BODY_TOP, layout::BODY_HEIGHT),
                    16.0,
                );
            },
            SlideSpec::Code {
                label,
                heading,
                code,
                caption,
            } => {
                self.draw_header(canvas, label, heading);
                canvas.place_code_block(
                    code,
                    self.layout.content_frame(layout::CODE_TOP, layout::CODE_HEIGHT),
                    10.5,
                );
                if let Some(caption) = caption {
                    canvas.place_text(
                        caption,
                        self.layout
                            .content_frame(layout::CAPTION_TOP, layout::CAPTION_HEIGHT),
                        self.secondary(11.0),
                        Alignment::Left,
                    );
                }
            },
            SlideSpec::TwoColumnCode {
                label,
                heading,
                left,
                right,
            } => {
                self.draw_header(canvas, label, heading);
                self.draw_column(canvas, left, self.layout.pad(), layout::LEFT_COLUMN_HEIGHT, 9.0);
                self.draw_column(
                    canvas,
                    right,
                    self.layout.right_column_left(),
                    layout::RIGHT_COLUMN_HEIGHT,
                    10.0,
                );
            },
            SlideSpec::Closing {
                label,
                heading,
                items,
                follow_up_heading,
                follow_up,
            } => {
                self.draw_header(canvas, label, heading);
                canvas.place_bullet_list(
                    items,
                    self.layout
                        .content_frame(layout::BODY_TOP, layout::CLOSING_LIST_HEIGHT),
                    16.0,
                );
                canvas.place_text(
                    follow_up_heading,
                    self.layout.content_frame(
                        layout::FOLLOW_UP_HEADING_TOP,
                        layout::FOLLOW_UP_HEADING_HEIGHT,
                    ),
                    TextFormat::new(&self.theme.fonts.body, 12.0, self.theme.palette.accent)
                        .with_bold(true),
                    Alignment::Left,
                );
                canvas.place_bullet_list(
                    follow_up,
                    self.layout
                        .content_frame(layout::FOLLOW_UP_TOP, layout::FOLLOW_UP_HEIGHT),
                    14.0,
                );
            },
        }

        canvas.place_footer(number, self.total);
    }

    fn draw_title(&self, canvas: &mut Canvas<'_>, title: &str, subtitle: &str, byline: &str) {
        let layout = self.layout;
        let fonts = &self.theme.fonts;
        let palette = self.theme.palette;
        let row = |fraction: f64, height: f64| {
            Frame::new(
                layout.pad(),
                layout.row(fraction),
                layout.content_width(),
                inches(height),
            )
        };

        canvas.place_accent_bar();
        canvas.place_text(
            title,
            row(layout::TITLE_ROW, layout::TITLE_HEIGHT),
            TextFormat::new(&fonts.display, 54.0, palette.accent).with_bold(true),
            Alignment::Center,
        );
        canvas.place_text(
            subtitle,
            row(layout::SUBTITLE_ROW, layout::SUBTITLE_HEIGHT),
            self.secondary(20.0),
            Alignment::Center,
        );
        canvas.place_divider(layout.row(layout::TITLE_RULE_ROW));
        canvas.place_text(
            byline,
            row(layout::BYLINE_ROW, layout::BYLINE_HEIGHT),
            self.secondary(13.0),
            Alignment::Center,
        );
    }

    fn draw_header(&self, canvas: &mut Canvas<'_>, label: &str, heading: &str) {
        canvas.place_section_label(label);
        canvas.place_heading(heading);
    }

    fn draw_column(
        &self,
        canvas: &mut Canvas<'_>,
        panel: &CodePanel,
        left: i64,
        default_height: f64,
        size: f64,
    ) {
        let width = self.layout.column_width();
        canvas.place_text(
            &panel.caption,
            Frame::new(
                left,
                inches(layout::COLUMN_CAPTION_TOP),
                width,
                inches(layout::COLUMN_CAPTION_HEIGHT),
            ),
            self.secondary(10.0),
            Alignment::Left,
        );
        canvas.place_code_block(
            &panel.code,
            Frame::new(
                left,
                inches(layout::COLUMN_CODE_TOP),
                width,
                inches(panel.height.unwrap_or(default_height)),
            ),
            size,
        );
    }

    /// Body font in the secondary color.
    fn secondary(&self, size: f64) -> TextFormat {
        TextFormat::new(&self.theme.fonts.body, size, self.theme.palette.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn bullets(items: &[&str]) -> SlideSpec {
        SlideSpec::Bullets {
            label: "01  OVERVIEW".to_string(),
            heading: "What I Built".to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_title_composition() {
        let deck = Deck::new(vec![SlideSpec::Title {
            title: "Demo".to_string(),
            subtitle: "Sub".to_string(),
            byline: "By".to_string(),
        }]);
        let pres = build(&deck, &Theme::default()).unwrap();
        let slide = &pres.slides()[0];

        // bar, title, subtitle, divider, byline, brand, page number
        assert_eq!(slide.shape_count(), 7);
        assert_eq!(slide.background(), Some(Theme::default().palette.background));

        let title = &slide.shapes()[1];
        assert_eq!(title.text(), "Demo");
        assert_eq!(title.frame().y, 1_508_760);
        assert_eq!(title.paragraphs()[0].alignment(), Alignment::Center);
        assert_eq!(title.paragraphs()[0].runs()[0].format().size, Some(54.0));
        assert_eq!(pres.title(), Some("Demo"));
    }

    #[test]
    fn test_bullets_composition() {
        let deck = Deck::new(vec![bullets(&["a", "  b"])]);
        let pres = build(&deck, &Theme::default()).unwrap();
        let texts: Vec<String> = pres.slides()[0].text_boxes().map(|s| s.text()).collect();

        assert_eq!(texts, ["01  OVERVIEW", "What I Built", "a\nb", "Resend", "1 / 1"]);
    }

    #[test]
    fn test_code_caption_is_optional() {
        let code = |caption: Option<&str>| SlideSpec::Code {
            label: "03  ARCHITECTURE".to_string(),
            heading: "Architecture".to_string(),
            code: "POST /invoice\n  -> validate".to_string(),
            caption: caption.map(str::to_string),
        };
        let deck = Deck::new(vec![code(None), code(Some("Three source files"))]);
        let pres = build(&deck, &Theme::default()).unwrap();

        // label, heading, divider, panel, code text, brand, page number
        assert_eq!(pres.slides()[0].shape_count(), 7);
        assert_eq!(pres.slides()[1].shape_count(), 8);
    }

    #[test]
    fn test_two_column_positions() {
        let deck = Deck::new(vec![SlideSpec::TwoColumnCode {
            label: "07  DEMO".to_string(),
            heading: "Sample Request & Response".to_string(),
            left: CodePanel::new("Request", "curl"),
            right: CodePanel::new("Response", "{}"),
        }]);
        let pres = build(&deck, &Theme::default()).unwrap();
        let shapes = pres.slides()[0].shapes();

        let left_panel = &shapes[4];
        let right_panel = &shapes[7];
        assert_eq!(left_panel.frame().x, inches(0.75));
        assert_eq!(left_panel.frame().height, inches(4.1));
        assert_eq!(right_panel.frame().x, 6_437_376);
        assert_eq!(right_panel.frame().height, inches(2.6));
        assert_eq!(shapes[8].paragraphs()[0].runs()[0].format().size, Some(10.0));
    }

    #[test]
    fn test_invalid_slide_aborts() {
        let deck = Deck::new(vec![bullets(&["ok"]), bullets(&[])]);
        match build(&deck, &Theme::default()) {
            Err(Error::InvalidSlide { slide, .. }) => assert_eq!(slide, 2),
            other => panic!("expected invalid slide, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let deck = Deck::new(vec![bullets(&["a", "  b"])]);
        let theme = Theme::default();
        assert_eq!(render(&deck, &theme).unwrap(), render(&deck, &theme).unwrap());
    }
}
