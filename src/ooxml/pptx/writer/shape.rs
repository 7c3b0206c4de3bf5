/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{Alignment, Frame, Outline, TextFormat};
use super::text::Paragraph;

/// A shape on a slide (text box or rectangle).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        frame: Frame,
        paragraphs: Vec<Paragraph>,
        word_wrap: bool,
    },
    Rectangle {
        frame: Frame,
        fill: Option<RGBColor>,
        outline: Option<Outline>,
    },
}

impl MutableShape {
    /// Create a new, empty text box shape.
    pub(crate) fn new_text_box(shape_id: u32, frame: Frame) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                frame,
                paragraphs: Vec::new(),
                word_wrap: true,
            },
        }
    }

    /// Create a new rectangle shape.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        frame: Frame,
        fill: Option<RGBColor>,
        outline: Option<Outline>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                frame,
                fill,
                outline,
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn frame(&self) -> Frame {
        match &self.shape_type {
            ShapeType::TextBox { frame, .. } | ShapeType::Rectangle { frame, .. } => *frame,
        }
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self.shape_type, ShapeType::TextBox { .. })
    }

    /// Paragraphs of a text box; empty for other shapes.
    pub fn paragraphs(&self) -> &[Paragraph] {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => paragraphs,
            _ => &[],
        }
    }

    /// Text of all paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn word_wrap(&self) -> Option<bool> {
        match &self.shape_type {
            ShapeType::TextBox { word_wrap, .. } => Some(*word_wrap),
            _ => None,
        }
    }

    /// Fill color of a rectangle.
    pub fn fill(&self) -> Option<RGBColor> {
        match &self.shape_type {
            ShapeType::Rectangle { fill, .. } => *fill,
            _ => None,
        }
    }

    /// Outline of a rectangle.
    pub fn outline(&self) -> Option<Outline> {
        match &self.shape_type {
            ShapeType::Rectangle { outline, .. } => *outline,
            _ => None,
        }
    }

    /// Append a paragraph (only for text boxes).
    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        if let ShapeType::TextBox {
            ref mut paragraphs,
            ..
        } = self.shape_type
        {
            paragraphs.push(paragraph);
        }
        self
    }

    /// Builder method: set word wrapping (only for text boxes).
    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let ShapeType::TextBox {
            ref mut word_wrap, ..
        } = self.shape_type
        {
            *word_wrap = wrap;
        }
        self
    }

    fn write_xfrm(xml: &mut String, frame: &Frame) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        Ok(())
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                frame,
                paragraphs,
                word_wrap,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                Self::write_xfrm(xml, frame)?;
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                let wrap = if *word_wrap { "square" } else { "none" };
                write!(
                    xml,
                    r#"<a:bodyPr wrap="{}" rtlCol="0"><a:noAutofit/></a:bodyPr>"#,
                    wrap
                )?;
                xml.push_str("<a:lstStyle/>");

                if paragraphs.is_empty() {
                    xml.push_str("<a:p/>");
                }
                for paragraph in paragraphs {
                    paragraph.to_xml(xml)?;
                }

                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle {
                frame,
                fill,
                outline,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                Self::write_xfrm(xml, frame)?;

                match fill {
                    Some(color) => write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?,
                    None => xml.push_str("<a:noFill/>"),
                }

                match outline {
                    Some(line) => write!(
                        xml,
                        r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        line.width,
                        line.color.to_hex()
                    )?,
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }

                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDER: RGBColor = RGBColor::new(0x2E, 0x2F, 0x37);

    #[test]
    fn test_text_box_paragraphs() {
        let heading = TextFormat::new("Georgia", 36.0, BORDER).with_bold(true);
        let mut shape = MutableShape::new_text_box(2, Frame::new(0, 0, 100, 100));
        shape
            .push_paragraph(Paragraph::with_run("one", heading.clone()).align(Alignment::Center))
            .push_paragraph(Paragraph::with_run("two", heading));

        assert!(shape.is_text_box());
        assert_eq!(shape.text(), "one\ntwo");
        assert_eq!(shape.paragraphs()[0].alignment(), Alignment::Center);
        assert_eq!(shape.paragraphs()[1].alignment(), Alignment::Left);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr""#));
        assert!(xml.contains(r#"sz="3600" b="1""#));
    }

    #[test]
    fn test_rectangle_xml() {
        let shape = MutableShape::new_rectangle(
            3,
            Frame::new(685_800, 1_000, 10_817_352, 10_972),
            Some(BORDER),
            None,
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="3" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<a:ext cx="10817352" cy="10972"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="2E2F37"/>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(shape.paragraphs().is_empty());
    }

    #[test]
    fn test_outlined_rectangle_xml() {
        let shape = MutableShape::new_rectangle(
            2,
            Frame::new(0, 0, 10, 10),
            None,
            Some(Outline {
                color: BORDER,
                width: 9_525,
            }),
        );
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:ln w="9525">"#));
        assert!(xml.contains("<a:noFill/><a:ln"));
    }

    #[test]
    fn test_text_box_without_wrap() {
        let mut shape = MutableShape::new_text_box(2, Frame::new(0, 0, 10, 10));
        shape.set_word_wrap(false);
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0">"#));
        assert!(xml.contains("<a:p/>"));
        assert_eq!(shape.word_wrap(), Some(false));
    }
}
