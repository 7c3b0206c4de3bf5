/// Slide types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{Frame, MutableShape, Outline};
use super::text::Paragraph;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Solid background fill, if any
    pub(crate) background: Option<RGBColor>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set a solid background for the slide.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    /// Get the background color for the slide.
    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    // ID 1 is the shape tree group; user shapes start at 2
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Add an empty text box to the slide.
    pub fn add_text_frame(&mut self, frame: Frame) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), frame);
        self.push(shape)
    }

    /// Add a text box holding a single paragraph to the slide.
    ///
    /// Returns the created shape so more paragraphs can be chained.
    pub fn add_text_box(&mut self, frame: Frame, paragraph: Paragraph) -> &mut MutableShape {
        let shape = self.add_text_frame(frame);
        shape.push_paragraph(paragraph);
        shape
    }

    /// Add a rectangle to the slide.
    pub fn add_rectangle(
        &mut self,
        frame: Frame,
        fill: Option<RGBColor>,
        outline: Option<Outline>,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), frame, fill, outline);
        self.push(shape)
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Iterate over the text boxes on the slide.
    pub fn text_boxes(&self) -> impl Iterator<Item = &MutableShape> {
        self.shapes.iter().filter(|s| s.is_text_box())
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg>");
            xml.push_str("<p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
            xml.push_str("<a:effectLst/>");
            xml.push_str("</p:bgPr>");
            xml.push_str("</p:bg>");
        }

        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
