/// Paragraph and run types for PPTX text bodies.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

use super::super::format::{Alignment, TextFormat};

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub(crate) text: String,
    pub(crate) format: TextFormat,
}

impl Run {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        let format = &self.format;

        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0""#);

        if let Some(size) = format.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = format.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        xml.push('>');

        // Child order is fixed by CT_TextCharacterProperties: fill before fonts
        if let Some(color) = format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = format.font {
            let font = escape_xml(font);
            write!(
                xml,
                r#"<a:latin typeface="{font}"/><a:cs typeface="{font}"/>"#
            )?;
        }

        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
        xml.push_str("</a:r>");

        Ok(())
    }
}

/// A bullet marker drawn before the paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub glyph: char,
    pub color: Option<RGBColor>,
}

impl Bullet {
    pub fn new(glyph: char) -> Self {
        Self { glyph, color: None }
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// A paragraph inside a text body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) runs: SmallVec<[Run; 1]>,
    pub(crate) alignment: Alignment,
    /// Outline level, 0 for top level
    pub(crate) level: u8,
    /// Space before the paragraph in points
    pub(crate) space_before: Option<f64>,
    /// Left margin in EMU
    pub(crate) margin_left: Option<i64>,
    /// First-line indent in EMU (negative for hanging bullets)
    pub(crate) indent: Option<i64>,
    pub(crate) bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single run.
    pub fn with_run(text: impl Into<String>, format: TextFormat) -> Self {
        let mut p = Self::new();
        p.runs.push(Run::new(text, format));
        p
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before = Some(pt);
        self
    }

    /// Set the left margin and first-line indent (both EMU).
    pub fn indentation(mut self, margin_left: i64, indent: i64) -> Self {
        self.margin_left = Some(margin_left);
        self.indent = Some(indent);
        self
    }

    pub fn bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = Some(bullet);
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn outline_level(&self) -> u8 {
        self.level
    }

    pub fn spacing_before(&self) -> Option<f64> {
        self.space_before
    }

    pub fn bullet_marker(&self) -> Option<&Bullet> {
        self.bullet.as_ref()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        write!(xml, r#"<a:pPr algn="{}""#, self.alignment.as_str())?;
        if let Some(margin) = self.margin_left {
            write!(xml, r#" marL="{}""#, margin)?;
        }
        if let Some(indent) = self.indent {
            write!(xml, r#" indent="{}""#, indent)?;
        }
        if self.level > 0 {
            write!(xml, r#" lvl="{}""#, self.level)?;
        }
        xml.push('>');

        if let Some(space) = self.space_before {
            write!(
                xml,
                r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                pt_to_centipoints(space)
            )?;
        }

        match self.bullet {
            Some(bullet) => {
                if let Some(color) = bullet.color {
                    write!(
                        xml,
                        r#"<a:buClr><a:srgbClr val="{}"/></a:buClr>"#,
                        color.to_hex()
                    )?;
                }
                xml.push_str(r#"<a:buFont typeface="Arial"/>"#);
                write!(
                    xml,
                    r#"<a:buChar char="{}"/>"#,
                    escape_xml(bullet.glyph.encode_utf8(&mut [0; 4]))
                )?;
            },
            None => xml.push_str("<a:buNone/>"),
        }

        xml.push_str("</a:pPr>");

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> TextFormat {
        TextFormat::new("Helvetica Neue", 16.0, RGBColor::new(0xED, 0xEE, 0xF0))
    }

    #[test]
    fn test_run_xml() {
        let mut xml = String::new();
        Run::new("a < b", body().with_bold(true))
            .to_xml(&mut xml)
            .unwrap();

        assert!(xml.contains(r#"sz="1600""#));
        assert!(xml.contains(r#"b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="EDEEF0"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Helvetica Neue"/>"#));
        assert!(xml.contains("<a:t>a &lt; b</a:t>"));
        assert!(xml.find("<a:solidFill>").unwrap() < xml.find("<a:latin").unwrap());
    }

    #[test]
    fn test_bullet_paragraph_xml() {
        let p = Paragraph::with_run("nested", body())
            .level(1)
            .space_before(3.0)
            .indentation(571_500, -285_750)
            .bullet(Bullet::new('→').with_color(RGBColor::new(0x8B, 0x8D, 0x98)));

        let mut xml = String::new();
        p.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"lvl="1""#));
        assert!(xml.contains(r#"marL="571500" indent="-285750""#));
        assert!(xml.contains(r#"<a:spcPts val="300"/>"#));
        assert!(xml.contains(r#"<a:buChar char="→"/>"#));
        assert!(xml.contains(r#"<a:buClr><a:srgbClr val="8B8D98"/></a:buClr>"#));
        assert_eq!(p.text(), "nested");
    }

    #[test]
    fn test_plain_paragraph_has_no_bullet() {
        let p = Paragraph::with_run("plain", body()).align(Alignment::Right);
        let mut xml = String::new();
        p.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<a:pPr algn="r">"#));
        assert!(xml.contains("<a:buNone/>"));
        assert!(!xml.contains("lvl="));
    }
}
