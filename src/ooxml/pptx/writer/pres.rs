/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::{OpcPackage, PackageWriter};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::package::build_package;
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions, and serialize the result
/// as a .pptx package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title written to the core properties
    title: Option<String>,
    /// Major (headings) and minor (body) theme fonts
    theme_fonts: (String, String),
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: None,
            theme_fonts: ("Calibri Light".to_string(), "Calibri".to_string()),
        }
    }

    /// Append a new blank slide and return it.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Major and minor fonts of the package theme.
    pub fn theme_fonts(&self) -> (&str, &str) {
        (&self.theme_fonts.0, &self.theme_fonts.1)
    }

    pub fn set_theme_fonts(&mut self, major: impl Into<String>, minor: impl Into<String>) {
        self.theme_fonts = (major.into(), minor.into());
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `slide_r_ids` - Relationship IDs of the slides, in slide order
    /// * `master_r_id` - Relationship ID of the slide master
    pub fn generate_presentation_xml(
        &self,
        slide_r_ids: &[String],
        master_r_id: &str,
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_r_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    r_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Build the OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        build_package(self)
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the presentation to a file.
    ///
    /// The package is written to a temporary file in the target directory and
    /// renamed into place, so an existing file is never left half-written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.flush()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
