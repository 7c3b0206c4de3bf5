/// Assembly of a PowerPoint (.pptx) OPC package from a mutable presentation.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, Part, XmlPart};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;

/// Application name recorded in the document properties.
pub const APPLICATION: &str = "deckwright";

const PRESENTATION: &str = "/ppt/presentation.xml";
const SLIDE_MASTER: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS: &str = "/ppt/presProps.xml";
const VIEW_PROPS: &str = "/ppt/viewProps.xml";
const TABLE_STYLES: &str = "/ppt/tableStyles.xml";
const CORE_PROPS: &str = "/docProps/core.xml";
const APP_PROPS: &str = "/docProps/app.xml";

fn uri(s: &str) -> Result<PackURI> {
    Ok(PackURI::new(s).map_err(OpcError::InvalidPackUri)?)
}

/// Partname of the `n`th slide (1-based).
pub fn slide_partname(n: usize) -> String {
    format!("/ppt/slides/slide{}.xml", n)
}

/// Build the complete OPC package for a presentation.
///
/// Parts are added in a fixed order and relationship IDs are allocated in
/// that same order, so identical presentations serialize identically.
/// The presentation part relates to the master (`rId1`), then every slide,
/// then the property parts and the theme.
pub fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let mut package = OpcPackage::new();

    let presentation_uri = uri(PRESENTATION)?;
    let master_uri = uri(SLIDE_MASTER)?;
    let layout_uri = uri(SLIDE_LAYOUT)?;
    let theme_uri = uri(THEME)?;
    let pres_props_uri = uri(PRES_PROPS)?;
    let view_props_uri = uri(VIEW_PROPS)?;
    let table_styles_uri = uri(TABLE_STYLES)?;
    let core_uri = uri(CORE_PROPS)?;
    let app_uri = uri(APP_PROPS)?;

    package.relate_to(&presentation_uri, rt::OFFICE_DOCUMENT);
    package.relate_to(&core_uri, rt::CORE_PROPERTIES);
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    let mut presentation = XmlPart::new(
        presentation_uri,
        ct::PML_PRESENTATION_MAIN,
        Vec::new(),
    );
    let master_r_id = presentation.relate_to(&master_uri, rt::SLIDE_MASTER);

    let mut slide_parts = Vec::with_capacity(pres.slide_count());
    let mut slide_r_ids = Vec::with_capacity(pres.slide_count());
    for (index, slide) in pres.slides().iter().enumerate() {
        let slide_uri = uri(&slide_partname(index + 1))?;
        slide_r_ids.push(presentation.relate_to(&slide_uri, rt::SLIDE));

        let mut part = XmlPart::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
        part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        slide_parts.push(part);
    }

    presentation.relate_to(&pres_props_uri, rt::PRES_PROPS);
    presentation.relate_to(&view_props_uri, rt::VIEW_PROPS);
    presentation.relate_to(&theme_uri, rt::THEME);
    presentation.relate_to(&table_styles_uri, rt::TABLE_STYLES);
    presentation.set_xml(pres.generate_presentation_xml(&slide_r_ids, &master_r_id)?);
    package.add_part(Box::new(presentation))?;

    let mut master = XmlPart::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
    let layout_r_id = master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
    master.relate_to(&theme_uri, rt::THEME);
    master.set_xml(template::slide_master_xml(&layout_r_id));
    package.add_part(Box::new(master))?;

    let mut layout = XmlPart::new(
        layout_uri,
        ct::PML_SLIDE_LAYOUT,
        template::blank_layout_xml(),
    );
    layout.relate_to(&master_uri, rt::SLIDE_MASTER);
    package.add_part(Box::new(layout))?;

    for part in slide_parts {
        package.add_part(Box::new(part))?;
    }

    let (major_font, minor_font) = pres.theme_fonts();
    package.add_part(Box::new(XmlPart::new(
        theme_uri,
        ct::OFC_THEME,
        template::theme_xml(major_font, minor_font),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        pres_props_uri,
        ct::PML_PRES_PROPS,
        template::pres_props_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        view_props_uri,
        ct::PML_VIEW_PROPS,
        template::view_props_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        table_styles_uri,
        ct::PML_TABLE_STYLES,
        template::table_styles_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        template::core_props_xml(pres.title(), APPLICATION),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        template::app_props_xml(APPLICATION, pres.slide_count()),
    )))?;

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_target<'a>(part: &'a dyn Part, r_id: &str) -> &'a str {
        part.rels().get(r_id).unwrap().target_ref()
    }

    #[test]
    fn test_package_parts() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        // presentation, master, layout, 2 slides, theme, 3 props, core, app
        assert_eq!(package.part_count(), 12);
        assert!(package.contains_part(&uri("/ppt/slides/slide2.xml").unwrap()));
        assert!(!package.contains_part(&uri("/ppt/slides/slide3.xml").unwrap()));
        assert_eq!(package.rels().len(), 3);
    }

    #[test]
    fn test_presentation_relationship_order() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        let part = package.get_part(&uri(PRESENTATION).unwrap()).unwrap();

        assert_eq!(rel_target(part, "rId1"), "slideMasters/slideMaster1.xml");
        assert_eq!(rel_target(part, "rId2"), "slides/slide1.xml");
        assert_eq!(rel_target(part, "rId3"), "slides/slide2.xml");
        assert_eq!(rel_target(part, "rId6"), "theme/theme1.xml");

        let xml = std::str::from_utf8(part.blob()).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
    }

    #[test]
    fn test_slides_point_at_blank_layout() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        let slide = package.get_part(&uri("/ppt/slides/slide1.xml").unwrap()).unwrap();
        assert_eq!(
            rel_target(slide, "rId1"),
            "../slideLayouts/slideLayout1.xml"
        );

        let layout = package.get_part(&uri(SLIDE_LAYOUT).unwrap()).unwrap();
        assert_eq!(
            rel_target(layout, "rId1"),
            "../slideMasters/slideMaster1.xml"
        );
    }
}
