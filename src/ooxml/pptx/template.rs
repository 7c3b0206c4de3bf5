//! Presentation template module.
//!
//! Provides the static parts every new PowerPoint package needs: one slide
//! master, one blank layout, a theme and the presentation property parts.
//! These contain the bare minimum structure required for a valid .pptx file.

use crate::common::xml::escape_xml;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const PML_NS: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
);

const EMPTY_SHAPE_TREE: &str = concat!(
    "<p:spTree>",
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    "</p:spTree>"
);

/// Generate the slide master, referencing its single layout by relationship ID.
///
/// The master carries the color map and minimal text styles.
pub fn slide_master_xml(layout_r_id: &str) -> String {
    format!(
        concat!(
            "{decl}<p:sldMaster {ns}>",
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>{tree}</p:cSld>"#,
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
            r#"hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="{rid}"/></p:sldLayoutIdLst>"#,
            "<p:txStyles>",
            r#"<p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="4400"/></a:lvl1pPr></p:titleStyle>"#,
            r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:bodyStyle>"#,
            r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>"#,
            "</p:txStyles>",
            "</p:sldMaster>"
        ),
        decl = XML_DECL,
        ns = PML_NS,
        tree = EMPTY_SHAPE_TREE,
        rid = escape_xml(layout_r_id),
    )
}

/// Generate the blank slide layout (no placeholders).
pub fn blank_layout_xml() -> String {
    format!(
        concat!(
            r#"{decl}<p:sldLayout {ns} type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank">{tree}</p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>"
        ),
        decl = XML_DECL,
        ns = PML_NS,
        tree = EMPTY_SHAPE_TREE,
    )
}

/// Generate a minimal valid theme.xml with the given major/minor fonts.
pub fn theme_xml(major_font: &str, minor_font: &str) -> String {
    format!(
        concat!(
            r#"{decl}<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
            "<a:themeElements>",
            r#"<a:clrScheme name="Office">"#,
            r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
            r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#,
            r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1>"#,
            r#"<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#,
            r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#,
            r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#,
            r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
            "</a:clrScheme>",
            r#"<a:fontScheme name="Office">"#,
            r#"<a:majorFont><a:latin typeface="{major}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{minor}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>",
            r#"<a:fmtScheme name="Office">"#,
            "<a:fillStyleLst>",
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:fillStyleLst>",
            "<a:lnStyleLst>",
            r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            "</a:lnStyleLst>",
            "<a:effectStyleLst>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "</a:effectStyleLst>",
            "<a:bgFillStyleLst>",
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:bgFillStyleLst>",
            "</a:fmtScheme>",
            "</a:themeElements>",
            "</a:theme>"
        ),
        decl = XML_DECL,
        major = escape_xml(major_font),
        minor = escape_xml(minor_font),
    )
}

/// Generate a minimal valid presProps.xml content.
pub fn pres_props_xml() -> String {
    format!("{}<p:presentationPr {}/>", XML_DECL, PML_NS)
}

/// Generate a minimal valid viewProps.xml content.
pub fn view_props_xml() -> String {
    format!(
        r#"{}<p:viewPr {}><p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        XML_DECL, PML_NS
    )
}

/// Generate a minimal valid tableStyles.xml content.
pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL
    )
}

/// Generate core properties.
///
/// No creation or modification timestamps are written, so the same
/// presentation always yields the same bytes.
pub fn core_props_xml(title: Option<&str>, creator: &str) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    if let Some(title) = title {
        xml.push_str("<dc:title>");
        xml.push_str(&escape_xml(title));
        xml.push_str("</dc:title>");
    }
    xml.push_str("<dc:creator>");
    xml.push_str(&escape_xml(creator));
    xml.push_str("</dc:creator>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate extended (application) properties.
pub fn app_props_xml(application: &str, slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application>",
            "<Slides>{slides}</Slides>",
            "</Properties>"
        ),
        decl = XML_DECL,
        app = escape_xml(application),
        slides = slide_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml("rId1");
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.starts_with(XML_DECL));
    }

    #[test]
    fn test_theme_fonts() {
        let xml = theme_xml("Georgia", "Helvetica Neue");
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Georgia"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Helvetica Neue"/>"#));
    }

    #[test]
    fn test_table_styles_braces() {
        assert!(table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }

    #[test]
    fn test_core_props_have_no_timestamps() {
        let xml = core_props_xml(Some("Demo & Co"), "deckwright");
        assert!(xml.contains("<dc:title>Demo &amp; Co</dc:title>"));
        assert!(!xml.contains("dcterms:created"));
        assert!(!xml.contains("dcterms:modified"));
    }

    #[test]
    fn test_app_props_slide_count() {
        assert!(app_props_xml("deckwright", 9).contains("<Slides>9</Slides>"));
    }
}
