//! Helpers for reading rendered packages back.

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::{Cursor, Read};

/// Open a rendered package.
pub fn open(bytes: &[u8]) -> zip::ZipArchive<Cursor<Vec<u8>>> {
    zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("package is a zip archive")
}

/// Read a part by member name as a string.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = open(bytes);
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("part is utf-8");
    xml
}

/// Member names in archive order.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    open(bytes).file_names().map(str::to_string).collect()
}

/// A paragraph as read from slide XML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphInfo {
    pub level: u8,
    pub glyph: Option<String>,
    /// Run size in hundredths of a point
    pub size: Option<u32>,
    pub text: String,
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Paragraphs of every text body on a slide, one list per text box, in
/// document order.
pub fn text_bodies(slide_xml: &str) -> Vec<Vec<ParagraphInfo>> {
    let mut reader = Reader::from_reader(slide_xml.as_bytes());

    let mut bodies: Vec<Vec<ParagraphInfo>> = Vec::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"txBody" => bodies.push(Vec::new()),
                b"p" => {
                    if let Some(body) = bodies.last_mut() {
                        body.push(ParagraphInfo::default());
                    }
                },
                b"pPr" => apply_paragraph_props(&mut bodies, &e),
                b"rPr" => apply_run_props(&mut bodies, &e),
                b"t" => in_text = true,
                _ => {},
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(body) = bodies.last_mut() {
                        body.push(ParagraphInfo::default());
                    }
                },
                b"pPr" => apply_paragraph_props(&mut bodies, &e),
                b"rPr" => apply_run_props(&mut bodies, &e),
                b"buChar" => {
                    if let Some(p) = bodies.last_mut().and_then(|b| b.last_mut()) {
                        p.glyph = attr(&e, b"char");
                    }
                },
                _ => {},
            },
            Ok(Event::Text(e)) if in_text => {
                if let Some(p) = bodies.last_mut().and_then(|b| b.last_mut()) {
                    p.text.push_str(std::str::from_utf8(e.as_ref()).expect("utf-8 text"));
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = false;
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed slide xml: {e}"),
            _ => {},
        }
        buf.clear();
    }

    bodies
}

fn apply_paragraph_props(bodies: &mut [Vec<ParagraphInfo>], e: &BytesStart<'_>) {
    if let Some(p) = bodies.last_mut().and_then(|b| b.last_mut()) {
        p.level = attr(e, b"lvl").map_or(0, |v| v.parse().expect("numeric lvl"));
    }
}

fn apply_run_props(bodies: &mut [Vec<ParagraphInfo>], e: &BytesStart<'_>) {
    if let Some(p) = bodies.last_mut().and_then(|b| b.last_mut()) {
        p.size = attr(e, b"sz").map(|v| v.parse().expect("numeric sz"));
    }
}

/// Plain text of each text box on a slide.
pub fn texts(slide_xml: &str) -> Vec<String> {
    text_bodies(slide_xml)
        .into_iter()
        .map(|body| {
            body.into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}
