use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
/// Relationship-related objects for OPC packages.
///
/// This module provides types for managing relationships between parts in an OPC package.
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
///
/// Represents a connection between parts in an OPC package, identified by an rId
/// (relationship ID).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
///
/// Relationships are kept in allocation order, so serialized `.rels` parts are
/// stable from run to run.
#[derive(Debug)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    /// Relationships in rId order
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Base URI of the source part
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Base URI of the source part.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Get the next available relationship ID.
    pub fn next_r_id(&self) -> String {
        format!("rId{}", self.rels.len() + 1)
    }

    /// Get an existing relationship of this type and target, or add a new one.
    ///
    /// Returns the rId of the relationship.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
        ));
        r_id
    }

    /// Get a relationship by its rId.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Iterate over the relationships in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to XML format.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            );
        }

        xml.push_str("</Relationships>");

        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_r_id() {
        let mut rels = Relationships::new("/ppt".to_string());
        assert_eq!(rels.next_r_id(), "rId1");

        rels.get_or_add("type1", "target1");
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add() {
        let mut rels = Relationships::new("/ppt".to_string());

        assert_eq!(rels.get_or_add("type1", "target1"), "rId1");
        // Getting the same relationship should return the same rId
        assert_eq!(rels.get_or_add("type1", "target1"), "rId1");
        // Different target should create new relationship
        assert_eq!(rels.get_or_add("type1", "target2"), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "target2");
    }

    #[test]
    fn test_to_xml_in_allocation_order() {
        let mut rels = Relationships::default();
        for i in 1..=11 {
            rels.get_or_add("type", &format!("slides/slide{}.xml", i));
        }

        let xml = rels.to_xml();
        let rid2 = xml.find(r#"Id="rId2""#).unwrap();
        let rid10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(rid2 < rid10);
        assert!(xml.contains(r#"Target="slides/slide11.xml""#));
    }
}
