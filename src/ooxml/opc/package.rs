/// Objects that implement writing OPC packages.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// Main API class for building OPC packages.
///
/// An OpcPackage holds parts in insertion order together with the
/// package-level relationships (`/_rels/.rels`). Insertion order is kept so
/// the serialized archive is identical for identical input.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// Parts in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Fails if a part with the same partname is already present.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Get a part by partname.
    pub fn get_part(&self, partname: &PackURI) -> Option<&dyn Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .map(|p| p.as_ref())
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| p.as_ref())
    }

    /// Number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part.
    ///
    /// Returns the rId of the relationship.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, partname.membername())
    }

    /// Check whether a part with this partname exists.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
