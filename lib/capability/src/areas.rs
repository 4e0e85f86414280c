//! Well-known permission areas.
//!
//! The capability grammar accepts any identifier as an area, these constants
//! cover the domains the platform ships with.

/// RDF data management (resources, triples, graphs).
pub const RDF: &str = "rdf";
/// Project management.
pub const PM: &str = "pm";
/// User management.
pub const UM: &str = "um";
/// System administration.
pub const SYS: &str = "sys";
/// Custom form definitions.
pub const CFORM: &str = "cform";
/// Role and capability administration.
pub const RBAC: &str = "rbac";
