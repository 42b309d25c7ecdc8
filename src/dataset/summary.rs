use serde::Serialize;

/// Lightweight projection of one (package, version) pair for UI
/// collaborators that do not need the full graph: search panes, package
/// lists, flag legends.
///
/// `flags` is the decorator's label suffix with all whitespace stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub id: u64,
    pub name: String,
    pub version: String,
    pub flags: String,
}
