use crate::dataset::PackageEntry;

/// NodeDecorator port for node presentation concerns.
///
/// The builder consumes these outputs verbatim: the flag label lands inside
/// the node label and (whitespace-stripped) in package summaries, the color
/// goes on the node record, and the formatted size is embedded in the
/// label's bold suffix.
pub trait NodeDecorator: Send + Sync {
    /// Produces the short display suffix for a version's flag set.
    ///
    /// `entry` gives access to package-level context (metadata,
    /// vulnerabilities, version list) some markers depend on. An empty
    /// string means no markers apply.
    fn flag_label(&self, flags: &[String], entry: &PackageEntry) -> String;

    /// Picks the node color for a (id, flags) pair.
    fn node_color(&self, id: u64, flags: &[String]) -> String;

    /// Formats a byte count for human display, e.g. `52.9 kB`.
    fn format_size(&self, bytes: u64) -> String;
}
