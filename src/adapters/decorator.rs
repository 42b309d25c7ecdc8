use crate::dataset::PackageEntry;
use crate::ports::NodeDecorator;

/// Marker emitted next to a package that carries known vulnerabilities.
const VULNERABILITY_MARKER: &str = "🚨";

/// Short display markers for the flag names scanners emit today. Unknown
/// flag names simply produce no marker.
const FLAG_MARKERS: &[(&str, &str)] = &[
    ("hasIndirectDependencies", "🌲"),
    ("hasWarnings", "⚠️"),
    ("hasNativeCode", "🔧"),
    ("hasMinifiedCode", "🔬"),
    ("hasCustomResolver", "💎"),
    ("hasExternalCapacity", "🌍"),
    ("hasMissingOrUnusedDependency", "👀"),
    ("isDeprecated", "⛔️"),
];

const ROOT_COLOR: &str = "#01579B";
const FLAGGED_COLOR: &str = "#EF6C00";
const DEFAULT_COLOR: &str = "#E3F2FD";

/// VisDecorator - default presentation adapter for vis-style renderers.
///
/// Produces the emoji flag suffix, the node color and the pretty-bytes
/// (base-1000) size string the builder embeds in node labels.
pub struct VisDecorator;

impl VisDecorator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VisDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeDecorator for VisDecorator {
    fn flag_label(&self, flags: &[String], entry: &PackageEntry) -> String {
        let mut markers = String::new();
        if !entry.vulnerabilities.is_empty() {
            markers.push_str(VULNERABILITY_MARKER);
        }
        for (flag, marker) in FLAG_MARKERS {
            if flags.iter().any(|f| f == flag) {
                markers.push_str(marker);
            }
        }

        if markers.is_empty() {
            markers
        } else {
            format!(" {}", markers)
        }
    }

    fn node_color(&self, id: u64, flags: &[String]) -> String {
        if id == 0 {
            ROOT_COLOR.to_string()
        } else if !flags.is_empty() {
            FLAGGED_COLOR.to_string()
        } else {
            DEFAULT_COLOR.to_string()
        }
    }

    fn format_size(&self, bytes: u64) -> String {
        const UNITS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];

        if bytes < 1000 {
            return format!("{} B", bytes);
        }

        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1000.0 && unit < UNITS.len() - 1 {
            value /= 1000.0;
            unit += 1;
        }

        // Trim a trailing ".0" so round values read as "2 kB", not "2.0 kB"
        let rendered = format!("{:.1}", value);
        let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
        format!("{} {}", rendered, UNITS[unit])
    }
}
