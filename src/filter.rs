//! Post-collection filtering of discovered CRDs
//!
//! Selection happens on the presentation side; the scanner always returns
//! everything it found.

use glob::Pattern;
use tracing::warn;

use scout_crd::CustomResourceDefinition;

/// Keep the CRDs whose `group/version` pairs match any of the patterns.
///
/// An empty pattern list keeps everything. Invalid patterns are ignored
/// with a warning.
pub fn retain_matching(
    crds: Vec<CustomResourceDefinition>,
    patterns: &[String],
) -> Vec<CustomResourceDefinition> {
    if patterns.is_empty() {
        return crds;
    }

    let compiled: Vec<Pattern> = patterns
        .iter()
        .filter_map(|raw| match Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!("Ignoring invalid filter pattern '{}': {}", raw, err);
                None
            }
        })
        .collect();

    crds.into_iter()
        .filter(|crd| matches_any(crd, &compiled))
        .collect()
}

fn matches_any(crd: &CustomResourceDefinition, patterns: &[Pattern]) -> bool {
    crd.versions().iter().any(|version| {
        let api_version = format!("{}/{}", crd.group(), version.name);
        patterns.iter().any(|pattern| pattern.matches(&api_version))
    })
}
