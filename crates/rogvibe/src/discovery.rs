//! Building the default participant list from the tools installed locally.

use crate::handoff::Resolve;
use crate::random::RandomSource;

/// Tools probed on `PATH` when no names are given.
pub const KNOWN_TOOLS: [&str; 8] = [
    "kimi", "claude", "gemini", "codex", "code", "cursor", "amp", "opencode",
];

/// Names used to pad a short list up to a full wheel, alternating.
pub const FILLERS: [&str; 2] = ["lucky", "handy"];

/// Used when none of the candidates is installed.
pub const FALLBACK_PARTICIPANTS: [&str; 4] = ["handy", "handy", "handy", "handy"];

/// Known tools as owned strings.
pub fn known_tools() -> Vec<String> {
    KNOWN_TOOLS.iter().map(|s| s.to_string()).collect()
}

/// Trims every name and drops the blank ones.
pub fn normalize_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Candidates that resolve on the search path, shuffled and sized to fit a
/// wheel: fewer than 4 are padded to 4, 5 to 7 are padded to 8, more than 8
/// are sampled down to 8. Exactly 4 or 8 are left alone. Empty when nothing
/// was found.
pub fn detect_participants(
    candidates: &[String],
    resolver: &dyn Resolve,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let mut found: Vec<String> = candidates
        .iter()
        .filter(|c| {
            let hit = resolver.resolve(c).is_some();
            log::trace!("probe {} -> {}", c, hit);
            hit
        })
        .cloned()
        .collect();

    if found.is_empty() {
        return found;
    }
    rng.shuffle(&mut found);

    match found.len() {
        n if n < 4 => pad_to(&mut found, 4),
        5..=7 => pad_to(&mut found, 8),
        n if n > 8 => found = rng.sample(&found, 8),
        _ => {}
    }
    log::debug!("detected participants: {:?}", found);
    found
}

/// Detected participants, or [`FALLBACK_PARTICIPANTS`] when none are found.
pub fn default_participants(
    candidates: &[String],
    resolver: &dyn Resolve,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let detected = detect_participants(candidates, resolver, rng);
    if detected.is_empty() {
        log::warn!("no known tools found on PATH, using fallback participants");
        return FALLBACK_PARTICIPANTS.iter().map(|s| s.to_string()).collect();
    }
    detected
}

fn pad_to(names: &mut Vec<String>, size: usize) {
    let mut filler = FILLERS.iter().cycle();
    while names.len() < size {
        if let Some(name) = filler.next() {
            names.push(name.to_string());
        }
    }
}
