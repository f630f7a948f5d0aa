// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Slug derivation: lowercase, trim, whitespace runs become single hyphens,
/// everything outside `[a-z0-9-]` is dropped, hyphen runs collapse, and
/// leading/trailing hyphens are stripped. Characters with no ASCII
/// equivalent are dropped rather than transliterated, so the output for a
/// punctuation-only title is the empty string; callers reject that through
/// slug validation.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let mut out = String::with_capacity(lowered.len());
        for ch in lowered.trim().chars() {
            if ch.is_whitespace() || ch == '-' {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
            } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                out.push(ch);
            }
        }
        out.trim_end_matches('-').to_string()
    }
}
