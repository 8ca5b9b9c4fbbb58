//! Slug generation for public lookup keys.

/// Derive a URL-safe slug from free text.
///
/// Lower-cases the input, drops characters that are neither alphanumeric nor
/// separators, and collapses runs of whitespace, underscores and hyphens into a
/// single hyphen with no leading or trailing hyphen.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
        // Everything else (punctuation, symbols) is dropped.
    }

    slug
}

/// Build a candidate slug for the n-th collision: `base`, `base-2`, `base-3`...
pub fn suffixed_slug(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(
            generate_slug("Everest Base Camp Trek!"),
            "everest-base-camp-trek"
        );
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(generate_slug("  A -- B  "), "a-b");
        assert_eq!(generate_slug("a___b"), "a-b");
        assert_eq!(generate_slug("a - _ - b"), "a-b");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(generate_slug("What's Included?"), "whats-included");
        assert_eq!(generate_slug("Chitwan (Safari) #1"), "chitwan-safari-1");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug("   "), "");
    }

    #[test]
    fn test_suffixed_slug() {
        assert_eq!(suffixed_slug("trek", 1), "trek");
        assert_eq!(suffixed_slug("trek", 2), "trek-2");
        assert_eq!(suffixed_slug("trek", 10), "trek-10");
    }
}
