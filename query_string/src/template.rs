//! Template scanning utilities
//!
//! Templates use the two-character `{}` marker for positional placeholders.
//! The marker is not escapable; templates are written by trusted
//! query-builder code, never derived from user input.

/// The positional placeholder marker recognized in templates
pub const PLACEHOLDER: &str = "{}";

/// Split a template into its literal segments around each placeholder.
///
/// Always yields `placeholder_count(template) + 1` segments; the last one is
/// the trailing literal and may be empty. A template with no markers yields
/// a single segment.
pub fn split_segments(template: &str) -> Vec<&str> {
    template.split(PLACEHOLDER).collect()
}

/// Count the placeholder markers in a template
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_around_markers() {
        assert_eq!(split_segments("WHERE {} = {}"), vec!["WHERE ", " = ", ""]);
    }

    #[test]
    fn test_zero_markers_yield_single_segment() {
        assert_eq!(split_segments("SELECT 1"), vec!["SELECT 1"]);
        assert_eq!(placeholder_count("SELECT 1"), 0);
    }

    #[test]
    fn test_adjacent_markers() {
        assert_eq!(split_segments("{}{}"), vec!["", "", ""]);
        assert_eq!(placeholder_count("{}{}"), 2);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(split_segments(""), vec![""]);
        assert_eq!(placeholder_count(""), 0);
    }

    #[test]
    fn test_segment_count_matches_marker_count() {
        let template = "a {} b {} c {} d";
        assert_eq!(
            split_segments(template).len(),
            placeholder_count(template) + 1
        );
    }
}
