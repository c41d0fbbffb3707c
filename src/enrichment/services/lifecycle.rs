//! Pure pieces of end-of-life resolution: slug-candidate derivation from a
//! display name, and cycle matching against a lifecycle registry's rows.
//!
//! Candidate order is a best-first heuristic, not a guaranteed-correct
//! resolution: the first candidate with any matching cycle wins, and
//! ambiguity between candidates is resolved silently.

use crate::enrichment::domain::LifecycleCycle;

/// Generic words that never identify a product on their own.
const STOPWORDS: &[&str] = &["linux", "framework", "library"];

/// Derive the ordered lookup-slug candidates for a component display name:
/// the whole name lowercased and de-punctuated, then each significant word,
/// then the stopword-filtered multi-word join. Duplicates are dropped while
/// preserving first-occurrence order.
pub fn candidate_slugs(name: &str) -> Vec<String> {
    let words: Vec<String> = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![words.join("-")];

    let significant: Vec<&String> = words
        .iter()
        .filter(|w| !STOPWORDS.contains(&w.as_str()) && w.len() > 1)
        .collect();
    for word in &significant {
        candidates.push((*word).clone());
    }
    if significant.len() > 1 {
        candidates.push(
            significant
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join("-"),
        );
    }

    let mut seen = Vec::new();
    candidates.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });
    candidates
}

/// First cycle, in registry order, whose identifier equals the component
/// version or is a dotted version-prefix of it. No longest-prefix ranking
/// is attempted.
pub fn matching_cycle<'a>(
    cycles: &'a [LifecycleCycle],
    version: &str,
) -> Option<&'a LifecycleCycle> {
    if version.is_empty() {
        return None;
    }
    cycles
        .iter()
        .find(|c| version == c.cycle || version.starts_with(&format!("{}.", c.cycle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::domain::DateOrBool;

    fn cycle(id: &str, eol: DateOrBool) -> LifecycleCycle {
        LifecycleCycle {
            cycle: id.to_string(),
            eol,
        }
    }

    #[test]
    fn test_candidates_for_two_word_name() {
        assert_eq!(
            candidate_slugs("Apache Log4j"),
            vec!["apache-log4j", "apache", "log4j"]
        );
    }

    #[test]
    fn test_candidates_exclude_stopwords() {
        assert_eq!(
            candidate_slugs("Oracle Linux"),
            vec!["oracle-linux", "oracle"]
        );
        // Join only appears with more than one significant word.
        assert_eq!(
            candidate_slugs("Spring Framework Boot"),
            vec!["spring-framework-boot", "spring", "boot", "spring-boot"]
        );
    }

    #[test]
    fn test_candidates_single_word() {
        assert_eq!(candidate_slugs("python"), vec!["python"]);
    }

    #[test]
    fn test_candidates_punctuation_and_duplicates() {
        assert_eq!(candidate_slugs("Node.js"), vec!["node-js", "node", "js"]);
        // De-punctuated whole equals the join; the duplicate is dropped.
        assert_eq!(
            candidate_slugs("commons-lang"),
            vec!["commons-lang", "commons", "lang"]
        );
    }

    #[test]
    fn test_candidates_empty_name() {
        assert!(candidate_slugs("").is_empty());
        assert!(candidate_slugs("---").is_empty());
    }

    #[test]
    fn test_matching_cycle_exact_and_prefix() {
        let cycles = vec![
            cycle("3.12", DateOrBool::Date("2028-10-31".to_string())),
            cycle("3.11", DateOrBool::Date("2027-10-31".to_string())),
        ];
        assert_eq!(matching_cycle(&cycles, "3.11").unwrap().cycle, "3.11");
        assert_eq!(matching_cycle(&cycles, "3.12.4").unwrap().cycle, "3.12");
        assert!(matching_cycle(&cycles, "3.120.1").is_none());
        assert!(matching_cycle(&cycles, "2.7").is_none());
        assert!(matching_cycle(&cycles, "").is_none());
    }

    #[test]
    fn test_matching_cycle_first_in_registry_order_wins() {
        // No longest-specific-first guarantee: registry order decides.
        let cycles = vec![
            cycle("3", DateOrBool::Date("2030-01-01".to_string())),
            cycle("3.12", DateOrBool::Date("2028-10-31".to_string())),
        ];
        assert_eq!(matching_cycle(&cycles, "3.12.1").unwrap().cycle, "3");
    }
}
