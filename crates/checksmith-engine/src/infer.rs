//! Heuristic extraction of check metadata from free-text descriptions.
//!
//! Inference is best-effort pattern matching: matchers are tried in a
//! fixed priority order and return `None` instead of failing, so adding a
//! pattern never breaks the existing ones. Identifiers that cannot be
//! inferred are reported as missing, never fabricated.

use crate::{Error, Result};
use checksmith_types::{CATEGORIES, is_known_category};
use checksmith_types::util::slugify;
use regex::Regex;

/// GIVEN/WHEN/THEN fragments of a description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionedDescription {
    pub given: String,
    pub when: String,
    pub then: String,
}

impl SectionedDescription {
    /// Segment a description at case-insensitive GIVEN/WHEN/THEN keyword
    /// boundaries. When none of the keywords are present the whole
    /// description is treated as the THEN clause with GIVEN/WHEN empty;
    /// that degraded form is still usable, not an error.
    pub fn parse(description: &str) -> Self {
        let Some(keyword) = section_keyword_regex() else {
            return Self::degraded(description);
        };

        let matches: Vec<_> = keyword.find_iter(description).collect();
        if matches.is_empty() {
            return Self::degraded(description);
        }

        let mut sections = Self::default();
        for (i, m) in matches.iter().enumerate() {
            let end = matches.get(i + 1).map(|n| n.start()).unwrap_or(description.len());
            let value = trim_section(&description[m.end()..end]);
            match m.as_str().to_ascii_uppercase().as_str() {
                "GIVEN" => sections.given = value,
                "WHEN" => sections.when = value,
                _ => sections.then = value,
            }
        }
        sections
    }

    fn degraded(description: &str) -> Self {
        Self {
            then: trim_section(description),
            ..Self::default()
        }
    }
}

fn section_keyword_regex() -> Option<Regex> {
    Regex::new(r"(?i)\b(GIVEN|WHEN|THEN)\b").ok()
}

fn trim_section(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| c == ':' || c == '.' || c == '-' || c.is_whitespace())
        .to_string()
}

/// First fixed category name appearing as a whole word wins.
pub fn infer_group(description: &str) -> Option<&'static str> {
    CATEGORIES.into_iter().find(|group| {
        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(group)))
            .map(|re| re.is_match(description))
            .unwrap_or(false)
    })
}

/// Infer `(service, test)` from the summary portion of a description
/// (everything before the first GIVEN keyword). Matchers run in priority
/// order; the first one producing a service decides both fields, then the
/// test is refined independently if still missing.
pub fn infer_service_and_test(
    description: &str,
    group: Option<&str>,
) -> (Option<String>, Option<String>) {
    let summary = summary_portion(description);

    let matchers: [fn(&str, Option<&str>) -> Option<(String, Option<String>)>; 3] = [
        match_for_phrase,
        match_group_service,
        match_word_after_for,
    ];

    let mut service = None;
    let mut test = None;
    for matcher in matchers {
        if let Some((s, t)) = matcher(summary, group) {
            service = Some(s);
            test = t;
            break;
        }
    }

    if test.is_none() {
        test = match_action_verb(summary);
    }
    if test.is_none()
        && let Some(service) = service.as_deref()
    {
        test = match_word_after_service(summary, service);
    }

    (service, test)
}

fn summary_portion(description: &str) -> &str {
    match Regex::new(r"(?i)\bGIVEN\b").ok().and_then(|re| re.find(description)) {
        Some(m) => &description[..m.start()],
        None => description,
    }
}

/// "for redis authentication check" => service "redis", test "authentication"
fn match_for_phrase(summary: &str, _group: Option<&str>) -> Option<(String, Option<String>)> {
    let re = Regex::new(
        r"(?i)\bfor\s+([a-z0-9][a-z0-9-_/ ]+?)\s+(?:check|test|validation|integration|script)\b",
    )
    .ok()?;
    let m = re.captures(summary)?;
    let mut words = m.get(1)?.as_str().split_whitespace();
    let service = slugify(words.next()?);
    if service.is_empty() {
        return None;
    }
    let tail = words.collect::<Vec<_>>().join(" ");
    let test = Some(slugify(&tail)).filter(|t| !t.is_empty());
    Some((service, test))
}

/// "security redis authentication" => service "redis", test "authentication"
fn match_group_service(summary: &str, group: Option<&str>) -> Option<(String, Option<String>)> {
    let group = group?;
    let re = Regex::new(&format!(
        r"(?i)\b{}\s+([a-z0-9][a-z0-9-_/]+)(?:\s+([a-z0-9][a-z0-9-_/]+))?",
        regex::escape(group)
    ))
    .ok()?;
    let m = re.captures(summary)?;
    let service = slugify(m.get(1)?.as_str());
    if service.is_empty() {
        return None;
    }
    let test = m
        .get(2)
        .map(|t| slugify(t.as_str()))
        .filter(|t| !t.is_empty());
    Some((service, test))
}

/// Bare word after "for" as a last resort.
fn match_word_after_for(summary: &str, _group: Option<&str>) -> Option<(String, Option<String>)> {
    let re = Regex::new(r"(?i)\bfor\s+([a-z0-9][a-z0-9-_/]+)").ok()?;
    let m = re.captures(summary)?;
    let service = slugify(m.get(1)?.as_str());
    if service.is_empty() {
        return None;
    }
    Some((service, None))
}

/// Phrase after an action verb becomes the test name.
fn match_action_verb(summary: &str) -> Option<String> {
    let re = Regex::new(r"(?i)\b(?:ensure|verify|validate|confirm|check)\s+([a-z0-9][a-z0-9-_/ ]+)")
        .ok()?;
    let m = re.captures(summary)?;
    Some(slugify(m.get(1)?.as_str())).filter(|t| !t.is_empty())
}

/// First distinctive word following the service.
fn match_word_after_service(summary: &str, service: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r"(?i)\b{}\b\s+([a-z0-9][a-z0-9-_/]+)",
        regex::escape(service)
    ))
    .ok()?;
    let m = re.captures(summary)?;
    let candidate = slugify(m.get(1)?.as_str());
    if candidate.is_empty() || candidate == service {
        return None;
    }
    Some(candidate)
}

/// Explicit CLI overrides for inferred metadata. Empty strings mean
/// "infer from the description".
#[derive(Debug, Clone, Default)]
pub struct MetadataOverrides {
    pub group: Option<String>,
    pub service: Option<String>,
    pub test: Option<String>,
}

/// Fully resolved identity for a check about to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub sections: SectionedDescription,
    pub group: String,
    pub service: String,
    pub test: String,
}

impl ResolvedMetadata {
    /// Merge explicit overrides with inferred values. Fails with the full
    /// list of unresolved fields; never invents a placeholder identifier.
    pub fn resolve(description: &str, overrides: &MetadataOverrides) -> Result<Self> {
        let sections = SectionedDescription::parse(description);

        let group = match overrides.group.as_deref() {
            Some(explicit) => {
                let normalized = slugify(explicit);
                if !is_known_category(&normalized) {
                    return Err(Error::UnknownGroup(explicit.to_string()));
                }
                Some(normalized)
            }
            None => infer_group(description).map(String::from),
        };

        let (inferred_service, inferred_test) =
            infer_service_and_test(description, group.as_deref());
        let service = overrides
            .service
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .or(inferred_service);
        let test = overrides
            .test
            .as_deref()
            .map(slugify)
            .filter(|t| !t.is_empty())
            .or(inferred_test);

        let mut missing = Vec::new();
        if group.is_none() {
            missing.push("group");
        }
        if service.is_none() {
            missing.push("service");
        }
        if test.is_none() {
            missing.push("test");
        }
        if !missing.is_empty() {
            return Err(Error::MissingMetadata(missing));
        }

        Ok(Self {
            sections,
            group: group.unwrap_or_default(),
            service: service.unwrap_or_default(),
            test: test.unwrap_or_default(),
        })
    }

    pub fn check_id(&self) -> String {
        format!("{}_{}_{}", self.group, self.service, self.test)
    }

    pub fn file_stem(&self) -> String {
        format!("{}-{}-{}", self.group, self.service, self.test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_split_on_keywords() {
        let sections = SectionedDescription::parse(
            "GIVEN a redis instance WHEN we ping it without auth THEN it should reject the connection",
        );
        assert_eq!(sections.given, "a redis instance");
        assert_eq!(sections.when, "we ping it without auth");
        assert_eq!(sections.then, "it should reject the connection");
    }

    #[test]
    fn test_sections_case_insensitive_and_punctuated() {
        let sections = SectionedDescription::parse(
            "given: a fresh install, when: the service starts. then: logs are written",
        );
        assert_eq!(sections.given, "a fresh install,");
        assert_eq!(sections.when, "the service starts");
        assert_eq!(sections.then, "logs are written");
    }

    #[test]
    fn test_degraded_mode_puts_everything_in_then() {
        let sections = SectionedDescription::parse("the datastore must require a password");
        assert_eq!(sections.given, "");
        assert_eq!(sections.when, "");
        assert_eq!(sections.then, "the datastore must require a password");
    }

    #[test]
    fn test_infer_group_first_match_wins() {
        assert_eq!(infer_group("a security check for redis"), Some("security"));
        assert_eq!(
            infer_group("validate Performance and storage limits"),
            Some("storage")
        );
        assert_eq!(infer_group("redis ping behavior"), None);
    }

    #[test]
    fn test_infer_group_whole_word_only() {
        assert_eq!(infer_group("cybersecurity posture"), None);
        assert_eq!(infer_group("platform-integration mounts"), Some("platform-integration"));
    }

    #[test]
    fn test_for_phrase_pattern() {
        let (service, test) =
            infer_service_and_test("security check for redis authentication validation", None);
        assert_eq!(service.as_deref(), Some("redis"));
        assert_eq!(test.as_deref(), Some("authentication"));
    }

    #[test]
    fn test_group_service_pattern() {
        let (service, test) =
            infer_service_and_test("storage postgres wal archiving behavior", Some("storage"));
        assert_eq!(service.as_deref(), Some("postgres"));
        assert_eq!(test.as_deref(), Some("wal"));
    }

    #[test]
    fn test_action_verb_refines_test() {
        let (service, test) = infer_service_and_test(
            "a check for grafana to verify dashboard provisioning",
            None,
        );
        assert_eq!(service.as_deref(), Some("grafana"));
        assert_eq!(test.as_deref(), Some("dashboard-provisioning"));
    }

    #[test]
    fn test_no_match_yields_none() {
        let (service, test) = infer_service_and_test("something entirely shapeless", None);
        assert_eq!(service, None);
        assert_eq!(test, None);
    }

    #[test]
    fn test_resolve_fails_naming_missing_fields() {
        let err = ResolvedMetadata::resolve(
            "GIVEN a redis instance WHEN we ping it without auth THEN it should reject the connection",
            &MetadataOverrides::default(),
        )
        .unwrap_err();
        match err {
            Error::MissingMetadata(fields) => assert!(fields.contains(&"group")),
            other => panic!("expected MissingMetadata, got {other}"),
        }
    }

    #[test]
    fn test_resolve_with_overrides() {
        let resolved = ResolvedMetadata::resolve(
            "GIVEN a redis instance WHEN pinged THEN auth is required",
            &MetadataOverrides {
                group: Some("Security".into()),
                service: Some("redis".into()),
                test: Some("auth required".into()),
            },
        )
        .unwrap();
        assert_eq!(resolved.group, "security");
        assert_eq!(resolved.check_id(), "security_redis_auth-required");
        assert_eq!(resolved.file_stem(), "security-redis-auth-required");
    }

    #[test]
    fn test_resolve_rejects_unknown_group() {
        let err = ResolvedMetadata::resolve(
            "anything",
            &MetadataOverrides {
                group: Some("networking".into()),
                service: Some("redis".into()),
                test: Some("auth".into()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownGroup(_)));
    }

    #[test]
    fn test_resolve_full_inference() {
        let resolved = ResolvedMetadata::resolve(
            "security check for redis authentication validation GIVEN a redis instance WHEN pinged without auth THEN the connection is rejected",
            &MetadataOverrides::default(),
        )
        .unwrap();
        assert_eq!(resolved.group, "security");
        assert_eq!(resolved.service, "redis");
        assert_eq!(resolved.test, "authentication");
        assert_eq!(resolved.sections.given, "a redis instance");
    }
}
