use crate::{
    CapabilityAction, CapabilityActionSet, CapabilityParseError, CapabilityValidationError,
};
use std::fmt;
use std::str::FromStr;

/// The permission area a capability applies to, with optional qualifiers.
///
/// A topic renders as `area`, `area(subject)` or `area(subject,scope)`. The
/// area is one of the permission domains of the platform (see [crate::areas])
/// but free-form identifiers are accepted, the role store is the authority on
/// which areas exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapabilityTopic {
    pub area: String,
    pub subject: Option<String>,
    pub scope: Option<String>,
}

impl CapabilityTopic {
    /// Creates a topic covering a whole area.
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            subject: None,
            scope: None,
        }
    }

    /// Restricts the topic to a sub-resource of the area.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds the second qualifier next to the subject.
    ///
    /// A scope is only rendered when a subject is present, `area(,scope)` is
    /// not part of the grammar.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    fn subject(&self) -> Option<&str> {
        non_blank(self.subject.as_deref())
    }

    fn scope(&self) -> Option<&str> {
        non_blank(self.scope.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

impl fmt::Display for CapabilityTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.area)?;
        if let Some(subject) = self.subject() {
            match self.scope() {
                Some(scope) => write!(f, "({subject},{scope})"),
                None => write!(f, "({subject})"),
            }?;
        }
        Ok(())
    }
}

impl FromStr for CapabilityTopic {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CapabilityParseError::MalformedTopic(s.to_owned());
        let Some(open) = s.find('(') else {
            // A bare area must not carry stray punctuation.
            if s.is_empty() || s.contains([')', ',']) {
                return Err(malformed());
            }
            return Ok(Self::new(s));
        };
        let area = &s[..open];
        let close = s.find(')').ok_or_else(malformed)?;
        if area.is_empty() || close < open || !s[close + 1..].trim().is_empty() {
            return Err(malformed());
        }
        let qualifiers = &s[open + 1..close];
        let topic = match qualifiers.split_once(',') {
            Some((subject, scope)) => Self::new(area)
                .with_subject(subject.trim())
                .with_scope(scope.trim()),
            None => Self::new(area).with_subject(qualifiers.trim()),
        };
        Ok(topic)
    }
}

/// A parsed capability expression.
///
/// The serialized form is `capability(<topic>,'<letters>')`, the wire format
/// the role-management endpoints exchange. Parsing accepts single- and
/// double-quoted letter groups, serialization always emits single quotes and
/// the canonical letter order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    pub topic: CapabilityTopic,
    pub actions: CapabilityActionSet,
}

impl Capability {
    pub fn new(topic: CapabilityTopic, actions: CapabilityActionSet) -> Self {
        Self { topic, actions }
    }

    /// Returns whether the capability grants at least one action.
    ///
    /// This is the only rule the codec owns. An invalid capability still
    /// serializes (the letter group is simply empty), callers are expected to
    /// [validate](Self::validate) before submitting to a role store.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn validate(&self) -> Result<(), CapabilityValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CapabilityValidationError)
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capability({},'{}')", self.topic, self.actions)
    }
}

impl FromStr for Capability {
    type Err = CapabilityParseError;

    /// Parses a `capability(<topic>,'<letters>')` expression.
    ///
    /// The topic may itself contain a comma (`area(subject,scope)`), so the
    /// topic and the letter group are split at the *last* comma. Letters are
    /// matched case-insensitively and characters outside the alphabet are
    /// skipped, matching what existing role stores hand out.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let open = trimmed
            .find('(')
            .ok_or_else(|| CapabilityParseError::MissingWrapper(s.to_owned()))?;
        let close = trimmed
            .rfind(')')
            .ok_or_else(|| CapabilityParseError::MissingWrapper(s.to_owned()))?;
        if trimmed[..open].trim() != "capability" || close < open {
            return Err(CapabilityParseError::MissingWrapper(s.to_owned()));
        }
        let inner = &trimmed[open + 1..close];
        let comma = inner
            .rfind(',')
            .ok_or_else(|| CapabilityParseError::MissingActions(s.to_owned()))?;
        let topic = inner[..comma]
            .trim()
            .parse::<CapabilityTopic>()
            .map_err(|_| CapabilityParseError::MalformedTopic(s.to_owned()))?;
        let letters = inner[comma + 1..].trim().trim_matches(['\'', '"']);
        let actions = CapabilityAction::ALL
            .into_iter()
            .filter(|action| {
                letters
                    .chars()
                    .any(|letter| letter.eq_ignore_ascii_case(&action.letter()))
            })
            .collect();
        Ok(Self::new(topic, actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Capability {
        s.parse().unwrap()
    }

    #[test]
    fn parses_bare_area() {
        let capability = parse("capability(rdf,'CRUD')");
        assert_eq!(capability.topic, CapabilityTopic::new("rdf"));
        assert_eq!(capability.actions.to_string(), "CRUD");
    }

    #[test]
    fn parses_subject_and_scope() {
        let capability = parse("capability(rdf(code,subproject),'V')");
        assert_eq!(
            capability.topic,
            CapabilityTopic::new("rdf")
                .with_subject("code")
                .with_scope("subproject")
        );
        assert_eq!(capability.actions.to_string(), "V");
    }

    #[test]
    fn well_known_areas_parse() {
        use crate::areas;

        for area in [
            areas::RDF,
            areas::PM,
            areas::UM,
            areas::SYS,
            areas::CFORM,
            areas::RBAC,
        ] {
            let capability = parse(&format!("capability({area},'R')"));
            assert_eq!(capability.topic.area, area);
        }
    }

    #[test]
    fn accepts_both_quote_styles() {
        assert_eq!(parse("capability(pm,'CR')"), parse("capability(pm,\"CR\")"));
    }

    #[test]
    fn letters_match_case_insensitively() {
        assert_eq!(parse("capability(um,'crud')").actions.to_string(), "CRUD");
    }

    #[test]
    fn letters_outside_the_alphabet_are_skipped() {
        assert_eq!(parse("capability(um,'CXR')").actions.to_string(), "CR");
    }

    #[test]
    fn serializes_in_canonical_letter_order() {
        let capability = Capability::new(
            CapabilityTopic::new("rdf"),
            "DCV".parse().unwrap(),
        );
        assert_eq!(capability.to_string(), "capability(rdf,'CDV')");
    }

    #[test]
    fn blank_subject_is_not_rendered() {
        let capability = Capability::new(
            CapabilityTopic::new("rdf").with_subject("  "),
            "R".parse().unwrap(),
        );
        assert_eq!(capability.to_string(), "capability(rdf,'R')");
    }

    #[test]
    fn scope_without_subject_is_not_rendered() {
        let capability = Capability::new(
            CapabilityTopic::new("rdf").with_scope("subproject"),
            "R".parse().unwrap(),
        );
        assert_eq!(capability.to_string(), "capability(rdf,'R')");
    }

    #[test]
    fn round_trips_through_serialization() {
        for expression in [
            "capability(rdf,'CRUDV')",
            "capability(rdf(lexicalization),'CRUD')",
            "capability(rbac(role,subproject),'RV')",
            "capability(sys(metadataRegistry),'R')",
        ] {
            let capability = parse(expression);
            assert_eq!(capability.to_string(), expression);
            assert_eq!(parse(&capability.to_string()), capability);
        }
    }

    #[test]
    fn serialization_is_idempotent() {
        let capability = parse("capability(CFORM(form), \"dc\")");
        let once = capability.to_string();
        assert_eq!(parse(&once).to_string(), once);
    }

    #[test]
    fn rejects_missing_wrapper() {
        for input in ["rdf", "capability rdf 'CRUD'", "capability(rdf,'CRUD'"] {
            assert!(matches!(
                input.parse::<Capability>().unwrap_err(),
                CapabilityParseError::MissingWrapper(raw) if raw == input
            ));
        }
    }

    #[test]
    fn rejects_missing_action_group() {
        assert!(matches!(
            "capability(rdf)".parse::<Capability>().unwrap_err(),
            CapabilityParseError::MissingActions(_)
        ));
    }

    #[test]
    fn rejects_malformed_topic() {
        assert!(matches!(
            "capability(rdf(code,'CRUD')".parse::<Capability>().unwrap_err(),
            CapabilityParseError::MalformedTopic(_)
        ));
    }

    #[test]
    fn empty_action_set_fails_validation() {
        let capability = parse("capability(rdf,'')");
        assert!(!capability.is_valid());
        assert_eq!(capability.validate(), Err(CapabilityValidationError));
        assert!(parse("capability(rdf,'R')").validate().is_ok());
    }
}
