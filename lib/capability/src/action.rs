use crate::CapabilityActionParseError;
use std::fmt;
use std::str::FromStr;

/// A single operation a role may perform on a permission area.
///
/// Actions are written as the letters `C`, `R`, `U`, `D` and `V` inside a
/// capability expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityAction {
    Create,
    Read,
    Update,
    Delete,
    Validate,
}

impl CapabilityAction {
    /// All actions in canonical serialization order.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Read,
        Self::Update,
        Self::Delete,
        Self::Validate,
    ];

    /// Returns the letter used for this action in serialized expressions.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Create => 'C',
            Self::Read => 'R',
            Self::Update => 'U',
            Self::Delete => 'D',
            Self::Validate => 'V',
        }
    }

    /// Resolves an action from its letter, ignoring case.
    #[inline]
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Self::Create),
            'R' => Some(Self::Read),
            'U' => Some(Self::Update),
            'D' => Some(Self::Delete),
            'V' => Some(Self::Validate),
            _ => None,
        }
    }

    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CapabilityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A set of [CapabilityAction]s.
///
/// The set is insensitive to insertion order: iteration and [Display](fmt::Display)
/// always follow the canonical `C`, `R`, `U`, `D`, `V` order, so serializing a
/// capability is deterministic no matter how its actions were collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilityActionSet(u8);

impl CapabilityActionSet {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a set granting all five actions.
    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        Self::new()
            .with(CapabilityAction::Create)
            .with(CapabilityAction::Read)
            .with(CapabilityAction::Update)
            .with(CapabilityAction::Delete)
            .with(CapabilityAction::Validate)
    }

    /// Returns a copy of this set with `action` granted.
    #[inline]
    #[must_use]
    pub const fn with(self, action: CapabilityAction) -> Self {
        Self(self.0 | action.mask())
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The number of granted actions.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, action: CapabilityAction) -> bool {
        self.0 & action.mask() != 0
    }

    #[inline]
    pub fn insert(&mut self, action: CapabilityAction) {
        self.0 |= action.mask();
    }

    #[inline]
    pub fn remove(&mut self, action: CapabilityAction) {
        self.0 &= !action.mask();
    }

    /// Iterates over the granted actions in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CapabilityAction> {
        CapabilityAction::ALL
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

impl IntoIterator for CapabilityActionSet {
    type Item = CapabilityAction;
    type IntoIter = std::vec::IntoIter<CapabilityAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

impl FromIterator<CapabilityAction> for CapabilityActionSet {
    fn from_iter<T: IntoIterator<Item = CapabilityAction>>(iter: T) -> Self {
        let mut set = Self::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl fmt::Display for CapabilityActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in self.iter() {
            write!(f, "{}", action.letter())?;
        }
        Ok(())
    }
}

impl FromStr for CapabilityActionSet {
    type Err = CapabilityActionParseError;

    /// Parses a bare letter string like `CRUD` or `crv`.
    ///
    /// Duplicated letters are tolerated, letters outside the alphabet are
    /// rejected. This is stricter than parsing a full capability expression,
    /// which only looks for the known letters and skips everything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::new();
        for letter in s.chars() {
            let action = CapabilityAction::from_letter(letter)
                .ok_or(CapabilityActionParseError(letter))?;
            set.insert(action);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_independent_of_insertion_order() {
        let set: CapabilityActionSet = [
            CapabilityAction::Delete,
            CapabilityAction::Create,
            CapabilityAction::Validate,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_string(), "CDV");
    }

    #[test]
    fn from_str_ignores_case_and_duplicates() {
        let set = CapabilityActionSet::from_str("rcCr").unwrap();
        assert_eq!(set.to_string(), "CR");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_str_rejects_unknown_letters() {
        assert_eq!(
            CapabilityActionSet::from_str("CRX").unwrap_err(),
            CapabilityActionParseError('X')
        );
    }

    #[test]
    fn insert_and_remove() {
        let mut set = CapabilityActionSet::new();
        assert!(set.is_empty());
        set.insert(CapabilityAction::Read);
        set.insert(CapabilityAction::Read);
        assert_eq!(set.len(), 1);
        assert!(set.contains(CapabilityAction::Read));
        set.remove(CapabilityAction::Read);
        assert!(set.is_empty());
    }

    #[test]
    fn all_contains_every_action() {
        let set = CapabilityActionSet::all();
        assert_eq!(set.to_string(), "CRUDV");
        assert_eq!(set.len(), 5);
    }
}
