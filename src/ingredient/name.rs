use std::collections::BTreeSet;

/// Characters a name word may contain besides letters.
pub const SPECIAL_CHARACTERS: [char; 3] = ['\'', '(', ')'];

/// Substrings no name may contain, in any case.
///
/// These words are reserved for composed display names.
pub const FORBIDDEN_WORDS: [&str; 4] = ["with", "mixed", "cooled", "heated"];

/// Checks a simple or special ingredient name against the naming grammar.
///
/// A name is one or more words separated by single spaces. Each word may
/// start with one of [`SPECIAL_CHARACTERS`], followed by an uppercase letter
/// and then lowercase letters or special characters. Words are at least two
/// characters long; a single-word name needs at least three.
///
/// ```
/// use alchemy_lab::ingredient::is_valid_name;
///
/// assert!(is_valid_name("Beer"));
/// assert!(is_valid_name("Devil's Brew"));
/// assert!(is_valid_name("(Old) Rum"));
/// assert!(!is_valid_name("Ab"));
/// assert!(!is_valid_name("beer"));
/// assert!(!is_valid_name("Beer Withered"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let lowercase = name.to_lowercase();
    if FORBIDDEN_WORDS.iter().any(|word| lowercase.contains(word)) {
        return false;
    }

    let words: Vec<&str> = name.split(' ').collect();
    if let [single] = words.as_slice() {
        if single.chars().count() < 3 {
            return false;
        }
    }

    words.iter().all(|word| is_valid_word(word))
}

fn is_valid_word(word: &str) -> bool {
    if word.chars().count() < 2 {
        return false;
    }

    let mut chars = word.chars().peekable();
    chars.next_if(|c| SPECIAL_CHARACTERS.contains(c));

    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase() || SPECIAL_CHARACTERS.contains(&c))
}

/// The name of an ingredient type.
///
/// Holds an alphabetically ordered, deduplicated set of simple names and an
/// optional special name used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientName {
    simple: BTreeSet<String>,
    special: Option<String>,
}

impl IngredientName {
    /// Creates a name from simple names.
    ///
    /// Returns `None` if `names` is empty or any name breaks the grammar.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let simple: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if simple.is_empty() || !simple.iter().all(|name| is_valid_name(name)) {
            return None;
        }

        Some(Self {
            simple,
            special: None,
        })
    }

    /// Merges the simple names of several names, dropping special names.
    ///
    /// Returns `None` if no names are given.
    pub fn union<'a>(names: impl IntoIterator<Item = &'a IngredientName>) -> Option<Self> {
        let simple: BTreeSet<String> = names
            .into_iter()
            .flat_map(|name| name.simple.iter().cloned())
            .collect();

        (!simple.is_empty()).then_some(Self {
            simple,
            special: None,
        })
    }

    /// Sets the special name.
    ///
    /// A special name that breaks the grammar is ignored.
    #[must_use]
    pub fn with_special_name(mut self, special: impl Into<String>) -> Self {
        let special = special.into();
        if is_valid_name(&special) {
            self.special = Some(special);
        } else {
            tracing::warn!(%special, "ignoring invalid special name");
        }
        self
    }

    /// Returns the simple names in alphabetical order.
    pub fn simple_names(&self) -> impl Iterator<Item = &str> {
        self.simple.iter().map(String::as_str)
    }

    /// Returns the composed simple name.
    ///
    /// A single name is returned as is. Several names read
    /// `"A mixed with B, C and D"`.
    #[must_use]
    pub fn simple_name(&self) -> String {
        let mut names = self.simple_names();
        let Some(first) = names.next() else {
            return String::new();
        };

        let rest: Vec<&str> = names.collect();
        match rest.as_slice() {
            [] => first.to_owned(),
            [only] => format!("{first} mixed with {only}"),
            [init @ .., last] => format!("{first} mixed with {} and {last}", init.join(", ")),
        }
    }

    #[must_use]
    pub fn special_name(&self) -> Option<&str> {
        self.special.as_deref()
    }

    /// Returns the special name if set, otherwise the composed simple name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.special.clone().unwrap_or_else(|| self.simple_name())
    }

    /// Checks whether `name` is this name's composed simple or special name.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.special_name() == Some(name) || self.simple_name() == name
    }
}
