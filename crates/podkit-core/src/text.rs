use std::fmt;

/// A stable identifier for one piece of user-facing text, with the English
/// default and a comment for translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextKey {
    pub id: &'static str,
    pub default_text: &'static str,
    pub comment: &'static str,
}

impl TextKey {
    pub const fn new(id: &'static str, default_text: &'static str, comment: &'static str) -> Self {
        Self {
            id,
            default_text,
            comment,
        }
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// The external key-to-string resolver. Implementations own the locale policy;
/// the domain only supplies keys.
pub trait Localize {
    fn resolve(&self, key: &TextKey) -> String;
}

/// Resolver that always answers with the English default text. This is the
/// fallback every `Display` impl in this crate goes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishText;

impl Localize for EnglishText {
    fn resolve(&self, key: &TextKey) -> String {
        key.default_text.to_string()
    }
}

/// Adapts a plain function or closure into a resolver, so tests and small
/// callers need no dedicated type.
#[derive(Debug, Clone, Copy)]
pub struct FnResolver<F>(pub F);

impl<F> Localize for FnResolver<F>
where
    F: Fn(&TextKey) -> String,
{
    fn resolve(&self, key: &TextKey) -> String {
        (self.0)(key)
    }
}
