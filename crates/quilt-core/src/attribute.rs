//! Output attribute descriptors and classifier results.
//!
//! Classifiers translate one layout-document key/value pair into at most one
//! [`Attribute`] in the generated markup. Their outcome is the tagged
//! [`Classification`] so callers can distinguish "not my concern" from
//! "recognized but intentionally silent". Per-node results accumulate into
//! an [`AttributeSet`] with last-wins merge semantics.

use std::fmt;

use indexmap::IndexMap;

/// The attribute namespace in the generated markup.
///
/// Determines the serialized prefix (`android:`, `app:`, `tools:`) and the
/// `xmlns` declaration required on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    /// The platform-default `android:` namespace.
    #[default]
    Android,
    /// The app/library `app:` namespace (custom and compat attributes).
    App,
    /// The tooling-only `tools:` namespace, ignored at runtime.
    Tools,
}

impl Namespace {
    /// Returns the serialized attribute prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::App => "app",
            Self::Tools => "tools",
        }
    }

    /// Returns the `xmlns` URI for this namespace.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::Android => "http://schemas.android.com/apk/res/android",
            Self::App => "http://schemas.android.com/apk/res-auto",
            Self::Tools => "http://schemas.android.com/tools",
        }
    }
}

/// One resolved output attribute: namespace, local name, and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Namespace,
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Creates an attribute in the given namespace.
    pub fn new(
        namespace: Namespace,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an `android:` attribute.
    pub fn android(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Namespace::Android, name, value)
    }

    /// Creates an `app:` attribute.
    pub fn app(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Namespace::App, name, value)
    }

    /// Creates a `tools:` attribute.
    pub fn tools(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Namespace::Tools, name, value)
    }

    /// Returns the fully qualified serialized name (`android:padding`).
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace.prefix(), self.name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.qualified_name(), self.value)
    }
}

/// The outcome of offering one key/value pair to a classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The classifier recognized the key and produced an attribute.
    Matched(Attribute),
    /// The key is not this classifier's concern; a later stage may claim it.
    Deferred,
    /// The key is recognized but intentionally produces no attribute here
    /// (e.g. event handlers consumed by a separate wiring stage).
    Suppressed,
}

impl Classification {
    /// Shorthand for `Matched` with an `android:` attribute.
    pub fn android(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Matched(Attribute::android(name, value))
    }

    /// Shorthand for `Matched` with an `app:` attribute.
    pub fn app(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Matched(Attribute::app(name, value))
    }

    /// Returns `true` for [`Classification::Deferred`].
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }

    /// Returns the matched attribute, if any.
    pub fn into_matched(self) -> Option<Attribute> {
        match self {
            Self::Matched(attr) => Some(attr),
            _ => None,
        }
    }
}

/// An ordered, name-unique set of output attributes for one node.
///
/// Attributes are keyed by their qualified name. [`AttributeSet::insert`]
/// implements the last-wins rule used across classifier stages, while
/// [`AttributeSet::merge_flag`] pipe-joins flag values (used for gravity
/// flags that accumulate from several alignment keys).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    attrs: IndexMap<String, Attribute>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, replacing any previous value for the same
    /// qualified name. Insertion order of first occurrence is preserved.
    pub fn insert(&mut self, attr: Attribute) {
        self.attrs.insert(attr.qualified_name(), attr);
    }

    /// Merges a flag-valued attribute: if the qualified name is already
    /// present, the new value is pipe-joined onto the existing one unless
    /// already contained.
    pub fn merge_flag(&mut self, attr: Attribute) {
        match self.attrs.get_mut(&attr.qualified_name()) {
            Some(existing) => {
                let already = existing.value.split('|').any(|flag| flag == attr.value);
                if !already {
                    existing.value = format!("{}|{}", existing.value, attr.value);
                }
            }
            None => self.insert(attr),
        }
    }

    /// Looks up an attribute by namespace and local name.
    pub fn get(&self, namespace: Namespace, name: &str) -> Option<&Attribute> {
        self.attrs.get(&format!("{}:{name}", namespace.prefix()))
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.values()
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if the set contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = indexmap::map::Values<'a, String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.values()
    }
}
