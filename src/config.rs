//! Reflection options.

/// Schema used when a table is created without one.
pub const DEFAULT_SCHEMA: &str = "public";

/// Options controlling how a reflection run builds fields.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Strict flag given to every field the run creates.
    ///
    /// Off by default: conversions normalize bad input (zero, empty string,
    /// truncation, NULL) instead of failing. Turn it on when silently fixed
    /// values would hide application bugs.
    pub strict_values: bool,
    /// Run the enum label sub-query for enumerated columns.
    pub resolve_enum_values: bool,
}

impl LookupOptions {
    /// Create options with the lenient defaults.
    pub fn new() -> Self {
        Self {
            strict_values: false,
            resolve_enum_values: true,
        }
    }

    /// Set the strict flag applied to reflected fields.
    ///
    /// # Example
    ///
    /// ```
    /// use pg_dbtable_rs::LookupOptions;
    ///
    /// let options = LookupOptions::new().with_strict_values(true);
    /// assert!(options.strict_values);
    /// ```
    pub fn with_strict_values(mut self, strict: bool) -> Self {
        self.strict_values = strict;
        self
    }

    /// Enable or disable the enum label sub-query.
    pub fn with_enum_values(mut self, resolve: bool) -> Self {
        self.resolve_enum_values = resolve;
        self
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self::new()
    }
}
