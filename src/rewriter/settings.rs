use crate::html::VoidElementSet;

/// Knobs for one expansion run.
///
/// ```
/// use stitch_html::Settings;
///
/// let settings = Settings {
///     indent_width: 2,
///     ..Settings::default()
/// };
/// #
/// # let _ = settings;
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Opening delimiter of a substitution marker. Must be non-empty.
    pub start_seq: String,

    /// Closing delimiter of a substitution marker. Must be non-empty, and
    /// the caller has to make sure it does not ambiguously prefix
    /// legitimate literal content.
    pub end_seq: String,

    /// Spaces per nesting level in serialized output.
    pub indent_width: usize,

    /// Upper bound on expansion scan iterations. The guard is a blunt
    /// safety valve against circularly dependent components, not a cycle
    /// detector: a legitimately enormous expansion can trip it too, in
    /// which case raise the bound.
    pub loop_bound: usize,

    /// Element names treated as void (childless, never closed).
    pub void_elements: VoidElementSet,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            start_seq: "#[".to_string(),
            end_seq: "]".to_string(),
            indent_width: 4,
            loop_bound: 1000,
            void_elements: VoidElementSet::default(),
        }
    }
}
