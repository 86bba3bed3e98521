//! Engine options: one toggle per family pass plus the selector
//! normalizations. Passed explicitly into the driver at call time — the
//! engine holds no shared option state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Border/outline color+style+width triplets.
    pub csw_combine: bool,
    /// Aural cue/pause before+after pairs.
    pub auralcp_combine: bool,
    /// Directional margin/padding quads.
    pub mp_combine: bool,
    /// Four identical border edges into one `border`.
    pub border_combine: bool,
    /// Font shorthand assembly.
    pub font_combine: bool,
    /// Background shorthand assembly.
    pub background_combine: bool,
    /// List-style shorthand assembly.
    pub list_combine: bool,
    /// Lowercase bare element names in selectors.
    pub lowercase_selectors: bool,
    /// Space after `:first-letter`/`:first-line` for old IE.
    pub pseudo_space: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            csw_combine: true,
            auralcp_combine: true,
            mp_combine: true,
            border_combine: true,
            font_combine: true,
            background_combine: true,
            list_combine: true,
            lowercase_selectors: true,
            pseudo_space: true,
        }
    }
}
