use crate::units::Pt;

/// Margins bound where layout functions may draw. Nothing in a sink enforces them; the
/// [`ContentBuilder`](crate::layout::ContentBuilder) keeps every baseline inside them
/// by breaking to a new page before a draw would cross the bottom margin.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
