use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points (1/72 of an inch). All layout arithmetic in this crate is
/// done in points, with the origin at the bottom-left of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
pub struct In(pub f32);

/// A length in twips (1/20 of a point, the "DXA" unit of OOXML page setup)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Add, Sub, Display, From, Into)]
pub struct Twip(pub i32);

impl Pt {
    /// The smaller of two lengths
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl From<In> for Pt {
    fn from(i: In) -> Pt {
        Pt(i.0 * 72.0)
    }
}

impl From<Twip> for Pt {
    fn from(t: Twip) -> Pt {
        Pt(t.0 as f32 / 20.0)
    }
}

impl From<Pt> for Twip {
    fn from(p: Pt) -> Twip {
        Twip((p.0 * 20.0).round() as i32)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields a unitless ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_and_twips_agree_on_letter_geometry() {
        assert_eq!(Pt::from(In(8.5)), Pt(612.0));
        assert_eq!(Pt::from(Twip(12240)), Pt(612.0));
        assert_eq!(Pt::from(Twip(1440)), Pt(72.0));
        assert_eq!(Twip::from(Pt(792.0)), Twip(15840));
    }

    #[test]
    fn arithmetic() {
        let sum: Pt = [Pt(1.0), Pt(2.5), Pt(3.5)].into_iter().sum();
        assert_eq!(sum, Pt(7.0));
        assert_eq!(Pt(11.0) * 1.4, Pt(11.0 * 1.4));
        assert_eq!(Pt(10.0) / Pt(4.0), 2.5);
        assert_eq!(-Pt(2.0), Pt(-2.0));
    }
}
