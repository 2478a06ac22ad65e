use crate::core::BodyHandle;
use crate::math::Axis;
use bitflags::bitflags;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// One of the four sides a contact can be sensed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward +x (right)
    XPos,

    /// Toward -x (left)
    XNeg,

    /// Toward +y (down, the floor side)
    YPos,

    /// Toward -y (up, the ceiling side)
    YNeg,
}

impl Direction {
    /// All directions in sensing order
    pub const ALL: [Direction; 4] = [Direction::XPos, Direction::XNeg, Direction::YPos, Direction::YNeg];

    /// Axis the direction lies on
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::XPos | Direction::XNeg => Axis::X,
            Direction::YPos | Direction::YNeg => Axis::Y,
        }
    }

    /// +1.0 or -1.0
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::XPos | Direction::YPos => 1.0,
            Direction::XNeg | Direction::YNeg => -1.0,
        }
    }

    /// Builds a direction from an axis and the sign of `sign`
    #[inline]
    pub fn from_axis_sign(axis: Axis, sign: f32) -> Self {
        match (axis, sign >= 0.0) {
            (Axis::X, true) => Direction::XPos,
            (Axis::X, false) => Direction::XNeg,
            (Axis::Y, true) => Direction::YPos,
            (Axis::Y, false) => Direction::YNeg,
        }
    }

    /// Flag bit matching this direction
    #[inline]
    pub fn flag(self) -> ContactFlags {
        match self {
            Direction::XPos => ContactFlags::X_POS,
            Direction::XNeg => ContactFlags::X_NEG,
            Direction::YPos => ContactFlags::Y_POS,
            Direction::YNeg => ContactFlags::Y_NEG,
        }
    }
}

bitflags! {
    /// Which sides of a body currently touch something
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct ContactFlags: u8 {
        const X_POS = 0x01;
        const X_NEG = 0x02;
        const Y_POS = 0x04;
        const Y_NEG = 0x08;
    }
}

impl ContactFlags {
    /// Arrow glyphs for a debug line, `-` for an empty side (`<^v>` order)
    pub fn arrows(self) -> String {
        [
            (ContactFlags::X_NEG, '<'),
            (ContactFlags::Y_NEG, '^'),
            (ContactFlags::Y_POS, 'v'),
            (ContactFlags::X_POS, '>'),
        ]
        .iter()
        .map(|&(flag, glyph)| if self.contains(flag) { glyph } else { '-' })
        .collect()
    }
}

/// The bodies adjacent to a body's four sides during the current tick
///
/// Slots hold handles, not references. They are overwritten wholesale by
/// every sensing pass and carry nothing over from earlier ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub x_pos: Option<BodyHandle>,
    pub x_neg: Option<BodyHandle>,
    pub y_pos: Option<BodyHandle>,
    pub y_neg: Option<BodyHandle>,
}

impl Contacts {
    /// No contact on any side
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the slot for a direction
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<BodyHandle> {
        match direction {
            Direction::XPos => self.x_pos,
            Direction::XNeg => self.x_neg,
            Direction::YPos => self.y_pos,
            Direction::YNeg => self.y_neg,
        }
    }

    /// Overwrites the slot for a direction
    #[inline]
    pub fn set(&mut self, direction: Direction, contact: Option<BodyHandle>) {
        match direction {
            Direction::XPos => self.x_pos = contact,
            Direction::XNeg => self.x_neg = contact,
            Direction::YPos => self.y_pos = contact,
            Direction::YNeg => self.y_neg = contact,
        }
    }

    /// Standing on something
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.y_pos.is_some()
    }

    /// The contact on the y axis, preferring the floor side
    #[inline]
    pub fn vertical(&self) -> Option<BodyHandle> {
        self.y_pos.or(self.y_neg)
    }

    /// The contact on the x axis, preferring the +x side
    #[inline]
    pub fn horizontal(&self) -> Option<BodyHandle> {
        self.x_pos.or(self.x_neg)
    }

    /// Compact flag view, for observers that only need which sides touch
    pub fn flags(&self) -> ContactFlags {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.get(direction).is_some())
            .fold(ContactFlags::empty(), |flags, &direction| flags | direction.flag())
    }
}
