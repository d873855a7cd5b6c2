//! Instruction-set state.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The active instruction-set state. It decides the word width and which
/// encoding table a word is decoded against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 32-bit A32 encodings.
    Arm,
    /// 16-bit T16 encodings.
    Thumb,
    /// 32-bit T32 encodings.
    Thumb2,
    /// ThumbEE. 16-bit words decode against the ThumbEE table first and
    /// fall through to the Thumb table.
    ThumbEe,
}

impl Mode {
    /// Width in bits of an instruction word in this state.
    ///
    /// `ThumbEe` reports 16, the width of its narrow words. Wide ThumbEE
    /// words travel through [`Mode::Thumb2`]-style decoding.
    #[must_use]
    pub const fn word_width(self) -> u8 {
        match self {
            Self::Arm | Self::Thumb2 => 32,
            Self::Thumb | Self::ThumbEe => 16,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Arm),
            1 => Ok(Self::Thumb),
            2 => Ok(Self::Thumb2),
            3 => Ok(Self::ThumbEe),
            _ => Err(format!("{value} is not an instruction-set state")),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Arm => "ARM",
            Self::Thumb => "Thumb",
            Self::Thumb2 => "Thumb-2",
            Self::ThumbEe => "ThumbEE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn word_widths() {
        assert_eq!(Mode::Arm.word_width(), 32);
        assert_eq!(Mode::Thumb.word_width(), 16);
        assert_eq!(Mode::Thumb2.word_width(), 32);
        assert_eq!(Mode::ThumbEe.word_width(), 16);
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::ThumbEe.to_string(), "ThumbEE");
        assert_eq!(Mode::Thumb2.to_string(), "Thumb-2");
    }

    #[test]
    fn from_raw() {
        assert_eq!(Mode::try_from(0), Ok(Mode::Arm));
        assert_eq!(Mode::try_from(3), Ok(Mode::ThumbEe));
        assert!(Mode::try_from(4).is_err());
    }
}
