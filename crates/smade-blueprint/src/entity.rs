//! Entity classification stored in the header.

use std::fmt;

use smade_tag::CodecError;

/// What kind of entity a blueprint describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EntityType {
    /// A ship.
    Ship = 0,
    /// A shop.
    Shop = 1,
    /// A space station.
    Station = 2,
    /// An asteroid.
    Asteroid = 3,
    /// A planet segment.
    Planet = 4,
}

impl EntityType {
    /// Map a wire code to its entity type.
    pub fn from_code(code: i32) -> Result<Self, CodecError> {
        match code {
            0 => Ok(Self::Ship),
            1 => Ok(Self::Shop),
            2 => Ok(Self::Station),
            3 => Ok(Self::Asteroid),
            4 => Ok(Self::Planet),
            _ => Err(CodecError::InvalidEnumValue {
                field: "entity type",
                value: code.into(),
            }),
        }
    }

    /// The wire code of this entity type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Lowercase name, as shown by the reporting tool.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ship => "ship",
            Self::Shop => "shop",
            Self::Station => "station",
            Self::Asteroid => "asteroid",
            Self::Planet => "planet",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for code in 0..5 {
            assert_eq!(EntityType::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert!(matches!(
            EntityType::from_code(5),
            Err(CodecError::InvalidEnumValue { value: 5, .. })
        ));
        assert!(matches!(
            EntityType::from_code(-1),
            Err(CodecError::InvalidEnumValue { value: -1, .. })
        ));
    }
}
