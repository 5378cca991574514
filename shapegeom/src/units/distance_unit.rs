use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a [DistanceUnit] from an unrecognized name or symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distance unit: '{0}'")]
pub struct ParseDistanceUnitError(pub String);

/// Physical length unit with a fixed conversion factor to meters (the canonical unit).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    #[default]
    Meters,
    Millimeters,
    Centimeters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
    /// Typographic point, 1/72 inch.
    Points,
    /// 12 points, 1/6 inch.
    Picas,
}

impl DistanceUnit {
    /// Every unit, in code order (see [DistanceUnit::to_u32]).
    pub const ALL: [DistanceUnit; 11] = [
        DistanceUnit::Meters,
        DistanceUnit::Millimeters,
        DistanceUnit::Centimeters,
        DistanceUnit::Kilometers,
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Points,
        DistanceUnit::Picas,
    ];

    /// Length of one of this unit in meters.
    pub fn meters_per_unit(self) -> f64 {
        const INCH: f64 = 0.0254;
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Inches => INCH,
            DistanceUnit::Feet => 12.0 * INCH,
            DistanceUnit::Yards => 36.0 * INCH,
            DistanceUnit::Miles => 63_360.0 * INCH,
            DistanceUnit::NauticalMiles => 1852.0,
            DistanceUnit::Points => INCH / 72.0,
            DistanceUnit::Picas => INCH / 6.0,
        }
    }

    /// Short symbol used when formatting values.
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Yards => "yd",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
            DistanceUnit::Points => "pt",
            DistanceUnit::Picas => "pc",
        }
    }

    /// Plural lowercase name, e.g. `"nautical miles"`.
    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "meters",
            DistanceUnit::Millimeters => "millimeters",
            DistanceUnit::Centimeters => "centimeters",
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Inches => "inches",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Yards => "yards",
            DistanceUnit::Miles => "miles",
            DistanceUnit::NauticalMiles => "nautical miles",
            DistanceUnit::Points => "points",
            DistanceUnit::Picas => "picas",
        }
    }

    /// Stable numeric code, the position in [DistanceUnit::ALL].
    #[inline]
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Inverse of [DistanceUnit::to_u32], `None` for an unknown code.
    #[inline]
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = ParseDistanceUnitError;

    /// Accepts symbols and singular or plural names, case insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shapegeom::units::*;
    /// assert_eq!("ft".parse(), Ok(DistanceUnit::Feet));
    /// assert_eq!("Nautical Mile".parse(), Ok(DistanceUnit::NauticalMiles));
    /// assert!("furlong".parse::<DistanceUnit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => DistanceUnit::Meters,
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                DistanceUnit::Millimeters
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                DistanceUnit::Centimeters
            }
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                DistanceUnit::Kilometers
            }
            "in" | "inch" | "inches" => DistanceUnit::Inches,
            "ft" | "foot" | "feet" => DistanceUnit::Feet,
            "yd" | "yard" | "yards" => DistanceUnit::Yards,
            "mi" | "mile" | "miles" => DistanceUnit::Miles,
            "nmi" | "nautical mile" | "nautical miles" => DistanceUnit::NauticalMiles,
            "pt" | "point" | "points" => DistanceUnit::Points,
            "pc" | "pica" | "picas" => DistanceUnit::Picas,
            _ => return Err(ParseDistanceUnitError(s.to_string())),
        };

        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for (i, unit) in DistanceUnit::ALL.iter().enumerate() {
            assert_eq!(unit.to_u32(), i as u32);
            assert_eq!(DistanceUnit::from_u32(i as u32), Some(*unit));
        }
        assert_eq!(DistanceUnit::from_u32(DistanceUnit::ALL.len() as u32), None);
    }

    #[test]
    fn display_parses_back() {
        for unit in DistanceUnit::ALL {
            assert_eq!(unit.to_string().parse(), Ok(unit));
            assert_eq!(unit.name().parse(), Ok(unit));
            assert_eq!(unit.name().to_uppercase().parse(), Ok(unit));
        }
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = "parsec".parse::<DistanceUnit>().unwrap_err();
        assert_eq!(err, ParseDistanceUnitError("parsec".to_string()));
        assert_eq!(err.to_string(), "unknown distance unit: 'parsec'");
    }

    #[test]
    fn factors_are_positive() {
        for unit in DistanceUnit::ALL {
            assert!(unit.meters_per_unit() > 0.0);
        }
        assert_eq!(DistanceUnit::Meters.meters_per_unit(), 1.0);
    }
}
