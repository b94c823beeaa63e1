//! Stock panel layouts.

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::grid::GridLayout;

const GRID_32X16: GridLayout = GridLayout::from_parts(32, 16, 1, -1.0 / 8.0);
const GRID_64X32: GridLayout = GridLayout::from_parts(64, 16, 2, -1.0 / 16.0);

/// A layout that ships with the library.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// A single 32x16 grid, scaled by -1/8.
    #[default]
    Grid32x16,
    /// Two 64x16 grids stacked into a 64x32 panel, scaled by -1/16.
    Grid64x32,
}

impl Preset {
    /// Every known preset.
    pub const ALL: [Preset; 2] = [Preset::Grid32x16, Preset::Grid64x32];

    /// The name used in configuration.
    pub const fn name(&self) -> &'static str {
        match self {
            Preset::Grid32x16 => "grid32x16",
            Preset::Grid64x32 => "grid64x32",
        }
    }

    /// Builds the layout for this preset.
    pub const fn layout(&self) -> GridLayout {
        match self {
            Preset::Grid32x16 => GRID_32X16,
            Preset::Grid64x32 => GRID_64X32,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(LayoutError::UnknownPreset("expected grid32x16 or grid64x32"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        let small = Preset::Grid32x16.layout();
        assert_eq!((small.width(), small.height(), small.sub_grids()), (32, 16, 1));
        assert_eq!(small.len(), 512);
        assert_eq!(small.scale(), -0.125);
        assert_eq!(small.center(), (15.5, 7.5));

        let large = Preset::Grid64x32.layout();
        assert_eq!((large.width(), large.height(), large.sub_grids()), (64, 32, 2));
        assert_eq!(large.len(), 2048);
        assert_eq!(large.scale(), -0.0625);
        assert_eq!(large.center(), (31.5, 15.5));
    }

    #[test]
    fn test_presets_pass_validation() {
        assert_eq!(GridLayout::new(32, 16, 1, -0.125), Ok(Preset::Grid32x16.layout()));
        assert_eq!(GridLayout::new(64, 16, 2, -0.0625), Ok(Preset::Grid64x32.layout()));
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("grid32x16".parse::<Preset>(), Ok(Preset::Grid32x16));
        assert_eq!(" GRID64x32 ".parse::<Preset>(), Ok(Preset::Grid64x32));
        assert!(matches!(
            "grid16x16".parse::<Preset>(),
            Err(LayoutError::UnknownPreset(_))
        ));
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }
}
