//! Size, color and height combinations
//!
//! The full option space is the cartesian product of every size, color and
//! height in [`super::options`]. Combinations are addressed by a flat index
//! in `[0, total_combinations())`, ordered size-major (width, then length),
//! then color, then height. Unranking an index yields the combination without
//! materializing the whole product.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::options::{
    COLORS, HEIGHTS, LENGTH_COUNT, LENGTH_MAX, LENGTH_MIN, LENGTH_STEP, WIDTH_COUNT, WIDTH_MAX,
    WIDTH_MIN, WIDTH_STEP,
};
use crate::error::{Result, SheetgenError};

/// Sheet size in centimeters, displayed as `"<width>x<length>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Size {
    pub width: u32,
    pub length: u32,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.length)
    }
}

impl FromStr for Size {
    type Err = SheetgenError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, length) = s
            .split_once('x')
            .ok_or_else(|| SheetgenError::invalid(format!("invalid size: {}", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| SheetgenError::invalid(format!("invalid size: {}", s)))
        };
        Ok(Size {
            width: parse(width)?,
            length: parse(length)?,
        })
    }
}

/// Mattress height, stored in millimeters
///
/// Parses `"<n>cm"` and `"<n>mm"`; displays in centimeters when whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Height {
    mm: u32,
}

impl Height {
    pub fn from_cm(cm: u32) -> Self {
        Height { mm: cm * 10 }
    }

    pub fn millimeters(&self) -> u32 {
        self.mm
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mm % 10 == 0 {
            write!(f, "{}cm", self.mm / 10)
        } else {
            write!(f, "{}mm", self.mm)
        }
    }
}

impl FromStr for Height {
    type Err = SheetgenError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || SheetgenError::invalid(format!("invalid height: {}", s));
        if let Some(cm) = s.strip_suffix("cm") {
            let cm: u32 = cm.trim().parse().map_err(|_| invalid())?;
            Ok(Height::from_cm(cm))
        } else if let Some(mm) = s.strip_suffix("mm") {
            let mm: u32 = mm.trim().parse().map_err(|_| invalid())?;
            Ok(Height { mm })
        } else {
            Err(invalid())
        }
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(Size);
string_serde!(Height);

/// One concrete size / color / height triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantCombination {
    #[serde(rename = "Size")]
    pub size: Size,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Height")]
    pub height: Height,
}

impl VariantCombination {
    /// Variant title `"<Size> / <Color> / <Height>"`
    pub fn title(&self) -> String {
        format!("{} / {} / {}", self.size, self.color, self.height)
    }
}

/// Inclusive numeric range with a fixed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

/// Width and length ranges that make up the size catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub width: DimensionRange,
    pub length: DimensionRange,
}

/// Aggregate counts of the option space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationReport {
    pub size_count: usize,
    pub color_count: usize,
    pub height_count: usize,
    pub total_combinations: usize,
    pub size_bounds: SizeBounds,
}

impl fmt::Display for CombinationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &self.size_bounds.width;
        let l = &self.size_bounds.length;
        writeln!(f, "Bed sheet option space")?;
        writeln!(
            f,
            "  Sizes:   {:>6}  (width {}-{} step {}, length {}-{} step {})",
            self.size_count, w.min, w.max, w.step, l.min, l.max, l.step
        )?;
        writeln!(f, "  Colors:  {:>6}", self.color_count)?;
        writeln!(f, "  Heights: {:>6}", self.height_count)?;
        write!(f, "  Total combinations: {}", self.total_combinations)
    }
}

/// Count the size, color and height options and their product
pub fn enumerate_combinations() -> CombinationReport {
    let size_count = WIDTH_COUNT * LENGTH_COUNT;
    CombinationReport {
        size_count,
        color_count: COLORS.len(),
        height_count: HEIGHTS.len(),
        total_combinations: size_count * COLORS.len() * HEIGHTS.len(),
        size_bounds: SizeBounds {
            width: DimensionRange {
                min: WIDTH_MIN,
                max: WIDTH_MAX,
                step: WIDTH_STEP,
            },
            length: DimensionRange {
                min: LENGTH_MIN,
                max: LENGTH_MAX,
                step: LENGTH_STEP,
            },
        },
    }
}

/// Total number of distinct combinations
pub fn total_combinations() -> usize {
    WIDTH_COUNT * LENGTH_COUNT * COLORS.len() * HEIGHTS.len()
}

/// Every size in catalog order (width-major)
pub fn all_sizes() -> Vec<Size> {
    (0..WIDTH_COUNT * LENGTH_COUNT).map(size_at).collect()
}

fn size_at(index: usize) -> Size {
    Size {
        width: WIDTH_MIN + (index / LENGTH_COUNT) as u32 * WIDTH_STEP,
        length: LENGTH_MIN + (index % LENGTH_COUNT) as u32 * LENGTH_STEP,
    }
}

/// Combination at flat `index`, or `None` past the end
pub fn combination_at(index: usize) -> Option<VariantCombination> {
    if index >= total_combinations() {
        return None;
    }
    let per_size = COLORS.len() * HEIGHTS.len();
    let rest = index % per_size;
    let height = HEIGHTS[rest % HEIGHTS.len()].parse().ok()?;
    Some(VariantCombination {
        size: size_at(index / per_size),
        color: COLORS[rest / HEIGHTS.len()].to_string(),
        height,
    })
}

/// Planned output volume of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePlan {
    pub products: usize,
    /// Requested variants per product, capped at the total combinations
    pub variants_per_product: usize,
    pub total_variants: usize,
    /// One price row per variant and currency
    pub total_prices: usize,
    /// Share of the option space each product covers
    pub coverage_percent: f64,
}

impl fmt::Display for ScalePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation plan")?;
        writeln!(f, "  Products:             {}", self.products)?;
        writeln!(
            f,
            "  Variants per product: {} ({:.2}% of combinations)",
            self.variants_per_product, self.coverage_percent
        )?;
        writeln!(f, "  Total variants:       {}", self.total_variants)?;
        write!(f, "  Total prices:         {}", self.total_prices)
    }
}

/// Compute how many records a run with these parameters produces
pub fn plan_scale(products: usize, variants_per_product: usize, currencies: usize) -> ScalePlan {
    let total = total_combinations();
    let per_product = variants_per_product.min(total);
    let total_variants = products * per_product;
    ScalePlan {
        products,
        variants_per_product: per_product,
        total_variants,
        total_prices: total_variants * currencies,
        coverage_percent: per_product as f64 * 100.0 / total as f64,
    }
}
