//! Fixed option value catalogs for bed sheet products

/// Smallest sheet width in centimeters
pub const WIDTH_MIN: u32 = 70;
/// Largest sheet width in centimeters
pub const WIDTH_MAX: u32 = 220;
/// Width increment in centimeters
pub const WIDTH_STEP: u32 = 10;

/// Smallest sheet length in centimeters
pub const LENGTH_MIN: u32 = 180;
/// Largest sheet length in centimeters
pub const LENGTH_MAX: u32 = 240;
/// Length increment in centimeters
pub const LENGTH_STEP: u32 = 10;

/// Number of distinct widths (16)
pub const WIDTH_COUNT: usize = ((WIDTH_MAX - WIDTH_MIN) / WIDTH_STEP + 1) as usize;
/// Number of distinct lengths (7)
pub const LENGTH_COUNT: usize = ((LENGTH_MAX - LENGTH_MIN) / LENGTH_STEP + 1) as usize;

/// Option titles, in declaration order
pub const OPTION_SIZE: &str = "Size";
pub const OPTION_COLOR: &str = "Color";
pub const OPTION_HEIGHT: &str = "Height";

pub const COLORS: [&str; 50] = [
    "White", "Ivory", "Cream", "Beige", "Sand",
    "Taupe", "Stone", "Silver", "Light Grey", "Charcoal",
    "Graphite", "Black", "Navy", "Royal Blue", "Sky Blue",
    "Powder Blue", "Teal", "Aqua", "Turquoise", "Sage",
    "Olive", "Forest Green", "Mint", "Emerald", "Lime",
    "Yellow", "Mustard", "Gold", "Peach", "Apricot",
    "Coral", "Orange", "Terracotta", "Rust", "Red",
    "Burgundy", "Wine", "Rose", "Blush", "Pink",
    "Fuchsia", "Lavender", "Lilac", "Plum", "Purple",
    "Mauve", "Chocolate", "Mocha", "Caramel", "Natural",
];

/// Mattress heights the fitted sheet accommodates
pub const HEIGHTS: [&str; 12] = [
    "15cm", "20cm", "25cm", "28cm", "30cm", "32cm",
    "35cm", "38cm", "40cm", "45cm", "50cm", "55cm",
];

/// Fabric types, assigned to products round robin
pub const SHEET_TYPES: [&str; 12] = [
    "Egyptian Cotton",
    "Percale",
    "Sateen",
    "Linen",
    "Bamboo",
    "Microfiber",
    "Flannel",
    "Jersey Knit",
    "Silk",
    "Tencel",
    "Organic Cotton",
    "Pima Cotton",
];

const SHEET_DESCRIPTIONS: [(&str, &str); 12] = [
    (
        "Egyptian Cotton",
        "Long-staple Egyptian cotton woven for a soft, breathable hand that gets better with every wash.",
    ),
    (
        "Percale",
        "Crisp one-over-one-under percale weave with a cool, matte finish for warm sleepers.",
    ),
    (
        "Sateen",
        "Four-over-one-under sateen weave with a silky sheen and a smooth, drapey feel.",
    ),
    (
        "Linen",
        "Stonewashed European flax linen, naturally temperature regulating with a relaxed, lived-in texture.",
    ),
    (
        "Bamboo",
        "Bamboo viscose sheets that stay cool to the touch and wick moisture through the night.",
    ),
    (
        "Microfiber",
        "Brushed microfiber that resists wrinkles, pilling and fading at an easy price.",
    ),
    (
        "Flannel",
        "Double-brushed cotton flannel for cozy warmth on the coldest nights.",
    ),
    (
        "Jersey Knit",
        "Stretchy jersey knit cotton that feels like your favorite t-shirt.",
    ),
    (
        "Silk",
        "Pure mulberry silk charmeuse, gentle on skin and hair with a lustrous finish.",
    ),
    (
        "Tencel",
        "TENCEL lyocell from sustainably sourced wood pulp, ultra smooth and breathable.",
    ),
    (
        "Organic Cotton",
        "GOTS certified organic cotton grown without synthetic pesticides, soft and durable.",
    ),
    (
        "Pima Cotton",
        "Extra-long staple Pima cotton for exceptional strength and a buttery-soft touch.",
    ),
];

/// Description used when a sheet type has no entry in the table
pub const FALLBACK_DESCRIPTION: &str =
    "Premium quality bed sheets designed for comfort and a great night's sleep.";

/// Images attached to every generated product
pub const PRODUCT_IMAGES: [&str; 4] = [
    "https://images.sheetgen.dev/sheets/sheet-set-front.png",
    "https://images.sheetgen.dev/sheets/sheet-set-back.png",
    "https://images.sheetgen.dev/sheets/sheet-set-detail.png",
    "https://images.sheetgen.dev/sheets/sheet-set-folded.png",
];

/// Look up the marketing description for a sheet type
pub fn description_for(sheet_type: &str) -> &'static str {
    SHEET_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == sheet_type)
        .map(|(_, text)| *text)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

/// Sheet type assigned to the product at `index`
pub fn sheet_type_for(index: usize) -> &'static str {
    SHEET_TYPES[index % SHEET_TYPES.len()]
}
