//! Bed sheet product synthesis
//!
//! Each product gets a sheet type (round robin over [`SHEET_TYPES`]) and a
//! uniformly random sample, without replacement, of the size / color / height
//! option space. Sampling draws distinct flat indices and unranks them, so the
//! 67 200-entry cartesian product is never built.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::index;

use super::combinations::{Height, Size, VariantCombination, combination_at, total_combinations};
use super::models::{
    Category, GenerateOptions, GeneratedProduct, GeneratedVariant, Price, PriceRange,
    ProductImage, ProductOption, SalesChannel, SalesChannelRef, ShippingProfile,
};
use super::options::{
    OPTION_COLOR, OPTION_HEIGHT, OPTION_SIZE, PRODUCT_IMAGES, SHEET_TYPES, description_for,
    sheet_type_for,
};
use crate::error::{Result, SheetgenError};
use crate::utils::{compact_upper, kebab_case, random_alphanumeric};

/// Category names preferred for sheet products, in order
pub const PREFERRED_CATEGORIES: [&str; 2] = ["Sheets", "Bedding"];

/// Length of the random SKU suffix
pub const SKU_SUFFIX_LENGTH: usize = 8;

const WEIGHT_GRAMS: std::ops::Range<u32> = 600..1000;

/// Generate `options.num_products` bed sheet products
///
/// The first sales channel is attached to every product; an empty list is
/// rejected with `InvalidArgument`. Categories resolve to "Sheets", then
/// "Bedding", then the first supplied category, then none.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use sheetgen::catalog::{generate_products, GenerateOptions, SalesChannel, ShippingProfile};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let options = GenerateOptions { num_products: 2, variants_per_product: 3, ..Default::default() };
/// let profile = ShippingProfile { id: "sp_1".into(), name: "Default".into() };
/// let channels = vec![SalesChannel { id: "sc_1".into(), name: "Web".into() }];
///
/// let products = generate_products(&mut rng, &options, &[], &profile, &channels).unwrap();
/// assert_eq!(products.len(), 2);
/// assert_eq!(products[0].variants.len(), 3);
/// ```
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerateOptions,
    categories: &[Category],
    shipping_profile: &ShippingProfile,
    sales_channels: &[SalesChannel],
) -> Result<Vec<GeneratedProduct>> {
    let sales_channel = sales_channels
        .first()
        .ok_or_else(|| SheetgenError::invalid("at least one sales channel is required"))?;
    let category_ids = resolve_category_ids(categories);
    let per_product = options.variants_per_product.min(total_combinations());

    let mut products = Vec::with_capacity(options.num_products);
    for i in 0..options.num_products {
        let sheet_type = sheet_type_for(i);
        let combinations = sample_combinations(rng, per_product)?;
        let variants: Vec<GeneratedVariant> = combinations
            .into_iter()
            .map(|combo| build_variant(rng, sheet_type, combo, options))
            .collect();

        tracing::debug!(
            index = i,
            sheet_type,
            variants = variants.len(),
            "Synthesized product"
        );

        products.push(GeneratedProduct {
            title: format!("{} Bed Sheet Set {}", sheet_type, i + 1),
            description: description_for(sheet_type).to_string(),
            handle: format!(
                "{}-sheet-set-{}-{}",
                kebab_case(sheet_type),
                i + 1,
                options.handle_salt
            ),
            weight: rng.random_range(WEIGHT_GRAMS),
            images: PRODUCT_IMAGES
                .iter()
                .map(|url| ProductImage { url: url.to_string() })
                .collect(),
            options: declare_options(&variants),
            variants,
            category_ids: category_ids.clone(),
            shipping_profile_id: shipping_profile.id.clone(),
            sales_channels: vec![SalesChannelRef {
                id: sales_channel.id.clone(),
            }],
        });
    }

    tracing::info!(
        products = products.len(),
        variants_per_product = per_product,
        sheet_types = SHEET_TYPES.len().min(options.num_products),
        "Generated bed sheet products"
    );
    Ok(products)
}

/// Draw `amount` distinct combinations in random order
pub fn sample_combinations<R: Rng + ?Sized>(rng: &mut R, amount: usize) -> Result<Vec<VariantCombination>> {
    let total = total_combinations();
    index::sample(rng, total, amount.min(total))
        .into_iter()
        .map(|i| {
            combination_at(i).ok_or_else(|| {
                SheetgenError::invalid(format!("combination index {} out of range", i))
            })
        })
        .collect()
}

/// `SHEET-<TYPE>-<WxL>-<COLOR>-<HEIGHT>-<random>`
pub fn build_sku<R: Rng + ?Sized>(rng: &mut R, sheet_type: &str, combo: &VariantCombination) -> String {
    format!(
        "SHEET-{}-{}-{}-{}-{}",
        compact_upper(sheet_type),
        combo.size,
        compact_upper(&combo.color),
        compact_upper(&combo.height.to_string()),
        random_alphanumeric(rng, SKU_SUFFIX_LENGTH)
    )
}

/// Random amount in `[min, max)`, floored
pub fn random_price<R: Rng + ?Sized>(rng: &mut R, range: PriceRange) -> i64 {
    let span = range.max as f64 - range.min as f64;
    (rng.random::<f64>() * span + range.min as f64).floor() as i64
}

fn build_variant<R: Rng + ?Sized>(
    rng: &mut R,
    sheet_type: &str,
    combo: VariantCombination,
    options: &GenerateOptions,
) -> GeneratedVariant {
    let sku = build_sku(rng, sheet_type, &combo);
    let prices = options
        .currencies
        .iter()
        .map(|currency| Price {
            amount: random_price(rng, options.price_range),
            currency_code: currency.clone(),
        })
        .collect();
    GeneratedVariant {
        title: combo.title(),
        sku,
        options: combo,
        prices,
    }
}

/// Sorted unique option values used by `variants`
fn declare_options(variants: &[GeneratedVariant]) -> Vec<ProductOption> {
    let sizes: BTreeSet<Size> = variants.iter().map(|v| v.options.size).collect();
    let colors: BTreeSet<&str> = variants.iter().map(|v| v.options.color.as_str()).collect();
    let heights: BTreeSet<Height> = variants.iter().map(|v| v.options.height).collect();

    vec![
        ProductOption {
            title: OPTION_SIZE.to_string(),
            values: sizes.iter().map(Size::to_string).collect(),
        },
        ProductOption {
            title: OPTION_COLOR.to_string(),
            values: colors.iter().map(|c| c.to_string()).collect(),
        },
        ProductOption {
            title: OPTION_HEIGHT.to_string(),
            values: heights.iter().map(Height::to_string).collect(),
        },
    ]
}

/// Category ids for generated products
pub fn resolve_category_ids(categories: &[Category]) -> Vec<String> {
    PREFERRED_CATEGORIES
        .iter()
        .find_map(|name| categories.iter().find(|c| c.name == *name))
        .or_else(|| categories.first())
        .map(|c| vec![c.id.clone()])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::options::{COLORS, HEIGHTS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn category(id: &str, name: &str) -> Category {
        Category { id: id.to_string(), name: name.to_string() }
    }

    fn profile() -> ShippingProfile {
        ShippingProfile { id: "sp_default".to_string(), name: "Default".to_string() }
    }

    fn channels() -> Vec<SalesChannel> {
        vec![
            SalesChannel { id: "sc_web".to_string(), name: "Web".to_string() },
            SalesChannel { id: "sc_pos".to_string(), name: "POS".to_string() },
        ]
    }

    fn options(num_products: usize, variants_per_product: usize) -> GenerateOptions {
        GenerateOptions {
            num_products,
            variants_per_product,
            handle_salt: 4242,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_product_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let products =
            generate_products(&mut rng, &options(1, 5), &[], &profile(), &channels()).unwrap();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(product.title, "Egyptian Cotton Bed Sheet Set 1");
        assert_eq!(product.handle, "egyptian-cotton-sheet-set-1-4242");
        assert_eq!(product.variants.len(), 5);
        assert_eq!(product.images.len(), PRODUCT_IMAGES.len());
        assert!(WEIGHT_GRAMS.contains(&product.weight));
        assert_eq!(product.shipping_profile_id, "sp_default");
        assert_eq!(product.sales_channels, vec![SalesChannelRef { id: "sc_web".to_string() }]);

        for variant in &product.variants {
            let combo = &variant.options;
            assert!(COLORS.contains(&combo.color.as_str()));
            assert!(HEIGHTS.contains(&combo.height.to_string().as_str()));
            assert!(variant.sku.starts_with("SHEET-EGYPTIANCOTTON-"));
            assert!(variant.sku.contains(&combo.size.to_string()));
            assert!(variant.sku.contains(&compact_upper(&combo.color)));
            assert!(variant.sku.contains(&compact_upper(&combo.height.to_string())));
            assert_eq!(variant.title, combo.title());
            assert_eq!(variant.prices.len(), 2);
            for price in &variant.prices {
                assert!(price.amount >= 20 && price.amount < 80);
            }
        }
    }

    #[test]
    fn test_sku_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let combo = combination_at(0).unwrap();
        let sku = build_sku(&mut rng, "Jersey Knit", &combo);
        let parts: Vec<&str> = sku.split('-').collect();
        assert_eq!(&parts[..5], &["SHEET", "JERSEYKNIT", "70x180", "WHITE", "15CM"]);
        assert_eq!(parts[5].len(), SKU_SUFFIX_LENGTH);
        assert!(parts[5].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_distinct_combinations_per_product() {
        let mut rng = StdRng::seed_from_u64(2);
        let products =
            generate_products(&mut rng, &options(3, 200), &[], &profile(), &channels()).unwrap();
        assert_eq!(products.len(), 3);
        for product in &products {
            assert_eq!(product.variants.len(), 200);
            let distinct: HashSet<&VariantCombination> =
                product.variants.iter().map(|v| &v.options).collect();
            assert_eq!(distinct.len(), 200);
        }
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Egyptian Cotton Bed Sheet Set 1",
                "Percale Bed Sheet Set 2",
                "Sateen Bed Sheet Set 3"
            ]
        );
    }

    #[test]
    fn test_variants_capped_at_total() {
        let mut rng = StdRng::seed_from_u64(5);
        let sample = sample_combinations(&mut rng, 70_000).unwrap();
        assert_eq!(sample.len(), 67_200);
    }

    #[test]
    fn test_option_declaration_sorted() {
        let mut rng = StdRng::seed_from_u64(9);
        let products =
            generate_products(&mut rng, &options(1, 300), &[], &profile(), &channels()).unwrap();
        let product = &products[0];

        let sizes: Vec<Size> = product
            .option_values(OPTION_SIZE)
            .unwrap()
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));

        let colors = product.option_values(OPTION_COLOR).unwrap();
        assert!(colors.windows(2).all(|w| w[0] < w[1]));

        let heights: Vec<Height> = product
            .option_values(OPTION_HEIGHT)
            .unwrap()
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert!(heights.windows(2).all(|w| w[0].millimeters() < w[1].millimeters()));

        let used: HashSet<String> = product.variants.iter().map(|v| v.options.color.clone()).collect();
        assert_eq!(used.len(), colors.len());
    }

    #[test]
    fn test_empty_sales_channels_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_products(&mut rng, &options(1, 1), &[], &profile(), &[]).unwrap_err();
        assert!(matches!(err, SheetgenError::InvalidArgument(_)));
    }

    #[test]
    fn test_category_resolution() {
        let all = vec![
            category("c1", "Towels"),
            category("c2", "Bedding"),
            category("c3", "Sheets"),
        ];
        assert_eq!(resolve_category_ids(&all), vec!["c3"]);
        assert_eq!(resolve_category_ids(&all[..2]), vec!["c2"]);
        assert_eq!(resolve_category_ids(&all[..1]), vec!["c1"]);
        assert!(resolve_category_ids(&[]).is_empty());
    }

    #[test]
    fn test_seeded_runs_repeat_and_unseeded_differ() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_products(&mut rng, &options(2, 4), &[], &profile(), &channels()).unwrap()
        };
        assert_eq!(run(11), run(11));

        let a = generate_products(&mut rand::rng(), &options(2, 4), &[], &profile(), &channels()).unwrap();
        let b = generate_products(&mut rand::rng(), &options(2, 4), &[], &profile(), &channels()).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a[0].handle, b[0].handle);
        let skus_a: Vec<&str> = a.iter().flat_map(|p| p.variants.iter().map(|v| v.sku.as_str())).collect();
        let skus_b: Vec<&str> = b.iter().flat_map(|p| p.variants.iter().map(|v| v.sku.as_str())).collect();
        assert_ne!(skus_a, skus_b);
    }

    #[test]
    fn test_random_price_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            let amount = random_price(&mut rng, PriceRange { min: 20, max: 80 });
            assert!((20..80).contains(&amount));
        }
        assert_eq!(random_price(&mut rng, PriceRange { min: 50, max: 50 }), 50);
    }

    #[test]
    fn test_random_price_extreme_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let range = PriceRange { min: i64::MIN, max: i64::MAX };
        for _ in 0..100 {
            random_price(&mut rng, range);
        }
        let inverted = random_price(&mut rng, PriceRange { min: i64::MAX, max: i64::MIN });
        assert!(inverted <= i64::MAX);
    }

    #[test]
    fn test_accepts_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(10);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let combos = sample_combinations(dyn_rng, 3).unwrap();
        assert_eq!(combos.len(), 3);
    }
}
