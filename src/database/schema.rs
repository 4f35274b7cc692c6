//! Catalog database schema definitions

/// SQL to create the products table
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_products (
    product_id          VARCHAR PRIMARY KEY NOT NULL,
    handle              VARCHAR NOT NULL UNIQUE,
    title               VARCHAR NOT NULL,
    description         TEXT,
    weight              INTEGER,
    category_ids        TEXT,
    shipping_profile_id VARCHAR,
    sales_channel_ids   TEXT,
    update_count        INTEGER DEFAULT 0,
    create_timestamp    TEXT,
    change_timestamp    TEXT
)
"#;

/// SQL to create the variants table
pub const CREATE_VARIANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_variants (
    variant_id      VARCHAR PRIMARY KEY NOT NULL,
    product_id      VARCHAR NOT NULL,
    title           VARCHAR,
    sku             VARCHAR NOT NULL UNIQUE,
    size            VARCHAR,
    color           VARCHAR,
    height          VARCHAR,
    variant_rank    INTEGER
)
"#;

/// SQL to create the prices table (composite primary key)
pub const CREATE_PRICES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_prices (
    variant_id      VARCHAR NOT NULL,
    currency_code   CHAR(3) NOT NULL,
    amount          INTEGER,
    PRIMARY KEY (variant_id, currency_code)
)
"#;

/// SQL to create the images table
pub const CREATE_IMAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_images (
    image_id        VARCHAR PRIMARY KEY NOT NULL,
    product_id      VARCHAR NOT NULL,
    url             VARCHAR,
    image_rank      INTEGER
)
"#;

/// SQL to create the options table (composite primary key)
pub const CREATE_OPTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_options (
    product_id      VARCHAR NOT NULL,
    title           VARCHAR NOT NULL,
    option_values   TEXT,
    option_rank     INTEGER,
    PRIMARY KEY (product_id, title)
)
"#;

pub const CREATE_VARIANTS_PRODUCT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_catalog_variants_product ON catalog_variants (product_id)";

pub const CREATE_IMAGES_PRODUCT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_catalog_images_product ON catalog_images (product_id)";

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_PRODUCTS_TABLE,
    CREATE_VARIANTS_TABLE,
    CREATE_PRICES_TABLE,
    CREATE_IMAGES_TABLE,
    CREATE_OPTIONS_TABLE,
    CREATE_VARIANTS_PRODUCT_INDEX,
    CREATE_IMAGES_PRODUCT_INDEX,
];
