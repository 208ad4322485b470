use std::io::Cursor;

use csv::{StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::characteristic::NewCharacteristic;
use crate::domain::color::NewProductColorLink;
use crate::domain::document::NewDocument;
use crate::domain::product::{NewProduct, ProductImage, UpdateProduct};
use crate::forms::{
    is_valid_image_ref, sanitize_inline_text, sanitize_lang, sanitize_multiline_text,
};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for an article.
const ARTICLE_MAX_LEN: usize = 64;
const ARTICLE_MAX_LEN_VALIDATOR: u64 = ARTICLE_MAX_LEN as u64;

/// ISO 4217 currency codes are three ASCII alphabetic characters.
const CURRENCY_CODE_LEN: usize = 3;
const CURRENCY_CODE_LEN_VALIDATOR: u64 = CURRENCY_CODE_LEN as u64;

/// Currency assumed for CSV rows that do not carry one.
const DEFAULT_CURRENCY: &str = "RUB";

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided article is empty after sanitization.
    #[error("product article cannot be empty")]
    EmptyArticle,
    /// The provided currency code is invalid.
    #[error("invalid currency code `{value}`")]
    InvalidCurrency { value: String },
    /// The provided language code is invalid.
    #[error("invalid language code `{value}`")]
    InvalidLang { value: String },
    /// A gallery entry is neither a URL nor a data URI.
    #[error("invalid image reference `{value}`")]
    InvalidImage { value: String },
    /// A characteristic row is missing its name or value.
    #[error("characteristic rows need both a name and a value")]
    EmptyCharacteristic,
    /// A document row is missing a required field.
    #[error("document rows need a name, a type and a file url")]
    EmptyDocument,
    /// The uploaded CSV is missing required columns.
    #[error("upload is missing one of the required headers: name, article, price, lang, category")]
    MissingRequiredHeaders,
    /// A CSV row is missing a required value.
    #[error("row {row} is missing `{field}`")]
    UploadMissingField { row: usize, field: &'static str },
    /// A CSV row carries an unparsable price.
    #[error("row {row} has invalid price `{value}`")]
    UploadInvalidPrice { row: usize, value: String },
    /// The uploaded CSV did not contain any usable products.
    #[error("upload contains no products")]
    EmptyUpload,
    /// CSV parsing failures.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One gallery entry as submitted by the admin UI.
#[derive(Debug, Deserialize, Clone)]
pub struct ProductImageForm {
    pub url: String,
    #[serde(default)]
    pub color_id: Option<i32>,
}

/// JSON payload submitted when creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = ARTICLE_MAX_LEN_VALIDATOR))]
    pub article: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(length(equal = CURRENCY_CODE_LEN_VALIDATOR))]
    pub currency: String,
    pub category_id: i32,
    #[serde(default)]
    pub subcategory_id: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub lang: String,
    #[serde(default)]
    pub collection_id: Option<i32>,
    #[serde(default)]
    pub cross_collection_id: Option<i32>,
    #[serde(default)]
    pub images: Vec<ProductImageForm>,
}

fn default_true() -> bool {
    true
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let article = sanitize_article(&self.article);
        if article.is_empty() {
            return Err(ProductFormError::EmptyArticle);
        }

        let currency = sanitize_currency(&self.currency)?;
        let lang = sanitize_lang(&self.lang).ok_or(ProductFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let images = convert_images(self.images)?;

        let mut new_product = NewProduct::new(
            name,
            article,
            self.price_cents,
            currency,
            self.category_id,
            lang,
        )
        .with_images(images);

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            new_product = new_product.with_description(description);
        }

        if let Some(subcategory_id) = self.subcategory_id {
            new_product = new_product.with_subcategory(subcategory_id);
        }

        if let Some(collection_id) = self.collection_id {
            new_product = new_product.with_collection(collection_id);
        }

        if let Some(collection_id) = self.cross_collection_id {
            new_product = new_product.with_cross_collection(collection_id);
        }

        if self.is_featured {
            new_product = new_product.featured();
        }

        if !self.is_active {
            new_product = new_product.inactive();
        }

        Ok(new_product)
    }
}

/// JSON payload submitted when editing an existing product.
///
/// The language of a product row is fixed at creation; everything else is
/// resubmitted wholesale.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = ARTICLE_MAX_LEN_VALIDATOR))]
    pub article: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(length(equal = CURRENCY_CODE_LEN_VALIDATOR))]
    pub currency: String,
    pub category_id: i32,
    #[serde(default)]
    pub subcategory_id: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub collection_id: Option<i32>,
    #[serde(default)]
    pub cross_collection_id: Option<i32>,
    #[serde(default)]
    pub images: Vec<ProductImageForm>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let article = sanitize_article(&self.article);
        if article.is_empty() {
            return Err(ProductFormError::EmptyArticle);
        }

        let currency = sanitize_currency(&self.currency)?;
        let images = convert_images(self.images)?;

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let updates = UpdateProduct::new(name, article, self.price_cents, currency, self.category_id)
            .with_description(description)
            .with_subcategory(self.subcategory_id)
            .with_collection(self.collection_id)
            .with_cross_collection(self.cross_collection_id)
            .featured(self.is_featured)
            .active(self.is_active)
            .with_images(images);

        Ok(updates)
    }
}

/// JSON payload replacing the colors attached to a product.
#[derive(Debug, Deserialize)]
pub struct ProductColorsForm {
    #[serde(default)]
    pub colors: Vec<ProductColorLinkForm>,
}

#[derive(Debug, Deserialize)]
pub struct ProductColorLinkForm {
    pub color_id: i32,
    #[serde(default)]
    pub link_to_product: Option<String>,
}

impl ProductColorsForm {
    pub fn into_links(self) -> Vec<NewProductColorLink> {
        self.colors
            .into_iter()
            .map(|link| {
                let mut new_link = NewProductColorLink::new(link.color_id);
                if let Some(url) = link
                    .link_to_product
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                {
                    new_link = new_link.with_link(url);
                }
                new_link
            })
            .collect()
    }
}

/// JSON payload replacing the specification rows attached to a product.
#[derive(Debug, Deserialize)]
pub struct CharacteristicsForm {
    #[serde(default)]
    pub characteristics: Vec<CharacteristicRowForm>,
}

#[derive(Debug, Deserialize)]
pub struct CharacteristicRowForm {
    pub name: String,
    pub value: String,
}

impl CharacteristicsForm {
    pub fn into_rows(self) -> ProductFormResult<Vec<NewCharacteristic>> {
        let mut rows = Vec::with_capacity(self.characteristics.len());

        for row in self.characteristics {
            let name = sanitize_inline_text(&row.name);
            let value = sanitize_inline_text(&row.value);
            if name.is_empty() || value.is_empty() {
                return Err(ProductFormError::EmptyCharacteristic);
            }
            rows.push(NewCharacteristic::new(name, value));
        }

        Ok(rows)
    }
}

/// JSON payload replacing the technologies attached to a product.
#[derive(Debug, Deserialize)]
pub struct ProductTechnologiesForm {
    #[serde(default)]
    pub technology_ids: Vec<i32>,
}

/// JSON payload replacing the documents attached to a product.
#[derive(Debug, Deserialize)]
pub struct DocumentsForm {
    #[serde(default)]
    pub documents: Vec<DocumentRowForm>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentRowForm {
    pub name: String,
    pub doc_type: String,
    pub file_url: String,
    #[serde(default)]
    pub file_size_bytes: i32,
}

impl DocumentsForm {
    pub fn into_rows(self) -> ProductFormResult<Vec<NewDocument>> {
        let mut rows = Vec::with_capacity(self.documents.len());

        for row in self.documents {
            let name = sanitize_inline_text(&row.name);
            let doc_type = row.doc_type.trim().to_ascii_lowercase();
            let file_url = row.file_url.trim().to_string();
            if name.is_empty() || doc_type.is_empty() || file_url.is_empty() {
                return Err(ProductFormError::EmptyDocument);
            }
            rows.push(NewDocument::new(
                name,
                doc_type,
                file_url,
                row.file_size_bytes.max(0),
            ));
        }

        Ok(rows)
    }
}

/// One parsed row of the bulk product upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvProductRow {
    pub name: String,
    pub article: String,
    pub price_cents: i64,
    pub currency: String,
    pub lang: String,
    pub category_slug: String,
    pub description: Option<String>,
}

/// CSV upload payload for bulk product creation.
#[derive(Debug)]
pub struct UploadProductsForm {
    /// Optional filename provided by the client.
    pub file_name: Option<String>,
    /// Raw CSV bytes received from the upload.
    pub bytes: Vec<u8>,
}

impl UploadProductsForm {
    /// Construct a new upload payload from the multipart data.
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// Parse the uploaded CSV into validated rows.
    ///
    /// Required headers: `name`, `article`, `price`, `lang`, `category`.
    /// Optional: `currency` (defaults to RUB) and `description`. The parse
    /// fails on the first invalid row.
    pub fn into_rows(self) -> ProductFormResult<Vec<CsvProductRow>> {
        let UploadProductsForm { bytes, .. } = self;
        let cursor = Cursor::new(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(cursor);

        let headers = reader.headers()?.clone();
        let columns = locate_upload_headers(&headers);

        let (Some(name_index), Some(article_index), Some(price_index), Some(lang_index), Some(category_index)) = (
            columns.name,
            columns.article,
            columns.price,
            columns.lang,
            columns.category,
        ) else {
            return Err(ProductFormError::MissingRequiredHeaders);
        };

        let mut rows = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let row_number = index + 2; // account for the header row
            let record = record?;

            let name = sanitize_inline_text(record.get(name_index).unwrap_or(""));
            if name.is_empty() {
                return Err(ProductFormError::UploadMissingField {
                    row: row_number,
                    field: "name",
                });
            }

            let article = sanitize_article(record.get(article_index).unwrap_or(""));
            if article.is_empty() {
                return Err(ProductFormError::UploadMissingField {
                    row: row_number,
                    field: "article",
                });
            }

            let price_raw = record.get(price_index).unwrap_or("").trim();
            if price_raw.is_empty() {
                return Err(ProductFormError::UploadMissingField {
                    row: row_number,
                    field: "price",
                });
            }
            let price_cents =
                parse_price_cents(price_raw).ok_or_else(|| ProductFormError::UploadInvalidPrice {
                    row: row_number,
                    value: price_raw.to_string(),
                })?;

            let lang_raw = record.get(lang_index).unwrap_or("");
            let lang = sanitize_lang(lang_raw).ok_or(ProductFormError::UploadMissingField {
                row: row_number,
                field: "lang",
            })?;

            let category_slug = record
                .get(category_index)
                .unwrap_or("")
                .trim()
                .to_ascii_lowercase();
            if category_slug.is_empty() {
                return Err(ProductFormError::UploadMissingField {
                    row: row_number,
                    field: "category",
                });
            }

            let currency = match columns.currency.and_then(|idx| record.get(idx)) {
                Some(value) if !value.trim().is_empty() => sanitize_currency(value)?,
                _ => DEFAULT_CURRENCY.to_string(),
            };

            let description = columns
                .description
                .and_then(|idx| record.get(idx))
                .map(sanitize_multiline_text)
                .filter(|value| !value.is_empty());

            rows.push(CsvProductRow {
                name,
                article,
                price_cents,
                currency,
                lang,
                category_slug,
                description,
            });
        }

        if rows.is_empty() {
            return Err(ProductFormError::EmptyUpload);
        }

        Ok(rows)
    }
}

struct UploadHeaderIndexes {
    name: Option<usize>,
    article: Option<usize>,
    price: Option<usize>,
    lang: Option<usize>,
    category: Option<usize>,
    currency: Option<usize>,
    description: Option<usize>,
}

fn locate_upload_headers(headers: &StringRecord) -> UploadHeaderIndexes {
    UploadHeaderIndexes {
        name: locate_header(headers, "name"),
        article: locate_header(headers, "article"),
        price: locate_header(headers, "price"),
        lang: locate_header(headers, "lang"),
        category: locate_header(headers, "category"),
        currency: locate_header(headers, "currency"),
        description: locate_header(headers, "description"),
    }
}

fn locate_header(headers: &StringRecord, expected: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(expected))
}

fn convert_images(images: Vec<ProductImageForm>) -> ProductFormResult<Vec<ProductImage>> {
    let mut converted = Vec::with_capacity(images.len());

    for image in images {
        let url = image.url.trim().to_string();
        if !is_valid_image_ref(&url) {
            return Err(ProductFormError::InvalidImage { value: image.url });
        }
        converted.push(ProductImage {
            url,
            color_id: image.color_id,
        });
    }

    Ok(converted)
}

fn sanitize_article(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !ch.is_control() && !ch.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

fn sanitize_currency(input: &str) -> ProductFormResult<String> {
    let trimmed = input.trim();
    if trimmed.len() != CURRENCY_CODE_LEN || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(ProductFormError::InvalidCurrency {
            value: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_ascii_uppercase())
}

/// Parse a decimal price such as `12.34` or `12,5` into cents.
fn parse_price_cents(raw: &str) -> Option<i64> {
    let normalized = raw.trim().replace(',', ".");
    let (whole, frac) = match normalized.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (normalized.as_str(), ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }

    if !whole.chars().all(|ch| ch.is_ascii_digit())
        || !frac.chars().all(|ch| ch.is_ascii_digit())
        || frac.len() > 2
    {
        return None;
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    let frac_value: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole_value.checked_mul(100)?.checked_add(frac_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_add_form() -> AddProductForm {
        AddProductForm {
            name: "Insulated boots".to_string(),
            article: "bt-100".to_string(),
            description: None,
            price_cents: 1299_00,
            currency: "rub".to_string(),
            category_id: 1,
            subcategory_id: None,
            is_featured: false,
            is_active: true,
            lang: "ru".to_string(),
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn add_product_form_converts_successfully() {
        let mut form = base_add_form();
        form.name = "  Insulated   boots ".to_string();
        form.description = Some(" Warm.\n\n Waterproof.  ".to_string());
        form.images = vec![ProductImageForm {
            url: " https://cdn.example.com/boots.jpg ".to_string(),
            color_id: Some(4),
        }];

        let new_product = form.into_new_product().expect("expected success");

        assert_eq!(new_product.name, "Insulated boots");
        assert_eq!(new_product.article, "BT-100");
        assert_eq!(new_product.currency, "RUB");
        assert_eq!(new_product.lang, "ru");
        assert_eq!(new_product.description.as_deref(), Some("Warm.\n\nWaterproof."));
        assert_eq!(new_product.images.len(), 1);
        assert_eq!(new_product.images[0].url, "https://cdn.example.com/boots.jpg");
        assert_eq!(new_product.images[0].color_id, Some(4));
        assert!(new_product.is_active);
    }

    #[test]
    fn add_product_form_rejects_invalid_currency() {
        let mut form = base_add_form();
        form.currency = "R1B".to_string();

        let result = form.into_new_product();

        assert!(matches!(
            result,
            Err(ProductFormError::InvalidCurrency { value }) if value == "R1B"
        ));
    }

    #[test]
    fn add_product_form_rejects_bad_image_reference() {
        let mut form = base_add_form();
        form.images = vec![ProductImageForm {
            url: "ftp://example.com/a.png".to_string(),
            color_id: None,
        }];

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::InvalidImage { .. })));
    }

    #[test]
    fn edit_product_form_keeps_empty_gallery() {
        let form = EditProductForm {
            name: "Boots".to_string(),
            article: "BT-100".to_string(),
            description: None,
            price_cents: 500,
            currency: "RUB".to_string(),
            category_id: 2,
            subcategory_id: Some(5),
            is_featured: true,
            is_active: false,
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
        };

        let updates = form.into_update_product().expect("expected success");

        assert!(updates.images.is_empty());
        assert!(updates.is_featured);
        assert!(!updates.is_active);
        assert_eq!(updates.subcategory_id, Some(5));
    }

    #[test]
    fn characteristics_form_rejects_blank_rows() {
        let form = CharacteristicsForm {
            characteristics: vec![CharacteristicRowForm {
                name: "Material".to_string(),
                value: "   ".to_string(),
            }],
        };

        let result = form.into_rows();

        assert!(matches!(result, Err(ProductFormError::EmptyCharacteristic)));
    }

    #[test]
    fn upload_products_form_converts_rows() {
        let csv = b"name,article,price,lang,category,currency,description\n\
Boots,BT-1,129.90,ru,footwear,rub,Nice boots\n\
Gloves,GL-2,45,ru,accessories,,\n"
            .to_vec();
        let form = UploadProductsForm::new(Some("products.csv".into()), csv);

        let rows = form.into_rows().expect("expected upload to parse");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Boots");
        assert_eq!(rows[0].article, "BT-1");
        assert_eq!(rows[0].price_cents, 12990);
        assert_eq!(rows[0].currency, "RUB");
        assert_eq!(rows[0].category_slug, "footwear");
        assert_eq!(rows[0].description.as_deref(), Some("Nice boots"));

        assert_eq!(rows[1].price_cents, 4500);
        assert_eq!(rows[1].currency, "RUB");
        assert!(rows[1].description.is_none());
    }

    #[test]
    fn upload_products_form_rejects_missing_headers() {
        let csv = b"name,price\nBoots,10\n".to_vec();
        let form = UploadProductsForm::new(None, csv);

        let result = form.into_rows();

        assert!(matches!(
            result,
            Err(ProductFormError::MissingRequiredHeaders)
        ));
    }

    #[test]
    fn upload_products_form_rejects_invalid_price() {
        let csv = b"name,article,price,lang,category\nBoots,BT-1,free,ru,footwear\n".to_vec();
        let form = UploadProductsForm::new(None, csv);

        let result = form.into_rows();

        assert!(matches!(
            result,
            Err(ProductFormError::UploadInvalidPrice { row: 2, .. })
        ));
    }

    #[test]
    fn price_parsing_handles_decimal_separators() {
        assert_eq!(parse_price_cents("129.90"), Some(12990));
        assert_eq!(parse_price_cents("129,9"), Some(12990));
        assert_eq!(parse_price_cents("45"), Some(4500));
        assert_eq!(parse_price_cents(".5"), Some(50));
        assert_eq!(parse_price_cents("12.345"), None);
        assert_eq!(parse_price_cents("free"), None);
        assert_eq!(parse_price_cents(""), None);
    }
}
