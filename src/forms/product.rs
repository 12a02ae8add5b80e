//! Product create/edit form: field plumbing, slug auto-generation, gallery
//! rows, and the cross-field checks gating a save.
//!
//! Numeric inputs are kept as raw text until submission — the user is typing
//! into a text box, and "" vs "0" matters. Parsing and all cross-field
//! consistency rules run inside [`ProductForm::submit`], which either yields
//! a [`Product`] ready for the create/update endpoint or the first
//! [`FieldError`] to surface in the banner.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::{Image, Product, Status};
use crate::validate::{
    FieldError, generate_slug, validate_gallery_urls, validate_image_url,
    validate_price_consistency,
};

/// Whether the form creates a new product or edits a persisted one.
///
/// The distinction matters for the slug: it tracks the product name during
/// creation, but an existing product's slug is a published URL and is never
/// regenerated behind the user's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Product form state. Field values are raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    mode: FormMode,
    /// Server id of the product being edited; `None` in create mode.
    id: Option<String>,
    pub product_name: String,
    pub meta_title: String,
    pub product_url: String,
    pub price: String,
    pub discounted_price: String,
    pub description: String,
    pub main_image: String,
    pub category: String,
    pub status: Option<Status>,
    /// One entry per gallery input row. Never empty: the form always shows
    /// at least one row.
    pub gallery_inputs: Vec<String>,
}

impl ProductForm {
    /// Empty form for creating a new product.
    pub fn create() -> Self {
        ProductForm {
            mode: FormMode::Create,
            id: None,
            product_name: String::new(),
            meta_title: String::new(),
            product_url: String::new(),
            price: String::new(),
            discounted_price: String::new(),
            description: String::new(),
            main_image: String::new(),
            category: String::new(),
            status: None,
            gallery_inputs: vec![String::new()],
        }
    }

    /// Form pre-filled from a fetched product, for editing.
    ///
    /// The structured gallery flattens back into URL rows; an (invalid, but
    /// possible) empty gallery still yields one blank row to type into.
    pub fn edit(product: &Product) -> Self {
        let mut gallery_inputs: Vec<String> =
            product.gallery.iter().map(|img| img.url.clone()).collect();
        if gallery_inputs.is_empty() {
            gallery_inputs.push(String::new());
        }
        ProductForm {
            mode: FormMode::Edit,
            id: product.id.clone(),
            product_name: product.product_name.clone(),
            meta_title: product.meta_title.clone(),
            product_url: product.product_url.clone(),
            price: product.price.to_string(),
            discounted_price: product
                .discounted_price
                .map(|d| d.to_string())
                .unwrap_or_default(),
            description: product.description.clone(),
            main_image: product.main_image.url.clone(),
            category: product.category.clone(),
            status: Some(product.status),
            gallery_inputs,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Update the product name. In create mode the slug field follows along;
    /// in edit mode the published slug stays put.
    pub fn set_product_name(&mut self, value: &str) {
        self.product_name = value.to_string();
        if self.mode == FormMode::Create {
            self.product_url = generate_slug(value);
        }
    }

    /// Slug typed directly by the user; always wins over auto-generation.
    pub fn set_product_url(&mut self, value: &str) {
        self.product_url = value.to_string();
    }

    // -- gallery rows ---------------------------------------------------------

    pub fn add_gallery_row(&mut self) {
        self.gallery_inputs.push(String::new());
    }

    /// Remove a row. The first row is fixed — the form never drops to zero
    /// rows — so index 0 and out-of-range indexes are ignored.
    pub fn remove_gallery_row(&mut self, index: usize) {
        if index > 0 && index < self.gallery_inputs.len() {
            self.gallery_inputs.remove(index);
        }
    }

    pub fn set_gallery_url(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.gallery_inputs.get_mut(index) {
            *slot = value.to_string();
        }
    }

    // -- submission -----------------------------------------------------------

    /// Run the cross-field checks and build the save payload.
    ///
    /// Check order matches the banner precedence: price consistency, then
    /// main image URL, then gallery. Blank discounted price means "no
    /// discount"; blank status defaults to draft.
    pub fn submit(&mut self) -> Result<Product, FieldError> {
        let price = parse_price(&self.price)?;
        let discounted_price = match self.discounted_price.trim() {
            "" => None,
            raw => Some(parse_price(raw)?),
        };
        validate_price_consistency(price, discounted_price)?;
        validate_image_url("Main image", self.main_image.trim())?;
        validate_gallery_urls(&self.gallery_inputs)?;

        let gallery: Vec<Image> = self
            .gallery_inputs
            .iter()
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(Image::new)
            .collect();

        Ok(Product {
            id: self.id.clone(),
            product_name: self.product_name.clone(),
            product_url: self.product_url.clone(),
            meta_title: self.meta_title.clone(),
            price,
            discounted_price,
            category: self.category.clone(),
            status: self.status.unwrap_or(Status::Draft),
            main_image: Image::new(self.main_image.trim()),
            gallery,
            description: self.description.clone(),
        })
    }
}

fn parse_price(raw: &str) -> Result<Decimal, FieldError> {
    Decimal::from_str(raw.trim()).map_err(|_| FieldError::PriceInvalid)
}
