//! Shared domain types used by all three state engines.
//!
//! These types mirror the JSON shapes produced and consumed by the transport
//! collaborator. Deserialization is the system boundary: anything irregular
//! on the wire (legacy bare-string images, missing optional fields) is
//! normalized here, so engine code never branches on shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product lifecycle status.
///
/// Wire representation is lowercase (`"draft"`, `"active"`, `"inactive"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Draft, Status::Active, Status::Inactive];

    /// Display label with leading capital, as shown in selectors and chips.
    pub fn label(self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Wire form (lowercase).
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown status `{0}` (expected draft, active, or inactive)")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Status::Draft),
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A product image.
///
/// Legacy records store gallery entries as bare URL strings; newer records
/// store `{ "url": ..., "alt": ... }` objects. Both shapes deserialize into
/// this struct, so downstream code sees exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImageRepr")]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Image {
            url: url.into(),
            alt: None,
        }
    }
}

/// Accepted wire shapes for [`Image`]. Internal to deserialization.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRepr {
    Structured {
        url: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Bare(String),
}

impl From<ImageRepr> for Image {
    fn from(repr: ImageRepr) -> Self {
        match repr {
            ImageRepr::Structured { url, alt } => Image { url, alt },
            ImageRepr::Bare(url) => Image { url, alt: None },
        }
    }
}

/// A catalog product as fetched from and saved to the API.
///
/// Invariants held by persisted products (enforced by
/// [`crate::validate`] before any save request leaves the client):
/// - `discounted_price`, when present, is strictly below `price`
/// - `gallery` is non-empty; its order is display order
/// - `product_url` is a well-formed slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier; absent on a product not yet created.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_name: String,
    /// URL slug, stable once published.
    pub product_url: String,
    pub meta_title: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
    pub category: String,
    pub status: Status,
    pub main_image: Image,
    pub gallery: Vec<Image>,
    /// Rich-text HTML. Render only through [`Product::description_html`].
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Run the description through the render sanitizer.
    ///
    /// The description is user-authored HTML; every render path must go
    /// through this method rather than reading `description` raw.
    pub fn description_html<S: Sanitizer + ?Sized>(&self, sanitizer: &S) -> String {
        sanitizer.sanitize(&self.description)
    }
}

/// HTML sanitizer seam.
///
/// The actual sanitizer lives with the presentation layer; the core only
/// pins the contract that descriptions are sanitized before render.
pub trait Sanitizer {
    fn sanitize(&self, html: &str) -> String;
}

/// An authenticated account, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
}
