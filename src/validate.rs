//! Field validation, slug generation, and password-strength scoring.
//!
//! Everything here is a pure function: raw field text in, verdict out. The
//! form layer ([`crate::forms`]) decides *when* to run each validator and
//! where the resulting error is displayed; this module only decides *whether*
//! a value is acceptable.
//!
//! Validation failures are local. They block submission and never reach the
//! transport layer — see [`crate::remote`] for the remote-error side of the
//! taxonomy.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

use crate::types::Product;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// `local@domain.tld` — requires a dot in the domain part, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

/// A field-scoped validation failure.
///
/// Display strings are the user-facing messages shown next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain lowercase letters")]
    PasswordMissingLowercase,
    #[error("Password must contain uppercase letters")]
    PasswordMissingUppercase,
    #[error("Password must contain numbers")]
    PasswordMissingDigit,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{field} must be a valid URL")]
    InvalidUrl { field: String },
    #[error("At least one gallery image is required")]
    GalleryEmpty,
    #[error("Price must be a number")]
    PriceInvalid,
    #[error("Discounted price must be less than the original price")]
    DiscountNotBelowPrice,
    #[error("Product URL must be a lowercase URL-safe slug")]
    SlugInvalid,
}

pub fn validate_username(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::UsernameRequired)
    } else if value.chars().count() < MIN_USERNAME_LEN {
        Err(FieldError::UsernameTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_RE.is_match(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Checks run in order; the first unmet requirement is the reported error.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::PasswordRequired)
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::PasswordTooShort)
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        Err(FieldError::PasswordMissingLowercase)
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        Err(FieldError::PasswordMissingUppercase)
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        Err(FieldError::PasswordMissingDigit)
    } else {
        Ok(())
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        Err(FieldError::ConfirmPasswordRequired)
    } else if confirm != password {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    }
}

/// An image field must hold a well-formed absolute URL.
///
/// `field` names the offending input in the error message ("Main image",
/// "Gallery image 2", ...).
pub fn validate_image_url(field: &str, value: &str) -> Result<(), FieldError> {
    Url::parse(value).map(|_| ()).map_err(|_| FieldError::InvalidUrl {
        field: field.to_string(),
    })
}

/// Gallery rule for saving: blank rows are ignored, every non-blank row must
/// be a well-formed URL, and at least one non-blank row must remain.
pub fn validate_gallery_urls(urls: &[String]) -> Result<(), FieldError> {
    let mut non_blank = 0usize;
    for (i, raw) in urls.iter().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        non_blank += 1;
        validate_image_url(&format!("Gallery image {}", i + 1), trimmed)?;
    }
    if non_blank == 0 {
        return Err(FieldError::GalleryEmpty);
    }
    Ok(())
}

/// A discounted price, when present, must be strictly below the base price.
pub fn validate_price_consistency(
    price: Decimal,
    discounted: Option<Decimal>,
) -> Result<(), FieldError> {
    match discounted {
        Some(d) if d >= price => Err(FieldError::DiscountNotBelowPrice),
        _ => Ok(()),
    }
}

/// Persistence invariants for a complete product record.
///
/// Unlike the form validators, which stop at the first problem to fill one
/// error banner, this collects every finding — it backs audit-style checks
/// over whole catalog dumps.
pub fn check_product(product: &Product) -> Vec<FieldError> {
    let mut findings = Vec::new();
    if let Err(err) = validate_image_url("Main image", &product.main_image.url) {
        findings.push(err);
    }
    if product.gallery.is_empty() {
        findings.push(FieldError::GalleryEmpty);
    }
    for (i, img) in product.gallery.iter().enumerate() {
        if let Err(err) = validate_image_url(&format!("Gallery image {}", i + 1), &img.url) {
            findings.push(err);
        }
    }
    if let Err(err) = validate_price_consistency(product.price, product.discounted_price) {
        findings.push(err);
    }
    // A published slug must already be in canonical form
    if product.product_url.is_empty() || generate_slug(&product.product_url) != product.product_url
    {
        findings.push(FieldError::SlugInvalid);
    }
    findings
}

// ============================================================================
// Slug generation
// ============================================================================

/// Derive a URL slug from a product name.
///
/// Lowercases, trims, drops characters outside word characters / whitespace /
/// hyphens, collapses whitespace-or-hyphen runs into a single hyphen, and
/// strips leading/trailing hyphens. Idempotent:
/// `generate_slug(generate_slug(x)) == generate_slug(x)`.
///
/// ```
/// # use shopdesk::validate::generate_slug;
/// assert_eq!(generate_slug("  Wireless Mouse!! 2.0  "), "wireless-mouse-20");
/// ```
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            // runs of separators collapse into one hyphen
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
        // anything else (punctuation, symbols) drops out without
        // splitting the surrounding word
    }
    slug
}

// ============================================================================
// Password strength
// ============================================================================

/// The five characteristics behind the strength meter, each worth one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecks {
    pub fn of(password: &str) -> Self {
        PasswordChecks {
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied characteristics, 0–5. Monotonic: satisfying an
    /// additional characteristic never lowers the score.
    pub fn score(self) -> u8 {
        [
            self.min_length,
            self.lowercase,
            self.uppercase,
            self.digit,
            self.symbol,
        ]
        .iter()
        .filter(|&&met| met)
        .count() as u8
    }

    /// Requirement checklist in display order, with met/unmet flags.
    pub fn items(self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.min_length),
            ("Contains lowercase letter", self.lowercase),
            ("Contains uppercase letter", self.uppercase),
            ("Contains number", self.digit),
            ("Contains special character", self.symbol),
        ]
    }
}

/// Convenience for callers that only need the number.
pub fn strength_score(password: &str) -> u8 {
    PasswordChecks::of(password).score()
}

/// Severity bucket shown next to the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Fixed score→label lookup. Scores 0 and 1 both read as Weak.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}
