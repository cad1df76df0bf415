//! Selection of the label typeface.

use std::cell::RefCell;
use std::future::Future;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::error::{BoxError, Error, FontOperation, Result};

/// A typeface: family and style, e.g. ("Roboto", "Bold").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        FontName { family: family.into(), style: style.into() }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Ordered list of label fonts.
///
/// All fonts but the last are only used when the host lists them.
/// The last one is the fallback: it is used without checking.
#[derive(Debug, Clone, PartialEq)]
pub struct FontPreferences {
    fonts: Vec<FontName>, // Invariant: non-empty, fallback last
}

lazy_static! {
    /// "SF Pro Text Bold", falling back to "Roboto Bold".
    pub static ref DEFAULT_FONTS: FontPreferences =
        FontPreferences::new(FontName::new("Roboto", "Bold"))
        .prefer(FontName::new("SF Pro Text", "Bold"));
}

impl FontPreferences {
    /// Preferences with only a fallback font.
    pub fn new(fallback: FontName) -> Self {
        FontPreferences { fonts: vec![fallback] }
    }

    /// Add `font` after the already preferred fonts (and before the
    /// fallback).
    pub fn prefer(mut self, font: FontName) -> Self {
        let last = self.fonts.len() - 1;
        self.fonts.insert(last, font);
        self
    }

    /// The fonts to look for, most preferred first.
    pub fn preferred(&self) -> &[FontName] {
        &self.fonts[.. self.fonts.len() - 1]
    }

    pub fn fallback(&self) -> &FontName {
        &self.fonts[self.fonts.len() - 1]
    }

    /// Return the first preferred font present in `available`, if
    /// any.
    pub fn find_preferred<'a>(&'a self, available: &[FontName])
                              -> Option<&'a FontName> {
        self.preferred().iter().find(|f| available.contains(f))
    }

    /// Return the first preferred font present in `available`, or
    /// the fallback.
    pub fn select<'a>(&'a self, available: &[FontName]) -> &'a FontName {
        self.find_preferred(available).unwrap_or_else(|| self.fallback())
    }
}

impl Default for FontPreferences {
    fn default() -> Self { DEFAULT_FONTS.clone() }
}

/// Font services of the host.
pub trait FontService {
    type Error: Into<BoxError>;

    /// Return all fonts the host can use.
    fn list_available_fonts(&self)
        -> impl Future<Output = std::result::Result<Vec<FontName>, Self::Error>>;

    /// Complete once `font` is ready to be used.
    fn load_font(&self, font: &FontName)
        -> impl Future<Output = std::result::Result<(), Self::Error>>;
}

/// Select a font among `prefs` and make sure the host loaded it.
///
/// Failures of the host are returned as [`Error::FontService`]; they
/// are not retried.
pub async fn resolve_font<S>(service: &S, prefs: &FontPreferences)
                             -> Result<FontName>
where S: FontService {
    let available = service.list_available_fonts().await
        .map_err(|e| Error::FontService { operation: FontOperation::List,
                                          source: e.into() })?;
    let font = match prefs.find_preferred(&available) {
        Some(f) => f.clone(),
        None => {
            let f = prefs.fallback().clone();
            if !prefs.preferred().is_empty() {
                warn!("no preferred label font available, using {f}");
            }
            f
        }
    };
    service.load_font(&font).await
        .map_err(|e| Error::FontService { operation: FontOperation::Load,
                                          source: e.into() })?;
    debug!("label font: {font}");
    Ok(font)
}

/// A [`FontService`] with a fixed list of fonts, which records the
/// fonts it loads.
#[derive(Debug, Default)]
pub struct StaticFonts {
    available: Vec<FontName>,
    loaded: RefCell<Vec<FontName>>,
}

impl StaticFonts {
    pub fn new(available: impl IntoIterator<Item = FontName>) -> Self {
        StaticFonts { available: available.into_iter().collect(),
                      loaded: RefCell::new(vec![]) }
    }

    /// Fonts loaded so far, in order.
    pub fn loaded(&self) -> Vec<FontName> { self.loaded.borrow().clone() }
}

impl FontService for StaticFonts {
    type Error = std::convert::Infallible;

    async fn list_available_fonts(&self)
                                  -> std::result::Result<Vec<FontName>, Self::Error> {
        Ok(self.available.clone())
    }

    async fn load_font(&self, font: &FontName)
                       -> std::result::Result<(), Self::Error> {
        self.loaded.borrow_mut().push(font.clone());
        Ok(())
    }
}
