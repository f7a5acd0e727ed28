//! Configuration for the PDF export embedded in the generated page.

use crate::error::{Error, Result};

/// Page orientation for the exported PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait orientation.
    #[default]
    Portrait,
    /// Landscape orientation.
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Options for the in-page PDF export.
///
/// These values are interpolated into the `downloadPortfolio()` script of the
/// generated document and handed to the client-side renderer unchanged. The
/// output filename itself is derived from the profile name at assembly time.
///
/// Use the builder pattern to construct a configuration:
///
/// ```rust
/// use folio_gen::{Config, Orientation};
///
/// let config = Config::new()
///     .margins([12.0, 12.0, 12.0, 12.0])
///     .scale(2)
///     .orientation(Orientation::Landscape);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page margins in millimeters: top, right, bottom, left.
    pub margins: [f32; 4],

    /// JPEG quality for rasterized images, in `(0.0, 1.0]`.
    pub image_quality: f32,

    /// Canvas rasterization scale. Higher values give crisper output at the
    /// cost of export time.
    pub scale: u32,

    /// Page width in millimeters.
    pub page_width: u32,

    /// Page height in millimeters.
    pub page_height: u32,

    /// Page orientation.
    pub orientation: Orientation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margins: [10.0, 10.0, 10.0, 10.0],
            image_quality: 0.98,
            scale: 4,
            page_width: 508,
            page_height: 286,
            orientation: Orientation::Portrait,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    ///
    /// Defaults:
    /// - Margins: 10 mm on each side
    /// - Image quality: 0.98
    /// - Scale: 4
    /// - Page: 508 x 286 mm, portrait
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page margins in millimeters (top, right, bottom, left).
    pub fn margins(mut self, margins: [f32; 4]) -> Self {
        self.margins = margins;
        self
    }

    /// Set the same margin in millimeters on all four sides.
    pub fn margin(self, margin: f32) -> Self {
        self.margins([margin; 4])
    }

    /// Set the JPEG quality for rasterized images.
    ///
    /// Must be in `(0.0, 1.0]`.
    pub fn image_quality(mut self, quality: f32) -> Self {
        self.image_quality = quality;
        self
    }

    /// Set the canvas rasterization scale.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the page dimensions in millimeters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_gen::Config;
    ///
    /// let config = Config::new().page_size(210, 297); // A4
    /// assert_eq!(config.page_width, 210);
    /// assert_eq!(config.page_height, 297);
    /// ```
    pub fn page_size(mut self, width: u32, height: u32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the page orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Check that the configuration describes a usable export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if any page dimension is zero, the
    /// scale is zero, the image quality is outside `(0.0, 1.0]`, or any
    /// margin is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.page_width == 0 {
            return Err(Error::InvalidConfig("page width must be non-zero".into()));
        }
        if self.page_height == 0 {
            return Err(Error::InvalidConfig("page height must be non-zero".into()));
        }
        if self.scale == 0 {
            return Err(Error::InvalidConfig("scale must be non-zero".into()));
        }
        if !self.image_quality.is_finite()
            || self.image_quality <= 0.0
            || self.image_quality > 1.0
        {
            return Err(Error::InvalidConfig(format!(
                "image quality must be in (0.0, 1.0], got {}",
                self.image_quality
            )));
        }
        if self
            .margins
            .iter()
            .any(|m| !m.is_finite() || *m < 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "margins must be finite and non-negative, got {:?}",
                self.margins
            )));
        }
        Ok(())
    }
}
