//! Page navigation and the presentation layer.

mod html_surface;
mod introduction;
pub mod style;
mod surface;

pub use html_surface::HtmlSurface;
pub use introduction::introduction_blocks;
pub use style::{Align, Inline, TextBlock, TextRole};
pub use surface::{Block, DisplaySurface, ImageBlock, RecordingSurface};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::DashboardData;
use crate::error::{DashboardError, DashboardResult};

/// Pages offered by the navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Introduction,
    AboutTheData,
    Conclusion,
    Team,
}

impl Page {
    pub const ALL: [Self; 4] = [
        Self::Introduction,
        Self::AboutTheData,
        Self::Conclusion,
        Self::Team,
    ];

    /// Label shown by the navigation control; also the selection value.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::AboutTheData => "About the Data",
            Self::Conclusion => "Conclusion and Recommendations",
            Self::Team => "The Team",
        }
    }

    /// Matches a selection value against page titles, case-insensitively.
    #[must_use]
    pub fn from_selection(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.title().eq_ignore_ascii_case(selection))
    }

    /// Blocks this page shows. Only the introduction has content.
    #[must_use]
    pub fn blocks(self, assets: &Path) -> Vec<Block> {
        match self {
            Self::Introduction => introduction_blocks(assets),
            Self::AboutTheData | Self::Conclusion | Self::Team => Vec::new(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_selection(input)
            .ok_or_else(|| DashboardError::InvalidData(format!("unknown page `{input}`")))
    }
}

/// Renders the page named by `selection` onto `surface`.
///
/// Returns the matched page. An unrecognized selection renders nothing and
/// returns `Ok(None)`.
pub fn render_page<S: DisplaySurface>(
    selection: &str,
    data: &DashboardData,
    assets: &Path,
    surface: &mut S,
) -> DashboardResult<Option<Page>> {
    let Some(page) = Page::from_selection(selection) else {
        warn!(selection, "unknown page selection, rendering nothing");
        return Ok(None);
    };

    let blocks = page.blocks(assets);
    debug!(
        page = page.title(),
        blocks = blocks.len(),
        comparison_rows = data.comparison.len(),
        observation_rows = data.observations.len(),
        "dispatch page"
    );
    surface.emit_all(&blocks)?;
    Ok(Some(page))
}
