use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::charts::ChartPayload;
use crate::error::DashboardResult;
use crate::page::style::TextBlock;

/// Static image referenced by path; the core never reads its bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub path: PathBuf,
    pub alt: String,
    /// Stretch to the content column width.
    pub full_width: bool,
    pub width_px: Option<u32>,
}

impl ImageBlock {
    #[must_use]
    pub fn full_width(path: impl Into<PathBuf>, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt: alt.into(),
            full_width: true,
            width_px: None,
        }
    }
}

/// Everything a page can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Text(TextBlock),
    Image(ImageBlock),
    /// Vertical gap measured in blank lines.
    Spacer(u32),
    Chart(ChartPayload),
}

/// Sink accepting styled text, images and chart payloads.
///
/// One surface serves one render cycle; surfaces are never shared between
/// concurrent invocations.
pub trait DisplaySurface {
    fn text(&mut self, block: &TextBlock) -> DashboardResult<()>;

    fn image(&mut self, image: &ImageBlock) -> DashboardResult<()>;

    fn spacer(&mut self, lines: u32) -> DashboardResult<()>;

    fn chart(&mut self, chart: &ChartPayload) -> DashboardResult<()>;

    fn emit(&mut self, block: &Block) -> DashboardResult<()> {
        match block {
            Block::Text(text) => self.text(text),
            Block::Image(image) => self.image(image),
            Block::Spacer(lines) => self.spacer(*lines),
            Block::Chart(chart) => self.chart(chart),
        }
    }

    fn emit_all(&mut self, blocks: &[Block]) -> DashboardResult<()> {
        for block in blocks {
            self.emit(block)?;
        }
        Ok(())
    }
}

/// Surface that keeps every emitted block in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    pub blocks: Vec<Block>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartPayload> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Chart(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl DisplaySurface for RecordingSurface {
    fn text(&mut self, block: &TextBlock) -> DashboardResult<()> {
        self.blocks.push(Block::Text(block.clone()));
        Ok(())
    }

    fn image(&mut self, image: &ImageBlock) -> DashboardResult<()> {
        self.blocks.push(Block::Image(image.clone()));
        Ok(())
    }

    fn spacer(&mut self, lines: u32) -> DashboardResult<()> {
        self.blocks.push(Block::Spacer(lines));
        Ok(())
    }

    fn chart(&mut self, chart: &ChartPayload) -> DashboardResult<()> {
        self.blocks.push(Block::Chart(chart.clone()));
        Ok(())
    }
}
