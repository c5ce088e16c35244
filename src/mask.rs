//! Cells excluded from wall removal

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context};
use image::DynamicImage;

use crate::Point;

/// Set of cells whose walls must never be knocked down.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Mask {
    cells: HashSet<Point>,
}

impl Mask {
    /// Luma values below this count as black.
    const BLACK_THRESHOLD: u8 = 128;

    pub fn new() -> Self {
        Self::default()
    }

    /// Read mask from an image file
    ///
    /// Black pixels become masked cells. The image has to be exactly
    /// `width` by `height` pixels; a 1-bit PBM is the intended input, but
    /// any format the `image` crate decodes is accepted.
    ///
    /// Returns error, if the image cannot be decoded or has the wrong size.
    pub fn load(path: &Path, width: usize, height: usize) -> anyhow::Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("Cannot decode mask image '{}'", path.display()))?;
        Self::from_image(&img, width, height)
            .with_context(|| format!("Cannot use mask image '{}'", path.display()))
    }

    /// Build mask from a decoded image, see [Self::load].
    pub fn from_image(img: &DynamicImage, width: usize, height: usize) -> anyhow::Result<Self> {
        let luma = img.to_luma8();
        let (cols, rows) = luma.dimensions();
        if usize::try_from(cols)? != width || usize::try_from(rows)? != height {
            bail!(
                "expected {}*{} image, got {}*{}",
                width,
                height,
                cols,
                rows
            );
        }

        Ok(luma
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[0] < Self::BLACK_THRESHOLD)
            .map(|(x, y, _)| Point::new(y as usize, x as usize))
            .collect())
    }

    /// Mark `point` as masked. Returns `false` if it already was.
    pub fn insert(&mut self, point: Point) -> bool {
        self.cells.insert(point)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.cells.iter()
    }
}

impl FromIterator<Point> for Mask {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
