//! The paginated print layout: one fixed-size cell per owned copy, filled
//! row-major across pages. Tokens never print. Image resolution goes
//! through the [`ImageSource`] seam, sequentially, and a failed card
//! becomes a placeholder cell instead of sinking the whole export.

use crate::catalog::Catalog;
use crate::error::{DeckError, Result};
use crate::ledger::DeckSnapshot;
use crate::model::{CardRecord, DeckCategory};

/// Page and cell geometry in points. Defaults are US Letter with standard
/// 2.5" x 3.5" card cells and a half-inch margin, giving 3 columns by 2
/// rows per page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSpec {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 36.0,
            cell_width: 180.0,
            cell_height: 252.0,
        }
    }
}

impl SheetSpec {
    pub fn columns(&self) -> usize {
        let usable = self.page_width - 2.0 * self.margin;
        ((usable / self.cell_width).floor() as usize).max(1)
    }

    pub fn rows(&self) -> usize {
        let usable = self.page_height - 2.0 * self.margin;
        ((usable / self.cell_height).floor() as usize).max(1)
    }

    pub fn cells_per_page(&self) -> usize {
        self.columns() * self.rows()
    }
}

/// What a cell shows: the card's resolved image, or its name as a stand-in
/// when resolution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellArt {
    Image(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub card_name: String,
    pub x: f32,
    pub y: f32,
    pub art: CellArt,
}

#[derive(Debug, Clone, Default)]
pub struct SheetPage {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub spec: SheetSpec,
    pub pages: Vec<SheetPage>,
    /// Cards that fell back to placeholders, for caller-side reporting.
    pub unresolved: Vec<String>,
}

/// Turns a card into something a cell can show. The production source
/// builds a URL; tests substitute failures at will.
pub trait ImageSource {
    fn resolve(&self, card: &CardRecord) -> Result<String>;
}

/// Resolves to `base_url + cleaned image path`; fails when the card has no
/// usable image path.
pub struct UrlImageSource {
    base_url: String,
}

impl UrlImageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ImageSource for UrlImageSource {
    fn resolve(&self, card: &CardRecord) -> Result<String> {
        let path = card.clean_image_path();
        if path.is_empty() {
            return Err(DeckError::ImageResolution {
                name: card.name.clone(),
                reason: "card has no image path".into(),
            });
        }
        Ok(format!("{}{}", self.base_url, path))
    }
}

/// Lay out every printable copy. Categories run in canonical order minus
/// Tokens; quantity N places N identical cells; placement is row-major,
/// new page when the rows are used up.
pub fn layout(
    snapshot: &DeckSnapshot,
    catalog: &Catalog,
    spec: SheetSpec,
    source: &dyn ImageSource,
) -> SheetLayout {
    let mut pages: Vec<SheetPage> = Vec::new();
    let mut unresolved = Vec::new();
    let per_page = spec.cells_per_page();
    let columns = spec.columns();
    let mut placed = 0usize;

    let printable = [
        DeckCategory::StartingGear,
        DeckCategory::MainDeck,
        DeckCategory::ForgeDeck,
    ];

    for category in printable {
        for entry in snapshot.category(category) {
            // Resolve once per distinct card; every copy shows the same art.
            let art = match catalog.get(&entry.card_name) {
                Some(card) => match source.resolve(card) {
                    Ok(url) => CellArt::Image(url),
                    Err(_) => {
                        unresolved.push(entry.card_name.clone());
                        CellArt::Placeholder(entry.card_name.clone())
                    }
                },
                None => {
                    unresolved.push(entry.card_name.clone());
                    CellArt::Placeholder(entry.card_name.clone())
                }
            };

            for _ in 0..entry.quantity {
                if placed % per_page == 0 {
                    pages.push(SheetPage::default());
                }
                let slot = placed % per_page;
                let col = slot % columns;
                let row = slot / columns;
                pages
                    .last_mut()
                    .expect("page pushed above")
                    .cells
                    .push(Cell {
                        card_name: entry.card_name.clone(),
                        x: spec.margin + col as f32 * spec.cell_width,
                        y: spec.margin + row as f32 * spec.cell_height,
                        art: art.clone(),
                    });
                placed += 1;
            }
        }
    }

    SheetLayout {
        spec,
        pages,
        unresolved,
    }
}
