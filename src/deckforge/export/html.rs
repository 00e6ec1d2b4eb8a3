//! Renders a [`SheetLayout`] as a self-contained printable HTML document:
//! one fixed-size `.page` per layout page, cells absolutely positioned,
//! with a CSS page break after each page. The browser's print dialog does
//! the rasterizing; this module only describes geometry.

use crate::export::sheet::{CellArt, SheetLayout};

pub fn render(layout: &SheetLayout, title: &str) -> String {
    let spec = &layout.spec;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str("<style>\n");
    out.push_str(&format!(
        "  .page {{ position: relative; width: {}pt; height: {}pt; page-break-after: always; }}\n",
        spec.page_width, spec.page_height
    ));
    out.push_str(&format!(
        "  .cell {{ position: absolute; width: {}pt; height: {}pt; }}\n",
        spec.cell_width, spec.cell_height
    ));
    out.push_str("  .cell img { width: 100%; height: 100%; object-fit: contain; }\n");
    out.push_str(
        "  .placeholder { width: 100%; height: 100%; border: 1pt dashed #888; \
         display: flex; align-items: center; justify-content: center; \
         text-align: center; font-family: sans-serif; }\n",
    );
    out.push_str("</style>\n</head>\n<body>\n");

    for page in &layout.pages {
        out.push_str("<div class=\"page\">\n");
        for cell in &page.cells {
            out.push_str(&format!(
                "  <div class=\"cell\" style=\"left: {}pt; top: {}pt;\">",
                cell.x, cell.y
            ));
            match &cell.art {
                CellArt::Image(url) => {
                    out.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\">",
                        escape(url),
                        escape(&cell.card_name)
                    ));
                }
                CellArt::Placeholder(name) => {
                    out.push_str(&format!(
                        "<div class=\"placeholder\">{}</div>",
                        escape(name)
                    ));
                }
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
