//! Pure SVG map renderer.
//!
//! Turns the static geometry plus the current visits and colors into a
//! standalone SVG document. States whose geometry is the placeholder
//! sentinel are skipped and left undrawn.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::settings::StatusColors;
use crate::geometry::{PLACEHOLDER_PATH, VIEW_BOX};
use crate::models::{StateId, Status};

/// Fill for states with no status.
pub const UNVISITED_FILL: &str = "#e8e8e8";

pub fn render_map(visits: &BTreeMap<StateId, Status>, colors: &StatusColors) -> String {
    let mut svg = String::with_capacity(8 * 1024);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{VIEW_BOX}">"#
    );
    for id in StateId::all() {
        let fill = match visits.get(&id) {
            Some(status) => colors.for_status(*status),
            None => UNVISITED_FILL,
        };
        if let Some(element) = path_element(id, id.path(), fill) {
            svg.push_str(&element);
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// One `<path>` element, or `None` when the geometry is not yet supplied.
fn path_element(id: StateId, d: &str, fill: &str) -> Option<String> {
    if d == PLACEHOLDER_PATH {
        return None;
    }
    Some(format!(
        "  <path id=\"{}\" class=\"state-path\" fill=\"{}\" d=\"{}\"><title>{}</title></path>\n",
        id.code(),
        fill,
        d,
        id.name(),
    ))
}
