//! Plain-text output for the interactive session.

use npsfind_client::{Place, PlacesResult};
use npsfind_core::Site;
use std::io::{self, Write};

pub const SEPARATOR: &str = "----------------------------------";

/// One nearby place as `<name> (<category>): <address>, <city>`.
pub fn place_line(place: &Place) -> String {
    let fields = &place.fields;
    format!(
        "{} ({}): {}, {}",
        place.name,
        fields.category().unwrap_or("no category"),
        fields.address().unwrap_or("no address"),
        fields.city().unwrap_or("no city"),
    )
}

/// Numbered site listing for a state.
pub fn write_site_list<W: Write>(out: &mut W, state: &str, sites: &[Site]) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "List of national sites in {state}")?;
    writeln!(out, "{SEPARATOR}")?;
    for (i, site) in sites.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, site.info())?;
    }
    Ok(())
}

pub fn write_places<W: Write>(out: &mut W, site: &Site, result: &PlacesResult) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Places near {}", site.name())?;
    writeln!(out, "{SEPARATOR}")?;

    if !result.has_results() {
        writeln!(out, "No such near results")?;
        return writeln!(out, "{SEPARATOR}");
    }

    for place in result.places() {
        writeln!(out, "- {}", place_line(&place))?;
    }
    Ok(())
}
