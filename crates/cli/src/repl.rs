//! The interactive state prompt and site menu.

use crate::menu::{self, MenuCommand, StateCommand};
use crate::render::{self, SEPARATOR};
use crate::resolve::{NearbyPlacesClient, SiteCatalog, StateUrlDict, state_directory};
use npsfind_core::{Error, Site};
use std::io::{BufRead, Write};

const STATE_PROMPT: &str = "Enter a state name (e.g. Michigan, michigan) or exit: ";
const MENU_PROMPT: &str = "Choose the number for detail search or \"exit\" or \"back\": ";

/// Where the site menu hands control next.
enum MenuExit {
    Back,
    Quit,
}

pub struct Session {
    states: StateUrlDict,
    catalog: SiteCatalog,
    places: NearbyPlacesClient,
}

impl Session {
    pub fn new(states: StateUrlDict, catalog: SiteCatalog, places: NearbyPlacesClient) -> Self {
        Self { states, catalog, places }
    }

    /// Run until `exit` or end of input.
    ///
    /// Unknown states and bad menu choices are reported and the loop goes on;
    /// fetch, parse and cache errors end the session.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        loop {
            let Some(line) = prompt(input, out, STATE_PROMPT)? else {
                return Ok(());
            };

            let state = match menu::parse_state_command(&line) {
                StateCommand::Exit => return Ok(()),
                StateCommand::State(state) => state,
            };

            let Some(state_url) = state_directory::lookup(&self.states, &state).map(str::to_owned) else {
                writeln!(out, "[Error] Enter proper state name")?;
                continue;
            };

            let sites = self.catalog.list_sites(&state_url).await?;
            render::write_site_list(out, &state, &sites)?;

            match self.site_menu(&sites, input, out).await? {
                MenuExit::Back => continue,
                MenuExit::Quit => return Ok(()),
            }
        }
    }

    async fn site_menu<R: BufRead, W: Write>(
        &mut self,
        sites: &[Site],
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<MenuExit> {
        loop {
            let Some(line) = prompt(input, out, MENU_PROMPT)? else {
                return Ok(MenuExit::Quit);
            };

            let index = match menu::parse_menu_command(&line, sites.len()) {
                Ok(MenuCommand::Back) => return Ok(MenuExit::Back),
                Ok(MenuCommand::Exit) => return Ok(MenuExit::Quit),
                Ok(MenuCommand::Select(index)) => index,
                Err(e) => {
                    tracing::debug!("rejected menu input: {}", e);
                    writeln!(out, "[Error] Invalid input")?;
                    writeln!(out)?;
                    writeln!(out, "{SEPARATOR}")?;
                    continue;
                }
            };

            let site = &sites[index];
            match self.places.fetch(site).await {
                Ok(result) => render::write_places(out, site, &result)?,
                Err(e @ Error::PlacesAuth(_)) => writeln!(out, "[Error] {e}")?,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Print `text` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> std::io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line))
}
