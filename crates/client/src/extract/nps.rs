//! `scraper`-backed parser for nps.gov pages.

use super::PageParser;
use super::pages::{AddressBlock, DirectoryPage, ListEntry, MapRegion, SitePage, StatePage, TitleBlock};
use npsfind_core::Error;
use scraper::{ElementRef, Html, Selector};

/// Id prefix that marks a state page list item as a site.
const ASSET_ID_PREFIX: &str = "asset";

fn selector(css: &'static str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector {css}: {e}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of)
}

/// Parser for the current nps.gov page layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct NpsPageParser;

impl NpsPageParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_title(document: &Html) -> Result<Option<TitleBlock>, Error> {
        let container_sel = selector("div.Hero-titleContainer")?;
        let Some(container) = document.select(&container_sel).next() else {
            return Ok(None);
        };

        let name = first_text(container, &selector("a")?)
            .ok_or_else(|| Error::Parse("title block has no name link".into()))?;
        let category = first_text(container, &selector("span.Hero-designation")?)
            .ok_or_else(|| Error::Parse("title block has no designation".into()))?;

        Ok(Some(TitleBlock { name, category }))
    }

    fn parse_address(document: &Html) -> Result<Option<AddressBlock>, Error> {
        let block_sel = selector("p.adr")?;
        let Some(block) = document.select(&block_sel).next() else {
            return Ok(None);
        };

        let field = |css: &'static str, label: &str| -> Result<String, Error> {
            first_text(block, &selector(css)?).ok_or_else(|| Error::Parse(format!("address block has no {label}")))
        };

        Ok(Some(AddressBlock {
            city: field(r#"span[itemprop="addressLocality"]"#, "locality")?,
            region: field(r#"span[itemprop="addressRegion"]"#, "region")?,
            postal_code: field(r#"span[itemprop="postalCode"]"#, "postal code")?,
        }))
    }
}

impl PageParser for NpsPageParser {
    fn parse_directory(&self, html: &str) -> Result<DirectoryPage, Error> {
        let document = Html::parse_document(html);
        let area_sel = selector("area")?;

        let mut regions = Vec::new();
        for area in document.select(&area_sel) {
            let element = area.value();
            match (element.attr("alt"), element.attr("href")) {
                (Some(name), Some(href)) => {
                    regions.push(MapRegion { name: name.trim().to_string(), href: href.trim().to_string() })
                }
                _ => tracing::warn!("skipping map region without alt/href"),
            }
        }

        Ok(DirectoryPage { regions })
    }

    fn parse_state_page(&self, html: &str) -> Result<StatePage, Error> {
        let document = Html::parse_document(html);
        let item_sel = selector("li.clearfix")?;
        let link_sel = selector("div h3 a[href]")?;

        let entries = document
            .select(&item_sel)
            .map(|item| ListEntry {
                is_asset: item.value().id().is_some_and(|id| id.starts_with(ASSET_ID_PREFIX)),
                detail_href: item
                    .select(&link_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| href.trim().to_string()),
            })
            .collect();

        Ok(StatePage { entries })
    }

    fn parse_site_page(&self, html: &str) -> Result<SitePage, Error> {
        let document = Html::parse_document(html);

        let title = Self::parse_title(&document)?;
        let address = Self::parse_address(&document)?;
        let telephone = document.select(&selector(r#"span[itemprop="telephone"]"#)?).next().map(text_of);

        Ok(SitePage { title, address, telephone })
    }
}
