//! Settlement table parsing
//!
//! The B3 page renders one HTML table (id `tblDadosAjustes`) where a
//! commodity with several due dates only carries its name on the first row
//! of the group; continuation rows leave the name cell empty. The parser
//! flattens those groups back into one record per row.

use crate::errors::{BotError, BotResult};
use crate::settlements::types::Commodity;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

const TABLE_ID: &str = "tblDadosAjustes";

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(&format!("#{}", TABLE_ID)).expect("valid selector"));
static TBODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody").expect("valid selector"));
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// Parse the settlement page into records, in document row order
pub fn parse_settlement_table(html: &str) -> BotResult<Vec<Commodity>> {
    let document = Html::parse_document(html);

    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| BotError::Parse(format!("element #{} not found in page", TABLE_ID)))?;

    let tbody = table
        .select(&TBODY_SELECTOR)
        .next()
        .ok_or_else(|| BotError::Parse(format!("element #{} has no tbody", TABLE_ID)))?;

    let mut commodities = Vec::new();
    let mut current_name = String::new();

    for row in tbody.select(&ROW_SELECTOR) {
        let cells: Vec<String> = row
            .select(&CELL_SELECTOR)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < 6 {
            return Err(BotError::Parse(format!(
                "settlement row has {} cells, expected 6",
                cells.len()
            )));
        }

        // Continuation rows omit the name; carry the last one seen forward.
        if !cells[0].is_empty() {
            current_name = cells[0].clone();
        }

        commodities.push(Commodity::new(
            current_name.clone(),
            cells[1].clone(),
            cells[2].clone(),
            cells[3].clone(),
            cells[4].clone(),
            cells[5].clone(),
        ));
    }

    Ok(commodities)
}
