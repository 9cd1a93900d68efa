use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::RosterError;
use crate::rotation::{Player, Position};

/// Column indices located from the header row
struct Columns {
    name: usize,
    id: Option<usize>,
    position: Option<usize>,
    batting_order: Option<usize>,
    jersey: Option<usize>,
    cannot_pitch: Option<usize>,
    cannot_catch: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, RosterError> {
        let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let name = find_column(&lower, |h| h.contains("name")).ok_or(RosterError::MissingNameColumn)?;

        Ok(Columns {
            name,
            id: find_column(&lower, |h| h == "id" || h.ends_with(" id") || h.ends_with("_id")),
            position: find_column(&lower, |h| h.contains("position")),
            batting_order: find_column(&lower, |h| h.contains("batting") || h.contains("order")),
            jersey: find_column(&lower, |h| h.contains("jersey") || h.contains("number")),
            cannot_pitch: find_column(&lower, |h| h.contains("pitch")),
            cannot_catch: find_column(&lower, |h| h.contains("catch")),
        })
    }
}

fn find_column(headers: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    headers.iter().position(|h| pred(h.as_str()))
}

/// Parses a boolean value from various string representations
fn parse_bool(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower == "yes" || lower == "true" || lower == "1" || lower == "x"
}

fn cell<'r>(record: &'r StringRecord, col: Option<usize>) -> &'r str {
    col.and_then(|c| record.get(c)).unwrap_or("").trim()
}

/// Loads a roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Player>, RosterError> {
    let path = csv_path.as_ref();
    let reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let players = parse_roster(reader)?;
    info!(path = %path.display(), players = players.len(), "roster loaded");
    Ok(players)
}

/// Reads a roster from any CSV source.
///
/// Rows without a name are skipped. A repeated id overwrites the earlier row
/// in place, so roster order follows first appearance.
pub fn read_roster<R: Read>(source: R) -> Result<Vec<Player>, RosterError> {
    parse_roster(ReaderBuilder::new().flexible(true).from_reader(source))
}

fn parse_roster<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Player>, RosterError> {
    let columns = Columns::locate(reader.headers()?)?;

    let mut players: Vec<Player> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // header is row 1
        let row = index + 2;

        let name = cell(&record, Some(columns.name)).to_string();
        if name.is_empty() {
            debug!(row, "skipping roster row without a name");
            continue;
        }

        let id = match cell(&record, columns.id) {
            "" => format!("player-{row}"),
            id => id.to_string(),
        };

        let batting_order = match cell(&record, columns.batting_order) {
            "" => match slots.get(&id) {
                Some(&slot) => players[slot].batting_order,
                None => players.len() as i32 + 1,
            },
            raw => raw.parse().map_err(|_| RosterError::InvalidBattingOrder {
                row,
                value: raw.to_string(),
            })?,
        };

        let jersey_number = match cell(&record, columns.jersey) {
            "" => None,
            jersey => Some(jersey.to_string()),
        };

        let player = Player {
            id: id.clone(),
            name,
            position: Position::from_code(cell(&record, columns.position)).unwrap_or(Position::Bench),
            batting_order,
            jersey_number,
            cannot_pitch: parse_bool(cell(&record, columns.cannot_pitch)),
            cannot_catch: parse_bool(cell(&record, columns.cannot_catch)),
        };

        match slots.get(&id) {
            Some(&slot) => {
                debug!(row, id = %id, "roster row replaces earlier entry");
                players[slot] = player;
            }
            None => {
                slots.insert(id, players.len());
                players.push(player);
            }
        }
    }

    Ok(players)
}
