//! Interactive input collection.
//!
//! Working timetable rows are pasted as a block ended by a blank line.
//! Realtime Trains locators are entered one per line.

use std::io::{self, BufRead};

/// Read lines up to the next blank line.
///
/// Returns `None` at end of input if nothing was read.
pub fn read_block<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<String>>> {
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(if lines.is_empty() { None } else { Some(lines) });
        }

        if line.trim().is_empty() {
            return Ok(Some(lines));
        }

        lines.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
}

/// Read a single trimmed line. Returns `None` at end of input.
pub fn read_locator<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
