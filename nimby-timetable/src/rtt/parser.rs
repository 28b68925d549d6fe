//! Realtime Trains "detailed" page to timetable conversion.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::domain::{Location, Td, decode_half_marked};
use crate::timetable::Timetable;

use super::error::RttError;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static LOCATION_LIST: LazyLock<Selector> = LazyLock::new(|| selector("div.locationlist"));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector("a.name"));
static WTT: LazyLock<Selector> = LazyLock::new(|| selector("div.wtt"));
static ARRIVAL: LazyLock<Selector> = LazyLock::new(|| selector("div.arr"));
static DEPARTURE: LazyLock<Selector> = LazyLock::new(|| selector("div.dep"));
static ALLOWANCE: LazyLock<Selector> = LazyLock::new(|| selector("span.allowance"));
static PATH_ALLOWANCE: LazyLock<Selector> = LazyLock::new(|| selector("span.pth"));
static ENG_ALLOWANCE: LazyLock<Selector> = LazyLock::new(|| selector("span.eng"));
static PERF_ALLOWANCE: LazyLock<Selector> = LazyLock::new(|| selector("span.prf"));
static PLATFORM: LazyLock<Selector> = LazyLock::new(|| selector("div.platform"));
static PATH: LazyLock<Selector> = LazyLock::new(|| selector("div.path"));
static LINE: LazyLock<Selector> = LazyLock::new(|| selector("div.line"));

/// Parse a Realtime Trains detailed service page.
///
/// `date` is the service date, usually from [`super::date_from_url`]. Times
/// are anchored to its midnight and rolled forward past midnight as the
/// service runs.
///
/// A location with no arrival time is a pass, except the origin.
pub fn parse_page(contents: &str, date: NaiveDate) -> Result<Timetable, RttError> {
    let page = Html::parse_document(contents);

    let td = extract_td(&page)?;
    if !td.is_standard_headcode() {
        debug!(td = %td, "page identifier is not a standard headcode");
    }

    let location_list = page
        .select(&LOCATION_LIST)
        .next()
        .ok_or(RttError::MissingLocationList)?;
    let stops = split_locations(location_list);

    let start = date.and_time(NaiveTime::MIN);
    let mut last_time = start;
    let mut locations = Vec::with_capacity(stops.len());

    for (index, stop) in stops.into_iter().enumerate() {
        let location = parse_location(stop, index, start, last_time)?;
        trace!(name = %location.name, is_pass = location.is_pass, "parsed location");

        // The terminal's departure cell is empty
        if let Some(departure) = location.departure_time {
            last_time = departure;
        }
        locations.push(location);
    }

    debug!(td = %td, locations = locations.len(), "parsed service page");

    Timetable::new(locations, td).ok_or(RttError::NoLocations)
}

fn extract_td(page: &Html) -> Result<Td, RttError> {
    let title = page.select(&TITLE).next().ok_or(RttError::MissingTitle)?;
    Td::from_title(&text_of(title)).ok_or(RttError::MissingTitle)
}

/// Direct `div` children of the location list, minus the header row.
fn split_locations(location_list: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    location_list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "div")
        .filter(|child| !child.value().classes().any(|class| class == "titlerow"))
        .collect()
}

fn parse_location(
    stop: ElementRef<'_>,
    index: usize,
    date: NaiveDateTime,
    last_time: NaiveDateTime,
) -> Result<Location, RttError> {
    let name = find_text(stop, &NAME).ok_or_else(|| RttError::MissingElement {
        element: "name",
        stop: format!("location {}", index + 1),
    })?;

    let wtt = stop
        .select(&WTT)
        .next()
        .ok_or_else(|| RttError::MissingElement {
            element: "booked times",
            stop: name.clone(),
        })?;

    let decode = |text: &str| {
        decode_half_marked(text, date, last_time).map_err(|source| RttError::Time {
            stop: name.clone(),
            source,
        })
    };

    let arrival = match find_text(wtt, &ARRIVAL) {
        Some(text) => decode(&text)?,
        None => None,
    };
    let departure = match find_text(wtt, &DEPARTURE) {
        Some(text) => decode(&text)?,
        None => return Err(RttError::MissingDeparture(name)),
    };

    let allowance = stop.select(&ALLOWANCE).next();
    let allowance_text = |selector: &Selector| allowance.and_then(|a| find_text(a, selector));

    let required = |selector: &Selector, element: &'static str| {
        find_text(stop, selector).ok_or_else(|| RttError::MissingElement {
            element,
            stop: name.clone(),
        })
    };

    let platform = required(&PLATFORM, "platform")?;
    let path = required(&PATH, "path")?;
    let line = required(&LINE, "line")?;

    Ok(Location {
        is_pass: arrival.is_none() && index != 0,
        arrival_time: arrival,
        departure_time: departure,
        platform: Some(platform),
        path: Some(path),
        line: Some(line),
        path_allowance: allowance_text(&PATH_ALLOWANCE),
        eng_allowance: allowance_text(&ENG_ALLOWANCE),
        perf_allowance: allowance_text(&PERF_ALLOWANCE),
        name,
    })
}

/// Text of the first descendant matching `selector`.
fn find_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(text_of)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
