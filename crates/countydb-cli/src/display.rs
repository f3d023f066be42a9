use clap::ValueEnum;
use countydb_core::{title_case, ByCity, ByCode, Record, Schema};

/// Which columns of a county-code lookup to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeView {
    Name,
    Seat,
    Both,
}

impl CodeView {
    /// Maps the single-letter prompt answers `n`, `s`, `b`.
    pub fn from_letter(s: &str) -> Option<Self> {
        match s {
            "n" => Some(CodeView::Name),
            "s" => Some(CodeView::Seat),
            "b" => Some(CodeView::Both),
            _ => None,
        }
    }
}

/// Which columns of a city lookup to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CityView {
    Plate,
    County,
    Both,
}

impl CityView {
    /// Maps the single-letter prompt answers `l`, `c`, `b`.
    pub fn from_letter(s: &str) -> Option<Self> {
        match s {
            "l" => Some(CityView::Plate),
            "c" => Some(CityView::County),
            "b" => Some(CityView::Both),
            _ => None,
        }
    }
}

pub fn render_county(code: &str, record: &Record<ByCode>, view: CodeView) -> String {
    let mut out = format!("\nInformation for county number {}: \n", code.trim());
    if matches!(view, CodeView::Name | CodeView::Both) {
        out.push_str(&format!("County: {}\n", record.county()));
    }
    if matches!(view, CodeView::Seat | CodeView::Both) {
        out.push_str(&format!("County Seat: {}\n", record.seat()));
    }
    out
}

pub fn render_city(city: &str, record: &Record<ByCity>, view: CityView) -> String {
    let mut out = format!("\nInformation for {}: \n", title_case(city));
    if matches!(view, CityView::County | CityView::Both) {
        out.push_str(&format!("County: {}\n", record.county()));
    }
    if matches!(view, CityView::Plate | CityView::Both) {
        out.push_str(&format!(
            "License Plate Prefix: {}\n",
            record.plate_prefix()
        ));
    }
    out
}

/// "1-56" style hint built from the smallest and largest loaded code.
pub fn code_range_hint<'a>(codes: impl Iterator<Item = &'a <ByCode as Schema>::Key>) -> String {
    let mut codes: Vec<u16> = codes.copied().collect();
    codes.sort_unstable();
    match (codes.first(), codes.last()) {
        (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
        _ => "listed in the dataset".to_string(),
    }
}
