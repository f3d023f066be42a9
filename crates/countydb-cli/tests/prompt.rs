use countydb_cli::display::CodeView;
use countydb_cli::prompt::Session;
use countydb_core::{ByCity, ByCode, Dataset, LoadOptions};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn run_code(db: &Dataset<ByCode>, script: &str, view: Option<CodeView>) -> String {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
    session.run_code_lookup(db, view).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn run_city(db: &mut Dataset<ByCity>, script: &str) -> String {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
    session.run_city_lookup(db, None).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn code_lookup_shows_requested_view() {
    let (_dir, path) = write_temp(
        "counties.csv",
        "County,County Seat,County Code\nSilver Bow,Butte,1\nYellowstone,Billings,56\n",
    );
    let db = Dataset::<ByCode>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_code(&db, "\n56\nx\ns\n999\nabc\nq\n", None);

    assert!(out.contains("Please enter some text"));
    assert!(out.contains("Invalid view mode"));
    assert!(out.contains("County Seat: Billings"));
    assert!(!out.contains("County: Yellowstone"));
    assert!(out.contains("Invalid county code, please enter a number from 1-56"));
    assert!(out.contains("Invalid input, please enter a number from 1-56."));
}

#[test]
fn code_lookup_with_fixed_view_and_eof() {
    let (_dir, path) = write_temp("counties.csv", "Yellowstone,Billings,56\n");
    let db = Dataset::<ByCode>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_code(&db, "56", Some(CodeView::Both));

    assert!(out.contains("County: Yellowstone"));
    assert!(out.contains("County Seat: Billings"));
    assert!(!out.contains("Do you want to view"));
}

#[test]
fn city_lookup_shows_chosen_columns() {
    let (_dir, path) = write_temp("cities.csv", "County,City,LP\nCascade,Great Falls,2\n");
    let mut db = Dataset::<ByCity>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_city(&mut db, "z\nl\nGREAT FALLS\nq\n");

    assert!(out.contains("Invalid view mode: z"));
    assert!(out.contains("Information for Great Falls:"));
    assert!(out.contains("License Plate Prefix: 2"));
    assert!(!out.contains("County: Cascade"));
}

#[test]
fn unknown_city_can_be_added_after_a_bad_county() {
    let (_dir, path) = write_temp("cities.csv", "County,City,LP\nSilver Bow,Butte,2\n");
    let mut db = Dataset::<ByCity>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_city(&mut db, "b\nanaconda\nmaybe\ny\nl\nada\nsilver bow\nanaconda\nq\n");

    assert!(out.contains("The database doesn't have records for Anaconda"));
    assert!(out.contains("Invalid option, please enter y or n."));
    assert!(out.contains("Silver Bow\n"));
    assert!(out.contains("ada is not a county in Montana"));
    assert!(out.contains("Successfully added Anaconda to the database"));
    assert!(out.contains("County: Silver Bow"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "County,City,LP\nSilver Bow,Butte,2\nSilver Bow,Anaconda,2\n"
    );
    assert!(db.find("anaconda").unwrap().is_some());
}

#[test]
fn declining_to_add_leaves_file_alone() {
    let (_dir, path) = write_temp("cities.csv", "Silver Bow,Butte,2\n");
    let mut db = Dataset::<ByCity>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_city(&mut db, "c\nhelena\nn\nq\n");

    assert!(out.contains("The database doesn't have records for Helena"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Silver Bow,Butte,2\n");
}

#[test]
fn quit_from_county_prompt_ends_session() {
    let (_dir, path) = write_temp("cities.csv", "Silver Bow,Butte,2\n");
    let mut db = Dataset::<ByCity>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_city(&mut db, "b\nhelena\ny\nq\nbutte\n");

    assert!(!out.contains("Information for Butte"));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn blank_county_answer_reprompts() {
    let (_dir, path) = write_temp("cities.csv", "Silver Bow,Butte,2\n");
    let mut db = Dataset::<ByCity>::open(&path, LoadOptions::strict()).unwrap();

    let out = run_city(&mut db, "b\nwalkerville\ny\n   \nsilver bow\nq\n");

    assert!(out.contains("Please enter some text"));
    assert!(!out.contains(" is not a county in Montana"));
    assert!(out.contains("Successfully added Walkerville to the database"));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
}
