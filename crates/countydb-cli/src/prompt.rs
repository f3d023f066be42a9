//! Interactive prompt loops.
//!
//! Every answer is trimmed and lower-cased before it is interpreted. `q`
//! quits from any prompt and end of input behaves like `q`. Recoverable core
//! errors are printed and the prompt repeats; anything else is returned to
//! the caller.

use crate::display::{code_range_hint, render_city, render_county, CityView, CodeView};
use anyhow::Result;
use countydb_core::{title_case, AddStatus, ByCity, ByCode, CountyDbError, Dataset};
use std::io::{BufRead, Write};

const QUIT: &str = "q";

/// Whether the user asked to leave the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(QUIT.to_string());
        }
        Ok(line.trim().to_lowercase())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// County-code lookup loop.
    ///
    /// With `fixed_view` set the view question is skipped.
    pub fn run_code_lookup(
        &mut self,
        db: &Dataset<ByCode>,
        fixed_view: Option<CodeView>,
    ) -> Result<()> {
        let range = code_range_hint(db.store().iter().map(|(k, _)| k));

        loop {
            let input = self.ask("Enter your county number ('q' to quit): ")?;
            if input.is_empty() {
                self.say("Please enter some text")?;
                continue;
            }
            if input == QUIT {
                return Ok(());
            }

            match db.find(&input) {
                Ok(Some(record)) => {
                    let view = match fixed_view {
                        Some(v) => Some(v),
                        None => self.ask_code_view()?,
                    };
                    if let Some(view) = view {
                        self.say(&render_county(&input, record, view))?;
                    }
                }
                Ok(None) => {
                    self.say(&format!("Invalid county code, please enter a number from {range}"))?;
                }
                Err(e) if e.is_recoverable() => {
                    self.say(&format!("Invalid input, please enter a number from {range}.\n"))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// `None` means "go back".
    fn ask_code_view(&mut self) -> Result<Option<CodeView>> {
        loop {
            let answer = self.ask(
                "Do you want to view county name ('n'), seat ('s'), both ('b') or go back ('q')? ",
            )?;
            if answer == QUIT {
                return Ok(None);
            }
            match CodeView::from_letter(&answer) {
                Some(view) => return Ok(Some(view)),
                None => self.say(
                    "Invalid view mode, please enter 'n' for county name, 's' for seat, \
                     'b' for both, or 'q' to go back.",
                )?,
            }
        }
    }

    /// City lookup loop with the offer to add unknown cities.
    pub fn run_city_lookup(
        &mut self,
        db: &mut Dataset<ByCity>,
        fixed_view: Option<CityView>,
    ) -> Result<()> {
        let view = match fixed_view {
            Some(v) => v,
            None => match self.ask_city_view()? {
                Some(v) => v,
                None => return Ok(()),
            },
        };

        loop {
            let city = self.ask("Enter city name ('q' to quit): ")?;
            if city == QUIT {
                return Ok(());
            }
            if city.is_empty() {
                self.say("Please enter some text")?;
                continue;
            }

            let found = match db.find(&city) {
                Ok(found) => found.map(|r| render_city(&city, r, view)),
                Err(e) if e.is_recoverable() => {
                    self.say(&e.to_string())?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match found {
                Some(text) => self.say(&text)?,
                None => {
                    self.say(&format!(
                        "\nThe database doesn't have records for {}",
                        title_case(&city)
                    ))?;
                    if self.offer_add(db, &city)? == Flow::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// `None` means quit.
    fn ask_city_view(&mut self) -> Result<Option<CityView>> {
        loop {
            self.say("When viewing county data,")?;
            let answer = self.ask(
                "do you want to view license plate prefix ('l'), county ('c'), \
                 or both ('b')? ('q' to quit) ",
            )?;
            if answer == QUIT {
                return Ok(None);
            }
            match CityView::from_letter(&answer) {
                Some(view) => return Ok(Some(view)),
                None => self.say(&format!("Invalid view mode: {answer}"))?,
            }
        }
    }

    fn offer_add(&mut self, db: &mut Dataset<ByCity>, city: &str) -> Result<Flow> {
        loop {
            match self.ask("Would you like to add it to the database? (y/n) ")?.as_str() {
                QUIT => return Ok(Flow::Quit),
                "y" => return self.choose_county(db, city),
                "n" => return Ok(Flow::Continue),
                _ => self.say("Invalid option, please enter y or n.")?,
            }
        }
    }

    fn choose_county(&mut self, db: &mut Dataset<ByCity>, city: &str) -> Result<Flow> {
        let display = title_case(city);

        loop {
            self.say(
                "\nGiven county must be a valid Montana county, \
                 type 'l' to list all counties in Montana",
            )?;
            let county = self.ask(&format!("Enter county for {display}: "))?;

            if county == QUIT {
                return Ok(Flow::Quit);
            }
            if county.is_empty() {
                self.say("Please enter some text")?;
                continue;
            }
            if county == "l" {
                for name in db.counties().display_names() {
                    self.say(&name)?;
                }
                continue;
            }

            match db.add(city, &county) {
                Ok(AddStatus::Added(_)) => {
                    self.say(&format!("\nSuccessfully added {display} to the database\n"))?;
                    return Ok(Flow::Continue);
                }
                Ok(AddStatus::AlreadyExists(_)) => {
                    self.say(&format!("{display} is already in the database\n"))?;
                    return Ok(Flow::Continue);
                }
                Ok(AddStatus::NotAValidCounty(name)) => {
                    self.say(&format!(
                        "{name} is not a county in Montana, consider checking your spelling\n"
                    ))?;
                }
                Err(e @ CountyDbError::InvalidInput(_)) => {
                    self.say(&e.to_string())?;
                    return Ok(Flow::Continue);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
