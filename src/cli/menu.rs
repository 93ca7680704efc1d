use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};

use super::printer::{print_flight_detail, print_rows};
use crate::data::configuration::MenuConfig;
use crate::entity::helpers::{self, FlightQuery, NewFlight};
use crate::error::FlightError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ViewFlights,
    SearchFlights,
    ViewCrew,
    AddFlight,
    UpdateStatus,
    DeleteFlight,
    AssignPilot,
    PilotSchedule,
    ViewDestinations,
    SetDestinationActive,
    DestinationReport,
    PilotReport,
}

impl MenuChoice {
    const ORDER: [MenuChoice; 13] = [
        MenuChoice::ViewFlights,
        MenuChoice::SearchFlights,
        MenuChoice::ViewCrew,
        MenuChoice::AddFlight,
        MenuChoice::UpdateStatus,
        MenuChoice::DeleteFlight,
        MenuChoice::AssignPilot,
        MenuChoice::PilotSchedule,
        MenuChoice::ViewDestinations,
        MenuChoice::SetDestinationActive,
        MenuChoice::DestinationReport,
        MenuChoice::PilotReport,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::ViewFlights => 1,
            MenuChoice::SearchFlights => 2,
            MenuChoice::ViewCrew => 3,
            MenuChoice::AddFlight => 4,
            MenuChoice::UpdateStatus => 5,
            MenuChoice::DeleteFlight => 6,
            MenuChoice::AssignPilot => 7,
            MenuChoice::PilotSchedule => 8,
            MenuChoice::ViewDestinations => 9,
            MenuChoice::SetDestinationActive => 10,
            MenuChoice::DestinationReport => 11,
            MenuChoice::PilotReport => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::ViewFlights => "View all flights",
            MenuChoice::SearchFlights => "Search flights (destination / status / date)",
            MenuChoice::ViewCrew => "View flight crew",
            MenuChoice::AddFlight => "Add flight",
            MenuChoice::UpdateStatus => "Update flight status",
            MenuChoice::DeleteFlight => "Delete flight",
            MenuChoice::AssignPilot => "Assign pilot to flight",
            MenuChoice::PilotSchedule => "View pilot schedule",
            MenuChoice::ViewDestinations => "View destinations",
            MenuChoice::SetDestinationActive => "Set destination active flag",
            MenuChoice::DestinationReport => "Report: flights per destination",
            MenuChoice::PilotReport => "Report: flights per pilot",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ORDER.into_iter().find(|c| c.number() == number)
    }
}

// Stored codes are upper case
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

fn parse_flight_id(input: &str) -> Result<i32, FlightError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| FlightError::validation(format!("flight id must be a number, got '{input}'")))
}

pub struct Menu<'a, R, W> {
    db: &'a DatabaseConnection,
    config: &'a MenuConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a DatabaseConnection, config: &'a MenuConfig, input: R, output: W) -> Self {
        Menu {
            db,
            config,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the operator exits or input ends. Only I/O failures end it early.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line("Select: ")? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Please choose a number from 0 to 12.")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }
            if let Err(err) = self.dispatch(choice).await {
                match err.downcast::<FlightError>() {
                    Ok(err) => {
                        log::warn!("{} failed: {err}", choice.label());
                        writeln!(self.output, "Error: {err}")?;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\n=== MENU ===")?;
        for choice in MenuChoice::ORDER {
            writeln!(self.output, "{}) {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, prompt: &str) -> std::io::Result<String> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        log::debug!("Menu choice {}", choice.number());
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::ViewFlights => self.view_flights().await,
            MenuChoice::SearchFlights => self.search_flights().await,
            MenuChoice::ViewCrew => self.view_crew().await,
            MenuChoice::AddFlight => self.add_flight().await,
            MenuChoice::UpdateStatus => self.update_status().await,
            MenuChoice::DeleteFlight => self.delete_flight().await,
            MenuChoice::AssignPilot => self.assign_pilot().await,
            MenuChoice::PilotSchedule => self.pilot_schedule().await,
            MenuChoice::ViewDestinations => self.view_destinations().await,
            MenuChoice::SetDestinationActive => self.set_destination_active().await,
            MenuChoice::DestinationReport => self.destination_report().await,
            MenuChoice::PilotReport => self.pilot_report().await,
        }
    }

    async fn view_flights(&mut self) -> anyhow::Result<()> {
        let rows = helpers::run_flight_query(self.db, &FlightQuery::default()).await?;
        print_rows(&mut self.output, &rows)?;
        Ok(())
    }

    async fn search_flights(&mut self) -> anyhow::Result<()> {
        let destination = normalize_code(&self.prompt("Destination code (blank = any): ")?);
        let status = self.prompt("Status (blank = any): ")?;
        let date = self.prompt("Departure date YYYY-MM-DD (blank = any): ")?;

        let criteria = FlightQuery::from_input(&destination, &status, &date);
        let rows = helpers::run_flight_query(self.db, &criteria).await?;
        print_rows(&mut self.output, &rows)?;
        Ok(())
    }

    async fn view_crew(&mut self) -> anyhow::Result<()> {
        let flight_id = parse_flight_id(&self.prompt("Flight id: ")?)?;
        let crew = helpers::flight_crew(self.db, flight_id).await?;
        print_rows(&mut self.output, &crew)?;
        Ok(())
    }

    async fn add_flight(&mut self) -> anyhow::Result<()> {
        let new = NewFlight {
            flight_no: self.prompt("Flight number: ")?,
            origin: normalize_code(&self.prompt("Origin code: ")?),
            destination: normalize_code(&self.prompt("Destination code: ")?),
            aircraft: self.prompt("Aircraft registration: ")?,
            departure: self.prompt("Departure (YYYY-MM-DD HH:MM): ")?,
            arrival: self.prompt("Arrival (YYYY-MM-DD HH:MM): ")?,
            status: self.prompt("Status (blank = Scheduled): ")?,
            terminal: self.prompt("Terminal (blank = none): ")?,
            gate: self.prompt("Gate (blank = none): ")?,
            tickets_sold: self.prompt("Tickets sold (blank = 0): ")?,
            notes: self.prompt("Notes (blank = none): ")?,
        };

        let flight_id = helpers::add_flight(self.db, &new).await?;
        let flight = helpers::find_flight(self.db, flight_id).await?;
        writeln!(self.output, "Flight added.")?;
        print_flight_detail(&mut self.output, &flight)?;
        Ok(())
    }

    async fn update_status(&mut self) -> anyhow::Result<()> {
        let flight_id = parse_flight_id(&self.prompt("Flight id: ")?)?;
        let status = self.prompt("New status: ")?;
        helpers::update_flight_status(self.db, flight_id, &status).await?;
        writeln!(self.output, "Status updated.")?;
        Ok(())
    }

    async fn delete_flight(&mut self) -> anyhow::Result<()> {
        let flight_id = parse_flight_id(&self.prompt("Flight id: ")?)?;
        let token = self.config.confirm_token.clone();
        let answer = self.prompt(&format!(
            "Type '{token}' to delete flight {flight_id}: "
        ))?;
        if answer != token {
            writeln!(self.output, "Delete cancelled.")?;
            return Ok(());
        }
        helpers::delete_flight(self.db, flight_id).await?;
        writeln!(self.output, "Flight deleted.")?;
        Ok(())
    }

    async fn assign_pilot(&mut self) -> anyhow::Result<()> {
        let flight_id = parse_flight_id(&self.prompt("Flight id: ")?)?;
        let license_no = self.prompt("Pilot license number: ")?;
        let role = self.prompt("Role (blank = pilot's rank): ")?;
        let assignment_id = helpers::assign_pilot(self.db, flight_id, &license_no, &role).await?;
        writeln!(self.output, "Pilot assigned (assignment {assignment_id}).")?;
        Ok(())
    }

    async fn pilot_schedule(&mut self) -> anyhow::Result<()> {
        let license_no = self.prompt("Pilot license number: ")?;
        let flights = helpers::pilot_schedule(self.db, &license_no).await?;
        print_rows(&mut self.output, &flights)?;
        Ok(())
    }

    async fn view_destinations(&mut self) -> anyhow::Result<()> {
        let rows = helpers::list_destinations(self.db).await?;
        print_rows(&mut self.output, &rows)?;
        Ok(())
    }

    async fn set_destination_active(&mut self) -> anyhow::Result<()> {
        let code = normalize_code(&self.prompt("Destination code: ")?);
        let flag = self.prompt("Active (1 = yes, 0 = no): ")?;
        helpers::set_destination_active(self.db, &code, &flag).await?;
        writeln!(self.output, "Destination {code} updated.")?;
        Ok(())
    }

    async fn destination_report(&mut self) -> anyhow::Result<()> {
        let rows = helpers::flights_per_destination(self.db).await?;
        print_rows(&mut self.output, &rows)?;
        Ok(())
    }

    async fn pilot_report(&mut self) -> anyhow::Result<()> {
        let rows = helpers::flights_per_pilot(self.db).await?;
        print_rows(&mut self.output, &rows)?;
        Ok(())
    }
}
