//! `timetable` CLI - replay, query and audit department timetable plans.
//!
//! A plan is a JSON document holding the catalog (professors, classrooms,
//! courses) and an ordered list of `add` / `reassign` / `cancel` operations.
//! Every subcommand replays the plan through the conflict engine first.
//!
//! ## Usage
//!
//! ```sh
//! # Replay a plan and print the outcome of every operation
//! timetable apply -i plan.json
//!
//! # Write the resulting schedule to a file
//! timetable apply -i plan.json -o schedule.json
//!
//! # Free rooms on Monday morning (plan read from stdin)
//! cat plan.json | timetable available --day Monday --slot 8:30-10:00
//!
//! # Free rooms for a calendar date and time of day
//! timetable available -i plan.json --date 2026-10-19 --at 09:15
//!
//! # A professor's week, sorted by day and slot
//! timetable agenda -i plan.json --professor 1
//!
//! # Room usage, course popularity and professor load
//! timetable report -i plan.json --json
//!
//! # List double-bookings among the proposed lessons without applying them
//! timetable audit -i plan.json
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` sets the filter (default `warn`);
//! `-v`, `-vv` and `-vvv` override it with info, debug and trace.

mod plan;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use timetable_engine::query::{ProfessorLoad, RoomUtilization};
use timetable_engine::{find_conflicts, CourseType, DayOfWeek, EngineOptions, TimeSlot, Timetable};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::plan::Plan;

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Conflict-free lesson placement for a department timetable"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only check classroom references; accept unknown courses and professors
    #[arg(long, global = true)]
    permissive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the plan and print the outcome of every operation
    Apply {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Write the resulting schedule as JSON (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List classrooms that are free in a grid cell
    Available {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day of week, e.g. "Monday"
        #[arg(long, conflicts_with = "date", required_unless_present = "date")]
        day: Option<DayOfWeek>,
        /// Calendar date whose weekday is used, e.g. 2026-10-19
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Time slot label, e.g. "8:30-10:00"
        #[arg(long, conflicts_with = "at", required_unless_present = "at")]
        slot: Option<TimeSlot>,
        /// Time of day (HH:MM) that falls inside the wanted slot
        #[arg(long, value_parser = parse_time_of_day)]
        at: Option<NaiveTime>,
    },
    /// Show a professor's lessons sorted by day and slot
    Agenda {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Professor id
        #[arg(long)]
        professor: u32,
    },
    /// Show classroom utilization (all rooms, or one with --room)
    Utilization {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Room number
        #[arg(long)]
        room: Option<String>,
    },
    /// Summarize the replayed timetable
    Report {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find double-bookings among the plan's proposed lessons (exit 1 if any)
    Audit {
        /// Plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Serialize)]
struct Report {
    most_popular_course_type: CourseType,
    lessons: usize,
    classrooms: Vec<RoomUtilization>,
    professors: Vec<ProfessorLoad>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Apply { input, output } => {
            let plan = load_plan(input.as_deref())?;
            let (timetable, outcomes) = plan.replay(options(&plan, cli.permissive))?;
            for outcome in &outcomes {
                println!("{}", outcome);
            }
            let schedule = serde_json::to_string_pretty(timetable.lessons())?;
            match output.as_deref() {
                Some(path) => {
                    std::fs::write(path, schedule)
                        .with_context(|| format!("Failed to write file: {}", path))?;
                    info!(path, lessons = timetable.lessons().len(), "schedule written");
                }
                None => println!("{}", schedule),
            }
        }
        Commands::Available {
            input,
            day,
            date,
            slot,
            at,
        } => {
            let day = match (day, date) {
                (Some(day), _) => day,
                (None, Some(date)) => DayOfWeek::try_from(date.weekday())
                    .with_context(|| format!("No lessons are held on {}", date))?,
                (None, None) => anyhow::bail!("Either --day or --date is required"),
            };
            let slot = match (slot, at) {
                (Some(slot), _) => slot,
                (None, Some(at)) => TimeSlot::containing(at)
                    .with_context(|| format!("{} is not inside any time slot", at.format("%H:%M")))?,
                (None, None) => anyhow::bail!("Either --slot or --at is required"),
            };
            let timetable = replay(input.as_deref(), cli.permissive)?;
            for room in timetable.available_classrooms(day, slot) {
                println!("{}", room);
            }
        }
        Commands::Agenda { input, professor } => {
            let timetable = replay(input.as_deref(), cli.permissive)?;
            if timetable.catalog().find_professor(professor).is_none() {
                anyhow::bail!("Unknown professor: {}", professor);
            }
            for lesson in timetable.professor_agenda(professor) {
                let course = timetable
                    .catalog()
                    .find_course(lesson.course_id)
                    .map(|c| format!("{} ({})", c.name, c.kind))
                    .unwrap_or_else(|| format!("course {}", lesson.course_id));
                println!(
                    "{:<22} room {:<6} lesson {:<4} {}",
                    lesson.cell().to_string(),
                    lesson.classroom_number,
                    lesson.id,
                    course
                );
            }
        }
        Commands::Utilization { input, room } => {
            let timetable = replay(input.as_deref(), cli.permissive)?;
            match room {
                Some(room) => {
                    if timetable.catalog().find_classroom(&room).is_none() {
                        anyhow::bail!("Unknown classroom: '{}'", room);
                    }
                    println!("{}: {:.1}%", room, timetable.classroom_utilization(&room));
                }
                None => {
                    for row in timetable.utilization_report() {
                        println!("{}: {:.1}%", row.number, row.percent);
                    }
                }
            }
        }
        Commands::Report { input, json } => {
            let timetable = replay(input.as_deref(), cli.permissive)?;
            let report = Report {
                most_popular_course_type: timetable.most_popular_course_type(),
                lessons: timetable.lessons().len(),
                classrooms: timetable.utilization_report(),
                professors: timetable.professor_load(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Audit { input } => {
            let plan = load_plan(input.as_deref())?;
            let bookings = find_conflicts(&plan.proposed_lessons());
            if bookings.is_empty() {
                println!("No conflicts found");
                return Ok(());
            }
            for booking in &bookings {
                println!(
                    "{} conflict: lessons {} and {} on {}",
                    booking.kind,
                    booking.first.id,
                    booking.second.id,
                    booking.first.cell()
                );
            }
            process::exit(1);
        }
    }

    Ok(())
}

/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn parse_time_of_day(s: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| format!("expected HH:MM: {}", e))
}

fn options(plan: &Plan, permissive: bool) -> EngineOptions {
    let mut options = plan.options;
    if permissive {
        options.strict_references = false;
    }
    options
}

fn replay(input: Option<&str>, permissive: bool) -> Result<Timetable> {
    let plan = load_plan(input)?;
    let (timetable, outcomes) = plan.replay(options(&plan, permissive))?;
    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    if rejected > 0 {
        info!(rejected, "some plan operations were rejected");
    }
    Ok(timetable)
}

fn print_report(report: &Report) {
    println!("Lessons placed:           {}", report.lessons);
    println!("Most popular course type: {}", report.most_popular_course_type);
    println!("Classroom utilization:");
    for room in &report.classrooms {
        println!(
            "  {:<6} {:>5.1}%  ({} lessons)",
            room.number, room.percent, room.lessons
        );
    }
    println!("Professor load:");
    for load in &report.professors {
        println!(
            "  {:<4} {:<24} {} lessons, {} free cells",
            load.professor_id, load.name, load.lessons, load.free_cells
        );
    }
}

fn load_plan(path: Option<&str>) -> Result<Plan> {
    let json = read_input(path)?;
    Plan::from_json(&json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
