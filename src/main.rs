use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use timetable_weaver::core::{generate_schedule, LogicPrecheck, PrecheckIssue};
use timetable_weaver::parser::{load_input_from_dir, validate_input_dir};
use timetable_weaver::reporter::{generate_group_schedule, generate_reports, generate_teacher_schedule, print_summary, OutputFormat};
use timetable_weaver::types::{GroupId, MultiSemesterResult, TeacherName};

#[derive(Parser)]
#[command(name = "timetable-weaver")]
#[command(about = "Constraint-aware weekly timetable generator for multi-week semesters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run with bundled sample data
    Demo,

    /// Generate a schedule from input data
    Generate {
        /// Directory containing groups.json, rooms.json, load.json, rules.{json,toml}
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for schedule files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress bars
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a single group's or teacher's schedule from a generated result
    Report {
        /// Path to a schedule JSON file written by `generate --format json`
        #[arg(short, long)]
        schedule: PathBuf,

        /// Print the schedule for this group
        #[arg(long)]
        group: Option<String>,

        /// Print the schedule for this teacher
        #[arg(long)]
        teacher: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Generate { data, output, format, quiet } => run_generate(&data, &output, &format, quiet),
        Commands::Report { schedule, group, teacher } => run_report(&schedule, group, teacher),
    }
}

fn run_demo() -> Result<()> {
    println!("{}", "Timetable Weaver Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("demos/sample");
    let output_path = PathBuf::from("output");

    if !demo_path.join("groups.json").exists() {
        println!("{}", "Demo data not found. Creating sample data...".yellow());
        create_demo_data(&demo_path)?;
    }

    run_generate(&demo_path, &output_path, "all", false)
}

fn run_generate(data: &PathBuf, output: &PathBuf, format: &str, quiet: bool) -> Result<()> {
    let mut precheck = validate_input_dir(data);
    if !precheck.is_empty() {
        print_precheck(&precheck);
        anyhow::bail!("{} structural issue(s) found; fix the input directory and retry", precheck.len());
    }

    let input = load_input_from_dir(data).context("Failed to load input data")?;

    if !quiet {
        println!(
            "Loaded {} groups, {} rooms, {} load entries",
            input.groups.len(),
            input.rooms.len(),
            input.load_entries.len()
        );
    }

    precheck = LogicPrecheck::run(&input.groups, &input.rooms, &input.load_entries, &input.rules);
    if !precheck.is_empty() {
        print_precheck(&precheck);
        anyhow::bail!("{} precheck issue(s) found; schedule not generated", precheck.len());
    }

    let cancelled = Arc::new(AtomicBool::new(false));
    let result: MultiSemesterResult = generate_schedule(&input, &cancelled, quiet)?;

    let formats = parse_formats(format);
    for semester in &result.semesters {
        generate_reports(semester, &input, &precheck, output, &formats)?;
        if !quiet {
            print_summary(semester);
        }
    }

    if !quiet {
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_report(schedule_path: &PathBuf, group: Option<String>, teacher: Option<String>) -> Result<()> {
    let content = std::fs::read_to_string(schedule_path).context("Failed to read schedule file")?;
    let semester: timetable_weaver::types::SemesterResult = serde_json::from_str(&content).context("Failed to parse schedule file")?;

    if let Some(group_name) = group {
        match generate_group_schedule(&semester, &GroupId(group_name)) {
            Some(report) => println!("{report}"),
            None => println!("Group not found"),
        }
    } else if let Some(teacher_name) = teacher {
        match generate_teacher_schedule(&semester, &TeacherName(teacher_name)) {
            Some(report) => println!("{report}"),
            None => println!("Teacher not found"),
        }
    } else {
        print_summary(&semester);
    }

    Ok(())
}

fn print_precheck(issues: &[PrecheckIssue]) {
    for issue in issues {
        println!("{} {}: {}", "Issue:".red(), issue.code, issue.message);
    }
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn create_demo_data(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let groups = serde_json::json!([
        {"id": "ИС-21", "current_semester": 1, "size": 24},
        {"id": "ИС-22", "current_semester": 1, "size": 22},
        {"id": "ПИ-21", "current_semester": 2, "size": 20},
    ]);
    std::fs::write(path.join("groups.json"), serde_json::to_string_pretty(&groups)?)?;

    let rooms = serde_json::json!([
        {"id": "101", "purpose": "Общая", "capacity": 30},
        {"id": "102", "purpose": "Общая", "capacity": 26},
        {"id": "Спорт зал", "purpose": "Физра", "capacity": 100},
    ]);
    std::fs::write(path.join("rooms.json"), serde_json::to_string_pretty(&rooms)?)?;

    let load_entries = serde_json::json!([
        {"group_id": "ИС-21", "semester": 1, "teacher": "Иванов И.И.", "subject": "Математический анализ", "hours": 48.0},
        {"group_id": "ИС-22", "semester": 1, "teacher": "Иванов И.И.", "subject": "Математический анализ", "hours": 48.0},
        {"group_id": "ИС-21", "semester": 1, "teacher": "Петрова А.С.", "subject": "Физическая культура", "hours": 24.0},
        {"group_id": "ИС-22", "semester": 1, "teacher": "Петрова А.С.", "subject": "Физическая культура", "hours": 24.0},
        {"group_id": "ПИ-21", "semester": 2, "teacher": "Сидоров К.Л.", "subject": "Базы данных", "hours": 36.0},
    ]);
    std::fs::write(path.join("load.json"), serde_json::to_string_pretty(&load_entries)?)?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
