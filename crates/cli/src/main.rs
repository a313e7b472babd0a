use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitaweave_core::{
    auto_triage, classify_risk,
    config::{reference_date_from_env_value, resolve_roster_path},
    filter_by_risk, find_by_id, recommend_services, roster_service::load_roster_file, search,
    summarize_on, Patient, RiskLevel, TriageError,
};

#[derive(Parser)]
#[command(name = "vitaweave")]
#[command(about = "VitaWeave triage and referral CLI")]
struct Cli {
    /// Roster file (YAML, or JSON with a .json extension)
    #[arg(long, env = "VITAWEAVE_ROSTER")]
    roster: Option<PathBuf>,

    /// Date to treat as today for summaries (YYYY-MM-DD)
    #[arg(long, env = "VITAWEAVE_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List roster patients in stored order
    List {
        /// Only show this risk level (High, Medium, Low)
        #[arg(long)]
        risk: Option<RiskLevel>,
        /// Case-insensitive search over name, condition and status
        #[arg(long)]
        search: Option<String>,
    },
    /// Reassess every patient's risk and print the worklist, most urgent first
    Triage,
    /// Classify one patient's risk
    Risk {
        /// Patient id
        id: String,
    },
    /// Suggest follow-up services for one patient
    Referrals {
        /// Patient id
        id: String,
    },
    /// Print a narrative case summary for one patient
    Summary {
        /// Patient id
        id: String,
    },
    /// Parse the roster and report how many patients it holds
    Validate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'vitaweave --help' for commands");
        return Ok(());
    };

    let roster_path = resolve_roster_path(cli.roster)?;
    let patients = load_roster_file(&roster_path)?;

    match command {
        Commands::List { risk, search: query } => {
            let filtered = filter_by_risk(&patients, risk);
            let found = search(&filtered, query.as_deref().unwrap_or_default());
            if found.is_empty() {
                println!("No patients found.");
            }
            for patient in &found {
                print_row(patient);
            }
        }
        Commands::Triage => {
            for patient in auto_triage(&patients) {
                print_row(&patient);
            }
        }
        Commands::Risk { id } => {
            let patient = lookup(&patients, &id)?;
            println!("{}: {}", patient.name, classify_risk(patient));
        }
        Commands::Referrals { id } => {
            let patient = lookup(&patients, &id)?;
            let recommendations = recommend_services(patient);
            if recommendations.is_empty() {
                println!("No referrals suggested for {}.", patient.name);
            }
            for rec in recommendations {
                println!("[{}] {} - {}", rec.id, rec.title, rec.reason);
            }
        }
        Commands::Summary { id } => {
            let patient = lookup(&patients, &id)?;
            let today = reference_date_from_env_value(cli.today)?
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            println!("{}", summarize_on(patient, today));
        }
        Commands::Validate => {
            println!(
                "Roster OK: {} patients in {}",
                patients.len(),
                roster_path.display()
            );
        }
    }

    Ok(())
}

fn lookup<'a>(patients: &'a [Patient], id: &str) -> Result<&'a Patient, TriageError> {
    find_by_id(patients, id).ok_or_else(|| TriageError::PatientNotFound(id.to_string()))
}

fn print_row(patient: &Patient) {
    println!(
        "ID: {}, Name: {}, Age: {}, Condition: {}, Status: {}, Risk: {}{}",
        patient.id,
        patient.name,
        patient.age,
        patient.condition,
        patient.status,
        patient.risk_level,
        if patient.follow_up_urgent {
            ", follow-up urgent"
        } else {
            ""
        }
    );
}
