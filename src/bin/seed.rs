use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use fake::{
    faker::name::en::{FirstName, LastName},
    Fake,
};
use qcs_site::domain::{BlogPost, CommitteeMember, Event, Member};
use rand::seq::SliceRandom;

const FACULTIES: &[&str] = &[
    "Science",
    "Engineering & the Built Environment",
    "Commerce",
    "Humanities",
    "Health Sciences",
    "Law",
];

/// Writes sample data files for local development.
#[derive(Parser, Debug)]
#[command(name = "seed", about = "Populate the data directory with sample content")]
struct Args {
    /// Directory the site reads its data files from
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Number of roster members to generate
    #[arg(long, default_value_t = 40)]
    members: usize,

    /// Overwrite files that already exist
    #[arg(long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.data_dir)?;

    println!("🌱 Seeding {}", args.data_dir.display());

    write_if_allowed(&args.data_dir.join("events.json"), args.force, || {
        Ok(serde_json::to_string_pretty(&sample_events()?)?)
    })?;
    write_if_allowed(&args.data_dir.join("members.csv"), args.force, || {
        members_csv(&sample_members(args.members))
    })?;
    write_if_allowed(&args.data_dir.join("blogs.json"), args.force, || {
        Ok(serde_json::to_string_pretty(&sample_posts())?)
    })?;
    write_if_allowed(&args.data_dir.join("committee.json"), args.force, || {
        Ok(serde_json::to_string_pretty(&sample_committee())?)
    })?;

    println!("✅ Done");
    Ok(())
}

fn write_if_allowed(
    path: &Path,
    force: bool,
    contents: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("  ⏭️  {} exists, skipping (use --force to overwrite)", path.display());
        return Ok(());
    }
    std::fs::write(path, contents()?)?;
    println!("  ✅ Wrote {}", path.display());
    Ok(())
}

fn sample_events() -> anyhow::Result<Vec<Event>> {
    let rows = [
        ("2026-02-14", "18:00", "Qiskit Fundamentals Workshop", "Snape LT1", "workshop",
         "Hands-on introduction to building circuits with the Qiskit SDK."),
        ("2026-02-14", "20:00", "Valentine's Quantum Movie Night", "Kramer Law Building", "social",
         "Popcorn, physics and questionable science fiction."),
        ("2026-02-26", "13:00", "QCET: Superposition & Entanglement", "Hoerikwaggo", "talk",
         "Quantum Computing Educational Talk for newcomers."),
        ("2026-03-18", "17:30", "Quantum Computing Roundtable", "Upper Campus", "roundtable",
         "Open discussion with researchers from IBM Research Africa."),
        ("2026-04-11", "09:00", "QCS Quantum Hackathon", "Computer Science Building", "hackathon",
         "24 hours, real quantum hardware and prizes."),
        ("2026-08-20", "18:00", "Annual General Meeting", "Snape LT2", "meeting",
         "Committee elections and annual reports."),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (date, time, title, location, kind, description))| -> anyhow::Result<Event> {
            Ok(Event {
                id: (i + 1).to_string(),
                title: title.to_string(),
                date: date.parse::<NaiveDate>()?,
                time: time.to_string(),
                location: location.to_string(),
                description: description.to_string(),
                event_type: kind.to_string(),
            })
        })
        .collect()
}

fn sample_members(count: usize) -> Vec<Member> {
    let mut rng = rand::thread_rng();
    (1..=count)
        .map(|i| {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            // UCT style: three letters of surname, three of first name, digits.
            let student_number = format!(
                "{}{}{:03}",
                last.chars().filter(|c| c.is_ascii_alphabetic()).take(3).collect::<String>(),
                first.chars().filter(|c| c.is_ascii_alphabetic()).take(3).collect::<String>(),
                i
            )
            .to_ascii_uppercase();

            Member {
                id: i.to_string(),
                email: Some(format!("{}@myuct.ac.za", student_number.to_ascii_lowercase())),
                name: Some(format!("{} {}", first, last)),
                student_number,
                faculty: FACULTIES.choose(&mut rng).map(|f| f.to_string()),
            }
        })
        .collect()
}

fn members_csv(members: &[Member]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for member in members {
        writer.serialize(member)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Welcome to the QCS Research Highlights".to_string(),
            author: "QCS Committee".to_string(),
            date: "2026-01-15".to_string(),
            tag: "news".to_string(),
            content: "This is where we share research our members find exciting.\n\nExpect summaries, reading lists and event recaps.".to_string(),
            pdf_url: None,
        },
        BlogPost {
            id: "2".to_string(),
            title: "Scalable Error Mitigation on Noisy Devices".to_string(),
            author: "A. Researcher".to_string(),
            date: "2026-02-02".to_string(),
            tag: "research".to_string(),
            content: "A summary of recent results on error mitigation for near-term hardware.".to_string(),
            pdf_url: Some("https://example.org/papers/error-mitigation.pdf".to_string()),
        },
    ]
}

fn sample_committee() -> Vec<CommitteeMember> {
    ["Chairperson", "Vice-Chairperson", "Treasurer", "Secretary"]
        .iter()
        .map(|role| {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            CommitteeMember {
                name: format!("{} {}", first, last),
                role: role.to_string(),
                image: format!("assets/committee/{}.png", role.to_lowercase()),
                linkedin: Some("https://www.linkedin.com/company/uct-qcs".to_string()),
            }
        })
        .chain(std::iter::once(CommitteeMember {
            name: "TBD".to_string(),
            role: "Additional Member".to_string(),
            image: String::new(),
            linkedin: Some("https://www.linkedin.com/company/uct-qcs".to_string()),
        }))
        .collect()
}
