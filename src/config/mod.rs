use std::path::PathBuf;

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub society: SocietyConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Locations of the flat files backing the site.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub events_file: String,
    pub members_file: String,
    pub pending_file: String,
    pub blogs_file: String,
    pub committee_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SocietyConfig {
    pub name: String,
    pub short_name: String,
    pub contact_email: String,
}

/// The range of months the events calendar lets visitors browse.
#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    pub first_month: NaiveDate,
    pub last_month: NaiveDate,
}

impl DataConfig {
    pub fn events_path(&self) -> PathBuf {
        self.dir.join(&self.events_file)
    }

    pub fn members_path(&self) -> PathBuf {
        self.dir.join(&self.members_file)
    }

    pub fn pending_path(&self) -> PathBuf {
        self.dir.join(&self.pending_file)
    }

    pub fn blogs_path(&self) -> PathBuf {
        self.dir.join(&self.blogs_file)
    }

    pub fn committee_path(&self) -> PathBuf {
        self.dir.join(&self.committee_file)
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("data.dir", "data")?
            .set_default("data.events_file", "events.json")?
            .set_default("data.members_file", "members.csv")?
            .set_default("data.pending_file", "prospective_members.csv")?
            .set_default("data.blogs_file", "blogs.json")?
            .set_default("data.committee_file", "committee.json")?
            .set_default("society.name", "Quantum Computing Society")?
            .set_default("society.short_name", "UCT QCS")?
            .set_default("society.contact_email", "uctqcs@gmail.com")?
            .set_default("calendar.first_month", "2026-01-01")?
            .set_default("calendar.last_month", "2026-12-01")?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with QCS__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("QCS").separator("__"))

            .build()?;

        config.try_deserialize()
    }

    /// Default settings with every data file rooted at `dir`.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        let mut settings = Self::default();
        settings.data.dir = dir.into();
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            data: DataConfig {
                dir: PathBuf::from("data"),
                events_file: "events.json".to_string(),
                members_file: "members.csv".to_string(),
                pending_file: "prospective_members.csv".to_string(),
                blogs_file: "blogs.json".to_string(),
                committee_file: "committee.json".to_string(),
            },
            society: SocietyConfig {
                name: "Quantum Computing Society".to_string(),
                short_name: "UCT QCS".to_string(),
                contact_email: "uctqcs@gmail.com".to_string(),
            },
            calendar: CalendarConfig {
                first_month: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
                last_month: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap_or_default(),
            },
        }
    }
}
