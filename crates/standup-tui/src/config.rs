use std::path::PathBuf;

use clap::Parser;
use standup_core::ProjectCatalog;
use standup_message::{MessageTemplate, DEFAULT_LEAD};
use standup_service::{WebhookService, DEFAULT_WEBHOOK_URL};

use crate::app::AppSettings;

#[derive(Debug, Parser)]
#[command(
    name = "standup",
    about = "Fill in a daily project status report and post it to a chat webhook"
)]
pub struct Config {
    /// Chat webhook endpoint
    #[arg(long, env = "STANDUP_WEBHOOK_URL", default_value = DEFAULT_WEBHOOK_URL)]
    pub webhook_url: String,

    /// Webhook secret token, sent as the `zapikey` query parameter
    #[arg(long, env = "ZOHO_CLIQ_WEBHOOK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Name printed on the "Lead" line of every project block
    #[arg(long, env = "STANDUP_LEAD", default_value = DEFAULT_LEAD)]
    pub lead: String,

    /// Selectable project identifier. Repeat (or comma separate) to replace
    /// the built-in list.
    #[arg(long = "project", env = "STANDUP_PROJECTS", value_delimiter = ',')]
    pub projects: Vec<String>,

    /// Render and show the message without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long, env = "STANDUP_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Token with empty values treated as unset.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn webhook_service(&self) -> WebhookService {
        match self.token() {
            Some(token) => WebhookService::with_token(&self.webhook_url, token.to_string()),
            None => WebhookService::new(&self.webhook_url),
        }
    }

    pub fn catalog(&self) -> ProjectCatalog {
        ProjectCatalog::new(self.projects.iter().cloned())
    }

    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            catalog: self.catalog(),
            template: MessageTemplate::new(self.lead.clone()),
            dry_run: self.dry_run,
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["standup", "--token", "t"]).unwrap();
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.lead, DEFAULT_LEAD);
        assert_eq!(config.token(), Some("t"));
        assert!(!config.dry_run);
        assert_eq!(config.catalog(), ProjectCatalog::default());
    }

    #[test]
    fn repeated_and_comma_separated_projects() {
        let config = Config::try_parse_from([
            "standup",
            "--project",
            "#A,#B",
            "--project",
            "#C",
        ])
        .unwrap();
        assert_eq!(
            config.catalog().projects(),
            &["#A".to_string(), "#B".to_string(), "#C".to_string()]
        );
    }

    #[test]
    fn blank_token_is_unset() {
        let config = Config::try_parse_from(["standup", "--token", "  "]).unwrap();
        assert_eq!(config.token(), None);
        assert!(!config.webhook_service().has_token());
    }

    #[test]
    fn settings_carry_lead_and_dry_run() {
        let config =
            Config::try_parse_from(["standup", "--lead", "ANU", "--dry-run"]).unwrap();
        let settings = config.app_settings();
        assert_eq!(settings.template.lead(), "ANU");
        assert!(settings.dry_run);
    }

    #[test]
    fn blank_projects_keep_default_catalog() {
        let config = Config::try_parse_from(["standup", "--project", " , "]).unwrap();
        assert_eq!(config.catalog(), ProjectCatalog::default());
    }
}
