use crate::infra::{parse_website_quality, InMemoryProspectRepository};
use agency_portal::config::AppConfig;
use agency_portal::error::AppError;
use agency_portal::workflows::leads::{
    LeadScoringConfig, LeadScoringEngine, LeadScoringService, ProspectProfile, ScoreResult,
    WebsiteQuality,
};
use agency_portal::workflows::portal::{
    ClientDashboard, ClientSnapshot, Project, ProjectRequest, ProjectRequestStatus, ProjectStatus,
};
use chrono::{Duration, Utc};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct LeadScoreArgs {
    /// Whether the prospect has a website (true/false)
    #[arg(long)]
    pub(crate) has_website: Option<bool>,
    /// Website quality tier: poor, fair, good or excellent
    #[arg(long, value_parser = parse_website_quality)]
    pub(crate) website_quality: Option<WebsiteQuality>,
    /// Estimated annual revenue in dollars
    #[arg(long)]
    pub(crate) annual_revenue: Option<f64>,
    /// Business category, e.g. "Family Dentist"
    #[arg(long)]
    pub(crate) category: Option<String>,
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// State code, e.g. TX
    #[arg(long)]
    pub(crate) state: Option<String>,
    #[arg(long)]
    pub(crate) employee_count: Option<u32>,
    /// Print the score as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl LeadScoreArgs {
    fn into_profile(self) -> ProspectProfile {
        ProspectProfile {
            business_name: None,
            has_website: self.has_website,
            website_quality: self.website_quality,
            annual_revenue: self.annual_revenue,
            category: self.category,
            city: self.city,
            state: self.state,
            employee_count: self.employee_count,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct PortalStateArgs {
    /// JSON file holding `projectRequests` and `projects` for one client
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the resolved dashboard as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of ranked prospects to print
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Skip the client dashboard portion of the demo
    #[arg(long)]
    pub(crate) skip_portal: bool,
}

pub(crate) fn run_lead_score(args: LeadScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let as_json = args.json;
    let engine = LeadScoringEngine::new(config.lead_scoring);
    let result = engine.score(&args.into_profile());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_score(&result);
    }
    Ok(())
}

pub(crate) fn run_portal_state(args: PortalStateArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let snapshot: ClientSnapshot = serde_json::from_str(&raw)?;
    let dashboard = snapshot.dashboard();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        render_dashboard("Client", &dashboard);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Agency portal demo");

    let service = LeadScoringService::new(
        Arc::new(InMemoryProspectRepository::default()),
        LeadScoringConfig::standard(),
    );
    for profile in sample_prospects() {
        service.register(profile)?;
    }

    println!("\nRanked prospects");
    for record in service.ranked(args.top)? {
        let name = record
            .profile
            .business_name
            .as_deref()
            .unwrap_or("(unnamed prospect)");
        println!(
            "- {} {} {:>3}/100 {} [{}]",
            record.id,
            record.score.label.emoji(),
            record.score.total,
            name,
            record.score.label.label()
        );
    }

    if !args.skip_portal {
        println!("\nClient dashboards");
        for (client, snapshot) in sample_clients() {
            render_dashboard(client, &snapshot.dashboard());
        }
    }

    Ok(())
}

fn render_score(result: &ScoreResult) {
    let breakdown = &result.breakdown;
    println!(
        "Lead score: {}/100 {} {}",
        result.total,
        result.label.emoji(),
        result.label.label()
    );
    println!("- Website:  {:>2}/30", breakdown.website_score);
    println!("- Revenue:  {:>2}/25", breakdown.revenue_score);
    println!("- Category: {:>2}/20", breakdown.category_score);
    println!("- Location: {:>2}/15", breakdown.location_score);
    println!("- Size:     {:>2}/10", breakdown.size_score);
    println!("Recommendation: {}", result.recommendation);
}

fn render_dashboard(client: &str, dashboard: &ClientDashboard) {
    println!("- {client}: {}", dashboard.state.label());
    if let Some(request) = &dashboard.active_project_request {
        println!(
            "    open request {} ({}) submitted {}",
            request.id,
            request.status,
            request.created_at.format("%Y-%m-%d")
        );
    }
    for project in &dashboard.lead_projects {
        println!("    lead project {} ({})", project.name, project.id);
    }
}

fn sample_prospects() -> Vec<ProspectProfile> {
    vec![
        ProspectProfile {
            business_name: Some("Barton Creek Family Dentistry".to_string()),
            has_website: Some(true),
            website_quality: Some(WebsiteQuality::Poor),
            annual_revenue: Some(750_000.0),
            category: Some("Family Dentist".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            employee_count: Some(12),
        },
        ProspectProfile {
            business_name: Some("South Congress Tacos".to_string()),
            has_website: Some(false),
            annual_revenue: Some(420_000.0),
            category: Some("Restaurant".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            employee_count: Some(18),
            ..ProspectProfile::default()
        },
        ProspectProfile {
            business_name: Some("Lone Star HVAC".to_string()),
            has_website: Some(true),
            website_quality: Some(WebsiteQuality::Fair),
            category: Some("HVAC Contractor".to_string()),
            city: Some("Dallas".to_string()),
            state: Some("TX".to_string()),
            ..ProspectProfile::default()
        },
        ProspectProfile {
            business_name: Some("Rosewood Labs".to_string()),
            has_website: Some(true),
            website_quality: Some(WebsiteQuality::Excellent),
            annual_revenue: Some(40_000.0),
            category: Some("Software Consultancy".to_string()),
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            employee_count: Some(2),
        },
    ]
}

fn sample_clients() -> Vec<(&'static str, ClientSnapshot)> {
    let now = Utc::now();
    let request = |id: &str, status: ProjectRequestStatus, days_ago: i64| ProjectRequest {
        id: id.to_string(),
        status,
        created_at: now - Duration::days(days_ago),
        contact_email: "owner@example.com".to_string(),
        project_name: None,
    };
    let project = |id: &str, name: &str, status: &str| Project {
        id: id.to_string(),
        name: name.to_string(),
        status: ProjectStatus::from(status),
    };

    vec![
        ("New signup", ClientSnapshot::default()),
        (
            "Intake under review",
            ClientSnapshot {
                project_requests: vec![
                    request("req-101", ProjectRequestStatus::Draft, 9),
                    request("req-102", ProjectRequestStatus::Reviewing, 2),
                ],
                projects: Vec::new(),
            },
        ),
        (
            "Quoted lead",
            ClientSnapshot {
                project_requests: vec![request("req-201", ProjectRequestStatus::Approved, 30)],
                projects: vec![project("prj-201", "Booking site", "LEAD")],
            },
        ),
        (
            "Active client",
            ClientSnapshot {
                project_requests: Vec::new(),
                projects: vec![
                    project("prj-301", "Storefront rebuild", "active"),
                    project("prj-302", "Loyalty app", "lead"),
                ],
            },
        ),
    ]
}
