//! rankpilot CLI entry point.

use std::sync::Arc;

use clap::Parser;
use rankpilot_client::cli::{Cli, Commands, OutputFormat};
use rankpilot_client::client::backlinks::{CreateOutreachRequest, UpdateScheduleRequest};
use rankpilot_client::client::content::GenerateArticleRequest;
use rankpilot_client::client::projects::CreateProjectRequest;
use rankpilot_client::client::RankpilotClient;
use rankpilot_client::output::{format_output, pretty};
use rankpilot_client::AuthFailureHandler;
use rankpilot_core::{FileStorage, SessionStore};
use tracing_subscriber::EnvFilter;

/// Tells the user to log in again; the CLI analogue of the
/// dashboard's redirect to the login page.
struct LoginHint;

impl AuthFailureHandler for LoginHint {
    fn on_auth_failure(&self) {
        eprintln!("Session expired. Run `rankpilot auth login` to sign in again.");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SessionStore::new(Arc::new(FileStorage::new(&cli.session)));
    let client = RankpilotClient::new(&cli.base_url, store)
        .with_auth_failure_handler(Arc::new(LoginHint));

    match &cli.command {
        Commands::Auth(auth_cmd) => {
            use rankpilot_client::cli::auth::AuthAction;
            match &auth_cmd.action {
                AuthAction::Login { email, password } => {
                    let session = client.login(email, password).await?;
                    if !cli.quiet {
                        println!("Logged in as {}", session.data.user.email);
                        println!(
                            "Current project: {}",
                            pretty::format_current_project(
                                client.store().current_project().as_ref()
                            )
                        );
                    }
                }
                AuthAction::Logout => {
                    client.logout().await;
                    if !cli.quiet {
                        println!("Logged out.");
                    }
                }
                AuthAction::Me => {
                    let profile = client.me().await?;
                    println!("{}", format_output(&profile.data, cli.format));
                }
            }
        }
        Commands::Projects(projects_cmd) => {
            use rankpilot_client::cli::projects::ProjectsAction;
            match &projects_cmd.action {
                ProjectsAction::List => {
                    let projects = client.list_projects().await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&projects.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_projects(&projects.data))
                        }
                    }
                }
                ProjectsAction::Refresh => {
                    let projects = client.refresh_projects().await?;
                    if !cli.quiet {
                        println!("Cached {} projects.", projects.data.len());
                        println!(
                            "Current project: {}",
                            pretty::format_current_project(
                                client.store().current_project().as_ref()
                            )
                        );
                    }
                }
                ProjectsAction::Create {
                    name,
                    url,
                    industry,
                } => {
                    let project = client
                        .create_project(CreateProjectRequest {
                            name: name.clone(),
                            url: url.clone(),
                            industry: industry.clone(),
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&project.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_project(&project.data))
                        }
                    }
                }
                ProjectsAction::Get { id } => {
                    let project = client.get_project(id).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&project.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_project(&project.data))
                        }
                    }
                }
                ProjectsAction::Delete { id } => {
                    client.delete_project(id).await?;
                    if !cli.quiet {
                        println!("Deleted project {}", id);
                    }
                }
                ProjectsAction::Use { id } => {
                    client.store().set_current_project(Some(id.clone()));
                    if !cli.quiet {
                        println!(
                            "Current project: {}",
                            pretty::format_current_project(
                                client.store().current_project().as_ref()
                            )
                        );
                    }
                }
                ProjectsAction::Current => {
                    println!(
                        "{}",
                        pretty::format_current_project(client.store().current_project().as_ref())
                    );
                }
                ProjectsAction::Summary => {
                    let summary = client.dashboard_summary(cli.scope()).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&summary.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_summary(&summary.data))
                        }
                    }
                }
            }
        }
        Commands::Seo(seo_cmd) => {
            use rankpilot_client::cli::seo::SeoAction;
            match &seo_cmd.action {
                SeoAction::Analyze { url } => {
                    let analysis = client.analyze_url(url, cli.scope()).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&analysis.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_analysis(&analysis.data))
                        }
                    }
                }
                SeoAction::Analyses => {
                    let analyses = client.list_analyses(cli.scope()).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&analyses.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_analyses(&analyses.data))
                        }
                    }
                }
                SeoAction::Get { id } => {
                    let analysis = client.get_analysis(*id).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&analysis.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_analysis(&analysis.data))
                        }
                    }
                }
                SeoAction::MetaTags { url } => {
                    let tags = client.generate_meta_tags(url, cli.scope()).await?;
                    println!("{}", format_output(&tags.data, cli.format));
                }
                SeoAction::Keywords { topic } => {
                    let keywords = client.generate_keywords(topic, cli.scope()).await?;
                    println!("{}", format_output(&keywords.data, cli.format));
                }
            }
        }
        Commands::Backlinks(backlinks_cmd) => {
            use rankpilot_client::cli::backlinks::BacklinksAction;
            match &backlinks_cmd.action {
                BacklinksAction::Strategy => {
                    let strategy = client.backlink_strategy(cli.scope()).await?;
                    println!("{}", format_output(&strategy.data, cli.format));
                }
                BacklinksAction::QuickPlan => {
                    let plan = client.backlink_quick_plan(cli.scope()).await?;
                    println!("{}", format_output(&plan.data, cli.format));
                }
                BacklinksAction::Monitoring => {
                    let report = client.backlink_monitoring(cli.scope()).await?;
                    println!("{}", format_output(&report.data, cli.format));
                }
                BacklinksAction::Outreach => {
                    let campaigns = client.list_outreach(cli.scope()).await?;
                    println!("{}", format_output(&campaigns.data, cli.format));
                }
                BacklinksAction::OutreachCreate {
                    target_url,
                    contact_email,
                } => {
                    let campaign = client
                        .create_outreach(
                            CreateOutreachRequest {
                                target_url: target_url.clone(),
                                contact_email: contact_email.clone(),
                                template: None,
                            },
                            cli.scope(),
                        )
                        .await?;
                    println!("{}", format_output(&campaign.data, cli.format));
                }
                BacklinksAction::Schedule => {
                    let schedule = client.backlink_schedule(cli.scope()).await?;
                    println!("{}", format_output(&schedule.data, cli.format));
                }
                BacklinksAction::ScheduleSet { cadence } => {
                    let schedule = client
                        .update_backlink_schedule(
                            UpdateScheduleRequest {
                                cadence: cadence.clone(),
                            },
                            cli.scope(),
                        )
                        .await?;
                    println!("{}", format_output(&schedule.data, cli.format));
                }
            }
        }
        Commands::Content(content_cmd) => {
            use rankpilot_client::cli::content::ContentAction;
            match &content_cmd.action {
                ContentAction::Article {
                    topic,
                    tone,
                    word_count,
                } => {
                    let article = client
                        .generate_article(
                            GenerateArticleRequest {
                                topic: topic.clone(),
                                tone: tone.clone(),
                                word_count: *word_count,
                            },
                            cli.scope(),
                        )
                        .await?;
                    println!("{}", format_output(&article.data, cli.format));
                }
                ContentAction::Ideas { topic } => {
                    let ideas = client.generate_ideas(topic, cli.scope()).await?;
                    println!("{}", format_output(&ideas.data, cli.format));
                }
                ContentAction::List => {
                    let articles = client.list_articles(cli.scope()).await?;
                    println!("{}", format_output(&articles.data, cli.format));
                }
                ContentAction::Get { id } => {
                    let article = client.get_article(*id).await?;
                    println!("{}", format_output(&article.data, cli.format));
                }
            }
        }
        Commands::Health(health_cmd) => {
            use rankpilot_client::cli::health::HealthAction;
            match &health_cmd.action {
                HealthAction::Check => {
                    let health = client.health().await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&health.data, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_health(&health.data))
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
