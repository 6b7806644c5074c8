//! Blogsift CLI application entry point
//!
//! Loads the posts file and configuration, then dispatches to the chosen
//! command.
//!
//! # Usage
//!
//! ```bash
//! # Browse posts interactively (default command)
//! blogsift
//! blogsift --posts content/posts.toml browse
//!
//! # Print posts matching a query, or carrying a tag
//! blogsift search "grid layout"
//! blogsift tag css
//!
//! # Write the page as HTML, optionally pre-filtered
//! blogsift render -o index.html --tag go
//!
//! # Share links and comments
//! blogsift share intro-go twitter --open
//! blogsift comment intro-go
//!
//! # Quiet mode (only output post ids)
//! blogsift -q search go
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr, filtered by `BLOGSIFT_LOG`
//! (default `blogsift=warn`), e.g. `BLOGSIFT_LOG=blogsift=debug`.

use blogsift::{
    BlogError,
    cli::{Cli, Commands, ConfigCommands},
    comments::{CommentError, CommentForm, Field, SubmitOutcome},
    config::BlogConfig,
    output,
    posts::{PostStore, Site},
    render::{HtmlSurface, sync},
    search::{ActiveFilter, PageView, notice::NOTICE_HINT},
    share::{Platform, post_url, share_url},
    ui::{self, App},
};
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, BlogError>;

/// Environment variable holding the log filter
const LOG_ENV: &str = "BLOGSIFT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("blogsift=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Print the visible posts of a filter pass
fn handle_listing_command(
    store: &PostStore,
    filter: &ActiveFilter,
    config: &BlogConfig,
    quiet: bool,
) -> Result<()> {
    let view = PageView::build(filter, store.posts(), config.search.highlight_min_len);
    tracing::info!(filter = ?filter, visible = view.visible_count(), "listing posts");

    for (post, post_view) in store.posts().iter().zip(&view.posts) {
        if !post_view.visible {
            continue;
        }
        println!("{}", output::post_line(post, post_view, quiet));
        if !quiet && let Some(excerpt) = output::excerpt_line(post_view) {
            println!("{excerpt}");
        }
    }

    if quiet {
        return Ok(());
    }
    match &view.notice {
        Some(notice) => {
            println!("{}", notice.message().yellow());
            println!("{}", NOTICE_HINT.dimmed());
        }
        None => println!("{}", output::match_summary(view.visible_count(), store.len())),
    }
    Ok(())
}

fn handle_render_command(
    store: &PostStore,
    site: Site,
    command: &Commands,
    config: &BlogConfig,
    quiet: bool,
) -> Result<()> {
    let Commands::Render { output, query, .. } = command else {
        return Err(BlogError::InvalidInput("Not a render command".into()));
    };

    let filter = command.filter()?;
    let mut surface = HtmlSurface::new(site, store.posts());
    if let Some(query) = query {
        surface.set_query(query.trim());
    }
    let view = PageView::build(&filter, store.posts(), config.search.highlight_min_len);
    sync(&view, &mut surface);
    let html = surface.render();

    match output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!(path = %path.display(), visible = surface.visible_count(), "rendered page");
            if !quiet {
                println!(
                    "Wrote {} ({} of {} posts shown)",
                    path.display(),
                    surface.visible_count(),
                    store.len()
                );
            }
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn handle_share_command(
    store: &PostStore,
    site: &Site,
    post_id: &str,
    platform: Platform,
    open: bool,
) -> Result<()> {
    let post = store.get(post_id)?;
    let url = share_url(platform, &post.title, &post_url(&site.url, post.id.as_str()));
    println!("{url}");

    if open {
        open::that(&url)?;
        tracing::info!(platform = platform.id(), post = post_id, "opened share link");
    }
    Ok(())
}

/// Prompt until the field validates
fn prompt_field(form: &mut CommentForm, field: Field, theme: &ColorfulTheme) -> Result<()> {
    loop {
        let value: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CommentError::PromptError(e.to_string()))?;

        match field {
            Field::Name => form.set_name(value),
            Field::Comment => form.set_text(value),
        }
        match form.blur(field) {
            Some(error) => eprintln!("{}", error.message().red()),
            None => return Ok(()),
        }
    }
}

fn handle_comment_command(store: &PostStore, post_id: &str, config: &BlogConfig, quiet: bool) -> Result<()> {
    let post = store
        .get(post_id)
        .map_err(|_| CommentError::UnknownPost(post_id.to_string()))?;
    let mut form = CommentForm::new(post, config.form_settings());

    if !quiet {
        println!("Commenting on {}", post.title.bold());
    }
    let theme = ColorfulTheme::default();
    prompt_field(&mut form, Field::Name, &theme)?;
    prompt_field(&mut form, Field::Comment, &theme)?;

    if let SubmitOutcome::Invalid(errors) = form.submit(Instant::now()) {
        return Err(CommentError::Invalid(errors).into());
    }
    if !quiet {
        println!("{}", form.button_label().dimmed());
    }

    let comment = loop {
        let now = Instant::now();
        if let Some(comment) = form.tick(now) {
            break comment.clone();
        }
        let wait = form
            .next_deadline()
            .map_or(Duration::from_millis(10), |d| d.saturating_duration_since(now));
        thread::sleep(wait);
    };

    println!("{}", output::comment_block(&comment));
    if !quiet {
        if let Some(message) = form.success_message(Instant::now()) {
            println!("{}", message.green());
        }
        println!(
            "{}",
            format!("{} comment(s) on this post", form.comment_count()).dimmed()
        );
    }
    Ok(())
}

fn handle_config_command(config: &BlogConfig, command: &ConfigCommands, config_file: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => {
            let path = match config_file {
                Some(path) => path.to_path_buf(),
                None => BlogConfig::config_path()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => BlogConfig::load_from(path)?,
        None => BlogConfig::load()?,
    };
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(&config, command, cli.config.as_deref());
    }

    let posts_path = config.posts_path(cli.posts.as_deref());
    let store = PostStore::load(&posts_path)?;
    let mut site = store.site().clone();
    if let Some(url) = &config.site_url {
        site.url.clone_from(url);
    }

    match &command {
        Commands::Browse => {
            let mut app = App::new(site, store.into_posts(), &config);
            ui::run(&mut app)?;
        }
        Commands::Search { .. } | Commands::Tag { .. } => {
            handle_listing_command(&store, &command.filter()?, &config, quiet)?;
        }
        Commands::Render { .. } => handle_render_command(&store, site, &command, &config, quiet)?,
        Commands::Share {
            post_id,
            platform,
            open,
        } => handle_share_command(&store, &site, post_id, *platform, *open)?,
        Commands::Comment { post_id } => handle_comment_command(&store, post_id, &config, quiet)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Main entry point for the blogsift application
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
