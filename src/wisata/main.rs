use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;
use wisata::api::{CmdMessage, CmdResult, ConfigAction, MessageLevel, WisataApi};
use wisata::config::WisataConfig;
use wisata::error::{Result, WisataError};
use wisata::ingest::parse_candidates;
use wisata::model::{Attraction, AttractionPatch, Axis};
use wisata::query::AttractionView;
use wisata::store::fs::FileStore;

mod args;
use args::{ClassArgs, Cli, Commands, FieldArgs};

pub(crate) const VERSION: &str = env!("WISATA_VERSION");

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WisataApi<FileStore>,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, id, fields }) => handle_add(&mut ctx, name, id, fields),
        Some(Commands::Import { file, classes }) => handle_import(&mut ctx, file, classes),
        Some(Commands::Show { ids }) => handle_show(&ctx, ids),
        Some(Commands::Edit { id, name, fields }) => handle_edit(&mut ctx, id, name, fields),
        Some(Commands::Remove { ids, missing_ok }) => handle_remove(&mut ctx, ids, missing_ok),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Find { name, classes }) => handle_find(&ctx, name, classes),
        Some(Commands::Top { limit }) => handle_top(&ctx, limit),
        Some(Commands::Nearest { lat, lng, limit }) => handle_nearest(&ctx, lat, lng, limit),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("WISATA_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "wisata", "wisata")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            WisataError::InvalidInput("Could not determine data dir; set WISATA_HOME".into())
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    let config = WisataConfig::load(&dir)?;
    debug!(data_dir = %dir.display(), ?config, "starting");

    let store = FileStore::new(dir.clone());
    let api = WisataApi::new(store, config, dir);

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn class_patch(classes: ClassArgs) -> AttractionPatch {
    AttractionPatch {
        environment_class: classes.environment,
        scenery_class: classes.scenery,
        category_class: classes.category,
        ..Default::default()
    }
}

fn field_patch(name: Option<String>, fields: FieldArgs) -> AttractionPatch {
    AttractionPatch {
        name,
        photo: fields.photo,
        rating: fields.rating,
        description: fields.description,
        lat: fields.lat,
        lon: fields.lon,
        ..class_patch(fields.classes)
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    id: Option<String>,
    fields: FieldArgs,
) -> Result<()> {
    let mut record = match id {
        Some(id) => Attraction::with_id(id, name),
        None => Attraction::new(name),
    };
    field_patch(None, fields).apply_to(&mut record);

    let result = ctx.api.create(record)?;
    print_written(ctx, &result)
}

fn handle_import(ctx: &mut AppContext, file: PathBuf, classes: ClassArgs) -> Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let candidates = parse_candidates(&content)?;
    debug!(file = %file.display(), count = candidates.len(), "importing candidates");

    let result = ctx.api.import(candidates, &class_patch(classes))?;
    print_written(ctx, &result)
}

fn handle_show(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.get(&ids)?;
    if ctx.json {
        return print_json(&result.listed);
    }
    print_details(&result.listed);
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    name: Option<String>,
    fields: FieldArgs,
) -> Result<()> {
    let result = ctx.api.update(&id, field_patch(name, fields))?;
    print_written(ctx, &result)
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>, missing_ok: bool) -> Result<()> {
    let result = ctx.api.delete(&ids, missing_ok)?;
    print_written(ctx, &result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_listed(ctx, &result)
}

fn handle_find(ctx: &AppContext, name: Option<String>, classes: ClassArgs) -> Result<()> {
    let pairs = [
        (Axis::Name, name),
        (Axis::Environment, classes.environment),
        (Axis::Scenery, classes.scenery),
        (Axis::Category, classes.category),
    ];
    let result = ctx.api.find(&pairs)?;
    print_listed(ctx, &result)
}

fn handle_top(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.top(limit)?;
    print_listed(ctx, &result)
}

fn handle_nearest(
    ctx: &AppContext,
    lat: Option<String>,
    lng: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let result = ctx.api.nearest(lat.as_deref(), lng.as_deref(), limit)?;
    print_listed(ctx, &result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in WisataConfig::KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    for message in &result.messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            _ => print_message(message),
        }
    }
    Ok(())
}

fn print_json(views: &[AttractionView]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(views)?);
    Ok(())
}

fn print_listed(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        return print_json(&result.listed);
    }
    if !result.listed.is_empty() || result.messages.is_empty() {
        print_views(&result.listed);
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn print_written(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        let views: Vec<AttractionView> = result.affected.iter().map(AttractionView::from).collect();
        print_json(&views)?;
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

/// Messages go to stderr in JSON mode so stdout stays parseable.
fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    for message in messages {
        if ctx.json {
            eprintln!("{}", message.content);
        } else {
            print_message(message);
        }
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
    }
}

const LINE_WIDTH: usize = 100;
const RATING_WIDTH: usize = 5;
const LABEL_WIDTH: usize = 13;

fn print_views(views: &[AttractionView]) {
    if views.is_empty() {
        println!("No attractions found.");
        return;
    }

    for (i, view) in views.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let rating = view
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let rating = format!("{:>width$}", rating, width = RATING_WIDTH);

        let classes = class_summary(view);
        let name_classes = if classes.is_empty() {
            view.name.clone()
        } else {
            format!("{}  {}", view.name, classes)
        };

        let fixed_width = idx_str.width() + RATING_WIDTH + view.id.width() + 4;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&name_classes, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "{}{}{}  {}  {}",
            idx_str.dimmed(),
            display,
            " ".repeat(padding),
            rating.yellow(),
            view.id.dimmed()
        );
    }
}

fn class_summary(view: &AttractionView) -> String {
    [
        view.environment_class.as_deref(),
        view.scenery_class.as_deref(),
        view.category_class.as_deref(),
    ]
    .iter()
    .flatten()
    .copied()
    .collect::<Vec<_>>()
    .join(" · ")
}

fn print_details(views: &[AttractionView]) {
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", view.name.bold());
        print_field("id", Some(view.id.clone()));
        print_field("rating", view.rating.map(|r| format!("{:.1}", r)));
        print_field("description", view.description.clone());
        print_field("photo", view.photo.clone());
        let location = match (view.lat, view.lon) {
            (Some(lat), Some(lon)) => Some(format!("{}, {}", lat, lon)),
            _ => None,
        };
        print_field("location", location);
        print_field("environment", view.environment_class.clone());
        print_field("scenery", view.scenery_class.clone());
        print_field("category", view.category_class.clone());
    }
}

fn print_field(label: &str, value: Option<String>) {
    let label = format!("  {:<width$}", label, width = LABEL_WIDTH);
    match value {
        Some(value) => println!("{}{}", label.dimmed(), value),
        None => println!("{}{}", label.dimmed(), "-".dimmed()),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
