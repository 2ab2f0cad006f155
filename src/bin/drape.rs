use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "drape", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog JSON to use instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog garments (closet view).
    Catalog(CatalogArgs),
    /// Print one garment's details.
    Show(ShowArgs),
    /// Run a complete try-on session from a photo file and write the composite JPEG.
    TryOn(TryOnArgs),
    /// Rasterize a placeholder-image URL to PNG.
    Placeholder(PlaceholderArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only this category (tops, outerwear, dresses).
    #[arg(long)]
    category: Option<drape::Category>,

    /// Only this brand (exact match).
    #[arg(long)]
    brand: Option<String>,

    /// Case-insensitive substring of name or brand.
    #[arg(long, default_value = "")]
    search: String,

    /// Sort key (name, price, brand).
    #[arg(long, default_value = "name")]
    sort: drape::SortKey,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Garment id, e.g. `top-001`.
    id: String,
}

#[derive(Parser, Debug)]
struct TryOnArgs {
    /// Body photo (any format `image` can decode).
    #[arg(long)]
    photo: PathBuf,

    /// Garment id.
    #[arg(long)]
    garment: String,

    /// Colorway id; defaults to the garment's first colorway.
    #[arg(long)]
    colorway: Option<String>,

    /// Size chart label; defaults to the garment's second size entry.
    #[arg(long)]
    size: Option<String>,

    /// Output JPEG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the simulated processing delay.
    #[arg(long)]
    no_delay: bool,
}

#[derive(Parser, Debug)]
struct PlaceholderArgs {
    /// URL of the form `/api/placeholder/{w}/{h}[/{bg}[/{fg}]][?text=...]`.
    url: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(&catalog, args),
        Command::Show(args) => cmd_show(&catalog, args),
        Command::TryOn(args) => cmd_try_on(catalog, args),
        Command::Placeholder(args) => cmd_placeholder(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Arc<drape::Catalog>> {
    let catalog = match path {
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("open catalog '{}'", path.display()))?;
            drape::Catalog::from_reader(std::io::BufReader::new(f))
                .with_context(|| format!("load catalog '{}'", path.display()))?
        }
        None => drape::Catalog::builtin().context("load built-in catalog")?,
    };
    Ok(Arc::new(catalog))
}

fn cmd_catalog(catalog: &drape::Catalog, args: CatalogArgs) -> anyhow::Result<()> {
    let query = drape::ClosetQuery {
        search: args.search,
        category: args.category,
        brand: args.brand,
        sort: args.sort,
    };
    let view = query.apply(catalog);

    if args.json {
        let json = serde_json::to_string_pretty(&view.items).context("serialize garments")?;
        println!("{json}");
        return Ok(());
    }

    for g in &view.items {
        println!(
            "{:<10} {:<28} {:<13} {:<10} {:>8.2}",
            g.id, g.name, g.brand, g.category, g.price
        );
    }
    eprintln!("{}", view.summary());
    Ok(())
}

fn cmd_show(catalog: &drape::Catalog, args: ShowArgs) -> anyhow::Result<()> {
    let g = catalog
        .by_id(&args.id)
        .with_context(|| format!("unknown garment '{}'", args.id))?;

    println!("{} ({})", g.name, g.id);
    println!("  sku:       {}", g.sku);
    println!("  brand:     {}", g.brand);
    println!("  category:  {} / {}", g.category, g.subcategory);
    println!("  price:     {:.2}", g.price);
    println!("  material:  {}", g.material);
    println!("  colorways:");
    for c in &g.colorways {
        println!("    {:<22} {:<12} {}", c.id, c.name, c.hex_code);
    }
    println!("  sizes:");
    for label in g.size_labels() {
        if let Some(s) = g.size_for_label(label) {
            println!(
                "    {label:<3} chest {:>5.1}  length {:>5.1}  sleeve {:>4.1}  {:?}",
                s.chest, s.length, s.sleeve, s.fit
            );
        }
    }
    Ok(())
}

fn cmd_try_on(catalog: Arc<drape::Catalog>, args: TryOnArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => drape::DrapeConfig::load(path)?,
        None => drape::DrapeConfig::default(),
    };
    if args.no_delay {
        config.overlay = config.overlay.without_delay();
    }
    let renderer = drape::OverlayRenderer::new(config.overlay.clone())?;

    let camera = drape::StillImageCamera::open_path(&args.photo)
        .with_context(|| format!("load photo '{}'", args.photo.display()))?;
    let mut session = drape::TryOnSession::from_config(catalog, Box::new(camera), &config)?;
    if let Some(err) = session.camera_error() {
        anyhow::bail!("camera unavailable: {err}");
    }

    let check = session.capture_photo()?;
    eprintln!("pose quality score {}", check.score);
    for w in &check.warnings {
        eprintln!("  warning: {w}");
    }
    for a in session.measurements().advisories() {
        eprintln!("  note: {}", a.message);
    }

    session.continue_to_selection()?;
    session.select_garment(&args.garment)?;
    if let Some(id) = &args.colorway {
        session.select_colorway(id)?;
    }
    if let Some(label) = &args.size {
        session.select_size(label)?;
    }

    if !session.generate_try_on(&renderer)? {
        anyhow::bail!("garment '{}' cannot be tried on (no colorway or size)", args.garment);
    }
    let image = session
        .result_image()
        .context("session finished without a result image")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &image.bytes)
        .with_context(|| format!("write jpeg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_placeholder(args: PlaceholderArgs) -> anyhow::Result<()> {
    let spec = drape::PlaceholderSpec::parse(&args.url)?;
    let img = spec.rasterize();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
