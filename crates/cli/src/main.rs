use anyhow::{Context, Result, anyhow};
use catalog::parser::load_profile_file;
use catalog::{CatalogSource, CollegeRecord, ExamKind, JsonFileSource, StaticSource, StudentProfile};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{DEFAULT_LIMIT, RankingMode, parse_fees};
use service::service::ranking_mode;
use service::{CollegeRecommendation, RecommendationService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// College Recs - college recommendations for engineering applicants
#[derive(Parser)]
#[command(name = "college-recs")]
#[command(about = "Rank colleges for a student profile", long_about = None)]
struct Cli {
    /// Path to a college catalog JSON file (defaults to the bundled dataset)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get college recommendations for a student profile
    Recommend {
        /// Student profile JSON (form fields); omit for top-rated colleges
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Show one college from the catalog
    College {
        /// College id (e.g. "nit-trichy")
        #[arg(long)]
        id: String,
    },

    /// Search for colleges by name
    Search {
        /// Name to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let primary: Arc<dyn CatalogSource> = match &cli.catalog {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(StaticSource),
    };
    let service = RecommendationService::new(primary).with_fallback(Arc::new(StaticSource));

    let start = Instant::now();
    let catalog = service.catalog().await.context("Failed to load college catalog")?;
    println!(
        "{} Loaded {} colleges in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            profile,
            limit,
            explain,
        } => handle_recommend(&service, profile, limit, explain).await?,
        Commands::College { id } => handle_college(&service, &id).await?,
        Commands::Search { name } => handle_search(&service, &name).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &RecommendationService,
    profile_path: Option<PathBuf>,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let profile = profile_path
        .map(|path| {
            load_profile_file(&path)
                .with_context(|| format!("Failed to read profile {}", path.display()))
        })
        .transpose()?;

    match ranking_mode(profile.as_ref()) {
        RankingMode::Personalized => {
            println!("{}", "Recommended for you:".bold().blue());
            if let Some(profile) = &profile {
                print_profile_summary(profile);
            }
        }
        RankingMode::TopRated => {
            println!("{}", "Top rated colleges (no profile signals):".bold().blue());
        }
    }

    let recommendations = service.recommend(profile, limit).await?;
    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'college' command
async fn handle_college(service: &RecommendationService, id: &str) -> Result<()> {
    let catalog = service.catalog().await?;
    let college = catalog
        .get(id)
        .ok_or_else(|| anyhow!("College {} not found", id))?;

    print_college(college);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(service: &RecommendationService, name: &str) -> Result<()> {
    let catalog = service.catalog().await?;
    let matches = catalog.search(name);

    println!("{}", format!("Search results for '{}':", name).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for college in matches.iter().take(20) {
        println!(
            "{}: {} [{}] rating {}",
            college.id,
            college.name,
            college.state.as_deref().unwrap_or("-"),
            college
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string())
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: RecommendationService,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    info!(
        "Running {} requests with concurrency {}",
        requests, concurrent
    );
    let semaphore = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let service = service.clone();
        let semaphore = Arc::clone(&semaphore);
        let profile = random_profile();
        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let start = Instant::now();
            service.recommend(profile, DEFAULT_LIMIT).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p).round() as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// A random mix of exams and home states, sometimes with no profile at all
fn random_profile() -> Option<StudentProfile> {
    const STATES: [&str; 6] = ["Karnataka", "Tamil Nadu", "Maharashtra", "Delhi", "West Bengal", "Rajasthan"];

    if rand::random::<u32>() % 5 == 0 {
        return None;
    }

    let mut profile = StudentProfile::new();
    for exam in ExamKind::ALL {
        if rand::random::<u32>() % 4 == 0 {
            profile = profile.with_exam(exam, (rand::random::<u32>() % 100 + 1).to_string());
        }
    }
    if rand::random::<bool>() {
        profile = profile.with_home_state(STATES[rand::random::<u32>() as usize % STATES.len()]);
    }
    Some(profile)
}

fn print_profile_summary(profile: &StudentProfile) {
    let exams = profile
        .exams()
        .map(|(exam, _)| exam.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if !exams.is_empty() {
        println!("{}Exams: {}", "• ".green(), exams);
    }
    if let Some(state) = profile.home_state() {
        println!("{}Home state: {}", "• ".green(), state);
    }
}

fn print_college(college: &CollegeRecord) {
    println!("{}", college.name.bold().blue());
    println!("{}Id: {}", "• ".green(), college.id);

    let location = [college.city.as_deref(), college.state.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    if !location.is_empty() {
        println!("{}Location: {}", "• ".green(), location);
    }
    if let Some(kind) = &college.college_type {
        println!("{}Type: {}", "• ".green(), kind);
    }
    if !college.entrance_exams.is_empty() {
        println!("{}Entrance exams: {}", "• ".green(), college.entrance_exams.join(", "));
    }
    if let Some(fees) = &college.fees {
        match parse_fees(fees) {
            Some(lakhs) => println!("{}Fees: {} ({} lakhs)", "• ".cyan(), fees, lakhs),
            None => println!("{}Fees: {}", "• ".cyan(), fees),
        }
    }
    if let Some(package) = &college.avg_package {
        println!("{}Average package: {}", "• ".cyan(), package);
    }
    if let Some(placement) = college.placement_percent {
        println!("{}Placement: {:.0}%", "• ".cyan(), placement);
    }
    if let Some(rating) = college.rating {
        println!("{}Rating: {:.1}/5", "• ".cyan(), rating);
    }
    match college.nirf_rank {
        Some(rank) if rank > 0 => println!("{}NIRF rank: {}", "• ".cyan(), rank),
        _ => println!("{}NIRF rank: unranked", "• ".cyan()),
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[CollegeRecommendation], explain: bool) {
    if recommendations.is_empty() {
        println!("  (catalog is empty)");
    }
    for (i, rec) in recommendations.iter().enumerate() {
        let rank = i + 1;
        let location = rec.state.as_deref().unwrap_or("-");
        let score = rec
            .score
            .map(|s| format!(" - Score: {:.1}", s))
            .unwrap_or_default();
        println!(
            "{}. {} ({}) [{}]{}",
            rank.to_string().green(),
            rec.name,
            rec.id,
            location,
            score
        );
        if explain {
            println!("   {}", rec.explanation);
        }
    }
}
