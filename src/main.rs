use clap::{Parser, Subcommand};
use reddit_oracle::{
    config::Settings,
    models::{Prediction, RedditPost},
    schedule::{self, format_duration, DeadlineScheduler},
    scoring::{streak_multiplier, ScoreCalculator},
};
use chrono::{Duration, Utc};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "reddit-oracle")]
#[clap(about = "Score predictions for the daily top post on r/popular", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a prediction against the actual top post
    Score {
        /// Username of the predictor
        #[clap(short, long)]
        user: String,

        /// Predicted subreddit
        #[clap(short, long)]
        subreddit: String,

        /// Predicted post title
        #[clap(short, long)]
        title: String,

        /// Reasoning for the prediction (display only)
        #[clap(long, default_value = "")]
        reason: String,

        /// Path to a JSON file holding the actual top post
        #[clap(short, long)]
        post_file: PathBuf,

        /// Current consecutive-day streak
        #[clap(long, default_value_t = 0)]
        streak: u32,
    },

    /// Show the submission window and countdown
    Status {
        /// Evaluate at this RFC 3339 instant instead of now
        #[clap(long)]
        at: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    info!("{} v{}", settings.app.name, settings.app.version);

    match cli.command {
        Commands::Score {
            user,
            subreddit,
            title,
            reason,
            post_file,
            streak,
        } => {
            let post = RedditPost::from_json_file(&post_file)?;
            info!("Loaded reference post from r/{}", post.subreddit);

            let prediction = Prediction::new(user.clone(), subreddit, title, reason);
            let multiplier = streak_multiplier(streak, settings.scoring.streak_bonus_per_day);

            let calculator = ScoreCalculator::new(&settings.scoring);
            let breakdown = calculator.score(&prediction, &post, multiplier);

            println!("\n=== Prediction Score ===");
            println!("User: {}", user);
            println!("Actual top post: r/{} - {}", post.subreddit, post.title);
            println!("Total: {} points", breakdown.total);
            println!("\nBreakdown:");
            println!("  Participation: {}", breakdown.participation);
            println!("  Subreddit: {}", breakdown.subreddit_points);
            println!("  Title: {}", breakdown.title_points);
            println!("  Streak bonus: {}", breakdown.streak_bonus);
        }

        Commands::Status { at } => {
            let now = match at {
                Some(raw) => schedule::parse_instant(&raw)?,
                None => Utc::now(),
            };

            let scheduler = DeadlineScheduler::new(&settings.deadline);
            let status = scheduler.status(now);

            println!("\n=== Submission Window ===");
            println!("Challenge date: {}", status.challenge_date);
            if let Some(day) = status.day_number {
                println!("Day number: {}", day);
            }
            println!(
                "Predictions: {}",
                if status.is_open { "OPEN" } else { "CLOSED" }
            );
            println!("Next deadline: {}", status.deadline);

            let remaining = status.time_remaining;
            println!(
                "Time remaining: {:02}:{:02}:{:02} ({})",
                remaining.hours,
                remaining.minutes,
                remaining.seconds,
                format_duration(Duration::seconds(remaining.total_seconds()))
            );
        }
    }

    Ok(())
}
