//! Newsdesk CLI: browse news, favorites, and filters from the terminal

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use newsdesk::config::news::DEFAULT_SAMPLE_SIZE;
use newsdesk::model::{Article, ArticleId, CategoryId, FilterSelection};
use newsdesk_app::app::{self, AppContext, View};
use newsdesk_app::config::api::{BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
use newsdesk_app::config::app::LOG_ENV;
use newsdesk_app::error::Result;
use newsdesk_app::providers::ApiNewsSource;

#[derive(Parser)]
#[command(name = "newsdesk", about = "News browsing from the terminal", version)]
struct Cli {
    /// Directory holding persisted state (defaults to the user config directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Bearer token for the backend
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a path to its view; article views also show the article
    Route {
        path: String,
    },
    /// Fetch categories and articles from the backend
    Sync,
    /// Fetch articles and list them under the active filters
    Articles(ArticlesArgs),
    /// Manage favorite articles
    #[command(subcommand)]
    Favorite(FavoriteAction),
    /// Show or change the filter selection
    #[command(subcommand)]
    Filters(FiltersAction),
    /// List selectable categories
    Categories {
        /// Fetch the list from the backend first
        #[arg(long)]
        refresh: bool,
    },
}

#[derive(Args)]
struct ArticlesArgs {
    /// Only favorites among the fetched articles
    #[arg(long, conflicts_with = "random")]
    favorites: bool,

    /// A random sample of N articles (3 when N is omitted)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    random: Option<Option<usize>>,

    /// Ignore the active filters
    #[arg(long)]
    all: bool,
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Mark an article as favorite
    Add { id: ArticleId },
    /// Unmark an article
    Remove { id: ArticleId },
    /// Flip an article's favorite status
    Toggle { id: ArticleId },
    /// Print favorited ids
    List,
}

#[derive(Subcommand)]
enum FiltersAction {
    /// Print the active selection
    Show,
    /// Replace the selection; omitted fields become unset
    Set {
        #[arg(long)]
        category: Option<CategoryId>,
        #[arg(long)]
        city: Option<String>,
        /// date_desc, date_asc, or title
        #[arg(long)]
        sort: Option<String>,
    },
    /// Unset every field
    Clear,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = AppContext::open(cli.data_dir.clone())?;

    match cli.command {
        Command::Route { ref path } => {
            let Some(view) = ctx.navigate(path) else {
                println!("no route for {path}");
                return Ok(());
            };
            println!("{view}");

            if let View::News { id } | View::RequestPreview { id } = view {
                let source = source(&cli)?;
                match app::article_detail(&ctx, &source, id)? {
                    Some(article) => print_detail(&article),
                    None => println!("article {id} not found"),
                }
            }
        }
        Command::Sync => {
            let report = app::refresh(&mut ctx, &source(&cli)?)?;
            println!(
                "{} articles, {} categories, {} favorites loaded",
                report.articles, report.categories, report.liked
            );
        }
        Command::Articles(ref args) => {
            app::refresh(&mut ctx, &source(&cli)?)?;

            let articles = if args.favorites {
                ctx.news.list_favorites()
            } else if let Some(count) = args.random {
                ctx.news.sample_random(count.unwrap_or(DEFAULT_SAMPLE_SIZE))
            } else if args.all {
                ctx.news.articles().iter().collect()
            } else {
                ctx.visible_articles()
            };
            print_articles(&articles);
        }
        Command::Favorite(action) => match action {
            FavoriteAction::Add { id } => {
                if ctx.news.add_favorite(id) {
                    println!("added {id}");
                } else {
                    println!("{id} is already a favorite");
                }
            }
            FavoriteAction::Remove { id } => {
                ctx.news.remove_favorite(id);
                println!("removed {id}");
            }
            FavoriteAction::Toggle { id } => {
                let state = if ctx.news.toggle_favorite(id) { "on" } else { "off" };
                println!("{id}: favorite {state}");
            }
            FavoriteAction::List => {
                for id in ctx.news.favorites() {
                    println!("{id}");
                }
            }
        },
        Command::Filters(action) => {
            match action {
                FiltersAction::Show => {}
                FiltersAction::Set {
                    category,
                    city,
                    sort,
                } => ctx.categories.set_filters(FilterSelection {
                    category,
                    city,
                    sort,
                }),
                FiltersAction::Clear => ctx.categories.set_filters(FilterSelection::default()),
            }
            print_filters(&ctx);
        }
        Command::Categories { refresh } => {
            if refresh {
                app::refresh(&mut ctx, &source(&cli)?)?;
            }
            for category in ctx.categories.category_list() {
                println!("{:>5}  {}", category.id, category.title);
            }
        }
    }

    Ok(())
}

fn source(cli: &Cli) -> Result<ApiNewsSource> {
    let source = ApiNewsSource::new(&cli.api_url)?;
    Ok(match &cli.token {
        Some(token) => source.with_token(token),
        None => source,
    })
}

fn print_articles(articles: &[&Article]) {
    if articles.is_empty() {
        println!("no articles");
        return;
    }
    for article in articles {
        let date = article
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----------".to_string());
        let liked = if article.is_liked { '*' } else { ' ' };
        println!("{:>5} {} {}  {}", article.id, liked, date, article.title);
    }
}

fn print_detail(article: &Article) {
    println!("{}", article.title);
    if let Some(date) = article.date {
        println!("date: {date}");
    }
    if let Some(author) = &article.author {
        println!("author: {}", author.login);
    }
    if let Some(category) = &article.category {
        println!("category: {}", category.title);
    }
    println!("favorite: {}", if article.is_liked { "yes" } else { "no" });
    if !article.description.is_empty() {
        println!();
        println!("{}", article.description);
    }
}

fn print_filters(ctx: &AppContext) {
    let filters = ctx.categories.filters();
    let category = match filters.category {
        Some(id) => match ctx.categories.category_title(id) {
            Some(title) => format!("{id} ({title})"),
            None => id.to_string(),
        },
        None => "-".to_string(),
    };
    println!("category: {category}");
    println!("city:     {}", filters.city.as_deref().unwrap_or("-"));
    println!("sort:     {}", filters.sort.as_deref().unwrap_or("-"));
    if filters.sort.is_some() && filters.sort_order().is_none() {
        println!("          (unrecognized, load order is kept)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_random_without_count() {
        let cli = Cli::try_parse_from(["newsdesk", "articles", "--random"]).unwrap();
        match cli.command {
            Command::Articles(args) => assert_eq!(args.random, Some(None)),
            _ => panic!("expected articles command"),
        }
    }

    #[test]
    fn test_filters_set() {
        let cli = Cli::try_parse_from([
            "newsdesk", "filters", "set", "--category", "5", "--sort", "title",
        ])
        .unwrap();
        match cli.command {
            Command::Filters(FiltersAction::Set {
                category,
                city,
                sort,
            }) => {
                assert_eq!(category, Some(5));
                assert!(city.is_none());
                assert_eq!(sort.as_deref(), Some("title"));
            }
            _ => panic!("expected filters set"),
        }
    }
}
