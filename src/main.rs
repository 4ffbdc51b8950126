// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boothwalk-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boothwalk and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boothwalk CLI entrypoint.
//!
//! Loads one store (from a folder of catalog exports, or the built-in demo), replays the requested
//! search/selection/recommendation as visit events, and prints the catalog window and the route.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use boothwalk::config::NavigatorConfig;
use boothwalk::cursor::CursorState;
use boothwalk::demo::DemoCatalog;
use boothwalk::error::{Upstream, UpstreamError};
use boothwalk::model::{ProductId, StoreId};
use boothwalk::ops::{apply_op, Outcome, VisitOp};
use boothwalk::recommend::{RecommendationPeriod, RecommendationService};
use boothwalk::session::StoreVisit;
use boothwalk::store::{fetch_snapshot, CatalogService, FolderRecommender, StoreFolder};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<store-dir>] [--store <id>] [options]\n  {program} [--store-dir <dir>] [--store <id>] [options]\n  {program} --demo [options]\n\nOptions:\n  --config <path>          TOML settings (BOOTHWALK_* variables override it)\n  --search <text>          filter the catalog by product name or booth\n  --select <product-id>    add a product to the route (repeatable)\n  --pages <n>              number of catalog pages to show (default 1)\n  --recommend today|week   replace the selection with suggested products\n  -v, -vv                  log at info/debug level (BOOTHWALK_LOG otherwise)\n\nIf store-dir/--store-dir is omitted, the current working directory is used.\nIf --store is omitted, the directory must contain exactly one store.\n--demo uses a built-in sample store and cannot be combined with store-dir/--store."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    store_dir: Option<String>,
    store: Option<String>,
    config: Option<String>,
    search: Option<String>,
    select: Vec<String>,
    pages: Option<usize>,
    recommend: Option<RecommendationPeriod>,
    verbose: u8,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--store-dir" => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                options.store_dir = Some(args.next().ok_or(())?);
            }
            "--store" => {
                if options.store.is_some() {
                    return Err(());
                }
                options.store = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--search" => {
                if options.search.is_some() {
                    return Err(());
                }
                options.search = Some(args.next().ok_or(())?);
            }
            "--select" => options.select.push(args.next().ok_or(())?),
            "--pages" => {
                if options.pages.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let pages: usize = raw.parse().map_err(|_| ())?;
                if pages == 0 {
                    return Err(());
                }
                options.pages = Some(pages);
            }
            "--recommend" => {
                if options.recommend.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.recommend = Some(raw.parse().map_err(|_| ())?);
            }
            "-v" => options.verbose = options.verbose.saturating_add(1),
            "-vv" => options.verbose = options.verbose.saturating_add(2),
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.store_dir.is_some() {
                    return Err(());
                }
                options.store_dir = Some(arg);
            }
        }
    }

    if options.demo && (options.store_dir.is_some() || options.store.is_some()) {
        return Err(());
    }

    Ok(options)
}

/// Runs a blocking collaborator call off the event loop. A missed deadline counts as no response.
async fn call_upstream<T, F>(
    service: Upstream,
    deadline: Option<Duration>,
    call: F,
) -> Result<T, UpstreamError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, UpstreamError> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(call);
    let joined = match deadline {
        Some(deadline) => match tokio::time::timeout(deadline, task).await {
            Ok(joined) => joined,
            Err(_) => return Err(UpstreamError::NoResponse { service }),
        },
        None => task.await,
    };
    joined.map_err(|err| UpstreamError::failed(service, err.to_string()))?
}

type SharedCatalog = Arc<dyn CatalogService + Send + Sync>;
type SharedRecommender = Arc<dyn RecommendationService + Send + Sync>;

fn resolve_store(
    folder: &StoreFolder,
    requested: Option<String>,
) -> Result<StoreId, Box<dyn Error>> {
    if let Some(id) = requested {
        return Ok(StoreId::new(id)?);
    }
    let mut stores = folder.list_stores()?;
    match stores.len() {
        1 => Ok(stores.remove(0)),
        0 => Err(format!("no stores found in {}", folder.root().display()).into()),
        _ => {
            let ids = stores.iter().map(StoreId::as_str).collect::<Vec<_>>().join(", ");
            Err(format!("several stores found ({ids}); pick one with --store").into())
        }
    }
}

async fn run(options: CliOptions, config: NavigatorConfig) -> Result<(), Box<dyn Error>> {
    let store_id: StoreId;
    let catalog: SharedCatalog;
    let recommender: SharedRecommender;
    if options.demo {
        let demo = Arc::new(DemoCatalog::new()?);
        store_id = demo.store_id().clone();
        catalog = demo.clone();
        recommender = demo;
    } else {
        let dir = options.store_dir.clone().unwrap_or_else(|| ".".to_owned());
        let folder = StoreFolder::new(dir);
        store_id = resolve_store(&folder, options.store.clone())?;
        recommender = Arc::new(FolderRecommender::new(folder.clone()));
        catalog = Arc::new(folder);
    }

    let deadline = config.upstream_timeout();
    let mut visit = StoreVisit::new(store_id.clone(), &config);
    let (tx, mut rx) = mpsc::unbounded_channel::<VisitOp>();

    let token = visit.begin_catalog_fetch();
    {
        let tx = tx.clone();
        let catalog = catalog.clone();
        let store_id = store_id.clone();
        tokio::spawn(async move {
            let result = call_upstream(Upstream::Catalog, deadline, move || {
                fetch_snapshot(catalog.as_ref(), &store_id)
            })
            .await;
            let _ = tx.send(VisitOp::CatalogLoaded { token, result });
        });
    }
    let op = rx.recv().await.ok_or("catalog loader stopped")?;
    apply_op(&mut visit, op)?;

    if let Some(text) = options.search {
        apply_op(&mut visit, VisitOp::SetSearchQuery { text, token: None })?;
    }
    for _ in 1..options.pages.unwrap_or(1) {
        apply_op(&mut visit, VisitOp::RequestMore)?;
    }
    for id in options.select {
        let product_id = ProductId::new(id)?;
        apply_op(&mut visit, VisitOp::ToggleProduct { product_id })?;
    }

    if let Some(period) = options.recommend {
        let request = visit.begin_recommendation(period);
        let token = request.token;
        let recommender = recommender.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = call_upstream(Upstream::Recommendation, deadline, move || {
                recommender.recommend(&request)
            })
            .await;
            let _ = tx.send(VisitOp::RecommendationReceived { token, result });
        });
        let op = rx.recv().await.ok_or("recommendation task stopped")?;
        match apply_op(&mut visit, op) {
            Ok(Outcome::Applied(_)) => println!("{}", recommendation_summary(&visit, period)),
            Ok(_) => {}
            Err(err) => eprintln!("boothwalk: no recommendations: {err}"),
        }
    }

    print_visit(&visit);
    Ok(())
}

/// Counts the whole selection, including recommended products that were already picked.
fn recommendation_summary(visit: &StoreVisit, period: RecommendationPeriod) -> String {
    format!(
        "Recommended {} product(s) for {period}.",
        visit.selection().len()
    )
}

fn print_visit(visit: &StoreVisit) {
    let store = visit.store();
    match &store.address {
        Some(address) => println!("{} ({address})", store.name),
        None => println!("{}", store.name),
    }

    let cursor = visit.cursor();
    if let Some(err) = cursor.filter_error() {
        println!("Search {:?} matches nothing: {err}", cursor.query());
    }
    let visible = visit.visible_products();
    println!(
        "\nProducts {} of {} (page {}{}):",
        visible.len(),
        cursor.filtered_count(),
        cursor.page_number(),
        match cursor.state() {
            CursorState::Loadable => ", more available",
            CursorState::Idle => "",
        }
    );
    for product in visible {
        let mark = if visit.selection().is_selected(product.product_id()) {
            "x"
        } else {
            " "
        };
        println!(
            "  [{mark}] {:<6} {:<24} {:>8}  {}",
            product.product_id().as_str(),
            product.name(),
            product.price().to_string(),
            product.booth()
        );
    }

    let route = visit.route();
    if route.is_empty() {
        println!("\nNo products selected.");
        return;
    }
    println!("\n{}", route.starting_point());
    for step in route.steps() {
        println!("  {}. {}", step.index(), step.direction());
    }
    println!("{}", route.closing_direction());
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "boothwalk".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        boothwalk::logging::init(options.verbose);
        let config = NavigatorConfig::load(options.config.as_deref().map(Path::new))?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(options, config))
    })();
    if let Err(err) = result {
        eprintln!("boothwalk: {err}");
        std::process::exit(1);
    }
}
