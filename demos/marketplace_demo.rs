//! Walks through the containers the way a farming marketplace front end
//! uses them: a rate-limited request queue, form undo history, a role menu
//! and a price comparison.
//!
//! Run with `cargo run --example marketplace_demo`.

use anyhow::{bail, Context, Result};
use furrow::{
    MenuTree, PriceComparisonGraph, PriceNode, PriorityQueue, Queue, UndoRedoManager,
};
use serde::Deserialize;

const MENU: &str = r#"[
    {"id": "dashboard", "label": "Dashboard", "path": "/", "roles": ["farmer", "buyer"]},
    {"id": "crops", "label": "My crops", "path": "/crops", "roles": ["farmer"],
     "children": [{"id": "crops-new", "label": "Add crop", "path": "/crops/new", "roles": ["farmer"]}]},
    {"id": "market", "label": "Market", "path": "/market", "roles": ["buyer"],
     "children": [{"id": "compare", "label": "Compare prices", "path": "/compare", "roles": ["buyer"]}]}
]"#;

const OFFERS: &str = r#"[
    {"storeId": "s1", "storeName": "North Agro", "inputId": "npk-20", "price": 50.0},
    {"storeId": "s2", "storeName": "Valley Supply", "inputId": "npk-20", "price": 30.0},
    {"storeId": "s3", "storeName": "Farm Depot", "inputId": "npk-20", "price": 40.0},
    {"storeId": "s2", "storeName": "Valley Supply", "inputId": "maize-seed", "price": 18.5}
]"#;

#[derive(Debug, Deserialize)]
struct CropForm {
    name: String,
    hectares: f32,
}

fn request_queue() {
    println!("== AI request queue ==");
    let mut pending = Queue::new();
    for prompt in ["soil report", "pest photo", "yield forecast", "weather"] {
        pending.enqueue(prompt);
    }
    let per_tick = 2;
    let mut tick = 0;
    while !pending.is_empty() {
        tick += 1;
        let batch: Vec<_> = (0..per_tick).filter_map(|_| pending.dequeue()).collect();
        println!("tick {tick}: sending {batch:?}");
    }

    let mut retries = PriorityQueue::new();
    retries.enqueue("POST /orders", 0);
    retries.enqueue("GET /crops", 2);
    retries.enqueue("PUT /cart", 1);
    while let Some((request, attempt)) = retries.dequeue_with_priority() {
        println!("retry #{attempt}: {request}");
    }
}

fn form_history() -> Result<()> {
    println!("== Crop form undo ==");
    let mut history = UndoRedoManager::new(10);
    for snapshot in [
        r#"{"name": "Maize", "hectares": 1.0}"#,
        r#"{"name": "Maize", "hectares": 2.5}"#,
        r#"{"name": "Sorghum", "hectares": 2.5}"#,
    ] {
        let form: CropForm = serde_json::from_str(snapshot).context("parsing form snapshot")?;
        history.execute(snapshot);
        println!("typed: {} on {} ha", form.name, form.hectares);
    }

    if let Some(undone) = history.undo() {
        println!("undo -> dropped {undone}");
    }
    let current = history
        .current_state()
        .context("history should not be empty after one undo")?;
    let form: CropForm = serde_json::from_str(current)?;
    println!("form shows: {} on {} ha (redo available: {})", form.name, form.hectares, history.can_redo());
    Ok(())
}

fn menus() -> Result<()> {
    println!("== Role menus ==");
    let menu = MenuTree::from_json(MENU)?;
    for role in ["farmer", "buyer"] {
        let items = menu.menu_for_role(role);
        let rendered = serde_json::to_string(&items)?;
        println!("{role}: {rendered}");
    }
    println!("breadcrumbs: {}", menu.breadcrumbs("compare").join(" > "));
    Ok(())
}

fn price_comparison() -> Result<()> {
    println!("== Price comparison ==");
    let offers: Vec<PriceNode> = serde_json::from_str(OFFERS)?;
    let mut prices = PriceComparisonGraph::new();
    for offer in offers {
        prices.add_store(offer);
    }

    let pairs = prices.connect_stores_by_same_input("npk-20");
    println!("linked {pairs} offer pairs for npk-20");

    let best = prices.find_best_prices("npk-20", 2);
    if best.is_empty() {
        bail!("no offers for npk-20");
    }
    for node in &best {
        println!("{} sells npk-20 at {:.2}", node.store_name, node.price);
    }
    if let Some((lo, hi)) = prices.price_range("npk-20") {
        println!("spread: {lo:.2} - {hi:.2}");
    }
    for (alt, gap) in prices.alternatives("s1", "npk-20") {
        println!("instead of North Agro: {} (price gap {gap:.2})", alt.store_name);
    }
    Ok(())
}

fn main() -> Result<()> {
    request_queue();
    form_history()?;
    menus()?;
    price_comparison()?;
    Ok(())
}
